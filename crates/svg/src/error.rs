//! Error types for planner-svg.

/// Error type for SVG serialization.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SvgError {
    /// Returned when the output sink rejects a write.
    #[error("failed to write SVG: {reason}")]
    Io {
        /// Description of the underlying I/O failure.
        reason: String,
    },

    /// Returned when the serialized document is not valid UTF-8.
    #[error("SVG output is not valid UTF-8: {reason}")]
    Utf8 {
        /// Description of the decoding failure.
        reason: String,
    },

    /// Returned when an element references a mask the tree does not define.
    #[error("undefined mask: {id:?}")]
    UndefinedMask {
        /// The referenced mask id.
        id: String,
    },
}

impl From<std::io::Error> for SvgError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            reason: err.to_string(),
        }
    }
}

impl From<std::string::FromUtf8Error> for SvgError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        Self::Utf8 {
            reason: err.to_string(),
        }
    }
}
