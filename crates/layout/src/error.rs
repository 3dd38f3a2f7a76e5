//! Error types for planner-layout.

/// Error type for the fallible entry points of the planner-layout crate.
///
/// The geometry itself never fails; errors only arise while decoding a
/// parameter snapshot, resolving a page preset, or generating the calendar
/// data a page is built from.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LayoutError {
    /// Wraps an error originating from the planner-calendar crate.
    #[error("calendar error: {reason}")]
    Calendar {
        /// Description of the underlying calendar failure.
        reason: String,
    },

    /// Returned when a serialized parameter object cannot be decoded.
    #[error("invalid parameters: {reason}")]
    Parameters {
        /// Description of the decoding failure.
        reason: String,
    },

    /// Returned when a page size preset name is not known.
    #[error("unknown page size preset: {name:?}")]
    UnknownPreset {
        /// The preset name that was requested.
        name: String,
    },
}

impl From<planner_calendar::CalendarError> for LayoutError {
    fn from(err: planner_calendar::CalendarError) -> Self {
        Self::Calendar {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_calendar_from() {
        let err: LayoutError = planner_calendar::CalendarError::InvalidMonth { month: 0 }.into();
        assert_eq!(
            err.to_string(),
            "calendar error: invalid month: 0 (must be 1..=12)"
        );
    }

    #[test]
    fn error_unknown_preset() {
        let err = LayoutError::UnknownPreset {
            name: "B5".to_string(),
        };
        assert_eq!(err.to_string(), "unknown page size preset: \"B5\"");
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<LayoutError>();
    }
}
