//! Standard page size presets.

use crate::error::LayoutError;

/// A named page size in millimeters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSize {
    /// Preset name, e.g. `"A4"`.
    pub name: &'static str,
    /// Width in millimeters.
    pub width: f64,
    /// Height in millimeters.
    pub height: f64,
}

/// Presets offered by the page setup form, smallest first.
#[rustfmt::skip]
pub const PAGE_SIZES: [PageSize; 4] = [
    PageSize { name: "A5", width: 148.0, height: 210.0 },
    PageSize { name: "A4", width: 210.0, height: 297.0 },
    PageSize { name: "A3", width: 297.0, height: 420.0 },
    PageSize { name: "A2", width: 420.0, height: 594.0 },
];

impl PageSize {
    /// Looks up a preset by name, ignoring ASCII case.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::UnknownPreset`] if no preset has that name.
    pub fn from_name(name: &str) -> Result<Self, LayoutError> {
        PAGE_SIZES
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name.trim()))
            .copied()
            .ok_or_else(|| LayoutError::UnknownPreset {
                name: name.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        let a4 = PageSize::from_name("a4").unwrap();
        assert_eq!(a4.width, 210.0);
        assert_eq!(a4.height, 297.0);
        assert_eq!(PageSize::from_name(" A5 ").unwrap().width, 148.0);
    }

    #[test]
    fn unknown_preset() {
        assert_eq!(
            PageSize::from_name("Letter").unwrap_err(),
            LayoutError::UnknownPreset {
                name: "Letter".to_string()
            }
        );
    }

    #[test]
    fn presets_grow() {
        for pair in PAGE_SIZES.windows(2) {
            assert!(pair[0].width < pair[1].width);
            assert!(pair[0].height < pair[1].height);
        }
    }
}
