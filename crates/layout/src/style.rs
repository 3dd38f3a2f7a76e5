//! Presentation attributes for text and line primitives.

/// Font weight of a text run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

impl FontWeight {
    /// Bold when `bold` is set, normal otherwise.
    pub fn bold_if(bold: bool) -> Self {
        if bold { Self::Bold } else { Self::Normal }
    }
}

/// Horizontal alignment of a text run relative to its `x` coordinate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

/// Vertical alignment of a text run relative to its `y` coordinate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Baseline {
    /// `y` is the alphabetic baseline.
    #[default]
    Alphabetic,
    /// `y` is the top of the glyphs.
    Hanging,
}

/// Font and fill settings shared by text runs.
///
/// # Example
///
/// ```
/// use planner_layout::{FontWeight, TextAnchor, TextStyle};
///
/// let style = TextStyle::new("Arial", 4.0, "#333")
///     .with_weight(FontWeight::Bold)
///     .with_anchor(TextAnchor::Middle);
/// assert_eq!(style.weight, FontWeight::Bold);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    /// Font family name.
    pub family: String,
    /// Font size in millimeters.
    pub size: f64,
    /// Normal or bold.
    pub weight: FontWeight,
    /// CSS fill color.
    pub color: String,
    /// Horizontal alignment at `x`.
    pub anchor: TextAnchor,
    /// Vertical alignment at `y`.
    pub baseline: Baseline,
}

impl TextStyle {
    /// Normal-weight, start-anchored text on the alphabetic baseline.
    pub fn new(family: impl Into<String>, size: f64, color: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            size,
            weight: FontWeight::Normal,
            color: color.into(),
            anchor: TextAnchor::Start,
            baseline: Baseline::Alphabetic,
        }
    }

    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn with_baseline(mut self, baseline: Baseline) -> Self {
        self.baseline = baseline;
        self
    }
}

/// Stroke settings for line primitives.
#[derive(Debug, Clone, PartialEq)]
pub struct LineStyle {
    /// CSS stroke color.
    pub color: String,
    /// Stroke width in millimeters.
    pub width: f64,
}

impl LineStyle {
    pub fn new(color: impl Into<String>, width: f64) -> Self {
        Self {
            color: color.into(),
            width,
        }
    }
}
