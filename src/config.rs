use std::path::PathBuf;

use serde::Deserialize;

/// Top-level planner configuration.
///
/// Every field is optional; unset values keep the parameter defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlannerConfig {
    /// Month and language.
    #[serde(default)]
    pub calendar: CalendarToml,

    /// Page size.
    #[serde(default)]
    pub page: PageToml,

    /// Background image and fade.
    #[serde(default)]
    pub background: BackgroundToml,

    /// Font families and sizes.
    #[serde(default)]
    pub typography: TypographyToml,

    /// Offsets, margins and paddings in millimeters.
    #[serde(default)]
    pub dimensions: DimensionsToml,

    /// Colors as CSS color strings.
    #[serde(default)]
    pub colors: ColorsToml,

    /// Output settings.
    #[serde(default)]
    pub output: OutputToml,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalendarToml {
    pub lang: Option<String>,
    pub year: Option<i32>,
    pub month: Option<u32>,
    /// One column per entry, left to right.
    #[serde(default)]
    pub sections: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PageToml {
    /// Preset name; `width`/`height` override it.
    pub preset: Option<String>,
    pub width: Option<f64>,
    pub height: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BackgroundToml {
    /// Image URL, data URI or file path.
    pub image: Option<String>,
    #[serde(default)]
    pub y: f64,
    /// Defaults to 40% of the page height.
    pub gradient_stop_end: Option<f64>,
    pub attribution: Option<AttributionToml>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AttributionToml {
    pub name: String,
    pub photo_url: String,
    #[serde(default)]
    pub profile_url: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TypographyToml {
    pub month_font_family: Option<String>,
    pub month_font_size: Option<f64>,
    pub header_font_size: Option<f64>,
    pub content_font_family: Option<String>,
    pub content_font_size: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DimensionsToml {
    pub month_bottom_margin: Option<f64>,
    pub header_padding: Option<f64>,
    pub content_start: Option<f64>,
    pub content_horizontal_margin: Option<f64>,
    pub day_number_start: Option<f64>,
    pub day_name_start: Option<f64>,
    pub day_lines_start: Option<f64>,
    pub day_vertical_padding: Option<f64>,
    pub plan_line_margin: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColorsToml {
    pub month_font: Option<String>,
    pub header_font: Option<String>,
    pub header_background: Option<String>,
    pub content_font: Option<String>,
    pub line: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputToml {
    pub path: Option<PathBuf>,
    #[serde(default = "default_interactive")]
    pub interactive: bool,
}

impl Default for OutputToml {
    fn default() -> Self {
        Self {
            path: None,
            interactive: default_interactive(),
        }
    }
}

fn default_interactive() -> bool {
    false
}
