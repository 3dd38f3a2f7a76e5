//! The planner parameter snapshot consumed by the layout engine.

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;
use crate::page::PageSize;
use crate::sections::parse_sections;

/// Default fade end as a fraction of the page height.
pub const DEFAULT_FADE_FRACTION: f64 = 0.4;

/// Photo credit for the background image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attribution {
    /// Page of the photo on the image provider.
    pub photo_url: String,
    /// Photographer.
    pub user: AttributionUser,
}

/// Photographer named in an [`Attribution`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributionUser {
    /// Display name.
    pub name: String,
    /// Profile page on the image provider.
    pub profile_url: String,
}

impl Attribution {
    /// One-line credit, e.g. `Photo by Jane Doe (https://...)`.
    pub fn credit(&self) -> String {
        format!("Photo by {} ({})", self.user.name, self.photo_url)
    }
}

/// Immutable snapshot of every user-tunable planner setting.
///
/// All lengths are in millimeters. The serialized form is the flat
/// camelCase key-value object the editing form persists; missing keys take
/// their [`Default`] values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlannerParameters {
    /// BCP-47 tag used for weekday and month names.
    pub lang: String,
    /// Calendar year.
    pub year: i32,
    /// Month, 1..=12.
    pub month: u32,

    pub page_width: f64,
    pub page_height: f64,

    /// Background image reference (URL or data URI).
    pub background: Option<String>,
    /// Vertical offset of the background image.
    pub background_y: f64,
    /// Vertical position where the fade mask becomes fully transparent.
    pub background_gradient_stop_end: f64,
    /// Photo credit for `background`. Display only.
    pub attribution: Option<Attribution>,

    /// Comma-separated section names, one column per name.
    pub sections: String,

    pub month_font_family: String,
    pub month_font_size: f64,
    pub month_font_color: String,
    pub month_bottom_margin: f64,

    pub header_font_size: f64,
    pub header_font_color: String,
    pub header_background: String,
    pub header_padding: f64,

    pub content_font_family: String,
    pub content_font_size: f64,
    pub content_font_color: String,
    /// Top of the grid content, measured from the top of the page.
    pub content_start: f64,
    /// Total horizontal margin around the day grid, split evenly left/right.
    pub content_horizontal_margin: f64,
    pub day_number_start: f64,
    pub day_name_start: f64,
    pub day_lines_start: f64,
    pub day_vertical_padding: f64,
    /// Gap between neighbouring section columns.
    pub plan_line_margin: f64,

    pub line_color: String,
}

impl Default for PlannerParameters {
    fn default() -> Self {
        Self {
            lang: "en-US".to_string(),
            year: 2024,
            month: 1,
            page_width: 210.0,
            page_height: 297.0,
            background: None,
            background_y: 0.0,
            background_gradient_stop_end: 297.0 * DEFAULT_FADE_FRACTION,
            attribution: None,
            sections: String::new(),
            month_font_family: "Arial".to_string(),
            month_font_size: 11.0,
            month_font_color: "#333".to_string(),
            month_bottom_margin: 12.0,
            header_font_size: 4.0,
            header_font_color: "#333".to_string(),
            header_background: "#d2e4f2".to_string(),
            header_padding: 1.2,
            content_font_family: "Arial".to_string(),
            content_font_size: 4.0,
            content_font_color: "#333".to_string(),
            content_start: 80.0,
            content_horizontal_margin: 26.0,
            day_number_start: 0.1,
            day_name_start: 10.0,
            day_lines_start: 30.0,
            day_vertical_padding: 1.0,
            plan_line_margin: 8.0,
            line_color: "#888".to_string(),
        }
    }
}

impl PlannerParameters {
    /// Decodes a snapshot from the flat JSON object the editing form stores.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::Parameters`] if `json` is not a valid object
    /// or a field has the wrong type.
    pub fn from_json(json: &str) -> Result<Self, LayoutError> {
        serde_json::from_str(json).map_err(|e| LayoutError::Parameters {
            reason: e.to_string(),
        })
    }

    /// Encodes this snapshot as a flat JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::Parameters`] if serialization fails.
    pub fn to_json(&self) -> Result<String, LayoutError> {
        serde_json::to_string_pretty(self).map_err(|e| LayoutError::Parameters {
            reason: e.to_string(),
        })
    }

    /// Returns a copy with the page dimensions of `size`.
    ///
    /// The background fade end is reset to [`DEFAULT_FADE_FRACTION`] of the
    /// new height.
    pub fn with_page_size(mut self, size: PageSize) -> Self {
        self.page_width = size.width;
        self.page_height = size.height;
        self.background_gradient_stop_end = size.height * DEFAULT_FADE_FRACTION;
        self
    }

    /// Returns a copy targeting `(year, month)`.
    pub fn with_month(mut self, year: i32, month: u32) -> Self {
        self.year = year;
        self.month = month;
        self
    }

    /// Returns a copy using the BCP-47 tag `lang`.
    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }

    /// Returns a copy with the raw comma-separated section list `sections`.
    pub fn with_sections(mut self, sections: impl Into<String>) -> Self {
        self.sections = sections.into();
        self
    }

    /// Returns a copy with background image `href`.
    pub fn with_background(mut self, href: impl Into<String>) -> Self {
        self.background = Some(href.into());
        self
    }

    /// Parsed section names, in column order.
    pub fn section_names(&self) -> Vec<String> {
        parse_sections(&self.sections)
    }

    /// Height of the filled section-header band.
    pub fn header_band_height(&self) -> f64 {
        self.header_padding * 2.0 + self.header_font_size
    }

    /// Vertical distance between consecutive day baselines.
    pub fn row_height(&self) -> f64 {
        self.day_vertical_padding + self.content_font_size
    }

    /// Suggested export file name, `planner-{year}-{month}.svg`.
    pub fn export_file_name(&self) -> String {
        format!("planner-{}-{}.svg", self.year, self.month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_a4() {
        let p = PlannerParameters::default();
        assert_eq!(p.page_width, 210.0);
        assert_eq!(p.page_height, 297.0);
        assert!(p.background.is_none());
        assert!(p.section_names().is_empty());
    }

    #[test]
    fn derived_lengths() {
        let p = PlannerParameters::default();
        assert!((p.header_band_height() - 6.4).abs() < 1e-12);
        assert!((p.row_height() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn from_json_camel_case_and_defaults() {
        let p = PlannerParameters::from_json(
            r#"{"year": 2025, "month": 3, "pageWidth": 148, "sections": "Work, Home"}"#,
        )
        .unwrap();
        assert_eq!(p.year, 2025);
        assert_eq!(p.month, 3);
        assert_eq!(p.page_width, 148.0);
        assert_eq!(p.page_height, 297.0);
        assert_eq!(p.section_names(), vec!["Work", "Home"]);
    }

    #[test]
    fn from_json_attribution() {
        let p = PlannerParameters::from_json(
            r#"{
                "background": "https://images.example/photo.jpg",
                "attribution": {
                    "photoUrl": "https://example.com/photos/1",
                    "user": {"name": "Jane Doe", "profileUrl": "https://example.com/jane"}
                }
            }"#,
        )
        .unwrap();
        let credit = p.attribution.as_ref().unwrap().credit();
        assert_eq!(credit, "Photo by Jane Doe (https://example.com/photos/1)");
    }

    #[test]
    fn from_json_rejects_wrong_type() {
        let err = PlannerParameters::from_json(r#"{"year": "soon"}"#).unwrap_err();
        assert!(matches!(err, LayoutError::Parameters { .. }));
    }

    #[test]
    fn json_roundtrip() {
        let p = PlannerParameters::default()
            .with_sections("A, B")
            .with_background("bg.png");
        let back = PlannerParameters::from_json(&p.to_json().unwrap()).unwrap();
        assert_eq!(back, p);
    }

    #[test]
    fn derived_fade_end_survives_json() {
        let p = PlannerParameters::default().with_page_size(PageSize::from_name("A5").unwrap());
        let back = PlannerParameters::from_json(&p.to_json().unwrap()).unwrap();
        assert_eq!(
            back.background_gradient_stop_end.to_bits(),
            p.background_gradient_stop_end.to_bits()
        );
        assert_eq!(
            PlannerParameters::from_json(&PlannerParameters::default().to_json().unwrap())
                .unwrap()
                .background_gradient_stop_end
                .to_bits(),
            (297.0 * DEFAULT_FADE_FRACTION).to_bits()
        );
    }

    #[test]
    fn builders() {
        let a3 = PageSize::from_name("A3").unwrap();
        let p = PlannerParameters::default()
            .with_page_size(a3)
            .with_month(2023, 11)
            .with_lang("pl-PL");
        assert_eq!(p.page_width, 297.0);
        assert_eq!(p.page_height, 420.0);
        assert!((p.background_gradient_stop_end - 168.0).abs() < 1e-9);
        assert_eq!((p.year, p.month), (2023, 11));
        assert_eq!(p.lang, "pl-PL");
        assert_eq!(p.export_file_name(), "planner-2023-11.svg");
    }
}
