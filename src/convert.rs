//! Pure conversion functions: TOML config structs and CLI overrides ->
//! `PlannerParameters`.

use anyhow::{Context, Result};

use planner_layout::{Attribution, AttributionUser, PageSize, PlannerParameters};

use crate::cli::PageArgs;
use crate::config::*;

/// Applies every set field of `config` on top of `params`.
///
/// Page size is applied first so that an explicit `gradient_stop_end` wins
/// over the height-derived default.
pub fn apply_config(
    mut params: PlannerParameters,
    config: &PlannerConfig,
) -> Result<PlannerParameters> {
    params = apply_calendar(params, &config.calendar);
    params = apply_page(params, &config.page)?;
    params = apply_background(params, &config.background);
    params = apply_typography(params, &config.typography);
    params = apply_dimensions(params, &config.dimensions);
    params = apply_colors(params, &config.colors);
    Ok(params)
}

fn apply_calendar(mut params: PlannerParameters, cal: &CalendarToml) -> PlannerParameters {
    if let Some(lang) = &cal.lang {
        params.lang.clone_from(lang);
    }
    if let Some(year) = cal.year {
        params.year = year;
    }
    if let Some(month) = cal.month {
        params.month = month;
    }
    if !cal.sections.is_empty() {
        params.sections = cal.sections.join(", ");
    }
    params
}

fn apply_page(mut params: PlannerParameters, page: &PageToml) -> Result<PlannerParameters> {
    if let Some(name) = &page.preset {
        let size = PageSize::from_name(name).context("invalid [page].preset")?;
        params = params.with_page_size(size);
    }
    if let Some(width) = page.width {
        params.page_width = width;
    }
    if let Some(height) = page.height {
        params.page_height = height;
        params.background_gradient_stop_end = height * planner_layout::DEFAULT_FADE_FRACTION;
    }
    Ok(params)
}

fn apply_background(mut params: PlannerParameters, bg: &BackgroundToml) -> PlannerParameters {
    if let Some(image) = &bg.image {
        params.background = Some(image.clone());
        params.background_y = bg.y;
    }
    if let Some(end) = bg.gradient_stop_end {
        params.background_gradient_stop_end = end;
    }
    if let Some(a) = &bg.attribution {
        params.attribution = Some(Attribution {
            photo_url: a.photo_url.clone(),
            user: AttributionUser {
                name: a.name.clone(),
                profile_url: a.profile_url.clone(),
            },
        });
    }
    params
}

fn apply_typography(mut params: PlannerParameters, t: &TypographyToml) -> PlannerParameters {
    set(&mut params.month_font_family, &t.month_font_family);
    set(&mut params.month_font_size, &t.month_font_size);
    set(&mut params.header_font_size, &t.header_font_size);
    set(&mut params.content_font_family, &t.content_font_family);
    set(&mut params.content_font_size, &t.content_font_size);
    params
}

fn apply_dimensions(mut params: PlannerParameters, d: &DimensionsToml) -> PlannerParameters {
    set(&mut params.month_bottom_margin, &d.month_bottom_margin);
    set(&mut params.header_padding, &d.header_padding);
    set(&mut params.content_start, &d.content_start);
    set(&mut params.content_horizontal_margin, &d.content_horizontal_margin);
    set(&mut params.day_number_start, &d.day_number_start);
    set(&mut params.day_name_start, &d.day_name_start);
    set(&mut params.day_lines_start, &d.day_lines_start);
    set(&mut params.day_vertical_padding, &d.day_vertical_padding);
    set(&mut params.plan_line_margin, &d.plan_line_margin);
    params
}

fn apply_colors(mut params: PlannerParameters, c: &ColorsToml) -> PlannerParameters {
    set(&mut params.month_font_color, &c.month_font);
    set(&mut params.header_font_color, &c.header_font);
    set(&mut params.header_background, &c.header_background);
    set(&mut params.content_font_color, &c.content_font);
    set(&mut params.line_color, &c.line);
    params
}

fn set<T: Clone>(field: &mut T, value: &Option<T>) {
    if let Some(v) = value {
        field.clone_from(v);
    }
}

/// Applies the individual command-line overrides.
pub fn apply_overrides(
    mut params: PlannerParameters,
    args: &PageArgs,
) -> Result<PlannerParameters> {
    if let Some(name) = &args.page {
        let size = PageSize::from_name(name).context("invalid --page")?;
        params = params.with_page_size(size);
    }
    if let Some(year) = args.year {
        params.year = year;
    }
    if let Some(month) = args.month {
        params.month = month;
    }
    if let Some(lang) = &args.lang {
        params.lang.clone_from(lang);
    }
    if let Some(sections) = &args.sections {
        params.sections.clone_from(sections);
    }
    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(toml_str: &str) -> PlannerConfig {
        toml::from_str(toml_str).unwrap()
    }

    fn no_overrides() -> PageArgs {
        PageArgs {
            config: None,
            params: None,
            year: None,
            month: None,
            lang: None,
            page: None,
            sections: None,
        }
    }

    #[test]
    fn empty_config_keeps_defaults() {
        let params = apply_config(PlannerParameters::default(), &parse("")).unwrap();
        assert_eq!(params, PlannerParameters::default());
    }

    #[test]
    fn calendar_and_sections() {
        let config = parse(
            r#"
            [calendar]
            lang = "de-DE"
            year = 2025
            month = 3
            sections = ["Arbeit", "Sport"]
            "#,
        );
        let params = apply_config(PlannerParameters::default(), &config).unwrap();
        assert_eq!(params.lang, "de-DE");
        assert_eq!((params.year, params.month), (2025, 3));
        assert_eq!(params.section_names(), vec!["Arbeit", "Sport"]);
    }

    #[test]
    fn preset_rescales_fade_unless_given() {
        let config = parse("[page]\npreset = \"a5\"\n");
        let params = apply_config(PlannerParameters::default(), &config).unwrap();
        assert_eq!(params.page_width, 148.0);
        assert!((params.background_gradient_stop_end - 84.0).abs() < 1e-9);

        let config = parse("[page]\npreset = \"A5\"\n[background]\ngradient_stop_end = 50.0\n");
        let params = apply_config(PlannerParameters::default(), &config).unwrap();
        assert_eq!(params.background_gradient_stop_end, 50.0);
    }

    #[test]
    fn unknown_preset_is_an_error() {
        let config = parse("[page]\npreset = \"Letter\"\n");
        assert!(apply_config(PlannerParameters::default(), &config).is_err());
    }

    #[test]
    fn unknown_field_is_rejected() {
        assert!(toml::from_str::<PlannerConfig>("[page]\nsize = \"A4\"\n").is_err());
    }

    #[test]
    fn background_with_attribution() {
        let config = parse(
            r#"
            [background]
            image = "https://images.example/p.jpg"
            y = -12.5
            attribution = { name = "Jane Doe", photo_url = "https://example.com/p/1" }
            "#,
        );
        let params = apply_config(PlannerParameters::default(), &config).unwrap();
        assert_eq!(params.background.as_deref(), Some("https://images.example/p.jpg"));
        assert_eq!(params.background_y, -12.5);
        assert_eq!(
            params.attribution.unwrap().credit(),
            "Photo by Jane Doe (https://example.com/p/1)"
        );
    }

    #[test]
    fn styling_sections() {
        let config = parse(
            r##"
            [typography]
            month_font_family = "Georgia"
            content_font_size = 3.5
            [dimensions]
            content_start = 60.0
            plan_line_margin = 4.0
            [colors]
            line = "#ccc"
            header_background = "#fee"
            "##,
        );
        let params = apply_config(PlannerParameters::default(), &config).unwrap();
        assert_eq!(params.month_font_family, "Georgia");
        assert_eq!(params.content_font_size, 3.5);
        assert_eq!(params.content_start, 60.0);
        assert_eq!(params.plan_line_margin, 4.0);
        assert_eq!(params.line_color, "#ccc");
        assert_eq!(params.header_background, "#fee");
        assert_eq!(params.header_font_color, "#333");
    }

    #[test]
    fn overrides_win() {
        let args = PageArgs {
            year: Some(2030),
            month: Some(7),
            lang: Some("fr-FR".to_string()),
            page: Some("A3".to_string()),
            sections: Some("A, B".to_string()),
            ..no_overrides()
        };
        let params = apply_overrides(PlannerParameters::default(), &args).unwrap();
        assert_eq!((params.year, params.month), (2030, 7));
        assert_eq!(params.lang, "fr-FR");
        assert_eq!(params.page_width, 297.0);
        assert_eq!(params.sections, "A, B");
    }

    #[test]
    fn no_overrides_is_identity() {
        let params = apply_overrides(PlannerParameters::default(), &no_overrides()).unwrap();
        assert_eq!(params, PlannerParameters::default());
    }
}
