//! Page layout: parameters and days in, primitive tree out.

use planner_calendar::{ChronoNames, Day, NameFormatter, generate_days_with, month_name_with};
use tracing::debug;

use crate::error::LayoutError;
use crate::params::{Attribution, PlannerParameters};
use crate::sections::ColumnLayout;
use crate::style::{Baseline, FontWeight, LineStyle, TextAnchor, TextStyle};
use crate::tree::{
    Affordance, Element, FadeMask, GradientStop, Group, Image, Line, PrimitiveTree, Rect, Text,
};

/// Id of the background fade mask resource.
pub const BACKGROUND_MASK_ID: &str = "background-fade";

/// Stroke width of day lines on Saturdays and Sundays.
pub const WEEKEND_LINE_WIDTH: f64 = 0.3;
/// Stroke width of day lines on weekdays.
pub const WEEKDAY_LINE_WIDTH: f64 = 0.1;

const HINT_FONT_FAMILY: &str = "sans-serif";
const HINT_FONT_SIZE: f64 = 3.0;
const HINT_COLOR: &str = "#1f6fb2";
const HINT_GAP: f64 = 2.0;
const HANDLE_WIDTH: f64 = 0.4;
const BACKGROUND_HINT: &str = "\u{2195} drag to move the background";
const CONTENT_HINT: &str = "\u{2195} drag to move the calendar";

/// Lays out one planner page.
///
/// The heading is the capitalized month name of `(params.year,
/// params.month)` in `params.lang`. The returned tree is the interactive
/// variant; call [`PrimitiveTree::printable`] for the export variant.
///
/// This never fails: out-of-range parameters produce degenerate geometry,
/// and an invalid month leaves the heading empty.
pub fn layout(params: &PlannerParameters, days: &[Day]) -> PrimitiveTree {
    layout_with(params, days, &ChronoNames::for_tag(&params.lang))
}

/// Same as [`layout`] with a caller-supplied name formatter.
#[tracing::instrument(
    skip_all,
    fields(year = params.year, month = params.month, n_days = days.len())
)]
pub fn layout_with<F: NameFormatter>(
    params: &PlannerParameters,
    days: &[Day],
    names: &F,
) -> PrimitiveTree {
    let heading = month_name_with(params.year, params.month, names).unwrap_or_else(|e| {
        debug!(error = %e, "no month heading");
        String::new()
    });
    build_page(params, days, &heading)
}

/// Generates the days and heading for `params` and lays out the page.
///
/// # Errors
///
/// Returns [`LayoutError::Calendar`] if `(params.year, params.month)` is not
/// a valid calendar month.
pub fn render_page(params: &PlannerParameters) -> Result<PrimitiveTree, LayoutError> {
    render_page_with(params, &ChronoNames::for_tag(&params.lang))
}

/// Same as [`render_page`] with a caller-supplied name formatter.
///
/// # Errors
///
/// Same as [`render_page`].
pub fn render_page_with<F: NameFormatter>(
    params: &PlannerParameters,
    names: &F,
) -> Result<PrimitiveTree, LayoutError> {
    let days = generate_days_with(params.year, params.month, names)?;
    let heading = month_name_with(params.year, params.month, names)?;
    Ok(build_page(params, &days, &heading))
}

fn build_page(params: &PlannerParameters, days: &[Day], heading: &str) -> PrimitiveTree {
    let mut root = Group::new().with_id("page");
    let mut masks = Vec::new();

    if let Some(href) = &params.background {
        masks.push(background_mask(params));
        root.push(background_layer(params, href));
    }
    root.push(content_group(params, days, heading));

    PrimitiveTree {
        width: params.page_width,
        height: params.page_height,
        masks,
        root,
        description: params.attribution.as_ref().map(Attribution::credit),
    }
}

/// Full-page fade: opaque white at the top, transparent from
/// `background_gradient_stop_end` down.
fn background_mask(params: &PlannerParameters) -> FadeMask {
    let end = if params.page_height > 0.0 {
        (params.background_gradient_stop_end / params.page_height).clamp(0.0, 1.0)
    } else {
        0.0
    };
    FadeMask {
        id: BACKGROUND_MASK_ID.to_string(),
        width: params.page_width,
        height: params.page_height,
        stops: vec![
            GradientStop {
                offset: 0.0,
                color: "#fff".to_string(),
                opacity: 1.0,
            },
            GradientStop {
                offset: end,
                color: "#fff".to_string(),
                opacity: 0.0,
            },
        ],
    }
}

fn background_layer(params: &PlannerParameters, href: &str) -> Group {
    let mut layer = Group::new().with_id("background");
    layer.push(Element::new(Image {
        x: 0.0,
        y: params.background_y,
        width: params.page_width,
        href: href.to_string(),
        mask: Some(BACKGROUND_MASK_ID.to_string()),
    }));
    layer.push(Element::affordance(
        Text {
            x: params.page_width / 2.0,
            y: params.background_y + HINT_GAP + HINT_FONT_SIZE,
            content: BACKGROUND_HINT.to_string(),
            style: hint_style(),
        },
        Affordance::BackgroundDrag,
    ));
    layer.push(Element::affordance(
        Line {
            x1: 0.0,
            y1: params.background_gradient_stop_end,
            x2: params.page_width,
            y2: params.background_gradient_stop_end,
            style: LineStyle::new(HINT_COLOR, HANDLE_WIDTH),
        },
        Affordance::GradientStop,
    ));
    layer
}

fn content_group(params: &PlannerParameters, days: &[Day], heading: &str) -> Group {
    let page_center = params.page_width / 2.0;
    let left_margin = params.content_horizontal_margin / 2.0;
    let mut content = Group::new()
        .with_id("content")
        .translated(0.0, params.content_start);

    content.push(Element::affordance(
        Text {
            x: page_center,
            y: -HINT_GAP,
            content: CONTENT_HINT.to_string(),
            style: hint_style(),
        },
        Affordance::ContentDrag,
    ));

    content.push(Element::new(Text {
        x: page_center,
        y: params.month_font_size,
        content: heading.to_string(),
        style: TextStyle::new(
            &params.month_font_family,
            params.month_font_size,
            &params.month_font_color,
        )
        .with_weight(FontWeight::Bold)
        .with_anchor(TextAnchor::Middle),
    }));

    let mut row_y = params.month_bottom_margin + params.month_font_size;

    let band_height = params.header_band_height();
    content.push(Element::new(Rect {
        x: 0.0,
        y: row_y,
        width: params.page_width,
        height: band_height,
        fill: params.header_background.clone(),
    }));

    let sections = params.section_names();
    let columns = ColumnLayout::for_params(params);

    if !sections.is_empty() {
        let label_style = TextStyle::new(
            &params.content_font_family,
            params.header_font_size,
            &params.header_font_color,
        )
        .with_anchor(TextAnchor::Middle)
        .with_baseline(Baseline::Hanging);

        let mut labels = Group::new()
            .with_id("section-labels")
            .translated(left_margin, row_y + params.header_padding);
        for (name, column) in sections.iter().zip(columns.columns()) {
            labels.push(Element::new(Text {
                x: column.center(),
                y: 0.0,
                content: name.clone(),
                style: label_style.clone(),
            }));
        }
        content.push(labels);
    }

    row_y += band_height + params.day_vertical_padding;

    let mut rows = Group::new().with_id("days").translated(left_margin, row_y);
    for day in days {
        rows.push(day_row(params, &columns, day));
    }
    content.push(rows);

    debug!(
        n_columns = columns.len(),
        column_width = columns.column_width(),
        n_days = days.len(),
        "laid out day grid"
    );
    content
}

fn day_row(params: &PlannerParameters, columns: &ColumnLayout, day: &Day) -> Group {
    // Uniform row height: row n sits exactly n row-heights below the grid top.
    let baseline = f64::from(day.ordinal()) * params.row_height();
    let weekend = day.is_weekend();

    let text_style = TextStyle::new(
        &params.content_font_family,
        params.content_font_size,
        &params.content_font_color,
    )
    .with_weight(FontWeight::bold_if(weekend));
    let line_style = LineStyle::new(
        &params.line_color,
        if weekend {
            WEEKEND_LINE_WIDTH
        } else {
            WEEKDAY_LINE_WIDTH
        },
    );

    let mut row = Group::new().with_id(format!("day-{}", day.ordinal()));
    row.push(Element::new(Text {
        x: params.day_number_start,
        y: baseline,
        content: day.ordinal().to_string(),
        style: text_style.clone(),
    }));
    row.push(Element::new(Text {
        x: params.day_name_start,
        y: baseline,
        content: day.weekday_name().to_string(),
        style: text_style,
    }));
    for column in columns.columns() {
        row.push(Element::new(Line {
            x1: column.start,
            y1: baseline,
            x2: column.end,
            y2: baseline,
            style: line_style.clone(),
        }));
    }
    row
}

fn hint_style() -> TextStyle {
    TextStyle::new(HINT_FONT_FAMILY, HINT_FONT_SIZE, HINT_COLOR).with_anchor(TextAnchor::Middle)
}
