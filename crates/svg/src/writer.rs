//! Streaming SVG writer.

use std::io::Write;

use planner_layout::{
    Affordance, Baseline, Element, FadeMask, FontWeight, Group, Image, Line, Node, Primitive,
    PrimitiveTree, Rect, Text, TextAnchor,
};
use tracing::debug;

use crate::error::SvgError;

/// Class carried by every non-printable node.
pub const NO_PRINT_CLASS: &str = "no-print";

/// Serializes `tree` to an SVG document string.
///
/// # Errors
///
/// Returns [`SvgError::UndefinedMask`] if an image references a mask missing
/// from `tree.masks`.
pub fn to_svg(tree: &PrimitiveTree) -> Result<String, SvgError> {
    let mut output = Vec::new();
    write_svg(tree, &mut output)?;
    Ok(String::from_utf8(output)?)
}

/// Writes `tree` as an SVG document sized in millimeters.
///
/// One user unit of the view box is one millimeter. Non-printable nodes
/// are written with the `no-print` class and hidden by a print stylesheet;
/// serialize [`PrimitiveTree::printable`] to leave them out entirely.
///
/// # Errors
///
/// Returns [`SvgError::Io`] if `w` fails, or [`SvgError::UndefinedMask`] as
/// in [`to_svg`].
pub fn write_svg(tree: &PrimitiveTree, w: &mut impl Write) -> Result<(), SvgError> {
    check_masks(tree)?;

    writeln!(w, r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>"#)?;
    writeln!(
        w,
        r#"<svg width="{0}mm" height="{1}mm" viewBox="0 0 {0} {1}" version="1.1" xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink">"#,
        num(tree.width),
        num(tree.height)
    )?;

    if let Some(description) = &tree.description {
        writeln!(w, "<desc>{}</desc>", escape(description))?;
    }

    let non_printable = tree.non_printable_count();
    if non_printable > 0 {
        writeln!(
            w,
            "<style>@media print {{ .{NO_PRINT_CLASS} {{ display: none; }} }}</style>"
        )?;
    }

    if !tree.masks.is_empty() {
        writeln!(w, "<defs>")?;
        for mask in &tree.masks {
            write_mask(mask, w)?;
        }
        writeln!(w, "</defs>")?;
    }

    write_group(&tree.root, w)?;
    writeln!(w, "</svg>")?;

    debug!(
        n_masks = tree.masks.len(),
        n_non_printable = non_printable,
        "wrote SVG document"
    );
    Ok(())
}

fn check_masks(tree: &PrimitiveTree) -> Result<(), SvgError> {
    for placed in tree.placed() {
        if let Primitive::Image(Image { mask: Some(id), .. }) = &placed.element.primitive {
            if tree.mask(id).is_none() {
                return Err(SvgError::UndefinedMask { id: id.clone() });
            }
        }
    }
    Ok(())
}

/// A full-page rectangle painted with a vertical gradient, used as a
/// luminance mask.
fn write_mask(mask: &FadeMask, w: &mut impl Write) -> Result<(), SvgError> {
    let id = escape(&mask.id);
    writeln!(
        w,
        r#"<linearGradient id="{id}-gradient" x1="0" y1="0" x2="0" y2="1">"#
    )?;
    for stop in &mask.stops {
        writeln!(
            w,
            r#"<stop offset="{}" stop-color="{}" stop-opacity="{}"/>"#,
            num(stop.offset),
            escape(&stop.color),
            num(stop.opacity)
        )?;
    }
    writeln!(w, "</linearGradient>")?;
    writeln!(
        w,
        r#"<mask id="{id}" maskUnits="userSpaceOnUse" x="0" y="0" width="{0}" height="{1}">"#,
        num(mask.width),
        num(mask.height)
    )?;
    writeln!(
        w,
        r#"<rect x="0" y="0" width="{}" height="{}" fill="url(#{id}-gradient)"/>"#,
        num(mask.width),
        num(mask.height)
    )?;
    writeln!(w, "</mask>")?;
    Ok(())
}

fn write_group(group: &Group, w: &mut impl Write) -> Result<(), SvgError> {
    write!(w, "<g")?;
    if let Some(id) = &group.id {
        write!(w, r#" id="{}""#, escape(id))?;
    }
    if group.translate.x != 0.0 || group.translate.y != 0.0 {
        write!(
            w,
            r#" transform="translate({} {})""#,
            num(group.translate.x),
            num(group.translate.y)
        )?;
    }
    if !group.printable {
        write!(w, r#" class="{NO_PRINT_CLASS}""#)?;
    }
    writeln!(w, ">")?;

    for child in &group.children {
        match child {
            Node::Group(g) => write_group(g, w)?,
            Node::Element(e) => write_element(e, w)?,
        }
    }
    writeln!(w, "</g>")?;
    Ok(())
}

fn write_element(element: &Element, w: &mut impl Write) -> Result<(), SvgError> {
    let mut extra = String::new();
    if !element.printable {
        extra.push_str(&format!(r#" class="{NO_PRINT_CLASS}""#));
    }
    if let Some(affordance) = element.affordance {
        extra.push_str(&format!(
            r#" data-affordance="{}""#,
            affordance_name(affordance)
        ));
    }

    match &element.primitive {
        Primitive::Text(text) => write_text(text, &extra, w),
        Primitive::Rect(rect) => write_rect(rect, &extra, w),
        Primitive::Line(line) => write_line(line, &extra, w),
        Primitive::Image(image) => write_image(image, &extra, w),
    }
}

fn write_text(text: &Text, extra: &str, w: &mut impl Write) -> Result<(), SvgError> {
    let style = &text.style;
    write!(
        w,
        r#"<text x="{}" y="{}" font-family="{}" font-size="{}" fill="{}""#,
        num(text.x),
        num(text.y),
        escape(&style.family),
        num(style.size),
        escape(&style.color)
    )?;
    if style.weight == FontWeight::Bold {
        write!(w, r#" font-weight="bold""#)?;
    }
    match style.anchor {
        TextAnchor::Start => {}
        TextAnchor::Middle => write!(w, r#" text-anchor="middle""#)?,
        TextAnchor::End => write!(w, r#" text-anchor="end""#)?,
    }
    if style.baseline == Baseline::Hanging {
        write!(w, r#" dominant-baseline="hanging""#)?;
    }
    writeln!(w, "{extra}>{}</text>", escape(&text.content))?;
    Ok(())
}

fn write_rect(rect: &Rect, extra: &str, w: &mut impl Write) -> Result<(), SvgError> {
    writeln!(
        w,
        r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"{extra}/>"#,
        num(rect.x),
        num(rect.y),
        num(rect.width),
        num(rect.height),
        escape(&rect.fill)
    )?;
    Ok(())
}

fn write_line(line: &Line, extra: &str, w: &mut impl Write) -> Result<(), SvgError> {
    writeln!(
        w,
        r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"{extra}/>"#,
        num(line.x1),
        num(line.y1),
        num(line.x2),
        num(line.y2),
        escape(&line.style.color),
        num(line.style.width)
    )?;
    Ok(())
}

/// Height is left to the image's intrinsic aspect ratio.
fn write_image(image: &Image, extra: &str, w: &mut impl Write) -> Result<(), SvgError> {
    write!(
        w,
        r#"<image x="{}" y="{}" width="{}" preserveAspectRatio="xMidYMin meet" xlink:href="{}""#,
        num(image.x),
        num(image.y),
        num(image.width),
        escape(&image.href)
    )?;
    if let Some(mask) = &image.mask {
        write!(w, r#" mask="url(#{})""#, escape(mask))?;
    }
    writeln!(w, "{extra}/>")?;
    Ok(())
}

fn affordance_name(affordance: Affordance) -> &'static str {
    match affordance {
        Affordance::BackgroundDrag => "background-drag",
        Affordance::GradientStop => "gradient-stop",
        Affordance::ContentDrag => "content-drag",
    }
}

/// Formats a coordinate with at most three decimals and no trailing zeros.
fn num(v: f64) -> String {
    let s = format!("{v:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

/// Escapes text content and attribute values.
fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
