//! Integration tests for full-page SVG documents.

use planner_calendar::generate_days;
use planner_layout::{Attribution, AttributionUser, PlannerParameters, layout};
use planner_svg::{NO_PRINT_CLASS, to_svg};

fn params() -> PlannerParameters {
    let mut params = PlannerParameters::default()
        .with_month(2024, 1)
        .with_sections("Work, Home & Garden")
        .with_background("https://images.example/photo.jpg?w=800&q=80");
    params.attribution = Some(Attribution {
        photo_url: "https://example.com/photos/1".to_string(),
        user: AttributionUser {
            name: "Jane Doe".to_string(),
            profile_url: "https://example.com/jane".to_string(),
        },
    });
    params
}

fn page_svg(printable: bool) -> String {
    let params = params();
    let days = generate_days(2024, 1, &params.lang).unwrap();
    let tree = layout(&params, &days);
    let tree = if printable { tree.printable() } else { tree };
    to_svg(&tree).unwrap()
}

#[test]
fn document_is_well_formed_at_the_edges() {
    let svg = page_svg(true);
    assert!(svg.starts_with("<?xml"));
    assert!(svg.trim_end().ends_with("</svg>"));
    assert_eq!(svg.matches("<g").count(), svg.matches("</g>").count());
}

#[test]
fn printable_document_has_no_helpers() {
    let svg = page_svg(true);
    assert!(!svg.contains(NO_PRINT_CLASS));
    assert!(!svg.contains("data-affordance"));
    assert!(!svg.contains("drag to move"));
}

#[test]
fn interactive_document_marks_helpers() {
    let svg = page_svg(false);
    assert_eq!(svg.matches(r#"class="no-print""#).count(), 3);
    assert!(svg.contains(r#"data-affordance="background-drag""#));
    assert!(svg.contains(r#"data-affordance="content-drag""#));
}

#[test]
fn background_is_masked() {
    let svg = page_svg(true);
    assert!(svg.contains(r#"<mask id="background-fade""#));
    assert!(svg.contains(r##"<stop offset="0.4" stop-color="#fff" stop-opacity="0"/>"##));
    assert!(svg.contains(r#"xlink:href="https://images.example/photo.jpg?w=800&amp;q=80""#));
    assert!(svg.contains(r#"mask="url(#background-fade)""#));
}

#[test]
fn content_is_escaped_and_present() {
    let svg = page_svg(true);
    assert!(svg.contains(">January</text>"));
    assert!(svg.contains(">Home &amp; Garden</text>"));
    assert!(svg.contains(">31</text>"));
    assert!(svg.contains(r#"<g id="content" transform="translate(0 80)">"#));
}

#[test]
fn attribution_in_description() {
    let svg = page_svg(true);
    assert!(svg.contains("<desc>Photo by Jane Doe (https://example.com/photos/1)</desc>"));
}

#[test]
fn serialization_is_deterministic() {
    assert_eq!(page_svg(false), page_svg(false));
}
