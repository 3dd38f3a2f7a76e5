//! Planner page layout.
//!
//! Turns a [`PlannerParameters`] snapshot and the days of a month into a
//! [`PrimitiveTree`] of texts, rectangles, lines and images in millimeter
//! page coordinates. Layout is pure: the same inputs always give the same
//! tree.
//!
//! Interactive helpers (drag hints, the gradient-stop handle) are flagged
//! non-printable. [`PrimitiveTree::printable`] strips them for export.
//!
//! # Quick start
//!
//! ```
//! use planner_calendar::generate_days;
//! use planner_layout::{PlannerParameters, layout};
//!
//! let params = PlannerParameters::default()
//!     .with_month(2024, 1)
//!     .with_sections("Work, Home, Sport");
//! let days = generate_days(params.year, params.month, &params.lang).unwrap();
//!
//! let page = layout(&params, &days);
//! let print = page.printable();
//! assert_eq!(print.non_printable_count(), 0);
//! ```
//!
//! # Architecture
//!
//! ```text
//! layout()
//!   ├─ background_mask()          fade mask resource
//!   ├─ background_layer()         image + drag hint + stop handle
//!   └─ content_group()            translated by contentStart
//!        ├─ month heading
//!        ├─ header band + section labels   (sections.rs)
//!        └─ day_row() per day              text + one line per column
//! ```

pub mod engine;
pub mod error;
pub mod page;
pub mod params;
pub mod sections;
pub mod style;
pub mod tree;

pub use engine::{
    BACKGROUND_MASK_ID, WEEKDAY_LINE_WIDTH, WEEKEND_LINE_WIDTH, layout, layout_with, render_page,
    render_page_with,
};
pub use error::LayoutError;
pub use page::{PAGE_SIZES, PageSize};
pub use params::{Attribution, AttributionUser, DEFAULT_FADE_FRACTION, PlannerParameters};
pub use sections::{Column, ColumnLayout, parse_sections};
pub use style::{Baseline, FontWeight, LineStyle, TextAnchor, TextStyle};
pub use tree::{
    Affordance, Element, FadeMask, GradientStop, Group, Image, Line, Node, Placed, Primitive,
    PrimitiveTree, Rect, Text, Translate,
};
