//! SVG serialization of planner pages.
//!
//! Writes a [`planner_layout::PrimitiveTree`] as a standalone SVG document
//! whose view box is measured in millimeters, ready for printing at the
//! page's physical size.
//!
//! # Quick start
//!
//! ```
//! use planner_layout::{PlannerParameters, render_page};
//! use planner_svg::to_svg;
//!
//! let params = PlannerParameters::default().with_month(2024, 1);
//! let page = render_page(&params).unwrap();
//!
//! let svg = to_svg(&page.printable()).unwrap();
//! assert!(svg.contains(r#"width="210mm""#));
//! ```

pub mod error;
pub mod writer;

pub use error::SvgError;
pub use writer::{NO_PRINT_CLASS, to_svg, write_svg};
