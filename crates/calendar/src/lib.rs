//! # planner-calendar
//!
//! Localized calendar data for a single month of a planner page.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["BCP-47 tag"] -->|"resolve_locale()"| B["chrono Locale"]
//!     B -->|"ChronoNames"| C["NameFormatter"]
//!     D["(year, month)"] -->|"generate_days_with()"| E["Vec of Day"]
//!     C --> E
//!     D -->|"month_name_with()"| F["capitalized month name"]
//!     C --> F
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use planner_calendar::{generate_days, month_name};
//!
//! let days = generate_days(2024, 1, "en-US").unwrap();
//! assert_eq!(days.len(), 31);
//! assert!(days[5].is_weekend()); // Saturday, January 6
//! assert!(!days[7].is_weekend()); // Monday, January 8
//!
//! assert_eq!(month_name(2024, 1, "de-DE").unwrap(), "Januar");
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `days` | Day list generation and month length |
//! | `month` | Month-name formatting and capitalization |
//! | `locale` | Locale resolution and the `NameFormatter` capability |
//! | `error` | Error types |

mod days;
mod error;
mod locale;
mod month;

pub use days::{Day, days_in_month, first_of_month, generate_days, generate_days_with, is_weekend};
pub use error::CalendarError;
pub use locale::{ChronoNames, NameFormatter, resolve_locale};
pub use month::{MonthEntry, capitalize, month_name, month_name_with, month_names};
