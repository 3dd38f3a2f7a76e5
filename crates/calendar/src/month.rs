//! Localized month names for page headings and month pickers.

use crate::days::first_of_month;
use crate::error::CalendarError;
use crate::locale::{ChronoNames, NameFormatter};

/// Uppercases the first character of `name`, leaving the rest untouched.
///
/// Some locales spell month names in lower case (`janvier`, `enero`); page
/// headings always start with a capital. Already-capitalized input is
/// returned unchanged.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Capitalized full month name of `(year, month)` in `locale`.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is outside 1..=12 and
/// [`CalendarError::InvalidDate`] if the year is out of range.
///
/// # Example
///
/// ```
/// let name = planner_calendar::month_name(2024, 1, "fr-FR").unwrap();
/// assert_eq!(name, "Janvier");
/// ```
pub fn month_name(year: i32, month: u32, locale: &str) -> Result<String, CalendarError> {
    month_name_with(year, month, &ChronoNames::for_tag(locale))
}

/// Capitalized full month name of `(year, month)` using `names`.
///
/// # Errors
///
/// Same as [`month_name`].
pub fn month_name_with<F: NameFormatter>(
    year: i32,
    month: u32,
    names: &F,
) -> Result<String, CalendarError> {
    let first = first_of_month(year, month)?;
    Ok(capitalize(&names.month_name(first)))
}

/// A month entry for pickers: ordinal plus capitalized localized name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthEntry {
    /// Month number, 1..=12.
    pub ordinal: u32,
    /// Capitalized localized name.
    pub name: String,
}

/// All twelve months of `year` with names in `locale`, January first.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidDate`] if the year is out of range.
pub fn month_names(year: i32, locale: &str) -> Result<Vec<MonthEntry>, CalendarError> {
    let names = ChronoNames::for_tag(locale);
    (1..=12)
        .map(|ordinal| {
            month_name_with(year, ordinal, &names).map(|name| MonthEntry { ordinal, name })
        })
        .collect()
}
