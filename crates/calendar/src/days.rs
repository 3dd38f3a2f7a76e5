//! Day list generation for a single month.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::error::CalendarError;
use crate::locale::{ChronoNames, NameFormatter};

/// One day of a generated month.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Day {
    ordinal: u32,
    weekday_name: String,
    weekend: bool,
}

impl Day {
    /// Creates a day from its parts.
    pub fn new(ordinal: u32, weekday_name: impl Into<String>, weekend: bool) -> Self {
        Self {
            ordinal,
            weekday_name: weekday_name.into(),
            weekend,
        }
    }

    /// Returns the day of the month (1-based).
    pub fn ordinal(&self) -> u32 {
        self.ordinal
    }

    /// Returns the full localized weekday name.
    pub fn weekday_name(&self) -> &str {
        &self.weekday_name
    }

    /// Returns `true` for Saturdays and Sundays.
    pub fn is_weekend(&self) -> bool {
        self.weekend
    }
}

/// Returns `true` if `weekday` is Saturday or Sunday.
pub fn is_weekend(weekday: Weekday) -> bool {
    weekday == Weekday::Sat || weekday == Weekday::Sun
}

/// Returns the first day of `(year, month)`.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is outside 1..=12 and
/// [`CalendarError::InvalidDate`] if the year is out of range.
pub fn first_of_month(year: i32, month: u32) -> Result<NaiveDate, CalendarError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth { month });
    }
    NaiveDate::from_ymd_opt(year, month, 1).ok_or(CalendarError::InvalidDate { year, month })
}

/// Number of days in `(year, month)`.
///
/// Computed as the day before the first of the following month, so leap
/// years follow the proleptic Gregorian rules.
///
/// # Errors
///
/// Same as [`first_of_month`].
pub fn days_in_month(year: i32, month: u32) -> Result<u32, CalendarError> {
    first_of_month(year, month)?;
    let (next_year, next_month) = if month == 12 {
        (year.checked_add(1), 1)
    } else {
        (Some(year), month + 1)
    };
    next_year
        .and_then(|y| NaiveDate::from_ymd_opt(y, next_month, 1))
        .and_then(|d| d.pred_opt())
        .map(|last| last.day())
        .ok_or(CalendarError::InvalidDate { year, month })
}

/// Generates the days of `(year, month)` with weekday names in `locale`.
///
/// `locale` is a BCP-47 tag; see [`crate::resolve_locale`] for how it is
/// resolved.
///
/// # Errors
///
/// Same as [`first_of_month`].
///
/// # Example
///
/// ```
/// let days = planner_calendar::generate_days(2024, 2, "en-US").unwrap();
/// assert_eq!(days.len(), 29);
/// assert_eq!(days[0].weekday_name(), "Thursday");
/// ```
pub fn generate_days(year: i32, month: u32, locale: &str) -> Result<Vec<Day>, CalendarError> {
    generate_days_with(year, month, &ChronoNames::for_tag(locale))
}

/// Generates the days of `(year, month)` using a caller-supplied formatter.
///
/// # Errors
///
/// Same as [`first_of_month`].
#[tracing::instrument(skip(names))]
pub fn generate_days_with<F: NameFormatter>(
    year: i32,
    month: u32,
    names: &F,
) -> Result<Vec<Day>, CalendarError> {
    let n_days = days_in_month(year, month)?;
    let first = first_of_month(year, month)?;

    let days = first
        .iter_days()
        .take(n_days as usize)
        .map(|date| Day::new(date.day(), names.weekday_name(date), is_weekend(date.weekday())))
        .collect();
    Ok(days)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn days_in_month_leap_february() {
        assert_eq!(days_in_month(2024, 2).unwrap(), 29);
        assert_eq!(days_in_month(2023, 2).unwrap(), 28);
        assert_eq!(days_in_month(2000, 2).unwrap(), 29);
        assert_eq!(days_in_month(1900, 2).unwrap(), 28);
    }

    #[test]
    fn days_in_month_december() {
        assert_eq!(days_in_month(2024, 12).unwrap(), 31);
    }

    #[test]
    fn days_in_month_invalid_month() {
        assert_eq!(
            days_in_month(2024, 0).unwrap_err(),
            CalendarError::InvalidMonth { month: 0 }
        );
        assert_eq!(
            days_in_month(2024, 13).unwrap_err(),
            CalendarError::InvalidMonth { month: 13 }
        );
    }

    #[test]
    fn days_in_month_out_of_range_year() {
        assert_eq!(
            days_in_month(i32::MAX, 12).unwrap_err(),
            CalendarError::InvalidDate {
                year: i32::MAX,
                month: 12
            }
        );
    }

    #[test]
    fn weekend_predicate() {
        assert!(is_weekend(Weekday::Sat));
        assert!(is_weekend(Weekday::Sun));
        for wd in [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
        ] {
            assert!(!is_weekend(wd), "{wd} is not a weekend day");
        }
    }

    #[test]
    fn ordinals_are_contiguous() {
        let days = generate_days(2024, 4, "en-US").unwrap();
        let ordinals: Vec<u32> = days.iter().map(Day::ordinal).collect();
        assert_eq!(ordinals, (1..=30).collect::<Vec<_>>());
    }

    #[test]
    fn accessors() {
        let day = Day::new(6, "Saturday", true);
        assert_eq!(day.ordinal(), 6);
        assert_eq!(day.weekday_name(), "Saturday");
        assert!(day.is_weekend());
    }
}
