//! Listing commands: days, months and page presets.

use anyhow::{Context, Result};
use chrono::Datelike;
use tracing::info_span;

use planner_calendar::{generate_days, month_name, month_names};
use planner_layout::PAGE_SIZES;

use crate::cli::{DaysArgs, MonthsArgs};

/// Print one line per day: ordinal, weekday name, and `*` on weekends.
pub fn run_days(args: DaysArgs) -> Result<()> {
    let _cmd = info_span!("days").entered();
    let today = chrono::Local::now().date_naive();
    let year = args.year.unwrap_or(today.year());
    let month = args.month.unwrap_or(today.month());

    let heading = month_name(year, month, &args.lang)?;
    let days = generate_days(year, month, &args.lang)
        .with_context(|| format!("failed to generate days for {year}-{month:02}"))?;

    println!("{heading} {year}");
    for day in &days {
        let marker = if day.is_weekend() { " *" } else { "" };
        println!("{:>2}  {}{marker}", day.ordinal(), day.weekday_name());
    }
    Ok(())
}

/// Print the twelve month names of a year.
pub fn run_months(args: MonthsArgs) -> Result<()> {
    let _cmd = info_span!("months").entered();
    let year = args
        .year
        .unwrap_or_else(|| chrono::Local::now().date_naive().year());

    for entry in month_names(year, &args.lang)? {
        println!("{:>2}  {}", entry.ordinal, entry.name);
    }
    Ok(())
}

/// Print the page size presets.
pub fn run_presets() -> Result<()> {
    for size in &PAGE_SIZES {
        println!("{:<3} {:>5} x {:>5} mm", size.name, size.width, size.height);
    }
    Ok(())
}
