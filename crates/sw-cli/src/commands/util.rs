//! Shared utilities for CLI commands.

use chrono::{Local, NaiveDate};

/// Resolve the reference date for period-based commands.
///
/// Uses the explicit `--today` value when given, otherwise the local date.
pub fn reference_date(today: Option<NaiveDate>) -> NaiveDate {
    today.unwrap_or_else(|| Local::now().date_naive())
}

/// Format a calendar month as `YYYY-MM`.
pub fn format_month(year: i32, month: u32) -> String {
    format!("{year:04}-{month:02}")
}
