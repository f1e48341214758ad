//! Short date strings used in report titles and file names.

use chrono::{Datelike, NaiveDate};

/// `MM{sep}DD{sep}YYYY` with zero-padded month and day.
///
/// An empty separator falls back to `-`.
pub fn short_date_string(date: NaiveDate, separator: &str) -> String {
    let sep = if separator.is_empty() { "-" } else { separator };
    format!(
        "{:02}{sep}{:02}{sep}{}",
        date.month(),
        date.day(),
        date.year()
    )
}

/// Short date safe to embed in a file name, e.g. `01-31-2024`.
pub fn file_compatible_date(date: NaiveDate) -> String {
    short_date_string(date, "-")
}

/// Human-readable range shown alongside the last stored report.
pub fn date_range_suffix(start: NaiveDate, end: NaiveDate) -> String {
    format!(
        "{} to {}",
        file_compatible_date(start),
        file_compatible_date(end)
    )
}
