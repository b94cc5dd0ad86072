//! Calendar math for the 7-day week view.
//!
//! Weeks are anchored on Sunday, matching the rendered calendar.

use chrono::{Datelike, Days, NaiveDate};

/// Snap a date back to the Sunday that starts its week.
///
/// Identity when `anchor` is already a Sunday.
pub fn week_start(anchor: NaiveDate) -> NaiveDate {
    let back = anchor.weekday().num_days_from_sunday() as u64;
    anchor - Days::new(back)
}

/// The seven consecutive days starting at `start`.
pub fn week_days(start: NaiveDate) -> [NaiveDate; 7] {
    std::array::from_fn(|i| start + Days::new(i as u64))
}

/// Human-readable day heading, e.g. `Monday, Jan 8`.
pub fn format_day_heading(date: NaiveDate) -> String {
    date.format("%A, %b %-d").to_string()
}
