//! ISO week helpers
//!
//! Weeks start on Monday. Any date can stand in for "its" week.

use chrono::{Datelike, Duration, NaiveDate};

/// Monday of the ISO week containing `date`
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

/// The seven days of the ISO week containing `date`, Monday first
pub fn week_dates(date: NaiveDate) -> [NaiveDate; 7] {
    let monday = week_start(date);
    std::array::from_fn(|offset| monday + Duration::days(offset as i64))
}

pub fn previous_week(date: NaiveDate) -> NaiveDate {
    week_start(date) - Duration::days(7)
}

pub fn next_week(date: NaiveDate) -> NaiveDate {
    week_start(date) + Duration::days(7)
}

/// Whether `date` falls in the week that starts at (or contains) `week`
pub fn in_week(week: NaiveDate, date: NaiveDate) -> bool {
    week_start(week) == week_start(date)
}

/// Column header such as `Mon 03`
pub fn day_label(date: NaiveDate) -> String {
    date.format("%a %d").to_string()
}
