//! Study-day classification.
//!
//! Classes meet Sunday through Thursday; Friday and Saturday are the
//! weekend. The rule depends only on the Gregorian weekday, so it holds
//! for any date whether or not the curated table covers it.

use chrono::{Datelike, NaiveDate};

/// Weekday index with Sunday = 0 through Saturday = 6.
pub fn weekday_index(date: NaiveDate) -> u32 {
    date.weekday().num_days_from_sunday()
}

/// Sunday (0) through Thursday (4) are study days.
pub fn is_study_day(date: NaiveDate) -> bool {
    weekday_index(date) <= 4
}
