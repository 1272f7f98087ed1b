//! Approximate conversions for dates outside curated coverage.
//!
//! Two approximations live here, and both are deliberately coarse:
//!
//! - Gregorian to Hijri goes through a [`FallbackCalendar`]. The default,
//!   [`TabularCalendar`], uses the arithmetic (Kuwaiti) Islamic calendar:
//!   30-year cycles of 10631 days with 11 leap years. Sighting-based
//!   calendars such as Umm al-Qura can differ from it by a day or two.
//! - Hijri to Gregorian uses a linear estimate from the Hijri epoch with
//!   mean lengths of 354.36 days per year and 29.53 days per month. It can
//!   be off by more than a week and exists only so callers get *a* date.
//!
//! Neither path is ever consulted for a date inside the curated table.

use chrono::{Datelike, Duration, NaiveDate};

use crate::error::DateError;
use crate::hijri_date::HijriDate;
use crate::locale::Locale;

/// Mean Hijri year length, in days, used by the linear estimate.
pub const MEAN_YEAR_DAYS: f64 = 354.36;
/// Mean Hijri month length, in days, used by the linear estimate.
pub const MEAN_MONTH_DAYS: f64 = 29.53;

/// Offset between chrono's day count from 0001-01-01 and the Julian Day Number.
const JDN_CE_OFFSET: i64 = 1_721_425;
/// Julian Day Number of 1 Muharram 1 AH (civil epoch, 16 July 622 Julian).
const ISLAMIC_EPOCH_JDN: i64 = 1_948_440;
/// Days in a 30-year tabular cycle.
const CYCLE_DAYS: i64 = 10_631;

/// Calendar capability used when the curated table has no answer.
///
/// Implement this to plug in a platform calendar; tests can supply a fixed
/// stub to stay independent of locale databases.
///
/// Estimates may name a day the curated table says does not exist, such as
/// the 30th of a 29-day month. `DateConverter` rolls such a day over to the
/// first of the following month before returning it.
pub trait FallbackCalendar {
    /// Estimate the Hijri date of a Gregorian day.
    fn to_hijri_approx(&self, date: NaiveDate) -> Result<HijriDate, DateError>;

    /// Display name of the weekday of a Gregorian day.
    fn weekday_name(&self, date: NaiveDate) -> String;
}

/// Arithmetic Islamic calendar with locale weekday names.
#[derive(Debug, Clone, Default)]
pub struct TabularCalendar {
    locale: Locale,
}

impl TabularCalendar {
    pub fn new(locale: Locale) -> Self {
        TabularCalendar { locale }
    }
}

impl FallbackCalendar for TabularCalendar {
    fn to_hijri_approx(&self, date: NaiveDate) -> Result<HijriDate, DateError> {
        let (year, month, day) = jdn_to_tabular_hijri(gregorian_to_jdn(date));
        HijriDate::new(year, month, day)
    }

    fn weekday_name(&self, date: NaiveDate) -> String {
        self.locale.day_name(date.weekday()).to_string()
    }
}

/// Julian Day Number of a Gregorian date.
fn gregorian_to_jdn(date: NaiveDate) -> i64 {
    i64::from(date.num_days_from_ce()) + JDN_CE_OFFSET
}

/// Convert a Julian Day Number to a tabular Hijri (year, month, day).
fn jdn_to_tabular_hijri(jd: i64) -> (i32, u32, u32) {
    // Shift so the day count is positive and starts a 30-year cycle early.
    let l = jd - ISLAMIC_EPOCH_JDN + CYCLE_DAYS + 1;
    let n = (l - 1).div_euclid(CYCLE_DAYS);
    let l = l - CYCLE_DAYS * n + 354;

    // Year within the cycle
    let j = ((10985 - l) / 5316) * ((50 * l) / 17719) + (l / 5670) * ((43 * l) / 15238);
    let l = l - ((30 - j) / 15) * ((17719 * j) / 50) - (j / 16) * ((15238 * j) / 43) + 29;

    let month = (24 * l) / 709;
    let day = l - (709 * month) / 24;
    let year = 30 * n + j - 30;

    (year as i32, month as u32, day as u32)
}

/// Linear Hijri to Gregorian estimate.
///
/// Counts `trunc((year-1)*354.36 + (month-1)*29.53 + day)` days forward from
/// 16 July 622 (proleptic Gregorian).
pub fn approximate_gregorian(date: HijriDate) -> Result<NaiveDate, DateError> {
    let epoch = NaiveDate::from_ymd_opt(622, 7, 16).ok_or(DateError::Overflow)?;
    let days = f64::from(date.year() - 1) * MEAN_YEAR_DAYS
        + f64::from(date.month() - 1) * MEAN_MONTH_DAYS
        + f64::from(date.day());
    epoch
        .checked_add_signed(Duration::days(days.trunc() as i64))
        .ok_or(DateError::Overflow)
}
