//! halaqa-calendar - curated Hijri calendar for Quran memorization schools
//!
//! Converts between Gregorian and Hijri dates using a verified Umm al-Qura
//! day table, falls back to flagged approximations outside it, and derives
//! the Sunday-Thursday study days of each Hijri month.
//!
//! The free functions below use the embedded table and default options.
//! Build a [`DateConverter`] directly to change locale, clock or fallback.

pub mod clock;
pub mod converter;
pub mod error;
pub mod fallback;
pub mod format;
pub mod hijri_date;
pub mod input;
pub mod options;
pub mod study_day;
pub mod study_days;
pub mod table;

mod locale;

pub use clock::{Clock, FixedClock, SystemClock};
pub use converter::{ConversionSource, DateConverter, GregorianConversion, HijriConversion};
pub use error::{DateError, Error, TableError};
pub use fallback::{FallbackCalendar, TabularCalendar};
pub use format::HijriFormatter;
pub use hijri_date::{HijriDate, MonthKey};
pub use input::{DateInput, HijriInput, HijriKeyed};
pub use locale::Locale;
pub use options::{CalendarOptions, Numerals};
pub use study_day::{is_study_day, weekday_index};
pub use study_days::{IntoMonthKey, StudyDaySetBuilder};
pub use table::{CalendarEntry, CalendarTable};

/// Convert a Gregorian date to Hijri with the built-in table.
pub fn gregorian_to_hijri<'i>(date: impl Into<DateInput<'i>>) -> Result<HijriConversion, Error> {
    let table = CalendarTable::builtin()?;
    Ok(DateConverter::new(table).gregorian_to_hijri(date)?)
}

/// Convert a Hijri date to Gregorian with the built-in table.
pub fn hijri_to_gregorian(year: i32, month: u32, day: u32) -> Result<GregorianConversion, Error> {
    let table = CalendarTable::builtin()?;
    Ok(DateConverter::new(table).hijri_to_gregorian(year, month, day)?)
}

/// Today's canonical Hijri identifier, for use as a storage key.
pub fn today_for_storage() -> Result<String, Error> {
    let table = CalendarTable::builtin()?;
    Ok(DateConverter::new(table).today_for_storage()?)
}

/// Study-day identifiers of a Hijri month from the built-in table.
pub fn study_days_for_month(key: impl IntoMonthKey) -> Result<Vec<String>, Error> {
    let table = CalendarTable::builtin()?;
    let converter = DateConverter::new(table);
    Ok(StudyDaySetBuilder::new(&converter).study_days_for_month(key)?)
}

/// Format a Hijri date for display in Arabic.
///
/// Never fails: unusable input, or an unavailable table, renders the
/// invalid-date placeholder.
pub fn format_hijri<'i>(input: impl Into<HijriInput<'i>>) -> String {
    match CalendarTable::builtin() {
        Ok(table) => {
            let converter = DateConverter::new(table);
            HijriFormatter::new(&converter).format(input)
        }
        Err(err) => {
            tracing::error!(error = %err, "built-in hijri calendar failed to load");
            Locale::default().invalid_date.to_string()
        }
    }
}
