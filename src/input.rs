//! Input shapes accepted by conversion and formatting.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone};

use crate::error::DateError;
use crate::hijri_date::HijriDate;

/// A Gregorian date, timestamp or date string to convert.
#[derive(Debug, Clone, PartialEq)]
pub enum DateInput<'a> {
    /// `YYYY-MM-DD`, or an ISO 8601 date-time whose date part is used
    Text(&'a str),
    /// A calendar date
    Date(NaiveDate),
    /// A wall-clock date-time
    DateTime(NaiveDateTime),
    /// A timestamp with offset; its calendar-local date is used
    Zoned(DateTime<FixedOffset>),
}

impl<'a> From<&'a str> for DateInput<'a> {
    fn from(s: &'a str) -> Self {
        DateInput::Text(s)
    }
}

impl<'a> From<&'a String> for DateInput<'a> {
    fn from(s: &'a String) -> Self {
        DateInput::Text(s)
    }
}

impl<'a> From<NaiveDate> for DateInput<'a> {
    fn from(d: NaiveDate) -> Self {
        DateInput::Date(d)
    }
}

impl<'a> From<NaiveDateTime> for DateInput<'a> {
    fn from(dt: NaiveDateTime) -> Self {
        DateInput::DateTime(dt)
    }
}

impl<'a, Tz: TimeZone> From<DateTime<Tz>> for DateInput<'a> {
    fn from(dt: DateTime<Tz>) -> Self {
        DateInput::Zoned(dt.fixed_offset())
    }
}

impl<'a> DateInput<'a> {
    /// Normalize to a calendar date.
    pub fn to_date(&self) -> Result<NaiveDate, DateError> {
        match self {
            DateInput::Text(s) => parse_gregorian(s),
            DateInput::Date(d) => Ok(*d),
            DateInput::DateTime(dt) => Ok(dt.date()),
            DateInput::Zoned(dt) => Ok(dt.date_naive()),
        }
    }
}

const DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

fn parse_gregorian(s: &str) -> Result<NaiveDate, DateError> {
    let s = s.trim();
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(date);
    }
    for fmt in DATE_TIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(dt.date());
        }
    }
    // Date-times carrying an offset keep the date as seen in that offset.
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.date_naive())
        .map_err(|_| DateError::InvalidGregorian {
            input: s.to_string(),
        })
}

/// A record that carries a canonical Hijri identifier, such as an
/// attendance document keyed by day.
pub trait HijriKeyed {
    fn hijri_key(&self) -> &str;
}

impl HijriKeyed for crate::table::CalendarEntry {
    fn hijri_key(&self) -> &str {
        self.hijri_id()
    }
}

impl HijriKeyed for crate::converter::HijriConversion {
    fn hijri_key(&self) -> &str {
        &self.formatted
    }
}

/// Anything that can be rendered as a Hijri date.
#[derive(Clone)]
pub enum HijriInput<'a> {
    /// An already-resolved Hijri date
    Date(HijriDate),
    /// A canonical `YYYY-MM-DD` Hijri identifier
    Id(&'a str),
    /// A Gregorian date to convert first
    Gregorian(DateInput<'a>),
    /// A record carrying a Hijri identifier
    Keyed(&'a dyn HijriKeyed),
}

impl<'a> From<HijriDate> for HijriInput<'a> {
    fn from(d: HijriDate) -> Self {
        HijriInput::Date(d)
    }
}

impl<'a> From<&'a str> for HijriInput<'a> {
    fn from(s: &'a str) -> Self {
        HijriInput::Id(s)
    }
}

impl<'a> From<&'a String> for HijriInput<'a> {
    fn from(s: &'a String) -> Self {
        HijriInput::Id(s)
    }
}

impl<'a> From<DateInput<'a>> for HijriInput<'a> {
    fn from(d: DateInput<'a>) -> Self {
        HijriInput::Gregorian(d)
    }
}

impl<'a> From<NaiveDate> for HijriInput<'a> {
    fn from(d: NaiveDate) -> Self {
        HijriInput::Gregorian(DateInput::Date(d))
    }
}

impl<'a> From<&'a crate::table::CalendarEntry> for HijriInput<'a> {
    fn from(entry: &'a crate::table::CalendarEntry) -> Self {
        HijriInput::Keyed(entry)
    }
}

impl<'a> From<&'a crate::converter::HijriConversion> for HijriInput<'a> {
    fn from(conversion: &'a crate::converter::HijriConversion) -> Self {
        HijriInput::Keyed(conversion)
    }
}

impl<'a> From<&'a dyn HijriKeyed> for HijriInput<'a> {
    fn from(record: &'a dyn HijriKeyed) -> Self {
        HijriInput::Keyed(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_accepts_date_and_date_time() {
        let want = NaiveDate::from_ymd_opt(2025, 11, 26).unwrap();
        assert_eq!(DateInput::from("2025-11-26").to_date().unwrap(), want);
        assert_eq!(DateInput::from("2025-11-26T12:00:00").to_date().unwrap(), want);
        assert_eq!(DateInput::from("2025-11-26 08:30:00").to_date().unwrap(), want);
        assert_eq!(
            DateInput::from("2025-11-26T23:30:00+03:00").to_date().unwrap(),
            want
        );
    }

    #[test]
    fn test_text_rejects_garbage() {
        assert!(matches!(
            DateInput::from("yesterday").to_date(),
            Err(DateError::InvalidGregorian { .. })
        ));
        assert!(DateInput::from("2025-02-30").to_date().is_err());
    }

    #[test]
    fn test_zoned_uses_own_offset() {
        let riyadh = FixedOffset::east_opt(3 * 3600).unwrap();
        let dt = riyadh.with_ymd_and_hms(2025, 11, 27, 1, 0, 0).unwrap();
        // 2025-11-26 22:00 UTC, but the 27th in Riyadh
        let input = DateInput::from(dt);
        assert_eq!(
            input.to_date().unwrap(),
            NaiveDate::from_ymd_opt(2025, 11, 27).unwrap()
        );
    }
}
