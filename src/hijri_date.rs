//! Hijri date and month-key value types.
//!
//! The canonical text form of a [`HijriDate`] is `YYYY-MM-DD` with every
//! field zero-padded. Surrounding systems use that string verbatim as a
//! storage key and compare keys lexicographically, so the text order must
//! always agree with the structural `(year, month, day)` order. Fixed-width
//! padding and the 1..=9999 year range guarantee this.

use std::fmt;
use std::str::FromStr;

use crate::error::DateError;

const MAX_YEAR: i32 = 9999;
const MAX_DAY: u32 = 30;

/// A date in the Hijri calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HijriDate {
    year: i32,
    month: u32,
    day: u32,
}

impl HijriDate {
    /// Create a Hijri date, validating field ranges.
    ///
    /// Whether a given month really has a 30th day is only known from
    /// curated data, so day 30 is always accepted here.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        if !(1..=MAX_YEAR).contains(&year) || !(1..=12).contains(&month) || !(1..=MAX_DAY).contains(&day)
        {
            return Err(DateError::HijriOutOfRange { year, month, day });
        }
        Ok(HijriDate { year, month, day })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// The `YYYY-MM` key of the month this date belongs to.
    pub fn month_key(&self) -> MonthKey {
        MonthKey {
            year: self.year,
            month: self.month,
        }
    }

    /// Canonical `YYYY-MM-DD` identifier.
    pub fn to_id(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for HijriDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for HijriDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DateError::InvalidHijri {
            input: s.to_string(),
        };

        let mut fields = s.trim().split('-');
        let (Some(y), Some(m), Some(d), None) =
            (fields.next(), fields.next(), fields.next(), fields.next())
        else {
            return Err(invalid());
        };

        let year = parse_field(y).ok_or_else(invalid)?;
        let month = parse_field(m).ok_or_else(invalid)?;
        let day = parse_field(d).ok_or_else(invalid)?;

        let year = i32::try_from(year).map_err(|_| invalid())?;
        HijriDate::new(year, month, day).map_err(|_| invalid())
    }
}

/// A Hijri year and month, written `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    pub fn new(year: i32, month: u32) -> Result<Self, DateError> {
        if !(1..=MAX_YEAR).contains(&year) || !(1..=12).contains(&month) {
            return Err(DateError::HijriOutOfRange { year, month, day: 1 });
        }
        Ok(MonthKey { year, month })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// The first day of this month.
    pub fn first_day(&self) -> HijriDate {
        HijriDate {
            year: self.year,
            month: self.month,
            day: 1,
        }
    }

    /// The following month, or `None` past the last representable year.
    pub fn next(&self) -> Option<MonthKey> {
        if self.month == 12 {
            MonthKey::new(self.year + 1, 1).ok()
        } else {
            Some(MonthKey {
                year: self.year,
                month: self.month + 1,
            })
        }
    }

    /// The preceding month, or `None` before year 1.
    pub fn previous(&self) -> Option<MonthKey> {
        if self.month == 1 {
            MonthKey::new(self.year - 1, 12).ok()
        } else {
            Some(MonthKey {
                year: self.year,
                month: self.month - 1,
            })
        }
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthKey {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DateError::InvalidMonthKey {
            input: s.to_string(),
        };

        let (y, m) = s.trim().split_once('-').ok_or_else(invalid)?;
        let year = parse_field(y).ok_or_else(invalid)?;
        let month = parse_field(m).ok_or_else(invalid)?;
        let year = i32::try_from(year).map_err(|_| invalid())?;
        MonthKey::new(year, month).map_err(|_| invalid())
    }
}

/// Parse an unsigned decimal field made only of ASCII digits.
fn parse_field(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_form_is_zero_padded() {
        let date = HijriDate::new(1447, 6, 1).unwrap();
        assert_eq!(date.to_string(), "1447-06-01");
        assert_eq!(date.month_key().to_string(), "1447-06");
    }

    #[test]
    fn test_parse_rejects_bad_shapes() {
        assert!("1447-06".parse::<HijriDate>().is_err());
        assert!("1447-06-01-02".parse::<HijriDate>().is_err());
        assert!("1447-13-01".parse::<HijriDate>().is_err());
        assert!("1447-06-31".parse::<HijriDate>().is_err());
        assert!("1447-+6-01".parse::<HijriDate>().is_err());
        assert!("abcd-06-01".parse::<HijriDate>().is_err());
    }

    #[test]
    fn test_text_order_matches_structural_order() {
        let a = HijriDate::new(999, 12, 30).unwrap();
        let b = HijriDate::new(1447, 1, 1).unwrap();
        let c = HijriDate::new(1447, 1, 2).unwrap();
        assert!(a < b && b < c);
        assert!(a.to_string() < b.to_string());
        assert!(b.to_string() < c.to_string());
    }

    #[test]
    fn test_month_key_stepping() {
        let key: MonthKey = "1447-12".parse().unwrap();
        assert_eq!(key.next().unwrap().to_string(), "1448-01");
        assert_eq!(key.previous().unwrap().to_string(), "1447-11");
        assert_eq!(MonthKey::new(1, 1).unwrap().previous(), None);
        assert_eq!(key.next().unwrap().first_day().to_string(), "1448-01-01");
    }
}
