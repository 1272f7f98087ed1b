//! Error types for date conversion and calendar table construction.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors that can occur when parsing or converting a date.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DateError {
    #[error("invalid gregorian date: '{input}'")]
    InvalidGregorian { input: String },

    #[error("invalid hijri date: '{input}'")]
    InvalidHijri { input: String },

    #[error("hijri date out of range: year {year}, month {month}, day {day}")]
    HijriOutOfRange { year: i32, month: u32, day: u32 },

    #[error("hijri month {month} has {days} days; day {day} does not exist")]
    NotInMonth { month: String, day: u32, days: u32 },

    #[error("invalid month key: '{input}' (expected YYYY-MM)")]
    InvalidMonthKey { input: String },

    #[error("approximated gregorian date overflows the supported range")]
    Overflow,
}

/// Defects found while building a calendar table from curated data.
///
/// These are data-authoring errors: a table that produces one of these
/// must be fixed at the source, never patched up at runtime.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TableError {
    #[error("malformed calendar data: {reason}")]
    Malformed { reason: String },

    #[error("calendar table is empty")]
    Empty,

    #[error("entry {index}: {source}")]
    InvalidEntry {
        index: usize,
        #[source]
        source: DateError,
    },

    #[error("entry {index}: expected gregorian {expected}, found {found}")]
    NotContiguous {
        index: usize,
        expected: NaiveDate,
        found: NaiveDate,
    },

    #[error("duplicate hijri date {hijri}")]
    DuplicateHijri { hijri: String },

    #[error("entry {hijri}: redundant field {field} is {found}, hijri key says {expected}")]
    FieldMismatch {
        hijri: String,
        field: &'static str,
        expected: u32,
        found: u32,
    },

    #[error("entry {gregorian}: day name '{found}' does not match weekday '{expected}'")]
    DayNameMismatch {
        gregorian: NaiveDate,
        expected: &'static str,
        found: String,
    },

    #[error("hijri month {month} is broken: {reason}")]
    BrokenMonth { month: String, reason: String },
}

/// Either failure, for the convenience functions that load the built-in table.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error(transparent)]
    Table(#[from] TableError),

    #[error(transparent)]
    Date(#[from] DateError),
}
