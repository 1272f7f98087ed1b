//! Curated Hijri/Gregorian day table.
//!
//! The table is static configuration: a contiguous run of verified days,
//! each pairing a Gregorian date with its Hijri date as published by the
//! Umm al-Qura calendar authority. It is loaded once, checked against every
//! structural invariant, and then only read.
//!
//! Extending coverage means appending verified entries to the data file
//! under `data/`; nothing at runtime adds to or edits a loaded table.

use std::collections::{BTreeMap, HashMap};
use std::ops::Range;
use std::sync::OnceLock;

use chrono::{Datelike, NaiveDate};
use serde::Deserialize;

use crate::error::TableError;
use crate::hijri_date::{HijriDate, MonthKey};
use crate::locale::Locale;

/// Embedded curated data: Umm al-Qura, Hijri year 1447.
const BUILTIN_DATA: &str = include_str!("../data/umm_al_qura_1447.json");

/// One curated day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarEntry {
    gregorian: NaiveDate,
    hijri: HijriDate,
    hijri_id: String,
    day_name: String,
}

impl CalendarEntry {
    pub fn gregorian(&self) -> NaiveDate {
        self.gregorian
    }

    pub fn hijri(&self) -> HijriDate {
        self.hijri
    }

    /// Canonical `YYYY-MM-DD` Hijri identifier.
    pub fn hijri_id(&self) -> &str {
        &self.hijri_id
    }

    pub fn hijri_year(&self) -> i32 {
        self.hijri.year()
    }

    pub fn hijri_month(&self) -> u32 {
        self.hijri.month()
    }

    pub fn hijri_day(&self) -> u32 {
        self.hijri.day()
    }

    /// Weekday name as written in the curated source.
    pub fn day_name(&self) -> &str {
        &self.day_name
    }
}

/// A record as it appears in the curated data file.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEntry {
    pub gregorian: NaiveDate,
    pub hijri: String,
    pub hijri_year: i32,
    pub hijri_month: u32,
    pub hijri_day: u32,
    pub day_name: String,
}

/// Immutable lookup table over curated days.
#[derive(Debug, Clone)]
pub struct CalendarTable {
    entries: Vec<CalendarEntry>,
    by_gregorian: HashMap<NaiveDate, usize>,
    by_hijri: HashMap<HijriDate, usize>,
    months: BTreeMap<MonthKey, Range<usize>>,
}

impl CalendarTable {
    /// The embedded Umm al-Qura table, built once per process.
    pub fn builtin() -> Result<&'static CalendarTable, TableError> {
        static BUILTIN: OnceLock<Result<CalendarTable, TableError>> = OnceLock::new();
        BUILTIN
            .get_or_init(|| CalendarTable::from_json(BUILTIN_DATA))
            .as_ref()
            .map_err(Clone::clone)
    }

    /// Parse and validate a JSON array of curated records.
    pub fn from_json(json: &str) -> Result<Self, TableError> {
        let raw: Vec<RawEntry> =
            serde_json::from_str(json).map_err(|e| TableError::Malformed {
                reason: e.to_string(),
            })?;
        Self::from_entries(raw)
    }

    /// Validate curated records and build both lookup maps.
    #[tracing::instrument(skip_all, fields(records = raw.len()))]
    pub fn from_entries(raw: Vec<RawEntry>) -> Result<Self, TableError> {
        if raw.is_empty() {
            return Err(TableError::Empty);
        }

        // Weekday names are checked against the locale the data is authored in.
        let locale = Locale::ar_sa();
        let mut entries = Vec::with_capacity(raw.len());
        for (index, record) in raw.into_iter().enumerate() {
            entries.push(check_entry(index, record, &locale)?);
        }

        let mut by_gregorian = HashMap::with_capacity(entries.len());
        let mut by_hijri = HashMap::with_capacity(entries.len());
        let mut months: BTreeMap<MonthKey, Range<usize>> = BTreeMap::new();

        for (index, entry) in entries.iter().enumerate() {
            if index > 0 {
                check_sequence(index, &entries[index - 1], entry)?;
            }
            by_gregorian.insert(entry.gregorian, index);
            if by_hijri.insert(entry.hijri, index).is_some() {
                return Err(TableError::DuplicateHijri {
                    hijri: entry.hijri_id.clone(),
                });
            }
            months
                .entry(entry.hijri.month_key())
                .and_modify(|range| range.end = index + 1)
                .or_insert(index..index + 1);
        }

        for (key, range) in &months {
            check_month(key, &entries[range.clone()])?;
        }

        let table = CalendarTable {
            entries,
            by_gregorian,
            by_hijri,
            months,
        };

        if let (Some(first), Some(last)) = (table.first(), table.last()) {
            tracing::debug!(
                days = table.len(),
                months = table.months.len(),
                first = %first.gregorian,
                last = %last.gregorian,
                "calendar table built"
            );
        }

        Ok(table)
    }

    /// Exact lookup by Gregorian `YYYY-MM-DD`.
    pub fn lookup_by_gregorian(&self, date: &str) -> Option<&CalendarEntry> {
        let date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").ok()?;
        self.entry_for_date(date)
    }

    /// Exact lookup by Hijri `YYYY-MM-DD`.
    pub fn lookup_by_hijri(&self, hijri: &str) -> Option<&CalendarEntry> {
        let hijri: HijriDate = hijri.parse().ok()?;
        self.entry_for_hijri(hijri)
    }

    pub fn entry_for_date(&self, date: NaiveDate) -> Option<&CalendarEntry> {
        self.by_gregorian.get(&date).map(|&i| &self.entries[i])
    }

    pub fn entry_for_hijri(&self, hijri: HijriDate) -> Option<&CalendarEntry> {
        self.by_hijri.get(&hijri).map(|&i| &self.entries[i])
    }

    /// All entries in Gregorian order.
    pub fn entries(&self) -> &[CalendarEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First covered day.
    pub fn first(&self) -> Option<&CalendarEntry> {
        self.entries.first()
    }

    /// Last covered day.
    pub fn last(&self) -> Option<&CalendarEntry> {
        self.entries.last()
    }

    /// Whether a Gregorian date falls inside the curated span.
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.by_gregorian.contains_key(&date)
    }

    /// Every curated month, ascending.
    pub fn month_keys(&self) -> impl Iterator<Item = MonthKey> + '_ {
        self.months.keys().copied()
    }

    /// The entries of one month, in day order. Empty if the month is not curated.
    pub fn month_entries(&self, key: MonthKey) -> &[CalendarEntry] {
        match self.months.get(&key) {
            Some(range) => &self.entries[range.clone()],
            None => &[],
        }
    }

    /// Length (29 or 30) of a curated month.
    pub fn days_in_month(&self, key: MonthKey) -> Option<u32> {
        self.month_entries(key).last().map(CalendarEntry::hijri_day)
    }
}

/// Check one record on its own: key shapes, redundant fields, weekday name.
fn check_entry(index: usize, raw: RawEntry, locale: &Locale) -> Result<CalendarEntry, TableError> {
    let hijri: HijriDate = raw
        .hijri
        .parse()
        .map_err(|source| TableError::InvalidEntry { index, source })?;
    let hijri_id = hijri.to_id();

    if hijri_id != raw.hijri {
        return Err(TableError::Malformed {
            reason: format!("entry {index}: hijri key '{}' is not canonical", raw.hijri),
        });
    }

    let year = u32::try_from(raw.hijri_year).unwrap_or(0);
    for (field, expected, found) in [
        ("hijriYear", hijri.year() as u32, year),
        ("hijriMonth", hijri.month(), raw.hijri_month),
        ("hijriDay", hijri.day(), raw.hijri_day),
    ] {
        if expected != found {
            return Err(TableError::FieldMismatch {
                hijri: hijri_id,
                field,
                expected,
                found,
            });
        }
    }

    let expected = locale.day_name(raw.gregorian.weekday());
    if locale.weekday_from_name(&raw.day_name) != Some(raw.gregorian.weekday()) {
        return Err(TableError::DayNameMismatch {
            gregorian: raw.gregorian,
            expected,
            found: raw.day_name,
        });
    }

    Ok(CalendarEntry {
        gregorian: raw.gregorian,
        hijri,
        hijri_id,
        day_name: raw.day_name,
    })
}

/// Check that `cur` is the calendar day after `prev` in both calendars.
fn check_sequence(index: usize, prev: &CalendarEntry, cur: &CalendarEntry) -> Result<(), TableError> {
    let expected = prev.gregorian.succ_opt().unwrap_or(prev.gregorian);
    if cur.gregorian != expected {
        return Err(TableError::NotContiguous {
            index,
            expected,
            found: cur.gregorian,
        });
    }

    let same_month = cur.hijri.month_key() == prev.hijri.month_key();
    let follows = if same_month {
        cur.hijri.day() == prev.hijri.day() + 1
    } else {
        cur.hijri.day() == 1 && prev.hijri.month_key().next() == Some(cur.hijri.month_key())
    };
    if !follows {
        return Err(TableError::BrokenMonth {
            month: cur.hijri.month_key().to_string(),
            reason: format!("{} does not follow {}", cur.hijri_id, prev.hijri_id),
        });
    }
    Ok(())
}

/// Check that a month runs exactly 1..N with N of 29 or 30.
fn check_month(key: &MonthKey, days: &[CalendarEntry]) -> Result<(), TableError> {
    let broken = |reason: String| TableError::BrokenMonth {
        month: key.to_string(),
        reason,
    };

    for (i, entry) in days.iter().enumerate() {
        let want = i as u32 + 1;
        if entry.hijri.day() != want {
            return Err(broken(format!("day {want} missing")));
        }
    }
    let len = days.len();
    if !(29..=30).contains(&len) {
        return Err(broken(format!("{len} days curated, expected 29 or 30")));
    }
    Ok(())
}
