//! Study-day sets for Hijri months.
//!
//! Results are built only from curated entries. A month missing from the
//! table yields an empty set; approximated dates are never used to invent
//! study days.

use crate::clock::Clock;
use crate::converter::DateConverter;
use crate::error::DateError;
use crate::fallback::FallbackCalendar;
use crate::hijri_date::{HijriDate, MonthKey};
use crate::study_day::{is_study_day, weekday_index};
use crate::table::CalendarEntry;

/// Anything that names a Hijri month.
pub trait IntoMonthKey {
    fn into_month_key(self) -> Result<MonthKey, DateError>;
}

impl IntoMonthKey for MonthKey {
    fn into_month_key(self) -> Result<MonthKey, DateError> {
        Ok(self)
    }
}

impl IntoMonthKey for &str {
    fn into_month_key(self) -> Result<MonthKey, DateError> {
        self.parse()
    }
}

impl IntoMonthKey for &String {
    fn into_month_key(self) -> Result<MonthKey, DateError> {
        self.parse()
    }
}

/// Builds ordered study-day identifiers from curated months.
#[derive(Debug, Clone, Copy)]
pub struct StudyDaySetBuilder<'a, F, C> {
    converter: &'a DateConverter<'a, F, C>,
}

impl<'a, F: FallbackCalendar, C: Clock> StudyDaySetBuilder<'a, F, C> {
    pub fn new(converter: &'a DateConverter<'a, F, C>) -> Self {
        StudyDaySetBuilder { converter }
    }

    /// Study-day identifiers of one month, ascending.
    pub fn study_days_for_month(&self, key: impl IntoMonthKey) -> Result<Vec<String>, DateError> {
        let key = key.into_month_key()?;
        Ok(self.study_entries(key).map(|e| e.hijri_id().to_string()).collect())
    }

    /// Study-day identifiers of the current Hijri month.
    ///
    /// "Today" is resolved through the converter, so a date outside
    /// coverage maps to an approximate month that is then most likely
    /// absent from the table, giving an empty set.
    pub fn study_days_for_current_month(&self) -> Result<Vec<String>, DateError> {
        let today = self.converter.today_hijri()?;
        self.study_days_for_month(today.date.month_key())
    }

    /// Study-day identifiers between two Hijri dates, both inclusive.
    pub fn study_days_between(&self, from: HijriDate, to: HijriDate) -> Vec<String> {
        if from > to {
            return Vec::new();
        }
        let table = self.converter.table();
        let mut days = Vec::new();
        let mut key = Some(from.month_key());
        while let Some(k) = key.filter(|k| *k <= to.month_key()) {
            days.extend(
                table
                    .month_entries(k)
                    .iter()
                    .filter(|e| e.hijri() >= from && e.hijri() <= to)
                    .filter(|e| is_study_day(e.gregorian()))
                    .map(|e| e.hijri_id().to_string()),
            );
            key = k.next();
        }
        days
    }

    /// Study days of one month grouped into Sunday-started weeks.
    pub fn study_weeks_for_month(&self, key: impl IntoMonthKey) -> Result<Vec<Vec<String>>, DateError> {
        let key = key.into_month_key()?;
        let mut weeks: Vec<Vec<String>> = Vec::new();
        let mut last_index = None;
        for entry in self.study_entries(key) {
            let index = weekday_index(entry.gregorian());
            // A weekday index that does not grow means a new week began.
            let new_week = match last_index {
                Some(prev) => index <= prev,
                None => true,
            };
            if new_week {
                weeks.push(Vec::new());
            }
            if let Some(week) = weeks.last_mut() {
                week.push(entry.hijri_id().to_string());
            }
            last_index = Some(index);
        }
        Ok(weeks)
    }

    fn study_entries(&self, key: MonthKey) -> impl Iterator<Item = &'a CalendarEntry> {
        let entries = self.converter.table().month_entries(key);
        if entries.is_empty() {
            tracing::warn!(month = %key, "hijri month not in curated calendar; no study days");
        }
        entries.iter().filter(|e| is_study_day(e.gregorian()))
    }
}
