//! Gregorian/Hijri conversion.
//!
//! [`DateConverter`] is the single authority for moving between the two
//! calendars. Every conversion tries the curated [`CalendarTable`] first and
//! only falls back to approximation when the date lies outside coverage.
//! Fallback results are marked [`ConversionSource::Approximate`] and logged
//! as a coverage miss, so gaps in curated data show up in practice.

use chrono::{Duration, NaiveDate};

use crate::clock::{Clock, SystemClock};
use crate::error::DateError;
use crate::fallback::{approximate_gregorian, FallbackCalendar, TabularCalendar};
use crate::hijri_date::HijriDate;
use crate::input::DateInput;
use crate::options::CalendarOptions;
use crate::study_day;
use crate::table::CalendarTable;

/// Where a converted date came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionSource {
    /// An exact curated entry
    Table,
    /// The fallback approximation; may be off by a day or more
    Approximate,
}

/// Result of converting a Gregorian date to Hijri.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HijriConversion {
    pub date: HijriDate,
    /// Canonical `YYYY-MM-DD` identifier
    pub formatted: String,
    /// Weekday name of the Gregorian day
    pub day_name: String,
    pub source: ConversionSource,
}

impl HijriConversion {
    pub fn year(&self) -> i32 {
        self.date.year()
    }

    pub fn month(&self) -> u32 {
        self.date.month()
    }

    pub fn day(&self) -> u32 {
        self.date.day()
    }

    pub fn is_exact(&self) -> bool {
        self.source == ConversionSource::Table
    }
}

/// Result of converting a Hijri date to Gregorian.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GregorianConversion {
    pub date: NaiveDate,
    pub source: ConversionSource,
}

impl GregorianConversion {
    pub fn is_exact(&self) -> bool {
        self.source == ConversionSource::Table
    }
}

/// Converts between calendars against one curated table.
#[derive(Debug, Clone)]
pub struct DateConverter<'a, F = TabularCalendar, C = SystemClock> {
    table: &'a CalendarTable,
    fallback: F,
    clock: C,
    options: CalendarOptions,
}

impl<'a> DateConverter<'a> {
    /// A converter with the tabular fallback, the system clock and default options.
    pub fn new(table: &'a CalendarTable) -> Self {
        Self::with_options(table, CalendarOptions::default())
    }

    pub fn with_options(table: &'a CalendarTable, options: CalendarOptions) -> Self {
        DateConverter {
            table,
            fallback: TabularCalendar::new(options.locale.clone()),
            clock: SystemClock,
            options,
        }
    }
}

impl<'a, F: FallbackCalendar, C: Clock> DateConverter<'a, F, C> {
    /// Replace the fallback calendar.
    pub fn with_fallback<F2: FallbackCalendar>(self, fallback: F2) -> DateConverter<'a, F2, C> {
        DateConverter {
            table: self.table,
            fallback,
            clock: self.clock,
            options: self.options,
        }
    }

    /// Replace the clock used for "today".
    pub fn with_clock<C2: Clock>(self, clock: C2) -> DateConverter<'a, F, C2> {
        DateConverter {
            table: self.table,
            fallback: self.fallback,
            clock,
            options: self.options,
        }
    }

    pub fn table(&self) -> &'a CalendarTable {
        self.table
    }

    pub fn options(&self) -> &CalendarOptions {
        &self.options
    }

    /// Today's date according to this converter's clock.
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Convert a Gregorian date to Hijri.
    ///
    /// Curated dates come straight from the table. Anything else is
    /// estimated by the fallback calendar and logged as a coverage miss.
    pub fn gregorian_to_hijri<'i>(
        &self,
        date: impl Into<DateInput<'i>>,
    ) -> Result<HijriConversion, DateError> {
        let date = date.into().to_date()?;
        self.convert_date(date)
    }

    fn convert_date(&self, date: NaiveDate) -> Result<HijriConversion, DateError> {
        if let Some(entry) = self.table.entry_for_date(date) {
            return Ok(HijriConversion {
                date: entry.hijri(),
                formatted: entry.hijri_id().to_string(),
                day_name: entry.day_name().to_string(),
                source: ConversionSource::Table,
            });
        }

        let hijri = self.fit_to_curated_month(self.fallback.to_hijri_approx(date)?);
        tracing::warn!(
            gregorian = %date,
            approx = %hijri,
            "date outside curated hijri calendar; using approximation"
        );
        Ok(HijriConversion {
            date: hijri,
            formatted: hijri.to_id(),
            day_name: self.fallback.weekday_name(date),
            source: ConversionSource::Approximate,
        })
    }

    /// Roll an estimated day past the end of a curated month into the next month.
    fn fit_to_curated_month(&self, hijri: HijriDate) -> HijriDate {
        let key = hijri.month_key();
        match self.table.days_in_month(key) {
            Some(days) if hijri.day() > days => key.next().map_or(hijri, |next| next.first_day()),
            _ => hijri,
        }
    }

    /// Convert a Hijri date to Gregorian.
    ///
    /// Outside coverage this uses the linear mean-length estimate, which is
    /// only a rough guide. A day past the end of a curated month is an error,
    /// never an estimate.
    pub fn hijri_to_gregorian(
        &self,
        year: i32,
        month: u32,
        day: u32,
    ) -> Result<GregorianConversion, DateError> {
        let hijri = HijriDate::new(year, month, day)?;
        self.hijri_date_to_gregorian(hijri)
    }

    pub fn hijri_date_to_gregorian(&self, hijri: HijriDate) -> Result<GregorianConversion, DateError> {
        if let Some(entry) = self.table.entry_for_hijri(hijri) {
            return Ok(GregorianConversion {
                date: entry.gregorian(),
                source: ConversionSource::Table,
            });
        }

        let key = hijri.month_key();
        if let Some(days) = self.table.days_in_month(key) {
            return Err(DateError::NotInMonth {
                month: key.to_string(),
                day: hijri.day(),
                days,
            });
        }

        let date = approximate_gregorian(hijri)?;
        tracing::warn!(
            hijri = %hijri,
            approx = %date,
            "hijri date outside curated calendar; using linear estimate"
        );
        Ok(GregorianConversion {
            date,
            source: ConversionSource::Approximate,
        })
    }

    /// Today's Hijri date.
    pub fn today_hijri(&self) -> Result<HijriConversion, DateError> {
        self.convert_date(self.today())
    }

    /// Today's canonical Hijri identifier, as used for storage keys.
    pub fn today_for_storage(&self) -> Result<String, DateError> {
        Ok(self.today_hijri()?.formatted)
    }

    /// Hijri date of the day `days` before today.
    pub fn hijri_days_ago(&self, days: u32) -> Result<HijriConversion, DateError> {
        let date = self
            .today()
            .checked_sub_signed(Duration::days(i64::from(days)))
            .ok_or(DateError::Overflow)?;
        self.convert_date(date)
    }

    /// Whether a Gregorian date is a study day.
    pub fn is_study_day<'i>(&self, date: impl Into<DateInput<'i>>) -> Result<bool, DateError> {
        let date = date.into().to_date()?;
        Ok(study_day::is_study_day(date))
    }

    pub fn is_today_study_day(&self) -> bool {
        study_day::is_study_day(self.today())
    }
}
