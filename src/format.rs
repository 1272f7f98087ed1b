//! Display formatting for Hijri dates.
//!
//! Output has the shape `<day> <month name> <year> <era>`, for example
//! `1 جمادى الآخرة 1447 هـ`. Formatting is a terminal display path: bad
//! input renders the locale's invalid-date placeholder instead of failing.

use chrono::Datelike;

use crate::clock::Clock;
use crate::converter::DateConverter;
use crate::error::DateError;
use crate::fallback::FallbackCalendar;
use crate::hijri_date::HijriDate;
use crate::input::HijriInput;

/// Renders Hijri dates for display.
#[derive(Debug, Clone, Copy)]
pub struct HijriFormatter<'a, F, C> {
    converter: &'a DateConverter<'a, F, C>,
}

impl<'a, F: FallbackCalendar, C: Clock> HijriFormatter<'a, F, C> {
    pub fn new(converter: &'a DateConverter<'a, F, C>) -> Self {
        HijriFormatter { converter }
    }

    /// Format any supported input, or return the invalid-date placeholder.
    ///
    /// The placeholder comes from the configured locale: `تاريخ غير صالح`
    /// with the default Arabic locale, `invalid date` with
    /// [`Locale::en_us`](crate::Locale::en_us).
    pub fn format<'i>(&self, input: impl Into<HijriInput<'i>>) -> String {
        match self.resolve(input.into()) {
            Ok(date) => self.render(date),
            Err(err) => self.invalid(err),
        }
    }

    /// Like [`format`](Self::format), prefixed with the weekday name.
    pub fn format_with_weekday<'i>(&self, input: impl Into<HijriInput<'i>>) -> String {
        let date = match self.resolve(input.into()) {
            Ok(date) => date,
            Err(err) => return self.invalid(err),
        };
        let weekday = match self.converter.hijri_date_to_gregorian(date) {
            Ok(g) if g.is_exact() => Some(self.converter.options().locale.day_name(g.date.weekday())),
            // An estimated Gregorian day would give an unreliable weekday.
            _ => None,
        };
        match weekday {
            Some(name) => format!("{name} {}", self.render(date)),
            None => self.render(date),
        }
    }

    /// Normalize any input shape to a Hijri date.
    pub fn resolve(&self, input: HijriInput<'_>) -> Result<HijriDate, DateError> {
        match input {
            HijriInput::Date(date) => Ok(date),
            HijriInput::Id(id) => id.parse(),
            HijriInput::Gregorian(date) => Ok(self.converter.gregorian_to_hijri(date)?.date),
            HijriInput::Keyed(record) => record.hijri_key().parse(),
        }
    }

    fn render(&self, date: HijriDate) -> String {
        let options = self.converter.options();
        let month = options
            .locale
            .month_name(date.month())
            .unwrap_or(options.locale.invalid_date);
        format!(
            "{} {} {} {}",
            options.numerals.render(date.day()),
            month,
            options.numerals.render(date.year()),
            options.locale.era_suffix
        )
    }

    fn invalid(&self, err: DateError) -> String {
        tracing::debug!(error = %err, "cannot format hijri date");
        self.converter.options().locale.invalid_date.to_string()
    }
}
