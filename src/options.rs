//! Calendar options and configuration.

use crate::locale::Locale;

/// Digit shapes used when rendering numbers in display strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Numerals {
    /// 0123456789
    #[default]
    Western,
    /// ٠١٢٣٤٥٦٧٨٩
    ArabicIndic,
}

impl Numerals {
    /// Render a non-negative number in these digits.
    pub fn render(&self, n: impl Into<i64>) -> String {
        let text = n.into().to_string();
        match self {
            Numerals::Western => text,
            Numerals::ArabicIndic => text
                .chars()
                .map(|c| match c.to_digit(10) {
                    Some(d) => char::from_u32(0x0660 + d).unwrap_or(c),
                    None => c,
                })
                .collect(),
        }
    }
}

/// Options shared by conversion and formatting.
#[derive(Debug, Clone, Default)]
pub struct CalendarOptions {
    /// The locale for names and placeholders.
    pub locale: Locale,
    /// The digits used in formatted output.
    pub numerals: Numerals,
}

impl CalendarOptions {
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn with_numerals(mut self, numerals: Numerals) -> Self {
        self.numerals = numerals;
        self
    }
}
