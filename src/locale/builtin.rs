//! Built-in locale data.

use chrono::Weekday;

/// Locale settings for Hijri date display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    /// Hijri month names, Muharram first.
    pub month_names: [&'static str; 12],
    /// Weekday names, Sunday first.
    pub day_names: [&'static str; 7],
    /// Marker appended after the year.
    pub era_suffix: &'static str,
    /// Placeholder shown when a date cannot be rendered.
    pub invalid_date: &'static str,
}

impl Default for Locale {
    fn default() -> Self {
        Self::ar_sa()
    }
}

impl Locale {
    /// Arabic (Saudi Arabia) locale.
    pub fn ar_sa() -> Self {
        Locale {
            month_names: [
                "محرم",
                "صفر",
                "ربيع الأول",
                "ربيع الآخر",
                "جمادى الأولى",
                "جمادى الآخرة",
                "رجب",
                "شعبان",
                "رمضان",
                "شوال",
                "ذو القعدة",
                "ذو الحجة",
            ],
            day_names: [
                "الأحد",
                "الإثنين",
                "الثلاثاء",
                "الأربعاء",
                "الخميس",
                "الجمعة",
                "السبت",
            ],
            era_suffix: "هـ",
            invalid_date: "تاريخ غير صالح",
        }
    }

    /// US English locale.
    pub fn en_us() -> Self {
        Locale {
            month_names: [
                "Muharram",
                "Safar",
                "Rabi al-Awwal",
                "Rabi al-Akhir",
                "Jumada al-Ula",
                "Jumada al-Akhirah",
                "Rajab",
                "Shaban",
                "Ramadan",
                "Shawwal",
                "Dhu al-Qidah",
                "Dhu al-Hijjah",
            ],
            day_names: [
                "Sunday",
                "Monday",
                "Tuesday",
                "Wednesday",
                "Thursday",
                "Friday",
                "Saturday",
            ],
            era_suffix: "AH",
            invalid_date: "invalid date",
        }
    }

    /// Name of a Hijri month (1-12).
    pub fn month_name(&self, month: u32) -> Option<&'static str> {
        let index = usize::try_from(month).ok()?.checked_sub(1)?;
        self.month_names.get(index).copied()
    }

    /// Name of a weekday.
    pub fn day_name(&self, weekday: Weekday) -> &'static str {
        self.day_names[weekday.num_days_from_sunday() as usize]
    }

    /// Resolve a weekday from its name in this locale.
    ///
    /// Alef-with-hamza spellings are folded to bare alef, so "الاثنين"
    /// matches "الإثنين".
    pub fn weekday_from_name(&self, name: &str) -> Option<Weekday> {
        let wanted = fold_alef(name.trim());
        let index = self
            .day_names
            .iter()
            .position(|candidate| fold_alef(candidate) == wanted)?;
        Some(WEEK_FROM_SUNDAY[index])
    }
}

const WEEK_FROM_SUNDAY: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

fn fold_alef(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            'أ' | 'إ' | 'آ' => 'ا',
            other => other,
        })
        .collect()
}
