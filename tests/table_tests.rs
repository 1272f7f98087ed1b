//! Properties of the built-in curated table.

use std::collections::BTreeMap;
use std::thread;

use chrono::{Datelike, NaiveDate};
use halaqa_calendar::{CalendarTable, Locale, MonthKey};

fn table() -> &'static CalendarTable {
    CalendarTable::builtin().expect("built-in table must load")
}

#[test]
fn test_builtin_covers_hijri_1447() {
    let table = table();
    assert_eq!(table.len(), 355);
    assert_eq!(table.first().unwrap().hijri_id(), "1447-01-01");
    assert_eq!(
        table.first().unwrap().gregorian(),
        NaiveDate::from_ymd_opt(2025, 6, 26).unwrap()
    );
    assert_eq!(table.last().unwrap().hijri_id(), "1447-12-29");
    assert_eq!(
        table.last().unwrap().gregorian(),
        NaiveDate::from_ymd_opt(2026, 6, 15).unwrap()
    );
}

#[test]
fn test_builtin_is_shared() {
    let a = CalendarTable::builtin().unwrap();
    let b = CalendarTable::builtin().unwrap();
    assert!(std::ptr::eq(a, b));
}

#[test]
fn test_bijection_within_coverage() {
    let table = table();
    for entry in table.entries() {
        let by_hijri = table.lookup_by_hijri(entry.hijri_id()).unwrap();
        assert_eq!(by_hijri.gregorian(), entry.gregorian());

        let key = entry.gregorian().format("%Y-%m-%d").to_string();
        let by_gregorian = table.lookup_by_gregorian(&key).unwrap();
        assert_eq!(by_gregorian.hijri_id(), entry.hijri_id());
    }
}

#[test]
fn test_day_names_agree_with_weekdays() {
    let locale = Locale::ar_sa();
    for entry in table().entries() {
        assert_eq!(
            entry.day_name(),
            locale.day_name(entry.gregorian().weekday()),
            "day name of {}",
            entry.gregorian()
        );
    }
}

#[test]
fn test_gregorian_span_is_contiguous() {
    let entries = table().entries();
    for pair in entries.windows(2) {
        assert_eq!(pair[0].gregorian().succ_opt(), Some(pair[1].gregorian()));
    }
}

#[test]
fn test_every_month_runs_one_to_n() {
    let mut days: BTreeMap<MonthKey, Vec<u32>> = BTreeMap::new();
    for entry in table().entries() {
        days.entry(entry.hijri().month_key())
            .or_default()
            .push(entry.hijri_day());
    }
    assert_eq!(days.len(), 12);
    for (key, list) in days {
        let n = list.len() as u32;
        assert!(n == 29 || n == 30, "{key} has {n} days");
        assert_eq!(list, (1..=n).collect::<Vec<_>>(), "{key}");
        assert_eq!(table().days_in_month(key), Some(n));
    }
}

#[test]
fn test_month_lengths_1447() {
    let lengths: Vec<u32> = table()
        .month_keys()
        .map(|k| table().days_in_month(k).unwrap())
        .collect();
    assert_eq!(lengths, vec![30, 29, 30, 30, 30, 29, 30, 29, 30, 29, 30, 29]);
}

#[test]
fn test_month_keys_ascending() {
    let keys: Vec<String> = table().month_keys().map(|k| k.to_string()).collect();
    assert_eq!(keys.first().map(String::as_str), Some("1447-01"));
    assert_eq!(keys.last().map(String::as_str), Some("1447-12"));
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted);
}

#[test]
fn test_lookup_misses_are_none() {
    let table = table();
    assert!(table.lookup_by_gregorian("2030-01-01").is_none());
    assert!(table.lookup_by_gregorian("not a date").is_none());
    assert!(table.lookup_by_hijri("1448-01-01").is_none());
    assert!(table.lookup_by_hijri("1447-13-01").is_none());
    assert!(table.month_entries(MonthKey::new(1446, 12).unwrap()).is_empty());
    assert!(!table.covers(NaiveDate::from_ymd_opt(2025, 6, 25).unwrap()));
    assert!(table.covers(NaiveDate::from_ymd_opt(2025, 6, 26).unwrap()));
}

#[test]
fn test_concurrent_readers_see_same_table() {
    let handles: Vec<_> = (0..4)
        .map(|_| {
            thread::spawn(|| {
                let table = CalendarTable::builtin().unwrap();
                table
                    .lookup_by_gregorian("2025-11-22")
                    .map(|e| e.hijri_id().to_string())
            })
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap().as_deref(), Some("1447-06-01"));
    }
}

#[test]
fn test_appending_month_extends_coverage() {
    let locale = Locale::ar_sa();
    let mut json = String::from("[");
    let start = NaiveDate::from_ymd_opt(2026, 6, 16).unwrap();
    for (i, day) in start.iter_days().take(30).enumerate() {
        if i > 0 {
            json.push(',');
        }
        json.push_str(&format!(
            r#"{{"gregorian":"{}","hijri":"1448-01-{:02}","hijriYear":1448,"hijriMonth":1,"hijriDay":{},"dayName":"{}"}}"#,
            day,
            i + 1,
            i + 1,
            locale.day_name(day.weekday())
        ));
    }
    json.push(']');

    let table = CalendarTable::from_json(&json).unwrap();
    assert_eq!(table.len(), 30);
    assert_eq!(
        table.lookup_by_hijri("1448-01-01").unwrap().gregorian(),
        start
    );
}
