//! Coverage misses must be observable as warnings.

use std::io;
use std::sync::{Arc, Mutex};

use halaqa_calendar::{CalendarTable, DateConverter, StudyDaySetBuilder};

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture_warnings<T>(f: impl FnOnce() -> T) -> (T, String) {
    let sink = Captured::default();
    let writer = sink.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::WARN)
        .finish();
    let out = tracing::subscriber::with_default(subscriber, f);
    let logs = String::from_utf8(sink.0.lock().unwrap().clone()).unwrap();
    (out, logs)
}

fn converter() -> DateConverter<'static> {
    DateConverter::new(CalendarTable::builtin().unwrap())
}

#[test]
fn test_gregorian_miss_is_logged() {
    let conv = converter();
    let (result, logs) = capture_warnings(|| conv.gregorian_to_hijri("2030-01-01"));
    assert!(result.is_ok());
    assert!(logs.contains("WARN"), "{logs}");
    assert!(logs.contains("2030-01-01"), "{logs}");
    assert!(logs.contains("approximation"), "{logs}");
}

#[test]
fn test_hijri_miss_is_logged() {
    let conv = converter();
    let (result, logs) = capture_warnings(|| conv.hijri_to_gregorian(1450, 1, 1));
    assert!(result.is_ok());
    assert!(logs.contains("1450-01-01"), "{logs}");
}

#[test]
fn test_missing_month_is_logged() {
    let conv = converter();
    let builder = StudyDaySetBuilder::new(&conv);
    let (days, logs) = capture_warnings(|| builder.study_days_for_month("1449-03"));
    assert!(days.unwrap().is_empty());
    assert!(logs.contains("1449-03"), "{logs}");
}

#[test]
fn test_curated_paths_are_quiet() {
    let conv = converter();
    let builder = StudyDaySetBuilder::new(&conv);
    let (_, logs) = capture_warnings(|| {
        let _ = conv.gregorian_to_hijri("2025-11-22");
        let _ = conv.hijri_to_gregorian(1447, 6, 1);
        let _ = builder.study_days_for_month("1447-06");
    });
    assert!(logs.is_empty(), "{logs}");
}
