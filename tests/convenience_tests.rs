use halaqa_calendar::{
    format_hijri, gregorian_to_hijri, hijri_to_gregorian, study_days_for_month,
    today_for_storage, Error, HijriDate,
};

#[test]
fn test_gregorian_to_hijri_convenience() {
    let result = gregorian_to_hijri("2025-11-22").unwrap();
    assert_eq!(result.formatted, "1447-06-01");
}

#[test]
fn test_hijri_to_gregorian_convenience() {
    let result = hijri_to_gregorian(1447, 6, 1).unwrap();
    assert_eq!(result.date.to_string(), "2025-11-22");
}

#[test]
fn test_today_for_storage_is_canonical() {
    let id = today_for_storage().unwrap();
    let parsed: HijriDate = id.parse().unwrap();
    assert_eq!(parsed.to_string(), id);
}

#[test]
fn test_study_days_convenience() {
    let days = study_days_for_month("1447-09").unwrap();
    assert!(days.iter().all(|d| d.starts_with("1447-09-")));
    assert!(!days.is_empty());
}

#[test]
fn test_convenience_errors_wrap_date_errors() {
    assert!(matches!(gregorian_to_hijri("nope"), Err(Error::Date(_))));
    assert!(matches!(study_days_for_month("1447"), Err(Error::Date(_))));
}

#[test]
fn test_format_hijri_convenience() {
    assert_eq!(format_hijri("1447-09-01"), "1 رمضان 1447 هـ");
    assert_eq!(format_hijri("1447-00-01"), "تاريخ غير صالح");
}
