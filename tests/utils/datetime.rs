use barboard::utils::datetime::{format_time_range, parse_date, relative_date};
use chrono::NaiveDate;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_parse_and_format() {
    let date = parse_date("2025-02-28").unwrap();
    assert_eq!(date, day(2025, 2, 28));
    assert!(parse_date("28/02/2025").is_err());
}

#[test]
fn test_time_range() {
    assert_eq!(format_time_range(Some("19:00:00"), Some("22:00:00")), "19:00:00 - 22:00:00");
    assert_eq!(format_time_range(None, Some("22:00")), " - 22:00");
}

#[test]
fn test_relative_dates() {
    // Wednesday
    let today = day(2025, 5, 14);

    assert_eq!(relative_date("2025-05-14", today).as_deref(), Some("today"));
    assert_eq!(relative_date("2025-05-15", today).as_deref(), Some("tomorrow"));
    assert_eq!(relative_date("2025-05-13", today).as_deref(), Some("yesterday"));
    assert_eq!(relative_date("2025-05-16", today).as_deref(), Some("next Friday"));
    assert_eq!(relative_date("2025-05-10", today).as_deref(), Some("last Saturday"));
    assert_eq!(relative_date("2025-05-26", today).as_deref(), Some("in 12 days"));
    assert_eq!(relative_date("2025-04-24", today).as_deref(), Some("20 days ago"));
    assert_eq!(relative_date("2025-08-01", today), None);
    assert_eq!(relative_date("not a date", today), None);
}
