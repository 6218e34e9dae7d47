//! Date and time helpers
//!
//! The events service speaks `YYYY-MM-DD` dates and `HH:MM:SS` times. Values are
//! shown as received; the relative hint ("today", "in 3 days") is an optional
//! extra next to the raw date.

use chrono::{Datelike, NaiveDate, Weekday};

/// Date format used on the wire and in date inputs
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Time format the service expects in request bodies
pub const WIRE_TIME_FORMAT: &str = "%H:%M:%S";

/// Parse a date string in YYYY-MM-DD format to NaiveDate
pub fn parse_date(date_str: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(date_str, DATE_FORMAT)
}

/// Render a `start - end` time range. Missing ends render empty.
pub fn format_time_range(start: Option<&str>, end: Option<&str>) -> String {
    format!("{} - {}", start.unwrap_or_default(), end.unwrap_or_default())
}

/// Describe `date_str` relative to `today`
///
/// # Returns
/// * `Some(String)` - "today", "tomorrow", "next Friday", "in 12 days", ...
/// * `None` - when the date does not parse or is more than 30 days away
pub fn relative_date(date_str: &str, today: NaiveDate) -> Option<String> {
    let input_date = parse_date(date_str).ok()?;
    let days_diff = (input_date - today).num_days();

    match days_diff {
        -1 => Some("yesterday".to_string()),
        0 => Some("today".to_string()),
        1 => Some("tomorrow".to_string()),
        diff if diff > 1 && diff <= 7 => Some(format!("next {}", weekday_name(input_date.weekday()))),
        diff if (-7..-1).contains(&diff) => Some(format!("last {}", weekday_name(input_date.weekday()))),
        diff if diff > 7 && diff <= 30 => Some(format!("in {} days", diff)),
        diff if (-30..-7).contains(&diff) => Some(format!("{} days ago", -diff)),
        _ => None,
    }
}

fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
