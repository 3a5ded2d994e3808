//! Date Helpers
//!
//! Parsing and display of feed publication dates.
//! Dates without an offset are read as UTC.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeDelta, Utc};

use crate::config::DateStyle;

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Text shown for unparseable dates
pub const INVALID_DATE: &str = "Invalid Date";

/// Parse an ISO-8601 date or date-time. Returns `None` for an invalid date.
pub fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Display a raw date string; missing dates print nothing
pub fn format_date(raw: Option<&str>, style: DateStyle) -> String {
    let Some(raw) = raw else {
        return String::new();
    };
    match parse_date(raw) {
        Some(date) => match style {
            DateStyle::Long => date.format("%B %-d, %Y").to_string(),
            DateStyle::Short => date.format("%b %-d, %Y").to_string(),
        },
        None => INVALID_DATE.to_string(),
    }
}

/// Whether an item dated `raw` was published within `days` of `now`
pub fn is_new(raw: Option<&str>, now: DateTime<Utc>, days: i64) -> bool {
    let Some(date) = raw.and_then(parse_date) else {
        return false;
    };
    now.signed_duration_since(date) <= TimeDelta::days(days)
}

/// Current time from the browser clock
pub fn now() -> DateTime<Utc> {
    DateTime::from_timestamp_millis(js_sys::Date::now() as i64).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_plain_date_is_utc_midnight() {
        let date = parse_date("2024-01-05").unwrap();
        assert_eq!(date, Utc.with_ymd_and_hms(2024, 1, 5, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_datetimes() {
        let expected = Utc.with_ymd_and_hms(2024, 1, 5, 10, 30, 0).unwrap();
        assert_eq!(parse_date("2024-01-05T10:30:00Z"), Some(expected));
        assert_eq!(parse_date("2024-01-05T12:30:00+02:00"), Some(expected));
        assert_eq!(parse_date("2024-01-05T10:30:00"), Some(expected));
        assert_eq!(parse_date("2024-01-05 10:30"), Some(expected));
    }

    #[test]
    fn test_invalid_dates() {
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("yesterday"), None);
        assert_eq!(parse_date("2024-13-40"), None);
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(Some("2024-01-05"), DateStyle::Long), "January 5, 2024");
        assert_eq!(format_date(Some("2024-01-05"), DateStyle::Short), "Jan 5, 2024");
        assert_eq!(format_date(Some("soon"), DateStyle::Long), INVALID_DATE);
        assert_eq!(format_date(None, DateStyle::Long), "");
    }

    #[test]
    fn test_is_new() {
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();
        assert!(is_new(Some("2024-03-10"), now, 14));
        assert!(is_new(Some("2024-03-01T12:00:00Z"), now, 14));
        assert!(!is_new(Some("2024-02-01"), now, 14));
        assert!(is_new(Some("2024-04-01"), now, 14));
        assert!(!is_new(Some("garbage"), now, 14));
        assert!(!is_new(None, now, 14));
    }
}
