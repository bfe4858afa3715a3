//! Timestamp and date helpers.
//!
//! The review backend is not consistent about timestamp formats: some rows
//! carry RFC 3339 strings, others `YYYY-MM-DD HH:MM:SS`. Display code goes
//! through [`format_timestamp`], which normalizes what it recognizes and
//! passes anything else through untouched.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};

/// Display format for record timestamps.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Date format used by date inputs and the filter snapshot.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Format a NaiveDate as "YYYY-MM-DD"
pub fn format_date(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse a date string in "YYYY-MM-DD" format
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).ok()
}

/// Parse a backend timestamp in any of the formats it is known to emit.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f"))
        .ok()
}

/// Normalize a backend timestamp for display, or return it unchanged.
pub fn format_timestamp(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(ts) => ts.format(TIMESTAMP_FORMAT).to_string(),
        None => raw.to_string(),
    }
}

/// Current local time in the display format, used to stamp saved records.
pub fn now_timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_and_parse_date() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let formatted = format_date(&date);
        assert_eq!(formatted, "2024-06-15");
        assert_eq!(parse_date(&formatted), Some(date));
        assert_eq!(parse_date("15/06/2024"), None);
    }

    #[test]
    fn rfc3339_timestamps_are_normalized() {
        assert_eq!(
            format_timestamp("2024-03-01T08:15:30.000Z"),
            "2024-03-01 08:15:30"
        );
    }

    #[test]
    fn space_separated_timestamps_are_normalized() {
        assert_eq!(format_timestamp("2024-03-01 08:15:30.5"), "2024-03-01 08:15:30");
        assert_eq!(format_timestamp("2024-03-01T08:15:30"), "2024-03-01 08:15:30");
    }

    #[test]
    fn unknown_timestamps_pass_through() {
        assert_eq!(format_timestamp("yesterday"), "yesterday");
        assert_eq!(format_timestamp(""), "");
    }

    #[test]
    fn now_timestamp_round_trips() {
        let now = now_timestamp();
        assert!(parse_timestamp(&now).is_some(), "{now} should parse");
    }
}
