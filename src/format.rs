//! Timestamp formatting and parsing for backend unix-second fields.

use chrono::{DateTime, NaiveDateTime};

/// Rendered in place of an absent or invalid timestamp.
pub const MISSING: &str = "—";

/// Values at or above this are taken as milliseconds, not seconds.
const MS_THRESHOLD: i64 = 10_000_000_000;

/// Formats unix seconds as `YYYY-MM-DD HH:MM` (UTC).
///
/// Zero, negative, and out-of-range values render as an em dash rather
/// than failing, so one bad record never breaks a listing.
#[must_use]
pub fn format_unix(secs: i64) -> String {
    if secs <= 0 {
        return MISSING.to_string();
    }
    DateTime::from_timestamp(secs, 0)
        .map_or_else(|| MISSING.to_string(), |dt| dt.format("%Y-%m-%d %H:%M").to_string())
}

/// Parses user input into unix seconds.
///
/// Accepts plain unix seconds, unix milliseconds (divided down), or a
/// `YYYY-MM-DD HH:MM` datetime taken as UTC. Blank or unparseable input
/// is `None`.
#[must_use]
pub fn to_unix_seconds(input: &str) -> Option<i64> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    if let Ok(n) = input.parse::<i64>() {
        if n <= 0 {
            return None;
        }
        return Some(if n >= MS_THRESHOLD { n / 1000 } else { n });
    }
    NaiveDateTime::parse_from_str(input, "%Y-%m-%d %H:%M")
        .ok()
        .map(|dt| dt.and_utc().timestamp())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_valid_seconds() {
        assert_eq!(format_unix(1_700_000_000), "2023-11-14 22:13");
    }

    #[test]
    fn invalid_values_render_as_dash() {
        assert_eq!(format_unix(0), MISSING);
        assert_eq!(format_unix(-5), MISSING);
    }

    #[test]
    fn parses_seconds_and_milliseconds() {
        assert_eq!(to_unix_seconds("1700000000"), Some(1_700_000_000));
        assert_eq!(to_unix_seconds("1700000000000"), Some(1_700_000_000));
    }

    #[test]
    fn parses_datetime_strings() {
        assert_eq!(to_unix_seconds("2023-11-14 22:13"), Some(1_699_999_980));
    }

    #[test]
    fn rejects_blank_and_garbage() {
        assert_eq!(to_unix_seconds(""), None);
        assert_eq!(to_unix_seconds("   "), None);
        assert_eq!(to_unix_seconds("tomorrow"), None);
        assert_eq!(to_unix_seconds("-42"), None);
    }

    #[test]
    fn datetime_round_trips_through_format() {
        let secs = to_unix_seconds("2024-06-15 10:30").unwrap();
        assert_eq!(format_unix(secs), "2024-06-15 10:30");
    }
}
