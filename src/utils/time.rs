//! Time utilities: parsing HH:MM, formatting minutes, signed duration text.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveTime, Timelike};

/// Parse `HH:MM` (24-hour) into minutes since midnight.
/// Malformed input yields `None` so callers can skip the value.
pub fn parse_time(t: &str) -> Option<i64> {
    let time = NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()?;
    Some(i64::from(time.hour() * 60 + time.minute()))
}

/// Render minutes as `HH:MM`, `-` prefixed when negative.
/// Values of a day or more are not wrapped (1500 → `25:00`).
pub fn format_minutes(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let m = mins.abs();
    format!("{}{:02}:{:02}", sign, m / 60, m % 60)
}

/// Signed human duration: `+1h 5m`, `-45min`, `0min`.
pub fn format_signed_duration(mins: i64) -> String {
    let sign = if mins > 0 {
        "+"
    } else if mins < 0 {
        "-"
    } else {
        ""
    };

    let abs_m = mins.abs();
    if abs_m >= 60 {
        format!("{}{}h {}m", sign, abs_m / 60, abs_m % 60)
    } else {
        format!("{}{}min", sign, abs_m)
    }
}

/// Validate user input and return it normalized as zero-padded `HH:MM`.
pub fn normalize_time(input: &str) -> AppResult<String> {
    parse_time(input)
        .map(format_minutes)
        .ok_or_else(|| AppError::InvalidTime(input.to_string()))
}

/// Current local wall-clock time as `HH:MM`.
pub fn now_hhmm() -> String {
    chrono::Local::now().format("%H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_times() {
        assert_eq!(parse_time("00:00"), Some(0));
        assert_eq!(parse_time("08:30"), Some(510));
        assert_eq!(parse_time("23:59"), Some(1439));
    }

    #[test]
    fn rejects_malformed_times() {
        assert_eq!(parse_time(""), None);
        assert_eq!(parse_time("24:00"), None);
        assert_eq!(parse_time("12:60"), None);
        assert_eq!(parse_time("noon"), None);
    }

    #[test]
    fn formats_out_of_range_values() {
        assert_eq!(format_minutes(-75), "-01:15");
        assert_eq!(format_minutes(1500), "25:00");
    }

    #[test]
    fn round_trips_every_minute_of_the_day() {
        for m in 0..1440 {
            assert_eq!(parse_time(&format_minutes(m)), Some(m));
        }
    }

    #[test]
    fn signed_duration_text() {
        assert_eq!(format_signed_duration(60), "+1h 0m");
        assert_eq!(format_signed_duration(-45), "-45min");
        assert_eq!(format_signed_duration(0), "0min");
        assert_eq!(format_signed_duration(-125), "-2h 5m");
    }
}
