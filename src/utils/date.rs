//! Calendar helpers.
//!
//! Every date key is turned into a date through [`local_date`], which takes
//! separately parsed year/month/day integers. Date-only strings are never
//! handed to a timezone-aware parser, so the weekday cannot drift by one
//! around midnight UTC.

use crate::errors::{AppError, AppResult};
use chrono::{Datelike, Duration, NaiveDate, Weekday};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// The single constructor from calendar components.
pub fn local_date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Split a `YYYY-MM-DD` key into integers and build the date.
pub fn parse_date_key(key: &str) -> Option<NaiveDate> {
    let mut parts = key.trim().splitn(3, '-');
    let year = parts.next()?.parse::<i32>().ok()?;
    let month = parts.next()?.parse::<u32>().ok()?;
    let day = parts.next()?.parse::<u32>().ok()?;
    local_date(year, month, day)
}

/// Like [`parse_date_key`] but for user input.
pub fn parse_date(s: &str) -> AppResult<NaiveDate> {
    parse_date_key(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))
}

pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parse a key that is going to be stored. Only the zero-padded
/// `YYYY-MM-DD` form is accepted, so one date always maps to one key.
pub fn parse_canonical_key(key: &str) -> AppResult<NaiveDate> {
    parse_date_key(key)
        .filter(|d| date_key(*d) == key)
        .ok_or_else(|| AppError::InvalidDate(key.to_string()))
}

/// Friday test on a date key. An unparseable key is not a Friday.
pub fn is_friday(key: &str) -> bool {
    parse_date_key(key).is_some_and(|d| d.weekday() == Weekday::Fri)
}

/// ISO-8601 week key `YYYY-Www` (weeks start on Monday, week 1 holds the
/// year's first Thursday).
pub fn iso_week_key(date: NaiveDate) -> String {
    let week = date.iso_week();
    format!("{}-W{:02}", week.year(), week.week())
}

/// Week key for a date key, if the date key is valid.
pub fn week_key_for(key: &str) -> Option<String> {
    parse_date_key(key).map(iso_week_key)
}

/// Monday of an ISO week key.
pub fn week_monday(week_key: &str) -> AppResult<NaiveDate> {
    let invalid = || AppError::InvalidWeek(week_key.to_string());

    let (year, week) = week_key.trim().split_once("-W").ok_or_else(invalid)?;
    let year = year.parse::<i32>().map_err(|_| invalid())?;
    let week = week.parse::<u32>().map_err(|_| invalid())?;

    NaiveDate::from_isoywd_opt(year, week, Weekday::Mon).ok_or_else(invalid)
}

/// Canonical form of a week key (`2025-W2` → `2025-W02`).
pub fn normalize_week_key(week_key: &str) -> AppResult<String> {
    week_monday(week_key).map(iso_week_key)
}

/// Monday to Friday date keys of an ISO week.
pub fn workdays_of_week(week_key: &str) -> AppResult<Vec<String>> {
    let monday = week_monday(week_key)?;
    Ok((0..5)
        .map(|offset| date_key(monday + Duration::days(offset)))
        .collect())
}

/// Short English weekday label for a date key (`Mon`, `Tue`, ...).
pub fn weekday_label(key: &str) -> &'static str {
    match parse_date_key(key).map(|d| d.weekday()) {
        Some(Weekday::Mon) => "Mon",
        Some(Weekday::Tue) => "Tue",
        Some(Weekday::Wed) => "Wed",
        Some(Weekday::Thu) => "Thu",
        Some(Weekday::Fri) => "Fri",
        Some(Weekday::Sat) => "Sat",
        Some(Weekday::Sun) => "Sun",
        None => "???",
    }
}
