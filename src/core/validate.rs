//! Structural checks on a day's entries, applied before anything is saved.
//! The accounting engine itself accepts any input; this layer keeps bad
//! records out of the data file.

use crate::errors::{AppError, AppResult};
use crate::models::entry_kind::EntryKind;
use crate::models::time_entry::TimeEntry;
use crate::utils::date::parse_canonical_key;
use crate::utils::time::{format_minutes, parse_time};

/// Upper bound for a special day credit
pub const MAX_SPECIAL_HOURS: f64 = 24.0;

pub fn validate_hours(hours: f64) -> AppResult<()> {
    if hours.is_finite() && (0.0..=MAX_SPECIAL_HOURS).contains(&hours) {
        Ok(())
    } else {
        Err(AppError::InvalidHours(hours.to_string()))
    }
}

/// A day is either one special entry, or clock events alternating
/// in/out in chronological order.
pub fn validate_day(date_key: &str, entries: &[TimeEntry]) -> AppResult<()> {
    parse_canonical_key(date_key)?;

    if entries.iter().any(|e| e.kind.is_special()) {
        if entries.len() > 1 {
            return Err(AppError::SpecialDayConflict(date_key.to_string()));
        }
        return match entries[0].hours {
            Some(h) => validate_hours(h),
            None => Err(AppError::InvalidHours("missing".into())),
        };
    }

    let mut open: Option<i64> = None;
    let mut last_out: Option<i64> = None;

    for entry in entries {
        let raw = entry.time_str();
        let t = entry
            .time
            .as_deref()
            .and_then(parse_time)
            .ok_or_else(|| AppError::InvalidTime(raw.to_string()))?;

        match entry.kind {
            EntryKind::ClockIn => {
                if open.is_some() {
                    return Err(AppError::Sequence(format!(
                        "clock-in at {raw} while a clock-in is still open"
                    )));
                }
                if let Some(out) = last_out
                    && t < out
                {
                    return Err(AppError::Sequence(format!(
                        "clock-in at {raw} precedes the previous clock-out at {}",
                        format_minutes(out)
                    )));
                }
                open = Some(t);
            }
            EntryKind::ClockOut => {
                let Some(start) = open.take() else {
                    return Err(AppError::Sequence(format!(
                        "clock-out at {raw} without an open clock-in"
                    )));
                };
                if t <= start {
                    return Err(AppError::Sequence(format!(
                        "clock-out at {raw} must be later than clock-in at {}",
                        format_minutes(start)
                    )));
                }
                last_out = Some(t);
            }
            EntryKind::SmartWorking | EntryKind::Absent => {
                return Err(AppError::SpecialDayConflict(date_key.to_string()));
            }
        }
    }

    Ok(())
}

/// Kind the next punch should record.
pub fn next_clock_kind(entries: &[TimeEntry]) -> EntryKind {
    let ins = entries.iter().filter(|e| e.kind.is_in()).count();
    let outs = entries.iter().filter(|e| e.kind.is_out()).count();
    if ins > outs {
        EntryKind::ClockOut
    } else {
        EntryKind::ClockIn
    }
}
