use crate::core::calculator::pairs::resolve_pairs;
use crate::core::calculator::pause::pause_minutes;
use crate::core::rules::{PAUSE_MINUTES, daily_target};
use crate::models::day_summary::DaySummary;
use crate::models::entry_kind::EntryKind;
use crate::models::signed::{DayDelta, SignedMinutes};
use crate::models::time_entry::{TimeEntry, sole_special};
use crate::utils::date::is_friday;

/// Net minutes and break figures for one day.
///
/// The Friday gate only selects the break policy; it never decides whether
/// an entry is valid.
pub fn compute_day(entries: &[TimeEntry], date_key: &str) -> DaySummary {
    if entries.is_empty() {
        return DaySummary::default();
    }

    if let Some(special) = sole_special(entries) {
        let minutes = special_minutes(special);
        return DaySummary {
            minutes,
            gross_minutes: minutes,
            ..DaySummary::default()
        };
    }

    let stats = resolve_pairs(entries);
    let pause = pause_minutes(
        is_friday(date_key),
        stats.pair_count,
        stats.break_minutes,
        stats.worked_minutes,
    );
    let pause_applied = pause > 0;

    let break_minutes = if stats.pair_count > 1 {
        stats.break_minutes
    } else if pause_applied {
        PAUSE_MINUTES
    } else {
        0
    };

    DaySummary {
        minutes: (stats.worked_minutes - pause).max(0),
        has_incomplete: stats.has_incomplete,
        gross_minutes: stats.worked_minutes,
        pause_applied,
        pause_minutes: pause,
        break_minutes,
    }
}

/// Net minutes against the day's target.
/// `None` for a day without entries and for an absence.
pub fn compute_delta(entries: &[TimeEntry], date_key: &str) -> Option<DayDelta> {
    if entries.is_empty() {
        return None;
    }
    if sole_special(entries).is_some_and(|e| e.kind == EntryKind::Absent) {
        return None;
    }

    let day = compute_day(entries, date_key);
    let delta = day.minutes - daily_target(is_friday(date_key));

    Some(DayDelta {
        value: SignedMinutes::new(delta),
        has_incomplete: day.has_incomplete,
    })
}

fn special_minutes(entry: &TimeEntry) -> i64 {
    let hours = entry.hours.unwrap_or(0.0);
    if !hours.is_finite() {
        return 0;
    }
    (hours * 60.0).round() as i64
}
