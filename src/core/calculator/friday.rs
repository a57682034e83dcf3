//! Friday early-exit prediction.

use crate::core::calculator::day::compute_delta;
use crate::core::calculator::pairs::resolve_pairs;
use crate::core::rules::FRIDAY_TARGET_MINUTES;
use crate::models::time_entry::{TimeEntry, sole_special};
use crate::models::week::WeekEntries;
use crate::utils::date::is_friday;
use crate::utils::time::{format_minutes, parse_time};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FridaySuggestion {
    pub friday_key: String,
    /// Sum of the complete Monday..Thursday deltas
    pub accumulated_extra: i64,
    /// Friday target shortened (or lengthened) by the accumulated extra
    pub adjusted_target: i64,
    pub has_clock_in: bool,
    pub has_clock_out: bool,
    pub exit_minutes: Option<i64>,
    pub exit_time: Option<String>,
}

/// Predicts the Friday target and, while Friday is open, the exit time.
///
/// Days with an open clock-in are left out of the accumulated extra.
/// Returns `None` without a Friday, or when Friday is a smart-working or
/// absence day.
pub fn predict_friday_exit(days: &WeekEntries) -> Option<FridaySuggestion> {
    // BTreeMap iterates keys in ascending order
    let (friday_key, friday_entries) = days.iter().find(|(key, _)| is_friday(key))?;

    let accumulated_extra: i64 = days
        .iter()
        .filter(|(key, _)| !is_friday(key))
        .filter_map(|(key, entries)| compute_delta(entries, key))
        .filter(|delta| !delta.has_incomplete)
        .map(|delta| delta.minutes())
        .sum();

    if sole_special(friday_entries).is_some() {
        return None;
    }

    let adjusted_target = (FRIDAY_TARGET_MINUTES - accumulated_extra).max(0);
    let exit_minutes = open_exit(friday_entries, adjusted_target);

    Some(FridaySuggestion {
        friday_key: friday_key.clone(),
        accumulated_extra,
        adjusted_target,
        has_clock_in: friday_entries.iter().any(|e| e.kind.is_in()),
        has_clock_out: friday_entries.iter().any(|e| e.kind.is_out()),
        exit_minutes,
        exit_time: exit_minutes.map(format_minutes),
    })
}

/// Exit time for an open Friday: the open clock-in plus the adjusted
/// target.
fn open_exit(entries: &[TimeEntry], adjusted_target: i64) -> Option<i64> {
    let stats = resolve_pairs(entries);
    if !stats.has_incomplete {
        return None;
    }

    // the open clock-in is the first one without a matching clock-out
    let open_in = entries
        .iter()
        .filter(|e| e.kind.is_in())
        .nth(stats.pair_count)?;
    let start = open_in.time.as_deref().and_then(parse_time)?;

    Some(start + adjusted_target)
}
