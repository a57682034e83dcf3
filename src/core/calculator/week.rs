use crate::core::calculator::day::compute_day;
use crate::core::rules::WEEKLY_TARGET_MINUTES;
use crate::models::signed::SignedMinutes;
use crate::models::week::WeekEntries;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct WeekTotal {
    pub minutes: i64,
    /// Net minutes of each date present in the input
    pub by_day: BTreeMap<String, i64>,
}

/// Sums the net minutes of every date present. Missing weekdays count as
/// zero and do not appear in `by_day`.
pub fn compute_week_total(days: &WeekEntries) -> WeekTotal {
    let by_day: BTreeMap<String, i64> = days
        .iter()
        .map(|(key, entries)| (key.clone(), compute_day(entries, key).minutes))
        .collect();

    WeekTotal {
        minutes: by_day.values().sum(),
        by_day,
    }
}

/// Worked minutes against the 36h target.
pub fn compute_balance(worked_minutes: i64) -> SignedMinutes {
    SignedMinutes::new(worked_minutes - WEEKLY_TARGET_MINUTES)
}

/// Minutes still owed this week, never negative.
pub fn compute_remaining(worked_minutes: i64) -> i64 {
    (WEEKLY_TARGET_MINUTES - worked_minutes).max(0)
}
