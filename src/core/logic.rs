use crate::core::calculator::{
    FridaySuggestion, compute_balance, compute_day, compute_delta, compute_remaining,
    compute_week_total, predict_friday_exit,
};
use crate::models::day_summary::DaySummary;
use crate::models::signed::{DayDelta, SignedMinutes};
use crate::models::time_entry::TimeEntry;
use crate::models::week::WeekEntries;
use serde::Serialize;

/// A day with its computed figures.
#[derive(Debug, Clone, Serialize)]
pub struct DayReport {
    pub date: String,
    pub entries: Vec<TimeEntry>,
    pub summary: DaySummary,
    pub delta: Option<DayDelta>,
}

/// A week with its computed figures.
#[derive(Debug, Clone, Serialize)]
pub struct WeekReport {
    pub week: String,
    pub days: Vec<DayReport>,
    pub total_minutes: i64,
    pub balance: SignedMinutes,
    pub remaining_minutes: i64,
    pub friday: Option<FridaySuggestion>,
}

/// Stateless entry point to the accounting engine.
pub struct Core;

impl Core {
    pub fn summarize_day(date_key: &str, entries: &[TimeEntry]) -> DayReport {
        DayReport {
            date: date_key.to_string(),
            entries: entries.to_vec(),
            summary: compute_day(entries, date_key),
            delta: compute_delta(entries, date_key),
        }
    }

    pub fn summarize_week(week_key: &str, days: &WeekEntries) -> WeekReport {
        let total = compute_week_total(days);

        WeekReport {
            week: week_key.to_string(),
            days: days
                .iter()
                .map(|(key, entries)| Self::summarize_day(key, entries))
                .collect(),
            total_minutes: total.minutes,
            balance: compute_balance(total.minutes),
            remaining_minutes: compute_remaining(total.minutes),
            friday: predict_friday_exit(days),
        }
    }
}
