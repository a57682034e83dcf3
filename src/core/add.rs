use crate::core::rules::smart_working_credit;
use crate::core::validate::{next_clock_kind, validate_day, validate_hours};
use crate::errors::{AppError, AppResult};
use crate::models::entry_kind::EntryKind;
use crate::models::time_entry::{TimeEntry, sole_special};
use crate::store::JsonStore;
use crate::utils::date::{date_key, is_friday};
use crate::utils::time::normalize_time;
use chrono::NaiveDate;
use tracing::info;

/// High-level business logic for recording entries.
pub struct AddLogic;

impl AddLogic {
    /// Append clock events to a day. The new list is validated as a whole
    /// before it replaces the stored one.
    pub fn clock(
        store: &mut JsonStore,
        date: NaiveDate,
        events: &[(EntryKind, &str)],
    ) -> AppResult<Vec<TimeEntry>> {
        let key = date_key(date);
        let current = store.day(&key).to_vec();

        if sole_special(&current).is_some() {
            return Err(AppError::SpecialDayConflict(key));
        }

        let mut updated = current;
        for (kind, time) in events {
            let time = normalize_time(time)?;
            let entry = match kind {
                EntryKind::ClockIn => TimeEntry::clock_in(time),
                EntryKind::ClockOut => TimeEntry::clock_out(time),
                other => return Err(AppError::InvalidEntryKind(other.ek_as_str().into())),
            };
            updated.push(entry);
        }

        validate_day(&key, &updated)?;
        store.replace_day(&key, updated.clone())?;

        info!(date = %key, added = events.len(), "clock events recorded");
        Ok(updated)
    }

    /// Record the next expected clock event (in when no pair is open, out
    /// otherwise).
    pub fn punch(store: &mut JsonStore, date: NaiveDate, time: &str) -> AppResult<EntryKind> {
        let kind = next_clock_kind(store.day(&date_key(date)));
        Self::clock(store, date, &[(kind, time)])?;
        Ok(kind)
    }

    /// Mark a whole day as smart working or absence, replacing whatever was
    /// recorded. Without explicit hours the weekday's credit applies.
    pub fn special(
        store: &mut JsonStore,
        date: NaiveDate,
        kind: EntryKind,
        hours: Option<f64>,
    ) -> AppResult<TimeEntry> {
        let key = date_key(date);

        let hours = match hours {
            Some(h) => {
                validate_hours(h)?;
                h
            }
            None => smart_working_credit(is_friday(&key)) as f64 / 60.0,
        };

        let entry = match kind {
            EntryKind::SmartWorking => TimeEntry::smart_working(hours),
            EntryKind::Absent => TimeEntry::absent(hours),
            other => return Err(AppError::InvalidEntryKind(other.ek_as_str().into())),
        };

        let replaced = store.day(&key).len();
        store.replace_day(&key, vec![entry.clone()])?;

        info!(date = %key, kind = kind.ek_as_str(), hours, replaced, "special day recorded");
        Ok(entry)
    }
}
