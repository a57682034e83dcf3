use crate::core::validate::validate_day;
use crate::errors::{AppError, AppResult};
use crate::store::JsonStore;
use crate::utils::date::date_key;
use chrono::NaiveDate;
use tracing::info;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Delete one entry (1-based index) or the whole day.
    /// The entries left behind must still form a valid day.
    /// Returns the number of entries removed.
    pub fn apply(store: &mut JsonStore, date: NaiveDate, entry: Option<usize>) -> AppResult<usize> {
        let key = date_key(date);
        let mut entries = store.day(&key).to_vec();

        if entries.is_empty() {
            return Err(AppError::NoEntriesForDate(key));
        }

        let removed = match entry {
            Some(n) => {
                if n == 0 || n > entries.len() {
                    return Err(AppError::InvalidEntryIndex(n));
                }
                entries.remove(n - 1);
                1
            }
            None => {
                let count = entries.len();
                entries.clear();
                count
            }
        };

        validate_day(&key, &entries)?;
        store.replace_day(&key, entries)?;

        info!(date = %key, removed, "entries deleted");
        Ok(removed)
    }
}
