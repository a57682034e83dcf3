//! JSON file store holding the `{weekKey: {dateKey: [entry]}}` document.

use crate::errors::AppResult;
use crate::models::time_entry::TimeEntry;
use crate::models::week::{WeekBook, WeekEntries};
use crate::utils::date::{iso_week_key, parse_canonical_key, week_key_for};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub struct JsonStore {
    path: PathBuf,
    weeks: WeekBook,
}

impl JsonStore {
    /// Open the store at `path`. A missing or empty file is an empty store.
    pub fn open(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref().to_path_buf();

        let weeks = if path.exists() {
            let content = fs::read_to_string(&path)?;
            if content.trim().is_empty() {
                WeekBook::new()
            } else {
                serde_json::from_str(&content)?
            }
        } else {
            WeekBook::new()
        };

        debug!(path = %path.display(), weeks = weeks.len(), "store opened");
        Ok(Self { path, weeks })
    }

    /// Write the whole document back, creating parent directories.
    pub fn save(&self) -> AppResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(&self.weeks)?;
        fs::write(&self.path, json)?;

        info!(path = %self.path.display(), weeks = self.weeks.len(), "store saved");
        Ok(())
    }

    pub fn weeks(&self) -> &WeekBook {
        &self.weeks
    }

    /// Entries of a day; empty when the day was never recorded.
    pub fn day(&self, date_key: &str) -> &[TimeEntry] {
        week_key_for(date_key)
            .and_then(|wk| self.weeks.get(&wk))
            .and_then(|week| week.get(date_key))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Copy of a week, detached from the store.
    pub fn week(&self, week_key: &str) -> WeekEntries {
        self.weeks.get(week_key).cloned().unwrap_or_default()
    }

    /// Replace a day wholesale. An empty list removes the day, and a week
    /// left without days is removed too. Only canonical `YYYY-MM-DD` keys
    /// are stored.
    pub fn replace_day(&mut self, date_key: &str, entries: Vec<TimeEntry>) -> AppResult<()> {
        let week_key = iso_week_key(parse_canonical_key(date_key)?);

        if entries.is_empty() {
            if let Some(week) = self.weeks.get_mut(&week_key) {
                week.remove(date_key);
                if week.is_empty() {
                    self.weeks.remove(&week_key);
                }
            }
            debug!(date = date_key, "day cleared");
            return Ok(());
        }

        debug!(date = date_key, entries = entries.len(), "day replaced");
        self.weeks
            .entry(week_key)
            .or_default()
            .insert(date_key.to_string(), entries);
        Ok(())
    }
}
