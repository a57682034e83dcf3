use crate::core::validate::validate_day;
use crate::errors::{AppError, AppResult};
use crate::models::week::WeekBook;
use crate::store::JsonStore;
use crate::ui::messages::{info, warning};
use crate::utils::date::{normalize_week_key, week_key_for};
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tracing::debug;

pub struct ExportLogic;

impl ExportLogic {
    /// Write the stored weeks (all, or a single one) to `file` using the
    /// same document shape as the data file. Returns the number of days
    /// written.
    pub fn export(
        store: &JsonStore,
        file: &str,
        week: &Option<String>,
        force: bool,
    ) -> AppResult<usize> {
        let selected: WeekBook = match week {
            Some(wk) => {
                let wk = normalize_week_key(wk)?;
                store
                    .weeks()
                    .get(&wk)
                    .map(|days| WeekBook::from([(wk.clone(), days.clone())]))
                    .unwrap_or_default()
            }
            None => store.weeks().clone(),
        };

        let days: usize = selected.values().map(|w| w.len()).sum();
        if days == 0 {
            warning("No entries found for the selected range. Nothing to export.");
            return Ok(0);
        }

        let path = Path::new(file);
        ensure_writable(path, force)?;

        let json = serde_json::to_string_pretty(&selected)?;
        fs::write(path, json)?;

        debug!(file, days, "export written");
        Ok(days)
    }

    /// Merge a document into the store. Days with the same key are replaced;
    /// every day is validated and filed under its own ISO week, whatever
    /// week key the file used. Returns the number of days imported.
    pub fn import(store: &mut JsonStore, file: &str) -> AppResult<usize> {
        let content = fs::read_to_string(file)?;
        let incoming: WeekBook = serde_json::from_str(&content)?;

        for (week_key, days) in &incoming {
            for (date_key, entries) in days {
                validate_day(date_key, entries)?;
                if week_key_for(date_key).as_deref() != Some(week_key.as_str()) {
                    debug!(week = %week_key, date = %date_key, "day filed under a different week");
                }
            }
        }

        let mut count = 0;
        for days in incoming.into_values() {
            for (date_key, entries) in days {
                store.replace_day(&date_key, entries)?;
                count += 1;
            }
        }

        Ok(count)
    }
}

/// Check whether a file can be created or overwritten.
///
/// - missing file → Ok
/// - existing file with `force` → Ok
/// - existing file without `force` → ask the user
fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    warning(format!("The file '{}' already exists.", path.display()));

    print!("Overwrite? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    let ans = answer.trim().to_ascii_lowercase();

    if ans == "y" || ans == "yes" {
        info("Existing file will be overwritten.");
        Ok(())
    } else {
        Err(AppError::Export(
            "export cancelled: existing file not overwritten".into(),
        ))
    }
}
