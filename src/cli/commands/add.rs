use crate::cli::commands::day::print_day;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::core::logic::Core;
use crate::errors::{AppError, AppResult};
use crate::models::entry_kind::EntryKind;
use crate::store::JsonStore;
use crate::ui::messages::success;
use crate::utils::date::{self, date_key};

/// Handle the `add` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { date, start, end } = cmd {
        let d = date::parse_date(date)?;

        let mut events: Vec<(EntryKind, &str)> = Vec::new();
        if let Some(s) = start {
            events.push((EntryKind::ClockIn, s.as_str()));
        }
        if let Some(e) = end {
            events.push((EntryKind::ClockOut, e.as_str()));
        }
        if events.is_empty() {
            return Err(AppError::Other(
                "nothing to record: pass --in and/or --out".into(),
            ));
        }

        let mut store = JsonStore::open(cfg.data_path())?;
        let entries = AddLogic::clock(&mut store, d, &events)?;
        store.save()?;

        success(format!("Recorded {} event(s) for {}", events.len(), d));
        print_day(&Core::summarize_day(&date_key(d), &entries), cfg);
    }
    Ok(())
}
