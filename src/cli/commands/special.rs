use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::errors::{AppError, AppResult};
use crate::models::entry_kind::EntryKind;
use crate::store::JsonStore;
use crate::ui::messages::{success, warning};
use crate::utils::date::{self, date_key};

/// Handle the `special` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Special { date, kind, hours } = cmd {
        let d = date::parse_date(date)?;
        let kind = EntryKind::ek_from_str(kind)
            .filter(EntryKind::is_special)
            .ok_or_else(|| AppError::InvalidEntryKind(kind.clone()))?;

        let mut store = JsonStore::open(cfg.data_path())?;
        let previous = store.day(&date_key(d)).len();
        let entry = AddLogic::special(&mut store, d, kind, *hours)?;
        store.save()?;

        if previous > 0 {
            warning(format!("Replaced {} existing entr(y/ies) for {}", previous, d));
        }
        success(format!(
            "{} recorded for {} ({}h)",
            kind.ek_as_str(),
            d,
            entry.hours.unwrap_or(0.0)
        ));
    }
    Ok(())
}
