use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::errors::AppResult;
use crate::store::JsonStore;
use crate::ui::messages::success;
use crate::utils::date;
use crate::utils::time::now_hhmm;

/// Handle the `punch` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Punch { date: d, time } = cmd {
        let day = match d {
            Some(s) => date::parse_date(s)?,
            None => date::today(),
        };
        let time = time.clone().unwrap_or_else(now_hhmm);

        let mut store = JsonStore::open(cfg.data_path())?;
        let kind = AddLogic::punch(&mut store, day, &time)?;
        store.save()?;

        success(format!("{} at {} on {}", kind.ek_as_str(), time, day));
    }
    Ok(())
}
