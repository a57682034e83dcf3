use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::export::ExportLogic;
use crate::errors::AppResult;
use crate::store::JsonStore;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export { file, week, force } = cmd {
        let store = JsonStore::open(cfg.data_path())?;
        let days = ExportLogic::export(&store, file, week, *force)?;
        if days > 0 {
            success(format!("Exported {} day(s) to {}", days, file));
        }
    }
    Ok(())
}
