use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::export::ExportLogic;
use crate::errors::AppResult;
use crate::store::JsonStore;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file } = cmd {
        let mut store = JsonStore::open(cfg.data_path())?;
        let days = ExportLogic::import(&mut store, file)?;
        store.save()?;
        success(format!("Imported {} day(s) from {}", days, file));
    }
    Ok(())
}
