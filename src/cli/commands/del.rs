use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::errors::AppResult;
use crate::store::JsonStore;
use crate::ui::messages::{info, success, warning};
use crate::utils::date;

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del {
        date: date_str,
        entry,
        yes,
    } = cmd
    {
        let d = date::parse_date(date_str)?;

        let prompt = match entry {
            Some(n) => format!("Delete entry #{} for {}? This action is irreversible.", n, d),
            None => format!("Delete ALL entries for {}? This action is irreversible.", d),
        };

        if !*yes && !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        let mut store = JsonStore::open(cfg.data_path())?;
        let removed = DeleteLogic::apply(&mut store, d, *entry)?;
        store.save()?;

        success(format!("Deleted {} entr(y/ies) for {}", removed, d));
    }

    Ok(())
}
