use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - an empty data file, if missing
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.data.clone(), cli.test)?;

    if !cli.test {
        success(format!("Config file: {}", Config::config_file().display()));
    }
    success(format!("Data file:   {}", cfg.data_file));
    Ok(())
}
