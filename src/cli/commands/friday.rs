use crate::cli::commands::resolve_week;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::{FridaySuggestion, predict_friday_exit};
use crate::errors::AppResult;
use crate::store::JsonStore;
use crate::ui::messages::info;
use crate::utils::colors::{color_for_surplus, paint};
use crate::utils::mins2readable;
use crate::utils::time::format_signed_duration;

/// Handle the `friday` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Friday { week, date, json } = cmd {
        let week_key = resolve_week(week, date)?;

        let store = JsonStore::open(cfg.data_path())?;
        let suggestion = predict_friday_exit(&store.week(&week_key));

        if *json {
            println!("{}", serde_json::to_string_pretty(&suggestion)?);
            return Ok(());
        }

        match suggestion {
            Some(s) => print_suggestion(&s),
            None => info(format!("No Friday suggestion for week {}", week_key)),
        }
    }
    Ok(())
}

pub(crate) fn print_suggestion(s: &FridaySuggestion) {
    println!("🏁 Friday {}", s.friday_key);
    println!(
        "   Extra Mon-Thu: {}",
        paint(
            &format_signed_duration(s.accumulated_extra),
            color_for_surplus(s.accumulated_extra)
        )
    );
    println!(
        "   Target today:  {}",
        mins2readable(s.adjusted_target, false, false)
    );

    match (&s.exit_time, s.has_clock_in) {
        (Some(exit), _) => println!("   Exit at:       {}", exit),
        (None, false) => println!("   Not clocked in yet"),
        (None, true) => println!("   Day closed"),
    }
}
