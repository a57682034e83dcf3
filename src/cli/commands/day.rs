use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::{Core, DayReport};
use crate::errors::AppResult;
use crate::store::JsonStore;
use crate::utils::colors::{YELLOW, color_for_surplus, colorize_optional, paint};
use crate::utils::date::{self, date_key, weekday_label};
use crate::utils::formatting::bold;
use crate::utils::mins2readable;

/// Handle the `day` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Day { date: d, json } = cmd {
        let day = match d {
            Some(s) => date::parse_date(s)?,
            None => date::today(),
        };
        let key = date_key(day);

        let store = JsonStore::open(cfg.data_path())?;
        let report = Core::summarize_day(&key, store.day(&key));

        if *json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else if report.entries.is_empty() {
            println!("No entries for {}", key);
        } else {
            print_day(&report, cfg);
        }
    }
    Ok(())
}

pub(crate) fn print_day(report: &DayReport, cfg: &Config) {
    let title = if cfg.show_weekday {
        format!("📅 {} ({})", report.date, weekday_label(&report.date))
    } else {
        format!("📅 {}", report.date)
    };
    println!("{}", bold(&title));

    for (i, entry) in report.entries.iter().enumerate() {
        let detail = match entry.hours {
            Some(h) if entry.kind.is_special() => format!("{h}h"),
            _ => colorize_optional(entry.time_str()),
        };
        println!("  {:>2}. {:<14} {}", i + 1, entry.kind.ek_as_str(), detail);
    }

    let s = &report.summary;
    println!(
        "Worked: {} | Gross: {} | Pause: {} min | Break: {} min",
        mins2readable(s.minutes, false, false),
        mins2readable(s.gross_minutes, false, false),
        s.pause_minutes,
        s.break_minutes
    );

    match &report.delta {
        Some(delta) => println!(
            "Delta:  {}",
            paint(&delta.value.text, color_for_surplus(delta.minutes()))
        ),
        None => println!("Delta:  {}", colorize_optional("-")),
    }

    if s.has_incomplete {
        println!("{}", paint("⏳ Open clock-in (day not closed yet)", YELLOW));
    }
}
