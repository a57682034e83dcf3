use crate::cli::commands::friday::print_suggestion;
use crate::cli::commands::resolve_week;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::{Core, WeekReport};
use crate::errors::AppResult;
use crate::store::JsonStore;
use crate::ui::messages::header;
use crate::utils::colors::{color_for_surplus, colorize_optional, paint};
use crate::utils::date::{weekday_label, workdays_of_week};
use crate::utils::formatting::separator;
use crate::utils::mins2readable;
use crate::utils::table::{Column, Table};

/// Handle the `week` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Week { week, date, json } = cmd {
        let week_key = resolve_week(week, date)?;

        let store = JsonStore::open(cfg.data_path())?;
        // snapshot: the report is computed on a detached copy
        let days = store.week(&week_key);
        let report = Core::summarize_week(&week_key, &days);

        if *json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            print_week(&report, cfg);
        }
    }
    Ok(())
}

fn print_week(report: &WeekReport, cfg: &Config) {
    header(&report.week);

    if report.days.is_empty() {
        println!("No entries for week {}", report.week);
        return;
    }

    let mut table = Table::new(vec![
        Column::new("Date", 11),
        Column::new("Day", 4),
        Column::new("Entries", 26),
        Column::new("Net", 8),
        Column::new("Delta", 10),
    ]);

    // Monday..Friday always get a row; other recorded days are added in order
    let mut keys = workdays_of_week(&report.week).unwrap_or_default();
    keys.extend(report.days.iter().map(|d| d.date.clone()));
    keys.sort();
    keys.dedup();

    for key in &keys {
        let Some(day) = report.days.iter().find(|d| &d.date == key) else {
            table.add_row(vec![
                key.clone(),
                weekday_label(key).to_string(),
                colorize_optional("-"),
                colorize_optional("--:--"),
                colorize_optional("-"),
            ]);
            continue;
        };

        let entries = day
            .entries
            .iter()
            .map(|e| match e.hours {
                Some(h) if e.kind.is_special() => format!("{} {h}h", e.kind.ek_as_str()),
                _ => e.time_str().to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ");

        let delta = match &day.delta {
            Some(d) => paint(&d.value.text, color_for_surplus(d.minutes())),
            None => colorize_optional("-"),
        };

        let open = if day.summary.has_incomplete { " ⏳" } else { "" };

        table.add_row(vec![
            day.date.clone(),
            weekday_label(&day.date).to_string(),
            entries,
            format!("{}{}", mins2readable(day.summary.minutes, false, true), open),
            delta,
        ]);
    }

    print!("{}", table.render());
    println!("{}", separator(&cfg.separator_char, 63));

    println!(
        "Total:     {}",
        mins2readable(report.total_minutes, false, false)
    );
    println!(
        "Balance:   {}",
        paint(
            &report.balance.text,
            color_for_surplus(report.balance.minutes)
        )
    );
    println!(
        "Remaining: {}",
        mins2readable(report.remaining_minutes, false, false)
    );

    if let Some(s) = &report.friday {
        print_suggestion(s);
    }
}
