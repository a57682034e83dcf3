use clap::{Parser, Subcommand};

/// Command-line interface definition for rPresenze
#[derive(Parser)]
#[command(
    name = "rpresenze",
    version = env!("CARGO_PKG_VERSION"),
    about = "Attendance tracker for the 36-hour week: daily deltas, weekly balance and Friday exit time",
    long_about = None
)]
pub struct Cli {
    /// Override the data file path (useful for tests or a custom file)
    #[arg(global = true, long = "data", value_name = "PATH")]
    pub data: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and the data file
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Append clock-in and/or clock-out events to a day
    Add {
        /// Date of the events (YYYY-MM-DD)
        date: String,

        #[arg(long = "in", help = "Clock-in time (HH:MM)")]
        start: Option<String>,

        #[arg(long = "out", help = "Clock-out time (HH:MM)")]
        end: Option<String>,
    },

    /// Record the next expected event (in or out), now by default
    Punch {
        #[arg(long, help = "Date (YYYY-MM-DD), default today")]
        date: Option<String>,

        #[arg(long, help = "Time (HH:MM), default now")]
        time: Option<String>,
    },

    /// Mark a whole day as smart working or absence
    Special {
        /// Date (YYYY-MM-DD)
        date: String,

        /// smart-working | absent
        kind: String,

        #[arg(long, help = "Hours credited (default: 7.5 Mon-Thu, 6 Fri)")]
        hours: Option<f64>,
    },

    /// Delete one entry or a whole day
    Del {
        /// Date (YYYY-MM-DD)
        date: String,

        #[arg(long = "entry", help = "1-based entry number to delete (default: whole day)")]
        entry: Option<usize>,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Show a day with its computed figures
    Day {
        /// Date (YYYY-MM-DD), default today
        date: Option<String>,

        #[arg(long, help = "Print the result as JSON")]
        json: bool,
    },

    /// Show a week: per-day figures, total, balance and Friday suggestion
    Week {
        #[arg(long, conflicts_with = "date", help = "ISO week key (YYYY-Www)")]
        week: Option<String>,

        #[arg(long, help = "Any date of the week (YYYY-MM-DD)")]
        date: Option<String>,

        #[arg(long, help = "Print the result as JSON")]
        json: bool,
    },

    /// Show the Friday early-exit suggestion
    Friday {
        #[arg(long, conflicts_with = "date", help = "ISO week key (YYYY-Www)")]
        week: Option<String>,

        #[arg(long, help = "Any date of the week (YYYY-MM-DD)")]
        date: Option<String>,

        #[arg(long, help = "Print the result as JSON")]
        json: bool,
    },

    /// Export entries to a JSON file
    Export {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, value_name = "WEEK", help = "Export a single ISO week (YYYY-Www)")]
        week: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Import entries from a JSON file, replacing days with the same date
    Import {
        #[arg(long, value_name = "FILE")]
        file: String,
    },
}
