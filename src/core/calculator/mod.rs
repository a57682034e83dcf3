//! Time-accounting engine. Pure functions over entry snapshots: no I/O, no
//! state, no failure modes.

pub mod day;
pub mod friday;
pub mod pairs;
pub mod pause;
pub mod week;

pub use day::{compute_day, compute_delta};
pub use friday::{FridaySuggestion, predict_friday_exit};
pub use pairs::{PairStats, resolve_pairs};
pub use pause::pause_minutes;
pub use week::{WeekTotal, compute_balance, compute_remaining, compute_week_total};
