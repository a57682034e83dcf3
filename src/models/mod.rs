pub mod day_summary;
pub mod entry_kind;
pub mod signed;
pub mod time_entry;
pub mod week;
