use super::time_entry::TimeEntry;
use std::collections::BTreeMap;

/// Date key (`YYYY-MM-DD`) → that day's entries, ordered by key.
pub type WeekEntries = BTreeMap<String, Vec<TimeEntry>>;

/// Week key (`YYYY-Www`) → week. This is the persisted document shape.
pub type WeekBook = BTreeMap<String, WeekEntries>;
