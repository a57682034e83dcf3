use super::entry_kind::EntryKind;
use serde::{Deserialize, Serialize};

/// One recorded event or day override.
///
/// `time` is kept as the raw `HH:MM` text: a malformed value coming from a
/// hand-edited file must not prevent the rest of the day from being
/// computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEntry {
    #[serde(rename = "type")]
    pub kind: EntryKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours: Option<f64>,
}

impl TimeEntry {
    pub fn clock_in(time: impl Into<String>) -> Self {
        Self {
            kind: EntryKind::ClockIn,
            time: Some(time.into()),
            hours: None,
        }
    }

    pub fn clock_out(time: impl Into<String>) -> Self {
        Self {
            kind: EntryKind::ClockOut,
            time: Some(time.into()),
            hours: None,
        }
    }

    pub fn smart_working(hours: f64) -> Self {
        Self {
            kind: EntryKind::SmartWorking,
            time: None,
            hours: Some(hours),
        }
    }

    pub fn absent(hours: f64) -> Self {
        Self {
            kind: EntryKind::Absent,
            time: None,
            hours: Some(hours),
        }
    }

    pub fn time_str(&self) -> &str {
        self.time.as_deref().unwrap_or("--:--")
    }
}

/// Returns the special entry when `entries` is exactly one smart-working or
/// absent record.
pub fn sole_special(entries: &[TimeEntry]) -> Option<&TimeEntry> {
    match entries {
        [only] if only.kind.is_special() => Some(only),
        _ => None,
    }
}
