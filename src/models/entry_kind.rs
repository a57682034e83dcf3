use serde::{Deserialize, Serialize};

/// Kind of a recorded entry.
/// Serialized as the `type` field of the persisted entry record.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum EntryKind {
    ClockIn,
    ClockOut,
    SmartWorking,
    Absent,
}

impl EntryKind {
    /// Parse user input (case-insensitive, accepts a few short aliases)
    pub fn ek_from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "clock-in" | "in" => Some(Self::ClockIn),
            "clock-out" | "out" => Some(Self::ClockOut),
            "smart-working" | "sw" | "smart" => Some(Self::SmartWorking),
            "absent" | "abs" => Some(Self::Absent),
            _ => None,
        }
    }

    pub fn ek_as_str(&self) -> &'static str {
        match self {
            EntryKind::ClockIn => "clock-in",
            EntryKind::ClockOut => "clock-out",
            EntryKind::SmartWorking => "smart-working",
            EntryKind::Absent => "absent",
        }
    }

    pub fn is_in(&self) -> bool {
        matches!(self, EntryKind::ClockIn)
    }

    pub fn is_out(&self) -> bool {
        matches!(self, EntryKind::ClockOut)
    }

    /// Whole-day override (smart working or absence)
    pub fn is_special(&self) -> bool {
        matches!(self, EntryKind::SmartWorking | EntryKind::Absent)
    }
}
