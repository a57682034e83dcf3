use crate::utils::time::format_signed_duration;
use serde::Serialize;

/// A signed amount of minutes with its human-readable rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignedMinutes {
    pub minutes: i64,
    pub text: String,
    pub is_positive: bool,
    pub is_negative: bool,
    pub is_neutral: bool,
}

impl SignedMinutes {
    pub fn new(minutes: i64) -> Self {
        Self {
            minutes,
            text: format_signed_duration(minutes),
            is_positive: minutes > 0,
            is_negative: minutes < 0,
            is_neutral: minutes == 0,
        }
    }
}

/// Difference between a day's net minutes and its target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayDelta {
    #[serde(flatten)]
    pub value: SignedMinutes,
    pub has_incomplete: bool,
}

impl DayDelta {
    pub fn minutes(&self) -> i64 {
        self.value.minutes
    }
}
