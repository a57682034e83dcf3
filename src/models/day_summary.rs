use serde::Serialize;

/// Derived figures for one day. Nothing here is stored.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct DaySummary {
    /// Net minutes worked (gross minus pause, never negative)
    pub minutes: i64,
    /// A clock-in has no matching clock-out
    pub has_incomplete: bool,
    pub gross_minutes: i64,
    pub pause_applied: bool,
    /// Minutes actually deducted by the break policy
    pub pause_minutes: i64,
    /// Real break when the day has several pairs, otherwise the flat pause
    /// when one was applied
    pub break_minutes: i64,
}
