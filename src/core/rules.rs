//! Collective agreement constants. Fixed for the whole process.

/// Weekly target: 36 hours
pub const WEEKLY_TARGET_MINUTES: i64 = 2160;

/// Monday to Thursday target: 7h30m
pub const DAILY_TARGET_MINUTES: i64 = 450;

/// Friday target: 6h
pub const FRIDAY_TARGET_MINUTES: i64 = 360;

/// Minimum break deducted on Monday to Thursday
pub const PAUSE_MINUTES: i64 = 30;

/// Gross minutes above which a single-pair day owes the pause (strict `>`)
pub const PAUSE_THRESHOLD_MINUTES: i64 = 360;

/// Full-day credit for smart working, Monday to Thursday
pub const SMART_WORKING_MINUTES: i64 = 450;

/// Full-day credit for smart working on Friday
pub const SMART_WORKING_FRIDAY_MINUTES: i64 = 360;

/// Target for a day, chosen by the Friday gate.
pub fn daily_target(is_friday: bool) -> i64 {
    if is_friday {
        FRIDAY_TARGET_MINUTES
    } else {
        DAILY_TARGET_MINUTES
    }
}

/// Smart-working credit for a day, chosen by the Friday gate.
pub fn smart_working_credit(is_friday: bool) -> i64 {
    if is_friday {
        SMART_WORKING_FRIDAY_MINUTES
    } else {
        SMART_WORKING_MINUTES
    }
}
