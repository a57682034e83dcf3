//! Break policy: how many minutes to deduct from the gross time of a day.

use crate::core::rules::{PAUSE_MINUTES, PAUSE_THRESHOLD_MINUTES};

/// - Friday: never deducts.
/// - One pair or none: the flat pause, only when more than 6h were worked.
/// - Two or more pairs: tops the recorded break up to the pause, whatever
///   the hours worked.
pub fn pause_minutes(
    is_friday: bool,
    pair_count: usize,
    break_minutes: i64,
    worked_minutes: i64,
) -> i64 {
    if is_friday {
        return 0;
    }

    if pair_count <= 1 {
        if worked_minutes > PAUSE_THRESHOLD_MINUTES {
            PAUSE_MINUTES
        } else {
            0
        }
    } else {
        (PAUSE_MINUTES - break_minutes).max(0)
    }
}
