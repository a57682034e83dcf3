pub mod add;
pub mod config;
pub mod day;
pub mod del;
pub mod export;
pub mod friday;
pub mod import;
pub mod init;
pub mod punch;
pub mod special;
pub mod week;

use crate::errors::AppResult;
use crate::utils::date::{self, iso_week_key, normalize_week_key};

/// Canonical week key from `--week`, `--date`, or today.
pub(crate) fn resolve_week(week: &Option<String>, day: &Option<String>) -> AppResult<String> {
    match (week, day) {
        (Some(wk), _) => normalize_week_key(wk),
        (None, Some(d)) => Ok(iso_week_key(date::parse_date(d)?)),
        (None, None) => Ok(iso_week_key(date::today())),
    }
}
