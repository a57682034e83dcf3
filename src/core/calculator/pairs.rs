//! Pairs clock-in/clock-out events of one day and measures the work
//! intervals and the real breaks between them.

use crate::models::time_entry::TimeEntry;
use crate::utils::time::parse_time;
use tracing::debug;

/// Result of pairing a day's clock events.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PairStats {
    pub worked_minutes: i64,
    pub has_incomplete: bool,
    pub pair_count: usize,
    /// Sum of the positive gaps between consecutive pairs
    pub break_minutes: i64,
}

/// The i-th clock-in is matched with the i-th clock-out, each list keeping
/// its original order. Unparseable times make their interval (or gap)
/// count as zero; the rest of the day is still processed.
pub fn resolve_pairs(entries: &[TimeEntry]) -> PairStats {
    let ins: Vec<Option<i64>> = clock_times(entries, |e| e.kind.is_in());
    let outs: Vec<Option<i64>> = clock_times(entries, |e| e.kind.is_out());

    let pair_count = ins.len().min(outs.len());

    let worked_minutes = (0..pair_count)
        .filter_map(|i| positive_diff(ins[i], outs[i]))
        .sum();

    let break_minutes = (1..pair_count)
        .filter_map(|i| positive_diff(outs[i - 1], ins[i]))
        .sum();

    PairStats {
        worked_minutes,
        has_incomplete: ins.len() > outs.len(),
        pair_count,
        break_minutes,
    }
}

fn clock_times(entries: &[TimeEntry], pick: impl Fn(&TimeEntry) -> bool) -> Vec<Option<i64>> {
    entries
        .iter()
        .filter(|e| pick(e))
        .map(|e| {
            let parsed = e.time.as_deref().and_then(parse_time);
            if parsed.is_none() {
                debug!(kind = e.kind.ek_as_str(), time = ?e.time, "skipping unparseable time");
            }
            parsed
        })
        .collect()
}

/// `end - start` when both are known and the difference is positive.
fn positive_diff(start: Option<i64>, end: Option<i64>) -> Option<i64> {
    let diff = end? - start?;
    (diff > 0).then_some(diff)
}
