//! Swipe event log.
//!
//! The log is the only stateful collaborator: it appends raw swipe records
//! and hands back a card's history for the stats pipeline to recompute.

mod memory;

pub use memory::InMemorySwipeLog;

use tracing::debug;

use crate::calculation::compute_stats_from_records;
use crate::config::TrackerConfig;
use crate::error::TrackerResult;
use crate::models::{CardStats, SwipeRecord};

/// Append-only storage for swipe records.
pub trait SwipeLog: Send + Sync {
    /// Stores one record.
    fn append(&self, record: SwipeRecord) -> TrackerResult<()>;

    /// Returns every record for `card_no`, oldest first.
    ///
    /// Records sharing a timestamp keep their insertion order.
    fn records_for_card(&self, card_no: &str) -> TrackerResult<Vec<SwipeRecord>>;
}

/// Reads a card's history from `log` and computes its stats.
///
/// # Example
///
/// ```
/// use swipe_tracker::config::TrackerConfig;
/// use swipe_tracker::models::{Direction, SwipeRecord};
/// use swipe_tracker::store::{stats_for_card, InMemorySwipeLog, SwipeLog};
/// use chrono::DateTime;
///
/// let log = InMemorySwipeLog::new();
/// let at = |s: &str| DateTime::parse_from_rfc3339(s).unwrap();
/// log.append(SwipeRecord::new("C7", Direction::In, at("2026-01-15T09:00:00+05:30"))).unwrap();
/// log.append(SwipeRecord::new("C7", Direction::Out, at("2026-01-15T12:00:00+05:30"))).unwrap();
///
/// let stats = stats_for_card(&log, "C7", &TrackerConfig::default()).unwrap();
/// assert_eq!(stats.per_day[0].worked_minutes, 180);
/// ```
pub fn stats_for_card(
    log: &dyn SwipeLog,
    card_no: &str,
    config: &TrackerConfig,
) -> TrackerResult<CardStats> {
    let records = log.records_for_card(card_no)?;
    debug!(card_no, records = records.len(), "Computing card stats");
    Ok(compute_stats_from_records(&records, config))
}
