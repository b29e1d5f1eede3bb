//! End-to-end stats for one card: classify, normalize, pair, aggregate.

use tracing::debug;

use crate::config::TrackerConfig;
use crate::models::{CardStats, DaySummary, SwipeEvent, SwipeRecord};

use super::Normalizer;
use super::daily_pairing::pair_events;
use super::daily_summary::summarize_day;
use super::monthly_totals::roll_up_months;

/// Interprets stored records, dropping those whose reader label is neither
/// IN nor OUT. Order is preserved.
pub fn classify_records(records: &[SwipeRecord]) -> Vec<SwipeEvent> {
    records
        .iter()
        .filter_map(|record| match record.classify() {
            Ok(event) => Some(event),
            Err(err) => {
                debug!(
                    card_no = %record.card_no,
                    time = %record.time,
                    error = %err,
                    "Skipping swipe with unrecognized direction"
                );
                None
            }
        })
        .collect()
}

/// Computes per-day and per-month worked time for one card's events.
///
/// `events` are the card's swipes as read from the log. The computation is
/// pure: the same events and config always give the same result.
///
/// # Example
///
/// ```
/// use swipe_tracker::calculation::compute_card_stats;
/// use swipe_tracker::config::TrackerConfig;
/// use swipe_tracker::models::{Direction, SwipeEvent};
/// use chrono::DateTime;
///
/// let at = |s: &str| DateTime::parse_from_rfc3339(s).unwrap();
/// let events = vec![
///     SwipeEvent::new("T3", Direction::Out, at("2026-01-15T08:00:00+05:30")),
///     SwipeEvent::new("T3", Direction::In, at("2026-01-15T09:00:00+05:30")),
///     SwipeEvent::new("T3", Direction::Out, at("2026-01-15T17:00:00+05:30")),
/// ];
///
/// let stats = compute_card_stats(&events, &TrackerConfig::default());
/// assert_eq!(stats.per_day.len(), 1);
/// assert_eq!(stats.per_day[0].worked_minutes, 420);
/// assert_eq!(stats.months[0].month, "2026-01");
/// ```
pub fn compute_card_stats(events: &[SwipeEvent], config: &TrackerConfig) -> CardStats {
    let normalizer = Normalizer::from_config(config);

    let per_day: Vec<DaySummary> = pair_events(events, &normalizer)
        .iter()
        .map(|pairing| summarize_day(pairing, config, &normalizer))
        .collect();
    let months = roll_up_months(&per_day);

    CardStats { per_day, months }
}

/// Classifies stored records and computes stats from the recognized ones.
pub fn compute_stats_from_records(records: &[SwipeRecord], config: &TrackerConfig) -> CardStats {
    compute_card_stats(&classify_records(records), config)
}
