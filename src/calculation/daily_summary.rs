//! Daily worked-time totals and debt against the daily target.

use crate::config::TrackerConfig;
use crate::models::{AdjustedInterval, DaySummary};

use super::Normalizer;
use super::daily_pairing::DayPairing;
use super::formatting::format_duration;
use super::lunch::adjust_interval;

/// Minutes short of `target`, floored at zero.
///
/// # Example
///
/// ```
/// use swipe_tracker::calculation::debt_minutes;
///
/// assert_eq!(debt_minutes(415, 480), 65);
/// assert_eq!(debt_minutes(500, 480), 0);
/// ```
pub fn debt_minutes(worked_minutes: i64, target_minutes: i64) -> i64 {
    (target_minutes - worked_minutes).max(0)
}

/// Builds the [`DaySummary`] for one paired date.
///
/// A date with no intervals still yields a summary with zero worked minutes
/// and the full target as debt.
pub fn summarize_day(
    pairing: &DayPairing,
    config: &TrackerConfig,
    normalizer: &Normalizer,
) -> DaySummary {
    let intervals: Vec<AdjustedInterval> = pairing
        .intervals
        .iter()
        .map(|interval| adjust_interval(interval, config.lunch_window(), normalizer))
        .collect();

    let worked_minutes: i64 = intervals.iter().map(|i| i.worked_minutes).sum();
    let debt = debt_minutes(worked_minutes, config.daily_target_minutes());

    DaySummary {
        date: pairing.date,
        worked_minutes,
        worked_human: format_duration(worked_minutes),
        debt_minutes: debt,
        debt_human: format_duration(debt),
        intervals,
    }
}
