//! Grouping swipes by local date and pairing IN/OUT swipes into intervals.
//!
//! Pairing is a single sequential pass per date with one open slot:
//!
//! - IN always (re)opens the slot; an earlier unmatched IN is discarded.
//! - OUT with no open IN is discarded.
//! - OUT not strictly after the open IN is discarded and the IN stays open.
//! - Otherwise OUT closes the slot and emits an interval.
//! - An IN still open at the end of the date produces nothing and is not
//!   carried into the next date.

use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{Direction, SwipeEvent, WorkInterval};

use super::Normalizer;

/// A swipe the pairer discarded, and why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PairingAnomaly {
    /// A second IN arrived before an OUT; the earlier IN was dropped.
    ReplacedOpen {
        /// The dropped IN.
        discarded: DateTime<FixedOffset>,
        /// The IN that replaced it.
        replacement: DateTime<FixedOffset>,
    },
    /// An OUT arrived with no open IN.
    StrayClose {
        /// The dropped OUT.
        at: DateTime<FixedOffset>,
    },
    /// An OUT was not strictly after the open IN.
    NonPositiveInterval {
        /// The IN that stayed open.
        open: DateTime<FixedOffset>,
        /// The dropped OUT.
        close: DateTime<FixedOffset>,
    },
    /// An IN was still open when the date ended.
    UnclosedOpen {
        /// The dangling IN.
        at: DateTime<FixedOffset>,
    },
}

/// Pairing outcome for one local date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPairing {
    /// The local calendar date.
    pub date: NaiveDate,
    /// Intervals in the order they closed.
    pub intervals: Vec<WorkInterval>,
    /// Discarded swipes, in the order they were seen.
    pub anomalies: Vec<PairingAnomaly>,
}

/// Normalizes events and buckets them by local calendar date.
///
/// Dates come back ascending. Within a date events are ordered by instant;
/// events with equal instants keep their input order.
pub fn group_by_local_date(
    events: &[SwipeEvent],
    normalizer: &Normalizer,
) -> BTreeMap<NaiveDate, Vec<SwipeEvent>> {
    let mut grouped: BTreeMap<NaiveDate, Vec<SwipeEvent>> = BTreeMap::new();

    for event in events {
        let local = normalizer.normalize_event(event);
        grouped
            .entry(local.timestamp.date_naive())
            .or_default()
            .push(local);
    }

    for day_events in grouped.values_mut() {
        day_events.sort_by_key(|e| e.timestamp);
    }

    grouped
}

/// Pairs one date's events, which must already be in time order.
///
/// # Example
///
/// ```
/// use swipe_tracker::calculation::pair_day;
/// use swipe_tracker::models::{Direction, SwipeEvent};
/// use chrono::{DateTime, NaiveDate};
///
/// let at = |s: &str| DateTime::parse_from_rfc3339(s).unwrap();
/// let events = vec![
///     SwipeEvent::new("T2", Direction::In, at("2026-01-15T08:50:00+05:30")),
///     SwipeEvent::new("T2", Direction::In, at("2026-01-15T09:05:00+05:30")),
///     SwipeEvent::new("T2", Direction::Out, at("2026-01-15T17:00:00+05:30")),
/// ];
///
/// let pairing = pair_day(NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(), &events);
/// assert_eq!(pairing.intervals.len(), 1);
/// assert_eq!(pairing.intervals[0].minutes, 475);
/// assert_eq!(pairing.anomalies.len(), 1);
/// ```
pub fn pair_day(date: NaiveDate, events: &[SwipeEvent]) -> DayPairing {
    let mut open_in: Option<DateTime<FixedOffset>> = None;
    let mut intervals = Vec::new();
    let mut anomalies = Vec::new();

    for event in events {
        match event.direction {
            Direction::In => {
                if let Some(discarded) = open_in {
                    anomalies.push(PairingAnomaly::ReplacedOpen {
                        discarded,
                        replacement: event.timestamp,
                    });
                }
                open_in = Some(event.timestamp);
            }
            Direction::Out => {
                let Some(open) = open_in else {
                    anomalies.push(PairingAnomaly::StrayClose {
                        at: event.timestamp,
                    });
                    continue;
                };

                match WorkInterval::new(open, event.timestamp) {
                    Some(interval) => {
                        intervals.push(interval);
                        open_in = None;
                    }
                    None => anomalies.push(PairingAnomaly::NonPositiveInterval {
                        open,
                        close: event.timestamp,
                    }),
                }
            }
        }
    }

    if let Some(at) = open_in {
        anomalies.push(PairingAnomaly::UnclosedOpen { at });
    }

    for anomaly in &anomalies {
        debug!(date = %date, anomaly = ?anomaly, "Discarded swipe during pairing");
    }

    DayPairing {
        date,
        intervals,
        anomalies,
    }
}

/// Groups events by local date and pairs each date independently.
///
/// Returns one [`DayPairing`] per date that has at least one event, ascending
/// by date.
pub fn pair_events(events: &[SwipeEvent], normalizer: &Normalizer) -> Vec<DayPairing> {
    group_by_local_date(events, normalizer)
        .into_iter()
        .map(|(date, day_events)| pair_day(date, &day_events))
        .collect()
}
