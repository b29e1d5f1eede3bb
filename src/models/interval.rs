//! Work intervals produced by pairing IN and OUT swipes.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// A closed IN→OUT interval.
///
/// Only constructed when `end > start`; `minutes` is the raw elapsed time in
/// whole minutes, truncated.
///
/// # Example
///
/// ```
/// use swipe_tracker::models::WorkInterval;
/// use chrono::DateTime;
///
/// let start = DateTime::parse_from_rfc3339("2026-01-15T09:00:00+05:30").unwrap();
/// let end = DateTime::parse_from_rfc3339("2026-01-15T09:10:59+05:30").unwrap();
/// let interval = WorkInterval::new(start, end).unwrap();
/// assert_eq!(interval.minutes, 10);
///
/// assert!(WorkInterval::new(end, start).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkInterval {
    /// The IN swipe that opened the interval.
    pub start: DateTime<FixedOffset>,
    /// The OUT swipe that closed it.
    pub end: DateTime<FixedOffset>,
    /// Whole minutes between start and end.
    pub minutes: i64,
}

impl WorkInterval {
    /// Builds an interval, or `None` unless `end` is strictly after `start`.
    pub fn new(start: DateTime<FixedOffset>, end: DateTime<FixedOffset>) -> Option<Self> {
        if end <= start {
            return None;
        }
        Some(Self {
            start,
            end,
            minutes: whole_minutes(start, end),
        })
    }
}

/// Whole minutes from `start` to `end`, dropping any partial minute.
///
/// Returns zero when `end` is not after `start`.
pub fn whole_minutes(start: DateTime<FixedOffset>, end: DateTime<FixedOffset>) -> i64 {
    if end <= start {
        return 0;
    }
    (end - start).num_seconds() / 60
}

/// A work interval after lunch deduction, as reported in a day summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjustedInterval {
    /// Interval start in local time.
    pub start: DateTime<FixedOffset>,
    /// Interval end in local time.
    pub end: DateTime<FixedOffset>,
    /// Whole minutes before lunch deduction.
    pub raw_minutes: i64,
    /// Whole minutes overlapping the lunch window.
    pub lunch_minutes: i64,
    /// `raw_minutes - lunch_minutes`, never negative.
    pub worked_minutes: i64,
    /// Display form, e.g. `2026-01-15 09:00 AM → 2026-01-15 12:30 PM (210 mins)`.
    pub label: String,
}
