//! Time zone normalization for swipe timestamps.
//!
//! Every instant entering the pairer is re-expressed in the configured local
//! zone so that calendar dates and wall-clock times are read consistently.

use chrono::{
    DateTime, Duration, FixedOffset, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, Offset,
    TimeZone, Utc,
};
use chrono_tz::Tz;

use crate::config::TrackerConfig;
use crate::models::SwipeEvent;

/// Converts instants into the configured local zone.
///
/// Normalizing never changes the absolute instant, only the offset it is
/// written with.
///
/// # Example
///
/// ```
/// use swipe_tracker::calculation::Normalizer;
/// use chrono::{DateTime, NaiveDate};
/// use chrono_tz::Tz;
///
/// let normalizer = Normalizer::new(Tz::Asia__Kolkata);
/// let utc = DateTime::parse_from_rfc3339("2026-01-15T20:00:00+00:00").unwrap();
///
/// let local = normalizer.normalize(&utc);
/// assert_eq!(local, utc);
/// assert_eq!(local.to_rfc3339(), "2026-01-16T01:30:00+05:30");
/// assert_eq!(normalizer.to_local_date(&utc), NaiveDate::from_ymd_opt(2026, 1, 16).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Normalizer {
    zone: Tz,
}

impl Normalizer {
    /// Creates a normalizer for the given zone.
    pub fn new(zone: Tz) -> Self {
        Self { zone }
    }

    /// Creates a normalizer for the configured zone.
    pub fn from_config(config: &TrackerConfig) -> Self {
        Self::new(config.time_zone())
    }

    /// The local zone.
    pub fn zone(&self) -> Tz {
        self.zone
    }

    /// Re-expresses an instant with the local zone's offset at that instant.
    pub fn normalize<Z: TimeZone>(&self, instant: &DateTime<Z>) -> DateTime<FixedOffset> {
        let local = instant.with_timezone(&self.zone);
        let offset = local.offset().fix();
        local.with_timezone(&offset)
    }

    /// Tags a wall-clock reading with the local zone.
    ///
    /// Only needed for timestamps that arrive without an offset. An ambiguous
    /// reading (clocks turned back) takes the earlier instant; a reading inside
    /// a gap (clocks turned forward) is interpreted with the offset in force
    /// before the gap, which lands it just after the transition.
    pub fn tag_naive(&self, naive: NaiveDateTime) -> DateTime<FixedOffset> {
        match self.zone.from_local_datetime(&naive) {
            LocalResult::Single(local) => self.normalize(&local),
            LocalResult::Ambiguous(earliest, _) => self.normalize(&earliest),
            LocalResult::None => {
                let before_gap = self
                    .zone
                    .offset_from_utc_datetime(&(naive - Duration::days(1)))
                    .fix();
                let utc = naive - Duration::seconds(i64::from(before_gap.local_minus_utc()));
                self.normalize(&Utc.from_utc_datetime(&utc))
            }
        }
    }

    /// The local instant for a wall-clock time on a local date.
    pub fn local_instant(&self, date: NaiveDate, time: NaiveTime) -> DateTime<FixedOffset> {
        self.tag_naive(date.and_time(time))
    }

    /// The local calendar date of an instant.
    pub fn to_local_date<Z: TimeZone>(&self, instant: &DateTime<Z>) -> NaiveDate {
        instant.with_timezone(&self.zone).date_naive()
    }

    /// The local wall-clock time of an instant.
    pub fn to_local_time<Z: TimeZone>(&self, instant: &DateTime<Z>) -> NaiveTime {
        instant.with_timezone(&self.zone).time()
    }

    /// Returns the event with its timestamp expressed in local time.
    pub fn normalize_event(&self, event: &SwipeEvent) -> SwipeEvent {
        SwipeEvent {
            card_no: event.card_no.clone(),
            direction: event.direction,
            timestamp: self.normalize(&event.timestamp),
        }
    }
}
