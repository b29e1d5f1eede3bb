//! Swipe direction, stored swipe records and classified swipe events.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::error::{TrackerError, TrackerResult};

/// Card number used when a swipe arrives without one.
pub const DEFAULT_CARD_NO: &str = "USER1";

/// Reader label prefix for the single door the tracker knows about.
pub const MAIN_DOOR_READER: &str = "Main Door";

/// Which way a badge holder passed the reader.
///
/// # Example
///
/// ```
/// use swipe_tracker::models::Direction;
///
/// assert_eq!("in".parse::<Direction>().unwrap(), Direction::In);
/// assert_eq!(Direction::from_reader_label("Main Door - OUT"), Some(Direction::Out));
/// assert_eq!(Direction::from_reader_label("Main Door - LOBBY"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    /// Entering; opens a work interval.
    In,
    /// Leaving; closes the open work interval.
    Out,
}

impl Direction {
    /// Classifies a free-text reader label by its trailing token.
    ///
    /// The last alphanumeric token is compared case-insensitively against
    /// `IN` and `OUT`. Anything else is unrecognized.
    pub fn from_reader_label(label: &str) -> Option<Self> {
        let token = label
            .rsplit(|c: char| !c.is_ascii_alphanumeric())
            .find(|t| !t.is_empty())?;

        if token.eq_ignore_ascii_case("IN") {
            Some(Direction::In)
        } else if token.eq_ignore_ascii_case("OUT") {
            Some(Direction::Out)
        } else {
            None
        }
    }

    /// The canonical reader label for this direction at the main door.
    pub fn reader_label(&self) -> String {
        format!("{} - {}", MAIN_DOOR_READER, self)
    }

    /// The uppercase token, `IN` or `OUT`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::In => "IN",
            Direction::Out => "OUT",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "IN" => Ok(Direction::In),
            "OUT" => Ok(Direction::Out),
            _ => Err(TrackerError::UnrecognizedDirection {
                label: s.to_string(),
            }),
        }
    }
}

/// Trims a submitted card number, falling back to [`DEFAULT_CARD_NO`].
pub fn normalize_card_no(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        Some(card) if !card.is_empty() => card.to_string(),
        _ => DEFAULT_CARD_NO.to_string(),
    }
}

/// One row of the append-only swipe log, as stored.
///
/// The reader name is kept verbatim; its direction is only interpreted
/// when the record is classified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwipeRecord {
    /// The badge the swipe belongs to.
    pub card_no: String,
    /// The reader label, e.g. `"Main Door - IN"`.
    pub reader_name: String,
    /// When the swipe happened, with an explicit offset.
    pub time: DateTime<FixedOffset>,
}

impl SwipeRecord {
    /// Creates a record for the main-door reader in the given direction.
    pub fn new(card_no: impl Into<String>, direction: Direction, time: DateTime<FixedOffset>) -> Self {
        Self {
            card_no: card_no.into(),
            reader_name: direction.reader_label(),
            time,
        }
    }

    /// Interprets the reader name, failing for unrecognized labels.
    pub fn classify(&self) -> TrackerResult<SwipeEvent> {
        let direction = Direction::from_reader_label(&self.reader_name).ok_or_else(|| {
            TrackerError::UnrecognizedDirection {
                label: self.reader_name.clone(),
            }
        })?;

        Ok(SwipeEvent {
            card_no: self.card_no.clone(),
            direction,
            timestamp: self.time,
        })
    }
}

/// A swipe whose direction has been validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwipeEvent {
    /// The badge the swipe belongs to.
    pub card_no: String,
    /// IN or OUT.
    pub direction: Direction,
    /// When the swipe happened, with an explicit offset.
    pub timestamp: DateTime<FixedOffset>,
}

impl SwipeEvent {
    /// Creates a classified event.
    pub fn new(card_no: impl Into<String>, direction: Direction, timestamp: DateTime<FixedOffset>) -> Self {
        Self {
            card_no: card_no.into(),
            direction,
            timestamp,
        }
    }
}
