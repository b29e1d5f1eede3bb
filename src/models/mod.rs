//! Core data models for the swipe tracker.
//!
//! Swipe records come from the log; everything else is derived per query.

mod interval;
mod summary;
mod swipe;

pub use interval::{AdjustedInterval, WorkInterval, whole_minutes};
pub use summary::{CardStats, DaySummary, MonthSummary};
pub use swipe::{
    DEFAULT_CARD_NO, Direction, MAIN_DOOR_READER, SwipeEvent, SwipeRecord, normalize_card_no,
};
