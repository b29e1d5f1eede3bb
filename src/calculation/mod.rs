//! Calculation logic for the swipe tracker.
//!
//! Swipes flow through three stages: the [`Normalizer`] re-expresses every
//! instant in the configured local zone, the daily pairer turns each local
//! date's IN/OUT sequence into work intervals, and the aggregator applies the
//! lunch deduction and rolls worked minutes up per day and per month.

mod daily_pairing;
mod daily_summary;
mod formatting;
mod lunch;
mod monthly_totals;
mod normalizer;
mod stats;

pub use daily_pairing::{DayPairing, PairingAnomaly, group_by_local_date, pair_day, pair_events};
pub use daily_summary::{debt_minutes, summarize_day};
pub use formatting::{format_duration, format_interval_label};
pub use lunch::{adjust_interval, lunch_overlap_minutes};
pub use monthly_totals::roll_up_months;
pub use normalizer::Normalizer;
pub use stats::{classify_records, compute_card_stats, compute_stats_from_records};
