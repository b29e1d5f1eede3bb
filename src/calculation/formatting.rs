//! Human-readable duration and interval strings.

use chrono::{DateTime, FixedOffset};

const INTERVAL_TIME_FORMAT: &str = "%Y-%m-%d %I:%M %p";

/// Formats minutes as `"<H> hrs <M> mins"`.
///
/// # Example
///
/// ```
/// use swipe_tracker::calculation::format_duration;
///
/// assert_eq!(format_duration(475), "7 hrs 55 mins");
/// assert_eq!(format_duration(0), "0 hrs 0 mins");
/// ```
pub fn format_duration(minutes: i64) -> String {
    let minutes = minutes.max(0);
    format!("{} hrs {} mins", minutes / 60, minutes % 60)
}

/// Formats an interval as `"<start> → <end> (<mins> mins)"` on a 12-hour clock.
pub fn format_interval_label(
    start: DateTime<FixedOffset>,
    end: DateTime<FixedOffset>,
    minutes: i64,
) -> String {
    format!(
        "{} → {} ({} mins)",
        start.format(INTERVAL_TIME_FORMAT),
        end.format(INTERVAL_TIME_FORMAT),
        minutes
    )
}
