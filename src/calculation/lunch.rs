//! Lunch window deduction.
//!
//! The window is anchored to the local date of the interval start. Overlap
//! and interval length are both truncated to whole minutes before the
//! subtraction, and the result is floored at zero.

use crate::config::LunchWindow;
use crate::models::{AdjustedInterval, WorkInterval, whole_minutes};

use super::Normalizer;
use super::formatting::format_interval_label;

/// Whole minutes of `interval` that fall inside the lunch window.
///
/// Returns zero when lunch deduction is disabled or there is no overlap.
///
/// # Example
///
/// ```
/// use swipe_tracker::calculation::{lunch_overlap_minutes, Normalizer};
/// use swipe_tracker::config::LunchWindow;
/// use swipe_tracker::models::WorkInterval;
/// use chrono::DateTime;
/// use chrono_tz::Tz;
///
/// let at = |s: &str| DateTime::parse_from_rfc3339(s).unwrap();
/// let interval = WorkInterval::new(
///     at("2026-01-15T12:30:00+05:30"),
///     at("2026-01-15T13:20:00+05:30"),
/// ).unwrap();
///
/// let normalizer = Normalizer::new(Tz::Asia__Kolkata);
/// let overlap = lunch_overlap_minutes(&interval, Some(LunchWindow::default()), &normalizer);
/// assert_eq!(overlap, 20);
/// ```
pub fn lunch_overlap_minutes(
    interval: &WorkInterval,
    lunch_window: Option<LunchWindow>,
    normalizer: &Normalizer,
) -> i64 {
    let Some(window) = lunch_window else {
        return 0;
    };

    let work_date = normalizer.to_local_date(&interval.start);
    let lunch_start = normalizer.local_instant(work_date, window.start());
    let lunch_end = normalizer.local_instant(work_date, window.end());

    let overlap_start = interval.start.max(lunch_start);
    let overlap_end = interval.end.min(lunch_end);

    whole_minutes(overlap_start, overlap_end)
}

/// Applies the lunch deduction to one interval.
pub fn adjust_interval(
    interval: &WorkInterval,
    lunch_window: Option<LunchWindow>,
    normalizer: &Normalizer,
) -> AdjustedInterval {
    let start = normalizer.normalize(&interval.start);
    let end = normalizer.normalize(&interval.end);
    let lunch_minutes = lunch_overlap_minutes(interval, lunch_window, normalizer);
    let worked_minutes = (interval.minutes - lunch_minutes).max(0);

    AdjustedInterval {
        start,
        end,
        raw_minutes: interval.minutes,
        lunch_minutes,
        worked_minutes,
        label: format_interval_label(start, end, worked_minutes),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, FixedOffset, NaiveTime};
    use chrono_tz::Tz;

    fn make_instant(s: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(s).unwrap()
    }

    fn make_interval(start: &str, end: &str) -> WorkInterval {
        WorkInterval::new(make_instant(start), make_instant(end)).unwrap()
    }

    fn ist() -> Normalizer {
        Normalizer::new(Tz::Asia__Kolkata)
    }

    fn lunch() -> Option<LunchWindow> {
        Some(LunchWindow::default())
    }

    #[test]
    fn test_interval_containing_lunch_loses_full_hour() {
        let interval = make_interval("2026-01-15T09:00:00+05:30", "2026-01-15T17:00:00+05:30");
        assert_eq!(lunch_overlap_minutes(&interval, lunch(), &ist()), 60);

        let adjusted = adjust_interval(&interval, lunch(), &ist());
        assert_eq!(adjusted.raw_minutes, 480);
        assert_eq!(adjusted.lunch_minutes, 60);
        assert_eq!(adjusted.worked_minutes, 420);
    }

    #[test]
    fn test_interval_before_lunch_untouched() {
        let interval = make_interval("2026-01-15T09:00:00+05:30", "2026-01-15T12:30:00+05:30");
        assert_eq!(lunch_overlap_minutes(&interval, lunch(), &ist()), 0);
    }

    #[test]
    fn test_interval_ending_at_lunch_start_untouched() {
        let interval = make_interval("2026-01-15T09:00:00+05:30", "2026-01-15T13:00:00+05:30");
        assert_eq!(lunch_overlap_minutes(&interval, lunch(), &ist()), 0);
    }

    #[test]
    fn test_partial_overlap_at_end_of_lunch() {
        let interval = make_interval("2026-01-15T13:30:00+05:30", "2026-01-15T18:00:00+05:30");
        assert_eq!(lunch_overlap_minutes(&interval, lunch(), &ist()), 30);
    }

    #[test]
    fn test_interval_inside_lunch_clamps_to_zero() {
        let interval = make_interval("2026-01-15T13:10:00+05:30", "2026-01-15T13:40:00+05:30");
        let adjusted = adjust_interval(&interval, lunch(), &ist());
        assert_eq!(adjusted.raw_minutes, 30);
        assert_eq!(adjusted.lunch_minutes, 30);
        assert_eq!(adjusted.worked_minutes, 0);
    }

    #[test]
    fn test_partial_minutes_truncated_before_subtraction() {
        // raw 09:00:00-13:00:50 is 240 mins, overlap 13:00:00-13:00:50 is 0 mins
        let interval = make_interval("2026-01-15T09:00:00+05:30", "2026-01-15T13:00:50+05:30");
        let adjusted = adjust_interval(&interval, lunch(), &ist());
        assert_eq!(adjusted.raw_minutes, 240);
        assert_eq!(adjusted.lunch_minutes, 0);
        assert_eq!(adjusted.worked_minutes, 240);
    }

    #[test]
    fn test_seconds_inside_lunch_can_zero_a_short_interval() {
        // raw 12:59:30-13:00:40 truncates to 1 min, overlap 40s truncates to 0
        let interval = make_interval("2026-01-15T12:59:30+05:30", "2026-01-15T13:00:40+05:30");
        let adjusted = adjust_interval(&interval, lunch(), &ist());
        assert_eq!(adjusted.raw_minutes, 1);
        assert_eq!(adjusted.lunch_minutes, 0);
        assert_eq!(adjusted.worked_minutes, 1);
    }

    #[test]
    fn test_lunch_disabled() {
        let interval = make_interval("2026-01-15T09:00:00+05:30", "2026-01-15T17:00:00+05:30");
        let adjusted = adjust_interval(&interval, None, &ist());
        assert_eq!(adjusted.lunch_minutes, 0);
        assert_eq!(adjusted.worked_minutes, 480);
    }

    #[test]
    fn test_lunch_uses_local_zone_not_utc() {
        // 07:00-08:00 UTC is 12:30-13:30 IST: 30 minutes of lunch overlap
        let interval = make_interval("2026-01-15T07:00:00+00:00", "2026-01-15T08:00:00+00:00");
        assert_eq!(lunch_overlap_minutes(&interval, lunch(), &ist()), 30);

        let adjusted = adjust_interval(&interval, lunch(), &ist());
        assert_eq!(adjusted.start.to_rfc3339(), "2026-01-15T12:30:00+05:30");
    }

    #[test]
    fn test_custom_window() {
        let window = LunchWindow::new(
            NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(12, 45, 0).unwrap(),
        )
        .unwrap();
        let interval = make_interval("2026-01-15T09:00:00+05:30", "2026-01-15T17:00:00+05:30");
        assert_eq!(lunch_overlap_minutes(&interval, Some(window), &ist()), 45);
    }

    #[test]
    fn test_adjusted_label() {
        let interval = make_interval("2026-01-15T09:05:00+05:30", "2026-01-15T17:00:00+05:30");
        let adjusted = adjust_interval(&interval, lunch(), &ist());
        assert_eq!(
            adjusted.label,
            "2026-01-15 09:05 AM → 2026-01-15 05:00 PM (415 mins)"
        );
    }
}
