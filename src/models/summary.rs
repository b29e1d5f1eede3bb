//! Per-day and per-month summaries returned by the stats computation.
//!
//! These are recomputed from the swipe log on every query and never stored.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::AdjustedInterval;

/// Worked time and debt for one local calendar date.
///
/// Present for every date with at least one swipe, even when nothing paired.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySummary {
    /// The local calendar date.
    pub date: NaiveDate,
    /// Lunch-adjusted minutes summed over all intervals.
    pub worked_minutes: i64,
    /// `worked_minutes` as `"<H> hrs <M> mins"`.
    pub worked_human: String,
    /// Minutes short of the daily target, floored at zero.
    pub debt_minutes: i64,
    /// `debt_minutes` as `"<H> hrs <M> mins"`.
    pub debt_human: String,
    /// Paired intervals in chronological order.
    pub intervals: Vec<AdjustedInterval>,
}

/// Worked time totalled over one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthSummary {
    /// The `YYYY-MM` key.
    pub month: String,
    /// Calendar year.
    pub year: i32,
    /// Calendar month, 1-12.
    pub month_number: u32,
    /// Sum of `worked_minutes` over the month's day summaries.
    pub total_minutes: i64,
    /// `total_minutes` as `"<H> hrs <M> mins"`.
    pub total_human: String,
}

/// The full stats result for one card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardStats {
    /// Day summaries, ascending by date.
    pub per_day: Vec<DaySummary>,
    /// Month summaries, ascending by year and month.
    pub months: Vec<MonthSummary>,
}

impl CardStats {
    /// True when the card has no swipes at all.
    pub fn is_empty(&self) -> bool {
        self.per_day.is_empty() && self.months.is_empty()
    }

    /// Looks up the summary for a specific date.
    pub fn day(&self, date: NaiveDate) -> Option<&DaySummary> {
        self.per_day.iter().find(|d| d.date == date)
    }

    /// Looks up the summary for a `YYYY-MM` key.
    pub fn month(&self, key: &str) -> Option<&MonthSummary> {
        self.months.iter().find(|m| m.month == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_stats() {
        let stats = CardStats::default();
        assert!(stats.is_empty());
        assert!(stats.day(NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()).is_none());

        let json = serde_json::to_string(&stats).unwrap();
        assert_eq!(json, r#"{"per_day":[],"months":[]}"#);
    }

    #[test]
    fn test_day_summary_serialization() {
        let summary = DaySummary {
            date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
            worked_minutes: 0,
            worked_human: "0 hrs 0 mins".to_string(),
            debt_minutes: 480,
            debt_human: "8 hrs 0 mins".to_string(),
            intervals: vec![],
        };

        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains("\"date\":\"2026-01-15\""));
        assert!(json.contains("\"debt_minutes\":480"));

        let deserialized: DaySummary = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, summary);
    }

    #[test]
    fn test_month_lookup() {
        let stats = CardStats {
            per_day: vec![],
            months: vec![MonthSummary {
                month: "2026-01".to_string(),
                year: 2026,
                month_number: 1,
                total_minutes: 90,
                total_human: "1 hrs 30 mins".to_string(),
            }],
        };
        assert_eq!(stats.month("2026-01").unwrap().total_minutes, 90);
        assert!(stats.month("2026-02").is_none());
        assert!(!stats.is_empty());
    }
}
