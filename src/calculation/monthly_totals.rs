//! Monthly roll-up of day summaries.

use std::collections::BTreeMap;

use chrono::Datelike;

use crate::models::{DaySummary, MonthSummary};

use super::formatting::format_duration;

/// Sums worked minutes per calendar month, ascending by year and month.
///
/// Days with zero worked minutes still register their month.
///
/// # Example
///
/// ```
/// use swipe_tracker::calculation::roll_up_months;
///
/// assert!(roll_up_months(&[]).is_empty());
/// ```
pub fn roll_up_months(days: &[DaySummary]) -> Vec<MonthSummary> {
    let mut totals: BTreeMap<(i32, u32), i64> = BTreeMap::new();

    for day in days {
        *totals
            .entry((day.date.year(), day.date.month()))
            .or_insert(0) += day.worked_minutes;
    }

    totals
        .into_iter()
        .map(|((year, month_number), total_minutes)| MonthSummary {
            month: format!("{}-{:02}", year, month_number),
            year,
            month_number,
            total_minutes,
            total_human: format_duration(total_minutes),
        })
        .collect()
}
