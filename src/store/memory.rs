//! In-process swipe log.

use std::sync::RwLock;

use crate::error::{TrackerError, TrackerResult};
use crate::models::SwipeRecord;

use super::SwipeLog;

/// A [`SwipeLog`] held in memory for the lifetime of the process.
#[derive(Debug, Default)]
pub struct InMemorySwipeLog {
    records: RwLock<Vec<SwipeRecord>>,
}

impl InMemorySwipeLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a log pre-populated with `records`.
    pub fn with_records(records: Vec<SwipeRecord>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    /// Number of stored records across all cards.
    pub fn len(&self) -> TrackerResult<usize> {
        let records = self.records.read().map_err(|_| poisoned())?;
        Ok(records.len())
    }

    /// Whether the log holds no records.
    pub fn is_empty(&self) -> TrackerResult<bool> {
        Ok(self.len()? == 0)
    }
}

fn poisoned() -> TrackerError {
    TrackerError::StoreUnavailable {
        message: "swipe log lock poisoned".to_string(),
    }
}

impl SwipeLog for InMemorySwipeLog {
    fn append(&self, record: SwipeRecord) -> TrackerResult<()> {
        self.records.write().map_err(|_| poisoned())?.push(record);
        Ok(())
    }

    fn records_for_card(&self, card_no: &str) -> TrackerResult<Vec<SwipeRecord>> {
        let records = self.records.read().map_err(|_| poisoned())?;
        let mut matching: Vec<SwipeRecord> = records
            .iter()
            .filter(|record| record.card_no == card_no)
            .cloned()
            .collect();
        // stable: equal timestamps keep insertion order
        matching.sort_by_key(|record| record.time);
        Ok(matching)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Direction;
    use chrono::{DateTime, FixedOffset};
    use std::sync::Arc;

    fn make_instant(s: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(s).unwrap()
    }

    #[test]
    fn test_new_log_is_empty() {
        let log = InMemorySwipeLog::new();
        assert!(log.is_empty().unwrap());
        assert!(log.records_for_card("USER1").unwrap().is_empty());
    }

    #[test]
    fn test_records_sorted_by_instant() {
        let log = InMemorySwipeLog::new();
        log.append(SwipeRecord::new("C1", Direction::Out, make_instant("2026-01-15T17:00:00+05:30")))
            .unwrap();
        // 03:30 UTC is 09:00 IST, earlier than the first append
        log.append(SwipeRecord::new("C1", Direction::In, make_instant("2026-01-15T03:30:00+00:00")))
            .unwrap();

        let records = log.records_for_card("C1").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].reader_name, "Main Door - IN");
        assert_eq!(records[1].reader_name, "Main Door - OUT");
        assert_eq!(log.len().unwrap(), 2);
    }

    #[test]
    fn test_equal_timestamps_keep_insertion_order() {
        let at = make_instant("2026-01-15T09:00:00+05:30");
        let log = InMemorySwipeLog::with_records(vec![
            SwipeRecord::new("C1", Direction::Out, at),
            SwipeRecord::new("C1", Direction::In, at),
        ]);

        let records = log.records_for_card("C1").unwrap();
        assert_eq!(records[0].reader_name, "Main Door - OUT");
        assert_eq!(records[1].reader_name, "Main Door - IN");
    }

    #[test]
    fn test_card_match_is_exact() {
        let log = InMemorySwipeLog::new();
        log.append(SwipeRecord::new("user1", Direction::In, make_instant("2026-01-15T09:00:00+05:30")))
            .unwrap();
        assert!(log.records_for_card("USER1").unwrap().is_empty());
    }

    #[test]
    fn test_poisoned_lock_reports_unavailable() {
        let log = Arc::new(InMemorySwipeLog::new());
        let clone = Arc::clone(&log);
        let _ = std::thread::spawn(move || {
            let _guard = clone.records.write().unwrap();
            panic!("poison the lock");
        })
        .join();

        let result = log.records_for_card("C1");
        assert!(matches!(result, Err(TrackerError::StoreUnavailable { .. })));
        let result = log.append(SwipeRecord::new(
            "C1",
            Direction::In,
            make_instant("2026-01-15T09:00:00+05:30"),
        ));
        assert!(matches!(result, Err(TrackerError::StoreUnavailable { .. })));
    }
}
