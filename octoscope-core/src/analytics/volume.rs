//! Daily volume histogram.
//!
//! Buckets are unshifted UTC calendar dates: the histogram reports the
//! host's day boundaries while peak hour reports the configured timezone.
//! The asymmetry is deliberate and kept as-is; unifying both onto the
//! configured timezone would be a product decision, not a bugfix.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::types::ActivityEvent;

use super::clock::utc_date_key;

/// Event count for one calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayCount {
    /// UTC calendar date
    pub date: NaiveDate,
    /// Events recorded on that date
    pub count: u64,
}

/// Per-day event counts, ascending by date.
///
/// One entry per distinct UTC date present in the feed; dates without
/// events are not filled in. An empty feed yields an empty sequence and
/// renderers skip the chart entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DailyVolume {
    days: Vec<DayCount>,
}

impl DailyVolume {
    /// Bucket an event feed by UTC calendar date.
    pub fn from_events(events: &[ActivityEvent]) -> Self {
        let mut buckets: BTreeMap<NaiveDate, u64> = BTreeMap::new();
        for event in events {
            *buckets.entry(utc_date_key(event.created_at)).or_insert(0) += 1;
        }
        Self {
            days: buckets
                .into_iter()
                .map(|(date, count)| DayCount { date, count })
                .collect(),
        }
    }

    /// The (date, count) pairs, ascending by date.
    pub fn days(&self) -> &[DayCount] {
        &self.days
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Largest single-day count, used to scale chart bars.
    pub fn max_count(&self) -> u64 {
        self.days.iter().map(|day| day.count).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{EventKind, EventPayload};
    use chrono::{DateTime, Utc};

    fn event(ts: &str) -> ActivityEvent {
        ActivityEvent {
            kind: EventKind::Push,
            repo: "octo/stats".to_string(),
            created_at: ts.parse::<DateTime<Utc>>().unwrap(),
            payload: EventPayload::None,
        }
    }

    #[test]
    fn test_empty_feed_yields_empty_histogram() {
        let volume = DailyVolume::from_events(&[]);
        assert!(volume.is_empty());
        assert_eq!(volume.max_count(), 0);
    }

    #[test]
    fn test_groups_by_utc_date() {
        // Two minutes apart but on different UTC dates: two buckets
        let volume = DailyVolume::from_events(&[
            event("2023-11-26T00:01:00Z"),
            event("2023-11-25T23:59:00Z"),
        ]);

        let days = volume.days();
        assert_eq!(days.len(), 2);
        assert_eq!(days[0].date, NaiveDate::from_ymd_opt(2023, 11, 25).unwrap());
        assert_eq!(days[0].count, 1);
        assert_eq!(days[1].date, NaiveDate::from_ymd_opt(2023, 11, 26).unwrap());
        assert_eq!(days[1].count, 1);
    }

    #[test]
    fn test_counts_and_ascending_order() {
        // Newest-first feed; histogram comes out oldest-first
        let volume = DailyVolume::from_events(&[
            event("2023-11-26T18:00:00Z"),
            event("2023-11-26T09:00:00Z"),
            event("2023-11-26T08:00:00Z"),
            event("2023-11-24T10:00:00Z"),
        ]);

        let days = volume.days();
        assert_eq!(days.len(), 2);
        assert_eq!(days[0].date, NaiveDate::from_ymd_opt(2023, 11, 24).unwrap());
        assert_eq!(days[0].count, 1);
        assert_eq!(days[1].date, NaiveDate::from_ymd_opt(2023, 11, 26).unwrap());
        assert_eq!(days[1].count, 3);
        assert_eq!(volume.max_count(), 3);
    }
}
