//! Synopsis metrics: weekly frequency, consistency, peak hour.

use std::collections::HashSet;

use serde::Serialize;

use crate::types::{ActivityEvent, UtcOffset};

use super::clock::{elapsed_days, shifted_hour, utc_date_key};
use super::round1;

/// Events-per-week rate over the observed span.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeeklyFrequency {
    /// Events per week, rounded to one decimal place
    pub events_per_week: f64,
    /// Number of events observed
    pub event_count: usize,
    /// Span the rate was computed over, in days (>= 1)
    pub span_days: f64,
}

/// Fraction of elapsed days with at least one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Consistency {
    /// Whole-number percentage of active days
    pub percent: u32,
    /// Days with at least one event (distinct UTC dates)
    pub active_days: u32,
    /// Elapsed days in the observed span (>= 1)
    pub total_days: u32,
}

/// Hour of day with the most events, in the configured timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PeakHour {
    /// Hour of day [0, 23]
    pub hour: u32,
    /// Events recorded in that hour
    pub event_count: u64,
    /// Offset the hour was computed in
    pub offset: UtcOffset,
}

impl PeakHour {
    /// Hour-range label of the form `04:00–04:59`.
    pub fn label(&self) -> String {
        format!("{:02}:00–{:02}:59", self.hour, self.hour)
    }
}

/// Derived behavioral synopsis of one account's activity feed.
///
/// Purely a function of the feed and the offset. Every field is `None`
/// when the feed is empty; that is the "not available" sentinel, not an
/// error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Synopsis {
    /// Weekly event rate, if the feed is non-empty
    pub frequency: Option<WeeklyFrequency>,
    /// Active-day ratio, if the feed is non-empty
    pub consistency: Option<Consistency>,
    /// Busiest hour of day, if the feed is non-empty
    pub peak_hour: Option<PeakHour>,
}

impl Synopsis {
    /// Compute the synopsis for a newest-first event feed.
    pub fn from_events(events: &[ActivityEvent], offset: UtcOffset) -> Self {
        let (Some(newest), Some(oldest)) = (events.first(), events.last()) else {
            return Self::default();
        };

        // One elapsed-day span feeds both frequency and consistency so
        // the two metrics stay mutually consistent.
        let span_days = elapsed_days(oldest.created_at, newest.created_at);

        let frequency = WeeklyFrequency {
            events_per_week: round1(events.len() as f64 / (span_days / 7.0)),
            event_count: events.len(),
            span_days,
        };

        let active_days = events
            .iter()
            .map(|event| utc_date_key(event.created_at))
            .collect::<HashSet<_>>()
            .len() as u32;
        // A short span can still straddle more date boundaries than its
        // ceiling; clamp so active_days never exceeds total_days.
        let total_days = (span_days.ceil() as u32).max(active_days);
        let consistency = Consistency {
            percent: (active_days as f64 / total_days as f64 * 100.0).round() as u32,
            active_days,
            total_days,
        };

        let mut by_hour = [0u64; 24];
        for event in events {
            by_hour[shifted_hour(event.created_at, offset) as usize] += 1;
        }
        // Ascending scan with a strict comparison: the lowest-numbered
        // hour wins ties.
        let mut peak = PeakHour {
            hour: 0,
            event_count: 0,
            offset,
        };
        for (hour, &count) in by_hour.iter().enumerate() {
            if count > peak.event_count {
                peak.hour = hour as u32;
                peak.event_count = count;
            }
        }

        Self {
            frequency: Some(frequency),
            consistency: Some(consistency),
            peak_hour: Some(peak),
        }
    }
}
