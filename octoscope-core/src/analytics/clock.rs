//! Time helpers for the analytics engine.

use crate::types::UtcOffset;
use chrono::{DateTime, Duration, NaiveDate, Timelike, Utc};

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Hour of day [0, 23] after applying the configured offset.
///
/// The offset is added to the UTC instant, so hours wrap across midnight
/// rather than clipping: `20:00Z` at +8 is hour 4 of the next local day.
/// Offset validity is the caller's contract ([`UtcOffset`] enforces it at
/// construction); this function does not re-validate.
pub fn shifted_hour(ts: DateTime<Utc>, offset: UtcOffset) -> u32 {
    (ts + Duration::hours(offset.hours() as i64)).hour()
}

/// Elapsed span between two instants, in days, floored at one day.
///
/// The floor keeps rate math sane for single-event feeds and feeds whose
/// events all share one instant (oldest == newest).
pub fn elapsed_days(oldest: DateTime<Utc>, newest: DateTime<Utc>) -> f64 {
    let days = newest.signed_duration_since(oldest).num_seconds() as f64 / SECONDS_PER_DAY;
    days.max(1.0)
}

/// UTC calendar date used as a day-bucketing key.
///
/// Deliberately not offset-shifted: volume buckets are host-side days,
/// while peak hour is the only offset-shifted metric.
pub fn utc_date_key(ts: DateTime<Utc>) -> NaiveDate {
    ts.date_naive()
}
