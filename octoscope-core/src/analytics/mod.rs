//! Activity analytics engine.
//!
//! Pure, stateless computation: raw activity events and repository
//! summaries go in, derived value objects come out. The engine performs
//! no I/O and recognizes no error states of its own; degenerate inputs
//! (an empty feed, repositories without languages, a single-instant feed)
//! resolve to sentinel values, never to failures.
//!
//! ```text
//! events ──┬──> Synopsis        (frequency, consistency, peak hour)
//!          └──> DailyVolume     (per-UTC-day counts)
//! repos  ─────> LanguageBreakdown (per-language sizes, primary, top-N)
//!                       │
//!                       ▼
//!               ActivityProfile
//! ```
//!
//! Each account's profile is independent of every other account's, so
//! callers evaluating a watchlist can run the fetch-then-analyze pipeline
//! per account in parallel with no coordination.

pub mod clock;
pub mod languages;
pub mod synopsis;
pub mod volume;

pub use languages::{LanguageBreakdown, LanguageShare};
pub use synopsis::{Consistency, PeakHour, Synopsis, WeeklyFrequency};
pub use volume::{DailyVolume, DayCount};

use serde::Serialize;

use crate::types::{ActivityEvent, RepoSummary, UtcOffset};

/// Round to one decimal place for reporting.
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Complete derived profile for one account.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ActivityProfile {
    /// Frequency, consistency, and peak-hour metrics
    pub synopsis: Synopsis,
    /// Per-language size breakdown
    pub languages: LanguageBreakdown,
    /// Per-day event counts
    pub volume: DailyVolume,
}

/// Compose the full profile from already-fetched data.
///
/// Expects the event feed newest-first, as the API returns it. Purely a
/// function of its inputs; callers hand in empty slices when a fetch
/// legitimately produced no data. Fetch *failures* never reach this
/// function — they stay `Err` values at the client boundary.
pub fn build_profile(
    events: &[ActivityEvent],
    repos: &[RepoSummary],
    offset: UtcOffset,
) -> ActivityProfile {
    ActivityProfile {
        synopsis: Synopsis::from_events(events, offset),
        languages: LanguageBreakdown::from_repos(repos),
        volume: DailyVolume::from_events(events),
    }
}
