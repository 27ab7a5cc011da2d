//! Integration tests for the octoscope analytics engine
//!
//! These drive `build_profile` end-to-end over synthetic feeds and check
//! the cross-component invariants that unit tests cannot see.

use chrono::{DateTime, NaiveDate, Utc};
use octoscope_core::analytics::build_profile;
use octoscope_core::types::{ActivityEvent, EventKind, EventPayload, RepoSummary, UtcOffset};

fn ts(s: &str) -> DateTime<Utc> {
    s.parse().unwrap()
}

fn event(kind: EventKind, ts_str: &str) -> ActivityEvent {
    ActivityEvent {
        kind,
        repo: "octo/stats".to_string(),
        created_at: ts(ts_str),
        payload: EventPayload::None,
    }
}

fn repo(language: Option<&str>, size: u64) -> RepoSummary {
    RepoSummary {
        name: "stats".to_string(),
        language: language.map(str::to_string),
        size,
    }
}

/// A plausible week of activity, newest first.
fn sample_feed() -> Vec<ActivityEvent> {
    vec![
        event(EventKind::Push, "2023-11-25T20:00:00Z"),
        event(EventKind::PullRequest, "2023-11-25T09:15:00Z"),
        event(EventKind::Push, "2023-11-24T10:30:00Z"),
        event(EventKind::Star, "2023-11-22T23:59:00Z"),
        event(EventKind::Issue, "2023-11-20T06:45:00Z"),
        event(EventKind::Push, "2023-11-19T20:00:00Z"),
    ]
}

fn sample_repos() -> Vec<RepoSummary> {
    vec![
        repo(Some("Rust"), 900),
        repo(Some("Python"), 300),
        repo(None, 5000),
        repo(Some("Rust"), 100),
    ]
}

// ============================================
// End-to-End Profile Tests
// ============================================

#[test]
fn test_full_profile() {
    let offset = UtcOffset::new(8).unwrap();
    let profile = build_profile(&sample_feed(), &sample_repos(), offset);

    // Six events over exactly six days
    let frequency = profile.synopsis.frequency.unwrap();
    assert_eq!(frequency.event_count, 6);
    assert_eq!(frequency.span_days, 6.0);
    assert_eq!(frequency.events_per_week, 7.0);

    // Five distinct UTC dates across a six-day span
    let consistency = profile.synopsis.consistency.unwrap();
    assert_eq!(consistency.active_days, 5);
    assert_eq!(consistency.total_days, 6);
    assert_eq!(consistency.percent, 83);

    // The two 20:00Z pushes land on shifted hour 4 (20:00Z + 8h); every
    // other event shifts to a distinct hour
    let peak = profile.synopsis.peak_hour.unwrap();
    assert_eq!(peak.hour, 4);
    assert_eq!(peak.event_count, 2);

    // Languageless repo is skipped; Rust accumulates across two repos
    assert_eq!(profile.languages.primary(), Some("Rust"));
    assert_eq!(profile.languages.total(), 1300);
    let top = profile.languages.top(5);
    assert_eq!(top.len(), 2);
    assert_eq!(top[0].language, "Rust");
    assert_eq!(top[0].percent, 76.9);
    assert_eq!(top[1].language, "Python");
    assert_eq!(top[1].percent, 23.1);

    // Histogram is UTC-date based and ascending
    let days = profile.volume.days();
    assert_eq!(days.len(), 5);
    assert_eq!(
        days.first().unwrap().date,
        NaiveDate::from_ymd_opt(2023, 11, 19).unwrap()
    );
    assert_eq!(
        days.last().unwrap().date,
        NaiveDate::from_ymd_opt(2023, 11, 25).unwrap()
    );
    assert_eq!(days.last().unwrap().count, 2);
}

#[test]
fn test_degenerate_inputs_are_not_errors() {
    let profile = build_profile(&[], &[], UtcOffset::UTC);

    assert!(profile.synopsis.frequency.is_none());
    assert!(profile.synopsis.consistency.is_none());
    assert!(profile.synopsis.peak_hour.is_none());
    assert_eq!(profile.languages.primary(), None);
    assert!(profile.languages.top(5).is_empty());
    assert!(profile.volume.is_empty());
}

#[test]
fn test_single_event_profile() {
    let events = vec![event(EventKind::Push, "2023-11-25T20:00:00Z")];
    let profile = build_profile(&events, &[], UtcOffset::new(8).unwrap());

    assert_eq!(profile.synopsis.frequency.unwrap().events_per_week, 7.0);
    assert_eq!(profile.synopsis.consistency.unwrap().percent, 100);
    assert_eq!(profile.synopsis.peak_hour.unwrap().hour, 4);
    assert_eq!(profile.volume.days().len(), 1);
}

// ============================================
// Invariant Tests
// ============================================

#[test]
fn test_invariants_hold_across_offsets() {
    let feed = sample_feed();
    let repos = sample_repos();

    for hours in -12..=14 {
        let offset = UtcOffset::new(hours).unwrap();
        let profile = build_profile(&feed, &repos, offset);

        let consistency = profile.synopsis.consistency.unwrap();
        assert!(consistency.active_days <= consistency.total_days);
        assert!(consistency.total_days >= 1);
        assert!(consistency.percent <= 100);

        let peak = profile.synopsis.peak_hour.unwrap();
        assert!(peak.hour <= 23);

        // The histogram is offset-independent by design
        assert_eq!(profile.volume, build_profile(&feed, &repos, UtcOffset::UTC).volume);
    }
}

#[test]
fn test_breakdown_total_matches_sum() {
    let profile = build_profile(&[], &sample_repos(), UtcOffset::UTC);
    let sum: u64 = profile
        .languages
        .top(usize::MAX)
        .iter()
        .map(|share| share.size)
        .sum();
    assert_eq!(profile.languages.total(), sum);
}

#[test]
fn test_engine_is_idempotent() {
    let feed = sample_feed();
    let repos = sample_repos();
    let offset = UtcOffset::new(-7).unwrap();

    let first = build_profile(&feed, &repos, offset);
    let second = build_profile(&feed, &repos, offset);

    assert_eq!(first, second);
}
