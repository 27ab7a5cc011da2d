//! Core domain types for octoscope
//!
//! These types are the normalized data model the analytics engine operates
//! on. Wire-format concerns live in [`crate::github::models`]; by the time
//! a record becomes an [`ActivityEvent`] or [`RepoSummary`] it is fully
//! typed and validated.
//!
//! ## Terminology
//!
//! | Term | Definition |
//! |------|------------|
//! | **Account** | A user on the code host, identified by login |
//! | **Activity feed** | Chronological list of an account's public actions, newest first |
//! | **Event** | One entry in the activity feed (push, star, issue, ...) |
//! | **Repository size** | The host-reported size integer, used as a contribution-weight proxy |

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================
// Activity Events
// ============================================

/// Kind of activity-feed event.
///
/// The feed carries a small fixed vocabulary of event types; anything we
/// do not recognize maps to [`EventKind::Other`] rather than being dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// Commits pushed to a repository
    Push,
    /// Repository starred (the API calls this a WatchEvent)
    Star,
    /// Issue opened/closed/commented
    Issue,
    /// Pull request opened/closed/merged
    PullRequest,
    /// Repository, branch, or tag created
    Create,
    /// Repository forked
    Fork,
    /// Anything else
    Other,
}

impl EventKind {
    /// Returns the identifier used in serialized output
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Push => "push",
            EventKind::Star => "star",
            EventKind::Issue => "issue",
            EventKind::PullRequest => "pull_request",
            EventKind::Create => "create",
            EventKind::Fork => "fork",
            EventKind::Other => "other",
        }
    }

    /// Map a GitHub API event type string to a kind.
    ///
    /// Unknown strings fall back to [`EventKind::Other`].
    pub fn from_api_type(event_type: &str) -> Self {
        match event_type {
            "PushEvent" => EventKind::Push,
            "WatchEvent" => EventKind::Star,
            "IssuesEvent" => EventKind::Issue,
            "PullRequestEvent" => EventKind::PullRequest,
            "CreateEvent" => EventKind::Create,
            "ForkEvent" => EventKind::Fork,
            _ => EventKind::Other,
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Kind-specific payload fields carried by an event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventPayload {
    /// Push: number of commits in the push
    Push { commit_count: u32 },
    /// Issue / pull request: action verb ("opened", "closed", ...)
    Action { action: String },
    /// Create: what was created ("repository", "branch", "tag")
    Created { ref_type: String },
    /// No recognized payload for this kind
    #[default]
    None,
}

/// One record from an account's public activity feed.
///
/// Immutable once fetched. Feeds are ordered newest-first: index 0 is the
/// most recent event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityEvent {
    /// Kind of activity
    pub kind: EventKind,
    /// Repository the event happened in, as "owner/name"
    pub repo: String,
    /// When the event was recorded (UTC)
    pub created_at: DateTime<Utc>,
    /// Kind-specific fields
    pub payload: EventPayload,
}

impl ActivityEvent {
    /// One-line human description, used by the recent-activity listing.
    pub fn describe(&self) -> String {
        match (&self.kind, &self.payload) {
            (EventKind::Push, EventPayload::Push { commit_count }) => {
                let noun = if *commit_count == 1 { "commit" } else { "commits" };
                format!("pushed {} {} to {}", commit_count, noun, self.repo)
            }
            (EventKind::Push, _) => format!("pushed to {}", self.repo),
            (EventKind::Star, _) => format!("starred {}", self.repo),
            (EventKind::Issue, EventPayload::Action { action }) => {
                format!("{} an issue in {}", action, self.repo)
            }
            (EventKind::Issue, _) => format!("updated an issue in {}", self.repo),
            (EventKind::PullRequest, EventPayload::Action { action }) => {
                format!("{} a pull request in {}", action, self.repo)
            }
            (EventKind::PullRequest, _) => format!("updated a pull request in {}", self.repo),
            (EventKind::Create, EventPayload::Created { ref_type }) => {
                format!("created a {} in {}", ref_type, self.repo)
            }
            (EventKind::Create, _) => format!("created {}", self.repo),
            (EventKind::Fork, _) => format!("forked {}", self.repo),
            (EventKind::Other, _) => format!("activity in {}", self.repo),
        }
    }
}

// ============================================
// Repositories
// ============================================

/// Summary of one repository owned by the account.
///
/// Multiple repositories may share a language; the aggregator sums their
/// sizes per language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoSummary {
    /// Repository name
    pub name: String,
    /// Primary language as reported by the host, if any
    pub language: Option<String>,
    /// Host-reported size (arbitrary unit, a contribution-weight proxy)
    pub size: u64,
}

// ============================================
// Timezone Offset
// ============================================

/// Whole-hour offset from UTC, validated to the real-world range [-12, +14].
///
/// Applied additively to UTC timestamps before hour extraction. Validation
/// happens at construction; the analytics engine trusts the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i8", into = "i8")]
pub struct UtcOffset(i8);

impl UtcOffset {
    /// UTC itself, offset zero.
    pub const UTC: UtcOffset = UtcOffset(0);

    /// Create an offset, rejecting values outside [-12, +14].
    pub fn new(hours: i8) -> crate::error::Result<Self> {
        Self::try_from(hours).map_err(crate::error::Error::Config)
    }

    /// Signed hour count.
    pub fn hours(&self) -> i8 {
        self.0
    }
}

impl Default for UtcOffset {
    fn default() -> Self {
        UtcOffset::UTC
    }
}

impl TryFrom<i8> for UtcOffset {
    type Error = String;

    fn try_from(hours: i8) -> std::result::Result<Self, Self::Error> {
        if (-12..=14).contains(&hours) {
            Ok(UtcOffset(hours))
        } else {
            Err(format!(
                "timezone offset must be between -12 and +14, got {}",
                hours
            ))
        }
    }
}

impl From<UtcOffset> for i8 {
    fn from(offset: UtcOffset) -> i8 {
        offset.0
    }
}

impl std::fmt::Display for UtcOffset {
    /// Display string for rendering: `UTC (GMT/Zulu)` for zero,
    /// `UTC +N` / `UTC -N` otherwise, with a recognized-zone suffix
    /// for +8 (Philippine Time).
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            0 => write!(f, "UTC (GMT/Zulu)"),
            8 => write!(f, "UTC +8 (PHT)"),
            n if n > 0 => write!(f, "UTC +{}", n),
            n => write!(f, "UTC {}", n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(s: &str) -> DateTime<Utc> {
        s.parse().unwrap()
    }

    #[test]
    fn test_event_kind_from_api_type() {
        assert_eq!(EventKind::from_api_type("PushEvent"), EventKind::Push);
        assert_eq!(EventKind::from_api_type("WatchEvent"), EventKind::Star);
        assert_eq!(EventKind::from_api_type("IssuesEvent"), EventKind::Issue);
        assert_eq!(
            EventKind::from_api_type("PullRequestEvent"),
            EventKind::PullRequest
        );
        assert_eq!(EventKind::from_api_type("CreateEvent"), EventKind::Create);
        assert_eq!(EventKind::from_api_type("ForkEvent"), EventKind::Fork);
        assert_eq!(
            EventKind::from_api_type("GollumEvent"),
            EventKind::Other,
            "unrecognized types fall back to Other"
        );
    }

    #[test]
    fn test_event_describe() {
        let event = ActivityEvent {
            kind: EventKind::Push,
            repo: "octo/stats".to_string(),
            created_at: ts("2023-11-25T20:00:00Z"),
            payload: EventPayload::Push { commit_count: 3 },
        };
        assert_eq!(event.describe(), "pushed 3 commits to octo/stats");

        let event = ActivityEvent {
            kind: EventKind::Push,
            repo: "octo/stats".to_string(),
            created_at: ts("2023-11-25T20:00:00Z"),
            payload: EventPayload::Push { commit_count: 1 },
        };
        assert_eq!(event.describe(), "pushed 1 commit to octo/stats");

        let event = ActivityEvent {
            kind: EventKind::PullRequest,
            repo: "octo/stats".to_string(),
            created_at: ts("2023-11-25T20:00:00Z"),
            payload: EventPayload::Action {
                action: "opened".to_string(),
            },
        };
        assert_eq!(event.describe(), "opened a pull request in octo/stats");
    }

    #[test]
    fn test_offset_range() {
        assert!(UtcOffset::new(-12).is_ok());
        assert!(UtcOffset::new(0).is_ok());
        assert!(UtcOffset::new(14).is_ok());
        assert!(UtcOffset::new(-13).is_err());
        assert!(UtcOffset::new(15).is_err());
    }

    #[test]
    fn test_offset_display() {
        assert_eq!(UtcOffset::new(0).unwrap().to_string(), "UTC (GMT/Zulu)");
        assert_eq!(UtcOffset::new(5).unwrap().to_string(), "UTC +5");
        assert_eq!(UtcOffset::new(-7).unwrap().to_string(), "UTC -7");
        assert_eq!(UtcOffset::new(8).unwrap().to_string(), "UTC +8 (PHT)");
        assert_eq!(UtcOffset::new(14).unwrap().to_string(), "UTC +14");
    }
}
