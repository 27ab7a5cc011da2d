//! Raw wire models for the GitHub REST API.
//!
//! These mirror the JSON shapes of `GET /users/{login}/events/public` and
//! `GET /users/{login}/repos`. Conversion into the domain types happens
//! immediately after deserialization, so nothing outside this module
//! touches wire shapes.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::types::{ActivityEvent, EventKind, EventPayload, RepoSummary};

/// One record from the public events feed.
#[derive(Debug, Clone, Deserialize)]
pub struct RawEvent {
    /// API event type string, e.g. "PushEvent"
    #[serde(rename = "type")]
    pub event_type: String,
    pub repo: RawEventRepo,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub payload: RawPayload,
}

/// Repository reference inside an event.
#[derive(Debug, Clone, Deserialize)]
pub struct RawEventRepo {
    /// "owner/name"
    pub name: String,
}

/// Kind-specific payload fields.
///
/// Everything is optional because each event type populates a different
/// subset; unrecognized fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPayload {
    /// PushEvent: server-side commit count (may exceed `commits.len()`,
    /// which the API caps at 20)
    pub size: Option<u32>,
    /// PushEvent: commits included in the push
    pub commits: Option<Vec<RawCommit>>,
    /// IssuesEvent / PullRequestEvent: action verb
    pub action: Option<String>,
    /// CreateEvent: what was created ("repository", "branch", "tag")
    pub ref_type: Option<String>,
}

/// One commit inside a push payload.
#[derive(Debug, Clone, Deserialize)]
pub struct RawCommit {
    pub sha: String,
}

impl RawEvent {
    /// Convert into the domain event.
    ///
    /// Unrecognized event types become [`EventKind::Other`] with an empty
    /// payload; the record is never dropped.
    pub fn into_event(self) -> ActivityEvent {
        let kind = EventKind::from_api_type(&self.event_type);
        let payload = match kind {
            EventKind::Push => EventPayload::Push {
                commit_count: self
                    .payload
                    .size
                    .or_else(|| self.payload.commits.as_ref().map(|c| c.len() as u32))
                    .unwrap_or(0),
            },
            EventKind::Issue | EventKind::PullRequest => match self.payload.action {
                Some(action) => EventPayload::Action { action },
                None => EventPayload::None,
            },
            EventKind::Create => match self.payload.ref_type {
                Some(ref_type) => EventPayload::Created { ref_type },
                None => EventPayload::None,
            },
            _ => EventPayload::None,
        };

        ActivityEvent {
            kind,
            repo: self.repo.name,
            created_at: self.created_at,
            payload,
        }
    }
}

/// One record from the repository listing.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRepo {
    pub name: String,
    /// Primary language, absent for empty or non-code repositories
    pub language: Option<String>,
    /// Size in kilobytes
    #[serde(default)]
    pub size: u64,
}

impl RawRepo {
    pub fn into_summary(self) -> RepoSummary {
        RepoSummary {
            name: self.name,
            language: self.language,
            size: self.size,
        }
    }
}
