//! HTTP client for the GitHub REST API.
//!
//! Fetches the two raw feeds the analytics engine consumes: the public
//! activity feed and the repository listing. Transient failures (5xx,
//! timeouts) are retried with exponential backoff; unknown accounts and
//! exhausted rate limits surface as distinct error variants so callers
//! can report them precisely.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use serde::de::DeserializeOwned;

use crate::config::GithubConfig;
use crate::error::{Error, Result};
use crate::types::{ActivityEvent, RepoSummary};

use super::models::{RawEvent, RawRepo};

/// HTTP client for a GitHub-compatible API host.
pub struct GithubClient {
    config: GithubConfig,
    http_client: reqwest::Client,
    base_url: String,
}

impl GithubClient {
    /// Create a new client from configuration.
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(config: GithubConfig) -> Result<Self> {
        config.validate()?;

        let base_url = config.api_url.trim_end_matches('/').to_string();

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));
        headers.insert(
            "X-GitHub-Api-Version",
            HeaderValue::from_static("2022-11-28"),
        );
        // GitHub rejects requests without a User-Agent
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("octoscope/", env!("CARGO_PKG_VERSION"))),
        );

        if let Some(token) = &config.token {
            let auth_value = format!("Bearer {}", token);
            headers.insert(
                AUTHORIZATION,
                HeaderValue::from_str(&auth_value)
                    .map_err(|e| Error::Config(format!("invalid github.token: {}", e)))?,
            );
        }

        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(headers)
            .build()
            .map_err(|e| Error::Config(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            config,
            http_client,
            base_url,
        })
    }

    /// Fetch the public activity feed for an account, newest first.
    pub async fn fetch_events(&self, login: &str) -> Result<Vec<ActivityEvent>> {
        let url = format!(
            "{}/users/{}/events/public?per_page={}",
            self.base_url,
            urlencoding::encode(login),
            self.config.per_page
        );

        let raw: Vec<RawEvent> = self.get_json_with_retry(&url, login).await?;
        tracing::debug!(login, events = raw.len(), "Fetched activity feed");
        Ok(raw.into_iter().map(RawEvent::into_event).collect())
    }

    /// Fetch the repository listing for an account, most recently pushed
    /// first.
    pub async fn fetch_repos(&self, login: &str) -> Result<Vec<RepoSummary>> {
        let url = format!(
            "{}/users/{}/repos?per_page={}&sort=pushed",
            self.base_url,
            urlencoding::encode(login),
            self.config.per_page
        );

        let raw: Vec<RawRepo> = self.get_json_with_retry(&url, login).await?;
        tracing::debug!(login, repos = raw.len(), "Fetched repository listing");
        Ok(raw.into_iter().map(RawRepo::into_summary).collect())
    }

    /// Fetch both feeds for an account.
    ///
    /// The two requests are independent and issued concurrently; both
    /// must succeed before a profile can be built.
    pub async fn fetch_account(&self, login: &str) -> Result<(Vec<ActivityEvent>, Vec<RepoSummary>)> {
        tokio::try_join!(self.fetch_events(login), self.fetch_repos(login))
    }

    /// GET a JSON resource, retrying transient failures with exponential
    /// backoff.
    async fn get_json_with_retry<T: DeserializeOwned>(&self, url: &str, login: &str) -> Result<T> {
        let mut last_error = None;
        let mut delay = Duration::from_millis(500);

        for attempt in 0..=self.config.max_retries {
            if attempt > 0 {
                tracing::debug!(
                    "Retrying request (attempt {}/{}), waiting {:?}",
                    attempt + 1,
                    self.config.max_retries + 1,
                    delay
                );
                tokio::time::sleep(delay).await;
                delay = std::cmp::min(delay * 2, Duration::from_secs(30));
            }

            match self.get_json(url, login).await {
                Ok(value) => return Ok(value),
                Err(e) if is_retryable_error(&e) => {
                    tracing::warn!("Transient error from GitHub API: {}", e);
                    last_error = Some(e);
                }
                Err(e) => return Err(e),
            }
        }

        Err(last_error.unwrap_or_else(|| Error::Api {
            status: 0,
            message: "max retries exceeded".to_string(),
        }))
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str, login: &str) -> Result<T> {
        let response = self.http_client.get(url).send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response.json().await?);
        }

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(Error::AccountNotFound(login.to_string()));
        }

        // The primary rate limit answers 403, the secondary one 429; both
        // zero out x-ratelimit-remaining.
        let limit_exhausted = response
            .headers()
            .get("x-ratelimit-remaining")
            .and_then(|value| value.to_str().ok())
            .map(|remaining| remaining == "0")
            .unwrap_or(false);
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS
            || (status == reqwest::StatusCode::FORBIDDEN && limit_exhausted)
        {
            return Err(Error::RateLimited(format!(
                "GitHub API rate limit exhausted (status {})",
                status.as_u16()
            )));
        }

        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "unknown".to_string());
        Err(Error::Api {
            status: status.as_u16(),
            message,
        })
    }
}

/// Check if an error is retryable (transient)
fn is_retryable_error(error: &Error) -> bool {
    match error {
        Error::Api { status, .. } => (500..600).contains(status),
        Error::Http(e) => e.is_timeout() || e.is_connect(),
        _ => false,
    }
}
