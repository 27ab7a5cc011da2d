//! # octoscope-core
//!
//! Core library for octoscope - a GitHub activity profile analyzer.
//!
//! This library provides:
//! - Domain types for activity events and repositories
//! - The pure analytics engine (synopsis, language breakdown, daily volume)
//! - A GitHub REST API client
//! - Configuration management
//! - Logging infrastructure
//!
//! ## Architecture
//!
//! Data flows one way: the [`github`] client fetches the raw activity
//! feed and repository listing, the [`analytics`] engine derives value
//! objects from them, and callers render the result. Nothing flows back
//! into the engine, and the engine performs no I/O — it is a pure
//! function of the two feeds and a timezone offset.
//!
//! ## Example
//!
//! ```rust,no_run
//! use octoscope_core::{build_profile, Config, GithubClient, UtcOffset};
//!
//! # async fn run() -> octoscope_core::Result<()> {
//! let config = Config::load()?;
//! let client = GithubClient::new(config.github.clone())?;
//!
//! let (events, repos) = client.fetch_account("octocat").await?;
//! let profile = build_profile(&events, &repos, UtcOffset::new(8)?);
//!
//! println!("primary language: {:?}", profile.languages.primary());
//! # Ok(())
//! # }
//! ```

// Re-export commonly used items at the crate root
pub use analytics::{build_profile, ActivityProfile};
pub use config::Config;
pub use error::{Error, Result};
pub use github::GithubClient;
pub use types::*;

// Public modules
pub mod analytics;
pub mod config;
pub mod error;
pub mod format;
pub mod github;
pub mod logging;
pub mod types;
