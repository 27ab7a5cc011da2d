//! Error types for octoscope-core

use thiserror::Error;

/// Main error type for the octoscope-core library
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP transport error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success response from the GitHub API
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Account does not exist on the remote host
    #[error("account not found: {0}")]
    AccountNotFound(String),

    /// API rate limit exhausted
    #[error("rate limited: {0}")]
    RateLimited(String),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for octoscope-core
pub type Result<T> = std::result::Result<T, Error>;
