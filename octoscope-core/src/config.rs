//! Configuration loading and management
//!
//! Configuration is loaded from `~/.config/octoscope/config.toml`
//!
//! This module follows the XDG Base Directory Specification:
//! - Config: `$XDG_CONFIG_HOME/octoscope/` (~/.config/octoscope/)
//! - State/Logs: `$XDG_STATE_HOME/octoscope/` (~/.local/state/octoscope/)
//!
//! The analytics engine never reads configuration; only the validated
//! timezone offset and the fetched feeds cross its boundary.

use crate::error::{Error, Result};
use crate::types::UtcOffset;
use serde::Deserialize;
use std::path::PathBuf;

/// Returns a best-effort home directory path.
fn home_dir() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Returns XDG_CONFIG_HOME or ~/.config
fn xdg_config_home() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".config"))
}

/// Returns XDG_STATE_HOME or ~/.local/state
fn xdg_state_home() -> PathBuf {
    std::env::var("XDG_STATE_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".local/state"))
}

/// Main configuration struct
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    /// Profile defaults (timezone offset, watchlist)
    #[serde(default)]
    pub profile: ProfileConfig,

    /// GitHub API configuration
    #[serde(default)]
    pub github: GithubConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Profile defaults applied when the CLI is not given overrides
#[derive(Debug, Deserialize, Default)]
pub struct ProfileConfig {
    /// Timezone offset in whole hours, -12 to +14
    #[serde(default)]
    pub timezone_offset: i8,

    /// Accounts to analyze when none are passed on the command line
    #[serde(default)]
    pub watchlist: Vec<String>,
}

impl ProfileConfig {
    /// The validated timezone offset.
    pub fn offset(&self) -> Result<UtcOffset> {
        UtcOffset::new(self.timezone_offset)
            .map_err(|e| Error::Config(format!("profile.timezone_offset: {}", e)))
    }
}

/// GitHub API configuration
#[derive(Debug, Deserialize, Clone)]
pub struct GithubConfig {
    /// Personal access token; unauthenticated requests work but are
    /// rate-limited far more aggressively
    pub token: Option<String>,

    /// API base URL (override for GitHub Enterprise hosts)
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Records per feed request (max 100, default 30)
    #[serde(default = "default_per_page")]
    pub per_page: usize,

    /// HTTP request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Max retry attempts for transient failures
    #[serde(default = "default_max_retries")]
    pub max_retries: usize,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            token: None,
            api_url: default_api_url(),
            per_page: default_per_page(),
            timeout_secs: default_timeout(),
            max_retries: default_max_retries(),
        }
    }
}

impl GithubConfig {
    /// Validate configuration, returning error message if invalid
    pub fn validate(&self) -> Result<()> {
        if self.api_url.is_empty() {
            return Err(Error::Config("github.api_url must not be empty".to_string()));
        }
        if self.per_page == 0 || self.per_page > 100 {
            return Err(Error::Config(
                "github.per_page must be between 1 and 100".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_api_url() -> String {
    "https://api.github.com".to_string()
}

fn default_per_page() -> usize {
    30
}

fn default_timeout() -> u64 {
    30
}

fn default_max_retries() -> usize {
    3
}

/// Logging configuration
#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Maximum number of log files to keep
    #[serde(default = "default_max_log_files")]
    pub max_files: usize,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            max_files: default_max_log_files(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_max_log_files() -> usize {
    5
}

impl Config {
    /// Load configuration from the default path
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            tracing::info!("No config file found at {:?}, using defaults", config_path);
            return Ok(Config::default());
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read config file {:?}: {}", path, e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;

        Ok(config)
    }

    /// Validate every section.
    pub fn validate(&self) -> Result<()> {
        self.profile.offset()?;
        self.github.validate()?;
        Ok(())
    }

    /// Returns the default config file path
    ///
    /// `$XDG_CONFIG_HOME/octoscope/config.toml` (~/.config/octoscope/config.toml)
    pub fn config_path() -> PathBuf {
        xdg_config_home().join("octoscope").join("config.toml")
    }

    /// Returns the state directory path (for logs)
    ///
    /// `$XDG_STATE_HOME/octoscope/` (~/.local/state/octoscope/)
    pub fn state_dir() -> PathBuf {
        xdg_state_home().join("octoscope")
    }

    /// Returns the log file path
    ///
    /// `$XDG_STATE_HOME/octoscope/octoscope.log` (~/.local/state/octoscope/octoscope.log)
    pub fn log_path() -> PathBuf {
        Self::state_dir().join("octoscope.log")
    }
}
