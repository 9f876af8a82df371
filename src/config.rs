//! Application configuration parsed from environment variables.
//!
//! `.env` is loaded by `main` via `dotenvy` before this runs. LLM settings
//! live separately in [`crate::llm::config`] because a missing API key only
//! disables the command assistant, it does not stop the server.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use crate::error::ErrorCode;

pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";
pub const DEFAULT_MCP_URL: &str = "http://localhost:8000/messages";
pub const DEFAULT_STATS_POLL_SECS: u64 = 60;
pub const DEFAULT_WAR_POLL_SECS: u64 = 30;
pub const DEFAULT_DISPATCH_POLL_SECS: u64 = 120;
pub const DEFAULT_ORDERS_POLL_SECS: u64 = 300;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

impl ErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Invalid { .. } => "E_CONFIG_INVALID",
        }
    }
}

/// Refresh cadence for each background poller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollIntervals {
    pub stats: Duration,
    pub war: Duration,
    pub dispatches: Duration,
    pub orders: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub port: u16,
    /// Base URL of the war backend, without a trailing slash.
    pub api_url: String,
    /// JSON-RPC endpoint of the MCP tool server.
    pub mcp_url: String,
    pub poll: PollIntervals,
}

impl AppConfig {
    /// Read configuration from the process environment.
    ///
    /// - `PORT` (default 3001)
    /// - `HIGH_COMMAND_API_URL` (default `http://localhost:5000/api`)
    /// - `MCP_URL` (default `http://localhost:8000/messages`)
    /// - `STATS_POLL_SECS`, `WAR_POLL_SECS`, `DISPATCH_POLL_SECS`, `ORDERS_POLL_SECS`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for an unparsable port or a poll
    /// interval that is not a positive number of seconds.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] with an injectable variable lookup.
    ///
    /// # Errors
    ///
    /// See [`AppConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = parse_or(&lookup, "PORT", DEFAULT_PORT)?;
        let api_url = url_or(&lookup, "HIGH_COMMAND_API_URL", DEFAULT_API_URL);
        let mcp_url = url_or(&lookup, "MCP_URL", DEFAULT_MCP_URL);
        let poll = PollIntervals {
            stats: poll_secs(&lookup, "STATS_POLL_SECS", DEFAULT_STATS_POLL_SECS)?,
            war: poll_secs(&lookup, "WAR_POLL_SECS", DEFAULT_WAR_POLL_SECS)?,
            dispatches: poll_secs(&lookup, "DISPATCH_POLL_SECS", DEFAULT_DISPATCH_POLL_SECS)?,
            orders: poll_secs(&lookup, "ORDERS_POLL_SECS", DEFAULT_ORDERS_POLL_SECS)?,
        };
        Ok(Self { port, api_url, mcp_url, poll })
    }
}

fn parse_or<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw.trim().parse::<T>().map_err(|_| ConfigError::Invalid { key, value: raw }),
    }
}

fn poll_secs(lookup: &impl Fn(&str) -> Option<String>, key: &'static str, default: u64) -> Result<Duration, ConfigError> {
    let secs = parse_or(lookup, key, default)?;
    if secs == 0 {
        return Err(ConfigError::Invalid { key, value: "0".into() });
    }
    Ok(Duration::from_secs(secs))
}

fn url_or(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: &str) -> String {
    lookup(key)
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_owned())
        .trim_end_matches('/')
        .to_owned()
}
