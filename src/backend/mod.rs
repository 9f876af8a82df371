//! War backend client.
//!
//! DESIGN
//! ======
//! Data reads are null-on-failure: every getter logs a warning and returns
//! `None`, so a failed background refresh leaves the dashboard showing its
//! previous data instead of an error. Command execution is the exception and
//! returns a [`BackendError`], because a failed chat command must be reported
//! to the user.


pub mod types;

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use crate::error::ErrorCode;
use types::{Assignment, CommandRequest, CommandResponse, Dispatch, MajorOrders, Planet, Statistics, WarStatus};

const REQUEST_TIMEOUT_SECS: u64 = 30;
const CONNECT_TIMEOUT_SECS: u64 = 5;

/// Reply used when the backend answers a command without a `response` field.
pub const NO_RESPONSE: &str = "No response received";

// =============================================================================
// ERROR
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("API error: status {status}")]
    Status { status: u16 },

    #[error("response parse failed: {0}")]
    Parse(String),
}

impl ErrorCode for BackendError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Request(_) => "E_BACKEND_REQUEST",
            Self::Status { .. } => "E_BACKEND_STATUS",
            Self::Parse(_) => "E_BACKEND_PARSE",
        }
    }

    fn retryable(&self) -> bool {
        matches!(self, Self::Request(_) | Self::Status { status: 429 | 500..=599 })
    }
}

// =============================================================================
// TRAIT
// =============================================================================

/// Read and command surface of the war backend.
#[async_trait::async_trait]
pub trait WarApi: Send + Sync {
    async fn war_status(&self) -> Option<WarStatus>;
    async fn campaign(&self) -> Option<Value>;
    async fn planets(&self) -> Option<Vec<Planet>>;
    async fn planet(&self, index: u32) -> Option<Planet>;
    async fn factions(&self) -> Option<Value>;
    async fn biomes(&self) -> Option<Value>;
    async fn statistics(&self) -> Option<Statistics>;
    async fn dispatches(&self) -> Option<Vec<Dispatch>>;
    async fn major_orders(&self) -> Option<Vec<Assignment>>;

    /// Forward a free-text prompt to the backend's own command endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError`] on transport, status or parse failure.
    async fn execute_command(&self, prompt: &str) -> Result<String, BackendError>;
}

// =============================================================================
// CLIENT
// =============================================================================

pub struct HighCommandClient {
    http: reqwest::Client,
    base_url: String,
}

impl HighCommandClient {
    /// # Errors
    ///
    /// Returns [`BackendError::Request`] if the HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>) -> Result<Self, BackendError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .map_err(|e| BackendError::Request(e.to_string()))?;
        Ok(Self { http, base_url: base_url.into().trim_end_matches('/').to_owned() })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, BackendError> {
        let response = self
            .http
            .get(self.url(path))
            .send()
            .await
            .map_err(|e| BackendError::Request(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(BackendError::Status { status: status.as_u16() });
        }
        response
            .json::<T>()
            .await
            .map_err(|e| BackendError::Parse(e.to_string()))
    }

    async fn fetch<T: DeserializeOwned>(&self, path: &str) -> Option<T> {
        match self.get_json(path).await {
            Ok(v) => Some(v),
            Err(e) => {
                warn!(%path, error = %e, code = e.error_code(), "backend: fetch failed");
                None
            }
        }
    }
}

#[async_trait::async_trait]
impl WarApi for HighCommandClient {
    async fn war_status(&self) -> Option<WarStatus> {
        self.fetch("/war/status").await
    }

    async fn campaign(&self) -> Option<Value> {
        self.fetch("/campaigns/active").await
    }

    async fn planets(&self) -> Option<Vec<Planet>> {
        self.fetch("/planets").await
    }

    async fn planet(&self, index: u32) -> Option<Planet> {
        self.fetch(&format!("/planets/{index}")).await
    }

    async fn factions(&self) -> Option<Value> {
        self.fetch("/factions").await
    }

    async fn biomes(&self) -> Option<Value> {
        self.fetch("/biomes").await
    }

    async fn statistics(&self) -> Option<Statistics> {
        self.fetch("/statistics").await
    }

    async fn dispatches(&self) -> Option<Vec<Dispatch>> {
        self.fetch("/dispatches").await
    }

    async fn major_orders(&self) -> Option<Vec<Assignment>> {
        self.fetch::<MajorOrders>("/orders")
            .await
            .map(MajorOrders::into_vec)
    }

    async fn execute_command(&self, prompt: &str) -> Result<String, BackendError> {
        let response = self
            .http
            .post(self.url("/command"))
            .json(&CommandRequest { prompt: prompt.to_owned() })
            .send()
            .await
            .map_err(|e| BackendError::Request(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(BackendError::Status { status: status.as_u16() });
        }
        let body = response
            .text()
            .await
            .map_err(|e| BackendError::Request(e.to_string()))?;
        command_reply(&body)
    }
}

/// The `response` field of a command reply, or [`NO_RESPONSE`].
fn command_reply(body: &str) -> Result<String, BackendError> {
    let parsed: CommandResponse = serde_json::from_str(body).map_err(|e| BackendError::Parse(e.to_string()))?;
    Ok(parsed
        .response
        .filter(|r| !r.is_empty())
        .unwrap_or_else(|| NO_RESPONSE.to_owned()))
}
