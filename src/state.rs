//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor and
//! handed to the background pollers. Collaborators sit behind trait objects
//! ([`WarApi`], [`ToolServer`], [`LlmChat`]) so tests can swap in stubs.
//! The latest backend data lives in one [`Snapshot`] behind an `RwLock`;
//! pollers replace individual feeds, handlers read them.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use time::OffsetDateTime;
use tokio::sync::RwLock;

use crate::backend::WarApi;
use crate::backend::types::{Assignment, Dispatch, Planet, Statistics, WarStatus};
use crate::llm::LlmChat;
use crate::llm::config::DEFAULT_MAX_TOKENS;
use crate::mcp::ToolServer;

// =============================================================================
// SNAPSHOT
// =============================================================================

/// When each feed last refreshed successfully.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Refreshed {
    #[serde(with = "time::serde::rfc3339::option")]
    pub war: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub stats: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub dispatches: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub orders: Option<OffsetDateTime>,
}

/// Last known value of every polled feed. `None` until the first success.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub war_status: Option<WarStatus>,
    pub campaign: Option<Value>,
    pub planets: Option<Vec<Planet>>,
    pub statistics: Option<Statistics>,
    pub dispatches: Option<Vec<Dispatch>>,
    pub orders: Option<Vec<Assignment>>,
    pub refreshed: Refreshed,
}

// =============================================================================
// APP STATE
// =============================================================================

#[derive(Clone)]
pub struct AppState {
    pub api: Arc<dyn WarApi>,
    pub tools: Arc<dyn ToolServer>,
    /// `None` when no API key is configured; commands go to the backend instead.
    pub llm: Option<Arc<dyn LlmChat>>,
    pub llm_max_tokens: u32,
    pub snapshot: Arc<RwLock<Snapshot>>,
}

impl AppState {
    #[must_use]
    pub fn new(api: Arc<dyn WarApi>, tools: Arc<dyn ToolServer>, llm: Option<Arc<dyn LlmChat>>) -> Self {
        Self { api, tools, llm, llm_max_tokens: DEFAULT_MAX_TOKENS, snapshot: Arc::new(RwLock::new(Snapshot::default())) }
    }

    #[must_use]
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.llm_max_tokens = max_tokens;
        self
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
