//! LLM: Claude client for the command assistant.
//!
//! DESIGN
//! ======
//! `LlmClient` wraps the Anthropic Messages API and implements [`LlmChat`],
//! so the command orchestration can be driven by a mock in tests. Config
//! comes from environment variables; see [`config::LlmConfig::from_env`].

pub mod anthropic;
pub mod config;
pub mod types;

use config::LlmConfig;
pub use types::LlmChat;
use types::{ChatResponse, LlmError, Message, Tool};

// =============================================================================
// CLIENT
// =============================================================================

/// Concrete Claude client, configured by [`LlmClient::from_env`].
pub struct LlmClient {
    inner: anthropic::AnthropicClient,
    model: String,
    max_tokens: u32,
}

impl LlmClient {
    /// # Errors
    ///
    /// Returns an error if the API key is missing or the HTTP client fails.
    pub fn from_env() -> Result<Self, LlmError> {
        Self::from_config(LlmConfig::from_env()?)
    }

    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn from_config(config: LlmConfig) -> Result<Self, LlmError> {
        let inner = anthropic::AnthropicClient::new(config.api_key, &config.base_url, config.timeouts)?;
        Ok(Self { inner, model: config.model, max_tokens: config.max_tokens })
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Configured completion budget per request.
    #[must_use]
    pub fn max_tokens(&self) -> u32 {
        self.max_tokens
    }
}

#[async_trait::async_trait]
impl LlmChat for LlmClient {
    async fn chat(
        &self,
        max_tokens: u32,
        system: &str,
        messages: &[Message],
        tools: Option<&[Tool]>,
    ) -> Result<ChatResponse, LlmError> {
        self.inner
            .chat(&self.model, max_tokens, system, messages, tools)
            .await
    }
}
