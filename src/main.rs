mod backend;
mod config;
mod error;
mod llm;
mod mcp;
mod routes;
mod services;
mod state;

use std::process::ExitCode;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::llm::LlmChat;

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            tracing::error!(error = %message, "high command stopped");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), String> {
    let config = config::AppConfig::from_env().map_err(|e| format!("config: {e}"))?;

    let api = backend::HighCommandClient::new(config.api_url.clone()).map_err(|e| format!("backend client: {e}"))?;
    let tools = mcp::McpClient::new(config.mcp_url.clone()).map_err(|e| format!("mcp client: {e}"))?;
    tracing::info!(api = api.base_url(), mcp = tools.url(), "upstream clients configured");

    // Non-fatal: without a key, commands are forwarded to the backend.
    let llm = match llm::LlmClient::from_env() {
        Ok(client) => {
            tracing::info!(model = client.model(), "LLM client initialized");
            Some(client)
        }
        Err(e) => {
            tracing::warn!(error = %e, "LLM client not configured; commands go to the backend");
            None
        }
    };
    let max_tokens = llm.as_ref().map_or(llm::config::DEFAULT_MAX_TOKENS, llm::LlmClient::max_tokens);
    let llm = llm.map(|client| Arc::new(client) as Arc<dyn LlmChat>);

    let state = state::AppState::new(Arc::new(api), Arc::new(tools), llm).with_max_tokens(max_tokens);

    let _pollers = services::poller::spawn_pollers(state.clone(), config.poll);

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port))
        .await
        .map_err(|e| format!("failed to bind port {}: {e}", config.port))?;

    tracing::info!(port = config.port, "high command listening");
    axum::serve(listener, app).await.map_err(|e| format!("server failed: {e}"))
}
