//! MCP tool server client.
//!
//! DESIGN
//! ======
//! The tool server speaks JSON-RPC 2.0 over plain HTTP POST. Two methods are
//! used: `tools/list` (cached after the first non-empty answer) and
//! `tools/call`. [`ToolServer`] is the seam the command orchestration and the
//! routes depend on; [`McpClient`] is the HTTP implementation.
//!
//! ERROR HANDLING
//! ==============
//! Listing degrades to an empty list with a warning. Calling surfaces every
//! failure as [`McpError`] so the caller can report it back to the model as a
//! failed tool result.


use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::error::ErrorCode;
use crate::llm::types::Tool;

const REQUEST_TIMEOUT_SECS: u64 = 30;

// =============================================================================
// ERROR
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum McpError {
    #[error("tool server request failed: {0}")]
    Request(String),

    #[error("tool server returned status {0}")]
    Status(u16),

    #[error("tool server response parse failed: {0}")]
    Parse(String),

    /// The server answered with a JSON-RPC `error` object.
    #[error("MCP Error: {0}")]
    Rpc(String),
}

impl ErrorCode for McpError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Request(_) => "E_MCP_REQUEST",
            Self::Status(_) => "E_MCP_STATUS",
            Self::Parse(_) => "E_MCP_PARSE",
            Self::Rpc(_) => "E_MCP_RPC",
        }
    }

    fn retryable(&self) -> bool {
        matches!(self, Self::Request(_) | Self::Status(429 | 500..=599))
    }
}

// =============================================================================
// TYPES
// =============================================================================

/// A tool as advertised by `tools/list`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct McpTool {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "inputSchema", default = "empty_schema")]
    pub input_schema: Value,
}

fn empty_schema() -> Value {
    serde_json::json!({ "type": "object", "properties": {} })
}

impl From<McpTool> for Tool {
    fn from(tool: McpTool) -> Self {
        Self { name: tool.name, description: tool.description, input_schema: tool.input_schema }
    }
}

#[derive(Deserialize)]
struct RpcResponse {
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    error: Option<RpcErrorBody>,
}

#[derive(Deserialize)]
struct RpcErrorBody {
    #[serde(default)]
    message: String,
}

// =============================================================================
// TRAIT
// =============================================================================

/// Callable named operations exposed by the tool server.
#[async_trait::async_trait]
pub trait ToolServer: Send + Sync {
    /// Advertised tools. Empty when the server is unreachable.
    async fn list_tools(&self) -> Vec<McpTool>;

    /// Invoke `name` and return its text output.
    ///
    /// # Errors
    ///
    /// Returns [`McpError`] on transport, status, parse or JSON-RPC failure.
    async fn call_tool(&self, name: &str, arguments: Value) -> Result<String, McpError>;
}

// =============================================================================
// CLIENT
// =============================================================================

pub struct McpClient {
    http: reqwest::Client,
    url: String,
    tools: RwLock<Vec<McpTool>>,
}

impl McpClient {
    /// # Errors
    ///
    /// Returns [`McpError::Request`] if the HTTP client cannot be built.
    pub fn new(url: impl Into<String>) -> Result<Self, McpError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| McpError::Request(e.to_string()))?;
        Ok(Self { http, url: url.into(), tools: RwLock::new(Vec::new()) })
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    async fn rpc(&self, method: &str, params: Option<Value>) -> Result<Value, McpError> {
        let body = envelope(method, params);
        let response = self
            .http
            .post(&self.url)
            .json(&body)
            .send()
            .await
            .map_err(|e| McpError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(McpError::Status(status.as_u16()));
        }
        let text = response
            .text()
            .await
            .map_err(|e| McpError::Request(e.to_string()))?;
        parse_rpc_body(&text)
    }

    async fn fetch_tools(&self) -> Result<Vec<McpTool>, McpError> {
        let result = self.rpc("tools/list", None).await?;
        Ok(parse_tools(&result))
    }
}

#[async_trait::async_trait]
impl ToolServer for McpClient {
    async fn list_tools(&self) -> Vec<McpTool> {
        {
            let cached = self.tools.read().await;
            if !cached.is_empty() {
                return cached.clone();
            }
        }
        match self.fetch_tools().await {
            Ok(tools) => {
                debug!(count = tools.len(), "mcp: tools listed");
                if !tools.is_empty() {
                    *self.tools.write().await = tools.clone();
                }
                tools
            }
            Err(e) => {
                warn!(error = %e, code = e.error_code(), "mcp: tools/list failed");
                Vec::new()
            }
        }
    }

    async fn call_tool(&self, name: &str, arguments: Value) -> Result<String, McpError> {
        let params = serde_json::json!({ "name": name, "arguments": arguments });
        let result = self.rpc("tools/call", Some(params)).await?;
        Ok(extract_text(&result))
    }
}

// =============================================================================
// WIRE HELPERS
// =============================================================================

fn envelope(method: &str, params: Option<Value>) -> Value {
    let mut body = serde_json::json!({
        "jsonrpc": "2.0",
        "id": Uuid::new_v4().to_string(),
        "method": method,
    });
    if let (Some(params), Some(obj)) = (params, body.as_object_mut()) {
        obj.insert("params".into(), params);
    }
    body
}

/// Unwrap a JSON-RPC response body into its `result` (`null` when absent).
fn parse_rpc_body(text: &str) -> Result<Value, McpError> {
    let parsed: RpcResponse = serde_json::from_str(text).map_err(|e| McpError::Parse(e.to_string()))?;
    if let Some(err) = parsed.error {
        return Err(McpError::Rpc(err.message));
    }
    Ok(parsed.result.unwrap_or(Value::Null))
}

/// `result.tools`, skipping entries that do not deserialize.
fn parse_tools(result: &Value) -> Vec<McpTool> {
    let Some(list) = result.get("tools").and_then(Value::as_array) else {
        return Vec::new();
    };
    list.iter()
        .filter_map(|raw| match serde_json::from_value::<McpTool>(raw.clone()) {
            Ok(tool) => Some(tool),
            Err(e) => {
                warn!(error = %e, "mcp: skipping malformed tool");
                None
            }
        })
        .collect()
}

/// First text content item, else the whole result as JSON.
fn extract_text(result: &Value) -> String {
    result
        .get("content")
        .and_then(|c| c.get(0))
        .and_then(|item| item.get("text"))
        .and_then(Value::as_str)
        .filter(|t| !t.is_empty())
        .map_or_else(|| result.to_string(), str::to_owned)
}
