//! Command assistant: free-text prompts answered with live war data.
//!
//! DESIGN
//! ======
//! With an LLM configured, a prompt runs the two-round tool loop in
//! [`execute_command`]: Claude sees the MCP tool schema, may call tools, and
//! gets exactly one follow-up turn to turn the tool output into an answer.
//! Without an LLM the prompt is forwarded to the backend's `/command`.
//!
//! ERROR HANDLING
//! ==============
//! Tool failures are reported back to the model as `Error: …` tool results
//! rather than aborting. LLM and backend failures propagate as
//! [`CommandError`] so the caller can show them to the user.

#[cfg(test)]
#[path = "command_test.rs"]
mod command_test;

use tracing::{info, warn};

use crate::backend::BackendError;
use crate::error::ErrorCode;
use crate::llm::types::{ContentBlock, LlmChat, LlmError, Message, Tool};
use crate::mcp::ToolServer;
use crate::state::AppState;

/// Answer used when Claude produced no text at all.
pub const NO_RESPONSE: &str = "No response from Claude";

const SYSTEM_PROMPT: &str = "You are the tactical officer of Super Earth High Command. \
Answer questions about the Galactic War using the tools provided for live data. \
Be brief and precise, and report numbers as the tools give them.";

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("prompt is empty")]
    EmptyPrompt,

    #[error("No tools available from MCP server")]
    NoTools,

    #[error("Claude API error: {0}")]
    Llm(#[from] LlmError),

    #[error("Failed to execute command: {0}")]
    Backend(#[from] BackendError),
}

impl ErrorCode for CommandError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyPrompt => "E_EMPTY_PROMPT",
            Self::NoTools => "E_NO_TOOLS",
            Self::Llm(e) => e.error_code(),
            Self::Backend(e) => e.error_code(),
        }
    }

    fn retryable(&self) -> bool {
        match self {
            Self::EmptyPrompt => false,
            Self::NoTools => true,
            Self::Llm(e) => e.retryable(),
            Self::Backend(e) => e.retryable(),
        }
    }
}

/// Route a prompt to Claude when configured, else to the backend.
///
/// # Errors
///
/// Returns [`CommandError::EmptyPrompt`] for a blank prompt, otherwise
/// whatever the chosen path fails with.
pub async fn answer(state: &AppState, prompt: &str) -> Result<String, CommandError> {
    let prompt = prompt.trim();
    if prompt.is_empty() {
        return Err(CommandError::EmptyPrompt);
    }
    match &state.llm {
        Some(llm) => execute_command(llm.as_ref(), state.tools.as_ref(), prompt, state.llm_max_tokens).await,
        None => Ok(state.api.execute_command(prompt).await?),
    }
}

/// Two-round tool loop against Claude and the MCP tool server.
///
/// # Errors
///
/// Returns [`CommandError::NoTools`] when the tool server advertises nothing
/// and [`CommandError::Llm`] when either Claude round fails.
pub async fn execute_command(
    llm: &dyn LlmChat,
    tools: &dyn ToolServer,
    prompt: &str,
    max_tokens: u32,
) -> Result<String, CommandError> {
    let listed = tools.list_tools().await;
    if listed.is_empty() {
        return Err(CommandError::NoTools);
    }
    let schema: Vec<Tool> = listed.into_iter().map(Tool::from).collect();

    let mut messages = vec![Message::user(prompt)];
    let first = llm
        .chat(max_tokens, SYSTEM_PROMPT, &messages, Some(&schema))
        .await?;
    let remembered = first.texts().last().map(str::to_owned);

    let calls: Vec<(String, String, serde_json::Value)> = first
        .tool_calls()
        .map(|(id, name, input)| (id.to_owned(), name.to_owned(), input.clone()))
        .collect();

    if !calls.is_empty() {
        let mut results = Vec::with_capacity(calls.len());
        for (id, name, input) in calls {
            info!(tool = %name, "command: calling tool");
            let block = match tools.call_tool(&name, input).await {
                Ok(content) => ContentBlock::ToolResult { tool_use_id: id, content, is_error: None },
                Err(e) => {
                    warn!(tool = %name, error = %e, code = e.error_code(), "command: tool call failed");
                    ContentBlock::ToolResult { tool_use_id: id, content: format!("Error: {e}"), is_error: Some(true) }
                }
            };
            results.push(block);
        }

        messages.push(Message::assistant_blocks(first.content));
        messages.push(Message::user_blocks(results));

        let second = llm
            .chat(max_tokens, SYSTEM_PROMPT, &messages, Some(&schema))
            .await?;
        if let Some(text) = second.texts().next() {
            return Ok(text.to_owned());
        }
    }

    Ok(remembered
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| NO_RESPONSE.to_owned()))
}
