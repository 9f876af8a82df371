//! Command assistant and markup rendering routes.

#[cfg(test)]
#[path = "command_test.rs"]
mod command_test;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use markup::{Segment, parse, split_title, to_html};
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::ApiError;
use crate::backend::types::{CommandRequest, CommandResponse};
use crate::error::ErrorCode;
use crate::mcp::McpTool;
use crate::services::command::{self, CommandError};
use crate::state::AppState;

pub(crate) fn command_error_to_status(err: &CommandError) -> StatusCode {
    match err {
        CommandError::EmptyPrompt => StatusCode::BAD_REQUEST,
        CommandError::NoTools => StatusCode::SERVICE_UNAVAILABLE,
        CommandError::Llm(_) | CommandError::Backend(_) => StatusCode::BAD_GATEWAY,
    }
}

/// `POST /api/command`: answer a natural-language prompt.
pub async fn command(
    State(state): State<AppState>,
    Json(body): Json<CommandRequest>,
) -> Result<Json<CommandResponse>, ApiError> {
    match command::answer(&state, &body.prompt).await {
        Ok(text) => Ok(Json(CommandResponse { response: Some(text) })),
        Err(e) => {
            warn!(error = %e, code = e.error_code(), "command failed");
            Err(ApiError::new(command_error_to_status(&e), &e))
        }
    }
}

/// `GET /api/tools`: tools the MCP server currently offers.
pub async fn tools(State(state): State<AppState>) -> Json<Vec<McpTool>> {
    Json(state.tools.list_tools().await)
}

#[derive(Debug, Deserialize)]
pub struct RenderRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct RenderResponse {
    pub title: String,
    pub body: String,
    pub html: String,
    pub segments: Vec<Segment>,
}

/// `POST /api/render`: render one markup string as the feed would.
pub async fn render(Json(body): Json<RenderRequest>) -> Json<RenderResponse> {
    let titled = split_title(&body.text);
    let segments = parse(&body.text);
    Json(RenderResponse { title: titled.title, body: titled.body, html: to_html(&segments), segments })
}
