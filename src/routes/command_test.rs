use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::Request;
use serde_json::{Value, json};
use tower::ServiceExt;

use super::*;
use crate::backend::BackendError;
use crate::llm::LlmChat;
use crate::llm::types::LlmError;
use crate::routes::app;
use crate::state::test_helpers::{ScriptedLlm, StubApi, StubTools, reply, state_with, text};

async fn post(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let req = Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let res = app.oneshot(req).await.unwrap();
    let status = res.status();
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

#[test]
fn statuses_per_error() {
    assert_eq!(command_error_to_status(&CommandError::EmptyPrompt), StatusCode::BAD_REQUEST);
    assert_eq!(command_error_to_status(&CommandError::NoTools), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(
        command_error_to_status(&CommandError::Backend(BackendError::Status { status: 500 })),
        StatusCode::BAD_GATEWAY
    );
    assert_eq!(
        command_error_to_status(&CommandError::Llm(LlmError::ApiParse("bad".into()))),
        StatusCode::BAD_GATEWAY
    );
}

#[tokio::test]
async fn without_llm_command_goes_to_backend() {
    let api = StubApi { command_reply: Some("Acknowledged".into()), ..StubApi::default() };
    let (status, json) = post(app(state_with(api, StubTools::default(), None)), "/api/command", json!({ "prompt": "status" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({ "response": "Acknowledged" }));
}

#[tokio::test]
async fn blank_prompt_is_rejected() {
    let (status, json) = post(
        app(state_with(StubApi::default(), StubTools::default(), None)),
        "/api/command",
        json!({ "prompt": "   " }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "E_EMPTY_PROMPT");
}

#[tokio::test]
async fn backend_failure_is_bad_gateway() {
    let (status, json) = post(
        app(state_with(StubApi::default(), StubTools::default(), None)),
        "/api/command",
        json!({ "prompt": "status" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(json["code"], "E_BACKEND_STATUS");
    assert_eq!(json["retryable"], true);
}

#[tokio::test]
async fn llm_path_uses_tools() {
    let llm: Arc<dyn LlmChat> = Arc::new(ScriptedLlm::new(vec![Ok(reply(vec![text("Holding steady.")]))]));
    let tools = StubTools::default().with_tool("get_war_status", Ok("ok"));
    let (status, json) = post(app(state_with(StubApi::default(), tools, Some(llm))), "/api/command", json!({ "prompt": "report" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["response"], "Holding steady.");
}

#[tokio::test]
async fn llm_path_without_tools_is_unavailable() {
    let llm: Arc<dyn LlmChat> = Arc::new(ScriptedLlm::new(vec![]));
    let (status, json) = post(
        app(state_with(StubApi::default(), StubTools::default(), Some(llm))),
        "/api/command",
        json!({ "prompt": "report" }),
    )
    .await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["code"], "E_NO_TOOLS");
}

#[tokio::test]
async fn tools_lists_mcp_tools() {
    let tools = StubTools::default().with_tool("get_planets", Ok("[]"));
    let res = app(state_with(StubApi::default(), tools, None))
        .oneshot(Request::get("/api/tools").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    let json: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json[0]["name"], "get_planets");
    assert_eq!(json[0]["inputSchema"]["type"], "object");
}

#[tokio::test]
async fn render_returns_title_and_html() {
    let (status, json) = post(
        app(state_with(StubApi::default(), StubTools::default(), None)),
        "/api/render",
        json!({ "text": "<i=3>ALERT</i>\nHold <i=1>fast</i>" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["title"], "ALERT");
    assert_eq!(json["body"], "Hold <i=1>fast</i>");
    assert_eq!(
        json["html"],
        "<span style=\"color:#00d9ff\">ALERT</span><br>Hold <span style=\"color:#ffe81f\">fast</span>"
    );
    assert_eq!(json["segments"][0]["color"], "critical");
}

#[tokio::test]
async fn claude_error_message_reaches_the_client() {
    let llm: Arc<dyn LlmChat> = Arc::new(ScriptedLlm::new(vec![Err(LlmError::ApiResponse {
        status: 400,
        message: "Your credit balance is too low".into(),
    })]));
    let tools = StubTools::default().with_tool("get_war_status", Ok("ok"));
    let (status, json) =
        post(app(state_with(StubApi::default(), tools, Some(llm))), "/api/command", json!({ "prompt": "report" })).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(json["code"], "E_API_RESPONSE");
    assert_eq!(
        json["message"],
        "Claude API error: API response error: status 400: Your credit balance is too low"
    );
}
