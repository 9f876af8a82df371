use super::*;

fn make_response(content: serde_json::Value) -> String {
    serde_json::json!({
        "id": "msg_123",
        "type": "message",
        "role": "assistant",
        "content": content,
        "model": "claude-haiku-4-5",
        "stop_reason": "end_turn",
        "usage": { "input_tokens": 100, "output_tokens": 50 }
    })
    .to_string()
}

#[test]
fn parse_text_response() {
    let json = make_response(serde_json::json!([{ "type": "text", "text": "Democracy prevails" }]));
    let resp = parse_response(&json).unwrap();
    assert_eq!(resp.content, vec![ContentBlock::Text { text: "Democracy prevails".into() }]);
    assert_eq!(resp.model, "claude-haiku-4-5");
    assert_eq!(resp.stop_reason, "end_turn");
    assert_eq!(resp.input_tokens, 100);
    assert_eq!(resp.output_tokens, 50);
}

#[test]
fn parse_text_and_tool_use() {
    let json = make_response(serde_json::json!([
        { "type": "text", "text": "Checking the front." },
        { "type": "tool_use", "id": "tu_1", "name": "get_planet_status", "input": { "planet_index": 64 } }
    ]));
    let resp = parse_response(&json).unwrap();
    assert_eq!(resp.content.len(), 2);
    assert!(matches!(
        &resp.content[1],
        ContentBlock::ToolUse { id, name, input } if id == "tu_1" && name == "get_planet_status" && input["planet_index"] == 64
    ));
}

#[test]
fn parse_drops_thinking_and_unknown_blocks() {
    let json = make_response(serde_json::json!([
        { "type": "thinking", "thinking": "hmm" },
        { "type": "some_future_type", "data": {} },
        { "type": "text", "text": "answer" }
    ]));
    let resp = parse_response(&json).unwrap();
    assert_eq!(resp.content, vec![ContentBlock::Text { text: "answer".into() }]);
}

#[test]
fn parse_tolerates_null_stop_reason() {
    let json = serde_json::json!({
        "content": [],
        "model": "m",
        "stop_reason": null,
        "usage": { "input_tokens": 1, "output_tokens": 2 }
    })
    .to_string();
    assert_eq!(parse_response(&json).unwrap().stop_reason, "");
}

#[test]
fn parse_invalid_json() {
    assert!(matches!(parse_response("not json"), Err(LlmError::ApiParse(_))));
}

#[test]
fn request_omits_empty_system_and_tools() {
    let messages = vec![Message::user("hi")];
    let body = serde_json::to_value(build_request("m", 1024, "", &messages, Some(&[]))).unwrap();
    assert!(body.get("system").is_none());
    assert!(body.get("tools").is_none());
    assert_eq!(body["max_tokens"], 1024);
    assert_eq!(body["messages"][0]["content"], "hi");
}

#[test]
fn request_carries_tool_schema() {
    let messages = vec![Message::user("hi")];
    let tools = vec![Tool {
        name: "get_war_status".into(),
        description: "Current war status".into(),
        input_schema: serde_json::json!({ "type": "object", "properties": {} }),
    }];
    let body = serde_json::to_value(build_request("m", 10, "sys", &messages, Some(&tools))).unwrap();
    assert_eq!(body["system"], "sys");
    assert_eq!(body["tools"][0]["name"], "get_war_status");
    assert_eq!(body["tools"][0]["input_schema"]["type"], "object");
}

#[test]
fn client_targets_messages_endpoint() {
    let client =
        AnthropicClient::new("k".into(), "https://proxy.test", LlmTimeouts { request_secs: 1, connect_secs: 1 }).unwrap();
    assert_eq!(client.url, "https://proxy.test/v1/messages");
}

#[test]
fn error_message_prefers_api_error_object() {
    let body = r#"{"type":"error","error":{"type":"invalid_request_error","message":"Your credit balance is too low"}}"#;
    assert_eq!(error_message(body), "Your credit balance is too low");
}

#[test]
fn error_message_falls_back_to_raw_body() {
    assert_eq!(error_message("  upstream connect error\n"), "upstream connect error");
    assert_eq!(error_message(r#"{"error":{}}"#), r#"{"error":{}}"#);
    assert_eq!(error_message(""), "empty response body");
}
