use super::*;

fn make_response(content: serde_json::Value) -> String {
    serde_json::json!({
        "id": "msg_123",
        "type": "message",
        "role": "assistant",
        "content": content,
        "model": "claude-sonnet-4-5-20250929",
        "stop_reason": "end_turn",
        "usage": { "input_tokens": 100, "output_tokens": 50 }
    })
    .to_string()
}

#[test]
fn parse_text_response() {
    let json = make_response(serde_json::json!([
        { "type": "text", "text": "Day 1: Shibuya" }
    ]));
    let resp = parse_response(&json).unwrap();
    assert_eq!(resp.text.as_deref(), Some("Day 1: Shibuya"));
    assert_eq!(resp.model, "claude-sonnet-4-5-20250929");
    assert_eq!(resp.stop_reason, "end_turn");
    assert_eq!(resp.input_tokens, 100);
    assert_eq!(resp.output_tokens, 50);
}

#[test]
fn parse_concatenates_text_blocks_and_skips_others() {
    let json = make_response(serde_json::json!([
        { "type": "thinking", "thinking": "hmm" },
        { "type": "text", "text": "Day 1\n" },
        { "type": "text", "text": "Ramen crawl" }
    ]));
    let resp = parse_response(&json).unwrap();
    assert_eq!(resp.text.as_deref(), Some("Day 1\nRamen crawl"));
}

#[test]
fn parse_empty_content_yields_no_text() {
    let json = make_response(serde_json::json!([]));
    assert!(parse_response(&json).unwrap().text.is_none());
}

#[test]
fn parse_invalid_json_errors() {
    assert!(matches!(parse_response("not json"), Err(LlmError::ApiParse(_))));
}

#[test]
fn request_omits_blank_system() {
    let messages = [Message::user("hi")];
    let body = ApiRequest { model: "m", max_tokens: 10, temperature: 0.5, system: None, messages: &messages };
    let json = serde_json::to_value(&body).unwrap();
    assert!(json.get("system").is_none());
    assert_eq!(json["messages"][0]["role"], "user");
}
