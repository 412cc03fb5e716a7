use super::*;
use crate::error::ErrorCode;

// =============================================================================
// LlmError::error_code
// =============================================================================

#[test]
fn error_codes_are_distinct_per_variant() {
    let errors = [
        LlmError::ConfigParse("bad".into()),
        LlmError::MissingApiKey { var: "KEY".into() },
        LlmError::ApiRequest("timeout".into()),
        LlmError::ApiResponse { status: 500, body: "oops".into() },
        LlmError::ApiParse("json".into()),
        LlmError::HttpClientBuild("tls".into()),
    ];
    let codes: Vec<&str> = errors.iter().map(ErrorCode::error_code).collect();
    assert_eq!(
        codes,
        ["E_CONFIG_PARSE", "E_MISSING_API_KEY", "E_API_REQUEST", "E_API_RESPONSE", "E_API_PARSE", "E_HTTP_CLIENT_BUILD"]
    );
}

// =============================================================================
// LlmError::retryable
// =============================================================================

#[test]
fn retryable_api_request() {
    let err = LlmError::ApiRequest("conn refused".into());
    assert!(err.retryable());
}

#[test]
fn retryable_api_response_429_and_5xx() {
    for status in [429, 500, 503] {
        let err = LlmError::ApiResponse { status, body: String::new() };
        assert!(err.retryable(), "status {status}");
    }
}

#[test]
fn not_retryable_api_response_4xx() {
    for status in [400, 401, 404] {
        let err = LlmError::ApiResponse { status, body: String::new() };
        assert!(!err.retryable(), "status {status}");
    }
}

#[test]
fn not_retryable_config_errors() {
    assert!(!LlmError::ConfigParse("bad".into()).retryable());
    assert!(!LlmError::MissingApiKey { var: "K".into() }.retryable());
    assert!(!LlmError::ApiParse("json".into()).retryable());
}

#[test]
fn display_missing_api_key_names_var() {
    let err = LlmError::MissingApiKey { var: "OPENROUTER_API_KEY".into() };
    assert!(err.to_string().contains("OPENROUTER_API_KEY"));
}

// =============================================================================
// Message serde
// =============================================================================

#[test]
fn message_user_serializes_lowercase_role() {
    let json = serde_json::to_value(Message::user("plan a trip")).unwrap();
    assert_eq!(json, serde_json::json!({ "role": "user", "content": "plan a trip" }));
}

#[test]
fn chat_response_default_has_no_text() {
    let resp = ChatResponse::default();
    assert!(resp.text.is_none());
    assert_eq!(resp.input_tokens, 0);
}
