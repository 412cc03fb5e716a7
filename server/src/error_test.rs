use super::*;

#[derive(Debug, thiserror::Error)]
#[error("upstream hiccup")]
struct Flaky;

impl ErrorCode for Flaky {
    fn error_code(&self) -> &'static str {
        "E_FLAKY"
    }

    fn retryable(&self) -> bool {
        true
    }
}

#[derive(Debug, thiserror::Error)]
#[error("plain")]
struct Plain;

impl ErrorCode for Plain {
    fn error_code(&self) -> &'static str {
        "E_PLAIN"
    }
}

#[test]
fn error_body_copies_code_message_and_retry_hint() {
    let body = ErrorBody::from_error(&Flaky);
    assert_eq!(body.error, "E_FLAKY");
    assert_eq!(body.message, "upstream hiccup");
    assert!(body.retryable);
}

#[test]
fn retryable_defaults_to_false() {
    assert!(!ErrorBody::from_error(&Plain).retryable);
}

#[test]
fn error_response_uses_given_status() {
    let response = error_response(StatusCode::BAD_GATEWAY, &Flaky);
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}
