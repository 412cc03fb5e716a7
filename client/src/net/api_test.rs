use super::*;

#[test]
fn endpoint_is_plan_trip() {
    assert_eq!(PLAN_TRIP_ENDPOINT, "/api/plan-trip");
}

#[test]
fn plan_failed_message_formats_status() {
    assert_eq!(plan_failed_message(502, "<html>"), "plan request failed: 502");
}

#[test]
fn plan_failed_message_includes_server_message() {
    let body = r#"{"error":"E_INVALID_REQUEST","message":"Destination is required.","retryable":false}"#;
    assert_eq!(plan_failed_message(400, body), "plan request failed: 400 (Destination is required.)");
}
