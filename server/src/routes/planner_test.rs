use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use tower::ServiceExt;

use crate::error::ErrorBody;
use crate::routes;
use crate::state::test_helpers::{self, MockLlm};

fn plan_request(body: &str) -> Request<Body> {
    let mut req = Request::post("/api/plan-trip")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_owned()))
        .unwrap();
    req.extensions_mut()
        .insert(axum::extract::ConnectInfo(SocketAddr::from((Ipv4Addr::LOCALHOST, 40_000))));
    req
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn plan_trip_returns_plain_text_itinerary() {
    let llm = Arc::new(MockLlm::answering("Day 1: Shibuya\nScramble crossing"));
    let app = routes::app(test_helpers::test_app_state_with_llm(llm));

    let response = app
        .oneshot(plan_request(r#"{"destination":"Tokyo","days":2,"theme":"Neon","pace":"fast"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap().to_owned();
    assert!(content_type.starts_with("text/plain"));
    assert_eq!(body_string(response).await, "Day 1: Shibuya\nScramble crossing");
}

#[tokio::test]
async fn plan_trip_rejects_blank_destination_with_json_error() {
    let app = routes::app(test_helpers::test_app_state());

    let response = app.oneshot(plan_request(r#"{"destination":"  ","days":2}"#)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: ErrorBody = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body.error, "E_INVALID_REQUEST");
    assert_eq!(body.message, "Destination is required.");
    assert!(!body.retryable);
}

#[tokio::test]
async fn plan_trip_without_llm_is_unavailable() {
    let app = routes::app(test_helpers::test_app_state());

    let response = app.oneshot(plan_request(r#"{"destination":"Rome"}"#)).await.unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn plan_trip_rejects_malformed_json() {
    let app = routes::app(test_helpers::test_app_state());

    let response = app.oneshot(plan_request("{not json")).await.unwrap();

    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn healthz_is_ok() {
    let app = routes::app(test_helpers::test_app_state());

    let response = app
        .oneshot(Request::get("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
