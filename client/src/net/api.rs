//! REST helper for `POST /api/plan-trip`.
//!
//! Client-side (hydrate): real HTTP call via `gloo-net`.
//! Server-side (SSR): stub returning an error since planning is only
//! triggered from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Failures come back as strings for logging; the wizard replaces them with
//! one generic message before anything reaches the user.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use trip::TripRequest;

pub const PLAN_TRIP_ENDPOINT: &str = "/api/plan-trip";

/// Log line for a non-2xx response. Uses the server's JSON `message` when
/// the body carries one.
#[cfg(any(test, feature = "hydrate"))]
fn plan_failed_message(status: u16, body: &str) -> String {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        message: String,
    }
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(err) => format!("plan request failed: {status} ({})", err.message),
        Err(_) => format!("plan request failed: {status}"),
    }
}

/// Submit `request` and return the itinerary text.
///
/// # Errors
///
/// Returns an error string on transport failure, a non-2xx status, or an
/// unreadable body.
pub async fn plan_trip(request: &TripRequest) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(PLAN_TRIP_ENDPOINT)
            .json(request)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let body = resp.text().await.unwrap_or_default();
            return Err(plan_failed_message(resp.status(), &body));
        }
        resp.text().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err("not available on server".to_owned())
    }
}
