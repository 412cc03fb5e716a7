//! Trip-planning route.

use std::net::SocketAddr;

use axum::Json;
use axum::extract::{ConnectInfo, State};
use trip::TripRequest;

use crate::services::planner::{self, PlanError};
use crate::state::AppState;

/// `POST /api/plan-trip`: itinerary text for the submitted trip.
///
/// Success is `200 text/plain`; failures are JSON error bodies whose status
/// comes from [`PlanError::status`].
pub async fn plan_trip(
    State(state): State<AppState>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    Json(request): Json<TripRequest>,
) -> Result<String, PlanError> {
    planner::plan_trip(&state, peer.ip(), &request).await
}

#[cfg(test)]
#[path = "planner_test.rs"]
mod tests;
