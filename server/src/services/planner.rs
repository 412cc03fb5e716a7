//! Planner service: trip request to LLM prompt to itinerary text.
//!
//! DESIGN
//! ======
//! One request, one LLM call. The prompt sentence structure mirrors what the
//! wizard collects; a short system prompt nudges the model to start each day
//! with a `Day N` line so the client can split the text into day headers and
//! activities. There is no retry: any failure surfaces as a [`PlanError`].

use std::fmt::Write;
use std::net::IpAddr;
use std::sync::OnceLock;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::{info, warn};
use trip::{TripRequest, ValidationError};

use crate::error::{ErrorCode, error_response};
use crate::llm::types::{ChatRequest, LlmError, Message};
use crate::rate_limit::RateLimitError;
use crate::state::AppState;

/// Returned verbatim when the model produces no usable text.
pub const NO_ITINERARY: &str = "No itinerary found.";

const DEFAULT_PLANNER_MAX_TOKENS: u32 = 2048;
const DEFAULT_PLANNER_TEMPERATURE: f32 = 0.7;

const SYSTEM_PROMPT: &str = "You are a travel planner. Reply in plain text without markdown. \
Start each day with a line of the form 'Day N: <title>' and list that day's activities \
on the following lines, one per line, each with a short description.";

fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}

fn planner_max_tokens() -> u32 {
    static VALUE: OnceLock<u32> = OnceLock::new();
    *VALUE.get_or_init(|| env_parse("PLANNER_MAX_TOKENS", DEFAULT_PLANNER_MAX_TOKENS))
}

fn planner_temperature() -> f32 {
    static VALUE: OnceLock<f32> = OnceLock::new();
    *VALUE.get_or_init(|| env_parse("PLANNER_TEMPERATURE", DEFAULT_PLANNER_TEMPERATURE))
}

// =============================================================================
// ERRORS
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    #[error("{0}")]
    Invalid(#[from] ValidationError),
    #[error("rate limited: {0}")]
    RateLimited(#[from] RateLimitError),
    #[error("LLM not configured")]
    LlmNotConfigured,
    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),
}

impl ErrorCode for PlanError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Invalid(_) => "E_INVALID_REQUEST",
            Self::RateLimited(_) => "E_RATE_LIMITED",
            Self::LlmNotConfigured => "E_LLM_NOT_CONFIGURED",
            Self::Llm(_) => "E_LLM_ERROR",
        }
    }

    fn retryable(&self) -> bool {
        matches!(self, Self::Llm(e) if e.retryable()) || matches!(self, Self::RateLimited(_))
    }
}

impl PlanError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Invalid(_) => StatusCode::BAD_REQUEST,
            Self::RateLimited(_) => StatusCode::TOO_MANY_REQUESTS,
            Self::LlmNotConfigured => StatusCode::SERVICE_UNAVAILABLE,
            Self::Llm(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for PlanError {
    fn into_response(self) -> Response {
        error_response(self.status(), &self)
    }
}

// =============================================================================
// PROMPT
// =============================================================================

/// User prompt for `request`. Theme is omitted when blank.
#[must_use]
pub fn build_prompt(request: &TripRequest) -> String {
    let mut prompt = format!(
        "Plan a {}-day trip to {} with daily activities and descriptions.",
        request.days,
        request.destination.trim()
    );
    let theme = request.theme.trim();
    if !theme.is_empty() {
        let _ = write!(prompt, " Focus on {theme} experiences.");
    }
    let _ = write!(prompt, " The trip pace should be {}.", request.pace);
    prompt
}

// =============================================================================
// MAIN ENTRY POINT
// =============================================================================

/// Produce itinerary text for `request` on behalf of `client`.
///
/// # Errors
///
/// Validation, rate limiting, missing LLM configuration, or LLM failure.
pub async fn plan_trip(state: &AppState, client: IpAddr, request: &TripRequest) -> Result<String, PlanError> {
    request.validate()?;
    state.rate_limiter.check_and_record(client)?;
    let Some(llm) = &state.llm else {
        return Err(PlanError::LlmNotConfigured);
    };

    info!(
        %client,
        destination = %request.destination.trim(),
        days = request.days,
        pace = %request.pace,
        "planner: request accepted"
    );

    let messages = [Message::user(build_prompt(request))];
    let chat = ChatRequest {
        system: SYSTEM_PROMPT,
        messages: &messages,
        max_tokens: planner_max_tokens(),
        temperature: planner_temperature(),
    };
    let response = llm.chat(chat).await.inspect_err(|e| {
        warn!(%client, error = %e, retryable = e.retryable(), "planner: LLM call failed");
    })?;

    info!(
        %client,
        model = %response.model,
        stop_reason = %response.stop_reason,
        input_tokens = response.input_tokens,
        output_tokens = response.output_tokens,
        "planner: itinerary generated"
    );

    Ok(response.text.unwrap_or_else(|| NO_ITINERARY.to_owned()))
}

#[cfg(test)]
#[path = "planner_test.rs"]
mod tests;
