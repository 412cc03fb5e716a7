//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! planner keeps no per-trip state, so this only carries the LLM handle and
//! the request limiter.

use std::sync::Arc;

use crate::llm::LlmChat;
use crate::rate_limit::RateLimiter;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped or Clone.
#[derive(Clone)]
pub struct AppState {
    /// Optional LLM client. `None` if LLM env vars are not configured.
    pub llm: Option<Arc<dyn LlmChat>>,
    /// In-memory rate limiter for plan requests.
    pub rate_limiter: RateLimiter,
}

impl AppState {
    #[must_use]
    pub fn new(llm: Option<Arc<dyn LlmChat>>, rate_limiter: RateLimiter) -> Self {
        Self { llm, rate_limiter }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use std::sync::Mutex;

    use super::*;
    use crate::llm::types::{ChatResponse, LlmError, Message};
    use crate::rate_limit::RateLimitConfig;

    /// Scripted LLM that records every prompt it receives.
    pub struct MockLlm {
        replies: Mutex<Vec<Result<ChatResponse, LlmError>>>,
        pub seen: Mutex<Vec<SeenRequest>>,
    }

    /// Owned copy of a [`crate::llm::types::ChatRequest`].
    #[derive(Debug, Clone)]
    pub struct SeenRequest {
        pub system: String,
        pub messages: Vec<Message>,
        pub max_tokens: u32,
        pub temperature: f32,
    }

    impl MockLlm {
        pub fn new(replies: Vec<Result<ChatResponse, LlmError>>) -> Self {
            Self { replies: Mutex::new(replies), seen: Mutex::new(Vec::new()) }
        }

        /// Mock that always answers with `text`.
        pub fn answering(text: &str) -> Self {
            Self::new(vec![Ok(text_response(text))])
        }
    }

    #[async_trait::async_trait]
    impl LlmChat for MockLlm {
        async fn chat(&self, request: crate::llm::types::ChatRequest<'_>) -> Result<ChatResponse, LlmError> {
            self.seen.lock().unwrap().push(SeenRequest {
                system: request.system.to_owned(),
                messages: request.messages.to_vec(),
                max_tokens: request.max_tokens,
                temperature: request.temperature,
            });
            let mut replies = self.replies.lock().unwrap();
            if replies.is_empty() { Ok(ChatResponse::default()) } else { replies.remove(0) }
        }
    }

    #[must_use]
    pub fn text_response(text: &str) -> ChatResponse {
        ChatResponse {
            text: Some(text.to_owned()),
            model: "mock".into(),
            stop_reason: "end_turn".into(),
            input_tokens: 10,
            output_tokens: 20,
        }
    }

    /// State with no LLM configured.
    #[must_use]
    pub fn test_app_state() -> AppState {
        AppState::new(None, RateLimiter::with_config(RateLimitConfig::default()))
    }

    /// State backed by the given mock LLM.
    #[must_use]
    pub fn test_app_state_with_llm(llm: Arc<MockLlm>) -> AppState {
        let llm: Arc<dyn LlmChat> = llm;
        AppState::new(Some(llm), RateLimiter::with_config(RateLimitConfig::default()))
    }
}
