//! Common types and data structures

use crate::constants::{FETCH_ERROR_MSG, QUOTE_PLACEHOLDER};
use thiserror::Error;

/// Why a quote request failed. Every variant maps to the same user-facing
/// message; the variant detail is for logging only.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Request never produced a response (DNS, refused connection, etc.).
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    /// Server answered with a non-2xx status.
    #[error("unexpected status: {0}")]
    Status(reqwest::StatusCode),

    /// Body was not JSON or had no `quote` field.
    #[error("invalid response body: {0}")]
    Body(#[source] reqwest::Error),
}

impl FetchError {
    pub fn user_message(&self) -> &'static str {
        FETCH_ERROR_MSG
    }
}

/// Response body of `GET /quote`.
#[derive(serde::Deserialize)]
pub struct QuoteResponse {
    pub quote: String,
}

/// View state shared between the UI thread and the background fetch task.
///
/// `quote` is always non-empty. `error` being non-empty means the most recent
/// request failed; the prior quote is retained but not rendered until the next
/// request clears the error.
pub struct QuoteState {
    pub quote: String,
    pub loading: bool,
    pub error: String,
}

impl Default for QuoteState {
    fn default() -> Self {
        Self {
            quote: QUOTE_PLACEHOLDER.to_string(),
            loading: false,
            error: String::new(),
        }
    }
}

impl QuoteState {
    /// Transition into Loading: clear any previous error, set the flag.
    /// Refused while a request is already in flight; returns whether the
    /// transition happened.
    pub fn begin_request(&mut self) -> bool {
        if self.loading {
            return false;
        }
        self.error.clear();
        self.loading = true;
        true
    }

    /// Transition out of Loading with the request outcome.
    pub fn finish(&mut self, result: Result<String, FetchError>) {
        match result {
            Ok(quote) => self.quote = quote,
            Err(e) => self.error = e.user_message().to_string(),
        }
        self.loading = false;
    }

    pub fn has_error(&self) -> bool {
        !self.error.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_shows_placeholder() {
        let state = QuoteState::default();
        assert_eq!(state.quote, QUOTE_PLACEHOLDER);
        assert!(!state.loading);
        assert!(!state.has_error());
    }

    #[test]
    fn begin_request_clears_error_and_sets_loading() {
        let mut state = QuoteState::default();
        state.error = FETCH_ERROR_MSG.to_string();
        assert!(state.begin_request());
        assert!(state.loading);
        assert!(!state.has_error());
    }

    #[test]
    fn begin_request_refused_while_loading() {
        let mut state = QuoteState::default();
        state.finish(Ok("Be yourself.".to_string()));
        assert!(state.begin_request());

        // A second press while the first request is in flight must not start
        // another transition or touch the record.
        assert!(!state.begin_request());
        assert!(state.loading);
        assert_eq!(state.quote, "Be yourself.");
        assert!(!state.has_error());
    }

    #[test]
    fn success_replaces_quote_and_stops_loading() {
        let mut state = QuoteState::default();
        state.begin_request();
        state.finish(Ok("Be yourself.".to_string()));
        assert_eq!(state.quote, "Be yourself.");
        assert!(!state.loading);
        assert!(!state.has_error());
    }

    #[test]
    fn failure_sets_error_and_keeps_prior_quote() {
        let mut state = QuoteState::default();
        state.begin_request();
        state.finish(Ok("Be yourself.".to_string()));

        state.begin_request();
        state.finish(Err(FetchError::Status(
            reqwest::StatusCode::INTERNAL_SERVER_ERROR,
        )));
        assert_eq!(state.error, FETCH_ERROR_MSG);
        assert_eq!(state.quote, "Be yourself.");
        assert!(!state.loading);
    }

    #[test]
    fn new_request_after_failure_clears_error() {
        let mut state = QuoteState::default();
        state.begin_request();
        state.finish(Err(FetchError::Status(reqwest::StatusCode::BAD_GATEWAY)));
        assert!(state.has_error());

        state.begin_request();
        assert!(!state.has_error());
        assert!(state.loading);
    }
}
