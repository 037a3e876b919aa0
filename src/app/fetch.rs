//! Quote fetch logic

use super::App;
use crate::types::{FetchError, QuoteResponse};
use eframe::egui;
use tracing::{debug, info, warn};

/// Perform a single `GET {base}/quote` and extract the quote text.
///
/// Any failure mode, from connection refused through a body without a `quote`
/// field, comes back as a `FetchError`.
pub async fn fetch_quote(client: &reqwest::Client, url: &str) -> Result<String, FetchError> {
    let response = client.get(url).send().await.map_err(FetchError::Network)?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status));
    }

    let body: QuoteResponse = response.json().await.map_err(FetchError::Body)?;
    Ok(body.quote)
}

impl App {
    /// Start a quote request in the background. No-op while one is already in
    /// flight; the button is disabled then, this is just the backstop.
    pub fn request_quote(&mut self, ctx: &egui::Context) {
        let url = self.config.quote_url();

        if !self.state.lock().unwrap().begin_request() {
            return;
        }

        debug!(url = %url, "Fetching quote");

        let client = self.client.clone();
        let state = self.state.clone();
        let ctx = ctx.clone();

        self.runtime.spawn(async move {
            let result = fetch_quote(&client, &url).await;

            match &result {
                Ok(quote) => info!(len = quote.len(), "Quote fetched"),
                Err(e) => warn!(error = %e, url = %url, "Quote fetch failed"),
            }

            state.lock().unwrap().finish(result);
            ctx.request_repaint();
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::FETCH_ERROR_MSG;
    use crate::types::QuoteState;
    use httpmock::MockServer;

    #[tokio::test]
    async fn success_returns_quote_text() {
        let server = MockServer::start_async().await;
        let _mock = server
            .mock_async(|when, then| {
                when.method("GET").path("/quote");
                then.status(200)
                    .header("Content-Type", "application/json")
                    .body(r#"{"quote":"Be yourself."}"#);
            })
            .await;

        let client = reqwest::Client::new();
        let quote = fetch_quote(&client, &server.url("/quote")).await.unwrap();
        assert_eq!(quote, "Be yourself.");
    }

    #[tokio::test]
    async fn server_error_is_status_failure() {
        let server = MockServer::start_async().await;
        let _mock = server
            .mock_async(|when, then| {
                when.method("GET").path("/quote");
                then.status(500);
            })
            .await;

        let client = reqwest::Client::new();
        let err = fetch_quote(&client, &server.url("/quote"))
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Status(s) if s.as_u16() == 500));
        assert_eq!(err.user_message(), FETCH_ERROR_MSG);
    }

    #[tokio::test]
    async fn malformed_body_is_body_failure() {
        let server = MockServer::start_async().await;
        let _mock = server
            .mock_async(|when, then| {
                when.method("GET").path("/quote");
                then.status(200)
                    .header("Content-Type", "application/json")
                    .body("not json");
            })
            .await;

        let client = reqwest::Client::new();
        let err = fetch_quote(&client, &server.url("/quote"))
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Body(_)));
    }

    #[tokio::test]
    async fn missing_quote_field_is_body_failure() {
        let server = MockServer::start_async().await;
        let _mock = server
            .mock_async(|when, then| {
                when.method("GET").path("/quote");
                then.status(200)
                    .header("Content-Type", "application/json")
                    .body(r#"{"text":"wrong field"}"#);
            })
            .await;

        let client = reqwest::Client::new();
        let err = fetch_quote(&client, &server.url("/quote"))
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Body(_)));
    }

    #[tokio::test]
    async fn unreachable_server_is_network_failure() {
        // Port 1 is never listening
        let client = reqwest::Client::new();
        let err = fetch_quote(&client, "http://127.0.0.1:1/quote")
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Network(_)));
        assert_eq!(err.user_message(), FETCH_ERROR_MSG);
    }

    #[tokio::test]
    async fn end_to_end_state_transitions_on_failure() {
        let server = MockServer::start_async().await;
        let _mock = server
            .mock_async(|when, then| {
                when.method("GET").path("/quote");
                then.status(500);
            })
            .await;

        let mut state = QuoteState::default();
        state.finish(Ok("earlier quote".to_string()));

        state.begin_request();
        assert!(state.loading);

        let client = reqwest::Client::new();
        let result = fetch_quote(&client, &server.url("/quote")).await;
        state.finish(result);

        assert_eq!(state.error, FETCH_ERROR_MSG);
        assert_eq!(state.quote, "earlier quote");
        assert!(!state.loading);
    }
}
