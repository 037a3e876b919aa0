//! Application constants and configuration defaults

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_APP_TITLE: &str = "Random Quote Generator";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Shown in the quote block before the first fetch.
pub const QUOTE_PLACEHOLDER: &str = r#"Click "Get Quote" to fetch a random quote!"#;

/// The one user-visible failure message. Network errors, bad statuses, and
/// malformed bodies all collapse to this; the real cause only goes to the log.
pub const FETCH_ERROR_MSG: &str = "Failed to fetch quote.";
