//! Range API client error types.

/// Errors from the range API client.
#[derive(Debug, thiserror::Error)]
pub enum RangeApiError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API replied with a non-success status and a body that is not JSON
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// JSON deserialization failed
    #[error("JSON parse error: {message}{suffix}", suffix = body_suffix(.body))]
    Json {
        message: String,
        body: Option<String>,
    },

    /// API answered with an error object
    #[error("upstream error {code}: {message}")]
    Upstream { code: String, message: String },

    /// Feature not configured or not available
    #[error("not configured: {0}")]
    NotConfigured(String),
}

fn body_suffix(body: &Option<String>) -> String {
    body.as_deref()
        .map(|b| format!(" (body: {b})"))
        .unwrap_or_default()
}
