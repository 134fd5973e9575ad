//! Ekispert range search HTTP client.
//!
//! Issues one GET per call and hands back the decoded JSON body. Retrying
//! with another key is the caller's decision; this client never retries.

use serde_json::Value;
use tracing::debug;

use super::RangeApi;
use super::error::RangeApiError;
use super::request::RangeQuery;

/// Default endpoint for the multiple-range search.
const DEFAULT_BASE_URL: &str = "http://api.ekispert.jp/v1/json/search/multipleRange";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Longest body excerpt kept in an error.
const BODY_EXCERPT_CHARS: usize = 500;

/// Configuration for the Ekispert client.
#[derive(Debug, Clone)]
pub struct EkispertConfig {
    /// Endpoint URL (defaults to production Ekispert)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl EkispertConfig {
    /// Create a config pointing at the production endpoint.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for EkispertConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Ekispert range search client.
#[derive(Debug, Clone)]
pub struct EkispertClient {
    http: reqwest::Client,
    base_url: String,
}

impl EkispertClient {
    /// Create a new client with the given configuration.
    pub fn new(config: EkispertConfig) -> Result<Self, RangeApiError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// The endpoint this client calls.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl RangeApi for EkispertClient {
    async fn fetch(&self, query: &RangeQuery) -> Result<Value, RangeApiError> {
        debug!(?query, "requesting range search");

        // The URL carries the key, so it is stripped from transport errors.
        let url = query.to_url(&self.base_url);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| RangeApiError::Http(e.without_url()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| RangeApiError::Http(e.without_url()))?;

        // Error payloads (including key exhaustion) come with a non-2xx
        // status, so the body is decoded before the status is looked at.
        match serde_json::from_str(&body) {
            Ok(value) => Ok(value),
            Err(_) if !status.is_success() => Err(RangeApiError::Api {
                status: status.as_u16(),
                message: excerpt(&body),
            }),
            Err(e) => Err(RangeApiError::Json {
                message: e.to_string(),
                body: Some(excerpt(&body)),
            }),
        }
    }
}

fn excerpt(body: &str) -> String {
    body.chars().take(BODY_EXCERPT_CHARS).collect()
}
