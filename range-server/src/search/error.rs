//! Errors that end a range search with a system error.
//!
//! User input problems are not errors at this level; they are reported
//! through [`HandlerOutcome::Rejected`](super::HandlerOutcome::Rejected).

use crate::directory::DirectoryError;
use crate::ekispert::RangeApiError;

/// A requested API key index is not configured.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("API key #{index} requested but only {available} configured")]
pub struct MissingApiKey {
    pub index: usize,
    pub available: usize,
}

/// Upstream payload did not have the expected shape.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NormalizeError {
    /// Payload has no `ResultSet` object
    #[error("payload has no ResultSet")]
    MissingResultSet,

    /// A point entry is not a JSON object
    #[error("point #{index} is not an object")]
    PointNotObject { index: usize },

    /// A point entry has no `Cost` field
    #[error("point #{index} has no Cost")]
    MissingCost { index: usize },
}

/// Failures anywhere in the search pipeline.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// Request body could not be parsed
    #[error("invalid request body: {0}")]
    InvalidBody(#[from] serde_json::Error),

    /// Station directory lookup failed
    #[error("station directory: {0}")]
    Directory(#[from] DirectoryError),

    /// Key configuration does not cover the requested index
    #[error("configuration: {0}")]
    Config(#[from] MissingApiKey),

    /// External API call failed
    #[error("range API: {0}")]
    RangeApi(#[from] RangeApiError),

    /// External API payload was malformed
    #[error("malformed range API payload: {0}")]
    Normalize(#[from] NormalizeError),
}
