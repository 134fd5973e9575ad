//! Scripted range API for testing without network access.
//!
//! Responses are queued up front and handed out one per call, in order.
//! Every request is recorded so tests can check how many calls were made
//! and which key each one used.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use serde_json::Value;

use super::RangeApi;
use super::error::RangeApiError;
use super::request::RangeQuery;

type Reply = Result<Value, RangeApiError>;

/// Mock range API that replays queued responses.
#[derive(Clone, Default)]
pub struct MockRangeApi {
    replies: Arc<Mutex<VecDeque<Reply>>>,
    requests: Arc<Mutex<Vec<RangeQuery>>>,
}

impl MockRangeApi {
    /// Create a mock with no queued responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a JSON payload as the next response.
    pub fn respond_with(self, payload: Value) -> Self {
        self.push(Ok(payload));
        self
    }

    /// Queue an error as the next response.
    pub fn fail_with(self, error: RangeApiError) -> Self {
        self.push(Err(error));
        self
    }

    fn push(&self, reply: Reply) {
        self.replies
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push_back(reply);
    }

    /// All requests received so far, oldest first.
    pub fn requests(&self) -> Vec<RangeQuery> {
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Number of requests received so far.
    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap_or_else(|e| e.into_inner()).len()
    }
}

impl RangeApi for MockRangeApi {
    async fn fetch(&self, query: &RangeQuery) -> Result<Value, RangeApiError> {
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(query.clone());

        self.replies
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .pop_front()
            .unwrap_or_else(|| {
                Err(RangeApiError::NotConfigured(
                    "no mock response queued".to_string(),
                ))
            })
    }
}
