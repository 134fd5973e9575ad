//! End-to-end range search: request body in, handler outcome out.

use std::sync::Arc;

use serde::Deserialize;
use tracing::warn;

use crate::directory::StationDirectory;
use crate::domain::{SearchCondition, ValidationError};
use crate::ekispert::RangeApi;

use super::error::SearchError;
use super::execute::fetch_with_rotation;
use super::normalize::{RangeSearchResult, normalize};
use super::query::{ApiKeys, QueryBuilder};
use super::validate::{ConditionValidator, ValidateError};

/// Body of a range search request.
#[derive(Debug, Deserialize)]
pub struct RangeSearchRequest {
    #[serde(rename = "SearchConditions")]
    pub search_conditions: Vec<SearchCondition>,
}

/// What the handler should answer.
#[derive(Debug, Clone, PartialEq)]
pub enum HandlerOutcome {
    /// Search ran; stations are in API order
    Found(RangeSearchResult),

    /// Condition number `position` (1-based) was rejected
    Rejected {
        position: usize,
        error: ValidationError,
    },

    /// Something outside the user's control failed; details were logged
    Failed,
}

impl HandlerOutcome {
    /// The user-facing message for a rejected condition.
    pub fn rejection_message(&self) -> Option<String> {
        match self {
            HandlerOutcome::Rejected { position, error } => {
                Some(format!("検索条件{position}: {error}"))
            }
            _ => None,
        }
    }
}

/// Runs the range search pipeline.
///
/// Conditions are validated one at a time in input order and the first
/// invalid one stops the search. Once all pass, a single request is sent
/// (with at most one key rotation) and the reply is normalized.
pub struct SearchOrchestrator<D, A> {
    validator: ConditionValidator<D>,
    builder: QueryBuilder,
    api: A,
}

impl<D: StationDirectory, A: RangeApi> SearchOrchestrator<D, A> {
    pub fn new(directory: Arc<D>, api: A, keys: ApiKeys) -> Self {
        Self {
            validator: ConditionValidator::new(directory),
            builder: QueryBuilder::new(keys),
            api,
        }
    }

    /// The range API this orchestrator calls.
    pub fn api(&self) -> &A {
        &self.api
    }

    /// Run a search for a raw request body.
    ///
    /// Never fails: every error is logged and turned into
    /// [`HandlerOutcome::Failed`].
    pub async fn run(&self, body: &[u8]) -> HandlerOutcome {
        match self.try_run(body).await {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!(
                    error = %e,
                    body = %String::from_utf8_lossy(body),
                    "range search failed"
                );
                HandlerOutcome::Failed
            }
        }
    }

    async fn try_run(&self, body: &[u8]) -> Result<HandlerOutcome, SearchError> {
        let request: RangeSearchRequest = serde_json::from_slice(body)?;

        let mut resolved = Vec::with_capacity(request.search_conditions.len());
        for (i, condition) in request.search_conditions.iter().enumerate() {
            match self.validator.validate(condition).await {
                Ok(r) => resolved.push(r),
                Err(ValidateError::Invalid(error)) => {
                    return Ok(HandlerOutcome::Rejected {
                        position: i + 1,
                        error,
                    });
                }
                Err(ValidateError::Directory(e)) => return Err(e.into()),
            }
        }

        let raw = fetch_with_rotation(&self.api, &self.builder, &resolved).await?;
        let result = normalize(raw)?;

        Ok(HandlerOutcome::Found(result))
    }
}

#[cfg(test)]
#[path = "orchestrator_tests.rs"]
mod tests;
