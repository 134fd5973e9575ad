//! Range API call with a single key rotation.

use serde_json::Value;
use tracing::warn;

use crate::domain::ResolvedCondition;
use crate::ekispert::response::{error_code, error_message, is_credential_exhausted};
use crate::ekispert::{RangeApi, RangeApiError};

use super::error::SearchError;
use super::query::{FALLBACK_KEY, PRIMARY_KEY, QueryBuilder};

/// Call the range API for `conditions`.
///
/// The first attempt uses the primary key. If and only if the reply says
/// that key is exhausted, the request is rebuilt with the fallback key and
/// sent once more. There is never a third attempt. Any error object left in
/// the final reply is returned as [`RangeApiError::Upstream`].
pub async fn fetch_with_rotation<A: RangeApi>(
    api: &A,
    builder: &QueryBuilder,
    conditions: &[ResolvedCondition],
) -> Result<Value, SearchError> {
    let query = builder.build(conditions, PRIMARY_KEY)?;
    let mut raw = api.fetch(&query).await?;

    if is_credential_exhausted(&raw) {
        warn!("primary API key exhausted, retrying with fallback key");
        let query = builder.build(conditions, FALLBACK_KEY)?;
        raw = api.fetch(&query).await?;
    }

    if let Some(code) = error_code(&raw) {
        return Err(RangeApiError::Upstream {
            code: code.to_string(),
            message: error_message(&raw).unwrap_or_default().to_string(),
        }
        .into());
    }

    Ok(raw)
}
