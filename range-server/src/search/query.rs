//! Composition of the multiple-range search request.

use std::fmt;

use crate::domain::ResolvedCondition;
use crate::ekispert::RangeQuery;

use super::error::MissingApiKey;

/// Index of the key used for every first attempt.
pub const PRIMARY_KEY: usize = 0;

/// Index of the key used for the single retry after exhaustion.
pub const FALLBACK_KEY: usize = 1;

/// Ordered list of API keys.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ApiKeys(Vec<String>);

impl ApiKeys {
    /// Create from an ordered list of keys.
    pub fn new(keys: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self(keys.into_iter().map(Into::into).collect())
    }

    /// Parse a comma-separated key list, e.g. `primary,fallback`.
    ///
    /// Surrounding whitespace is trimmed and empty entries are dropped.
    pub fn parse(list: &str) -> Self {
        Self(
            list.split(',')
                .map(str::trim)
                .filter(|k| !k.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }

    /// The key at `index`, if configured.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for ApiKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ApiKeys(<{} redacted>)", self.0.len())
    }
}

/// Builds [`RangeQuery`] descriptors from resolved conditions.
#[derive(Debug, Clone)]
pub struct QueryBuilder {
    keys: ApiKeys,
}

impl QueryBuilder {
    pub fn new(keys: ApiKeys) -> Self {
        Self { keys }
    }

    /// Compose the request for `conditions` using the key at `key_index`.
    ///
    /// Station codes and budgets keep the order of `conditions`. Asking for
    /// a key index that is not configured is a deployment defect and fails.
    pub fn build(
        &self,
        conditions: &[ResolvedCondition],
        key_index: usize,
    ) -> Result<RangeQuery, MissingApiKey> {
        let key = self.keys.get(key_index).ok_or(MissingApiKey {
            index: key_index,
            available: self.keys.len(),
        })?;

        let base_list = conditions
            .iter()
            .map(|c| c.station_code.as_str())
            .collect::<Vec<_>>()
            .join(":");

        let upper_minute = conditions
            .iter()
            .map(|c| c.upper_minute.to_string())
            .collect::<Vec<_>>()
            .join(":");

        Ok(RangeQuery {
            key: key.to_string(),
            base_list,
            upper_minute,
        })
    }
}
