//! Search condition validation and station code resolution.

use std::sync::Arc;

use crate::directory::{DirectoryError, StationDirectory};
use crate::domain::{ResolvedCondition, SearchCondition, StationType, UpperMinute, ValidationError};

/// Why [`ConditionValidator::validate`] did not produce a resolved condition.
#[derive(Debug, thiserror::Error)]
pub enum ValidateError {
    /// The user input is not acceptable
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// The directory could not be queried
    #[error(transparent)]
    Directory(#[from] DirectoryError),
}

/// Validates one search condition against the station directory.
///
/// Checks run in a fixed order and the first failure wins:
/// 1. the base station name is not empty
/// 2. the base station exists (exact match among train stations)
/// 3. the time budget is not empty
/// 4. the time budget is all digits
/// 5. the time budget is within range
///
/// The station code comes from the lookup made in step 2, so it is only
/// ever attached to a condition that passed every check.
pub struct ConditionValidator<D> {
    directory: Arc<D>,
}

impl<D: StationDirectory> ConditionValidator<D> {
    /// Create a validator over the given directory.
    pub fn new(directory: Arc<D>) -> Self {
        Self { directory }
    }

    /// Validate a condition and resolve its station code.
    pub async fn validate(
        &self,
        condition: &SearchCondition,
    ) -> Result<ResolvedCondition, ValidateError> {
        let name = condition.base_station_name();

        // The store rejects empty keys, so this must come before the lookup.
        if name.is_empty() {
            return Err(ValidationError::EmptyBaseStation.into());
        }

        let record = self
            .directory
            .find_exact(StationType::Train, name)
            .await?
            .ok_or_else(|| ValidationError::UnknownStation {
                name: name.to_string(),
            })?;

        let upper_minute = UpperMinute::parse(condition.upper_minute())?;

        Ok(ResolvedCondition {
            base_station_name: record.station_name,
            station_code: record.station_code,
            upper_minute,
        })
    }
}
