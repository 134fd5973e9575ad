//! Search condition types.
//!
//! A [`SearchCondition`] is the raw, user-supplied pair of base station and
//! time budget. Only the validator turns it into a [`ResolvedCondition`],
//! which is the only form the query builder accepts.

use std::fmt;

use serde::Deserialize;

use super::error::ValidationError;
use super::station::StationCode;

/// Smallest accepted time budget, in minutes.
pub const MIN_UPPER_MINUTE: u16 = 10;

/// Largest accepted time budget, in minutes.
pub const MAX_UPPER_MINUTE: u16 = 200;

/// One entry of the `SearchConditions` array, exactly as received.
///
/// Missing keys deserialize to `None` and are treated like empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SearchCondition {
    #[serde(rename = "BaseStationName", default)]
    pub base_station_name: Option<String>,

    #[serde(rename = "UpperMinute", default)]
    pub upper_minute: Option<String>,
}

impl SearchCondition {
    /// Create a condition from a station name and a time budget.
    pub fn new(base_station_name: impl Into<String>, upper_minute: impl Into<String>) -> Self {
        Self {
            base_station_name: Some(base_station_name.into()),
            upper_minute: Some(upper_minute.into()),
        }
    }

    /// The base station name, with a missing value read as empty.
    pub fn base_station_name(&self) -> &str {
        self.base_station_name.as_deref().unwrap_or_default()
    }

    /// The time budget text, with a missing value read as empty.
    pub fn upper_minute(&self) -> &str {
        self.upper_minute.as_deref().unwrap_or_default()
    }
}

/// A time budget in minutes, guaranteed to lie in
/// [`MIN_UPPER_MINUTE`]..=[`MAX_UPPER_MINUTE`].
///
/// # Examples
///
/// ```
/// use range_server::domain::UpperMinute;
///
/// assert_eq!(UpperMinute::parse("20").unwrap().minutes(), 20);
/// assert!(UpperMinute::parse("9").is_err());
/// assert!(UpperMinute::parse("abc").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UpperMinute(u16);

impl UpperMinute {
    /// Parse a time budget from user input.
    ///
    /// Checks run in a fixed order: empty, then digits only, then range.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        if s.is_empty() {
            return Err(ValidationError::EmptyUpperMinute);
        }

        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::NonNumericUpperMinute);
        }

        // Only digits remain, so a parse failure means overflow.
        let minutes: u16 = s
            .parse()
            .map_err(|_| ValidationError::UpperMinuteOutOfRange)?;

        if !(MIN_UPPER_MINUTE..=MAX_UPPER_MINUTE).contains(&minutes) {
            return Err(ValidationError::UpperMinuteOutOfRange);
        }

        Ok(UpperMinute(minutes))
    }

    /// The budget in minutes.
    pub fn minutes(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for UpperMinute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A condition that passed validation and has its station code attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCondition {
    pub base_station_name: String,
    pub station_code: StationCode,
    pub upper_minute: UpperMinute,
}
