//! Station identity types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an invalid station code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station code: {reason}")]
pub struct InvalidStationCode {
    reason: &'static str,
}

/// Kind of station held by the directory.
///
/// Only train stations are searched; rows of any other kind in the
/// station file are skipped when it is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StationType {
    Train,
}

impl StationType {
    /// The lowercase name used by the station store.
    pub fn as_str(&self) -> &'static str {
        match self {
            StationType::Train => "train",
        }
    }

    /// Look up a type by its store name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "train" => Some(StationType::Train),
            _ => None,
        }
    }
}

impl fmt::Display for StationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The identifier the route API expects in place of a station name.
///
/// Codes are non-empty strings of ASCII digits (e.g. `22370`). This type
/// guarantees that any `StationCode` value is valid by construction.
///
/// # Examples
///
/// ```
/// use range_server::domain::StationCode;
///
/// let tsudanuma = StationCode::parse("22370").unwrap();
/// assert_eq!(tsudanuma.as_str(), "22370");
///
/// assert!(StationCode::parse("").is_err());
/// assert!(StationCode::parse("22a70").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct StationCode(String);

impl StationCode {
    /// Parse a station code from a string.
    pub fn parse(s: &str) -> Result<Self, InvalidStationCode> {
        if s.is_empty() {
            return Err(InvalidStationCode {
                reason: "must not be empty",
            });
        }

        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidStationCode {
                reason: "must be ASCII digits 0-9",
            });
        }

        Ok(StationCode(s.to_string()))
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for StationCode {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        StationCode::parse(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Debug for StationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationCode({})", self.0)
    }
}

impl fmt::Display for StationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One entry of the station directory.
///
/// Field names match the items of the station store, so a dump of the store
/// can be loaded as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationRecord {
    #[serde(rename = "Station_Type")]
    pub station_type: StationType,

    #[serde(rename = "Station_Name")]
    pub station_name: String,

    #[serde(rename = "Station_code")]
    pub station_code: StationCode,
}

impl StationRecord {
    /// Create a train station record.
    pub fn train(name: impl Into<String>, code: StationCode) -> Self {
        Self {
            station_type: StationType::Train,
            station_name: name.into(),
            station_code: code,
        }
    }
}
