//! Data transfer objects for web requests and responses.
//!
//! Field names follow the JSON contract the front end already uses
//! (PascalCase keys, camelCase query parameters).

use serde::{Deserialize, Serialize};

/// Message returned for any failure the user cannot fix.
pub const SYSTEM_ERROR_MESSAGE: &str = "システムエラー";

/// Query string of the autocomplete endpoint.
#[derive(Debug, Deserialize)]
pub struct IncrementalSearchRequest {
    /// Text typed so far
    #[serde(rename = "baseStationName")]
    pub base_station_name: Option<String>,
}

/// Response of the autocomplete endpoint.
#[derive(Debug, Serialize)]
pub struct PossibleStationsResponse {
    /// Station names starting with the typed text
    #[serde(rename = "PossibleStations")]
    pub possible_stations: Vec<String>,
}

/// Error response.
///
/// Used both for rejected search conditions (with a success status) and
/// for system errors.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Message shown to the user
    #[serde(rename = "ErrorMessage")]
    pub error_message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error_message: message.into(),
        }
    }

    pub fn system_error() -> Self {
        Self::new(SYSTEM_ERROR_MESSAGE)
    }
}
