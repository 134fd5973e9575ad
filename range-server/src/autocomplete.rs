//! Station name autocomplete.
//!
//! A forward-matching lookup over train station names. Empty input gives
//! an empty list without touching the directory, which cannot search for
//! an empty key.

use crate::directory::{DirectoryError, StationDirectory};
use crate::domain::StationType;

/// Names of train stations starting with `text`.
pub async fn possible_stations<D: StationDirectory>(
    directory: &D,
    text: &str,
) -> Result<Vec<String>, DirectoryError> {
    if text.is_empty() {
        return Ok(Vec::new());
    }

    let records = directory.find_by_prefix(StationType::Train, text).await?;
    Ok(records.into_iter().map(|r| r.station_name).collect())
}
