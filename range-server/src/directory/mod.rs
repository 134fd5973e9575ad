//! Station directory: station name → station code lookup.
//!
//! The directory answers two kinds of query over `(station type, station
//! name)`: an exact match used to validate and resolve search conditions,
//! and a forward (prefix) match used for autocomplete.
//!
//! Callers must never send an empty key. Implementations reject it with
//! [`DirectoryError::EmptyKey`] rather than returning every station.

mod error;
mod table;

use std::future::Future;

use crate::domain::{StationRecord, StationType};

pub use error::DirectoryError;
pub use table::StationTable;

/// Read-only lookup over the station store.
pub trait StationDirectory: Send + Sync {
    /// Find the station with exactly this name, if any.
    fn find_exact(
        &self,
        station_type: StationType,
        name: &str,
    ) -> impl Future<Output = Result<Option<StationRecord>, DirectoryError>> + Send;

    /// Find all stations whose name starts with `prefix`.
    ///
    /// Order of the returned records is unspecified.
    fn find_by_prefix(
        &self,
        station_type: StationType,
        prefix: &str,
    ) -> impl Future<Output = Result<Vec<StationRecord>, DirectoryError>> + Send;
}
