//! In-memory station table loaded from a JSON file.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Deserialize;
use tokio::sync::RwLock;
use tracing::warn;

use crate::domain::{StationCode, StationRecord, StationType};

use super::StationDirectory;
use super::error::DirectoryError;

/// Station file entry before the code is validated.
#[derive(Debug, Deserialize)]
struct StationDto {
    #[serde(rename = "Station_Type")]
    station_type: String,
    #[serde(rename = "Station_Name")]
    station_name: String,
    #[serde(rename = "Station_code")]
    station_code: String,
}

type TableKey = (StationType, String);

/// Thread-safe station lookup table.
///
/// Keyed by `(type, name)` in a sorted map so that prefix queries are a
/// range scan. Supports in-place reload from its source file.
#[derive(Clone)]
pub struct StationTable {
    inner: Arc<RwLock<BTreeMap<TableKey, StationRecord>>>,
    source: Option<PathBuf>,
}

impl StationTable {
    /// Create a table from records already in memory (no reload source).
    pub fn from_records(records: impl IntoIterator<Item = StationRecord>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(build_map(records))),
            source: None,
        }
    }

    /// Load a table from a JSON file holding an array of station items.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DirectoryError> {
        let path = path.as_ref();
        let records = read_station_file(path)?;

        Ok(Self {
            inner: Arc::new(RwLock::new(build_map(records))),
            source: Some(path.to_path_buf()),
        })
    }

    /// Number of stations in the table.
    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    /// Check if the table is empty.
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }

    /// Re-read the source file.
    ///
    /// On success, replaces the current table. On failure, the existing
    /// table is preserved and the error is returned.
    pub async fn reload(&self) -> Result<usize, DirectoryError> {
        let path = self.source.as_ref().ok_or_else(|| {
            DirectoryError::NotConfigured("station table has no source file".to_string())
        })?;

        let map = build_map(read_station_file(path)?);
        let count = map.len();

        let mut guard = self.inner.write().await;
        *guard = map;

        Ok(count)
    }
}

impl StationDirectory for StationTable {
    async fn find_exact(
        &self,
        station_type: StationType,
        name: &str,
    ) -> Result<Option<StationRecord>, DirectoryError> {
        if name.is_empty() {
            return Err(DirectoryError::EmptyKey);
        }

        let guard = self.inner.read().await;
        Ok(guard.get(&(station_type, name.to_string())).cloned())
    }

    async fn find_by_prefix(
        &self,
        station_type: StationType,
        prefix: &str,
    ) -> Result<Vec<StationRecord>, DirectoryError> {
        if prefix.is_empty() {
            return Err(DirectoryError::EmptyKey);
        }

        let guard = self.inner.read().await;
        let matches = guard
            .range((station_type, prefix.to_string())..)
            .take_while(|((ty, name), _)| *ty == station_type && name.starts_with(prefix))
            .map(|(_, record)| record.clone())
            .collect();

        Ok(matches)
    }
}

fn read_station_file(path: &Path) -> Result<Vec<StationRecord>, DirectoryError> {
    let contents = std::fs::read_to_string(path).map_err(|e| DirectoryError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let dtos: Vec<StationDto> =
        serde_json::from_str(&contents).map_err(|e| DirectoryError::Json {
            message: e.to_string(),
        })?;

    Ok(dtos.into_iter().filter_map(into_record).collect())
}

/// Convert one file entry, skipping rows with an unknown type or bad code.
fn into_record(dto: StationDto) -> Option<StationRecord> {
    let Some(station_type) = StationType::from_name(&dto.station_type) else {
        warn!(
            station = %dto.station_name,
            station_type = %dto.station_type,
            "skipping station of unknown type"
        );
        return None;
    };

    match StationCode::parse(&dto.station_code) {
        Ok(code) => Some(StationRecord {
            station_type,
            station_name: dto.station_name,
            station_code: code,
        }),
        Err(e) => {
            warn!(station = %dto.station_name, error = %e, "skipping station");
            None
        }
    }
}

/// Build the `(type, name)` → record map.
fn build_map(records: impl IntoIterator<Item = StationRecord>) -> BTreeMap<TableKey, StationRecord> {
    records
        .into_iter()
        .map(|r| ((r.station_type, r.station_name.clone()), r))
        .collect()
}
