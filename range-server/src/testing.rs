//! Shared fixtures for unit tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use serde_json::{Value, json};

use crate::directory::{DirectoryError, StationDirectory, StationTable};
use crate::domain::{StationCode, StationRecord, StationType};

/// A small directory of real station names and codes.
pub fn sample_table() -> StationTable {
    let stations = [
        ("津田沼", "22370"),
        ("千葉", "22361"),
        ("千葉中央", "22362"),
        ("上新庄", "29191"),
    ];

    StationTable::from_records(
        stations
            .into_iter()
            .map(|(name, code)| StationRecord::train(name, StationCode::parse(code).unwrap())),
    )
}

/// Directory wrapper that counts lookups, or fails every lookup when
/// built with [`CountingDirectory::unavailable`].
pub struct CountingDirectory {
    table: Option<StationTable>,
    lookups: AtomicUsize,
}

impl CountingDirectory {
    pub fn new(table: StationTable) -> Self {
        Self {
            table: Some(table),
            lookups: AtomicUsize::new(0),
        }
    }

    pub fn unavailable() -> Self {
        Self {
            table: None,
            lookups: AtomicUsize::new(0),
        }
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    fn table(&self) -> Result<&StationTable, DirectoryError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.table
            .as_ref()
            .ok_or_else(|| DirectoryError::NotConfigured("station store unavailable".into()))
    }
}

impl StationDirectory for CountingDirectory {
    async fn find_exact(
        &self,
        station_type: StationType,
        name: &str,
    ) -> Result<Option<StationRecord>, DirectoryError> {
        self.table()?.find_exact(station_type, name).await
    }

    async fn find_by_prefix(
        &self,
        station_type: StationType,
        prefix: &str,
    ) -> Result<Vec<StationRecord>, DirectoryError> {
        self.table()?.find_by_prefix(station_type, prefix).await
    }
}

/// A range search payload with one point per `(name, code)`.
///
/// Each point's `Cost` is a list with one entry per base station; pass
/// `bases == 1` to get the bare-object form the API uses for a single
/// search condition.
pub fn points_payload(points: &[(&str, &str)], bases: usize) -> Value {
    let points: Vec<Value> = points
        .iter()
        .map(|(name, code)| {
            let costs: Vec<Value> = (1..=bases)
                .map(|i| json!({"minute": "5", "transferCount": "0", "baseIndex": i.to_string()}))
                .collect();
            let cost = if bases == 1 {
                costs[0].clone()
            } else {
                Value::Array(costs)
            };
            json!({
                "Station": {"code": code, "Name": name, "Type": "train"},
                "Cost": cost
            })
        })
        .collect();

    let point = if points.len() == 1 {
        points[0].clone()
    } else {
        Value::Array(points)
    };

    json!({"ResultSet": {"apiVersion": "1.27.0.0", "Point": point}})
}

/// The payload the API sends when a key has run out.
pub fn exhausted_payload() -> Value {
    json!({
        "ResultSet": {
            "apiVersion": "1.27.0.0",
            "Error": {"code": "W403", "Message": "Forbidden"}
        }
    })
}
