//! Reshaping of the range search payload.
//!
//! The API compresses one-element lists into bare objects, both for the
//! list of points and for each point's costs (one cost per base station).
//! Normalization turns both back into lists and does nothing else: no
//! sorting, no filtering, no field renaming.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::ekispert::response::result_set;

use super::error::NormalizeError;

/// One reachable station.
///
/// `costs` has one entry per base station. All other fields of the point
/// are passed through as received.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationHit {
    #[serde(rename = "Cost")]
    pub costs: Vec<Value>,

    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl StationHit {
    /// Station name, from `Station.Name`.
    pub fn name(&self) -> Option<&str> {
        self.fields.get("Station")?.get("Name")?.as_str()
    }

    /// Station code, from `Station.code`.
    pub fn code(&self) -> Option<&str> {
        self.fields.get("Station")?.get("code")?.as_str()
    }
}

/// Stations reachable within the requested budgets, in API order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RangeSearchResult {
    #[serde(rename = "Stations")]
    pub stations: Vec<StationHit>,
}

/// Wrap a bare value into a one-element list; pass lists through.
pub fn coerce_to_list(value: Value) -> Vec<Value> {
    match value {
        Value::Array(items) => items,
        other => vec![other],
    }
}

/// Turn a raw payload into a [`RangeSearchResult`].
///
/// A payload without points is an empty result, not an error.
pub fn normalize(mut raw: Value) -> Result<RangeSearchResult, NormalizeError> {
    if result_set(&raw).is_none() {
        return Err(NormalizeError::MissingResultSet);
    }

    let points = match raw
        .get_mut("ResultSet")
        .and_then(|rs| rs.as_object_mut())
        .and_then(|rs| rs.remove("Point"))
    {
        None | Some(Value::Null) => return Ok(RangeSearchResult::default()),
        Some(points) => coerce_to_list(points),
    };

    let stations = points
        .into_iter()
        .enumerate()
        .map(|(index, point)| {
            let Value::Object(mut fields) = point else {
                return Err(NormalizeError::PointNotObject { index });
            };
            let cost = fields
                .remove("Cost")
                .ok_or(NormalizeError::MissingCost { index })?;

            Ok(StationHit {
                costs: coerce_to_list(cost),
                fields,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(RangeSearchResult { stations })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::points_payload;
    use serde_json::json;

    #[test]
    fn coerce_wraps_scalars() {
        assert_eq!(coerce_to_list(json!({"a": 1})), vec![json!({"a": 1})]);
        assert_eq!(coerce_to_list(json!([1, 2])), vec![json!(1), json!(2)]);
        assert!(coerce_to_list(json!([])).is_empty());
    }

    #[test]
    fn no_points_is_empty_result() {
        let raw = json!({"ResultSet": {"apiVersion": "1.27.0.0"}});
        assert!(normalize(raw).unwrap().stations.is_empty());
    }

    #[test]
    fn missing_result_set_is_error() {
        assert_eq!(
            normalize(json!({"foo": 1})),
            Err(NormalizeError::MissingResultSet)
        );
    }

    #[test]
    fn singleton_point_and_cost_become_lists() {
        let raw = points_payload(&[("津田沼", "22370")], 1);
        let result = normalize(raw).unwrap();

        assert_eq!(result.stations.len(), 1);
        let hit = &result.stations[0];
        assert_eq!(hit.name(), Some("津田沼"));
        assert_eq!(hit.code(), Some("22370"));
        assert_eq!(hit.costs.len(), 1);
        assert_eq!(hit.costs[0]["baseIndex"], "1");
    }

    #[test]
    fn order_is_preserved() {
        let raw = points_payload(
            &[("千葉", "22361"), ("津田沼", "22370"), ("稲毛", "22355")],
            2,
        );
        let result = normalize(raw).unwrap();

        let names: Vec<_> = result.stations.iter().filter_map(|s| s.name()).collect();
        assert_eq!(names, vec!["千葉", "津田沼", "稲毛"]);

        for hit in &result.stations {
            let indexes: Vec<_> = hit.costs.iter().map(|c| c["baseIndex"].clone()).collect();
            assert_eq!(indexes, vec![json!("1"), json!("2")]);
        }
    }

    #[test]
    fn cost_is_always_a_list_when_serialized() {
        let raw = points_payload(&[("津田沼", "22370")], 1);
        let body = serde_json::to_value(normalize(raw).unwrap()).unwrap();

        assert!(body["Stations"].is_array());
        assert!(body["Stations"][0]["Cost"].is_array());
        assert_eq!(body["Stations"][0]["Station"]["Name"], "津田沼");
    }

    #[test]
    fn point_without_cost_is_error() {
        let raw = json!({"ResultSet": {"Point": [{"Station": {"Name": "千葉"}}]}});
        assert_eq!(normalize(raw), Err(NormalizeError::MissingCost { index: 0 }));
    }

    #[test]
    fn point_that_is_not_object_is_error() {
        let raw = json!({"ResultSet": {"Point": ["千葉"]}});
        assert_eq!(
            normalize(raw),
            Err(NormalizeError::PointNotObject { index: 0 })
        );
    }
}
