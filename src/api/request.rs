//! Builds the query parameters of the sensor data endpoint.

use crate::types::aggregation::Aggregation;
use crate::types::query::QueryState;
use crate::types::sensor_type::SensorType;
use chrono::NaiveDateTime;

pub(crate) const LOCATIONS_PATH: &str = "api/v1/locations";
pub(crate) const SUMMARY_PATH: &str = "api/v1/sensors/summary";
pub(crate) const READINGS_PATH: &str = "api/v1/sensors/data";

/// Parameters of one raw-readings request.
#[derive(Debug, Clone, PartialEq)]
pub struct ReadingsQuery {
    pub location_sid: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub aggregation: Aggregation,
    /// Requested sensor types, sent in this order.
    pub types: Vec<SensorType>,
}

impl ReadingsQuery {
    /// `start` floored to `:00` seconds, UTC.
    pub fn start_datetime(&self) -> String {
        self.start.format("%Y-%m-%dT%H:%M:00Z").to_string()
    }

    /// `end` ceiled to `:59` seconds, UTC.
    pub fn end_datetime(&self) -> String {
        self.end.format("%Y-%m-%dT%H:%M:59Z").to_string()
    }

    /// Query pairs in request order. `aggregation` is left out when raw, and
    /// `types` is repeated once per requested type.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("location_sid", self.location_sid.clone()),
            ("start_datetime", self.start_datetime()),
            ("end_datetime", self.end_datetime()),
        ];
        if let Some(aggregation) = self.aggregation.query_value() {
            pairs.push(("aggregation", aggregation.to_string()));
        }
        pairs.extend(
            self.types
                .iter()
                .map(|sensor_type| ("types", sensor_type.as_str().to_string())),
        );
        pairs
    }
}

impl From<&QueryState> for ReadingsQuery {
    fn from(query: &QueryState) -> Self {
        Self {
            location_sid: query.location_sid.clone(),
            start: query.start,
            end: query.end,
            aggregation: query.aggregation,
            types: query.active_types.clone(),
        }
    }
}
