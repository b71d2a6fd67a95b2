use crate::types::sensor_type::SensorType;
use serde::{Deserialize, Serialize};

/// One `(timestamp, type)` temperature observation as returned by the
/// sensor data endpoint.
///
/// The timestamp is kept as the raw ISO-8601 string: readings are bucketed by
/// that exact string, so two spellings of the same instant are two labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawReading {
    pub timestamp: String,
    #[serde(rename = "type")]
    pub sensor_type: SensorType,
    pub temperature: f64,
}

impl RawReading {
    pub fn new(timestamp: impl Into<String>, sensor_type: SensorType, temperature: f64) -> Self {
        Self {
            timestamp: timestamp.into(),
            sensor_type,
            temperature,
        }
    }
}
