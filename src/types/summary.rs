//! Point-in-time summary of the latest reading per sensor type.

use crate::types::sensor_type::SensorType;
use serde::{Deserialize, Serialize};

/// Latest temperature of one sensor type at a location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryItem {
    pub temperature: f64,
    /// Change relative to the previous reading. Only the sign is meaningful.
    pub trend: f64,
    /// ISO-8601 timestamp of the reading.
    pub timestamp: String,
}

/// Direction derived from the sign of [`SummaryItem::trend`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Rising,
    Falling,
    Flat,
}

impl SummaryItem {
    pub fn direction(&self) -> Trend {
        if self.trend > 0.0 {
            Trend::Rising
        } else if self.trend < 0.0 {
            Trend::Falling
        } else {
            // zero and NaN
            Trend::Flat
        }
    }
}

/// Latest reading per sensor type. A missing key and an explicit `null` both
/// decode to `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    #[serde(default)]
    pub api: Option<SummaryItem>,
    #[serde(default)]
    pub local: Option<SummaryItem>,
}

impl Summary {
    pub fn get(&self, sensor_type: SensorType) -> Option<&SummaryItem> {
        match sensor_type {
            SensorType::Api => self.api.as_ref(),
            SensorType::Local => self.local.as_ref(),
        }
    }
}
