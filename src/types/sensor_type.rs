//! Defines the origin of a temperature reading and the fixed order in which
//! sensor types are displayed.

use crate::types::error::QueryError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The origin of a temperature reading.
///
/// The derived ordering is the display order used everywhere a list of sensor
/// types is rendered: [`SensorType::Api`] always comes before [`SensorType::Local`].
///
/// # Examples
///
/// ```
/// use tempcheck::SensorType;
///
/// assert_eq!(SensorType::Api.to_string(), "api");
/// assert_eq!("local".parse::<SensorType>().unwrap(), SensorType::Local);
/// assert_eq!(SensorType::Local.label(), "Local Sensor");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SensorType {
    /// A remote sensor whose readings are pulled from a weather API.
    Api,
    /// A sensor attached locally at the location.
    Local,
}

impl SensorType {
    /// Every sensor type, in display order.
    pub const ALL: [SensorType; 2] = [SensorType::Api, SensorType::Local];

    /// The name used on the wire, both in query parameters and JSON bodies.
    pub fn as_str(&self) -> &'static str {
        match self {
            SensorType::Api => "api",
            SensorType::Local => "local",
        }
    }

    /// Human readable series and card title.
    pub fn label(&self) -> &'static str {
        match self {
            SensorType::Api => "API Sensor",
            SensorType::Local => "Local Sensor",
        }
    }

    pub(crate) fn border_color(&self) -> &'static str {
        match self {
            SensorType::Api => "rgb(59, 130, 246)",
            SensorType::Local => "rgb(34, 197, 94)",
        }
    }

    pub(crate) fn background_color(&self) -> &'static str {
        match self {
            SensorType::Api => "rgba(59, 130, 246, 0.5)",
            SensorType::Local => "rgba(34, 197, 94, 0.5)",
        }
    }

    /// Position of this type in [`SensorType::ALL`].
    pub(crate) fn index(&self) -> usize {
        match self {
            SensorType::Api => 0,
            SensorType::Local => 1,
        }
    }
}

impl fmt::Display for SensorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SensorType {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "api" => Ok(SensorType::Api),
            "local" => Ok(SensorType::Local),
            other => Err(QueryError::UnknownSensorType(other.to_string())),
        }
    }
}
