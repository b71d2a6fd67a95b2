use serde::{Deserialize, Serialize};

/// A place with its own set of temperature sensors.
///
/// Returned by the location directory endpoint; the list is always replaced
/// wholesale, never merged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    /// Stable unique identifier, used as `location_sid` in every other request.
    pub sid: String,
    /// Display label for the location selector.
    pub name: String,
}

impl Location {
    pub fn new(sid: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            sid: sid.into(),
            name: name.into(),
        }
    }
}
