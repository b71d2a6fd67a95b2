//! Loads the list of selectable locations.

use crate::api::source::SensorSource;
use crate::loaders::slot::{Completed, LoadPhase, LoadSlot, PendingLoad, Resolution};
use crate::types::location::Location;
use std::sync::Arc;

/// Fetches the location list once when the page mounts.
///
/// On success the list replaces the previous one and its first entry becomes
/// the default selection; on failure the list is emptied and nothing is
/// selected. There is no retry.
pub struct LocationDirectory {
    source: Arc<dyn SensorSource>,
    slot: LoadSlot<Vec<Location>>,
}

impl LocationDirectory {
    pub fn new(source: Arc<dyn SensorSource>) -> Self {
        Self {
            source,
            slot: LoadSlot::new("locations"),
        }
    }

    pub fn load(&mut self) -> PendingLoad<Vec<Location>> {
        let source = Arc::clone(&self.source);
        self.slot.begin(async move { source.locations().await })
    }

    pub fn finish(&mut self, completed: Completed<Vec<Location>>) -> Resolution {
        self.slot.finish(completed)
    }

    pub fn locations(&self) -> &[Location] {
        self.slot.value()
    }

    /// The location selected when the list arrives: the first one, if any.
    pub fn default_selection(&self) -> Option<&Location> {
        self.locations().first()
    }

    pub fn find(&self, sid: &str) -> Option<&Location> {
        self.locations().iter().find(|location| location.sid == sid)
    }

    pub fn phase(&self) -> LoadPhase {
        self.slot.phase()
    }

    pub fn abandon(&mut self) {
        self.slot.abandon();
    }
}
