//! Loads the latest reading per sensor type for the selected location.

use crate::api::source::SensorSource;
use crate::loaders::slot::{Completed, LoadPhase, LoadSlot, PendingLoad, Resolution};
use crate::types::summary::Summary;
use log::debug;
use std::sync::Arc;

/// Fetches the [`Summary`] of a location, again on every location change or
/// refresh.
///
/// The summary is stored exactly as the backend sent it. A failed request
/// clears it.
pub struct SummaryLoader {
    source: Arc<dyn SensorSource>,
    slot: LoadSlot<Option<Summary>>,
}

impl SummaryLoader {
    pub fn new(source: Arc<dyn SensorSource>) -> Self {
        Self {
            source,
            slot: LoadSlot::new("summary"),
        }
    }

    /// Issues a request for `location_sid`, superseding any request in flight.
    ///
    /// `refresh_token` only identifies the trigger in logs; a change of it is
    /// what makes the caller ask again. Returns `None` without fetching when no
    /// location is selected.
    pub fn load(
        &mut self,
        location_sid: &str,
        refresh_token: u64,
    ) -> Option<PendingLoad<Option<Summary>>> {
        if location_sid.is_empty() {
            self.slot.abandon();
            return None;
        }
        debug!(
            "Summary requested for {} (refresh {})",
            location_sid, refresh_token
        );
        let source = Arc::clone(&self.source);
        let location_sid = location_sid.to_string();
        Some(
            self.slot
                .begin(async move { source.summary(&location_sid).await }),
        )
    }

    pub fn finish(&mut self, completed: Completed<Option<Summary>>) -> Resolution {
        self.slot.finish(completed)
    }

    /// The stored summary; `None` before the first response and after a failure.
    pub fn summary(&self) -> Option<&Summary> {
        self.slot.value().as_ref()
    }

    pub fn phase(&self) -> LoadPhase {
        self.slot.phase()
    }

    pub fn abandon(&mut self) {
        self.slot.abandon();
    }
}
