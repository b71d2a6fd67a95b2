//! Loads raw readings for the current query and reshapes them for the chart.

use crate::api::error::FetchError;
use crate::api::request::ReadingsQuery;
use crate::api::source::SensorSource;
use crate::format::LabelFormatter;
use crate::loaders::slot::{Completed, LoadPhase, LoadSlot, PendingLoad, Resolution};
use crate::reshape::reshape_readings;
use crate::types::chart::ChartSeries;
use crate::types::query::QueryState;
use log::debug;
use std::sync::Arc;

/// Fetches readings for a [`QueryState`] and turns them into a [`ChartSeries`].
///
/// Reshaping happens inside the request future, so a stale response is
/// dropped without ever touching the stored series. A failed request resets
/// the series to empty.
pub struct SeriesLoader {
    source: Arc<dyn SensorSource>,
    formatter: LabelFormatter,
    slot: LoadSlot<ChartSeries>,
}

impl SeriesLoader {
    pub fn new(source: Arc<dyn SensorSource>, formatter: LabelFormatter) -> Self {
        Self {
            source,
            formatter,
            slot: LoadSlot::new("chart data"),
        }
    }

    /// Issues a request for `query`, superseding any request in flight.
    /// Returns `None` without fetching when no location is selected.
    pub fn load(&mut self, query: &QueryState) -> Option<PendingLoad<ChartSeries>> {
        if query.location_sid.is_empty() {
            self.slot.abandon();
            return None;
        }
        let request = ReadingsQuery::from(query);
        debug!(
            "Chart data requested for {} from {} to {} (aggregation '{}', types {:?}, refresh {})",
            request.location_sid,
            request.start_datetime(),
            request.end_datetime(),
            request.aggregation,
            request.types,
            query.refresh_counter
        );
        let source = Arc::clone(&self.source);
        let formatter = self.formatter;
        Some(self.slot.begin(async move {
            let readings = source.readings(&request).await?;
            Ok::<_, FetchError>(reshape_readings(&readings, &request.types, &formatter))
        }))
    }

    pub fn finish(&mut self, completed: Completed<ChartSeries>) -> Resolution {
        self.slot.finish(completed)
    }

    pub fn series(&self) -> &ChartSeries {
        self.slot.value()
    }

    pub fn phase(&self) -> LoadPhase {
        self.slot.phase()
    }

    pub fn abandon(&mut self) {
        self.slot.abandon();
    }
}
