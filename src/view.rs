//! The sensors page: owns the query parameters, hands them to the loaders and
//! turns user actions into fetches.
//!
//! Every action returns the [`Fetch`]es it triggered. Running a fetch borrows
//! nothing from the view, so the caller may keep issuing actions while older
//! fetches are in flight; completions come back through [`SensorsView::apply`],
//! where superseded ones are discarded. [`SensorsView::settle`] is a ready-made
//! driver that does this until nothing is outstanding.

use crate::api::source::SensorSource;
use crate::config::DashboardConfig;
use crate::format::LabelFormatter;
use crate::loaders::location_directory::LocationDirectory;
use crate::loaders::series_loader::SeriesLoader;
use crate::loaders::slot::{Completed, LoadPhase, PendingLoad, Resolution};
use crate::loaders::summary_loader::SummaryLoader;
use crate::render::{sensor_cards, LocationSelector, SensorCard};
use crate::types::aggregation::Aggregation;
use crate::types::chart::ChartSeries;
use crate::types::location::Location;
use crate::types::query::{truncate_to_minute, QueryState};
use crate::types::sensor_type::SensorType;
use crate::types::summary::Summary;
use chrono::{DateTime, NaiveDateTime, Utc};
use futures_util::stream::{FuturesUnordered, StreamExt};
use std::sync::Arc;

/// Which loader a fetch belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FetchKind {
    Locations,
    Summary,
    Series,
}

/// A request triggered by a view action.
#[derive(Debug)]
pub enum Fetch {
    Locations(PendingLoad<Vec<Location>>),
    Summary(PendingLoad<Option<Summary>>),
    Series(PendingLoad<ChartSeries>),
}

/// A finished [`Fetch`], to be handed to [`SensorsView::apply`].
#[derive(Debug)]
pub enum Completion {
    Locations(Completed<Vec<Location>>),
    Summary(Completed<Option<Summary>>),
    Series(Completed<ChartSeries>),
}

impl Fetch {
    pub fn kind(&self) -> FetchKind {
        match self {
            Fetch::Locations(_) => FetchKind::Locations,
            Fetch::Summary(_) => FetchKind::Summary,
            Fetch::Series(_) => FetchKind::Series,
        }
    }

    pub async fn run(self) -> Completion {
        match self {
            Fetch::Locations(pending) => Completion::Locations(pending.run().await),
            Fetch::Summary(pending) => Completion::Summary(pending.run().await),
            Fetch::Series(pending) => Completion::Series(pending.run().await),
        }
    }
}

impl Completion {
    pub fn kind(&self) -> FetchKind {
        match self {
            Completion::Locations(_) => FetchKind::Locations,
            Completion::Summary(_) => FetchKind::Summary,
            Completion::Series(_) => FetchKind::Series,
        }
    }
}

/// State of the sensors page.
pub struct SensorsView {
    locations: LocationDirectory,
    summary: SummaryLoader,
    series: SeriesLoader,
    query: QueryState,
    default_start: NaiveDateTime,
    formatter: LabelFormatter,
}

impl SensorsView {
    /// A view whose filters start at their defaults, with the range ending at
    /// `now`. Nothing is fetched until [`SensorsView::mount`].
    pub fn new(source: Arc<dyn SensorSource>, config: &DashboardConfig, now: DateTime<Utc>) -> Self {
        let formatter = config.formatter();
        Self {
            locations: LocationDirectory::new(Arc::clone(&source)),
            summary: SummaryLoader::new(Arc::clone(&source)),
            series: SeriesLoader::new(source, formatter),
            query: QueryState::with_defaults(config.default_start(), now),
            default_start: truncate_to_minute(config.default_start()),
            formatter,
        }
    }

    /// Loads the location directory.
    pub fn mount(&mut self) -> Vec<Fetch> {
        vec![Fetch::Locations(self.locations.load())]
    }

    /// Abandons every request in flight; their completions will be discarded.
    pub fn unmount(&mut self) {
        self.locations.abandon();
        self.summary.abandon();
        self.series.abandon();
    }

    pub fn select_location(&mut self, location_sid: impl Into<String>) -> Vec<Fetch> {
        let location_sid = location_sid.into();
        if location_sid == self.query.location_sid {
            return Vec::new();
        }
        self.query.location_sid = location_sid;
        self.reload_all()
    }

    /// Re-fetches summary and chart without changing any visible parameter.
    pub fn refresh(&mut self) -> Vec<Fetch> {
        self.query.refresh_counter += 1;
        self.reload_all()
    }

    pub fn set_start_date(&mut self, start: NaiveDateTime) -> Vec<Fetch> {
        let start = truncate_to_minute(start);
        if start == self.query.start {
            return Vec::new();
        }
        self.query.start = start;
        self.reload_series()
    }

    pub fn set_end_date(&mut self, end: NaiveDateTime) -> Vec<Fetch> {
        let end = truncate_to_minute(end);
        if end == self.query.end {
            return Vec::new();
        }
        self.query.end = end;
        self.reload_series()
    }

    pub fn set_aggregation(&mut self, aggregation: Aggregation) -> Vec<Fetch> {
        if aggregation == self.query.aggregation {
            return Vec::new();
        }
        self.query.aggregation = aggregation;
        self.reload_series()
    }

    /// Switches a sensor type on or off. Always re-fetches the chart.
    pub fn toggle_type(&mut self, sensor_type: SensorType) -> Vec<Fetch> {
        self.query.toggle_type(sensor_type);
        self.reload_series()
    }

    /// Restores the filter defaults with the range ending now.
    pub fn reset_filters(&mut self) -> Vec<Fetch> {
        self.reset_filters_at(Utc::now())
    }

    /// Restores the filter defaults with the range ending at `now`. Always
    /// triggers exactly one chart fetch (when a location is selected).
    pub fn reset_filters_at(&mut self, now: DateTime<Utc>) -> Vec<Fetch> {
        self.query.reset_filters(self.default_start, now);
        self.reload_series()
    }

    /// Hands a finished fetch back to its loader. A location list that brings
    /// a default selection selects it, which triggers summary and chart
    /// fetches.
    pub fn apply(&mut self, completion: Completion) -> Vec<Fetch> {
        match completion {
            Completion::Locations(completed) => {
                if self.locations.finish(completed) != Resolution::Applied {
                    return Vec::new();
                }
                match self.locations.default_selection() {
                    Some(location) => {
                        let sid = location.sid.clone();
                        self.select_location(sid)
                    }
                    None => Vec::new(),
                }
            }
            Completion::Summary(completed) => {
                self.summary.finish(completed);
                Vec::new()
            }
            Completion::Series(completed) => {
                self.series.finish(completed);
                Vec::new()
            }
        }
    }

    /// Runs `fetches` concurrently on the current task and applies each
    /// completion as it arrives, including everything those completions
    /// trigger, until nothing is outstanding.
    pub async fn settle(&mut self, fetches: Vec<Fetch>) {
        let mut in_flight: FuturesUnordered<_> = fetches.into_iter().map(Fetch::run).collect();
        while let Some(completion) = in_flight.next().await {
            for next in self.apply(completion) {
                in_flight.push(next.run());
            }
        }
    }

    fn reload_all(&mut self) -> Vec<Fetch> {
        let mut fetches = Vec::new();
        fetches.extend(
            self.summary
                .load(&self.query.location_sid, self.query.refresh_counter)
                .map(Fetch::Summary),
        );
        fetches.extend(self.reload_series());
        fetches
    }

    fn reload_series(&mut self) -> Vec<Fetch> {
        self.series
            .load(&self.query)
            .map(Fetch::Series)
            .into_iter()
            .collect()
    }

    pub fn query(&self) -> &QueryState {
        &self.query
    }

    pub fn locations(&self) -> &[Location] {
        self.locations.locations()
    }

    /// The selected location, if it is in the loaded list.
    pub fn selected_location(&self) -> Option<&Location> {
        self.locations.find(&self.query.location_sid)
    }

    pub fn summary(&self) -> Option<&Summary> {
        self.summary.summary()
    }

    pub fn chart(&self) -> &ChartSeries {
        self.series.series()
    }

    pub fn phase(&self, kind: FetchKind) -> LoadPhase {
        match kind {
            FetchKind::Locations => self.locations.phase(),
            FetchKind::Summary => self.summary.phase(),
            FetchKind::Series => self.series.phase(),
        }
    }

    pub fn location_selector(&self) -> LocationSelector<'_> {
        LocationSelector::new(self.locations(), &self.query.location_sid)
    }

    /// One card per sensor type, api first.
    pub fn sensor_cards(&self) -> [SensorCard<'_>; 2] {
        sensor_cards(self.summary(), self.formatter)
    }
}
