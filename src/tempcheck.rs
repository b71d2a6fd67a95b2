//! Main entry point: connects to a temperature backend and hands out
//! dashboard views, or answers one-off queries directly.

use crate::api::http_source::HttpSensorSource;
use crate::api::request::ReadingsQuery;
use crate::api::source::SensorSource;
use crate::config::DashboardConfig;
use crate::error::TempCheckError;
use crate::reshape::reshape_readings;
use crate::types::aggregation::Aggregation;
use crate::types::chart::ChartSeries;
use crate::types::location::Location;
use crate::types::query::{truncate_to_minute, QueryState};
use crate::types::sensor_type::SensorType;
use crate::types::summary::Summary;
use crate::view::SensorsView;
use bon::bon;
use chrono::{NaiveDateTime, Utc};
use reqwest::Client;
use std::sync::Arc;

/// Client for a temperature sensor backend.
///
/// Use [`TempCheck::dashboard`] for the interactive page state, or the
/// `locations`/`summary`/`chart` methods for single requests.
///
/// # Examples
///
/// ```rust
/// # use tempcheck::{TempCheck, TempCheckError};
/// # async fn run() -> Result<(), TempCheckError> {
/// let client = TempCheck::new("http://localhost:8080/")?;
///
/// let mut view = client.dashboard();
/// let fetches = view.mount();
/// view.settle(fetches).await;
/// println!("{}", view.location_selector());
/// # Ok(())
/// # }
/// ```
pub struct TempCheck {
    config: DashboardConfig,
    source: Arc<dyn SensorSource>,
}

#[bon]
impl TempCheck {
    /// A client for the backend at `base_url`, with default settings.
    ///
    /// # Errors
    ///
    /// Returns [`TempCheckError::InvalidBaseUrl`] if `base_url` is not an
    /// absolute URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self, TempCheckError> {
        Self::with_config(DashboardConfig::builder().base_url(base_url).build())
    }

    pub fn with_config(config: DashboardConfig) -> Result<Self, TempCheckError> {
        Self::with_client(config, Client::new())
    }

    /// Like [`TempCheck::with_config`], sending requests through `client`
    /// (for custom timeouts, proxies or headers).
    pub fn with_client(config: DashboardConfig, client: Client) -> Result<Self, TempCheckError> {
        let base_url = config.resolve_base_url()?;
        let source = HttpSensorSource::new(client, base_url);
        Ok(Self::with_source(config, Arc::new(source)))
    }

    /// A client reading from any [`SensorSource`].
    pub fn with_source(config: DashboardConfig, source: Arc<dyn SensorSource>) -> Self {
        Self { config, source }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// A fresh page, its range ending now. Call [`SensorsView::mount`] to
    /// start loading.
    pub fn dashboard(&self) -> SensorsView {
        SensorsView::new(Arc::clone(&self.source), &self.config, Utc::now())
    }

    pub async fn locations(&self) -> Result<Vec<Location>, TempCheckError> {
        Ok(self.source.locations().await?)
    }

    /// The latest reading per sensor type at `location_sid`, or `None` if the
    /// backend answered `null`.
    pub async fn summary(&self, location_sid: &str) -> Result<Option<Summary>, TempCheckError> {
        Ok(self.source.summary(location_sid).await?)
    }

    /// Fetches readings for a location and reshapes them into a chart series.
    ///
    /// This method uses a builder pattern. Only `.location(...)` is required;
    /// everything else falls back to the filter defaults (range from the
    /// configured start until now, raw readings, both sensor types).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tempcheck::{Aggregation, SensorType, TempCheck, TempCheckError};
    /// # async fn run() -> Result<(), TempCheckError> {
    /// let client = TempCheck::new("http://localhost:8080/")?;
    /// let series = client
    ///     .chart()
    ///     .location("loc1")
    ///     .aggregation(Aggregation::Day)
    ///     .types(vec![SensorType::Local])
    ///     .call()
    ///     .await?;
    /// println!("{} points", series.labels.len());
    /// # Ok(())
    /// # }
    /// ```
    #[builder]
    pub async fn chart(
        &self,
        #[builder(into)] location: String,
        start: Option<NaiveDateTime>,
        end: Option<NaiveDateTime>,
        aggregation: Option<Aggregation>,
        types: Option<Vec<SensorType>>,
    ) -> Result<ChartSeries, TempCheckError> {
        let mut query = QueryState::with_defaults(self.config.default_start(), Utc::now());
        query.location_sid = location;
        if let Some(start) = start {
            query.start = truncate_to_minute(start);
        }
        if let Some(end) = end {
            query.end = truncate_to_minute(end);
        }
        if let Some(aggregation) = aggregation {
            query.aggregation = aggregation;
        }
        if let Some(types) = types {
            query.active_types = types;
        }
        if query.location_sid.is_empty() {
            return Ok(ChartSeries::default());
        }

        let request = ReadingsQuery::from(&query);
        let readings = self.source.readings(&request).await?;
        Ok(reshape_readings(
            &readings,
            &request.types,
            &self.config.formatter(),
        ))
    }
}
