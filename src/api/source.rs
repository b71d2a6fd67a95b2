use crate::api::error::FetchError;
use crate::api::request::ReadingsQuery;
use crate::types::location::Location;
use crate::types::reading::RawReading;
use crate::types::summary::Summary;
use async_trait::async_trait;

/// The three read endpoints of the sensor backend.
///
/// [`crate::HttpSensorSource`] is the production implementation; loaders only
/// see this trait, so a view can be driven from any source of readings.
#[async_trait]
pub trait SensorSource: Send + Sync {
    /// All selectable locations, in backend order.
    async fn locations(&self) -> Result<Vec<Location>, FetchError>;

    /// Latest reading per sensor type. `None` when the backend answered `null`.
    async fn summary(&self, location_sid: &str) -> Result<Option<Summary>, FetchError>;

    /// Raw readings for the query, in backend order.
    async fn readings(&self, query: &ReadingsQuery) -> Result<Vec<RawReading>, FetchError>;
}
