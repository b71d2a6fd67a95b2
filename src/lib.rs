mod api;
mod config;
mod error;
mod format;
mod loaders;
mod render;
mod reshape;
mod tempcheck;
mod types;
mod view;

#[cfg(test)]
mod test_support;

pub use config::DashboardConfig;
pub use error::TempCheckError;
pub use tempcheck::*;
pub use view::*;

pub use api::error::FetchError;
pub use api::http_source::HttpSensorSource;
pub use api::request::ReadingsQuery;
pub use api::source::SensorSource;

pub use format::{LabelFormatter, LabelZone};
pub use render::{sensor_cards, LocationSelector, SensorCard};
pub use reshape::reshape_readings;

pub use loaders::generation::Ticket;
pub use loaders::location_directory::LocationDirectory;
pub use loaders::series_loader::SeriesLoader;
pub use loaders::slot::{Completed, LoadPhase, PendingLoad, Resolution};
pub use loaders::summary_loader::SummaryLoader;

pub use types::aggregation::Aggregation;
pub use types::chart::{ChartDataset, ChartSeries};
pub use types::error::QueryError;
pub use types::location::Location;
pub use types::query::{
    format_datetime_local, parse_datetime_local, QueryState, DATETIME_LOCAL_FORMAT,
};
pub use types::reading::RawReading;
pub use types::sensor_type::SensorType;
pub use types::summary::{Summary, SummaryItem, Trend};
