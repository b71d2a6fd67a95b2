use thiserror::Error;

/// Rejected user input for one of the dashboard's query parameters.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("Invalid date-time '{0}', expected YYYY-MM-DDTHH:MM")]
    InvalidDateTime(String, #[source] chrono::ParseError),

    #[error("Unknown sensor type '{0}'")]
    UnknownSensorType(String),

    #[error("Unknown aggregation '{0}'")]
    UnknownAggregation(String),
}
