pub mod aggregation;
pub mod chart;
pub mod error;
pub mod location;
pub mod query;
pub mod reading;
pub mod sensor_type;
pub mod summary;
