//! The user-controlled query parameters of the sensors page.

use crate::types::aggregation::Aggregation;
use crate::types::error::QueryError;
use crate::types::sensor_type::SensorType;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Utc};

/// Format of a `datetime-local` form value, the precision dates are kept at.
pub const DATETIME_LOCAL_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Parses a `datetime-local` value such as `2025-09-15T00:00`.
///
/// # Errors
///
/// Returns [`QueryError::InvalidDateTime`] if `input` is not in
/// `YYYY-MM-DDTHH:MM` form.
pub fn parse_datetime_local(input: &str) -> Result<NaiveDateTime, QueryError> {
    NaiveDateTime::parse_from_str(input, DATETIME_LOCAL_FORMAT)
        .map_err(|e| QueryError::InvalidDateTime(input.to_string(), e))
}

/// Renders a date-time back to its `datetime-local` form.
pub fn format_datetime_local(datetime: &NaiveDateTime) -> String {
    datetime.format(DATETIME_LOCAL_FORMAT).to_string()
}

/// Drops seconds and sub-seconds.
pub(crate) fn truncate_to_minute(datetime: NaiveDateTime) -> NaiveDateTime {
    datetime
        .date()
        .and_hms_opt(datetime.hour(), datetime.minute(), 0)
        .unwrap_or(datetime)
}

/// First day shown when the page opens, `2025-09-15T00:00`.
pub(crate) fn default_start() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 9, 15)
        .unwrap_or_default()
        .and_time(NaiveTime::default())
}

/// The full set of parameters that decide what the page fetches.
///
/// One value of this struct is one version of the page's query: it is only
/// changed through the setters on [`crate::SensorsView`], and the loaders only
/// ever read it.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryState {
    /// Selected location, empty until one is known.
    pub location_sid: String,
    /// Start of the range, minute precision. Requested from `:00` seconds.
    pub start: NaiveDateTime,
    /// End of the range, minute precision. Requested up to `:59` seconds.
    pub end: NaiveDateTime,
    pub aggregation: Aggregation,
    /// Active sensor types in the order they were switched on.
    pub active_types: Vec<SensorType>,
    /// Bumped by every explicit refresh.
    pub refresh_counter: u64,
}

impl QueryState {
    /// A query with the filter defaults: the range runs from `default_start`
    /// to `now` (truncated to the minute), no aggregation, both sensor types.
    pub fn with_defaults(default_start: NaiveDateTime, now: DateTime<Utc>) -> Self {
        Self {
            location_sid: String::new(),
            start: truncate_to_minute(default_start),
            end: truncate_to_minute(now.naive_utc()),
            aggregation: Aggregation::Raw,
            active_types: SensorType::ALL.to_vec(),
            refresh_counter: 0,
        }
    }

    pub fn is_active(&self, sensor_type: SensorType) -> bool {
        self.active_types.contains(&sensor_type)
    }

    /// Restores start, end, aggregation and active types to their defaults.
    /// Location and refresh counter are kept.
    pub(crate) fn reset_filters(&mut self, default_start: NaiveDateTime, now: DateTime<Utc>) {
        let defaults = Self::with_defaults(default_start, now);
        self.start = defaults.start;
        self.end = defaults.end;
        self.aggregation = defaults.aggregation;
        self.active_types = defaults.active_types;
    }

    /// Switches `sensor_type` off if active, otherwise appends it.
    pub(crate) fn toggle_type(&mut self, sensor_type: SensorType) {
        if self.is_active(sensor_type) {
            self.active_types.retain(|t| *t != sensor_type);
        } else {
            self.active_types.push(sensor_type);
        }
    }
}
