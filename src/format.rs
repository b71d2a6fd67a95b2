//! Display formatting of backend timestamps for chart labels and cards.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};
use std::fmt::Display;

/// `en-US` style date-time, e.g. `9/15/2025, 10:00:00 AM`.
const DISPLAY_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// Time zone timestamps are shown in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum LabelZone {
    /// The zone of the machine running the dashboard.
    #[default]
    Local,
    /// UTC, for output that does not depend on the host.
    Utc,
}

/// Renders ISO-8601 timestamps for display.
///
/// # Examples
///
/// ```
/// use tempcheck::{LabelFormatter, LabelZone};
///
/// let formatter = LabelFormatter::new(LabelZone::Utc);
/// assert_eq!(formatter.format("2025-09-15T13:05:00Z"), "9/15/2025, 1:05:00 PM");
/// // Anything that is not a timestamp is shown as is.
/// assert_eq!(formatter.format("yesterday"), "yesterday");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LabelFormatter {
    zone: LabelZone,
}

impl LabelFormatter {
    pub fn new(zone: LabelZone) -> Self {
        Self { zone }
    }

    pub fn zone(&self) -> LabelZone {
        self.zone
    }

    /// Formats `timestamp` in the configured zone.
    ///
    /// Offset-qualified timestamps are converted; timestamps without an offset
    /// are read as already being in the configured zone. Unparseable input is
    /// returned verbatim.
    pub fn format(&self, timestamp: &str) -> String {
        if let Ok(datetime) = DateTime::parse_from_rfc3339(timestamp) {
            return match self.zone {
                LabelZone::Local => render(&datetime.with_timezone(&Local)),
                LabelZone::Utc => render(&datetime.with_timezone(&Utc)),
            };
        }
        match NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M:%S%.f") {
            Ok(naive) => match self.zone {
                LabelZone::Local => Local
                    .from_local_datetime(&naive)
                    .earliest()
                    .map(|datetime| render(&datetime))
                    .unwrap_or_else(|| timestamp.to_string()),
                LabelZone::Utc => render(&naive.and_utc()),
            },
            Err(_) => timestamp.to_string(),
        }
    }
}

fn render<Tz: TimeZone>(datetime: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    datetime.format(DISPLAY_FORMAT).to_string()
}
