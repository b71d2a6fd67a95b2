//! Plain-text rendering of the dashboard widgets.

use crate::format::LabelFormatter;
use crate::types::location::Location;
use crate::types::sensor_type::SensorType;
use crate::types::summary::{Summary, SummaryItem, Trend};
use std::fmt;

/// The latest reading of one sensor type.
///
/// # Examples
///
/// ```
/// use tempcheck::{LabelFormatter, LabelZone, SensorCard, SensorType, SummaryItem};
///
/// let item = SummaryItem {
///     temperature: 21.04,
///     trend: -0.3,
///     timestamp: "2025-09-15T08:30:00Z".to_string(),
/// };
/// let formatter = LabelFormatter::new(LabelZone::Utc);
///
/// let card = SensorCard::new(SensorType::Local, Some(&item), formatter);
/// assert_eq!(card.to_string(), "Local Sensor\n21.0°C ↓\n9/15/2025, 8:30:00 AM");
///
/// let empty = SensorCard::new(SensorType::Api, None, formatter);
/// assert_eq!(empty.to_string(), "API Sensor\nNo data available");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SensorCard<'a> {
    sensor_type: SensorType,
    item: Option<&'a SummaryItem>,
    formatter: LabelFormatter,
}

impl<'a> SensorCard<'a> {
    pub fn new(
        sensor_type: SensorType,
        item: Option<&'a SummaryItem>,
        formatter: LabelFormatter,
    ) -> Self {
        Self {
            sensor_type,
            item,
            formatter,
        }
    }

    pub fn sensor_type(&self) -> SensorType {
        self.sensor_type
    }

    pub fn item(&self) -> Option<&'a SummaryItem> {
        self.item
    }
}

impl fmt::Display for SensorCard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.sensor_type.label())?;
        let Some(item) = self.item else {
            return write!(f, "No data available");
        };
        write!(f, "{:.1}°C", item.temperature)?;
        match item.direction() {
            Trend::Rising => write!(f, " ↑")?,
            Trend::Falling => write!(f, " ↓")?,
            Trend::Flat => {}
        }
        write!(f, "\n{}", self.formatter.format(&item.timestamp))
    }
}

/// One card per sensor type, api first. A missing summary renders every card
/// empty.
pub fn sensor_cards<'a>(
    summary: Option<&'a Summary>,
    formatter: LabelFormatter,
) -> [SensorCard<'a>; 2] {
    SensorType::ALL.map(|sensor_type| {
        SensorCard::new(
            sensor_type,
            summary.and_then(|summary| summary.get(sensor_type)),
            formatter,
        )
    })
}

/// The location drop-down, with the selected entry marked by `>`.
#[derive(Debug, Clone, Copy)]
pub struct LocationSelector<'a> {
    locations: &'a [Location],
    selected_sid: &'a str,
}

impl<'a> LocationSelector<'a> {
    pub fn new(locations: &'a [Location], selected_sid: &'a str) -> Self {
        Self {
            locations,
            selected_sid,
        }
    }
}

impl fmt::Display for LocationSelector<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Temperature Checker")?;
        for location in self.locations {
            let marker = if location.sid == self.selected_sid {
                ">"
            } else {
                " "
            };
            write!(f, "\n{} {}", marker, location.name)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::LabelZone;

    fn item(temperature: f64, trend: f64) -> SummaryItem {
        SummaryItem {
            temperature,
            trend,
            timestamp: "2025-09-15T12:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_card_trend_arrows() {
        let formatter = LabelFormatter::new(LabelZone::Utc);
        let rising = item(23.5, 1.2);
        let flat = item(23.5, 0.0);
        let falling = item(23.5, -0.1);

        let render = |item: &SummaryItem| {
            SensorCard::new(SensorType::Api, Some(item), formatter).to_string()
        };
        assert_eq!(render(&rising), "API Sensor\n23.5°C ↑\n9/15/2025, 12:00:00 PM");
        assert_eq!(render(&flat), "API Sensor\n23.5°C\n9/15/2025, 12:00:00 PM");
        assert_eq!(render(&falling), "API Sensor\n23.5°C ↓\n9/15/2025, 12:00:00 PM");
    }

    #[test]
    fn test_card_rounds_to_one_decimal() {
        let formatter = LabelFormatter::new(LabelZone::Utc);
        let whole = item(-2.0, 0.0);
        let card = SensorCard::new(SensorType::Local, Some(&whole), formatter);
        assert!(card.to_string().contains("\n-2.0°C\n"));
    }

    #[test]
    fn test_cards_without_local_reading() {
        let summary = Summary {
            api: Some(item(19.25, 0.5)),
            local: None,
        };
        let [api, local] = sensor_cards(Some(&summary), LabelFormatter::new(LabelZone::Utc));
        assert_eq!(api.sensor_type(), SensorType::Api);
        assert!(api.item().is_some());
        assert_eq!(local.to_string(), "Local Sensor\nNo data available");

        let [api, local] = sensor_cards(None, LabelFormatter::default());
        assert_eq!(api.to_string(), "API Sensor\nNo data available");
        assert_eq!(local.to_string(), "Local Sensor\nNo data available");
    }

    #[test]
    fn test_selector_marks_selection() {
        let locations = vec![
            Location::new("loc1", "Location 1"),
            Location::new("loc2", "Location 2"),
        ];
        let selector = LocationSelector::new(&locations, "loc2");
        assert_eq!(
            selector.to_string(),
            "Temperature Checker\n  Location 1\n> Location 2"
        );
        assert_eq!(
            LocationSelector::new(&[], "").to_string(),
            "Temperature Checker"
        );
    }
}
