//! Contains the timestamp-aligned multi-series structure handed to the chart.

use crate::types::sensor_type::SensorType;
use serde::Serialize;

/// Line style tension the chart is configured with for every series.
const LINE_TENSION: f64 = 0.1;

/// One line of the temperature chart.
///
/// `data` is aligned index-for-index with [`ChartSeries::labels`]; `None` marks
/// a timestamp with no reading of this series' sensor type and serializes as
/// JSON `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataset {
    #[serde(skip)]
    pub sensor_type: SensorType,
    pub label: &'static str,
    pub data: Vec<Option<f64>>,
    pub border_color: &'static str,
    pub background_color: &'static str,
    pub tension: f64,
}

impl ChartDataset {
    pub fn new(sensor_type: SensorType, data: Vec<Option<f64>>) -> Self {
        Self {
            sensor_type,
            label: sensor_type.label(),
            data,
            border_color: sensor_type.border_color(),
            background_color: sensor_type.background_color(),
            tension: LINE_TENSION,
        }
    }
}

/// Labels plus one dataset per active sensor type, serializable straight into
/// a Chart.js `data` object.
///
/// Every dataset holds exactly `labels.len()` values.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub datasets: Vec<ChartDataset>,
}

impl ChartSeries {
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty() && self.datasets.is_empty()
    }

    pub fn dataset(&self, sensor_type: SensorType) -> Option<&ChartDataset> {
        self.datasets.iter().find(|d| d.sensor_type == sensor_type)
    }
}
