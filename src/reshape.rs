//! Re-buckets raw readings into a timestamp-aligned [`ChartSeries`].

use crate::format::LabelFormatter;
use crate::types::chart::{ChartDataset, ChartSeries};
use crate::types::reading::RawReading;
use crate::types::sensor_type::SensorType;
use std::collections::HashMap;

/// Groups `readings` by their raw timestamp string and emits one aligned
/// dataset per active sensor type.
///
/// * Labels are the distinct timestamps in the order they first appear in
///   `readings`, passed through `formatter`. They are not sorted.
/// * Datasets follow [`SensorType::ALL`] order regardless of the order of
///   `active_types`; inactive types get no dataset at all.
/// * `data[i]` is the temperature of that type at `labels[i]`, or `None` when
///   there was no such reading. A repeated `(timestamp, type)` keeps the last
///   value.
/// * No readings means an empty series, whatever `active_types` holds.
///
/// # Examples
///
/// ```
/// use tempcheck::{reshape_readings, LabelFormatter, LabelZone, RawReading, SensorType};
///
/// let readings = vec![
///     RawReading::new("2025-09-15T10:00:00Z", SensorType::Api, 23.5),
///     RawReading::new("2025-09-15T11:00:00Z", SensorType::Api, 24.0),
///     RawReading::new("2025-09-15T10:00:00Z", SensorType::Local, 22.0),
/// ];
/// let series = reshape_readings(
///     &readings,
///     &[SensorType::Api, SensorType::Local],
///     &LabelFormatter::new(LabelZone::Utc),
/// );
/// assert_eq!(series.labels, ["9/15/2025, 10:00:00 AM", "9/15/2025, 11:00:00 AM"]);
/// assert_eq!(series.datasets[1].data, [Some(22.0), None]);
/// ```
pub fn reshape_readings(
    readings: &[RawReading],
    active_types: &[SensorType],
    formatter: &LabelFormatter,
) -> ChartSeries {
    if readings.is_empty() {
        return ChartSeries::default();
    }

    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut buckets: Vec<(&str, [Option<f64>; SensorType::ALL.len()])> = Vec::new();
    for reading in readings {
        let slot = *slots.entry(reading.timestamp.as_str()).or_insert_with(|| {
            buckets.push((reading.timestamp.as_str(), [None; SensorType::ALL.len()]));
            buckets.len() - 1
        });
        buckets[slot].1[reading.sensor_type.index()] = Some(reading.temperature);
    }

    let labels = buckets
        .iter()
        .map(|(timestamp, _)| formatter.format(timestamp))
        .collect();

    let datasets = SensorType::ALL
        .into_iter()
        .filter(|sensor_type| active_types.contains(sensor_type))
        .map(|sensor_type| {
            let data = buckets
                .iter()
                .map(|(_, values)| values[sensor_type.index()])
                .collect();
            ChartDataset::new(sensor_type, data)
        })
        .collect();

    ChartSeries { labels, datasets }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::LabelZone;

    fn utc() -> LabelFormatter {
        LabelFormatter::new(LabelZone::Utc)
    }

    fn reading(timestamp: &str, sensor_type: SensorType, temperature: f64) -> RawReading {
        RawReading::new(timestamp, sensor_type, temperature)
    }

    fn assert_aligned(series: &ChartSeries) {
        for dataset in &series.datasets {
            assert_eq!(
                dataset.data.len(),
                series.labels.len(),
                "dataset '{}' is not aligned with the labels",
                dataset.label
            );
        }
    }

    #[test]
    fn test_two_types_with_a_gap() {
        let readings = vec![
            reading("2025-09-15T10:00:00Z", SensorType::Api, 23.5),
            reading("2025-09-15T11:00:00Z", SensorType::Api, 24.0),
            reading("2025-09-15T10:00:00Z", SensorType::Local, 22.0),
        ];
        let series = reshape_readings(&readings, &[SensorType::Api, SensorType::Local], &utc());

        assert_eq!(
            series.labels,
            vec!["9/15/2025, 10:00:00 AM", "9/15/2025, 11:00:00 AM"]
        );
        assert_eq!(series.datasets.len(), 2);
        assert_eq!(series.datasets[0].label, "API Sensor");
        assert_eq!(series.datasets[0].data, vec![Some(23.5), Some(24.0)]);
        assert_eq!(series.datasets[1].label, "Local Sensor");
        assert_eq!(series.datasets[1].data, vec![Some(22.0), None]);
        assert_aligned(&series);
    }

    #[test]
    fn test_labels_keep_arrival_order() {
        let readings = vec![
            reading("2025-09-15T12:00:00Z", SensorType::Api, 1.0),
            reading("2025-09-15T09:00:00Z", SensorType::Local, 2.0),
            reading("2025-09-15T11:00:00Z", SensorType::Api, 3.0),
            reading("2025-09-15T09:00:00Z", SensorType::Api, 4.0),
        ];
        let series = reshape_readings(&readings, &SensorType::ALL, &utc());

        assert_eq!(
            series.labels,
            vec![
                "9/15/2025, 12:00:00 PM",
                "9/15/2025, 9:00:00 AM",
                "9/15/2025, 11:00:00 AM",
            ]
        );
        assert_eq!(series.datasets[0].data, vec![Some(1.0), Some(4.0), Some(3.0)]);
        assert_eq!(series.datasets[1].data, vec![None, Some(2.0), None]);
        assert_aligned(&series);
    }

    #[test]
    fn test_missing_slots_are_none_not_zero() {
        let readings = vec![
            reading("2025-09-15T10:00:00Z", SensorType::Api, 22.5),
            reading("2025-09-15T11:00:00Z", SensorType::Local, 23.0),
            reading("2025-09-15T12:00:00Z", SensorType::Local, 0.0),
        ];
        let series = reshape_readings(&readings, &SensorType::ALL, &utc());

        assert_eq!(series.datasets[0].data, vec![Some(22.5), None, None]);
        // a real zero degree reading stays a value
        assert_eq!(series.datasets[1].data, vec![None, Some(23.0), Some(0.0)]);
        assert_aligned(&series);
    }

    #[test]
    fn test_inactive_types_are_omitted() {
        let readings = vec![
            reading("2025-09-15T10:00:00Z", SensorType::Api, 22.5),
            reading("2025-09-15T10:00:00Z", SensorType::Local, 22.0),
        ];

        let only_local = reshape_readings(&readings, &[SensorType::Local], &utc());
        assert_eq!(only_local.datasets.len(), 1);
        assert_eq!(only_local.datasets[0].sensor_type, SensorType::Local);
        assert_eq!(only_local.labels.len(), 1);

        let none_active = reshape_readings(&readings, &[], &utc());
        assert!(none_active.datasets.is_empty());
        assert_eq!(none_active.labels.len(), 1);
    }

    #[test]
    fn test_dataset_order_ignores_active_type_order() {
        let readings = vec![reading("2025-09-15T10:00:00Z", SensorType::Local, 22.0)];
        let series = reshape_readings(&readings, &[SensorType::Local, SensorType::Api], &utc());
        let order: Vec<SensorType> = series.datasets.iter().map(|d| d.sensor_type).collect();
        assert_eq!(order, vec![SensorType::Api, SensorType::Local]);
        assert_eq!(series.datasets[0].data, vec![None]);
    }

    #[test]
    fn test_empty_readings_give_empty_series() {
        for active in [&SensorType::ALL[..], &[SensorType::Api][..], &[][..]] {
            let series = reshape_readings(&[], active, &utc());
            assert_eq!(series, ChartSeries::default());
        }
    }

    #[test]
    fn test_duplicate_reading_keeps_last_value() {
        let readings = vec![
            reading("2025-09-15T10:00:00Z", SensorType::Api, 20.0),
            reading("2025-09-15T10:00:00Z", SensorType::Api, 21.0),
        ];
        let series = reshape_readings(&readings, &[SensorType::Api], &utc());
        assert_eq!(series.labels.len(), 1);
        assert_eq!(series.datasets[0].data, vec![Some(21.0)]);
    }

    #[test]
    fn test_alignment_holds_for_uneven_series() {
        let mut readings = Vec::new();
        for hour in 0..24 {
            let timestamp = format!("2025-09-15T{hour:02}:00:00Z");
            readings.push(reading(&timestamp, SensorType::Api, hour as f64));
            if hour % 3 == 0 {
                readings.push(reading(&timestamp, SensorType::Local, hour as f64 / 2.0));
            }
        }
        let series = reshape_readings(&readings, &SensorType::ALL, &utc());
        assert_eq!(series.labels.len(), 24);
        assert_aligned(&series);
        let local = series.dataset(SensorType::Local).unwrap();
        assert_eq!(local.data.iter().filter(|v| v.is_some()).count(), 8);
    }
}
