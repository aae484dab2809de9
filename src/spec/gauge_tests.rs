use crate::ChartSpecError;
use crate::model::GaugeReading;

use super::*;

#[test]
fn single_value_series_with_configured_max() {
    let spec = build_gauge_spec(GaugeReading::new(60), DEFAULT_GAUGE_MAX).unwrap();
    assert_eq!(spec.chart_kind, ChartKind::Gauge);
    let SeriesEntry::Gauge(payload) = &spec.series[0] else {
        panic!("expected a gauge payload");
    };
    assert_eq!(payload.data, vec![60]);
    assert_eq!(spec.options.max, Some(100));
    let y = spec.axes.y.as_ref().unwrap();
    assert_eq!((y.min, y.max), (Some(0), Some(100)));
}

#[test]
fn three_color_stops_at_low_medium_high() {
    let spec = build_gauge_spec(GaugeReading::new(10), DEFAULT_GAUGE_MAX).unwrap();
    let stops = spec.options.color_stops.unwrap();
    assert_eq!(stops.len(), 3);
    let positions: Vec<f64> = stops.iter().map(|s| s.position).collect();
    assert_eq!(positions, vec![0.1, 0.5, 0.9]);
    assert!(stops.iter().all(|s| s.color.starts_with('#')));
}

#[test]
fn reading_above_max_is_rejected() {
    let err = build_gauge_spec(GaugeReading::new(150), 100).unwrap_err();
    assert!(matches!(err, ChartSpecError::Schema { chart: ChartKind::Gauge, .. }));
    assert!(err.to_string().contains("outside [0, 100]"));
}

#[test]
fn negative_reading_is_rejected() {
    assert!(build_gauge_spec(GaugeReading::new(-1), 100).is_err());
}

#[test]
fn boundary_readings_pass() {
    assert!(build_gauge_spec(GaugeReading::new(0), 100).is_ok());
    assert!(build_gauge_spec(GaugeReading::new(100), 100).is_ok());
}

#[test]
fn custom_max_scales_the_dial() {
    let spec = build_gauge_spec(GaugeReading::new(400), 500).unwrap();
    assert_eq!(spec.options.max, Some(500));
    assert!(build_gauge_spec(GaugeReading::new(400), 300).is_err());
}
