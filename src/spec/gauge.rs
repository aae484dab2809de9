use serde::Serialize;

use crate::error::ChartSpecError;
use crate::model::GaugeReading;
use crate::Result;

use super::{Axes, Axis, ChartKind, ChartSpec, ColorStop, Options, SeriesEntry};

const TITLE: &str = "Overall Privacy Risk Score";

/// Dial range upper bound used when the caller has no custom scale.
pub const DEFAULT_GAUGE_MAX: i64 = 100;

/// Low/medium/high thresholds as fractions of the dial range, with the
/// classic green/yellow/red palette.
const COLOR_STOPS: [(f64, &str); 3] = [(0.1, "#55BF3B"), (0.5, "#DDDF0D"), (0.9, "#DF5353")];

/// Gauge series payload: a single reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GaugeSeries {
    pub name: String,
    pub data: Vec<i64>,
}

/// Builds a radial gauge specification.
///
/// # Errors
/// Returns `Schema` if the reading lies outside `[0, max]`.
pub fn build_gauge_spec(reading: GaugeReading, max: i64) -> Result<ChartSpec> {
    if !(0..=max).contains(&reading.value) {
        return Err(ChartSpecError::schema(
            ChartKind::Gauge,
            format!("reading {} is outside [0, {max}]", reading.value),
        ));
    }

    Ok(ChartSpec {
        chart_kind: ChartKind::Gauge,
        axes: Axes {
            x: None,
            y: Some(Axis::range(0, max)),
            color: None,
        },
        series: vec![SeriesEntry::Gauge(GaugeSeries {
            name: "Risk Score".to_string(),
            data: vec![reading.value],
        })],
        options: Options {
            max: Some(max),
            color_stops: Some(
                COLOR_STOPS
                    .iter()
                    .map(|&(position, color)| ColorStop::new(position, color))
                    .collect(),
            ),
            ..Options::titled(TITLE)
        },
    })
}

#[cfg(test)]
#[path = "gauge_tests.rs"]
mod tests;
