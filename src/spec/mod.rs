//! Chart specification building: pure, deterministic mapping from datasets
//! to serializable, rendering-library-agnostic chart descriptions.
//!
//! Every builder validates referential and range invariants up front and
//! fails with [`crate::ChartSpecError::Schema`] instead of repairing its
//! input. Given identical input, a builder always produces a structurally
//! identical [`ChartSpec`].

use std::fmt;

use serde::Serialize;

mod comparison;
mod flow;
mod gauge;
mod matrix;
mod network;
mod series;

pub use comparison::{ComparisonSeries, build_comparison_spec};
pub use flow::{FlowSeries, build_flow_spec};
pub use gauge::{DEFAULT_GAUGE_MAX, GaugeSeries, build_gauge_spec};
pub use matrix::{MatrixSeries, build_matrix_spec};
pub use network::{NetworkSeries, build_network_spec};
pub use series::{MONTHS, build_series_spec, month_categories};

use crate::model::SeriesData;

/// The six supported visualization archetypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Network,
    Flow,
    Matrix,
    Comparison,
    Series,
    Gauge,
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Network => "network",
            Self::Flow => "flow",
            Self::Matrix => "matrix",
            Self::Comparison => "comparison",
            Self::Series => "series",
            Self::Gauge => "gauge",
        };
        f.write_str(name)
    }
}

/// One axis descriptor. Absent fields are omitted from the serialized
/// payload.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct Axis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reversed: Option<bool>,
}

impl Axis {
    #[must_use]
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_categories(categories: Vec<String>) -> Self {
        Self {
            categories: Some(categories),
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn range(min: i64, max: i64) -> Self {
        Self {
            title: None,
            categories: None,
            min: Some(min),
            max: Some(max),
            reversed: None,
        }
    }

    #[must_use]
    pub fn reversed(mut self) -> Self {
        self.reversed = Some(true);
        self
    }
}

/// A value-to-color mapping range for matrix charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorAxis {
    pub min: i64,
    pub max: i64,
}

/// The axes block shared by all chart kinds; kinds without axes (network,
/// flow) leave every field unset.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct Axes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<ColorAxis>,
}

/// Force-layout hints for network charts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LayoutHints {
    pub enable_simulation: bool,
    pub link_length: u32,
    pub gravity: f64,
}

/// One stop of a gauge color scale: a position in `[0, 1]` of the dial
/// range and the color applied from there.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorStop {
    pub position: f64,
    pub color: String,
}

impl ColorStop {
    #[must_use]
    pub fn new(position: f64, color: impl Into<String>) -> Self {
        Self {
            position,
            color: color.into(),
        }
    }
}

/// Display options; per-kind fields are omitted when unset.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct Options {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<LayoutHints>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_stops: Option<Vec<ColorStop>>,
}

impl Options {
    #[must_use]
    pub fn titled(title: &str) -> Self {
        Self {
            title: title.to_string(),
            ..Self::default()
        }
    }
}

/// One entry of the `series` array; the payload shape is fixed per chart
/// kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SeriesEntry {
    Network(NetworkSeries),
    Flow(FlowSeries),
    Matrix(MatrixSeries),
    Comparison(ComparisonSeries),
    Values(SeriesData),
    Gauge(GaugeSeries),
}

/// A complete, validated chart specification.
///
/// The shape is stable across calls for a given kind:
/// `{chart_kind, axes, series, options}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub chart_kind: ChartKind,
    pub axes: Axes,
    pub series: Vec<SeriesEntry>,
    pub options: Options,
}

impl ChartSpec {
    /// Serializes the specification for handoff to a rendering adapter.
    ///
    /// # Errors
    /// Returns an error if serialization fails; the shapes produced by
    /// this crate's builders always serialize.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
