//! Entity types shared by the data simulator and the spec builders.
//!
//! Every entity is created fresh per generation call, is immutable once
//! built, and carries no identity across calls. Serialized field names
//! follow the rendering-engine conventions (`name`, `color`, `data`) and
//! stay stable across releases.

use serde::Serialize;

/// A participant in a network graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    pub id: String,
    #[serde(rename = "name")]
    pub display_name: String,
    /// Influence score, non-negative.
    pub weight: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(rename = "color", skip_serializing_if = "Option::is_none")]
    pub color_hint: Option<String>,
}

impl Node {
    #[must_use]
    pub fn new(id: impl Into<String>, display_name: impl Into<String>, weight: f64) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            weight,
            group: None,
            color_hint: None,
        }
    }

    #[must_use]
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    #[must_use]
    pub fn with_color_hint(mut self, color: impl Into<String>) -> Self {
        self.color_hint = Some(color.into());
        self
    }
}

/// An undirected connection between two nodes.
///
/// Invariant: `source != target`. Self-loop draws are discarded at
/// generation time, never at build time. Parallel edges are valid and
/// represent independent signals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub source: String,
    pub target: String,
}

impl Edge {
    #[must_use]
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

/// A stage in a directed flow diagram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlowNode {
    pub id: String,
    #[serde(rename = "name")]
    pub label: String,
}

impl FlowNode {
    #[must_use]
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// A directed, weighted edge between two declared flow nodes.
///
/// Invariant: `weight > 0`; both endpoints must reference declared
/// [`FlowNode`] ids. Outgoing weights per node have no upper bound.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlowLink {
    pub from: String,
    pub to: String,
    pub weight: f64,
}

impl FlowLink {
    #[must_use]
    pub fn new(from: impl Into<String>, to: impl Into<String>, weight: f64) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            weight,
        }
    }
}

/// One cell of a 2D categorical matrix.
///
/// Invariant: `value` is clamped into `[0, 100]` by the generation
/// formula, regardless of how it was derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MatrixCell {
    pub row: usize,
    pub col: usize,
    pub value: i64,
}

impl MatrixCell {
    #[must_use]
    pub const fn new(row: usize, col: usize, value: i64) -> Self {
        Self { row, col, value }
    }
}

/// One entity positioned on two continuous axes with a third dimension
/// encoded as magnitude.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonPoint {
    /// Horizontal position, non-negative.
    pub x: f64,
    /// Vertical position in `[0, 100]`.
    pub y: f64,
    /// Magnitude, non-negative.
    pub z: f64,
    #[serde(rename = "name")]
    pub label: String,
}

impl ComparisonPoint {
    #[must_use]
    pub fn new(x: f64, y: f64, z: f64, label: impl Into<String>) -> Self {
        Self {
            x,
            y,
            z,
            label: label.into(),
        }
    }
}

/// A named sequence of values sharing one ordered categorical x-axis with
/// its sibling series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeriesData {
    pub name: String,
    #[serde(rename = "data")]
    pub values: Vec<i64>,
    #[serde(rename = "color", skip_serializing_if = "Option::is_none")]
    pub color_hint: Option<String>,
}

impl SeriesData {
    #[must_use]
    pub fn new(name: impl Into<String>, values: Vec<i64>) -> Self {
        Self {
            name: name.into(),
            values,
            color_hint: None,
        }
    }

    #[must_use]
    pub fn with_color_hint(mut self, color: impl Into<String>) -> Self {
        self.color_hint = Some(color.into());
        self
    }
}

/// A single dial reading in `[0, max]` where `max` is configured at build
/// time (default 100).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GaugeReading {
    pub value: i64,
}

impl GaugeReading {
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self { value }
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
