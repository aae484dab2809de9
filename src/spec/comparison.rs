use serde::Serialize;

use crate::error::ChartSpecError;
use crate::model::ComparisonPoint;
use crate::Result;

use super::{Axes, Axis, ChartKind, ChartSpec, Options, SeriesEntry};

const TITLE: &str = "Social Media Platform Comparison";
const X_TITLE: &str = "Monthly Active Users (millions)";
const Y_TITLE: &str = "Privacy Protection Score";

/// Comparison series payload: labeled bubble points, verbatim.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonSeries {
    pub data: Vec<ComparisonPoint>,
}

/// Builds a bubble/scatter comparison specification.
///
/// # Errors
/// Returns `Schema` if any point has `x < 0`, `z < 0`, or `y` outside
/// `[0, 100]`. NaN coordinates fail these checks.
pub fn build_comparison_spec(points: &[ComparisonPoint]) -> Result<ChartSpec> {
    for point in points {
        let in_bounds =
            point.x >= 0.0 && point.z >= 0.0 && (0.0..=100.0).contains(&point.y);
        if !in_bounds {
            return Err(ChartSpecError::schema(
                ChartKind::Comparison,
                format!(
                    "point `{}` ({}, {}, {}) violates axis bounds",
                    point.label, point.x, point.y, point.z
                ),
            ));
        }
    }

    Ok(ChartSpec {
        chart_kind: ChartKind::Comparison,
        axes: Axes {
            x: Some(Axis::titled(X_TITLE)),
            y: Some(Axis::titled(Y_TITLE)),
            color: None,
        },
        series: vec![SeriesEntry::Comparison(ComparisonSeries {
            data: points.to_vec(),
        })],
        options: Options::titled(TITLE),
    })
}

#[cfg(test)]
#[path = "comparison_tests.rs"]
mod tests;
