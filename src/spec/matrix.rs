use serde::Serialize;

use crate::error::ChartSpecError;
use crate::model::MatrixCell;
use crate::Result;

use super::{Axes, Axis, ChartKind, ChartSpec, ColorAxis, Options, SeriesEntry};

const TITLE: &str = "Location Privacy Risk Heatmap";
const SCALE_MIN: i64 = 0;
const SCALE_MAX: i64 = 100;

/// Matrix series payload: flattened `[row, col, value]` triples.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatrixSeries {
    pub data: Vec<[i64; 3]>,
}

/// Builds a risk-matrix (heatmap) specification.
///
/// # Errors
/// Returns `Schema` if any cell's indices fall outside the supplied
/// category lists or any cell value lies outside `[0, 100]`. Cells are
/// never clamped here; clamping is a generation concern.
pub fn build_matrix_spec(
    row_categories: &[String],
    col_categories: &[String],
    cells: &[MatrixCell],
) -> Result<ChartSpec> {
    for cell in cells {
        if cell.row >= row_categories.len() || cell.col >= col_categories.len() {
            return Err(ChartSpecError::schema(
                ChartKind::Matrix,
                format!(
                    "cell ({}, {}) is out of bounds for a {}x{} grid",
                    cell.row,
                    cell.col,
                    row_categories.len(),
                    col_categories.len()
                ),
            ));
        }
        if !(SCALE_MIN..=SCALE_MAX).contains(&cell.value) {
            return Err(ChartSpecError::schema(
                ChartKind::Matrix,
                format!("cell ({}, {}) value {} is outside [0, 100]", cell.row, cell.col, cell.value),
            ));
        }
    }

    let data = cells
        .iter()
        .map(|cell| {
            [
                i64::try_from(cell.row).unwrap_or(i64::MAX),
                i64::try_from(cell.col).unwrap_or(i64::MAX),
                cell.value,
            ]
        })
        .collect();

    Ok(ChartSpec {
        chart_kind: ChartKind::Matrix,
        axes: Axes {
            x: Some(Axis::with_categories(row_categories.to_vec())),
            y: Some(Axis::with_categories(col_categories.to_vec()).reversed()),
            color: Some(ColorAxis {
                min: SCALE_MIN,
                max: SCALE_MAX,
            }),
        },
        series: vec![SeriesEntry::Matrix(MatrixSeries { data })],
        options: Options::titled(TITLE),
    })
}

#[cfg(test)]
#[path = "matrix_tests.rs"]
mod tests;
