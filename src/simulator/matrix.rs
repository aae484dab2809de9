use rand::Rng;

use crate::error::ChartSpecError;
use crate::model::MatrixCell;
use crate::Result;

const VALUE_MIN: i64 = 0;
const VALUE_MAX: i64 = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixParams {
    pub row_categories: Vec<String>,
    pub col_categories: Vec<String>,
    pub baseline: i64,
    /// Added when the row label appears in `weekend_rows`.
    pub weekend_boost: i64,
    /// Added when the column label parses as `HH:MM` with
    /// `HH >= evening_start_hour`.
    pub evening_boost: i64,
    /// Half-width of the uniform jitter interval; must be non-negative.
    pub jitter_range: i64,
    pub weekend_rows: Vec<String>,
    pub evening_start_hour: u32,
}

impl Default for MatrixParams {
    /// Day-of-week by time-of-day risk grid: Mon..Sun against two-hour
    /// slots from 08:00 to 20:00.
    fn default() -> Self {
        Self {
            row_categories: ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]
                .map(String::from)
                .to_vec(),
            col_categories: (8..22).step_by(2).map(|h| format!("{h}:00")).collect(),
            baseline: 55,
            weekend_boost: 20,
            evening_boost: 25,
            jitter_range: 15,
            weekend_rows: ["Sat", "Sun"].map(String::from).to_vec(),
            evening_start_hour: 18,
        }
    }
}

impl MatrixParams {
    fn is_weekend(&self, row: &str) -> bool {
        self.weekend_rows.iter().any(|w| w == row)
    }

    /// Labels that do not parse as `HH:MM` never fall in the evening
    /// window.
    fn is_evening(&self, col: &str) -> bool {
        col.split(':')
            .next()
            .and_then(|h| h.parse::<u32>().ok())
            .is_some_and(|h| h >= self.evening_start_hour)
    }
}

/// Fills the full row x column grid with boosted, jittered risk values.
///
/// Each cell is `baseline`, plus the weekend boost for weekend rows, plus
/// the evening boost for evening columns, plus a uniform draw from
/// `[-jitter_range, +jitter_range]` — all additive terms first, then one
/// clamp into `[0, 100]`. An empty row or column list yields an empty
/// grid.
///
/// # Errors
/// Returns `InvalidParameter` if `jitter_range` is negative.
pub fn generate_matrix<R: Rng>(params: &MatrixParams, rng: &mut R) -> Result<Vec<MatrixCell>> {
    if params.jitter_range < 0 {
        return Err(ChartSpecError::invalid(
            "jitter_range",
            format!("must be non-negative, got {}", params.jitter_range),
        ));
    }

    let mut cells = Vec::with_capacity(params.row_categories.len() * params.col_categories.len());
    for (row, row_label) in params.row_categories.iter().enumerate() {
        for (col, col_label) in params.col_categories.iter().enumerate() {
            let mut value = params.baseline;
            if params.is_weekend(row_label) {
                value += params.weekend_boost;
            }
            if params.is_evening(col_label) {
                value += params.evening_boost;
            }
            value += rng.gen_range(-params.jitter_range..=params.jitter_range);
            cells.push(MatrixCell::new(row, col, value.clamp(VALUE_MIN, VALUE_MAX)));
        }
    }
    Ok(cells)
}

#[cfg(test)]
#[path = "matrix_tests.rs"]
mod tests;
