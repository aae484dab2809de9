use rand::Rng;

use crate::error::ChartSpecError;
use crate::model::GaugeReading;
use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GaugeParams {
    pub min: i64,
    pub max: i64,
}

impl Default for GaugeParams {
    fn default() -> Self {
        Self { min: 35, max: 75 }
    }
}

/// Draws one integer uniformly from `[min, max]`.
///
/// # Errors
/// Returns `InvalidParameter` if `min` is negative or exceeds `max`.
pub fn generate_gauge<R: Rng>(params: &GaugeParams, rng: &mut R) -> Result<GaugeReading> {
    if params.min < 0 {
        return Err(ChartSpecError::invalid(
            "min",
            format!("must be non-negative, got {}", params.min),
        ));
    }
    if params.min > params.max {
        return Err(ChartSpecError::invalid(
            "min",
            format!("must not exceed max ({} > {})", params.min, params.max),
        ));
    }
    Ok(GaugeReading::new(rng.gen_range(params.min..=params.max)))
}

#[cfg(test)]
#[path = "gauge_tests.rs"]
mod tests;
