use thiserror::Error;

use crate::spec::ChartKind;

#[derive(Error, Debug)]
pub enum ChartSpecError {
    #[error("Invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("Schema violation in {chart} spec: {reason}")]
    Schema { chart: ChartKind, reason: String },
}

impl ChartSpecError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    pub(crate) fn schema(chart: ChartKind, reason: impl Into<String>) -> Self {
        Self::Schema {
            chart,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ChartSpecError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
