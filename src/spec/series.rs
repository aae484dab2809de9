use crate::error::ChartSpecError;
use crate::model::SeriesData;
use crate::Result;

use super::{Axes, Axis, ChartKind, ChartSpec, Options, SeriesEntry};

const TITLE: &str = "Security Incidents Timeline";

/// The stock monthly x-axis.
pub const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

#[must_use]
pub fn month_categories() -> Vec<String> {
    MONTHS.map(String::from).to_vec()
}

/// Builds a multi-series time-series specification over one shared
/// categorical x-axis.
///
/// # Errors
/// Returns `Schema` if any series' value count differs from the category
/// count.
pub fn build_series_spec(categories: &[String], series: &[SeriesData]) -> Result<ChartSpec> {
    for entry in series {
        if entry.values.len() != categories.len() {
            return Err(ChartSpecError::schema(
                ChartKind::Series,
                format!(
                    "series `{}` has {} values for {} categories",
                    entry.name,
                    entry.values.len(),
                    categories.len()
                ),
            ));
        }
    }

    Ok(ChartSpec {
        chart_kind: ChartKind::Series,
        axes: Axes {
            x: Some(Axis::with_categories(categories.to_vec())),
            y: None,
            color: None,
        },
        series: series.iter().cloned().map(SeriesEntry::Values).collect(),
        options: Options::titled(TITLE),
    })
}

#[cfg(test)]
#[path = "series_tests.rs"]
mod tests;
