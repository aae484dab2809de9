use indexmap::IndexSet;
use serde::Serialize;

use crate::error::ChartSpecError;
use crate::model::{FlowLink, FlowNode};
use crate::Result;

use super::{Axes, ChartKind, ChartSpec, Options, SeriesEntry};

const TITLE: &str = "Data Flow in Social Media Ecosystem";

/// Flow series payload: declared stages plus weight-keyed links.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlowSeries {
    pub keys: Vec<String>,
    pub nodes: Vec<FlowNode>,
    pub links: Vec<FlowLink>,
}

/// Builds a flow-diagram specification.
///
/// # Errors
/// Returns `Schema` if any link endpoint is undeclared or any link weight
/// is non-positive (or non-finite).
pub fn build_flow_spec(nodes: &[FlowNode], links: &[FlowLink]) -> Result<ChartSpec> {
    let ids: IndexSet<&str> = nodes.iter().map(|n| n.id.as_str()).collect();
    for link in links {
        for endpoint in [&link.from, &link.to] {
            if !ids.contains(endpoint.as_str()) {
                return Err(ChartSpecError::schema(
                    ChartKind::Flow,
                    format!("link references undeclared node id `{endpoint}`"),
                ));
            }
        }
        if link.weight <= 0.0 || !link.weight.is_finite() {
            return Err(ChartSpecError::schema(
                ChartKind::Flow,
                format!(
                    "link `{}` -> `{}` has non-positive weight {}",
                    link.from, link.to, link.weight
                ),
            ));
        }
    }

    Ok(ChartSpec {
        chart_kind: ChartKind::Flow,
        axes: Axes::default(),
        series: vec![SeriesEntry::Flow(FlowSeries {
            keys: ["from", "to", "weight"].map(String::from).to_vec(),
            nodes: nodes.to_vec(),
            links: links.to_vec(),
        })],
        options: Options::titled(TITLE),
    })
}

#[cfg(test)]
#[path = "flow_tests.rs"]
mod tests;
