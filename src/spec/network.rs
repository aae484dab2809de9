use indexmap::IndexSet;
use serde::Serialize;

use crate::error::ChartSpecError;
use crate::model::{Edge, Node};
use crate::Result;

use super::{Axes, ChartKind, ChartSpec, LayoutHints, Options, SeriesEntry};

const TITLE: &str = "Social Network Analysis - Privacy Risk Propagation";
const LINK_LENGTH: u32 = 100;
const GRAVITY: f64 = 0.06;

/// Network series payload: the node roster plus the edge list, verbatim.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetworkSeries {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

/// Builds a network-graph specification.
///
/// # Errors
/// Returns `Schema` if any edge endpoint references an id not present in
/// `nodes`.
pub fn build_network_spec(nodes: &[Node], edges: &[Edge]) -> Result<ChartSpec> {
    let ids: IndexSet<&str> = nodes.iter().map(|n| n.id.as_str()).collect();
    for edge in edges {
        for endpoint in [&edge.source, &edge.target] {
            if !ids.contains(endpoint.as_str()) {
                return Err(ChartSpecError::schema(
                    ChartKind::Network,
                    format!("edge references undeclared node id `{endpoint}`"),
                ));
            }
        }
    }

    Ok(ChartSpec {
        chart_kind: ChartKind::Network,
        axes: Axes::default(),
        series: vec![SeriesEntry::Network(NetworkSeries {
            nodes: nodes.to_vec(),
            edges: edges.to_vec(),
        })],
        options: Options {
            layout: Some(LayoutHints {
                enable_simulation: true,
                link_length: LINK_LENGTH,
                gravity: GRAVITY,
            }),
            ..Options::titled(TITLE)
        },
    })
}

#[cfg(test)]
#[path = "network_tests.rs"]
mod tests;
