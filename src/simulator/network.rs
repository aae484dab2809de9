use rand::Rng;

use crate::model::{Edge, Node};

/// Community tags with their display palette.
const GROUPS: &[(&str, &str)] = &[
    ("casual", "#7CB5EC"),
    ("influencer", "#F7A35C"),
    ("business", "#90ED7D"),
    ("moderator", "#8085E9"),
];

const WEIGHT_MIN: f64 = 0.5;
const WEIGHT_MAX: f64 = 5.0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkParams {
    pub node_count: usize,
    /// Soft upper bound: self-loop draws are discarded, not retried, so the
    /// generated edge count may be lower.
    pub edge_count: usize,
}

impl Default for NetworkParams {
    fn default() -> Self {
        Self {
            node_count: 15,
            edge_count: 25,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NetworkData {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

/// Generates a bounded random social graph.
///
/// Node weights are uniform in `[0.5, 5.0]`; groups are drawn from a small
/// fixed tag set. Edge endpoints are drawn uniformly over the node id
/// space; a draw where both endpoints coincide is dropped. A zero
/// `node_count` yields an empty dataset (there is no id space to draw
/// edges from).
pub fn generate_network<R: Rng>(params: &NetworkParams, rng: &mut R) -> NetworkData {
    let nodes: Vec<Node> = (0..params.node_count)
        .map(|i| {
            let (group, color) = GROUPS[rng.gen_range(0..GROUPS.len())];
            Node::new(format!("u{i}"), format!("User_{i}"), rng.gen_range(WEIGHT_MIN..=WEIGHT_MAX))
                .with_group(group)
                .with_color_hint(color)
        })
        .collect();

    let mut edges = Vec::with_capacity(params.edge_count);
    if params.node_count > 0 {
        for _ in 0..params.edge_count {
            let source = rng.gen_range(0..params.node_count);
            let target = rng.gen_range(0..params.node_count);
            if source == target {
                continue;
            }
            edges.push(Edge::new(format!("u{source}"), format!("u{target}")));
        }
    }

    NetworkData { nodes, edges }
}

#[cfg(test)]
#[path = "network_tests.rs"]
mod tests;
