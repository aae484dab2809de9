use indexmap::IndexMap;
use rand::Rng;

use crate::error::ChartSpecError;
use crate::model::{FlowLink, FlowNode};
use crate::Result;

/// How a route's weight is produced: a preset value or a uniform draw.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteWeight {
    Fixed(f64),
    Uniform { lo: f64, hi: f64 },
}

/// One directed route in a flow topology template.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowRoute {
    pub from: String,
    pub to: String,
    pub weight: RouteWeight,
}

impl FlowRoute {
    #[must_use]
    pub fn fixed(from: impl Into<String>, to: impl Into<String>, weight: f64) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            weight: RouteWeight::Fixed(weight),
        }
    }

    #[must_use]
    pub fn uniform(from: impl Into<String>, to: impl Into<String>, lo: f64, hi: f64) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            weight: RouteWeight::Uniform { lo, hi },
        }
    }
}

/// A small directed graph template: declared stages plus weighted routes.
///
/// Flows only move downstream, so the template must be acyclic; cyclic
/// templates are rejected before any weight is drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowTopology {
    pub nodes: Vec<FlowNode>,
    pub routes: Vec<FlowRoute>,
}

impl Default for FlowTopology {
    /// The data-flow ecosystem template: profile, platform, and the
    /// downstream consumers the platform shares with.
    fn default() -> Self {
        Self {
            nodes: vec![
                FlowNode::new("user", "User Profile"),
                FlowNode::new("platform", "Platform"),
                FlowNode::new("advertisers", "Advertisers"),
                FlowNode::new("brokers", "Data Brokers"),
                FlowNode::new("third-parties", "Third Parties"),
            ],
            routes: vec![
                FlowRoute::fixed("user", "platform", 50.0),
                FlowRoute::fixed("platform", "advertisers", 40.0),
                FlowRoute::uniform("platform", "brokers", 10.0, 30.0),
                FlowRoute::uniform("advertisers", "third-parties", 5.0, 20.0),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FlowData {
    pub nodes: Vec<FlowNode>,
    pub links: Vec<FlowLink>,
}

/// Instantiates a flow topology into concrete links.
///
/// # Errors
/// Returns `InvalidParameter` if the topology declares duplicate node ids,
/// routes an undeclared id, carries a non-positive or inverted weight
/// range, or contains a cycle.
pub fn generate_flow<R: Rng>(topology: &FlowTopology, rng: &mut R) -> Result<FlowData> {
    let indices = node_indices(&topology.nodes)?;
    validate_routes(topology, &indices)?;
    ensure_acyclic(topology, &indices)?;

    let links = topology
        .routes
        .iter()
        .map(|route| {
            let weight = match route.weight {
                RouteWeight::Fixed(w) => w,
                RouteWeight::Uniform { lo, hi } => rng.gen_range(lo..=hi),
            };
            FlowLink::new(route.from.clone(), route.to.clone(), weight)
        })
        .collect();

    Ok(FlowData {
        nodes: topology.nodes.clone(),
        links,
    })
}

fn node_indices(nodes: &[FlowNode]) -> Result<IndexMap<&str, usize>> {
    let mut indices = IndexMap::with_capacity(nodes.len());
    for (i, node) in nodes.iter().enumerate() {
        if indices.insert(node.id.as_str(), i).is_some() {
            return Err(ChartSpecError::invalid(
                "topology",
                format!("duplicate node id `{}`", node.id),
            ));
        }
    }
    Ok(indices)
}

fn validate_routes(topology: &FlowTopology, indices: &IndexMap<&str, usize>) -> Result<()> {
    for route in &topology.routes {
        for endpoint in [&route.from, &route.to] {
            if !indices.contains_key(endpoint.as_str()) {
                return Err(ChartSpecError::invalid(
                    "topology",
                    format!("route references undeclared node id `{endpoint}`"),
                ));
            }
        }
        match route.weight {
            RouteWeight::Fixed(w) if w.is_finite() && w > 0.0 => {}
            RouteWeight::Uniform { lo, hi } if lo.is_finite() && hi.is_finite() && lo > 0.0 && lo <= hi => {}
            _ => {
                return Err(ChartSpecError::invalid(
                    "topology",
                    format!("route `{}` -> `{}` must have a positive weight", route.from, route.to),
                ));
            }
        }
    }
    Ok(())
}

/// Kahn's algorithm over the route graph; anything left unvisited sits on
/// a cycle.
fn ensure_acyclic(topology: &FlowTopology, indices: &IndexMap<&str, usize>) -> Result<()> {
    let n = topology.nodes.len();
    let mut in_degree = vec![0_usize; n];
    let mut outgoing: Vec<Vec<usize>> = vec![Vec::new(); n];
    for route in &topology.routes {
        let from = indices[route.from.as_str()];
        let to = indices[route.to.as_str()];
        in_degree[to] += 1;
        outgoing[from].push(to);
    }

    let mut ready: Vec<usize> = (0..n).filter(|&i| in_degree[i] == 0).collect();
    let mut visited = 0;
    while let Some(node) = ready.pop() {
        visited += 1;
        for &next in &outgoing[node] {
            in_degree[next] -= 1;
            if in_degree[next] == 0 {
                ready.push(next);
            }
        }
    }

    if visited < n {
        return Err(ChartSpecError::invalid(
            "topology",
            "routes form a cycle; flows must only move downstream",
        ));
    }
    Ok(())
}

#[cfg(test)]
#[path = "flow_tests.rs"]
mod tests;
