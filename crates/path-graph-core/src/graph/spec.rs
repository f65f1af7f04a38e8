//! Serializable graph topology.
//!
//! A [`GraphSpec`] is how a topology travels through configuration files:
//!
//! ```toml
//! [[graph.nodes]]
//! id = "A"
//! x = 120
//! y = 80
//!
//! [[graph.edges]]
//! from = "A"
//! to = "B"
//! weight = 4.0
//! ```

use serde::{Deserialize, Serialize};

use super::{Graph, Position};
use crate::error::GraphResult;

/// Node entry of a [`GraphSpec`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeSpec {
    pub id: String,
    #[serde(default)]
    pub x: i32,
    #[serde(default)]
    pub y: i32,
}

/// Undirected edge entry of a [`GraphSpec`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeSpec {
    pub from: String,
    pub to: String,
    pub weight: f64,
}

/// Nodes and undirected edges, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphSpec {
    #[serde(default)]
    pub nodes: Vec<NodeSpec>,
    #[serde(default)]
    pub edges: Vec<EdgeSpec>,
}

impl Graph {
    /// Build a graph from a topology description.
    ///
    /// # Errors
    /// Any construction error of [`Graph::add_node`] or [`Graph::add_edge`],
    /// for the first offending entry.
    pub fn from_spec(spec: &GraphSpec) -> GraphResult<Self> {
        let mut graph = Graph::new();
        for node in &spec.nodes {
            graph.add_node(node.id.clone(), Position::new(node.x, node.y))?;
        }
        for edge in &spec.edges {
            graph.add_edge(&edge.from, &edge.to, edge.weight)?;
        }
        Ok(graph)
    }

    /// Describe this graph as a [`GraphSpec`].
    #[must_use]
    pub fn to_spec(&self) -> GraphSpec {
        GraphSpec {
            nodes: self
                .nodes()
                .map(|n| NodeSpec {
                    id: n.id.clone(),
                    x: n.position.x,
                    y: n.position.y,
                })
                .collect(),
            edges: self
                .edges()
                .map(|a| EdgeSpec {
                    from: a.from.clone(),
                    to: a.to.clone(),
                    weight: a.weight,
                })
                .collect(),
        }
    }
}
