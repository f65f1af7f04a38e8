//! The fixed seven-node demonstration topology.
//!
//! Nodes A..G with ten undirected edges. Coordinates are the canvas positions
//! of the desktop visualizer this topology was drawn for.

use super::{EdgeSpec, Graph, GraphSpec, NodeSpec};
use crate::error::GraphResult;

const NODES: [(&str, i32, i32); 7] = [
    ("A", 120, 80),
    ("B", 280, 60),
    ("C", 440, 80),
    ("D", 200, 220),
    ("E", 360, 220),
    ("F", 80, 340),
    ("G", 440, 340),
];

const EDGES: [(&str, &str, f64); 10] = [
    ("A", "B", 4.0),
    ("A", "D", 2.0),
    ("B", "C", 3.0),
    ("B", "D", 5.0),
    ("C", "E", 7.0),
    ("D", "E", 2.0),
    ("D", "F", 6.0),
    ("E", "G", 1.0),
    ("F", "G", 8.0),
    ("B", "E", 4.0),
];

/// Topology description of the demonstration graph.
#[must_use]
pub fn sample_spec() -> GraphSpec {
    GraphSpec {
        nodes: NODES
            .iter()
            .map(|&(id, x, y)| NodeSpec { id: id.to_string(), x, y })
            .collect(),
        edges: EDGES
            .iter()
            .map(|&(from, to, weight)| EdgeSpec {
                from: from.to_string(),
                to: to.to_string(),
                weight,
            })
            .collect(),
    }
}

/// Build the demonstration graph.
pub fn sample_graph() -> GraphResult<Graph> {
    Graph::from_spec(&sample_spec())
}
