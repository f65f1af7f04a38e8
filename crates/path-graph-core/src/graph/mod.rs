//! Weighted graph model.
//!
//! A [`Graph`] holds nodes in insertion order and a flat list of directed
//! arcs. Every undirected edge added through [`Graph::add_edge`] is stored as
//! two opposite [`DirectedArc`]s of equal weight, inserted back to back.
//!
//! The graph is built once and then only borrowed: there are no removal
//! operations, and the shortest-path engine never mutates it.
//!
//! # Adjacency Order
//!
//! Outgoing arcs of a node are returned in the order their edges were added.
//! The engine relaxes arcs in that order, so a fixed edge-insertion sequence
//! always yields the same trace.

mod sample;
mod spec;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, GraphResult};

pub use sample::{sample_graph, sample_spec};
pub use spec::{EdgeSpec, GraphSpec, NodeSpec};

/// Node identity.
pub type NodeId = String;

/// Fixed display coordinates of a node. Not used by the algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A graph node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub position: Position,
}

/// A directed, weighted arc. Weight is always finite and non-negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectedArc {
    pub from: NodeId,
    pub to: NodeId,
    pub weight: f64,
}

/// Node and arc storage with insertion-ordered adjacency.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<Node>,
    index: HashMap<NodeId, usize>,
    arcs: Vec<DirectedArc>,
    /// (from, to) node indices for each arc, parallel to `arcs`.
    arc_ends: Vec<(usize, usize)>,
    /// Arc indices per node, in insertion order.
    adjacency: Vec<Vec<usize>>,
}

impl Graph {
    /// Create an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node.
    ///
    /// # Errors
    /// * `GraphError::DuplicateNode` - `id` is already present
    pub fn add_node(&mut self, id: impl Into<NodeId>, position: Position) -> GraphResult<()> {
        let id = id.into();
        if self.index.contains_key(&id) {
            return Err(GraphError::DuplicateNode { id });
        }
        let idx = self.nodes.len();
        self.index.insert(id.clone(), idx);
        self.nodes.push(Node { id, position });
        self.adjacency.push(Vec::new());
        Ok(())
    }

    /// Add an undirected edge as the two arcs `a -> b` and `b -> a`.
    ///
    /// Validation happens before anything is inserted, so a failed call
    /// leaves the graph unchanged.
    ///
    /// # Errors
    /// * `GraphError::NonFiniteWeight` - weight is NaN or infinite
    /// * `GraphError::NegativeWeight` - weight is below zero
    /// * `GraphError::UnknownNode` - either endpoint is absent
    pub fn add_edge(&mut self, a: &str, b: &str, weight: f64) -> GraphResult<()> {
        if !weight.is_finite() {
            return Err(GraphError::NonFiniteWeight {
                from: a.to_string(),
                to: b.to_string(),
                weight,
            });
        }
        if weight < 0.0 {
            return Err(GraphError::NegativeWeight {
                from: a.to_string(),
                to: b.to_string(),
                weight,
            });
        }
        let ia = self.require(a)?;
        let ib = self.require(b)?;

        self.push_arc(ia, ib, weight);
        self.push_arc(ib, ia, weight);
        Ok(())
    }

    fn require(&self, id: &str) -> GraphResult<usize> {
        self.index_of(id).ok_or_else(|| GraphError::UnknownNode { id: id.to_string() })
    }

    fn push_arc(&mut self, from: usize, to: usize, weight: f64) {
        let arc_idx = self.arcs.len();
        self.arcs.push(DirectedArc {
            from: self.nodes[from].id.clone(),
            to: self.nodes[to].id.clone(),
            weight,
        });
        self.arc_ends.push((from, to));
        self.adjacency[from].push(arc_idx);
    }

    /// Whether `id` is a node of this graph.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Look up a node by id.
    #[must_use]
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.index_of(id).map(|idx| &self.nodes[idx])
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.iter()
    }

    /// Node ids in insertion order.
    pub fn node_ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.nodes.iter().map(|n| n.id.as_str())
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of directed arcs (twice the number of edges added).
    #[must_use]
    pub fn arc_count(&self) -> usize {
        self.arcs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All directed arcs in insertion order.
    #[must_use]
    pub fn arcs(&self) -> &[DirectedArc] {
        &self.arcs
    }

    /// Outgoing arcs of `id` in edge-insertion order. Empty for unknown ids.
    pub fn outgoing(&self, id: &str) -> impl Iterator<Item = &DirectedArc> + '_ {
        let slots: &[usize] = match self.index_of(id) {
            Some(idx) => &self.adjacency[idx],
            None => &[],
        };
        slots.iter().map(move |&arc| &self.arcs[arc])
    }

    /// Number of outgoing arcs of `id`.
    #[must_use]
    pub fn degree(&self, id: &str) -> usize {
        self.index_of(id).map_or(0, |idx| self.adjacency[idx].len())
    }

    /// Each undirected edge once, as its `a -> b` arc.
    pub fn edges(&self) -> impl Iterator<Item = &DirectedArc> + '_ {
        self.arcs.iter().step_by(2)
    }

    /// Weight of the lightest arc `from -> to`, if any.
    ///
    /// With parallel edges the lightest arc is the one a shortest-path
    /// relaxation settles on.
    #[must_use]
    pub fn arc_weight(&self, from: &str, to: &str) -> Option<f64> {
        self.outgoing(from)
            .filter(|arc| arc.to == to)
            .map(|arc| arc.weight)
            .reduce(f64::min)
    }

    pub(crate) fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub(crate) fn node_at(&self, idx: usize) -> &Node {
        &self.nodes[idx]
    }

    /// Outgoing arcs of the node at `idx` with the target's index.
    pub(crate) fn outgoing_at(&self, idx: usize) -> impl Iterator<Item = (usize, &DirectedArc)> + '_ {
        self.adjacency[idx]
            .iter()
            .map(move |&arc| (self.arc_ends[arc].1, &self.arcs[arc]))
    }
}
