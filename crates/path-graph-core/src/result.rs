//! Result of a shortest-path run.

use std::collections::HashMap;

use crate::graph::NodeId;
use crate::trace::Trace;

/// Distances, predecessors and trace of one run from a single source.
///
/// Immutable once returned by the engine. Every node of the graph the run
/// was computed on has an entry; unreached nodes sit at `f64::INFINITY`
/// with no predecessor.
#[derive(Debug, Clone)]
pub struct ShortestPaths {
    source: usize,
    /// Node ids in graph insertion order.
    nodes: Vec<NodeId>,
    index: HashMap<NodeId, usize>,
    distance: Vec<f64>,
    predecessor: Vec<Option<usize>>,
    trace: Trace,
}

impl ShortestPaths {
    pub(crate) fn new(
        source: usize,
        nodes: Vec<NodeId>,
        distance: Vec<f64>,
        predecessor: Vec<Option<usize>>,
        trace: Trace,
    ) -> Self {
        let index = nodes
            .iter()
            .enumerate()
            .map(|(i, id)| (id.clone(), i))
            .collect();
        Self {
            source,
            nodes,
            index,
            distance,
            predecessor,
            trace,
        }
    }

    /// The source node of this run.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.nodes[self.source]
    }

    /// Shortest distance from the source to `id`.
    ///
    /// Never fails: unknown and unreached ids both return `f64::INFINITY`.
    /// Check graph membership separately to tell them apart.
    #[must_use]
    pub fn distance(&self, id: &str) -> f64 {
        self.index
            .get(id)
            .map_or(f64::INFINITY, |&idx| self.distance[idx])
    }

    /// Predecessor of `id` on its shortest path. `None` for the source,
    /// unreached nodes and unknown ids.
    #[must_use]
    pub fn predecessor(&self, id: &str) -> Option<&str> {
        let idx = *self.index.get(id)?;
        self.predecessor[idx].map(|p| self.nodes[p].as_str())
    }

    /// Whether `id` has a finite distance.
    #[must_use]
    pub fn is_reachable(&self, id: &str) -> bool {
        self.distance(id).is_finite()
    }

    /// Shortest path from the source to `target`, both ends included.
    ///
    /// Empty when `target` is unknown or unreached; `[target]` when it is
    /// the source.
    #[must_use]
    pub fn path_to(&self, target: &str) -> Vec<NodeId> {
        let Some(&end) = self.index.get(target) else {
            return Vec::new();
        };
        if !self.distance[end].is_finite() {
            return Vec::new();
        }

        let mut path = vec![self.nodes[end].clone()];
        let mut current = end;
        while let Some(prev) = self.predecessor[current] {
            debug_assert!(path.len() < self.nodes.len(), "predecessor cycle");
            path.push(self.nodes[prev].clone());
            current = prev;
        }
        path.reverse();
        path
    }

    /// `(id, distance)` pairs in graph insertion order.
    pub fn distances(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.nodes
            .iter()
            .zip(self.distance.iter())
            .map(|(id, &d)| (id.as_str(), d))
    }

    /// Number of nodes with a finite distance, the source included.
    #[must_use]
    pub fn reached_count(&self) -> usize {
        self.distance.iter().filter(|d| d.is_finite()).count()
    }

    /// Number of nodes covered by this result.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// The decision log of the run.
    #[must_use]
    pub fn trace(&self) -> &Trace {
        &self.trace
    }
}
