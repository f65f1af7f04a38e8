//! Human-readable run report.
//!
//! A [`RunReport`] is the snapshot an operator sees after a run: the chosen
//! source and target, the path between them, every node's distance and the
//! full decision log.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::{GraphError, GraphResult};
use crate::graph::{Graph, NodeId};
use crate::path::{format_path, path_weight};
use crate::result::ShortestPaths;
use crate::trace::format_distance;

/// Distance of one node, `None` when unreached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeDistance {
    pub id: NodeId,
    pub distance: Option<f64>,
}

/// Snapshot of a run for one target.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub run_at: DateTime<Utc>,
    pub source: NodeId,
    pub target: NodeId,
    /// Distance to the target, `None` when unreachable.
    pub distance: Option<f64>,
    /// Source to target, empty when unreachable.
    pub path: Vec<NodeId>,
    /// Summed arc weights along `path`.
    pub path_weight: f64,
    /// Every node's distance, in graph insertion order.
    pub node_distances: Vec<NodeDistance>,
    /// Formatted trace lines.
    pub trace: Vec<String>,
}

impl RunReport {
    /// Build a report for `target`, timestamped now.
    ///
    /// # Errors
    /// * `GraphError::UnknownNode` - `target` is not a node of `graph`
    /// * `GraphError::MissingArc` - `result` was not computed on `graph`
    pub fn new(graph: &Graph, result: &ShortestPaths, target: &str) -> GraphResult<Self> {
        Self::at(graph, result, target, Utc::now())
    }

    /// Build a report with an explicit timestamp.
    pub fn at(
        graph: &Graph,
        result: &ShortestPaths,
        target: &str,
        run_at: DateTime<Utc>,
    ) -> GraphResult<Self> {
        if !graph.contains(target) {
            return Err(GraphError::UnknownNode { id: target.to_string() });
        }

        let path = result.path_to(target);
        let weight = path_weight(graph, &path)?;
        let finite = |d: f64| d.is_finite().then_some(d);

        Ok(Self {
            run_at,
            source: result.source().to_string(),
            target: target.to_string(),
            distance: finite(result.distance(target)),
            path,
            path_weight: weight,
            node_distances: result
                .distances()
                .map(|(id, d)| NodeDistance {
                    id: id.to_string(),
                    distance: finite(d),
                })
                .collect(),
            trace: result.trace().lines(),
        })
    }

    /// Whether the target was reached.
    #[must_use]
    pub fn is_reachable(&self) -> bool {
        self.distance.is_some()
    }

    /// Render the plain-text report.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dist = |d: Option<f64>| format_distance(d.unwrap_or(f64::INFINITY));
        let path = if self.path.is_empty() {
            "(none)".to_string()
        } else {
            format_path(&self.path, " -> ")
        };

        writeln!(f, "Run at: {}", self.run_at.to_rfc3339())?;
        writeln!(f, "Source: {}", self.source)?;
        writeln!(f, "Target: {}", self.target)?;
        writeln!(f, "Distance to target: {}", dist(self.distance))?;
        writeln!(f, "Path: {path}")?;
        writeln!(f)?;

        writeln!(f, "Node distances:")?;
        for node in &self.node_distances {
            writeln!(f, " {} : {}", node.id, dist(node.distance))?;
        }
        writeln!(f)?;

        writeln!(f, "Detailed relax operations:")?;
        for line in &self.trace {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
