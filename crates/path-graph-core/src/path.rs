//! Queries over a reconstructed path.
//!
//! These are what renderers and archives need on top of
//! [`ShortestPaths::path_to`](crate::ShortestPaths::path_to): the summed
//! weight of a path and whether a given connection lies on it.

use crate::error::{GraphError, GraphResult};
use crate::graph::{Graph, NodeId};

/// Sum of arc weights along consecutive path nodes.
///
/// Empty and single-node paths weigh zero. For parallel edges the lightest
/// arc is used.
///
/// # Errors
/// * `GraphError::MissingArc` - two consecutive nodes are not connected
pub fn path_weight(graph: &Graph, path: &[NodeId]) -> GraphResult<f64> {
    path.windows(2).try_fold(0.0, |total, pair| {
        graph
            .arc_weight(&pair[0], &pair[1])
            .map(|w| total + w)
            .ok_or_else(|| GraphError::MissingArc {
                from: pair[0].clone(),
                to: pair[1].clone(),
            })
    })
}

/// Whether the undirected connection `a`–`b` joins two consecutive path
/// nodes, in either direction.
#[must_use]
pub fn contains_edge(path: &[NodeId], a: &str, b: &str) -> bool {
    path.windows(2)
        .any(|pair| (pair[0] == a && pair[1] == b) || (pair[0] == b && pair[1] == a))
}

/// Join path nodes with `delimiter`, e.g. `"A -> D -> G"`.
#[must_use]
pub fn format_path(path: &[NodeId], delimiter: &str) -> String {
    path.join(delimiter)
}
