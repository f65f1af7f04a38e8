//! Error types for path-graph-core.

use thiserror::Error;

use crate::graph::NodeId;

/// Top-level error type for graph construction, path computation and the
/// configuration layer.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GraphError {
    #[error("Duplicate node: {id}")]
    DuplicateNode { id: NodeId },

    #[error("Unknown node: {id}")]
    UnknownNode { id: NodeId },

    #[error("Negative weight {weight} on edge {from} -> {to}")]
    NegativeWeight {
        from: NodeId,
        to: NodeId,
        weight: f64,
    },

    #[error("Non-finite weight {weight} on edge {from} -> {to}")]
    NonFiniteWeight {
        from: NodeId,
        to: NodeId,
        weight: f64,
    },

    #[error("Source node not found: {id}")]
    SourceNotFound { id: NodeId },

    /// Two consecutive path nodes have no arc between them. A path derived
    /// from a predecessor map never triggers this.
    #[error("No arc between consecutive path nodes {from} -> {to}")]
    MissingArc { from: NodeId, to: NodeId },

    #[error("Computation cancelled after {extractions} extractions")]
    Cancelled { extractions: usize },

    /// A finite distance plus a finite weight exceeded `f64::MAX`.
    #[error("Distance overflow relaxing {from} -> {to}")]
    DistanceOverflow { from: NodeId, to: NodeId },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl GraphError {
    /// True for the failures raised while building a graph.
    pub fn is_invalid_graph(&self) -> bool {
        matches!(
            self,
            GraphError::DuplicateNode { .. }
                | GraphError::UnknownNode { .. }
                | GraphError::NegativeWeight { .. }
                | GraphError::NonFiniteWeight { .. }
        )
    }
}

impl From<config::ConfigError> for GraphError {
    fn from(err: config::ConfigError) -> Self {
        GraphError::Config(err.to_string())
    }
}

/// Result type alias for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
