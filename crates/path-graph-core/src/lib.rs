//! Path Graph Core Library
//!
//! Traceable single-source shortest paths over small weighted, undirected
//! graphs.
//!
//! # Architecture
//!
//! This crate defines:
//! - The graph model (`Graph`, `DirectedArc`, `GraphSpec`)
//! - The label-setting engine (`compute`, `compute_with`)
//! - The immutable result (`ShortestPaths`) and its decision log (`Trace`)
//! - Path queries used by renderers and archives (`path_weight`, `contains_edge`)
//! - Run snapshots (`RunReport`, `RunRecord`)
//! - Error types and configuration
//!
//! # Example
//!
//! ```
//! use path_graph_core::{compute, path_weight, sample_graph};
//!
//! let graph = sample_graph().unwrap();
//! let result = compute(&graph, "A").unwrap();
//! let path = result.path_to("G");
//! assert_eq!(path, vec!["A", "D", "E", "G"]);
//! assert_eq!(path_weight(&graph, &path).unwrap(), 5.0);
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod graph;
pub mod path;
pub mod record;
pub mod report;
pub mod result;
pub mod trace;

// Re-exports for convenience
pub use config::Config;
pub use engine::{compute, compute_with, CancellationToken, ComputeOptions};
pub use error::{GraphError, GraphResult};
pub use graph::{sample_graph, DirectedArc, Graph, GraphSpec, Node, NodeId, Position};
pub use path::{contains_edge, format_path, path_weight};
pub use record::RunRecord;
pub use report::RunReport;
pub use result::ShortestPaths;
pub use trace::{Trace, TraceEvent};
