//! Label-setting (Dijkstra) shortest-path engine.
//!
//! Computes distances and predecessors from one source over a borrowed
//! [`Graph`], recording every decision in a [`Trace`].
//!
//! # Algorithm
//!
//! 1. All distances start at infinity, the source at zero.
//! 2. The frontier holds the source.
//! 3. The closest frontier node is extracted and settled.
//! 4. Each outgoing arc is relaxed in adjacency order; an improvement
//!    updates distance and predecessor and pushes the target again.
//! 5. The run ends when the frontier is empty.
//!
//! Stale frontier entries (a node already settled through a shorter entry)
//! are dropped without a trace entry, so the trace reads exactly as if the
//! frontier supported decrease-key.
//!
//! Weights are finite, but their sum along a path may still exceed
//! `f64::MAX`. A node reachable only through such a sum fails the run with
//! `GraphError::DistanceOverflow` rather than reading as unreached.
//!
//! # Complexity
//!
//! O((V + E) log V) with the binary-heap frontier.

mod cancel;
mod frontier;

use tracing::{debug, trace};

use crate::error::{GraphError, GraphResult};
use crate::graph::Graph;
use crate::result::ShortestPaths;
use crate::trace::{Trace, TraceEvent};

pub use cancel::CancellationToken;
use frontier::Frontier;

/// Options for [`compute_with`].
#[derive(Debug, Clone, Default)]
pub struct ComputeOptions {
    /// Checked at every frontier extraction (None = never cancelled).
    pub cancel: Option<CancellationToken>,
}

impl ComputeOptions {
    /// Builder: attach a cancellation token.
    #[must_use]
    pub fn cancel_with(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }
}

/// Shortest paths from `source` to every node of `graph`.
///
/// # Errors
/// * `GraphError::SourceNotFound` - `source` is not a node of `graph`
///
/// # Example
///
/// ```
/// use path_graph_core::{compute, sample_graph};
///
/// let graph = sample_graph().unwrap();
/// let result = compute(&graph, "A").unwrap();
/// assert_eq!(result.distance("G"), 5.0);
/// assert_eq!(result.path_to("G"), vec!["A", "D", "E", "G"]);
/// ```
pub fn compute(graph: &Graph, source: &str) -> GraphResult<ShortestPaths> {
    compute_with(graph, source, &ComputeOptions::default())
}

/// [`compute`] with explicit options.
///
/// # Errors
/// * `GraphError::SourceNotFound` - `source` is not a node of `graph`
/// * `GraphError::Cancelled` - the token was cancelled before the run ended
/// * `GraphError::DistanceOverflow` - a path weight exceeds `f64::MAX`
#[tracing::instrument(skip(graph, options), fields(nodes = graph.node_count(), arcs = graph.arc_count()))]
pub fn compute_with(
    graph: &Graph,
    source: &str,
    options: &ComputeOptions,
) -> GraphResult<ShortestPaths> {
    run(graph, source, options, |_| {})
}

/// The engine loop. `on_settle` sees the extraction count after each node
/// is settled and relaxed.
pub(crate) fn run(
    graph: &Graph,
    source: &str,
    options: &ComputeOptions,
    mut on_settle: impl FnMut(usize),
) -> GraphResult<ShortestPaths> {
    let src = graph
        .index_of(source)
        .ok_or_else(|| GraphError::SourceNotFound { id: source.to_string() })?;

    let n = graph.node_count();
    let mut distance = vec![f64::INFINITY; n];
    let mut predecessor: Vec<Option<usize>> = vec![None; n];
    let mut settled = vec![false; n];
    let mut log = Trace::new();

    distance[src] = 0.0;
    log.push(TraceEvent::Init {
        source: graph.node_at(src).id.clone(),
    });

    let mut frontier = Frontier::with_capacity(n);
    frontier.push(src, 0.0);
    let mut extractions = 0usize;
    let mut overflowed: Vec<(usize, usize)> = Vec::new();

    while let Some((u, key)) = frontier.pop() {
        if settled[u] {
            trace!(
                node = %graph.node_at(u).id,
                key,
                pending = frontier.len(),
                "Skipping stale frontier entry"
            );
            continue;
        }
        if options.cancel.as_ref().is_some_and(CancellationToken::is_cancelled) {
            debug!(extractions, "Shortest-path run cancelled");
            return Err(GraphError::Cancelled { extractions });
        }

        settled[u] = true;
        extractions += 1;
        let du = distance[u];
        log.push(TraceEvent::Extract {
            node: graph.node_at(u).id.clone(),
            distance: du,
        });

        for (v, arc) in graph.outgoing_at(u) {
            let alt = du + arc.weight;
            if alt.is_infinite() && distance[v].is_infinite() {
                overflowed.push((u, v));
            }
            log.push(TraceEvent::RelaxAttempt {
                from: arc.from.clone(),
                to: arc.to.clone(),
                weight: arc.weight,
                candidate: alt,
                current: distance[v],
            });
            if alt < distance[v] {
                distance[v] = alt;
                predecessor[v] = Some(u);
                frontier.push(v, alt);
                log.push(TraceEvent::RelaxUpdate {
                    node: arc.to.clone(),
                    distance: alt,
                    predecessor: arc.from.clone(),
                });
            }
        }
        on_settle(extractions);
    }
    debug_assert!(frontier.is_empty());

    // A neighbour of a reached node left at INF was only ever offered an
    // overflowed candidate.
    if let Some(&(u, v)) = overflowed.iter().find(|&&(_, v)| distance[v].is_infinite()) {
        return Err(GraphError::DistanceOverflow {
            from: graph.node_at(u).id.clone(),
            to: graph.node_at(v).id.clone(),
        });
    }

    let nodes = graph.node_ids().map(str::to_string).collect();
    let result = ShortestPaths::new(src, nodes, distance, predecessor, log);
    debug!(
        extractions,
        reached = result.reached_count(),
        trace_len = result.trace().len(),
        "Shortest-path run complete"
    );
    Ok(result)
}
