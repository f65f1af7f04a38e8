//! End-to-end tests for the shortest-path engine.
//!
//! # Test Categories
//!
//! 1. Reference scenario (seven-node sample graph)
//! 2. Edge cases (disconnected nodes, unknown ids, single node)
//! 3. Properties over seeded random graphs, checked against an exhaustive
//!    Bellman-Ford reference
//! 4. Shared read-only use across threads

use path_graph_core::{
    compute, contains_edge, path_weight, sample_graph, Graph, GraphError, NodeId, Position,
    TraceEvent,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// ============================================================================
// Helpers
// ============================================================================

/// Random undirected graph with integer weights in [0, 9].
///
/// Integer weights keep every distance exact, so results compare with `==`.
fn random_graph(rng: &mut StdRng) -> Graph {
    let n = rng.gen_range(1..=12);
    let mut graph = Graph::new();
    for i in 0..n {
        graph
            .add_node(format!("n{i}"), Position::new(i, 0))
            .expect("add node");
    }
    let m = rng.gen_range(0..=n * 2);
    for _ in 0..m {
        let a = format!("n{}", rng.gen_range(0..n));
        let b = format!("n{}", rng.gen_range(0..n));
        let w = f64::from(rng.gen_range(0..10_i32));
        graph.add_edge(&a, &b, w).expect("add edge");
    }
    graph
}

/// Bellman-Ford distances, keyed like `Graph::node_ids`.
fn reference_distances(graph: &Graph, source: &str) -> Vec<(String, f64)> {
    let ids: Vec<String> = graph.node_ids().map(str::to_string).collect();
    let pos = |id: &str| ids.iter().position(|x| x == id).expect("known id");
    let mut dist = vec![f64::INFINITY; ids.len()];
    dist[pos(source)] = 0.0;

    for _ in 0..ids.len() {
        let mut changed = false;
        for arc in graph.arcs() {
            let (u, v) = (pos(&arc.from), pos(&arc.to));
            if dist[u] + arc.weight < dist[v] {
                dist[v] = dist[u] + arc.weight;
                changed = true;
            }
        }
        if !changed {
            break;
        }
    }
    ids.into_iter().zip(dist).collect()
}

fn ids(raw: &[&str]) -> Vec<NodeId> {
    raw.iter().map(|s| s.to_string()).collect()
}

// ============================================================================
// 1. Reference scenario
// ============================================================================

#[test]
fn test_sample_scenario_from_a() {
    let graph = sample_graph().expect("sample");
    let result = compute(&graph, "A").expect("compute");

    let expected = [
        ("A", 0.0),
        ("D", 2.0),
        ("B", 4.0),
        ("E", 4.0),
        ("C", 7.0),
        ("G", 5.0),
        ("F", 8.0),
    ];
    for (id, d) in expected {
        assert_eq!(result.distance(id), d, "distance({id})");
    }

    let path = result.path_to("G");
    assert_eq!(path, ids(&["A", "D", "E", "G"]));
    assert_eq!(path_weight(&graph, &path).expect("weight"), 5.0);

    // Edges a renderer would highlight.
    assert!(contains_edge(&path, "A", "D"));
    assert!(contains_edge(&path, "G", "E"));
    assert!(!contains_edge(&path, "B", "E"));
}

#[test]
fn test_sample_scenario_from_every_source_is_symmetric() {
    let graph = sample_graph().expect("sample");
    let results: Vec<_> = graph
        .node_ids()
        .map(|id| compute(&graph, id).expect("compute"))
        .collect();

    // Undirected graph: d(u, v) == d(v, u).
    for ru in &results {
        for rv in &results {
            assert_eq!(
                ru.distance(rv.source()),
                rv.distance(ru.source()),
                "{} <-> {}",
                ru.source(),
                rv.source()
            );
        }
    }
}

// ============================================================================
// 2. Edge cases
// ============================================================================

#[test]
fn test_disconnected_node_is_unreached() {
    let mut graph = sample_graph().expect("sample");
    graph.add_node("H", Position::new(600, 400)).expect("add H");
    let result = compute(&graph, "A").expect("compute");

    assert!(result.distance("H").is_infinite());
    assert!(result.path_to("H").is_empty());
    assert_eq!(result.predecessor("H"), None);
    assert_eq!(result.reached_count(), 7);
    assert_eq!(result.node_count(), 8);
}

#[test]
fn test_disconnected_source_reaches_only_itself() {
    let mut graph = sample_graph().expect("sample");
    graph.add_node("H", Position::new(600, 400)).expect("add H");
    let result = compute(&graph, "H").expect("compute");

    assert_eq!(result.path_to("H"), ids(&["H"]));
    assert!(result.path_to("A").is_empty());
    assert_eq!(result.trace().lines(), vec![
        "Init: set distance(H)=0 and others=INF",
        "Extract min: H (dist=0.0)",
    ]);
}

#[test]
fn test_unknown_source_produces_no_result() {
    let graph = sample_graph().expect("sample");
    match compute(&graph, "nowhere") {
        Err(GraphError::SourceNotFound { id }) => assert_eq!(id, "nowhere"),
        other => panic!("expected SourceNotFound, got {other:?}"),
    }
}

#[test]
fn test_unknown_target_queries_are_total() {
    let graph = sample_graph().expect("sample");
    let result = compute(&graph, "A").expect("compute");
    assert!(result.distance("nowhere").is_infinite());
    assert!(result.path_to("nowhere").is_empty());
}

#[test]
fn test_empty_graph_has_no_sources() {
    let graph = Graph::new();
    assert!(matches!(
        compute(&graph, "A"),
        Err(GraphError::SourceNotFound { .. })
    ));
}

// ============================================================================
// 3. Properties over random graphs
// ============================================================================

#[test]
fn test_optimality_against_reference() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..200 {
        let graph = random_graph(&mut rng);
        let source = graph.node_ids().next().expect("non-empty").to_string();
        let result = compute(&graph, &source).expect("compute");

        for (id, expected) in reference_distances(&graph, &source) {
            assert_eq!(result.distance(&id), expected, "distance({id}) from {source}");
        }
    }
}

#[test]
fn test_source_and_predecessor_invariants() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..200 {
        let graph = random_graph(&mut rng);
        let source = graph.node_ids().last().expect("non-empty").to_string();
        let result = compute(&graph, &source).expect("compute");

        assert_eq!(result.distance(&source), 0.0);
        assert_eq!(result.predecessor(&source), None);

        for id in graph.node_ids() {
            if id == source || !result.is_reachable(id) {
                assert_eq!(result.predecessor(id), None);
                continue;
            }
            let pred = result.predecessor(id).expect("reached node has a predecessor");
            let w = graph.arc_weight(pred, id).expect("predecessor arc exists");
            assert_eq!(result.distance(id), result.distance(pred) + w);
        }
    }
}

#[test]
fn test_paths_match_distances() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let graph = random_graph(&mut rng);
        let source = graph.node_ids().next().expect("non-empty").to_string();
        let result = compute(&graph, &source).expect("compute");

        for target in graph.node_ids() {
            let path = result.path_to(target);
            let d = result.distance(target);
            assert_eq!(path.is_empty(), d.is_infinite(), "path to {target}");
            if path.is_empty() {
                continue;
            }
            assert_eq!(path.first().map(String::as_str), Some(source.as_str()));
            assert_eq!(path.last().map(String::as_str), Some(target));
            assert_eq!(path_weight(&graph, &path).expect("weight"), d);
        }
    }
}

#[test]
fn test_compute_is_idempotent() {
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..50 {
        let graph = random_graph(&mut rng);
        let source = graph.node_ids().next().expect("non-empty").to_string();
        let first = compute(&graph, &source).expect("first");
        let second = compute(&graph, &source).expect("second");

        assert_eq!(
            first.distances().collect::<Vec<_>>(),
            second.distances().collect::<Vec<_>>()
        );
        for id in graph.node_ids() {
            assert_eq!(first.predecessor(id), second.predecessor(id));
        }
        assert_eq!(first.trace(), second.trace());
    }
}

#[test]
fn test_trace_structure() {
    let mut rng = StdRng::seed_from_u64(1234);
    for _ in 0..100 {
        let graph = random_graph(&mut rng);
        let source = graph.node_ids().next().expect("non-empty").to_string();
        let result = compute(&graph, &source).expect("compute");
        let events = result.trace().events();

        assert!(matches!(&events[0], TraceEvent::Init { source: s } if *s == source));

        let mut i = 1;
        while i < events.len() {
            let TraceEvent::Extract { node, distance } = &events[i] else {
                panic!("expected Extract at {i}, got {:?}", events[i]);
            };
            assert_eq!(*distance, result.distance(node));
            i += 1;

            for _ in 0..graph.degree(node) {
                let TraceEvent::RelaxAttempt { from, candidate, current, to, .. } = &events[i] else {
                    panic!("expected RelaxAttempt at {i}, got {:?}", events[i]);
                };
                assert_eq!(from, node);
                i += 1;
                if let Some(TraceEvent::RelaxUpdate { node: updated, distance, predecessor }) =
                    events.get(i)
                {
                    assert!(candidate < current);
                    assert_eq!(updated, to);
                    assert_eq!(predecessor, node);
                    assert_eq!(distance, candidate);
                    i += 1;
                } else {
                    assert!(candidate >= current);
                }
            }
        }

        // Each reached node is extracted exactly once.
        assert_eq!(result.trace().extraction_order().count(), result.reached_count());
    }
}

// ============================================================================
// 4. Shared read-only use
// ============================================================================

#[test]
fn test_parallel_runs_over_shared_graph() {
    let graph = sample_graph().expect("sample");
    let sources: Vec<String> = graph.node_ids().map(str::to_string).collect();

    let results: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = sources
            .iter()
            .map(|s| scope.spawn(|| compute(&graph, s).expect("compute")))
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().expect("thread panicked"))
            .collect()
    });

    for (source, result) in sources.iter().zip(&results) {
        let sequential = compute(&graph, source).expect("compute");
        assert_eq!(result.trace(), sequential.trace());
    }
}

#[test]
fn test_result_shared_between_readers() {
    let graph = sample_graph().expect("sample");
    let result = compute(&graph, "A").expect("compute");

    std::thread::scope(|scope| {
        for target in ["C", "F", "G"] {
            let result = &result;
            scope.spawn(move || {
                assert!(!result.path_to(target).is_empty());
            });
        }
    });
}
