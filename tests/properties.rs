//! Property tests for the finder invariants over randomly generated DAGs.
//!
//! Edges are forced low-to-high so every generated graph is acyclic and the
//! enumeration terminates regardless of what the strategy produces.

use proptest::prelude::*;

use graph_paths::{find_all_paths, Graph, NodeId};

const NODES: usize = 8;

fn build_dag(edges: &[(NodeId, NodeId)]) -> Graph {
    let mut graph = Graph::new();
    graph.add_nodes(NODES);
    for &(a, b) in edges {
        if a != b {
            // orient every pair low-to-high so no cycle can form
            graph.add_edge(a.min(b), a.max(b));
        }
    }
    graph
}

fn node_set() -> impl Strategy<Value = Vec<NodeId>> {
    proptest::collection::vec(0..NODES, 1..4)
}

fn edge_list() -> impl Strategy<Value = Vec<(NodeId, NodeId)>> {
    proptest::collection::vec((0..NODES, 0..NODES), 0..24)
}

proptest! {
    #[test]
    fn every_result_is_a_simple_path_with_matching_endpoints(
        edges in edge_list(),
        starts in node_set(),
        ends in node_set(),
    ) {
        let graph = build_dag(&edges);
        let paths = find_all_paths(&graph, &starts, &ends).unwrap();

        for path in &paths {
            prop_assert!(starts.contains(&path.start()), "path {path} starts outside the start set");
            prop_assert!(ends.contains(&path.end()), "path {path} ends outside the end set");
            for (i, node) in path.nodes().iter().enumerate() {
                prop_assert!(
                    !path.nodes()[..i].contains(node),
                    "path {} repeats node {}",
                    path,
                    node
                );
            }
        }
    }

    #[test]
    fn consecutive_path_nodes_are_graph_edges(
        edges in edge_list(),
        starts in node_set(),
        ends in node_set(),
    ) {
        let graph = build_dag(&edges);
        let paths = find_all_paths(&graph, &starts, &ends).unwrap();

        for path in &paths {
            for pair in path.nodes().windows(2) {
                prop_assert!(
                    graph.children(pair[0]).contains(&pair[1]),
                    "path {} uses missing edge {} -> {}",
                    path,
                    pair[0],
                    pair[1]
                );
            }
        }
    }

    #[test]
    fn repeated_calls_are_idempotent(
        edges in edge_list(),
        starts in node_set(),
        ends in node_set(),
    ) {
        let graph = build_dag(&edges);

        let first = find_all_paths(&graph, &starts, &ends).unwrap();
        let second = find_all_paths(&graph, &starts, &ends).unwrap();

        prop_assert_eq!(first, second);
    }

    #[test]
    fn edgeless_graphs_only_yield_start_end_overlaps(
        starts in node_set(),
        ends in node_set(),
    ) {
        let graph = build_dag(&[]);
        let paths = find_all_paths(&graph, &starts, &ends).unwrap();

        // without edges, the only possible paths are single nodes in both sets
        for path in &paths {
            prop_assert_eq!(path.len(), 1);
            prop_assert!(starts.contains(&path.start()));
            prop_assert!(ends.contains(&path.start()));
        }
        if starts.iter().all(|s| !ends.contains(s)) {
            prop_assert!(paths.is_empty());
        }
    }
}
