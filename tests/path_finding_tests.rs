use path_finder::algorithm::{PathResult, PathStatus, ShortestPathAlgorithm};
use path_finder::graph::{Graph, LabeledGraph, MutableGraph};
use path_finder::{find_shortest_path, sample_graph, Dijkstra, LinearScan};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// Test helper to build a random directed graph with labels N0, N1, ...
fn random_graph(rng: &mut StdRng, nodes: usize, edge_chance: f64) -> LabeledGraph<u64> {
    let mut graph = LabeledGraph::new();
    for i in 0..nodes {
        graph.add_node(&format!("N{}", i));
    }

    for u in 0..nodes {
        for v in 0..nodes {
            if u != v && rng.gen_bool(edge_chance) {
                graph.add_edge(&format!("N{}", u), &format!("N{}", v), rng.gen_range(0..20));
            }
        }
    }

    graph
}

// Cheapest simple path by exhaustive search
fn brute_force_best(graph: &LabeledGraph<u64>, current: usize, target: usize, visited: &mut Vec<bool>) -> Option<u64> {
    if current == target {
        return Some(0);
    }
    visited[current] = true;

    let mut best: Option<u64> = None;
    for (next, weight) in graph.outgoing_edges(current) {
        if visited[next] {
            continue;
        }
        if let Some(rest) = brute_force_best(graph, next, target, visited) {
            let total = weight + rest;
            best = Some(best.map_or(total, |b| b.min(total)));
        }
    }

    visited[current] = false;
    best
}

fn path_weight(graph: &LabeledGraph<u64>, result: &PathResult<u64>) -> u64 {
    result
        .path
        .windows(2)
        .map(|pair| {
            let from = graph.node_index(&pair[0]).unwrap();
            let to = graph.node_index(&pair[1]).unwrap();
            graph.get_edge_weight(from, to).expect("path should only use existing edges")
        })
        .sum()
}

#[test]
fn test_sample_direct_edge() {
    let graph = sample_graph();
    let result = find_shortest_path(&graph, "A", "F");

    assert_eq!(result.status, PathStatus::Found);
    assert_eq!(result.path, vec!["A", "F"]);
    assert_eq!(result.total_weight, 12);
    assert_eq!(result.message, "Shortest route found: A → F (total weight: 12)");
}

#[test]
fn test_sample_node_without_incoming_edges_is_unreachable() {
    let graph = sample_graph();
    let result = find_shortest_path(&graph, "A", "G");

    assert_eq!(result.status, PathStatus::Unreachable);
    assert!(result.path.is_empty());
    assert_eq!(result.total_weight, 0);
    assert_eq!(result.message, "No route exists between the nodes");
}

#[test]
fn test_sample_unknown_node_is_invalid_endpoint() {
    let graph = sample_graph();

    for (start, end) in [("Z", "A"), ("A", "Z"), ("", "A")] {
        let result = find_shortest_path(&graph, start, end);
        assert_eq!(result.status, PathStatus::InvalidEndpoint);
        assert!(result.path.is_empty());
        assert_eq!(result.total_weight, 0);
        assert_eq!(result.message, "One or both nodes do not exist");
    }
}

#[test]
fn test_sample_edges_are_directed() {
    let graph = sample_graph();
    let result = find_shortest_path(&graph, "F", "A");
    assert_eq!(result.status, PathStatus::Unreachable);
}

#[test]
fn test_start_equals_end() {
    let graph = sample_graph();

    for label in ["A", "G", "J"] {
        let result = find_shortest_path(&graph, label, label);
        assert_eq!(result.status, PathStatus::Found);
        assert_eq!(result.path, vec![label]);
        assert_eq!(result.total_weight, 0);
    }
}

#[test]
fn test_multi_hop_route_beats_direct_edge() {
    let graph: LabeledGraph<u64> = LabeledGraph::from_parts(
        &["A", "B", "C", "D"],
        &[("A", "D", 10), ("A", "B", 1), ("B", "C", 2), ("C", "D", 3), ("B", "D", 8)],
    )
    .unwrap();

    let result = find_shortest_path(&graph, "A", "D");
    assert_eq!(result.path, vec!["A", "B", "C", "D"]);
    assert_eq!(result.total_weight, 6);
    assert_eq!(path_weight(&graph, &result), 6);
}

#[test]
fn test_zero_weight_edges() {
    let graph: LabeledGraph<u64> = LabeledGraph::from_parts(&["A", "B", "C"], &[("A", "B", 0), ("B", "C", 0)]).unwrap();

    let result = find_shortest_path(&graph, "A", "C");
    assert_eq!(result.path, vec!["A", "B", "C"]);
    assert_eq!(result.total_weight, 0);
}

// Weight is the literal sum along the path and no cheaper route exists
#[test]
fn test_random_graphs_are_optimal() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..40 {
        let nodes = rng.gen_range(2..8);
        let graph = random_graph(&mut rng, nodes, 0.3);

        for s in 0..nodes {
            for e in 0..nodes {
                let start = format!("N{}", s);
                let end = format!("N{}", e);
                let result = find_shortest_path(&graph, &start, &end);
                let expected = brute_force_best(&graph, s, e, &mut vec![false; nodes]);

                match expected {
                    Some(best) => {
                        assert_eq!(result.status, PathStatus::Found, "{} -> {}", start, end);
                        assert_eq!(result.total_weight, best, "{} -> {}", start, end);
                        assert_eq!(path_weight(&graph, &result), best);
                        assert_eq!(result.path.first(), Some(&start));
                        assert_eq!(result.path.last(), Some(&end));
                    }
                    None => {
                        assert_eq!(result.status, PathStatus::Unreachable, "{} -> {}", start, end);
                        assert!(result.path.is_empty());
                    }
                }
            }
        }
    }
}

// Heap-based and linear-scan searches agree on every query, including tie-breaks
#[test]
fn test_dijkstra_matches_linear_scan() {
    let mut rng = StdRng::seed_from_u64(42);
    let dijkstra = Dijkstra::new();
    let scan = LinearScan::new();

    for _ in 0..40 {
        let nodes = rng.gen_range(1..10);
        let graph = random_graph(&mut rng, nodes, 0.35);

        for s in 0..nodes {
            for e in 0..nodes {
                let start = format!("N{}", s);
                let end = format!("N{}", e);
                let heap_result = dijkstra.find_path(&graph, &start, &end);
                let scan_result = scan.find_path(&graph, &start, &end);
                assert_eq!(heap_result, scan_result, "{} -> {}", start, end);
            }
        }
    }
}

#[test]
fn test_full_tree_without_target() {
    let graph = sample_graph();
    let source = graph.node_index("A").unwrap();
    let tree = <Dijkstra as ShortestPathAlgorithm<u64, LabeledGraph<u64>>>::compute_shortest_paths(
        &Dijkstra::new(),
        &graph,
        source,
        None,
    );

    let reached: Vec<_> = tree.distances.iter().map(|d| d.is_some()).collect();
    assert_eq!(
        reached,
        vec![true, true, true, true, true, true, false, false, false, false]
    );
    assert_eq!(tree.distance(graph.node_index("D").unwrap()), Some(7));
}
