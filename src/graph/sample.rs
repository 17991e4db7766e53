use crate::graph::{LabeledGraph, MutableGraph};

/// Node labels of the demo graph
pub const SAMPLE_NODES: [&str; 10] = ["A", "B", "C", "D", "E", "F", "G", "H", "I", "J"];

/// Edges of the demo graph as (from, to, weight)
pub const SAMPLE_EDGES: [(&str, &str, u64); 5] = [
    ("A", "B", 4),
    ("A", "C", 2),
    ("A", "D", 7),
    ("A", "E", 9),
    ("A", "F", 12),
];

/// The ten-node demo graph: A fans out to B..F, G..J are isolated.
pub fn sample_graph() -> LabeledGraph<u64> {
    let mut graph = LabeledGraph::new();

    for label in SAMPLE_NODES {
        graph.add_node(label);
    }
    for (from, to, weight) in SAMPLE_EDGES {
        graph.add_edge(from, to, weight);
    }

    graph
}
