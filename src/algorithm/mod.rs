pub mod traits;
pub mod messages;
pub mod dijkstra;
pub mod linear_scan;

pub use messages::Locale;
pub use traits::{PathResult, PathStatus, ShortestPathAlgorithm, ShortestPathTree};

use crate::graph::{Graph, Weight};

/// Shortest route from `start` to `end` using the default algorithm (Dijkstra)
pub fn find_shortest_path<W, G>(graph: &G, start: &str, end: &str) -> PathResult<W>
where
    W: Weight,
    G: Graph<W>,
{
    dijkstra::Dijkstra::new().find_path(graph, start, end)
}
