use log::debug;

use crate::algorithm::{Locale, ShortestPathAlgorithm, ShortestPathTree};
use crate::graph::{Graph, Weight};

/// Uniform-cost search that selects the next node by scanning every
/// unvisited node. O(V^2), meant for small graphs and for cross-checking.
#[derive(Debug, Default, Clone)]
pub struct LinearScan {
    locale: Locale,
}

impl LinearScan {
    pub fn new() -> Self {
        LinearScan::default()
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// First unvisited node (in index order) with the smallest finite distance
    fn closest_unvisited<W: Weight>(tree: &ShortestPathTree<W>, unvisited: &[bool]) -> Option<usize> {
        let mut closest: Option<(usize, W)> = None;
        for (node, distance) in tree.distances.iter().enumerate() {
            if !unvisited[node] {
                continue;
            }
            if let Some(distance) = *distance {
                if closest.map_or(true, |(_, best)| distance < best) {
                    closest = Some((node, distance));
                }
            }
        }
        closest.map(|(node, _)| node)
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for LinearScan
where
    W: Weight,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "LinearScan"
    }

    fn locale(&self) -> Locale {
        self.locale
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize, target: Option<usize>) -> ShortestPathTree<W> {
        let n = graph.node_count();
        let mut tree: ShortestPathTree<W> = ShortestPathTree::rooted_at(source, n);
        let mut unvisited = vec![true; n];
        let mut rounds = 0;

        while let Some(current) = Self::closest_unvisited(&tree, &unvisited) {
            rounds += 1;
            unvisited[current] = false;

            if Some(current) == target {
                break;
            }

            let Some(dist_current) = tree.distances[current] else {
                break;
            };

            for (neighbor, weight) in graph.outgoing_edges(current) {
                if !unvisited.get(neighbor).copied().unwrap_or(false) {
                    continue;
                }
                let Some(alt) = dist_current.checked_add(&weight) else {
                    continue;
                };
                if tree.distances[neighbor].map_or(true, |d| alt < d) {
                    tree.distances[neighbor] = Some(alt);
                    tree.predecessors[neighbor] = Some(current);
                }
            }
        }

        debug!("LinearScan from {}: {} rounds over {} nodes", source, rounds, n);

        tree
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::PathStatus;
    use crate::graph::LabeledGraph;

    #[test]
    fn test_equal_cost_routes_pick_first_node() {
        // S->A->T and S->B->T both cost 2; A is settled first.
        let graph: LabeledGraph<u64> = LabeledGraph::from_parts(
            &["S", "A", "B", "T"],
            &[("S", "A", 1), ("S", "B", 1), ("A", "T", 1), ("B", "T", 1)],
        )
        .unwrap();

        let result = LinearScan::new().find_path(&graph, "S", "T");
        assert_eq!(result.path, vec!["S", "A", "T"]);
        assert_eq!(result.total_weight, 2);
    }

    #[test]
    fn test_spanish_messages() {
        let graph: LabeledGraph<u64> = LabeledGraph::from_parts(&["S", "T"], &[]).unwrap();
        let scan = LinearScan::new().with_locale(Locale::Es);

        let result = scan.find_path(&graph, "S", "T");
        assert_eq!(result.status, PathStatus::Unreachable);
        assert_eq!(result.message, "No existe una ruta entre los nodos");

        let result = scan.find_path(&graph, "S", "X");
        assert_eq!(result.message, "Uno o ambos nodos no existen");
    }
}
