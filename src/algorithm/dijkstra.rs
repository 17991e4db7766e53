use log::debug;

use crate::algorithm::{Locale, ShortestPathAlgorithm, ShortestPathTree};
use crate::data_structures::DistanceQueue;
use crate::graph::{Graph, Weight};

/// Dijkstra's algorithm over a binary heap with lazy deletion
#[derive(Debug, Default, Clone)]
pub struct Dijkstra {
    locale: Locale,
}

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra::default()
    }

    /// Sets the language of result messages
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Weight,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn locale(&self) -> Locale {
        self.locale
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize, target: Option<usize>) -> ShortestPathTree<W> {
        let n = graph.node_count();
        let mut tree: ShortestPathTree<W> = ShortestPathTree::rooted_at(source, n);
        if source >= n {
            return tree;
        }

        let mut settled = vec![false; n];
        let mut queue = DistanceQueue::new();
        queue.push(source, W::zero());

        while let Some((u, dist_u)) = queue.pop() {
            // Stale entry left behind by a later improvement
            if settled[u] || tree.distances[u].map_or(false, |best| best < dist_u) {
                continue;
            }
            settled[u] = true;

            if Some(u) == target {
                break;
            }

            for (v, weight) in graph.outgoing_edges(u) {
                if settled.get(v).copied().unwrap_or(true) {
                    continue;
                }
                let Some(candidate) = dist_u.checked_add(&weight) else {
                    continue;
                };

                let improves = match tree.distances[v] {
                    None => true,
                    Some(current) => candidate < current,
                };
                if improves {
                    tree.distances[v] = Some(candidate);
                    tree.predecessors[v] = Some(u);
                    queue.push(v, candidate);
                }
            }
        }

        debug!(
            "Dijkstra from {}: {} settled, {} heap pushes",
            source,
            settled.iter().filter(|s| **s).count(),
            queue.pushes()
        );

        tree
    }
}
