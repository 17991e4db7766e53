use log::{debug, warn};
use serde::Serialize;
use std::collections::HashSet;

use crate::algorithm::messages::Locale;
use crate::graph::{Graph, Weight};

/// Outcome of a path query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PathStatus {
    Found,
    /// One or both requested labels are not nodes of the graph
    InvalidEndpoint,
    /// Both endpoints exist but no directed route connects them
    Unreachable,
}

/// Result of a single start/end query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathResult<W>
where
    W: Weight,
{
    /// Node labels from start to end, inclusive. Empty on failure.
    pub path: Vec<String>,

    /// Sum of edge weights along `path`. Zero on failure.
    pub total_weight: W,

    pub status: PathStatus,

    /// Human-readable outcome
    pub message: String,
}

impl<W> PathResult<W>
where
    W: Weight,
{
    pub fn found(path: Vec<String>, total_weight: W, locale: Locale) -> Self {
        let message = locale.found(&path, total_weight);
        PathResult {
            path,
            total_weight,
            status: PathStatus::Found,
            message,
        }
    }

    pub fn invalid_endpoint(locale: Locale) -> Self {
        Self::failure(PathStatus::InvalidEndpoint, locale.invalid_endpoint())
    }

    pub fn unreachable(locale: Locale) -> Self {
        Self::failure(PathStatus::Unreachable, locale.unreachable())
    }

    fn failure(status: PathStatus, message: &str) -> Self {
        PathResult {
            path: Vec::new(),
            total_weight: W::zero(),
            status,
            message: message.to_string(),
        }
    }

    pub fn is_found(&self) -> bool {
        self.status == PathStatus::Found
    }
}

/// Distances and predecessors computed from a single source
#[derive(Debug, Clone)]
pub struct ShortestPathTree<W>
where
    W: Weight,
{
    /// Distance from the source to each node, `None` when not reached
    pub distances: Vec<Option<W>>,

    /// Predecessor of each node on its best known route
    pub predecessors: Vec<Option<usize>>,

    pub source: usize,
}

impl<W> ShortestPathTree<W>
where
    W: Weight,
{
    /// A tree with the source at distance zero and nothing else reached.
    /// An out-of-range source leaves every entry empty.
    pub fn rooted_at(source: usize, node_count: usize) -> Self {
        let mut distances = vec![None; node_count];
        if let Some(slot) = distances.get_mut(source) {
            *slot = Some(W::zero());
        }
        ShortestPathTree {
            distances,
            predecessors: vec![None; node_count],
            source,
        }
    }

    pub fn distance(&self, node: usize) -> Option<W> {
        self.distances.get(node).copied().flatten()
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Weight,
    G: Graph<W>,
{
    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Language used for result messages
    fn locale(&self) -> Locale {
        Locale::default()
    }

    /// Compute shortest paths from `source`. When `target` is given the
    /// search may stop as soon as the target is settled.
    fn compute_shortest_paths(&self, graph: &G, source: usize, target: Option<usize>) -> ShortestPathTree<W>;

    /// Get the shortest path from source to target as a sequence of nodes
    fn get_path(&self, tree: &ShortestPathTree<W>, target: usize) -> Option<Vec<usize>> {
        tree.distance(target)?;

        let mut path = vec![target];
        let mut visited = HashSet::from([target]);
        let mut current = target;

        while current != tree.source {
            let pred = (*tree.predecessors.get(current)?)?;
            if !visited.insert(pred) {
                warn!("Cycle detected in path reconstruction at node {}", pred);
                return None;
            }
            path.push(pred);
            current = pred;
        }

        path.reverse();
        Some(path)
    }

    /// Shortest route between two labeled nodes
    fn find_path(&self, graph: &G, start: &str, end: &str) -> PathResult<W> {
        let locale = self.locale();

        let (source, target) = match (graph.node_index(start), graph.node_index(end)) {
            (Some(source), Some(target)) => (source, target),
            _ => {
                debug!("{}: unknown endpoint in {:?} -> {:?}", self.name(), start, end);
                return PathResult::invalid_endpoint(locale);
            }
        };

        let tree = self.compute_shortest_paths(graph, source, Some(target));

        let total_weight = match tree.distance(target) {
            Some(weight) => weight,
            None => {
                debug!("{}: {} is unreachable from {}", self.name(), end, start);
                return PathResult::unreachable(locale);
            }
        };

        let nodes = match self.get_path(&tree, target) {
            Some(nodes) => nodes,
            None => {
                warn!("{}: broken predecessor chain from {} to {}", self.name(), start, end);
                return PathResult::unreachable(locale);
            }
        };

        let path = nodes
            .into_iter()
            .filter_map(|node| graph.node_label(node).map(str::to_string))
            .collect();

        PathResult::found(path, total_weight, locale)
    }
}
