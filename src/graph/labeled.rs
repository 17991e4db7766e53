use crate::graph::traits::{Edge, Graph, MutableGraph, Weight};
use crate::{Error, Result};
use std::collections::HashMap;

/// A directed graph with labeled nodes, stored as an edge list plus adjacency lists
#[derive(Debug, Clone)]
pub struct LabeledGraph<W = u64>
where
    W: Weight,
{
    /// Node labels in insertion order; the position is the node index
    labels: Vec<String>,

    /// label -> node index
    index: HashMap<String, usize>,

    /// Edges in insertion order
    edges: Vec<Edge<W>>,

    /// Outgoing edges for each node: node -> [(target, weight)]
    outgoing: Vec<Vec<(usize, W)>>,
}

impl<W> LabeledGraph<W>
where
    W: Weight,
{
    /// Creates a new empty graph
    pub fn new() -> Self {
        LabeledGraph {
            labels: Vec::new(),
            index: HashMap::new(),
            edges: Vec::new(),
            outgoing: Vec::new(),
        }
    }

    /// Builds a graph from node labels and `(from, to, weight)` triples,
    /// rejecting duplicate labels and edges that name unknown nodes.
    pub fn from_parts<S>(nodes: &[S], edges: &[(S, S, W)]) -> Result<Self>
    where
        S: AsRef<str>,
    {
        let mut graph = LabeledGraph::new();

        for label in nodes {
            let label = label.as_ref();
            if graph.has_node(label) {
                return Err(Error::DuplicateNode(label.to_string()));
            }
            graph.add_node(label);
        }

        for (from, to, weight) in edges {
            let (from, to) = (from.as_ref(), to.as_ref());
            for endpoint in [from, to] {
                if !graph.has_node(endpoint) {
                    return Err(Error::UnknownNode(endpoint.to_string()));
                }
            }
            graph.add_edge(from, to, *weight);
        }

        Ok(graph)
    }

    /// Node labels in insertion order
    pub fn labels(&self) -> &[String] {
        &self.labels
    }
}

impl<W> Default for LabeledGraph<W>
where
    W: Weight,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> Graph<W> for LabeledGraph<W>
where
    W: Weight,
{
    fn node_count(&self) -> usize {
        self.labels.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn outgoing_edges(&self, node: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        match self.outgoing.get(node) {
            Some(edges) => Box::new(edges.iter().copied()),
            None => Box::new(std::iter::empty()),
        }
    }

    fn edges(&self) -> Box<dyn Iterator<Item = Edge<W>> + '_> {
        Box::new(self.edges.iter().copied())
    }

    fn node_index(&self, label: &str) -> Option<usize> {
        self.index.get(label).copied()
    }

    fn node_label(&self, node: usize) -> Option<&str> {
        self.labels.get(node).map(String::as_str)
    }
}

impl<W> MutableGraph<W> for LabeledGraph<W>
where
    W: Weight,
{
    fn add_node(&mut self, label: &str) -> usize {
        if let Some(existing) = self.node_index(label) {
            return existing;
        }

        let id = self.labels.len();
        self.labels.push(label.to_string());
        self.index.insert(label.to_string(), id);
        self.outgoing.push(Vec::new());
        id
    }

    fn add_edge(&mut self, from: &str, to: &str, weight: W) -> bool {
        let (from, to) = match (self.node_index(from), self.node_index(to)) {
            (Some(from), Some(to)) => (from, to),
            _ => return false,
        };

        self.edges.push(Edge { from, to, weight });
        self.outgoing[from].push((to, weight));
        true
    }
}
