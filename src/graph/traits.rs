use std::fmt::{Debug, Display};
use num_traits::{PrimInt, Unsigned};

/// Edge weight: a non-negative integer
pub trait Weight: PrimInt + Unsigned + Debug + Display {}

impl<T> Weight for T where T: PrimInt + Unsigned + Debug + Display {}

/// A directed edge between two node indices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge<W> {
    pub from: usize,
    pub to: usize,
    pub weight: W,
}

/// Trait representing a weighted directed graph whose nodes carry labels
pub trait Graph<W>: Debug
where
    W: Weight,
{
    /// Returns the number of nodes in the graph
    fn node_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the outgoing edges from a node, in insertion order
    fn outgoing_edges(&self, node: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Returns an iterator over every edge, in insertion order
    fn edges(&self) -> Box<dyn Iterator<Item = Edge<W>> + '_>;

    /// Looks up the index of a node by its label
    fn node_index(&self, label: &str) -> Option<usize>;

    /// Returns the label of a node
    fn node_label(&self, node: usize) -> Option<&str>;

    /// Returns true if a node with this label exists
    fn has_node(&self, label: &str) -> bool {
        self.node_index(label).is_some()
    }

    /// Gets the weight of an edge if it exists
    fn get_edge_weight(&self, from: usize, to: usize) -> Option<W> {
        self.outgoing_edges(from)
            .find(|(target, _)| *target == to)
            .map(|(_, weight)| weight)
    }
}

/// Trait for building up a graph before it is shared
pub trait MutableGraph<W>: Graph<W>
where
    W: Weight,
{
    /// Adds a node and returns its index; an existing label keeps its index
    fn add_node(&mut self, label: &str) -> usize;

    /// Adds a directed edge between two labeled nodes.
    /// Returns false if either endpoint is missing.
    fn add_edge(&mut self, from: &str, to: &str, weight: W) -> bool;
}
