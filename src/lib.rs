//! Path Finder - shortest routes on small labeled graphs
//!
//! Computes single-source shortest paths between two labeled nodes of a
//! directed graph with non-negative integer weights, and renders the graph
//! as a Mermaid flowchart with the computed route highlighted.

pub mod algorithm;
pub mod config;
pub mod data_structures;
pub mod graph;
pub mod render;
pub mod web;

/// Re-export main types for convenient use
pub use algorithm::{
    dijkstra::Dijkstra, find_shortest_path, linear_scan::LinearScan, Locale, PathResult,
    PathStatus, ShortestPathAlgorithm,
};
pub use graph::{normalize_label, sample::sample_graph, LabeledGraph};
pub use render::{render_diagram, DiagramOptions, Direction};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Edge references unknown node: {0}")]
    UnknownNode(String),

    #[error("Duplicate node label: {0}")]
    DuplicateNode(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
