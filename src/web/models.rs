use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::algorithm::{PathResult, PathStatus};
use crate::graph::{Graph, LabeledGraph};

/// A node of the served graph
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebNode {
    pub id: usize,
    pub label: String,
}

/// An edge of the served graph
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebEdge {
    pub source: String,
    pub target: String,
    pub weight: u64,
}

/// The served graph as nodes and links
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebGraph {
    pub nodes: Vec<WebNode>,
    pub links: Vec<WebEdge>,
}

impl From<&LabeledGraph<u64>> for WebGraph {
    fn from(graph: &LabeledGraph<u64>) -> Self {
        let nodes = graph
            .labels()
            .iter()
            .enumerate()
            .map(|(id, label)| WebNode { id, label: label.clone() })
            .collect();

        let links = graph
            .edges()
            .filter_map(|edge| {
                Some(WebEdge {
                    source: graph.node_label(edge.from)?.to_string(),
                    target: graph.node_label(edge.to)?.to_string(),
                    weight: edge.weight,
                })
            })
            .collect();

        WebGraph { nodes, links }
    }
}

/// Start/end pair typed by the user
#[derive(Debug, Clone, Deserialize)]
pub struct PathRequest {
    pub start: String,
    pub end: String,
}

/// Outcome of a path query together with the diagram to display
#[derive(Debug, Clone, Serialize)]
pub struct PathResponse {
    pub path: Vec<String>,
    pub total_weight: u64,
    pub status: PathStatus,
    pub message: String,
    pub diagram: String,
    pub computed_at: DateTime<Utc>,
}

impl PathResponse {
    pub fn new(result: PathResult<u64>, diagram: String) -> Self {
        PathResponse {
            path: result.path,
            total_weight: result.total_weight,
            status: result.status,
            message: result.message,
            diagram,
            computed_at: Utc::now(),
        }
    }
}

/// Error response for API
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: &str, message: impl Into<String>) -> Self {
        ErrorResponse {
            error: error.to_string(),
            message: message.into(),
        }
    }
}

/// A display session holding only the most recent result
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub id: Uuid,
    pub last_result: Option<PathResponse>,
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            last_result: None,
            created_at: Utc::now(),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
