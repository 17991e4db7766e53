//! Mermaid flowchart rendering of a graph with a highlighted route.
//!
//! The output looks like
//!
//! ```text
//! graph LR;
//!     A((A))==>|12|F((F));
//!     A((A))-->|4|B((B));
//!     style A fill:#f96
//!     style F fill:#f96
//! ```
//!
//! An edge `X -> Y` uses the thick `==>` arrow when `Y` directly follows `X`
//! on the route; every node on the route gets a `style` line.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;

use crate::graph::{Edge, Graph, Weight};
use crate::Error;

/// Default fill color of highlighted nodes
pub const DEFAULT_HIGHLIGHT_FILL: &str = "#f96";

/// Flowchart layout direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Left to right
    #[default]
    LR,
    /// Top down
    TD,
    /// Right to left
    RL,
    /// Bottom to top
    BT,
}

impl Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            Direction::LR => "LR",
            Direction::TD => "TD",
            Direction::RL => "RL",
            Direction::BT => "BT",
        };
        f.write_str(code)
    }
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "LR" => Ok(Direction::LR),
            "TD" | "TB" => Ok(Direction::TD),
            "RL" => Ok(Direction::RL),
            "BT" => Ok(Direction::BT),
            other => Err(Error::InvalidConfig(format!("unknown diagram direction: {}", other))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagramOptions {
    pub direction: Direction,
    pub highlight_fill: String,
}

impl Default for DiagramOptions {
    fn default() -> Self {
        DiagramOptions {
            direction: Direction::LR,
            highlight_fill: DEFAULT_HIGHLIGHT_FILL.to_string(),
        }
    }
}

/// Renders `graph` with `highlighted_path` emphasized, using default options
pub fn render_diagram<W, G, S>(graph: &G, highlighted_path: &[S]) -> String
where
    W: Weight,
    G: Graph<W>,
    S: AsRef<str>,
{
    render_diagram_with(graph, highlighted_path, &DiagramOptions::default())
}

pub fn render_diagram_with<W, G, S>(graph: &G, highlighted_path: &[S], options: &DiagramOptions) -> String
where
    W: Weight,
    G: Graph<W>,
    S: AsRef<str>,
{
    let mut lines = vec![format!("graph {};", options.direction)];

    for edge in graph.edges() {
        let (Some(from), Some(to)) = (graph.node_label(edge.from), graph.node_label(edge.to)) else {
            continue;
        };
        let arrow = if is_on_path(from, to, highlighted_path) { "==>" } else { "-->" };
        lines.push(edge_line(from, to, &edge, arrow));
    }

    for node in highlighted_path {
        lines.push(format!("    style {} fill:{}", node.as_ref(), options.highlight_fill));
    }

    lines.join("\n")
}

/// `to` comes right after `from` on the route
fn is_on_path<S: AsRef<str>>(from: &str, to: &str, path: &[S]) -> bool {
    let position = |label: &str| path.iter().position(|node| node.as_ref() == label);
    match (position(from), position(to)) {
        (Some(i), Some(j)) => j == i + 1,
        _ => false,
    }
}

fn edge_line<W: Weight>(from: &str, to: &str, edge: &Edge<W>, arrow: &str) -> String {
    format!("    {from}(({from})){arrow}|{}|{to}(({to}));", edge.weight)
}
