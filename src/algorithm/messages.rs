use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

use crate::Error;

/// Separator placed between node labels when a route is printed
pub const PATH_SEPARATOR: &str = " → ";

/// Language of the status messages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Es,
}

impl Locale {
    pub fn invalid_endpoint(self) -> &'static str {
        match self {
            Locale::En => "One or both nodes do not exist",
            Locale::Es => "Uno o ambos nodos no existen",
        }
    }

    pub fn unreachable(self) -> &'static str {
        match self {
            Locale::En => "No route exists between the nodes",
            Locale::Es => "No existe una ruta entre los nodos",
        }
    }

    pub fn found<W: Display>(self, path: &[String], weight: W) -> String {
        let route = path.join(PATH_SEPARATOR);
        match self {
            Locale::En => format!("Shortest route found: {} (total weight: {})", route, weight),
            Locale::Es => format!("Ruta más corta encontrada: {} (Peso total: {})", route, weight),
        }
    }

    /// Caption for the total weight line shown under the status message
    pub fn total_weight_caption(self) -> &'static str {
        match self {
            Locale::En => "Total route weight",
            Locale::Es => "Peso total de la ruta",
        }
    }
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "es" => Ok(Locale::Es),
            other => Err(Error::InvalidConfig(format!("unknown locale: {}", other))),
        }
    }
}
