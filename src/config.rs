use std::env;

use crate::algorithm::Locale;
use crate::render::{DiagramOptions, Direction};
use crate::{Error, Result};

pub const ENV_PORT: &str = "PATH_FINDER_PORT";
pub const ENV_STATIC_DIR: &str = "PATH_FINDER_STATIC_DIR";
pub const ENV_CORS: &str = "PATH_FINDER_CORS";
pub const ENV_LOCALE: &str = "PATH_FINDER_LOCALE";
pub const ENV_HIGHLIGHT: &str = "PATH_FINDER_HIGHLIGHT";
pub const ENV_DIRECTION: &str = "PATH_FINDER_DIRECTION";
pub const ENV_MAX_SESSIONS: &str = "PATH_FINDER_MAX_SESSIONS";
pub const ENV_SESSION_TIMEOUT: &str = "PATH_FINDER_SESSION_TIMEOUT_MINUTES";

/// Configuration for the web server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub static_dir: String,
    pub enable_cors: bool,
    pub locale: Locale,
    pub diagram: DiagramOptions,
    /// Upper bound on stored display sessions; the oldest is evicted first
    pub max_sessions: usize,
    pub session_timeout_minutes: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3005,
            static_dir: "web".to_string(),
            enable_cors: true,
            locale: Locale::En,
            diagram: DiagramOptions::default(),
            max_sessions: 1000,
            session_timeout_minutes: 60,
        }
    }
}

impl ServerConfig {
    /// Defaults overridden by `PATH_FINDER_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] with an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(port) = lookup(ENV_PORT) {
            config.port = parse_port(&port)?;
        }
        if let Some(dir) = lookup(ENV_STATIC_DIR) {
            config.static_dir = dir;
        }
        if let Some(cors) = lookup(ENV_CORS) {
            config.enable_cors = parse_bool(ENV_CORS, &cors)?;
        }
        if let Some(locale) = lookup(ENV_LOCALE) {
            config.locale = locale.parse()?;
        }
        if let Some(fill) = lookup(ENV_HIGHLIGHT) {
            config.diagram.highlight_fill = fill;
        }
        if let Some(direction) = lookup(ENV_DIRECTION) {
            config.diagram.direction = direction.parse::<Direction>()?;
        }
        if let Some(max) = lookup(ENV_MAX_SESSIONS) {
            config.max_sessions = match max.trim().parse::<usize>() {
                Ok(max) if max > 0 => max,
                _ => {
                    return Err(Error::InvalidConfig(format!(
                        "{} expects a positive integer, got {}",
                        ENV_MAX_SESSIONS, max
                    )))
                }
            };
        }
        if let Some(minutes) = lookup(ENV_SESSION_TIMEOUT) {
            config.session_timeout_minutes = minutes.trim().parse().map_err(|_| {
                Error::InvalidConfig(format!("{} expects minutes, got {}", ENV_SESSION_TIMEOUT, minutes))
            })?;
        }

        Ok(config)
    }
}

pub fn parse_port(value: &str) -> Result<u16> {
    value
        .trim()
        .parse()
        .map_err(|_| Error::InvalidConfig(format!("invalid port: {}", value)))
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(Error::InvalidConfig(format!("{} expects a boolean, got {}", key, value))),
    }
}
