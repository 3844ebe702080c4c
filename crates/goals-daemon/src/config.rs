//! Daemon configuration structures

use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable holding the store connection string.
pub const ENV_STORE_URI: &str = "GOALS_STORE_URI";
/// Environment variable overriding the listening port.
pub const ENV_PORT: &str = "GOALS_PORT";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}

/// Top-level daemon configuration from daemon.toml
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaemonConfig {
    /// Store connection string (`memory://`, `file:///dir`, or a directory path)
    #[serde(default = "default_store_uri")]
    pub store_uri: String,

    /// Address to bind
    #[serde(default = "default_bind")]
    pub bind: IpAddr,

    /// Listening port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Append HTTP access records as JSON lines to this file
    #[serde(default)]
    pub access_log: Option<PathBuf>,

    /// Append goal lifecycle events as JSON lines to this file
    #[serde(default)]
    pub events_log: Option<PathBuf>,

    /// Install a permissive CORS layer so browser frontends on other origins can call the API
    #[serde(default = "default_cors")]
    pub cors: bool,
}

impl Default for DaemonConfig {
    fn default() -> Self {
        Self {
            store_uri: default_store_uri(),
            bind: default_bind(),
            port: default_port(),
            access_log: None,
            events_log: None,
            cors: default_cors(),
        }
    }
}

// Serde default functions
fn default_store_uri() -> String {
    "memory://".to_string()
}

fn default_bind() -> IpAddr {
    IpAddr::from([0, 0, 0, 0])
}

fn default_port() -> u16 {
    8000
}

fn default_cors() -> bool {
    true
}

impl DaemonConfig {
    /// Load config from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Ok(toml::from_str(&content)?)
    }

    /// Apply `GOALS_STORE_URI` / `GOALS_PORT` overrides read through `lookup`.
    pub fn apply_env(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(uri) = lookup(ENV_STORE_URI).filter(|v| !v.trim().is_empty()) {
            self.store_uri = uri;
        }
        if let Some(port) = lookup(ENV_PORT) {
            self.port = port.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: ENV_PORT.to_string(),
                value: port.clone(),
            })?;
        }
        Ok(self)
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }
}
