//! Server configuration
//!
//! Optional TOML configuration for the CLI and serve loop. Every field has
//! a default, so a missing config file behaves like the stock deployment.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Default multiplier from raw degree coordinates to stored map units.
/// Client devices exchange raw degrees; the record format and responses use
/// the scaled representation.
pub const DEFAULT_COORDINATE_SCALE: f64 = 100_000.0;

fn default_graph_path() -> PathBuf {
    PathBuf::from("edmonton-roads.txt")
}

fn default_coordinate_scale() -> f64 {
    DEFAULT_COORDINATE_SCALE
}

/// Configuration for the route server
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Path to the road map record file
    #[serde(default = "default_graph_path")]
    pub graph: PathBuf,

    /// Multiplier from raw degrees to stored coordinate units
    #[serde(default = "default_coordinate_scale")]
    pub coordinate_scale: f64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            graph: default_graph_path(),
            coordinate_scale: default_coordinate_scale(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a TOML file, falling back to defaults when
    /// the file does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }
}
