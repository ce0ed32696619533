//! Configuration for the `shortpath` binary.
//!
//! Loaded from a TOML file. Every key is optional and falls back to its default.
//!
//! ```toml
//! log_filter = "info"
//! output = "text"      # text | json | dot
//! prompt = "> "
//!
//! [render]
//! node_color = "skyblue"
//! path_color = "red"
//! edge_color = "black"
//! ```

use crate::errors::ConfigError;

use serde::{Deserialize, Serialize};
use std::path::Path;


/// Report format printed after a query
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Dot,
}


#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset
    pub log_filter: String,

    pub output: OutputFormat,

    /// Prompt shown by the interactive loop
    pub prompt: String,

    pub render: RenderConfig,
}

/// Graphviz colors for the DOT diagram
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub node_color: String,
    pub path_color: String,
    pub edge_color: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: "info".to_string(),
            output: OutputFormat::Text,
            prompt: "> ".to_string(),
            render: RenderConfig::default(),
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            node_color: "skyblue".to_string(),
            path_color: "red".to_string(),
            edge_color: "black".to_string(),
        }
    }
}

impl Config {

    /// Load from `path`, or return the defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let config = Self::from_toml(&text).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })?;

        Ok(config)
    }

    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}
