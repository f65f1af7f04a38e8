//! Configuration for the path-graph collaborators.
//!
//! The engine itself takes no configuration. This is what the command
//! surface and the run archive are built from: log settings, the topology
//! to load, and where runs are archived.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, GraphResult};
use crate::graph::{sample_graph, Graph, GraphSpec};

/// Log output style.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Compact,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset.
    pub level: String,
    pub format: LogFormat,
    pub include_location: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
            include_location: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ArchiveConfig {
    pub enabled: bool,
    /// JSON-lines file runs are appended to.
    pub path: String,
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            path: "./data/runs.jsonl".to_string(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub logging: LoggingConfig,
    /// Topology to run on. `None` selects the built-in sample graph.
    pub graph: Option<GraphSpec>,
    pub archive: ArchiveConfig,
}

impl Config {
    /// Load configuration from files and environment.
    ///
    /// Sources, later ones overriding earlier ones:
    /// 1. config/default.toml
    /// 2. config/{PATH_GRAPH_ENV}.toml (default: development)
    /// 3. Environment variables with the PATH_GRAPH__ prefix,
    ///    e.g. `PATH_GRAPH__ARCHIVE__ENABLED=true`
    pub fn load() -> GraphResult<Self> {
        Self::load_from(Path::new("."))
    }

    /// [`Config::load`] with the `config/` directory looked up under `base`.
    pub fn load_from(base: &Path) -> GraphResult<Self> {
        let env = std::env::var("PATH_GRAPH_ENV").unwrap_or_else(|_| "development".to_string());
        let dir = base.join("config");

        let builder = config::Config::builder()
            .add_source(config::File::from(dir.join("default")).required(false))
            .add_source(config::File::from(dir.join(&env)).required(false))
            .add_source(
                config::Environment::with_prefix("PATH_GRAPH")
                    .prefix_separator("__")
                    .separator("__"),
            );

        let config: Config = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> GraphResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            GraphError::Config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> GraphResult<Self> {
        let config: Config = toml::from_str(content)
            .map_err(|e| GraphError::Config(format!("Failed to parse config file: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> GraphResult<()> {
        if self.logging.level.trim().is_empty() {
            return Err(GraphError::Config("logging.level must not be empty".into()));
        }

        if self.archive.enabled && self.archive.path.trim().is_empty() {
            return Err(GraphError::Config(
                "archive.path must be set when archive.enabled is true".into(),
            ));
        }

        if let Some(spec) = &self.graph {
            Graph::from_spec(spec).map_err(|e| GraphError::Config(format!("graph: {}", e)))?;
        }

        Ok(())
    }

    /// Build the configured graph, or the sample graph when none is set.
    pub fn build_graph(&self) -> GraphResult<Graph> {
        match &self.graph {
            Some(spec) => Graph::from_spec(spec),
            None => sample_graph(),
        }
    }
}
