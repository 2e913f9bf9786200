//! Configuration management for the simulator.
//!
//! Configuration is loaded from (in priority order):
//! 1. Environment variables (LOGNET__ prefix, `__` separator)
//! 2. Config file (`lognet.toml`, `[sim]` section)
//! 3. Defaults

use serde::Deserialize;

use crate::error::CoreError;

/// What to do when a change targets a node id that is not in the graph.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UnknownNodePolicy {
    /// Refuse the change: graph and history stay untouched.
    #[default]
    Reject,
    /// Record the change in history but leave the graph as it is.
    Ignore,
}

/// Top-level simulator configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SimConfig {
    /// Handling of changes addressed to unknown node ids.
    #[serde(default)]
    pub unknown_node: UnknownNodePolicy,

    /// JSON seed file (array of `{id, color, connections}`). Built-in seed when unset.
    #[serde(default)]
    pub seed_path: Option<String>,

    /// Default log filter when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Number of most recent history entries the CLI prints. All when unset.
    #[serde(default)]
    pub history_limit: Option<usize>,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            unknown_node: UnknownNodePolicy::default(),
            seed_path: None,
            log_level: default_log_level(),
            history_limit: None,
        }
    }
}

impl SimConfig {
    /// Load the `[sim]` section from `{file_prefix}.toml` (optional) and the
    /// `LOGNET__SIM__*` environment.
    pub fn load(file_prefix: &str) -> Result<Self, CoreError> {
        let cfg = config::Config::builder()
            .add_source(config::File::with_name(file_prefix).required(false))
            .add_source(
                config::Environment::with_prefix("LOGNET")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        match cfg.get::<SimConfig>("sim") {
            Ok(c) => Ok(c),
            Err(config::ConfigError::NotFound(_)) => {
                tracing::debug!(file_prefix, "No [sim] configuration found, using defaults");
                Ok(SimConfig::default())
            }
            Err(e) => Err(e.into()),
        }
    }
}
