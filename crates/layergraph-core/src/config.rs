//! Layered configuration: defaults, then a TOML file, then environment.
//!
//! Environment variables use the `LAYERGRAPH_` prefix with `__` as the
//! nesting separator, e.g. `LAYERGRAPH_TRAVERSAL__STRATEGY=frontier_counting`.

use std::path::Path;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::graph::{LayerStrategy, TraversalConfig};

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "LAYERGRAPH_";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayerGraphConfig {
    /// Traversal defaults.
    pub traversal: TraversalSettings,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Traversal defaults applied when a caller does not override them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraversalSettings {
    /// Start vertex.
    pub start: usize,
    /// Layer assignment strategy.
    pub strategy: LayerStrategy,
    /// Deepest layer to expand.
    pub max_layer: Option<usize>,
    /// Maximum number of results.
    pub limit: Option<usize>,
}

impl Default for TraversalSettings {
    fn default() -> Self {
        Self {
            start: 1,
            strategy: LayerStrategy::default(),
            max_layer: None,
            limit: None,
        }
    }
}

impl TraversalSettings {
    /// Checks value ranges.
    ///
    /// Callers that override fields after loading must re-run this.
    pub fn validate(&self) -> Result<()> {
        if self.start == 0 {
            return Err(Error::Config(
                "traversal.start must be a vertex id (>= 1)".to_string(),
            ));
        }
        if self.limit == Some(0) {
            return Err(Error::Config("traversal.limit must be > 0".to_string()));
        }
        Ok(())
    }

    /// Converts to a [`TraversalConfig`].
    #[must_use]
    pub fn to_traversal_config(&self) -> TraversalConfig {
        TraversalConfig {
            strategy: self.strategy,
            max_layer: self.max_layer,
            limit: self.limit,
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive (`RUST_LOG` takes precedence).
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl LayerGraphConfig {
    /// Loads defaults, the optional TOML file, then `LAYERGRAPH_*` variables.
    ///
    /// A missing file is not an error; figment skips it.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = path {
            figment = figment.merge(Toml::file(path));
        }
        let config: Self = figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Parses a TOML string on top of the defaults.
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let config: Self = Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::string(toml_str))
            .extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes the configuration as TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))
    }

    /// Checks value ranges.
    pub fn validate(&self) -> Result<()> {
        self.traversal.validate()?;
        if self.logging.level.trim().is_empty() {
            return Err(Error::Config("logging.level cannot be empty".to_string()));
        }
        Ok(())
    }
}
