//! Configuration for spanwise.
//!
//! Values are layered with `figment`, later sources overriding earlier ones:
//!
//! 1. Built-in defaults
//! 2. A TOML file (`spanwise.toml` by default)
//! 3. Environment variables prefixed `SPANWISE_`, nested keys split on `__`
//!    (e.g. `SPANWISE_LIMITS__MAX_VERTICES=5000`)
//!
//! # Example
//!
//! ```toml
//! [limits]
//! max_vertices = 1000
//!
//! [report]
//! format = "json"
//! list_edges = false
//!
//! [algorithms]
//! prim = true
//! kruskal = true
//! ```

use std::path::Path;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::graph::GraphLimits;

/// Default configuration file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "spanwise.toml";

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "SPANWISE_";

/// Report output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Human-readable tables.
    #[default]
    Text,
    /// One JSON document per run.
    Json,
}

/// Report rendering options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Output format.
    pub format: ReportFormat,
    /// Whether to list every edge of each graph.
    pub list_edges: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: ReportFormat::Text,
            list_edges: true,
        }
    }
}

/// Which spanning-tree algorithms to run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlgorithmsConfig {
    /// Run Prim's algorithm.
    pub prim: bool,
    /// Run Kruskal's algorithm.
    pub kruskal: bool,
}

impl Default for AlgorithmsConfig {
    fn default() -> Self {
        Self {
            prim: true,
            kruskal: true,
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpanwiseConfig {
    /// Graph size bounds.
    pub limits: GraphLimits,
    /// Report options.
    pub report: ReportConfig,
    /// Algorithm selection.
    pub algorithms: AlgorithmsConfig,
}

impl SpanwiseConfig {
    /// Loads defaults, then `spanwise.toml` if present, then the environment.
    ///
    /// The result is not validated, so callers can apply overrides first and
    /// then call [`SpanwiseConfig::validate`].
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if a source is malformed.
    pub fn load() -> Result<Self> {
        Self::load_from(DEFAULT_CONFIG_FILE)
    }

    /// Loads defaults, then the TOML file at `path` if present, then the
    /// environment. Like [`SpanwiseConfig::load`], the result is not validated.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if a source is malformed.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "loading configuration");
        Self::extract(
            Figment::from(Serialized::defaults(Self::default()))
                .merge(Toml::file(path))
                .merge(Env::prefixed(ENV_PREFIX).split("__")),
        )
    }

    /// Parses configuration from a TOML string layered over the defaults.
    /// The environment is not consulted.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if the TOML is malformed or validation fails.
    pub fn from_toml_str(toml: &str) -> Result<Self> {
        let config = Self::extract(
            Figment::from(Serialized::defaults(Self::default())).merge(Toml::string(toml)),
        )?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes the configuration as pretty TOML.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if serialization fails.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))
    }

    /// Checks value ranges.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` describing the first invalid value.
    pub fn validate(&self) -> Result<()> {
        if self.limits.max_vertices == 0 {
            return Err(Error::Config(
                "limits.max_vertices must be at least 1".to_string(),
            ));
        }
        if !self.algorithms.prim && !self.algorithms.kruskal {
            return Err(Error::Config(
                "at least one of algorithms.prim or algorithms.kruskal must be enabled".to_string(),
            ));
        }
        Ok(())
    }

    fn extract(figment: Figment) -> Result<Self> {
        figment
            .extract()
            .map_err(|e| Error::Config(e.to_string()))
    }
}
