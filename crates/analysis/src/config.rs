//! Analysis settings, loadable from a TOML file

use classical_engine::EvalWeights;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// Analyzer configuration. Every field has a default, so a config file
/// only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Deepest iteration searched per position
    pub max_depth: u8,
    /// A ply is an error when its swing exceeds this
    pub swing_threshold: f64,
    /// Errors with at least this swing are reported as severe
    pub severe_swing: f64,
    /// Time budget per position in milliseconds (None = depth only)
    pub time_limit_ms: Option<u64>,
    pub weights: EvalWeights,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            max_depth: 4,
            swing_threshold: 1.0,
            severe_swing: 8.0,
            time_limit_ms: None,
            weights: EvalWeights::default(),
        }
    }
}

impl AnalysisConfig {
    pub fn from_toml_str(text: &str, path: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_string(),
            source,
        })
    }

    /// Load config from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let shown = path.display().to_string();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: shown.clone(),
            source,
        })?;
        Self::from_toml_str(&text, &shown)
    }

    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit_ms.map(Duration::from_millis)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
