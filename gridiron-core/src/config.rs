//! Engine configuration, loadable from TOML.
//!
//! ```toml
//! tie_break = "team_name"   # or "input_order"
//! neutral_fill = 50.0
//!
//! [weights]
//! offense = 0.40
//! defense = 0.40
//! special_teams = 0.20
//! ```
//!
//! Every key is optional and falls back to its default.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::composite::{CompositeWeights, WeightsError, NEUTRAL_FILL};
use crate::percentile::TieBreak;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid weights: {0}")]
    Weights(#[from] WeightsError),
    #[error("neutral_fill must be within [0, 100], got {0}")]
    NeutralFill(f64),
}

/// Everything a ranking pass needs besides the records.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub weights: CompositeWeights,
    pub tie_break: TieBreak,
    /// Percentile substituted for an absent composite component.
    pub neutral_fill: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            weights: CompositeWeights::default(),
            tie_break: TieBreak::default(),
            neutral_fill: NEUTRAL_FILL,
        }
    }
}

impl EngineConfig {
    pub fn with_weights(weights: CompositeWeights) -> Self {
        Self {
            weights,
            ..Self::default()
        }
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        config.weights.warn_if_unnormalized();
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.weights.validate()?;
        if !(0.0..=100.0).contains(&self.neutral_fill) {
            return Err(ConfigError::NeutralFill(self.neutral_fill));
        }
        Ok(())
    }
}
