//! # Engine Configuration
//!
//! Game-length rules and the few tuning knobs that are not part of the
//! ability formulas themselves.
//!
//! ## Usage
//! ```rust
//! use bb_core::engine::config::EngineConfig;
//!
//! let config = EngineConfig::default();
//! let extras = EngineConfig::extra_innings();
//! assert!(!config.extra_innings && extras.extra_innings);
//! ```

use crate::engine::probability::DEFAULT_HIT_TYPE_WEIGHTS;
use crate::error::{GameError, Result};
use serde::{Deserialize, Serialize};
use std::{env, fs};

pub const ENGINE_CONFIG_PATH_ENV: &str = "BB_ENGINE_CONFIG_PATH";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Regulation innings (default: 9)
    pub innings: u8,
    /// Keep playing past regulation while tied (default: false, ties stand)
    pub extra_innings: bool,
    /// Last inning that may start when extra innings are on (default: 15)
    pub max_innings: u8,
    /// Chance a tracked runner on first tries for second before an at-bat (default: 0.20)
    pub steal_attempt_probability: f64,
    /// Single / double / triple weights once a ball in play falls for a hit
    pub hit_type_weights: [f64; 3],
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            innings: 9,
            extra_innings: false,
            max_innings: 15,
            steal_attempt_probability: 0.20,
            hit_type_weights: DEFAULT_HIT_TYPE_WEIGHTS,
        }
    }
}

impl EngineConfig {
    /// Nine innings, ties stand
    pub fn standard() -> Self {
        Self::default()
    }

    /// Ties after regulation go to extra innings, up to `max_innings`
    pub fn extra_innings() -> Self {
        Self { extra_innings: true, ..Self::default() }
    }

    pub fn validate(&self) -> Result<()> {
        if self.innings == 0 {
            return Err(GameError::InvalidConfig("innings must be at least 1".to_string()));
        }
        // The inning counter steps past the last inning played.
        if self.innings == u8::MAX || self.max_innings == u8::MAX {
            return Err(GameError::InvalidConfig(format!(
                "innings and max_innings must be below {}",
                u8::MAX
            )));
        }
        if self.extra_innings && self.max_innings < self.innings {
            return Err(GameError::InvalidConfig(format!(
                "max_innings ({}) must be >= innings ({})",
                self.max_innings, self.innings
            )));
        }
        if !(0.0..=1.0).contains(&self.steal_attempt_probability) {
            return Err(GameError::InvalidConfig(format!(
                "steal_attempt_probability must be within 0..=1, got {}",
                self.steal_attempt_probability
            )));
        }
        if self.hit_type_weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(GameError::InvalidConfig(
                "hit_type_weights must be finite and non-negative".to_string(),
            ));
        }
        if self.hit_type_weights.iter().sum::<f64>() <= 0.0 {
            return Err(GameError::InvalidConfig(
                "hit_type_weights must not all be zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content)
            .map_err(|e| GameError::InvalidConfig(format!("YAML parse failed: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads the file named by `BB_ENGINE_CONFIG_PATH`; unset or blank means defaults.
    /// `.json` files parse as JSON, anything else as YAML.
    pub fn from_env() -> Result<Self> {
        let Ok(path) = env::var(ENGINE_CONFIG_PATH_ENV) else {
            return Ok(Self::default());
        };

        let path = path.trim();
        if path.is_empty() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            GameError::InvalidConfig(format!(
                "Failed to read engine config from {ENGINE_CONFIG_PATH_ENV}='{path}': {e}"
            ))
        })?;

        if path.ends_with(".json") {
            Self::from_json_str(&content)
        } else {
            Self::from_yaml_str(&content)
        }
    }
}
