//! Workspace configuration: per-subsystem structs with serde defaults,
//! loadable from a TOML file, credential pulled from the environment.

mod defaults;
mod insight_config;
mod simulation_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

pub use insight_config::InsightConfig;
pub use simulation_config::SimulationConfig;

/// Environment variable carrying the generative-API credential.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Top-level Synapse configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SynapseConfig {
    pub simulation: SimulationConfig,
    pub insight: InsightConfig,
}

impl SynapseConfig {
    /// Load from a TOML file, then apply environment overrides and validate.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let mut config: Self = toml::from_str(&raw).map_err(|e| ConfigError::Parse {
            reason: e.to_string(),
        })?;
        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    /// Defaults plus environment overrides.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env();
        config
    }

    /// Pull the API credential from the environment when present.
    /// A file-configured key is kept if the variable is unset.
    pub fn apply_env(&mut self) {
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            if !key.is_empty() {
                self.insight.api_key = Some(key);
            }
        }
    }

    /// Reject configurations the runtime cannot honor.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.simulation.tick_interval_secs == 0 {
            return Err(ConfigError::Invalid {
                field: "simulation.tick_interval_secs".into(),
                reason: "must be at least 1".into(),
            });
        }
        if self.insight.refresh_interval_secs == 0 {
            return Err(ConfigError::Invalid {
                field: "insight.refresh_interval_secs".into(),
                reason: "must be at least 1".into(),
            });
        }
        if self.simulation.load_jitter_scale <= 0.0 {
            return Err(ConfigError::Invalid {
                field: "simulation.load_jitter_scale".into(),
                reason: "must be positive".into(),
            });
        }
        if self.simulation.cpu_jitter_scale <= 0.0 {
            return Err(ConfigError::Invalid {
                field: "simulation.cpu_jitter_scale".into(),
                reason: "must be positive".into(),
            });
        }
        Ok(())
    }
}
