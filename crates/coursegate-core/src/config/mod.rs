pub mod entitlement_config;
pub mod observability_config;
pub mod progression_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

pub use entitlement_config::EntitlementConfig;
pub use observability_config::ObservabilityConfig;
pub use progression_config::{KindPriority, ProgressionConfig};

/// Top-level configuration aggregating all subsystem configs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GateConfig {
    pub progression: ProgressionConfig,
    pub entitlement: EntitlementConfig,
    pub observability: ObservabilityConfig,
}

impl GateConfig {
    /// Load config from a TOML string, falling back to defaults for missing fields.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.progression.validate()?;
        self.observability.validate()?;
        Ok(())
    }
}
