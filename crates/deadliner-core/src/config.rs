//! TOML-based application configuration.
//!
//! Stores the per-tier refresh cadence. Threshold boundaries (1h / 15m /
//! 5m) are fixed semantics, not configuration.
//!
//! Configuration is stored at `~/.config/deadliner/config.toml`.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::countdown::Cadence;
use crate::error::ConfigError;

/// Per-tier refresh cadence, in seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CadenceConfig {
    /// Refresh interval when more than 15 minutes remain.
    #[serde(default = "default_default_secs")]
    pub default_secs: u64,
    /// Refresh interval at 15 minutes or less.
    #[serde(default = "default_urgent_secs")]
    pub urgent_secs: u64,
    /// Refresh interval at 5 minutes or less.
    #[serde(default = "default_imminent_secs")]
    pub imminent_secs: u64,
}

impl Default for CadenceConfig {
    fn default() -> Self {
        Self {
            default_secs: default_default_secs(),
            urgent_secs: default_urgent_secs(),
            imminent_secs: default_imminent_secs(),
        }
    }
}

impl CadenceConfig {
    pub fn cadence(&self) -> Cadence {
        Cadence {
            default: Duration::from_secs(self.default_secs),
            urgent: Duration::from_secs(self.urgent_secs),
            imminent: Duration::from_secs(self.imminent_secs),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub cadence: CadenceConfig,
}

impl Config {
    pub fn path() -> Result<PathBuf, ConfigError> {
        let base = dirs::config_dir()
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .ok_or_else(|| ConfigError::LoadFailed {
                path: PathBuf::from("~"),
                message: "no home or config directory".to_string(),
            })?;
        Ok(base.join("deadliner").join("config.toml"))
    }

    /// Load the config file, falling back to defaults when it is absent.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::path()?)
    }

    pub fn load_from(path: &PathBuf) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                let cfg: Config =
                    toml::from_str(&content).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
                cfg.validate()?;
                Ok(cfg)
            }
            Err(_) => Ok(Self::default()),
        }
    }

    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &PathBuf) -> Result<(), ConfigError> {
        self.validate()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::SaveFailed {
                path: path.clone(),
                message: e.to_string(),
            })?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::SaveFailed {
                path: path.clone(),
                message: e.to_string(),
            })?;
        std::fs::write(path, content).map_err(|e| ConfigError::SaveFailed {
            path: path.clone(),
            message: e.to_string(),
        })
    }

    /// A zero-second cadence would spin the watcher; reject it.
    fn validate(&self) -> Result<(), ConfigError> {
        for (key, secs) in [
            ("cadence.default_secs", self.cadence.default_secs),
            ("cadence.urgent_secs", self.cadence.urgent_secs),
            ("cadence.imminent_secs", self.cadence.imminent_secs),
        ] {
            if secs == 0 {
                return Err(ConfigError::InvalidValue {
                    key: key.to_string(),
                    message: "must be at least 1 second".to_string(),
                });
            }
        }
        Ok(())
    }
}

fn default_default_secs() -> u64 {
    60
}
fn default_urgent_secs() -> u64 {
    10
}
fn default_imminent_secs() -> u64 {
    1
}
