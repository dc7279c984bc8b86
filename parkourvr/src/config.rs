use anyhow::{Context, Result};
use engine::logging::LogSettings;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::{
    error::{ConfigError, ConfigResult},
    locomotion::{HapticConfig, PullConfig, RespawnConfig},
    triggers::TriggerConfig,
};

/// Environment variable consulted for log levels, e.g. `PARKOUR_LOG=info,locomotion=debug`.
pub const LOG_ENV_VAR: &str = "PARKOUR_LOG";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub locomotion: PullConfig,
    pub haptics: HapticConfig,
    pub respawn: RespawnConfig,
    pub triggers: TriggerConfig,
    pub logging: LogSettings,
}

impl GameConfig {
    /// Load configuration from file or use defaults
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        if let Some(path) = config_path {
            return Self::load_from_file(path);
        }

        let default_paths = ["parkour.toml", ".parkour.toml", "config/parkour.toml"];
        for path in &default_paths {
            let path = Path::new(path);
            if path.exists() {
                return Self::load_from_file(path);
            }
        }

        Ok(Self::default())
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::from_toml_str(&content).map_err(|error| match error {
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        });

        config.with_context(|| format!("Failed to load config file: {}", path.display()))
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let config: GameConfig = toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: PathBuf::new(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content =
            toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    pub fn validate(&self) -> ConfigResult<()> {
        self.locomotion.validate()?;
        self.haptics.validate()?;
        if !self.triggers.raised_task_height.is_finite() {
            return Err(ConfigError::invalid(
                "triggers.raised_task_height",
                "must be finite",
            ));
        }
        Ok(())
    }
}
