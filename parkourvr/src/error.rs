use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors raised while loading or validating a [`GameConfig`](crate::config::GameConfig).
///
/// Per-tick updates never fail; configuration is the only fallible surface.
#[derive(Debug)]
pub enum ConfigError {
    /// The config file could not be read or written
    Io { path: PathBuf, source: io::Error },

    /// The config file is not valid TOML for this schema
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A value parsed but is outside its allowed range
    Invalid { field: &'static str, reason: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, source } => {
                write!(f, "I/O error on config file '{}': {}", path.display(), source)
            }
            ConfigError::Parse { path, source } => {
                write!(f, "Failed to parse config file '{}': {}", path.display(), source)
            }
            ConfigError::Invalid { field, reason } => {
                write!(f, "Invalid value for '{}': {}", field, reason)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Parse { source, .. } => Some(source),
            ConfigError::Invalid { .. } => None,
        }
    }
}

impl ConfigError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ConfigError::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

pub type ConfigResult<T> = Result<T, ConfigError>;
