use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{level_filters::LevelFilter, Level};
use tracing_subscriber::EnvFilter;

/// Serializable form of the logging levels, as written in a game config file:
///
/// ```toml
/// [logging]
/// level = "warn"
/// scopes = { locomotion = "debug", trigger = "info" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    pub level: String,
    pub scopes: HashMap<String, String>,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            scopes: HashMap::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LogConfig {
    global_level: Level,
    scope_levels: HashMap<String, Level>,
}

impl LogConfig {
    pub fn new() -> Self {
        Self {
            global_level: Level::WARN,
            scope_levels: HashMap::new(),
        }
    }

    /// Build from file settings. Unparseable level names are skipped.
    pub fn from_settings(settings: &LogSettings) -> Self {
        let mut config = Self::new();
        if let Some(level) = parse_level(&settings.level) {
            config.global_level = level;
        }
        for (scope, level) in &settings.scopes {
            if let Some(level) = parse_level(level) {
                config.scope_levels.insert(scope.clone(), level);
            }
        }
        config
    }

    /// Layer the env var (e.g. `PARKOUR_LOG=info,locomotion=trace`) over the current levels.
    pub fn apply_env(&mut self, env_var_name: &str) {
        if let Ok(log_config) = std::env::var(env_var_name) {
            self.parse_config_string(&log_config);
        }
    }

    fn parse_config_string(&mut self, config_str: &str) {
        for part in config_str.split(',').map(str::trim) {
            match part.split_once('=') {
                Some((scope, level)) => {
                    if let Some(level) = parse_level(level.trim()) {
                        self.scope_levels.insert(scope.trim().to_string(), level);
                    }
                }
                None => {
                    if let Some(level) = parse_level(part) {
                        self.global_level = level;
                    }
                }
            }
        }
    }

    pub fn should_log(&self, scope: &str, level: Level) -> bool {
        let target_level = self.scope_levels.get(scope).unwrap_or(&self.global_level);
        level <= *target_level
    }

    pub fn global_level(&self) -> Level {
        self.global_level
    }

    /// The most verbose level any scope allows.
    pub fn max_level(&self) -> Level {
        self.scope_levels
            .values()
            .copied()
            .fold(self.global_level, |max, level| max.max(level))
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_level(level_str: &str) -> Option<Level> {
    match level_str.to_lowercase().as_str() {
        "error" => Some(Level::ERROR),
        "warn" => Some(Level::WARN),
        "info" => Some(Level::INFO),
        "debug" => Some(Level::DEBUG),
        "trace" => Some(Level::TRACE),
        _ => None,
    }
}

/// Initialize logging from an environment variable only.
/// Example: init_logging("PARKOUR_LOG")
pub fn init_logging(env_var_name: &str) -> LogConfig {
    init_logging_with(&LogSettings::default(), env_var_name)
}

/// Initialize logging from config-file settings, with the env var taking precedence.
///
/// The subscriber lets through everything up to the most verbose scope level; the
/// scoped macros then gate per scope. `RUST_LOG`, when set, replaces that filter.
pub fn init_logging_with(settings: &LogSettings, env_var_name: &str) -> LogConfig {
    let mut config = LogConfig::from_settings(settings);
    config.apply_env(env_var_name);

    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(config.max_level()).into())
        .from_env_lossy();
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    super::set_log_config(config.clone());
    config
}
