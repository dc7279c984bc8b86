use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Trigger value a hand must exceed to count as pulling.
pub const PULL_THRESHOLD: f32 = 0.95;

/// Tuning for the two-hand pull.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PullConfig {
    pub speed_multiplier: f32,
    pub min_height: f32,
    pub max_height: f32,
    /// How much head pitch turns into vertical thrust.
    pub vertical_influence: f32,
    /// Per-tick velocity decay while no hand is pulling. Not normalized by dt.
    pub damping_factor: f32,
    pub pull_threshold: f32,
}

impl Default for PullConfig {
    fn default() -> Self {
        PullConfig {
            speed_multiplier: 5.0,
            min_height: 0.5,
            max_height: 100.0,
            vertical_influence: 0.5,
            damping_factor: 0.98,
            pull_threshold: PULL_THRESHOLD,
        }
    }
}

impl PullConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        for (field, value) in [
            ("locomotion.speed_multiplier", self.speed_multiplier),
            ("locomotion.min_height", self.min_height),
            ("locomotion.max_height", self.max_height),
            ("locomotion.vertical_influence", self.vertical_influence),
            ("locomotion.damping_factor", self.damping_factor),
            ("locomotion.pull_threshold", self.pull_threshold),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::invalid(field, "must be finite"));
            }
        }

        if self.min_height > self.max_height {
            return Err(ConfigError::invalid(
                "locomotion.min_height",
                format!(
                    "{} exceeds max_height {}",
                    self.min_height, self.max_height
                ),
            ));
        }
        if self.speed_multiplier <= 0.0 {
            return Err(ConfigError::invalid(
                "locomotion.speed_multiplier",
                "must be positive",
            ));
        }
        if !(0.0..=1.0).contains(&self.damping_factor) {
            return Err(ConfigError::invalid(
                "locomotion.damping_factor",
                "must be within [0, 1]",
            ));
        }
        if !(0.0..1.0).contains(&self.pull_threshold) {
            return Err(ConfigError::invalid(
                "locomotion.pull_threshold",
                "must be within [0, 1)",
            ));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HapticConfig {
    pub enabled: bool,
    pub frequency: f32,
    /// Intensity per m/s of locomotion speed, before clamping to [0, 1].
    pub speed_gain: f32,
}

impl Default for HapticConfig {
    fn default() -> Self {
        HapticConfig {
            enabled: true,
            frequency: 0.1,
            speed_gain: 0.1,
        }
    }
}

impl HapticConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        if !self.frequency.is_finite() || self.frequency < 0.0 {
            return Err(ConfigError::invalid(
                "haptics.frequency",
                "must be a non-negative number",
            ));
        }
        if !self.speed_gain.is_finite() || self.speed_gain < 0.0 {
            return Err(ConfigError::invalid(
                "haptics.speed_gain",
                "must be a non-negative number",
            ));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RespawnConfig {
    pub enabled: bool,
}

impl Default for RespawnConfig {
    fn default() -> Self {
        RespawnConfig { enabled: true }
    }
}
