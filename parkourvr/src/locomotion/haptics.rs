use cgmath::{InnerSpace, Vector3};
use engine::haptics_log;

use super::pull_config::HapticConfig;
use crate::{effect::Effect, input_context::Handedness};

/// Vibration amplitude for the current locomotion speed. Silent while released.
pub fn intensity(config: &HapticConfig, is_pulling: bool, velocity: Vector3<f32>) -> f32 {
    if !is_pulling {
        return 0.0;
    }
    let amplitude = velocity.magnitude() * config.speed_gain;
    if amplitude.is_nan() {
        0.0
    } else {
        amplitude.clamp(0.0, 1.0)
    }
}

/// The same vibration on both controllers, every tick.
pub fn vibration_effects(config: &HapticConfig, is_pulling: bool, velocity: Vector3<f32>) -> Vec<Effect> {
    if !config.enabled {
        return Vec::new();
    }

    let amplitude = intensity(config, is_pulling, velocity);
    haptics_log!(TRACE, amplitude, "controller vibration");

    [Handedness::Left, Handedness::Right]
        .into_iter()
        .map(|hand| Effect::Vibrate {
            hand,
            frequency: config.frequency,
            amplitude,
        })
        .collect()
}
