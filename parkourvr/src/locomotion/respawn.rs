use engine::{locomotion_log, math};

use super::pull_config::RespawnConfig;
use crate::{effect::Effect, gameplay::ProgressTracker, input_context::InputContext};

/// Teleport back to the checkpoint while either secondary button is held.
///
/// Level-triggered: holding the button re-teleports every tick. The player ends up
/// facing away from where the head was looking.
pub fn respawn_effects(
    config: &RespawnConfig,
    input: &InputContext,
    progress: Option<&dyn ProgressTracker>,
) -> Vec<Effect> {
    if !config.enabled {
        return Vec::new();
    }

    let is_button_pressed =
        input.left_hand.is_secondary_pressed() || input.right_hand.is_secondary_pressed();
    if !is_button_pressed {
        return Vec::new();
    }

    let Some(progress) = progress else {
        locomotion_log!(WARN, "respawn requested without a progress tracker, skipping");
        return Vec::new();
    };

    if !progress.is_respawn_gate_open() {
        locomotion_log!(TRACE, "respawn requested but gate is closed");
        return Vec::new();
    }

    let position = progress.respawn_position();
    locomotion_log!(DEBUG, "respawning at {:?}", position);

    vec![
        Effect::SetPlayerPosition {
            position,
            is_teleport: true,
        },
        Effect::SetPlayerRotation {
            rotation: math::look_rotation(-input.head.forward(), math::UP),
        },
    ]
}
