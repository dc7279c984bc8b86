use cgmath::{Quaternion, Vector3};

use crate::{input_context::Handedness, triggers::VolumeId};

/// Side effects requested by a tick, applied by the host after the update.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    SetPlayerPosition {
        position: Vector3<f32>,
        is_teleport: bool,
    },
    SetPlayerRotation {
        rotation: Quaternion<f32>,
    },
    Vibrate {
        hand: Handedness,
        frequency: f32,
        amplitude: f32,
    },
    PlaySound {
        name: String,
    },
    /// The volume was deactivated by the trigger router and should be hidden.
    HideVolume {
        volume: VolumeId,
    },
}
