use cgmath::{Deg, Quaternion, Rotation3, Vector3, vec3};
use engine::math;

use crate::effect::Effect;

/// Position and orientation of an object in world space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub position: Vector3<f32>,
    pub rotation: Quaternion<f32>,
}

impl Default for Transform {
    fn default() -> Self {
        Transform::at(vec3(0.0, 0.0, 0.0))
    }
}

impl Transform {
    pub fn at(position: Vector3<f32>) -> Transform {
        Transform {
            position,
            rotation: Quaternion::new(1.0, 0.0, 0.0, 0.0),
        }
    }

    pub fn forward(&self) -> Vector3<f32> {
        math::forward(self.rotation)
    }

    /// Turn so the forward axis points at `target`. No-op when already at the target.
    pub fn look_at(&mut self, target: Vector3<f32>) {
        if math::safe_normalize(target - self.position).is_some() {
            self.rotation = math::look_rotation(target - self.position, math::UP);
        }
    }

    /// Rotate about the local vertical axis.
    pub fn rotate_y(&mut self, degrees: f32) {
        self.rotation = self.rotation * Quaternion::from_angle_y(Deg(degrees));
    }

    /// Apply the player-transform effects of a tick, ignoring everything else.
    pub fn apply_effects(&mut self, effects: &[Effect]) {
        for effect in effects {
            match effect {
                Effect::SetPlayerPosition { position, .. } => self.position = *position,
                Effect::SetPlayerRotation { rotation } => self.rotation = *rotation,
                _ => {}
            }
        }
    }
}
