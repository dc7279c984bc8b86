use cgmath::{InnerSpace, Vector3, Zero};
use engine::math;

/// Head pitch beyond this contributes no extra vertical thrust.
const MAX_VERTICAL_FACTOR: f32 = 0.5;

/// Redirect a thrust vector along where the head is looking.
///
/// Only the magnitude of `base_velocity` survives. Horizontal direction comes from
/// the head's forward vector flattened onto the ground plane, and head pitch (clamped
/// to ±0.5) scaled by `vertical_influence` adds a vertical share of the same speed.
pub fn blend(base_velocity: Vector3<f32>, head_forward: Vector3<f32>, vertical_influence: f32) -> Vector3<f32> {
    let speed = base_velocity.magnitude();
    if !speed.is_finite() {
        return Vector3::zero();
    }
    let Some(head_direction) = math::safe_normalize(head_forward) else {
        return Vector3::zero();
    };

    let vertical_factor =
        head_direction.y.clamp(-MAX_VERTICAL_FACTOR, MAX_VERTICAL_FACTOR) * vertical_influence;

    // Looking straight up or down leaves no horizontal heading
    let horizontal_movement = math::safe_normalize(math::horizontal(head_direction))
        .map(|heading| heading * speed)
        .unwrap_or_else(Vector3::zero);
    let vertical_movement = math::UP * vertical_factor * speed;

    horizontal_movement + vertical_movement
}
