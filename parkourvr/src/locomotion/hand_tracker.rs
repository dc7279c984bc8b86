use cgmath::{Vector3, Zero};
use engine::{input_log, math};

use crate::input_context::{Hand, InputContext};

/// Last-frame position of one controller.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HandSample {
    pub previous_position: Option<Vector3<f32>>,
}

impl HandSample {
    /// Frame-to-frame velocity, then record `current` as the new previous position.
    ///
    /// The first sample and degenerate ticks (`dt` zero, negative or non-finite)
    /// produce zero velocity. The previous position is updated either way.
    fn advance(&mut self, current: Vector3<f32>, dt: f32) -> Vector3<f32> {
        let velocity = match self.previous_position {
            Some(previous) if dt > 0.0 && dt.is_finite() => (current - previous) / dt,
            _ => Vector3::zero(),
        };
        self.previous_position = Some(current);

        if math::is_finite(velocity) {
            velocity
        } else {
            input_log!(DEBUG, "discarding non-finite hand velocity {:?}", velocity);
            Vector3::zero()
        }
    }
}

/// Per-hand velocity for one tick, paired with the clamped trigger values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandMotion {
    pub left_velocity: Vector3<f32>,
    pub right_velocity: Vector3<f32>,
    pub left_trigger: f32,
    pub right_trigger: f32,
}

/// Integrates controller positions into hand velocities, one frame of history per hand.
#[derive(Clone, Debug, Default)]
pub struct HandTracker {
    left: HandSample,
    right: HandSample,
}

impl HandTracker {
    pub fn new() -> HandTracker {
        HandTracker::default()
    }

    /// Prime both hands so the first tick measures from these positions.
    pub fn prime(&mut self, input: &InputContext) {
        self.left.previous_position = Some(input.left_hand.position);
        self.right.previous_position = Some(input.right_hand.position);
    }

    pub fn update(&mut self, input: &InputContext, dt: f32) -> HandMotion {
        HandMotion {
            left_velocity: Self::sample(&mut self.left, &input.left_hand, dt),
            right_velocity: Self::sample(&mut self.right, &input.right_hand, dt),
            left_trigger: input.left_hand.trigger(),
            right_trigger: input.right_hand.trigger(),
        }
    }

    fn sample(state: &mut HandSample, hand: &Hand, dt: f32) -> Vector3<f32> {
        state.advance(hand.position, dt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::vec3;

    fn input_with_hands(left: Vector3<f32>, right: Vector3<f32>) -> InputContext {
        InputContext {
            left_hand: Hand::at(left),
            right_hand: Hand::at(right),
            ..InputContext::default()
        }
    }

    #[test]
    fn test_first_update_is_zero_velocity() {
        let mut tracker = HandTracker::new();
        let motion = tracker.update(&input_with_hands(vec3(1.0, 0.0, 0.0), vec3(2.0, 0.0, 0.0)), 0.1);
        assert_eq!(motion.left_velocity, Vector3::zero());
        assert_eq!(motion.right_velocity, Vector3::zero());
    }

    #[test]
    fn test_velocity_is_frame_to_frame() {
        let mut tracker = HandTracker::new();
        tracker.prime(&input_with_hands(vec3(0.0, 0.0, 0.0), vec3(0.0, 0.0, 0.0)));

        let motion = tracker.update(&input_with_hands(vec3(0.5, 0.0, 0.0), vec3(0.0, 0.0, -1.0)), 0.5);
        assert_eq!(motion.left_velocity, vec3(1.0, 0.0, 0.0));
        assert_eq!(motion.right_velocity, vec3(0.0, 0.0, -2.0));

        // Measured from the previous tick, not from the primed position
        let motion = tracker.update(&input_with_hands(vec3(0.5, 0.0, 0.0), vec3(0.0, 0.0, -1.0)), 0.5);
        assert_eq!(motion.left_velocity, Vector3::zero());
        assert_eq!(motion.right_velocity, Vector3::zero());
    }

    #[test]
    fn test_zero_dt_is_guarded() {
        let mut tracker = HandTracker::new();
        tracker.prime(&input_with_hands(vec3(0.0, 0.0, 0.0), vec3(0.0, 0.0, 0.0)));

        let motion = tracker.update(&input_with_hands(vec3(1.0, 0.0, 0.0), vec3(1.0, 0.0, 0.0)), 0.0);
        assert_eq!(motion.left_velocity, Vector3::zero());
        assert_eq!(motion.right_velocity, Vector3::zero());

        // Previous position still moved forward
        assert_eq!(tracker.left.previous_position, Some(vec3(1.0, 0.0, 0.0)));
    }

    #[test]
    fn test_negative_dt_is_guarded() {
        let mut tracker = HandTracker::new();
        tracker.prime(&input_with_hands(vec3(0.0, 0.0, 0.0), vec3(0.0, 0.0, 0.0)));
        let motion = tracker.update(&input_with_hands(vec3(1.0, 0.0, 0.0), vec3(1.0, 0.0, 0.0)), -0.1);
        assert_eq!(motion.left_velocity, Vector3::zero());
    }

    #[test]
    fn test_triggers_are_clamped() {
        let mut tracker = HandTracker::new();
        let mut input = InputContext::default();
        input.left_hand.trigger_value = 2.0;
        input.right_hand.trigger_value = -1.0;
        let motion = tracker.update(&input, 0.1);
        assert_eq!(motion.left_trigger, 1.0);
        assert_eq!(motion.right_trigger, 0.0);
    }
}
