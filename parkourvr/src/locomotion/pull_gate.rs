use cgmath::Vector3;

use super::hand_tracker::HandMotion;

/// Which hands are holding the trigger past the pull threshold this tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PullGate {
    Both,
    LeftOnly,
    RightOnly,
    Released,
}

impl PullGate {
    pub fn evaluate(motion: &HandMotion, threshold: f32) -> PullGate {
        let left = motion.left_trigger > threshold;
        let right = motion.right_trigger > threshold;
        match (left, right) {
            (true, true) => PullGate::Both,
            (true, false) => PullGate::LeftOnly,
            (false, true) => PullGate::RightOnly,
            (false, false) => PullGate::Released,
        }
    }

    pub fn is_pulling(self) -> bool {
        self != PullGate::Released
    }

    /// Thrust from the pulling hands, or `None` when released.
    /// With both hands down the average wins over either hand alone.
    pub fn base_velocity(self, motion: &HandMotion, speed_multiplier: f32) -> Option<Vector3<f32>> {
        let velocity = match self {
            PullGate::Both => (motion.left_velocity + motion.right_velocity) * 0.5,
            PullGate::LeftOnly => motion.left_velocity,
            PullGate::RightOnly => motion.right_velocity,
            PullGate::Released => return None,
        };
        Some(velocity * speed_multiplier)
    }
}
