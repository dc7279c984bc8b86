use cgmath::{Quaternion, Vector3, vec3};
use engine::math;
use serde::{Deserialize, Serialize};

/// Which controller a sample or effect refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Handedness {
    Left,
    Right,
}

/// Snapshot of one tracked controller for a single tick.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hand {
    pub position: Vector3<f32>,
    pub trigger_value: f32,
    /// Secondary face button (B on the right controller, Y on the left).
    pub b_value: f32,
}

impl Default for Hand {
    fn default() -> Self {
        Hand {
            position: vec3(0.0, 0.0, 0.0),
            trigger_value: 0.0,
            b_value: 0.0,
        }
    }
}

impl Hand {
    pub fn at(position: Vector3<f32>) -> Hand {
        Hand {
            position,
            ..Hand::default()
        }
    }

    pub fn with_trigger(mut self, trigger_value: f32) -> Hand {
        self.trigger_value = trigger_value;
        self
    }

    pub fn with_secondary(mut self, pressed: bool) -> Hand {
        self.b_value = if pressed { 1.0 } else { 0.0 };
        self
    }

    /// Trigger value clamped to [0, 1]. Runtimes occasionally report slightly
    /// out-of-range values, and NaN reads as released.
    pub fn trigger(&self) -> f32 {
        if self.trigger_value.is_nan() {
            0.0
        } else {
            self.trigger_value.clamp(0.0, 1.0)
        }
    }

    pub fn is_secondary_pressed(&self) -> bool {
        self.b_value > 0.5
    }
}

/// Tracked head (HMD) pose.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Head {
    pub position: Vector3<f32>,
    pub rotation: Quaternion<f32>,
}

impl Default for Head {
    fn default() -> Self {
        Head {
            position: vec3(0.0, 0.0, 0.0),
            rotation: Quaternion::new(1.0, 0.0, 0.0, 0.0),
        }
    }
}

impl Head {
    /// A head at `position` looking along `forward`.
    pub fn facing(position: Vector3<f32>, forward: Vector3<f32>) -> Head {
        Head {
            position,
            rotation: math::look_rotation(forward, math::UP),
        }
    }

    pub fn forward(&self) -> Vector3<f32> {
        math::forward(self.rotation)
    }
}

/// Everything the runtime polled from the VR input layer this tick.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputContext {
    pub head: Head,
    pub left_hand: Hand,
    pub right_hand: Hand,
}
