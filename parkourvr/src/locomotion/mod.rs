// Two-hand pull locomotion
//
// Hold a trigger and swing the controller to fly in the direction the head is
// looking. Hand swing speed sets the thrust, head pitch adds a bounded vertical
// share, and releasing both triggers stops translation while the stored velocity
// decays.

pub mod direction;
pub mod hand_tracker;
pub mod haptics;
pub mod pull_config;
pub mod pull_gate;
pub mod pull_system;
pub mod respawn;

pub use hand_tracker::{HandMotion, HandSample, HandTracker};
pub use pull_config::{HapticConfig, PULL_THRESHOLD, PullConfig, RespawnConfig};
pub use pull_gate::PullGate;
pub use pull_system::{MotionState, PullLocomotion};
