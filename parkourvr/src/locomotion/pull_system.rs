use cgmath::{Vector3, Zero};
use engine::{locomotion_log, time::Time};

use super::{
    direction,
    hand_tracker::HandTracker,
    haptics,
    pull_config::{HapticConfig, PullConfig, RespawnConfig},
    pull_gate::PullGate,
    respawn,
};
use crate::{
    effect::Effect, gameplay::ProgressTracker, input_context::InputContext, player::Transform,
};

/// Locomotion state carried between ticks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionState {
    pub velocity: Vector3<f32>,
    /// Recomputed every tick from the triggers, never carried over.
    pub is_pulling: bool,
}

impl Default for MotionState {
    fn default() -> Self {
        MotionState {
            velocity: Vector3::zero(),
            is_pulling: false,
        }
    }
}

/// Two-hand pull locomotion: trigger + swing to fly where you look.
pub struct PullLocomotion {
    config: PullConfig,
    haptics: HapticConfig,
    respawn: RespawnConfig,
    hands: HandTracker,
    state: MotionState,
}

impl PullLocomotion {
    pub fn new(config: PullConfig, haptics: HapticConfig, respawn: RespawnConfig) -> Self {
        PullLocomotion {
            config,
            haptics,
            respawn,
            hands: HandTracker::new(),
            state: MotionState::default(),
        }
    }

    pub fn with_default_config() -> Self {
        Self::new(
            PullConfig::default(),
            HapticConfig::default(),
            RespawnConfig::default(),
        )
    }

    /// Seed the previous hand positions, as at session start.
    pub fn prime(&mut self, input: &InputContext) {
        self.hands.prime(input);
    }

    /// Run one tick: integrate hand motion, move (or damp), vibrate, maybe respawn.
    ///
    /// Returns the effects for the host to apply in order; a respawn always comes
    /// after the movement of the same tick.
    pub fn advance(
        &mut self,
        time: &Time,
        input: &InputContext,
        player: &Transform,
        progress: Option<&dyn ProgressTracker>,
    ) -> Vec<Effect> {
        let dt = time.delta_secs();
        let mut effects = self.update_motion(dt, input, player);

        effects.extend(haptics::vibration_effects(
            &self.haptics,
            self.state.is_pulling,
            self.state.velocity,
        ));
        effects.extend(respawn::respawn_effects(&self.respawn, input, progress));
        effects
    }

    fn update_motion(&mut self, dt: f32, input: &InputContext, player: &Transform) -> Vec<Effect> {
        let motion = self.hands.update(input, dt);
        let gate = PullGate::evaluate(&motion, self.config.pull_threshold);

        let was_pulling = self.state.is_pulling;
        self.state.is_pulling = gate.is_pulling();
        if was_pulling != self.state.is_pulling {
            locomotion_log!(DEBUG, ?gate, "pull state changed");
        }

        match gate.base_velocity(&motion, self.config.speed_multiplier) {
            Some(base_velocity) => {
                self.state.velocity = direction::blend(
                    base_velocity,
                    input.head.forward(),
                    self.config.vertical_influence,
                );
                vec![Effect::SetPlayerPosition {
                    position: self.next_position(player.position, dt),
                    is_teleport: false,
                }]
            }
            None => {
                // Damped velocity is kept for haptics/telemetry but never moves the player
                self.state.velocity *= self.config.damping_factor;
                Vec::new()
            }
        }
    }

    fn next_position(&self, position: Vector3<f32>, dt: f32) -> Vector3<f32> {
        let dt = if dt > 0.0 && dt.is_finite() { dt } else { 0.0 };
        let mut new_position = position + self.state.velocity * dt;
        // f32::clamp panics when an unvalidated config has min > max
        new_position.y = new_position
            .y
            .max(self.config.min_height)
            .min(self.config.max_height);
        locomotion_log!(TRACE, velocity = ?self.state.velocity, position = ?new_position, "pull");
        new_position
    }

    pub fn state(&self) -> &MotionState {
        &self.state
    }

    /// Overwrite the carried velocity, e.g. when restoring a session.
    pub fn set_velocity(&mut self, velocity: Vector3<f32>) {
        self.state.velocity = velocity;
    }
}
