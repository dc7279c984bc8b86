use cgmath::{Vector3, vec3};
use engine::game_log;

use super::ProgressTracker;

/// In-memory parkour progress, as kept by a single-player session.
#[derive(Clone, Debug, PartialEq)]
pub struct ParkourCounter {
    pub current_stage: String,
    pub is_stage_change: bool,
    /// Respawn is only allowed once the course has started.
    pub parkour_start: bool,
    pub current_respawn_pos: Vector3<f32>,
    pub coin_count: u32,
}

impl Default for ParkourCounter {
    fn default() -> Self {
        ParkourCounter {
            current_stage: String::new(),
            is_stage_change: false,
            parkour_start: false,
            current_respawn_pos: vec3(0.0, 0.0, 0.0),
            coin_count: 0,
        }
    }
}

impl ParkourCounter {
    pub fn new() -> ParkourCounter {
        ParkourCounter::default()
    }

    pub fn start(&mut self, respawn_position: Vector3<f32>) {
        self.parkour_start = true;
        self.current_respawn_pos = respawn_position;
    }

    pub fn set_checkpoint(&mut self, respawn_position: Vector3<f32>) {
        self.current_respawn_pos = respawn_position;
    }

    /// Consume the stage-changed flag.
    pub fn take_stage_change(&mut self) -> bool {
        std::mem::replace(&mut self.is_stage_change, false)
    }
}

impl ProgressTracker for ParkourCounter {
    fn current_stage(&self) -> &str {
        &self.current_stage
    }

    fn set_current_stage(&mut self, stage: &str) {
        game_log!(INFO, "entering stage {}", stage);
        self.current_stage = stage.to_owned();
    }

    fn mark_stage_changed(&mut self) {
        self.is_stage_change = true;
    }

    fn respawn_position(&self) -> Vector3<f32> {
        self.current_respawn_pos
    }

    fn is_respawn_gate_open(&self) -> bool {
        self.parkour_start
    }

    fn coin_count(&self) -> u32 {
        self.coin_count
    }

    fn add_coin(&mut self) {
        self.coin_count += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_opens_on_start() {
        let mut counter = ParkourCounter::new();
        assert!(!counter.is_respawn_gate_open());
        counter.start(vec3(1.0, 2.0, 3.0));
        assert!(counter.is_respawn_gate_open());
        assert_eq!(counter.respawn_position(), vec3(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_take_stage_change_clears_flag() {
        let mut counter = ParkourCounter::new();
        counter.mark_stage_changed();
        assert!(counter.take_stage_change());
        assert!(!counter.take_stage_change());
    }
}
