// Collaborators that own parkour progress and the object-interaction task.
//
// Locomotion and the trigger router only talk to these through the traits below,
// so hosts can plug in their own UI-backed implementations.

pub mod parkour_counter;
pub mod selection_task;

pub use parkour_counter::ParkourCounter;
pub use selection_task::SelectionTaskMeasure;

use cgmath::Vector3;

use crate::player::Transform;

/// Parkour course progress: stage, checkpoint and coins.
pub trait ProgressTracker {
    fn current_stage(&self) -> &str;
    fn set_current_stage(&mut self, stage: &str);
    /// Tell the tracker the stage changed so it can refresh its counters.
    fn mark_stage_changed(&mut self);

    fn respawn_position(&self) -> Vector3<f32>;
    /// Whether teleporting back to the checkpoint is currently allowed.
    fn is_respawn_gate_open(&self) -> bool;

    fn coin_count(&self) -> u32;
    fn add_coin(&mut self);
}

/// Timing/accuracy measurement for the object-selection task.
pub trait TaskMeasurement {
    fn start_task(&mut self);
    fn clear_score_text(&mut self);
    /// Zero the accumulated error and accumulated time.
    fn reset_accumulators(&mut self);
    fn show_start_panel(&mut self);
    fn task_ui_mut(&mut self) -> &mut Transform;
}
