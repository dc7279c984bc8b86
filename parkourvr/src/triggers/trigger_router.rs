use cgmath::vec3;
use engine::trigger_log;
use serde::{Deserialize, Serialize};

use super::trigger_volume::{TriggerVolume, TriggerVolumeKind};
use crate::{
    effect::Effect,
    gameplay::{ProgressTracker, TaskMeasurement},
    input_context::InputContext,
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TriggerConfig {
    pub pickup_sound: String,
    /// Height the task UI aims at when the task zone sits above ground level.
    pub raised_task_height: f32,
}

impl Default for TriggerConfig {
    fn default() -> Self {
        TriggerConfig {
            pickup_sound: "coin_pickup".to_owned(),
            raised_task_height: 12.0,
        }
    }
}

/// Dispatches volume-entry events to their gameplay effect.
pub struct TriggerRouter {
    config: TriggerConfig,
}

impl TriggerRouter {
    pub fn new(config: TriggerConfig) -> TriggerRouter {
        TriggerRouter { config }
    }

    pub fn with_default_config() -> TriggerRouter {
        TriggerRouter::new(TriggerConfig::default())
    }

    /// Handle the player entering `volume`. Exactly one branch runs per event.
    ///
    /// A missing collaborator skips that branch only; the volume stays untouched.
    pub fn on_enter(
        &self,
        volume: &mut TriggerVolume,
        input: &InputContext,
        progress: Option<&mut dyn ProgressTracker>,
        task: Option<&mut dyn TaskMeasurement>,
    ) -> Vec<Effect> {
        if !volume.active {
            trigger_log!(TRACE, "ignoring inactive volume {}", volume.name);
            return Vec::new();
        }

        match &volume.kind {
            TriggerVolumeKind::StageMarker => {
                let Some(progress) = progress else {
                    trigger_log!(WARN, "stage marker {} without a progress tracker", volume.name);
                    return Vec::new();
                };
                progress.set_current_stage(&volume.name);
                progress.mark_stage_changed();
                Vec::new()
            }
            TriggerVolumeKind::InteractionZone => {
                let Some(task) = task else {
                    trigger_log!(WARN, "task zone {} without a task measurement", volume.name);
                    return Vec::new();
                };
                self.start_task(volume, input, task);
                Vec::new()
            }
            TriggerVolumeKind::Collectible => {
                let Some(progress) = progress else {
                    trigger_log!(WARN, "coin {} without a progress tracker", volume.name);
                    return Vec::new();
                };
                progress.add_coin();
                volume.deactivate();
                trigger_log!(DEBUG, coins = progress.coin_count(), "collected {}", volume.name);
                vec![
                    Effect::PlaySound {
                        name: self.config.pickup_sound.clone(),
                    },
                    Effect::HideVolume { volume: volume.id },
                ]
            }
            TriggerVolumeKind::Unknown(tag) => {
                trigger_log!(TRACE, "ignoring volume {} with tag {}", volume.name, tag);
                Vec::new()
            }
        }
    }

    fn start_task(&self, volume: &TriggerVolume, input: &InputContext, task: &mut dyn TaskMeasurement) {
        task.start_task();
        task.clear_score_text();
        task.reset_accumulators();

        let target_height = if volume.position.y > 0.0 {
            self.config.raised_task_height
        } else {
            0.0
        };
        let head = input.head.position;
        let ui = task.task_ui_mut();
        ui.look_at(vec3(head.x, target_height, head.z));
        // Forward (-Z) now points at the player; turn so the panel's +Z face does
        ui.rotate_y(180.0);

        task.show_start_panel();
    }
}
