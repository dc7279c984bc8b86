use cgmath::Vector3;
use engine::{game_log, time::Time};

use crate::{
    config::GameConfig,
    effect::Effect,
    gameplay::{ParkourCounter, SelectionTaskMeasure},
    input_context::InputContext,
    locomotion::PullLocomotion,
    player::Transform,
    triggers::{TriggerRouter, TriggerVolume, VolumeId},
};

/// A single-player parkour run: the player rig, its locomotion, the course volumes
/// and the progress collaborators, stepped by a host-owned loop.
pub struct ParkourSession {
    pub player: Transform,
    pub locomotion: PullLocomotion,
    pub router: TriggerRouter,
    pub progress: ParkourCounter,
    pub task: SelectionTaskMeasure,
    volumes: Vec<TriggerVolume>,
}

impl ParkourSession {
    pub fn new(config: &GameConfig, spawn_position: Vector3<f32>) -> ParkourSession {
        ParkourSession {
            player: Transform::at(spawn_position),
            locomotion: PullLocomotion::new(
                config.locomotion.clone(),
                config.haptics.clone(),
                config.respawn.clone(),
            ),
            router: TriggerRouter::new(config.triggers.clone()),
            progress: ParkourCounter::new(),
            task: SelectionTaskMeasure::default(),
            volumes: Vec::new(),
        }
    }

    pub fn add_volume(&mut self, volume: TriggerVolume) {
        self.volumes.push(volume);
    }

    pub fn volume(&self, id: VolumeId) -> Option<&TriggerVolume> {
        self.volumes.iter().find(|volume| volume.id == id)
    }

    pub fn volumes(&self) -> &[TriggerVolume] {
        &self.volumes
    }

    /// One frame: move the player, then deliver the volume entries reported for this
    /// frame. Player-transform effects are applied; all effects are returned for the
    /// host to play out (haptics, sounds, hiding volumes).
    pub fn tick(&mut self, time: &Time, input: &InputContext, entered: &[VolumeId]) -> Vec<Effect> {
        let mut effects = self
            .locomotion
            .advance(time, input, &self.player, Some(&self.progress));
        self.player.apply_effects(&effects);

        for id in entered {
            effects.extend(self.enter_volume(*id, input));
        }
        effects
    }

    pub fn enter_volume(&mut self, id: VolumeId, input: &InputContext) -> Vec<Effect> {
        let Some(volume) = self.volumes.iter_mut().find(|volume| volume.id == id) else {
            game_log!(WARN, "entered unknown volume {:?}", id);
            return Vec::new();
        };
        self.router
            .on_enter(volume, input, Some(&mut self.progress), Some(&mut self.task))
    }
}
