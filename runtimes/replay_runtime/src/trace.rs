use anyhow::{Context, Result};
use cgmath::{Vector3, vec3};
use parkourvr::{
    Hand, Head, InputContext,
    triggers::{TriggerVolume, TriggerVolumeKind, VolumeId},
};
use serde::Deserialize;
use std::path::Path;

/// Recorded input for a run, as dumped by a headset runtime.
#[derive(Debug, Deserialize)]
pub struct InputTrace {
    pub spawn: [f32; 3],
    /// Checkpoint to respawn at; the respawn gate opens when present.
    #[serde(default)]
    pub checkpoint: Option<[f32; 3]>,
    #[serde(default)]
    pub volumes: Vec<VolumeRecord>,
    pub frames: Vec<FrameRecord>,
}

#[derive(Debug, Deserialize)]
pub struct VolumeRecord {
    pub id: u32,
    pub name: String,
    pub tag: String,
    pub position: [f32; 3],
}

#[derive(Debug, Deserialize)]
pub struct FrameRecord {
    pub dt: f32,
    pub head: HeadRecord,
    pub left: HandRecord,
    pub right: HandRecord,
    #[serde(default)]
    pub entered: Vec<u32>,
}

#[derive(Debug, Deserialize)]
pub struct HeadRecord {
    pub position: [f32; 3],
    pub forward: [f32; 3],
}

#[derive(Debug, Deserialize)]
pub struct HandRecord {
    pub position: [f32; 3],
    #[serde(default)]
    pub trigger: f32,
    #[serde(default)]
    pub secondary: bool,
}

pub fn to_vec(v: [f32; 3]) -> Vector3<f32> {
    vec3(v[0], v[1], v[2])
}

impl InputTrace {
    pub fn load(path: &Path) -> Result<InputTrace> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read trace file: {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse trace file: {}", path.display()))
    }

    pub fn trigger_volumes(&self) -> Vec<TriggerVolume> {
        self.volumes
            .iter()
            .map(|record| {
                TriggerVolume::new(
                    VolumeId(record.id),
                    record.name.clone(),
                    TriggerVolumeKind::from_tag(&record.tag),
                    to_vec(record.position),
                )
            })
            .collect()
    }
}

impl FrameRecord {
    pub fn input_context(&self) -> InputContext {
        InputContext {
            head: Head::facing(to_vec(self.head.position), to_vec(self.head.forward)),
            left_hand: self.left.hand(),
            right_hand: self.right.hand(),
        }
    }

    pub fn entered_volumes(&self) -> Vec<VolumeId> {
        self.entered.iter().copied().map(VolumeId).collect()
    }
}

impl HandRecord {
    fn hand(&self) -> Hand {
        Hand::at(to_vec(self.position))
            .with_trigger(self.trigger)
            .with_secondary(self.secondary)
    }
}
