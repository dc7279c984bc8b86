use cgmath::Vector3;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VolumeId(pub u32);

/// What entering a volume does. Each volume carries exactly one kind.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TriggerVolumeKind {
    /// Banner marking the start of a course stage.
    StageMarker,
    /// Zone that starts the object-interaction task.
    InteractionZone,
    /// Coin pickup.
    Collectible,
    /// A tag this module does not handle. Entering it does nothing.
    Unknown(String),
}

impl TriggerVolumeKind {
    /// Resolve a scene tag (`banner`, `objectInteractionTask`, `coin`).
    pub fn from_tag(tag: &str) -> TriggerVolumeKind {
        match tag {
            "banner" => TriggerVolumeKind::StageMarker,
            "objectInteractionTask" => TriggerVolumeKind::InteractionZone,
            "coin" => TriggerVolumeKind::Collectible,
            other => TriggerVolumeKind::Unknown(other.to_owned()),
        }
    }
}

impl From<&str> for TriggerVolumeKind {
    fn from(tag: &str) -> Self {
        TriggerVolumeKind::from_tag(tag)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TriggerVolume {
    pub id: VolumeId,
    pub name: String,
    pub kind: TriggerVolumeKind,
    pub position: Vector3<f32>,
    /// Inactive volumes ignore entry events.
    pub active: bool,
}

impl TriggerVolume {
    pub fn new(
        id: VolumeId,
        name: impl Into<String>,
        kind: TriggerVolumeKind,
        position: Vector3<f32>,
    ) -> TriggerVolume {
        TriggerVolume {
            id,
            name: name.into(),
            kind,
            position,
            active: true,
        }
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }
}
