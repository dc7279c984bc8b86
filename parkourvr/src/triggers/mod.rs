// Trigger volumes: stage banners, task zones and coins placed along the course.

pub mod trigger_router;
pub mod trigger_volume;

pub use trigger_router::{TriggerConfig, TriggerRouter};
pub use trigger_volume::{TriggerVolume, TriggerVolumeKind, VolumeId};
