pub mod config;
pub mod effect;
pub mod error;
pub mod gameplay;
pub mod input_context;
pub mod locomotion;
pub mod player;
pub mod session;
pub mod triggers;

pub use config::GameConfig;
pub use effect::Effect;
pub use error::{ConfigError, ConfigResult};
pub use input_context::{Hand, Handedness, Head, InputContext};
pub use locomotion::PullLocomotion;
pub use player::Transform;
pub use session::ParkourSession;

pub use engine::time::Time;
