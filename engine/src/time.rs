use std::time::Duration;

/// Frame timing handed to every per-tick update.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Time {
    /// Time since the previous tick.
    pub elapsed: Duration,
    /// Time since the session started.
    pub total: Duration,
}

impl Time {
    /// Build a tick from a raw seconds value as reported by a runtime.
    /// Negative and non-finite values collapse to a zero-length tick.
    pub fn from_delta_secs(delta: f32, total: Duration) -> Time {
        let elapsed = Duration::try_from_secs_f32(delta).unwrap_or(Duration::ZERO);
        Time { elapsed, total }
    }

    pub fn delta_secs(&self) -> f32 {
        self.elapsed.as_secs_f32()
    }
}
