//! Playback clock resource.
//!
//! [`sprite_playback`](crate::systems::animation::sprite_playback) steps
//! every running sprite action by [`WorldTime::delta`]. Scaling time here
//! slows down or speeds up every animation in the world at once.

use bevy_ecs::prelude::Resource;

/// Simulation clock shared by the playback systems.
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct WorldTime {
    /// Scaled seconds since the world started.
    pub elapsed: f32,
    /// Scaled seconds of the last tick.
    pub delta: f32,
    /// Multiplier applied to every tick; 0 pauses playback.
    pub time_scale: f32,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            time_scale: 1.0,
        }
    }
}

impl WorldTime {
    pub fn with_time_scale(mut self, time_scale: f32) -> Self {
        self.time_scale = time_scale;
        self
    }

    /// Record one tick of `dt` unscaled seconds.
    ///
    /// A non-finite or negative scaled delta counts as a zero-length tick.
    pub fn advance(&mut self, dt: f32) {
        let scaled = dt * self.time_scale;
        self.delta = if scaled.is_finite() && scaled >= 0.0 {
            scaled
        } else {
            0.0
        };
        self.elapsed += self.delta;
    }

    pub fn is_paused(&self) -> bool {
        self.time_scale == 0.0
    }
}
