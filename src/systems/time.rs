//! Playback clock system.
//!
//! Drives the [`WorldTime`](crate::resources::worldtime::WorldTime) resource
//! that [`sprite_playback`](crate::systems::animation::sprite_playback)
//! reads. Call it once per frame before running the playback schedule.
use bevy_ecs::prelude::*;

use crate::resources::worldtime::WorldTime;

/// Feed one frame of `dt` unscaled seconds to the playback clock.
pub fn update_world_time(world: &mut World, dt: f32) {
    world.resource_mut::<WorldTime>().advance(dt);
}
