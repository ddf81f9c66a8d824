//! Sprite playback system.
//!
//! [`sprite_playback`] steps the looping actions of every controller's
//! [`SpriteNode`](crate::components::spritenode::SpriteNode) by the world
//! delta, so the visible texture follows the running animation. Controllers
//! only start and stop actions; this system is what makes frames advance.

use bevy_ecs::prelude::*;

use crate::atlas::animationtype::AnimationType;
use crate::components::animationcontroller::AnimationController;
use crate::resources::worldtime::WorldTime;

/// Advance sprite frame actions.
///
/// Contract
/// - Reads [`WorldTime`] for the scaled delta.
/// - Mutates the [`SpriteNode`](crate::components::spritenode::SpriteNode)
///   owned by each [`AnimationController`] of identity `A`.
/// - Stopped controllers have no running action and are left as is.
pub fn sprite_playback<A: AnimationType>(
    mut query: Query<&mut AnimationController<A>>,
    time: Res<WorldTime>,
) {
    for mut controller in query.iter_mut() {
        if !controller.is_animating() {
            continue;
        }
        controller.target_mut().advance(time.delta);
    }
}
