//! Two-state animation playback controller.
//!
//! An [`AnimationController`] selects one animation of a shared
//! [`AnimationLibrary`] and asks its [`SpriteTarget`] to loop that
//! animation's frames while the controller is [`AnimationState::Animating`].
//! The frame stepping itself belongs to the target; the controller only
//! starts, replaces and cancels a single looping action tagged
//! [`CURRENT_ANIMATION_KEY`].
//!
//! | old state      | new state      | effect                                   |
//! |----------------|----------------|------------------------------------------|
//! | `NotAnimating` | `Animating`    | start looping the current animation      |
//! | `Animating`    | `NotAnimating` | cancel the loop (optionally rest frame 0) |
//! | `Animating`    | `Animating`    | nothing                                  |
//! | `NotAnimating` | `NotAnimating` | nothing                                  |

use std::sync::Arc;

use bevy_ecs::prelude::Component;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::atlas::animationtype::AnimationType;
use crate::atlas::error::{AtlasError, AtlasResult};
use crate::atlas::keypath::Keypath;
use crate::atlas::library::AnimationLibrary;
use crate::components::spritenode::{SpriteNode, SpriteTarget};

/// Tag of the looping action run by every controller.
pub const CURRENT_ANIMATION_KEY: &str = "current animation";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AnimationState {
    #[default]
    NotAnimating,
    Animating,
}

/// Plays animations from a shared library on an owned sprite target.
#[derive(Component, Debug)]
pub struct AnimationController<A: AnimationType, T: SpriteTarget = SpriteNode> {
    library: Arc<AnimationLibrary<A>>,
    target: T,
    default_animation: A,
    current_animation: A,
    state: AnimationState,
    frames_per_second: f32,
    rest_on_first_frame: bool,
}

impl<A: AnimationType, T: SpriteTarget> AnimationController<A, T> {
    /// Create a stopped controller showing the library's default texture.
    pub fn new(
        library: Arc<AnimationLibrary<A>>,
        mut target: T,
        frames_per_second: f32,
    ) -> AtlasResult<Self> {
        validate_frames_per_second(frames_per_second)?;
        target.set_texture(library.default_texture().cloned());
        Ok(Self {
            library,
            target,
            default_animation: A::default_value(),
            current_animation: A::default_value(),
            state: AnimationState::NotAnimating,
            frames_per_second,
            rest_on_first_frame: false,
        })
    }

    /// Snap to frame 0 of the current animation whenever playback stops.
    pub fn with_rest_on_first_frame(mut self, rest: bool) -> Self {
        self.rest_on_first_frame = rest;
        self
    }

    pub fn library(&self) -> &Arc<AnimationLibrary<A>> {
        &self.library
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut T {
        &mut self.target
    }

    pub fn state(&self) -> AnimationState {
        self.state
    }

    pub fn is_animating(&self) -> bool {
        self.state == AnimationState::Animating
    }

    /// The running animation, or the one that ran last.
    pub fn current_animation(&self) -> &A {
        &self.current_animation
    }

    pub fn default_animation(&self) -> &A {
        &self.default_animation
    }

    pub fn default_keypath(&self) -> Keypath<A> {
        Keypath::new(self.default_animation.clone(), 0)
    }

    pub fn frames_per_second(&self) -> f32 {
        self.frames_per_second
    }

    /// Takes effect the next time playback starts.
    pub fn set_frames_per_second(&mut self, fps: f32) -> AtlasResult<()> {
        validate_frames_per_second(fps)?;
        self.frames_per_second = fps;
        Ok(())
    }

    /// Seconds each frame stays on screen.
    pub fn time_per_frame(&self) -> f32 {
        1.0 / self.frames_per_second
    }

    /// Switch animations, restarting playback if currently animating.
    ///
    /// The new animation is recorded even when the library has no frames for
    /// it; in that case the loop is cancelled, the last frame stays on screen
    /// and [`AtlasError::MissingAnimation`] is returned.
    pub fn set_current_animation(&mut self, animation: A) -> AtlasResult<()> {
        if self.current_animation == animation {
            return Ok(());
        }
        debug!(
            "AnimationController: {:?} -> {:?}",
            self.current_animation, animation
        );
        self.current_animation = animation;
        match self.state {
            AnimationState::Animating => self.start_animating(),
            AnimationState::NotAnimating => Ok(()),
        }
    }

    /// Apply a state transition.
    ///
    /// The new state is always recorded; starting fails with
    /// [`AtlasError::MissingAnimation`] if the current animation is not in
    /// the library, leaving the target untouched.
    pub fn set_state(&mut self, new_state: AnimationState) -> AtlasResult<()> {
        let old_state = self.state;
        self.state = new_state;

        match (old_state, new_state) {
            (AnimationState::NotAnimating, AnimationState::Animating) => self.start_animating(),
            (AnimationState::Animating, AnimationState::NotAnimating) => {
                self.stop_animating();
                Ok(())
            }
            (AnimationState::Animating, AnimationState::Animating)
            | (AnimationState::NotAnimating, AnimationState::NotAnimating) => Ok(()),
        }
    }

    fn start_animating(&mut self) -> AtlasResult<()> {
        let time_per_frame = self.time_per_frame();
        let Some(frames) = self.library.textures_for_animation(&self.current_animation) else {
            self.target.remove_action(CURRENT_ANIMATION_KEY);
            return Err(AtlasError::MissingAnimation {
                animation: self.current_animation.filename_component().to_string(),
            });
        };
        self.target
            .run_looping_action(frames.to_vec(), time_per_frame, CURRENT_ANIMATION_KEY);
        Ok(())
    }

    fn stop_animating(&mut self) {
        self.target.remove_action(CURRENT_ANIMATION_KEY);
        if self.rest_on_first_frame {
            if let Some(rest) = self
                .library
                .texture_for_animation(&self.current_animation, 0)
            {
                self.target.set_texture(Some(rest.clone()));
            }
        }
    }
}

fn validate_frames_per_second(fps: f32) -> AtlasResult<()> {
    if fps.is_finite() && fps > 0.0 {
        Ok(())
    } else {
        Err(AtlasError::InvalidFramesPerSecond { fps })
    }
}
