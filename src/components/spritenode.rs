//! Renderable sprite target.
//!
//! [`SpriteTarget`] is the surface an
//! [`AnimationController`](crate::components::animationcontroller::AnimationController)
//! drives: it can show a static texture and run tagged looping frame actions.
//! [`SpriteNode`] is the engine's own implementation; a renderer reads its
//! `texture` and `anchor` every frame, and the
//! [`sprite_playback`](crate::systems::animation::sprite_playback) system
//! advances its actions.

use bevy_ecs::prelude::Component;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::atlas::source::TextureKey;

/// Output collaborator of the animation controller.
pub trait SpriteTarget: Send + Sync + 'static {
    /// Show a static texture (or nothing).
    fn set_texture(&mut self, texture: Option<TextureKey>);

    /// Loop `frames` forever, `time_per_frame` seconds each, under `key`.
    ///
    /// An action already running under `key` is replaced, never stacked.
    fn run_looping_action(&mut self, frames: Vec<TextureKey>, time_per_frame: f32, key: &str);

    /// Cancel the action running under `key`, if any.
    fn remove_action(&mut self, key: &str);
}

/// Pivot of the sprite in unit coordinates, `(0, 0)` being bottom-left.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnchorPoint {
    pub x: f32,
    pub y: f32,
}

impl AnchorPoint {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Default for AnchorPoint {
    /// Bottom-center, so characters stand on their position.
    fn default() -> Self {
        Self::new(0.5, 0.0)
    }
}

/// A looping frame action in progress.
#[derive(Debug, Clone, PartialEq)]
struct LoopingAction {
    frames: Vec<TextureKey>,
    time_per_frame: f32,
    frame_index: usize,
    elapsed: f32,
}

impl LoopingAction {
    fn current(&self) -> Option<&TextureKey> {
        self.frames.get(self.frame_index)
    }

    /// Steps are computed by division, so a huge `dt` or a tiny
    /// `time_per_frame` costs the same as a single frame. A non-finite or
    /// negative `dt` is ignored.
    fn advance(&mut self, dt: f32) {
        if self.frames.is_empty() || self.time_per_frame <= 0.0 || !dt.is_finite() || dt < 0.0 {
            return;
        }
        let elapsed = f64::from(self.elapsed) + f64::from(dt);
        let time_per_frame = f64::from(self.time_per_frame);
        let steps = (elapsed / time_per_frame).floor();
        if steps < 1.0 {
            self.elapsed = elapsed as f32;
            return;
        }
        let len = self.frames.len();
        let skipped = (steps % len as f64) as usize;
        self.frame_index = (self.frame_index + skipped) % len;
        self.elapsed = (elapsed - steps * time_per_frame).clamp(0.0, time_per_frame) as f32;
    }
}

/// Sprite whose visible texture is either static or driven by actions.
#[derive(Component, Debug, Clone, Default)]
pub struct SpriteNode {
    /// Texture currently on screen.
    pub texture: Option<TextureKey>,
    pub anchor: AnchorPoint,
    actions: FxHashMap<String, LoopingAction>,
}

impl SpriteNode {
    pub fn new(texture: Option<TextureKey>, anchor: AnchorPoint) -> Self {
        Self {
            texture,
            anchor,
            actions: FxHashMap::default(),
        }
    }

    pub fn has_action(&self, key: &str) -> bool {
        self.actions.contains_key(key)
    }

    pub fn action_count(&self) -> usize {
        self.actions.len()
    }

    /// Position within the frames of the action under `key`.
    pub fn action_frame_index(&self, key: &str) -> Option<usize> {
        self.actions.get(key).map(|action| action.frame_index)
    }

    /// Step every running action by `dt` seconds and show its current frame.
    pub fn advance(&mut self, dt: f32) {
        for action in self.actions.values_mut() {
            action.advance(dt);
            if let Some(frame) = action.current() {
                self.texture = Some(frame.clone());
            }
        }
    }
}

impl SpriteTarget for SpriteNode {
    fn set_texture(&mut self, texture: Option<TextureKey>) {
        self.texture = texture;
    }

    fn run_looping_action(&mut self, frames: Vec<TextureKey>, time_per_frame: f32, key: &str) {
        let action = LoopingAction {
            frames,
            time_per_frame,
            frame_index: 0,
            elapsed: 0.0,
        };
        if let Some(first) = action.current() {
            self.texture = Some(first.clone());
        }
        self.actions.insert(key.to_string(), action);
    }

    fn remove_action(&mut self, key: &str) {
        self.actions.remove(key);
    }
}
