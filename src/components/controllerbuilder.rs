//! Builder for ready-to-spawn animation controllers.
//!
//! Collects the texture atlas directory and playback parameters (usually from
//! an [`AnimationConfig`]), indexes the atlas into an
//! [`AnimationLibrary`](crate::atlas::library::AnimationLibrary) and wraps it
//! in an [`AnimationController`] driving a fresh [`SpriteNode`].

use std::path::PathBuf;
use std::sync::Arc;

use log::info;

use crate::atlas::animationtype::AnimationType;
use crate::atlas::error::{AtlasError, AtlasResult};
use crate::atlas::library::{AnimationLibrary, AnimationLibraryBuilder};
use crate::atlas::source::DirectoryAtlas;
use crate::components::animationcontroller::AnimationController;
use crate::components::spritenode::{AnchorPoint, SpriteNode};
use crate::resources::animationconfig::{
    AnimationConfig, DEFAULT_FILE_EXTENSION, DEFAULT_FRAMES_PER_SECOND,
};

#[derive(Debug, Clone, PartialEq)]
pub struct AnimationControllerBuilder {
    pub texture_atlas: Option<PathBuf>,
    pub file_extension: String,
    pub anchor_point: AnchorPoint,
    pub frames_per_second: f32,
    pub rest_on_first_frame: bool,
}

impl Default for AnimationControllerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationControllerBuilder {
    pub fn new() -> Self {
        Self {
            texture_atlas: None,
            file_extension: DEFAULT_FILE_EXTENSION.to_string(),
            anchor_point: AnchorPoint::default(),
            frames_per_second: DEFAULT_FRAMES_PER_SECOND,
            rest_on_first_frame: false,
        }
    }

    /// Take every value from `config`; an unset atlas keeps the current one.
    pub fn configure(&mut self, config: &AnimationConfig) {
        if let Some(atlas) = &config.texture_atlas {
            self.texture_atlas = Some(atlas.clone());
        }
        self.file_extension = config.file_extension.clone();
        self.anchor_point = config.anchor_point;
        self.frames_per_second = config.frames_per_second;
        self.rest_on_first_frame = config.rest_on_first_frame;
    }

    pub fn with_texture_atlas(mut self, atlas: impl Into<PathBuf>) -> Self {
        self.texture_atlas = Some(atlas.into());
        self
    }

    pub fn with_file_extension(mut self, ext: impl Into<String>) -> Self {
        self.file_extension = ext.into();
        self
    }

    pub fn with_anchor_point(mut self, anchor: AnchorPoint) -> Self {
        self.anchor_point = anchor;
        self
    }

    pub fn with_frames_per_second(mut self, fps: f32) -> Self {
        self.frames_per_second = fps;
        self
    }

    pub fn with_rest_on_first_frame(mut self, rest: bool) -> Self {
        self.rest_on_first_frame = rest;
        self
    }

    /// Index the configured atlas directory into a library.
    pub fn build_library<A: AnimationType>(&self) -> AtlasResult<AnimationLibrary<A>> {
        let atlas_dir = self
            .texture_atlas
            .as_ref()
            .ok_or(AtlasError::MissingBuilderInput {
                field: "texture_atlas",
            })?;
        let source = DirectoryAtlas::open(atlas_dir, &self.file_extension)?;

        let mut builder = AnimationLibraryBuilder::new();
        builder.use_textures_from_atlas(&source);
        let library = builder.build()?;
        info!(
            "Indexed {} animations from {}",
            library.len(),
            atlas_dir.display()
        );
        Ok(library)
    }

    /// Index the atlas and wrap it in a stopped controller.
    pub fn build<A: AnimationType>(&self) -> AtlasResult<AnimationController<A>> {
        let library = self.build_library()?;
        self.build_with_library(Arc::new(library))
    }

    /// Build a controller around an already indexed, possibly shared, library.
    pub fn build_with_library<A: AnimationType>(
        &self,
        library: Arc<AnimationLibrary<A>>,
    ) -> AtlasResult<AnimationController<A>> {
        let node = SpriteNode::new(None, self.anchor_point);
        Ok(AnimationController::new(library, node, self.frames_per_second)?
            .with_rest_on_first_frame(self.rest_on_first_frame))
    }
}
