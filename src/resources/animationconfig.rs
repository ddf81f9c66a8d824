//! Animation configuration resource.
//!
//! Holds the defaults used to build animation controllers, loaded from an INI
//! file. Missing keys keep their defaults.
//!
//! # Configuration File Format
//!
//! ```ini
//! [animation]
//! texture_atlas = assets/hero.atlas
//! file_extension = png
//! anchor_x = 0.5
//! anchor_y = 0.0
//! frames_per_second = 3
//! rest_on_first_frame = false
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::{info, warn};
use std::path::PathBuf;

use crate::atlas::error::{AtlasError, AtlasResult};
use crate::components::spritenode::AnchorPoint;

const SECTION: &str = "animation";

pub const DEFAULT_FILE_EXTENSION: &str = "png";
pub const DEFAULT_FRAMES_PER_SECOND: f32 = 3.0;
const DEFAULT_REST_ON_FIRST_FRAME: bool = false;
const DEFAULT_CONFIG_PATH: &str = "./animation.ini";

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct AnimationConfig {
    /// Directory holding the frame textures. No default.
    pub texture_atlas: Option<PathBuf>,
    /// Extension of the frame textures, without the dot.
    pub file_extension: String,
    pub anchor_point: AnchorPoint,
    pub frames_per_second: f32,
    /// Snap to frame 0 when playback stops.
    pub rest_on_first_frame: bool,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationConfig {
    pub fn new() -> Self {
        Self {
            texture_atlas: None,
            file_extension: DEFAULT_FILE_EXTENSION.to_string(),
            anchor_point: AnchorPoint::default(),
            frames_per_second: DEFAULT_FRAMES_PER_SECOND,
            rest_on_first_frame: DEFAULT_REST_ON_FIRST_FRAME,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    pub fn load_from_file(&mut self) -> AtlasResult<()> {
        let mut config = Ini::new();
        config.load(&self.config_path).map_err(|e| AtlasError::Config {
            reason: format!("Failed to load config file: {}", e),
        })?;
        self.apply_ini(&config);

        info!(
            "Loaded animation config: atlas={:?}, ext={}, anchor=({}, {}), fps={}, rest_on_first_frame={}",
            self.texture_atlas,
            self.file_extension,
            self.anchor_point.x,
            self.anchor_point.y,
            self.frames_per_second,
            self.rest_on_first_frame
        );
        Ok(())
    }

    /// Load configuration from INI text instead of a file.
    pub fn load_from_str(&mut self, contents: &str) -> AtlasResult<()> {
        let mut config = Ini::new();
        config
            .read(contents.to_string())
            .map_err(|e| AtlasError::Config {
                reason: format!("Failed to parse config: {}", e),
            })?;
        self.apply_ini(&config);
        Ok(())
    }

    fn apply_ini(&mut self, config: &Ini) {
        if let Some(atlas) = config.get(SECTION, "texture_atlas") {
            self.texture_atlas = Some(PathBuf::from(atlas));
        }
        if let Some(ext) = config.get(SECTION, "file_extension") {
            self.file_extension = ext.trim_start_matches('.').to_string();
        }
        if let Some(x) = read_value(config.getfloat(SECTION, "anchor_x"), "anchor_x") {
            self.anchor_point.x = x as f32;
        }
        if let Some(y) = read_value(config.getfloat(SECTION, "anchor_y"), "anchor_y") {
            self.anchor_point.y = y as f32;
        }
        if let Some(fps) = read_value(
            config.getfloat(SECTION, "frames_per_second"),
            "frames_per_second",
        ) {
            self.frames_per_second = fps as f32;
        }
        if let Some(rest) = read_value(
            config.getbool(SECTION, "rest_on_first_frame"),
            "rest_on_first_frame",
        ) {
            self.rest_on_first_frame = rest;
        }
    }

    /// Save configuration to the INI file.
    pub fn save_to_file(&self) -> AtlasResult<()> {
        let mut config = Ini::new();
        if let Some(atlas) = &self.texture_atlas {
            config.set(SECTION, "texture_atlas", Some(atlas.display().to_string()));
        }
        config.set(SECTION, "file_extension", Some(self.file_extension.clone()));
        config.set(SECTION, "anchor_x", Some(self.anchor_point.x.to_string()));
        config.set(SECTION, "anchor_y", Some(self.anchor_point.y.to_string()));
        config.set(
            SECTION,
            "frames_per_second",
            Some(self.frames_per_second.to_string()),
        );
        config.set(
            SECTION,
            "rest_on_first_frame",
            Some(self.rest_on_first_frame.to_string()),
        );

        config
            .write(&self.config_path)
            .map_err(|e| AtlasError::Config {
                reason: format!("Failed to save config file: {}", e),
            })?;

        info!("Saved animation config to {:?}", self.config_path);
        Ok(())
    }
}

/// Unwrap a typed INI lookup. A malformed value is logged and the default kept.
fn read_value<T>(value: Result<Option<T>, String>, key: &str) -> Option<T> {
    match value {
        Ok(value) => value,
        Err(e) => {
            warn!("Ignoring [{}] {}: {}", SECTION, key, e);
            None
        }
    }
}
