//! Error taxonomy for atlas indexing and animation playback.

use thiserror::Error;

/// Convenience alias used across the atlas and controller APIs.
pub type AtlasResult<T> = Result<T, AtlasError>;

/// Everything that can go wrong while indexing textures or driving playback.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AtlasError {
    /// A texture name does not follow `<animation>-<frame>.<ext>`.
    #[error("Cannot create a keypath from texture name '{name}'")]
    NameParse { name: String },

    /// A parsed keypath has no texture in the named-texture source.
    #[error("Could not load texture for name: '{name}'")]
    MissingTexture { name: String },

    /// The controller was asked to play an animation the library lacks.
    #[error("Animation changed, but no frame sequence was found for '{animation}'")]
    MissingAnimation { animation: String },

    /// A builder was asked to `build()` without a required value.
    #[error("Cannot build() without a value for '{field}'")]
    MissingBuilderInput { field: &'static str },

    /// Playback rate must be strictly positive.
    #[error("Frames per second must be positive, got {fps}")]
    InvalidFramesPerSecond { fps: f32 },

    /// The texture source could not be enumerated.
    #[error("Failed to read texture source '{path}': {reason}")]
    Source { path: String, reason: String },

    /// The configuration file could not be read or written.
    #[error("Config error: {reason}")]
    Config { reason: String },
}

impl AtlasError {
    /// Short category label used in log lines.
    pub fn category(&self) -> &'static str {
        match self {
            Self::NameParse { .. } | Self::MissingTexture { .. } => "ingest",
            Self::MissingAnimation { .. } | Self::InvalidFramesPerSecond { .. } => "playback",
            Self::MissingBuilderInput { .. } | Self::Config { .. } => "config",
            Self::Source { .. } => "io",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offender() {
        let err = AtlasError::NameParse {
            name: "notanumber".into(),
        };
        assert!(err.to_string().contains("'notanumber'"));

        let err = AtlasError::MissingBuilderInput {
            field: "texture_atlas",
        };
        assert!(err.to_string().contains("texture_atlas"));
    }

    #[test]
    fn test_categories() {
        let err = AtlasError::MissingTexture { name: "x".into() };
        assert_eq!(err.category(), "ingest");
        let err = AtlasError::MissingAnimation {
            animation: "x".into(),
        };
        assert_eq!(err.category(), "playback");
    }
}
