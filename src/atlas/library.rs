//! Animation libraries and their builder.
//!
//! An [`AnimationLibrary`] maps each animation identity to its
//! [`FrameSequence`]. It is assembled once by an [`AnimationLibraryBuilder`],
//! usually by scanning every texture name of a [`TextureSource`], and is
//! read-only afterwards so it can be shared between many controllers.
//!
//! Building is all-or-nothing: a single texture name that fails to parse or
//! resolve makes [`AnimationLibraryBuilder::build`] fail, so a typo in an
//! asset name never turns into a silently incomplete animation.

use std::collections::BTreeMap;
use std::fmt;

use log::debug;
use rustc_hash::FxHashMap;
use serde::Serialize;

use super::animationtype::AnimationType;
use super::error::{AtlasError, AtlasResult};
use super::framesequence::{FrameSequence, FrameSequenceBuilder};
use super::keypath::Keypath;
use super::source::{TextureKey, TextureSource};

/// Immutable lookup table from animation identity to frame sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationLibrary<A: AnimationType> {
    sequences: BTreeMap<A, FrameSequence>,
}

impl<A: AnimationType> Default for AnimationLibrary<A> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<A: AnimationType> AnimationLibrary<A> {
    pub fn new(sequences: BTreeMap<A, FrameSequence>) -> Self {
        Self { sequences }
    }

    pub fn empty() -> Self {
        Self {
            sequences: BTreeMap::new(),
        }
    }

    pub fn builder() -> AnimationLibraryBuilder<A> {
        AnimationLibraryBuilder::new()
    }

    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    pub fn has_animation(&self, animation: &A) -> bool {
        self.sequences.contains_key(animation)
    }

    /// The frame sequence of `animation`, if the library has one.
    pub fn textures_for_animation(&self, animation: &A) -> Option<&FrameSequence> {
        self.sequences.get(animation)
    }

    /// Alias of [`Self::textures_for_animation`].
    pub fn get(&self, animation: &A) -> Option<&FrameSequence> {
        self.textures_for_animation(animation)
    }

    pub fn texture_for_animation(&self, animation: &A, index: usize) -> Option<&TextureKey> {
        self.textures_for_animation(animation)?.texture_at(index)
    }

    pub fn texture_for_keypath(&self, keypath: &Keypath<A>) -> Option<&TextureKey> {
        self.texture_for_animation(&keypath.animation, keypath.frame_index)
    }

    pub fn default_keypath(&self) -> Keypath<A> {
        Keypath::default_keypath()
    }

    /// First frame of the default animation, if present.
    pub fn default_texture(&self) -> Option<&TextureKey> {
        self.texture_for_keypath(&self.default_keypath())
    }

    /// Every animation in the library, in ascending order.
    pub fn all_animations(&self) -> Vec<A> {
        self.sequences.keys().cloned().collect()
    }

    /// One keypath per stored frame, ordered by animation then frame.
    pub fn all_keypaths(&self) -> Vec<Keypath<A>> {
        self.sequences
            .iter()
            .flat_map(|(animation, seq)| {
                (0..seq.count()).map(move |index| Keypath::new(animation.clone(), index))
            })
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&A, &FrameSequence)> {
        self.sequences.iter()
    }

    /// Serializable view used for reporting.
    pub fn summary(&self) -> LibrarySummary {
        let animations = self
            .sequences
            .iter()
            .map(|(animation, seq)| {
                (
                    animation.filename_component().to_string(),
                    AnimationSummary {
                        frame_count: seq.count(),
                        textures: seq.iter().map(|t| t.as_str().to_string()).collect(),
                    },
                )
            })
            .collect();
        LibrarySummary {
            default_animation: A::default_value().filename_component().to_string(),
            default_texture: self.default_texture().map(|t| t.as_str().to_string()),
            animations,
        }
    }
}

impl<A: AnimationType> fmt::Display for AnimationLibrary<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<AnimationLibrary:")?;
        for (animation, seq) in &self.sequences {
            write!(f, " {}[{}]", animation.filename_component(), seq.count())?;
        }
        write!(f, ">")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LibrarySummary {
    pub default_animation: String,
    pub default_texture: Option<String>,
    pub animations: BTreeMap<String, AnimationSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnimationSummary {
    pub frame_count: usize,
    pub textures: Vec<String>,
}

/// One parsed `(keypath, texture)` pair waiting to be grouped.
#[derive(Debug, Clone, PartialEq)]
struct Entry<A: AnimationType> {
    keypath: Keypath<A>,
    texture: TextureKey,
}

/// Accumulates texture entries and groups them into an [`AnimationLibrary`].
///
/// Entries are kept as individual results so that failures from a texture
/// scan travel through the same channel as explicitly set textures.
#[derive(Debug, Clone)]
pub struct AnimationLibraryBuilder<A: AnimationType> {
    entries: Vec<AtlasResult<Entry<A>>>,
}

impl<A: AnimationType> Default for AnimationLibraryBuilder<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: AnimationType> AnimationLibraryBuilder<A> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Number of accumulated entries, failed ones included.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    pub fn set_texture(&mut self, texture: TextureKey, keypath: Keypath<A>) {
        self.entries.push(Ok(Entry { keypath, texture }));
    }

    /// Parse every texture name of `source` and queue the result.
    ///
    /// A name that is not a keypath queues [`AtlasError::NameParse`]; a name
    /// the source cannot resolve queues [`AtlasError::MissingTexture`].
    pub fn use_textures_from_atlas(&mut self, source: &impl TextureSource) {
        for name in source.texture_names() {
            let entry = Keypath::from_texture_name(&name)
                .ok_or_else(|| AtlasError::NameParse { name: name.clone() })
                .and_then(|keypath| {
                    source
                        .texture_named(&name)
                        .map(|texture| Entry { keypath, texture })
                        .ok_or_else(|| AtlasError::MissingTexture { name: name.clone() })
                });
            self.entries.push(entry);
        }
    }

    /// Group the queued entries by animation and build every sequence.
    ///
    /// Fails with the first queued error, if any.
    pub fn build(self) -> AtlasResult<AnimationLibrary<A>> {
        let entries = self.entries.into_iter().collect::<AtlasResult<Vec<_>>>()?;

        let mut groups: FxHashMap<A, FrameSequenceBuilder> = FxHashMap::default();
        for Entry { keypath, texture } in entries {
            groups
                .entry(keypath.animation)
                .or_default()
                .set_texture(texture, keypath.frame_index);
        }

        let sequences: BTreeMap<A, FrameSequence> = groups
            .into_iter()
            .map(|(animation, builder)| (animation, builder.build()))
            .collect();

        let library = AnimationLibrary::new(sequences);
        debug!("AnimationLibraryBuilder: built {}", library);
        Ok(library)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atlas::animationtype::testing::Walk;
    use crate::atlas::source::TextureAtlas;

    fn walk_atlas() -> TextureAtlas {
        let mut names = Vec::new();
        for walk in [Walk::Up, Walk::Down, Walk::Left, Walk::Right] {
            for frame in 1..=4 {
                names.push(Keypath::new(walk, frame).texture_name());
            }
        }
        names.into_iter().collect()
    }

    fn walk_library() -> AnimationLibrary<Walk> {
        let mut builder = AnimationLibraryBuilder::new();
        builder.use_textures_from_atlas(&walk_atlas());
        builder.build().unwrap()
    }

    #[test]
    fn test_builds_from_atlas() {
        let library = walk_library();
        assert_eq!(library.len(), 4);
        assert!(library.has_animation(&Walk::Down));
        assert!(library.has_animation(&Walk::Up));
        assert!(!library.has_animation(&Walk::Nonexistent));
        assert_eq!(library.get(&Walk::Down).map(FrameSequence::count), Some(4));
        assert_eq!(library.get(&Walk::Up).map(FrameSequence::count), Some(4));
    }

    #[test]
    fn test_frames_start_at_position_zero() {
        let library = walk_library();
        // frame files are numbered from 1
        assert_eq!(
            library.texture_for_animation(&Walk::Up, 0),
            Some(&TextureKey::from("walking-up-001.png"))
        );
        assert_eq!(
            library.texture_for_animation(&Walk::Up, 3),
            Some(&TextureKey::from("walking-up-004.png"))
        );
        assert_eq!(library.texture_for_animation(&Walk::Up, 4), None);
    }

    #[test]
    fn test_default_texture() {
        let library = walk_library();
        assert_eq!(library.default_keypath(), Keypath::new(Walk::Down, 0));
        assert_eq!(
            library.default_texture(),
            Some(&TextureKey::from("walking-down-001.png"))
        );
        assert_eq!(AnimationLibrary::<Walk>::empty().default_texture(), None);
    }

    #[test]
    fn test_all_keypaths_and_animations() {
        let library = walk_library();
        let keypaths = library.all_keypaths();
        assert_eq!(keypaths.len(), 16);
        for walk in [Walk::Up, Walk::Down, Walk::Left, Walk::Right] {
            for frame in 0..4 {
                assert!(keypaths.contains(&Keypath::new(walk, frame)));
            }
        }
        assert_eq!(
            library.all_animations(),
            vec![Walk::Up, Walk::Down, Walk::Left, Walk::Right]
        );
    }

    #[test]
    fn test_one_bad_name_fails_the_whole_build() {
        let mut atlas = walk_atlas();
        atlas.insert("walking-up-xyz.png", TextureKey::from("junk"));

        let mut builder = AnimationLibraryBuilder::<Walk>::new();
        builder.use_textures_from_atlas(&atlas);
        assert_eq!(builder.entry_count(), 17);
        assert_eq!(
            builder.build(),
            Err(AtlasError::NameParse {
                name: "walking-up-xyz.png".into()
            })
        );
    }

    #[test]
    fn test_set_texture_directly() {
        let mut builder = AnimationLibraryBuilder::new();
        builder.set_texture(TextureKey::from("b"), Keypath::new(Walk::Left, 7));
        builder.set_texture(TextureKey::from("a"), Keypath::new(Walk::Left, 2));
        let library = builder.build().unwrap();
        let seq = library.get(&Walk::Left).unwrap();
        assert_eq!(seq.to_vec(), vec![TextureKey::from("a"), TextureKey::from("b")]);
    }

    #[test]
    fn test_summary_and_display() {
        let library = walk_library();
        let summary = library.summary();
        assert_eq!(summary.default_animation, "walking-down");
        assert_eq!(summary.animations["walking-left"].frame_count, 4);
        assert_eq!(
            library.to_string(),
            "<AnimationLibrary: walking-up[4] walking-down[4] walking-left[4] walking-right[4]>"
        );
    }
}
