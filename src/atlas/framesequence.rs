//! Ordered, gapless frame lists.

use rustc_hash::FxHashMap;

use super::source::TextureKey;

/// The frames of one animation, addressed by position `0..count()`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FrameSequence {
    textures: Vec<TextureKey>,
}

impl FrameSequence {
    pub fn new(textures: Vec<TextureKey>) -> Self {
        Self { textures }
    }

    pub fn count(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }

    /// The texture at `index`, or `None` past the end.
    pub fn texture_at(&self, index: usize) -> Option<&TextureKey> {
        self.textures.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TextureKey> {
        self.textures.iter()
    }

    pub fn as_slice(&self) -> &[TextureKey] {
        &self.textures
    }

    pub fn to_vec(&self) -> Vec<TextureKey> {
        self.textures.clone()
    }
}

impl<'a> IntoIterator for &'a FrameSequence {
    type Item = &'a TextureKey;
    type IntoIter = std::slice::Iter<'a, TextureKey>;

    fn into_iter(self) -> Self::IntoIter {
        self.textures.iter()
    }
}

/// Collects frames at arbitrary indices, then compacts them into a
/// [`FrameSequence`].
///
/// Indices may be sparse and arrive in any order. `build()` keeps only their
/// relative order: frames set at `{0, 2, 5}` become positions `{0, 1, 2}`.
#[derive(Debug, Clone, Default)]
pub struct FrameSequenceBuilder {
    textures: FxHashMap<usize, TextureKey>,
}

impl FrameSequenceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_textures(textures: FxHashMap<usize, TextureKey>) -> Self {
        Self { textures }
    }

    /// Last write wins.
    pub fn set_texture(&mut self, texture: TextureKey, index: usize) {
        self.textures.insert(index, texture);
    }

    pub fn build(self) -> FrameSequence {
        let mut indexed: Vec<(usize, TextureKey)> = self.textures.into_iter().collect();
        indexed.sort_unstable_by_key(|(index, _)| *index);
        FrameSequence::new(indexed.into_iter().map(|(_, texture)| texture).collect())
    }
}
