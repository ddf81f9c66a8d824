//! Named-texture sources.
//!
//! A source is anything that can list texture names and resolve a name into
//! a [`TextureKey`]. The atlas builder only reads from sources; loading the
//! image data behind a key is the renderer's business.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::{debug, warn};
use rustc_hash::FxHashMap;
use super::error::{AtlasError, AtlasResult};

/// Opaque handle to one frame texture, cheap to clone.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TextureKey(Arc<str>);

impl TextureKey {
    pub fn new(key: impl Into<Arc<str>>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TextureKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for TextureKey {
    fn from(key: String) -> Self {
        Self::new(key)
    }
}

impl fmt::Display for TextureKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Input collaborator of the atlas builder.
pub trait TextureSource {
    /// Every texture name the source holds.
    fn texture_names(&self) -> Vec<String>;

    /// Resolve a texture name, or `None` if the source does not hold it.
    fn texture_named(&self, name: &str) -> Option<TextureKey>;
}

/// In-memory texture source keyed by texture name.
#[derive(Debug, Clone, Default)]
pub struct TextureAtlas {
    textures: FxHashMap<String, TextureKey>,
}

impl TextureAtlas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, texture: TextureKey) {
        self.textures.insert(name.into(), texture);
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}

impl TextureSource for TextureAtlas {
    fn texture_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.textures.keys().cloned().collect();
        names.sort();
        names
    }

    fn texture_named(&self, name: &str) -> Option<TextureKey> {
        self.textures.get(name).cloned()
    }
}

/// Each name becomes its own texture key.
impl<S: Into<String>> FromIterator<S> for TextureAtlas {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut atlas = TextureAtlas::new();
        for name in iter {
            let name = name.into();
            let key = TextureKey::new(name.as_str());
            atlas.insert(name, key);
        }
        atlas
    }
}

/// Texture source backed by the files of a single directory.
///
/// Only files whose extension matches `file_extension` (case-insensitive) are
/// listed. The texture key of a file is its path. Files whose name is not
/// valid UTF-8 are listed under their lossy name but never resolve, so an
/// atlas build over them fails instead of silently missing frames.
#[derive(Debug, Clone)]
pub struct DirectoryAtlas {
    root: PathBuf,
    textures: FxHashMap<String, TextureKey>,
    unresolvable: Vec<String>,
}

impl DirectoryAtlas {
    pub fn open(root: impl AsRef<Path>, file_extension: &str) -> AtlasResult<Self> {
        let root = root.as_ref().to_path_buf();
        let source_error = |e: std::io::Error| AtlasError::Source {
            path: root.display().to_string(),
            reason: e.to_string(),
        };

        let mut textures = FxHashMap::default();
        let mut unresolvable = Vec::new();
        for entry in fs::read_dir(&root).map_err(source_error)? {
            let path = entry.map_err(source_error)?.path();
            if !path.is_file() {
                continue;
            }
            let matches_extension = path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case(file_extension));
            if !matches_extension {
                continue;
            }
            let Some(file_name) = path.file_name() else {
                continue;
            };
            match file_name.to_str() {
                Some(name) => {
                    textures.insert(
                        name.to_string(),
                        TextureKey::new(path.to_string_lossy().as_ref()),
                    );
                }
                None => {
                    let lossy = file_name.to_string_lossy().into_owned();
                    warn!(
                        "DirectoryAtlas: '{}' in {} is not valid UTF-8",
                        lossy,
                        root.display()
                    );
                    unresolvable.push(lossy);
                }
            }
        }

        debug!(
            "DirectoryAtlas: {} '.{}' textures in {}",
            textures.len(),
            file_extension,
            root.display()
        );
        Ok(Self {
            root,
            textures,
            unresolvable,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Number of listed names, unresolvable ones included.
    pub fn len(&self) -> usize {
        self.textures.len() + self.unresolvable.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TextureSource for DirectoryAtlas {
    fn texture_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .textures
            .keys()
            .chain(self.unresolvable.iter())
            .cloned()
            .collect();
        names.sort();
        names
    }

    fn texture_named(&self, name: &str) -> Option<TextureKey> {
        self.textures.get(name).cloned()
    }
}
