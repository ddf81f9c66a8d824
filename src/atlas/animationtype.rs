//! Animation identities.
//!
//! An animation identity names one logical motion ("walking-up", "idle", ...)
//! independently of how many frames it has. Game code usually implements
//! [`AnimationType`] on a small closed enum; [`NamedAnimation`] is an open
//! implementation that accepts any token and is used by tooling that does not
//! know the animation set in advance.

use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

/// Capability shared by every kind of animation identity.
///
/// Implementations must satisfy the round-trip law
/// `Self::from_filename_component(x.filename_component()) == Some(x)`, and their
/// ordering must agree with equality of the encoded component.
pub trait AnimationType: Clone + Eq + Ord + Hash + fmt::Debug + Send + Sync + 'static {
    /// The animation shown when nothing else has been requested.
    fn default_value() -> Self;

    /// The string used for this animation in texture names.
    fn filename_component(&self) -> &str;

    /// Decode an identity from the animation part of a texture name.
    fn from_filename_component(component: &str) -> Option<Self>;
}

/// Open animation identity backed by the token found in texture names.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NamedAnimation(Arc<str>);

impl NamedAnimation {
    const DEFAULT_NAME: &'static str = "idle";

    pub fn new(name: impl Into<Arc<str>>) -> Option<Self> {
        let name = name.into();
        if name.is_empty() || name.contains(['/', '\\']) {
            return None;
        }
        Some(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AnimationType for NamedAnimation {
    fn default_value() -> Self {
        Self(Arc::from(Self::DEFAULT_NAME))
    }

    fn filename_component(&self) -> &str {
        &self.0
    }

    fn from_filename_component(component: &str) -> Option<Self> {
        Self::new(component)
    }
}

impl fmt::Display for NamedAnimation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
