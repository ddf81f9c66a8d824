//! Keypaths address a single frame of a single animation.
//!
//! The canonical texture name of a keypath is
//! `{animation}-{frame index, zero padded to 3 digits}.png`. Parsing is more
//! lenient than encoding: any path extension is accepted, `%20` is read as a
//! space, and the frame index may have any number of digits.

use std::fmt;

use super::animationtype::AnimationType;

const FRAME_SEPARATOR: char = '-';
const CANONICAL_EXTENSION: &str = "png";

/// `(animation, frame index)` address of one frame in an
/// [`AnimationLibrary`](crate::atlas::library::AnimationLibrary).
///
/// Ordering is lexicographic: animation first, frame index second.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Keypath<A: AnimationType> {
    pub animation: A,
    pub frame_index: usize,
}

impl<A: AnimationType> Keypath<A> {
    pub fn new(animation: A, frame_index: usize) -> Self {
        Self {
            animation,
            frame_index,
        }
    }

    /// Frame 0 of the default animation.
    pub fn default_keypath() -> Self {
        Self::new(A::default_value(), 0)
    }

    /// Canonical texture name, e.g. `walking-up-004.png`.
    pub fn texture_name(&self) -> String {
        format!(
            "{}{}{:03}.{}",
            self.animation.filename_component(),
            FRAME_SEPARATOR,
            self.frame_index,
            CANONICAL_EXTENSION
        )
    }

    /// Parse a texture name of the form `{animation}-{frame}[.ext]`.
    ///
    /// Returns `None` when there is no separator, the trailing segment is not
    /// a non-negative integer, or the remaining prefix is not a known
    /// animation.
    pub fn from_texture_name(texture_name: &str) -> Option<Self> {
        let simplified = simplify_texture_name(texture_name);
        let mut parts: Vec<&str> = simplified
            .split(FRAME_SEPARATOR)
            .filter(|part| !part.is_empty())
            .collect();
        if parts.len() < 2 {
            return None;
        }

        let frame_index = parts.pop()?.parse::<usize>().ok()?;
        let animation = A::from_filename_component(&parts.join("-"))?;
        Some(Self::new(animation, frame_index))
    }
}

impl<A: AnimationType> fmt::Display for Keypath<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<Keypath {{animation = {:?}, frame_index = {}}}>",
            self.animation, self.frame_index
        )
    }
}

/// Strip the noise commonly found in atlas texture names: URL-encoded spaces
/// and the path extension of the last path component.
pub fn simplify_texture_name(texture_name: &str) -> String {
    let unescaped = texture_name.replace("%20", " ");
    let file_start = unescaped.rfind('/').map_or(0, |i| i + 1);
    match unescaped[file_start..].rfind('.') {
        // a leading dot marks a hidden file, not an extension
        Some(dot) if dot > 0 => unescaped[..file_start + dot].to_string(),
        _ => unescaped,
    }
}
