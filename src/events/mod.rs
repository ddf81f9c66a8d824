//! Event types and observers.
//!
//! - [`animation`] – requests to switch animation or start/stop playback
pub mod animation;
