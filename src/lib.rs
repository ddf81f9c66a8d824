//! Sprite animations library.
//!
//! Indexes a flat texture atlas (`walking-up-001.png`, `walking-up-002.png`,
//! ...) into an animation library addressed by animation identity and frame
//! index, and drives a two-state playback controller over it.
//!
//! - [`atlas`] – identities, keypaths, frame sequences, the library and its builder
//! - [`components`] – the playback controller and the sprite it animates
//! - [`events`] – animation request events and observers
//! - [`resources`] – configuration and world time
//! - [`systems`] – frame advancing and time update

pub mod atlas;
pub mod components;
pub mod events;
pub mod resources;
pub mod systems;
