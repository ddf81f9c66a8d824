//! ECS systems.
//!
//! - [`animation`] – advances sprite frame actions of animating controllers
//! - [`time`] – updates the shared world clock
pub mod animation;
pub mod time;
