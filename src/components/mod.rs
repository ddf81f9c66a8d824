//! ECS components for animated entities.
//!
//! Submodules overview:
//! - [`animationcontroller`] – two-state playback controller over a shared library
//! - [`controllerbuilder`] – builds controllers from configuration and an atlas directory
//! - [`spritenode`] – renderable sprite target running tagged looping frame actions

pub mod animationcontroller;
pub mod controllerbuilder;
pub mod spritenode;
