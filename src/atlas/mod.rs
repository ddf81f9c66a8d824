//! Texture atlas indexing.
//!
//! Turns a flat set of named frame textures into an addressable animation
//! library. Nothing here touches the ECS; the components and systems build
//! on top of these types.
//!
//! Overview
//! - `animationtype` – the [`AnimationType`](animationtype::AnimationType) identity capability
//! - `keypath` – `(animation, frame)` addresses and the texture-name codec
//! - `framesequence` – gapless frame lists and their sparse-index builder
//! - `library` – the animation library and its all-or-nothing builder
//! - `source` – named-texture sources (in-memory and directory backed)
//! - `error` – the error taxonomy shared by the whole crate

pub mod animationtype;
pub mod error;
pub mod framesequence;
pub mod keypath;
pub mod library;
pub mod source;
