//! ECS resources made available to systems.
//!
//! Overview
//! - `animationconfig` – INI-backed defaults for building animation controllers
//! - `worldtime` – simulation time and delta
pub mod animationconfig;
pub mod worldtime;
