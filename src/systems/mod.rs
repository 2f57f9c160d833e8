//! Engine systems.
//!
//! This module groups all ECS systems that advance the simulation, plus the
//! render hand-off.
//!
//! Submodules overview
//! - [`animation`] – tick animation players and show their frames
//! - [`collision`] – group-filtered box checks, pixel-mask confirmation, event emission
//! - [`despawn`] – remove entities that left the screen
//! - [`gamestate`] – game-over detection and scoreboard
//! - [`hazard`] – world scroll and zapper spawning
//! - [`movement`] – integrate positions from rigid bodies
//! - [`player`] – keep players from pushing into screen edges
//! - [`render`] – collect draw items for an external renderer
//! - [`screenbounds`] – edge-hit events and keep-on-screen clamping
//! - [`time`] – tick counter

pub mod animation;
pub mod collision;
pub mod despawn;
pub mod gamestate;
pub mod hazard;
pub mod movement;
pub mod player;
pub mod render;
pub mod screenbounds;
pub mod time;
