//! Jetrunner library.
//!
//! A 2D sprite-animation and game-loop engine for a jetpack side-scroller,
//! built on `bevy_ecs`. This module exposes the looping cursors and the
//! engine's ECS components, resources, systems and events for the driver
//! binary, integration tests and embedders.

pub mod components;
pub mod events;
pub mod game;
pub mod looping;
pub mod resources;
pub mod systems;
