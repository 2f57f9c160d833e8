//! ECS components for entities.
//!
//! This module groups all component types that can be attached to entities in
//! the game world. An entity's capabilities are the components it carries:
//! animated, moving or accelerating, kept on screen or despawned off screen.
//!
//! Submodules overview:
//! - [`animation`] – nested-cursor playback of sectioned animations
//! - [`boxcollider`] – integer rectangles and the collider component
//! - [`group`] – collision group tag
//! - [`hazard`] – zapper hazards
//! - [`mapposition`] – top-left position in screen pixels
//! - [`player`] – player state machine
//! - [`rigidbody`] – velocity and optional acceleration
//! - [`screenbounds`] – edge tracking, keep-on-screen and off-screen despawn tags
//! - [`sprite`] – the frame an entity currently shows
//! - [`zindex`] – rendering order hint for 2D drawing

pub mod animation;
pub mod boxcollider;
pub mod group;
pub mod hazard;
pub mod mapposition;
pub mod player;
pub mod rigidbody;
pub mod screenbounds;
pub mod sprite;
pub mod zindex;
