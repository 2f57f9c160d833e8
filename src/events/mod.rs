//! Event types and observers used by the engine.
//!
//! This module groups the domain events exchanged across systems and the
//! corresponding observers that react to them. Events provide a decoupled
//! way for systems to communicate without tight coupling or direct
//! dependencies.
//!
//! Submodules:
//! - [`collision`] – collision notifications and the player hit observer
//! - [`input`] – input actions and the player input observer
//! - [`screenedge`] – top/bottom edge contact and the landing observer
//!
//! See each submodule for concrete event data, semantics, and example usage.
pub mod collision;
pub mod input;
pub mod screenedge;
