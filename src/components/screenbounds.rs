//! Screen-boundary capabilities.
//!
//! - [`ScreenBounds`] remembers whether the entity touched the top or bottom
//!   edge on the previous tick, so edge hits fire once per contact.
//! - [`InScreen`] keeps the entity inside the screen.
//! - [`DespawnOutOfScreen`] removes the entity once it is fully off screen.
//!
//! The boundary queries themselves live on
//! [`ScreenSize`](crate::resources::screensize::ScreenSize).

use bevy_ecs::prelude::Component;

/// Previous-tick edge flags.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScreenBounds {
    pub at_top: bool,
    pub at_bottom: bool,
}

/// Edges newly reached by an [`ScreenBounds::update`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EdgeHits {
    pub top: bool,
    pub bottom: bool,
}

impl ScreenBounds {
    /// Store this tick's flags and report false-to-true transitions.
    pub fn update(&mut self, at_top: bool, at_bottom: bool) -> EdgeHits {
        let hits = EdgeHits {
            top: at_top && !self.at_top,
            bottom: at_bottom && !self.at_bottom,
        };
        self.at_top = at_top;
        self.at_bottom = at_bottom;
        hits
    }
}

/// Clamp the entity onto the screen every tick.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct InScreen;

/// Despawn the entity when it is fully outside the screen.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct DespawnOutOfScreen;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hits_fire_on_transition_only() {
        let mut bounds = ScreenBounds::default();
        assert_eq!(bounds.update(false, true), EdgeHits { top: false, bottom: true });
        assert_eq!(bounds.update(false, true), EdgeHits::default());
        assert_eq!(bounds.update(false, false), EdgeHits::default());
        assert_eq!(bounds.update(true, true), EdgeHits { top: true, bottom: true });
    }
}
