use bevy_ecs::prelude::Component;

/// Electric barrier scrolling towards the player.
///
/// Its image is picked from the four-frame `"zapper"` sequence:
/// `[off horizontal, on horizontal, off vertical, on vertical]`.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Zapper {
    pub powered: bool,
    pub horizontal: bool,
}

impl Zapper {
    pub fn new(powered: bool, horizontal: bool) -> Self {
        Self { powered, horizontal }
    }

    /// Index into the zapper frame sequence.
    pub fn frame_index(&self) -> usize {
        match (self.powered, self.horizontal) {
            (false, true) => 0,
            (true, true) => 1,
            (false, false) => 2,
            (true, false) => 3,
        }
    }
}
