use bevy_ecs::prelude::Component;
use glam::IVec2;

/// Top-left corner of an entity in integer screen pixels.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MapPosition {
    pub pos: IVec2,
}

impl MapPosition {
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            pos: IVec2::new(x, y),
        }
    }
}
