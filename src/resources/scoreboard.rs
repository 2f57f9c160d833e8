//! Distance scoreboard.
//!
//! Counts the pixels the world has scrolled and shows them in game units.

use bevy_ecs::prelude::Resource;

#[derive(Resource, Clone, Copy, Debug)]
pub struct Scoreboard {
    /// Scrolled pixels.
    pub pixels: f32,
    /// Pixels per displayed distance unit.
    pub unit: u32,
}

impl Scoreboard {
    pub fn new(unit: u32) -> Self {
        Self {
            pixels: 0.0,
            unit: unit.max(1),
        }
    }

    pub fn add(&mut self, pixels: f32) {
        self.pixels += pixels;
    }

    pub fn distance(&self) -> u64 {
        (self.pixels.max(0.0) / self.unit as f32).round() as u64
    }

    pub fn text(&self) -> String {
        format!("Distance: {}", self.distance())
    }
}
