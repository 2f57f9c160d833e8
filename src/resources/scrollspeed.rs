use bevy_ecs::prelude::Resource;

/// Horizontal world speed in pixels per tick; hazards move left by this much.
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct ScrollSpeed(pub f32);
