use bevy_ecs::prelude::Resource;

/// Tick counter. The simulation has no wall clock.
#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct WorldTime {
    /// Completed ticks.
    pub frame_count: u64,
}
