//! Time update system.
//!
//! Counts completed ticks on the shared
//! [`WorldTime`](crate::resources::worldtime::WorldTime) resource.
use bevy_ecs::prelude::*;

use crate::resources::worldtime::WorldTime;

/// Bump the tick counter. Runs last in the tick schedule.
pub fn update_world_time(mut time: ResMut<WorldTime>) {
    time.frame_count += 1;
}
