use bevy_ecs::prelude::Component;
use glam::IVec2;

use crate::resources::framestore::FrameHandle;

/// The frame an entity currently shows.
///
/// Animated entities get this refreshed from their
/// [`AnimationPlayer`](super::animation::AnimationPlayer) every tick; static
/// ones (zappers) set it once at spawn. The frame's size doubles as the
/// entity's size for bounds and collision checks.
#[derive(Component, Clone, Debug, Default)]
pub struct Sprite {
    pub frame: Option<FrameHandle>,
}

impl Sprite {
    pub fn new(frame: FrameHandle) -> Self {
        Self { frame: Some(frame) }
    }

    /// Size in pixels, zero when nothing is shown.
    pub fn size(&self) -> IVec2 {
        self.frame.as_ref().map(|f| f.size()).unwrap_or(IVec2::ZERO)
    }
}
