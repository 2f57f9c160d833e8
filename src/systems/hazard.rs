//! World scroll and hazard spawning.
//!
//! - [`apply_scroll_speed`] keeps every zapper moving left at the current
//!   [`ScrollSpeed`].
//! - [`spawn_hazards`] asks the [`HazardSpawner`] whether a zapper is due and
//!   spawns one at the right edge at a random height.

use bevy_ecs::prelude::*;
use glam::Vec2;
use log::{debug, warn};

use crate::components::boxcollider::BoxCollider;
use crate::components::group::Group;
use crate::components::hazard::Zapper;
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::components::screenbounds::DespawnOutOfScreen;
use crate::components::sprite::Sprite;
use crate::components::zindex::ZIndex;
use crate::resources::framestore::FrameStore;
use crate::resources::screensize::ScreenSize;
use crate::resources::scrollspeed::ScrollSpeed;
use crate::resources::spawner::HazardSpawner;

/// Frame sequence id for zapper images.
pub const ZAPPER_FRAMES: &str = "zapper";

/// Draw layer for hazards.
pub const HAZARD_LAYER: i32 = 1;

pub fn apply_scroll_speed(mut query: Query<&mut RigidBody, With<Zapper>>, speed: Res<ScrollSpeed>) {
    for mut body in query.iter_mut() {
        body.velocity.x = -speed.0;
    }
}

pub fn spawn_hazards(
    mut spawner: ResMut<HazardSpawner>,
    speed: Res<ScrollSpeed>,
    frames: Res<FrameStore>,
    screen: Res<ScreenSize>,
    mut commands: Commands,
) {
    if !spawner.advance(speed.0) {
        return;
    }

    let zapper = Zapper::new(true, spawner.rng.bool());
    let Some(frame) = frames.frame(ZAPPER_FRAMES, zapper.frame_index()).cloned() else {
        warn!(
            "No frame {} in sequence '{}', skipping zapper",
            zapper.frame_index(),
            ZAPPER_FRAMES
        );
        return;
    };

    let y = spawner.rng.i32(0..(screen.h - frame.size().y).max(1));
    let position = MapPosition::new(screen.w - 1, y);
    debug!("Spawning {:?} at {}", zapper, position.pos);

    commands.spawn((
        zapper,
        Group::HAZARD,
        position,
        RigidBody::moving(Vec2::new(-speed.0, 0.0)),
        Sprite::new(frame),
        BoxCollider::from_sprite_mask(),
        DespawnOutOfScreen,
        ZIndex(HAZARD_LAYER),
    ));
}
