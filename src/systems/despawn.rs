//! Off-screen despawn system.
//!
//! Entities tagged [`DespawnOutOfScreen`] are removed on the tick their
//! rectangle is fully past any screen edge.

use bevy_ecs::prelude::*;
use log::debug;

use crate::components::boxcollider::Aabb;
use crate::components::mapposition::MapPosition;
use crate::components::screenbounds::DespawnOutOfScreen;
use crate::components::sprite::Sprite;
use crate::resources::screensize::ScreenSize;

pub fn despawn_out_of_screen(
    query: Query<(Entity, &MapPosition, &Sprite), With<DespawnOutOfScreen>>,
    screen: Res<ScreenSize>,
    mut commands: Commands,
) {
    for (entity, position, sprite) in query.iter() {
        if screen.outside(&Aabb::new(position.pos, sprite.size())) {
            debug!("Despawning {:?}: outside the screen at {}", entity, position.pos);
            commands.entity(entity).try_despawn();
        }
    }
}
