use bevy_ecs::prelude::*;

use crate::components::boxcollider::Aabb;
use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::components::rigidbody::RigidBody;
use crate::components::sprite::Sprite;
use crate::resources::screensize::ScreenSize;

/// Stop living players from pushing into the edge they rest against.
///
/// Runs after [`screen_bounds`](super::screenbounds::screen_bounds), on the
/// clamped position.
pub fn player_settle(
    mut query: Query<(&Player, &MapPosition, &Sprite, &mut RigidBody)>,
    screen: Res<ScreenSize>,
) {
    for (player, position, sprite, mut body) in query.iter_mut() {
        let rect = Aabb::new(position.pos, sprite.size());
        player.settle(screen.at_top(&rect), screen.at_bottom(&rect), &mut body);
    }
}
