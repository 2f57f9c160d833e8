use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;

/// Integrate every body: position by velocity, then velocity by acceleration.
pub fn movement(mut query: Query<(&mut MapPosition, &mut RigidBody)>) {
    for (mut position, mut body) in query.iter_mut() {
        body.integrate(&mut position.pos);
    }
}
