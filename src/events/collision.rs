//! Collision event types and the player hit observer.
//!
//! The collision system emits [`CollisionEvent`] whenever two entities whose
//! groups are paired in [`CollisionRules`](crate::resources::collision::CollisionRules)
//! overlap (box and, when both ask for it, pixel masks). Observers subscribe
//! to this event to react in a decoupled manner.
//!
//! [`observe_player_hit`] kills any player taking part in a collision.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::animation::AnimationPlayer;
use crate::components::player::Player;
use crate::components::rigidbody::RigidBody;

/// Event fired when two colliding entities overlap.
///
/// The two fields, [`CollisionEvent::a`] and [`CollisionEvent::b`], are the
/// entity IDs of the participants. No ordering guarantees are provided.
#[derive(Event, Debug, Clone, Copy)]
pub struct CollisionEvent {
    pub a: Entity,
    pub b: Entity,
}

/// Kill the player side of a collision. Repeated hits are no-ops.
pub fn observe_player_hit(
    trigger: On<CollisionEvent>,
    mut players: Query<(&mut Player, &mut AnimationPlayer, &mut RigidBody)>,
) {
    let event = trigger.event();
    debug!("Collision between {:?} and {:?}", event.a, event.b);
    for entity in [event.a, event.b] {
        if let Ok((mut player, mut anim, mut body)) = players.get_mut(entity) {
            player.kill(&mut anim, &mut body);
        }
    }
}
