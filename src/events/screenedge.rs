//! Screen edge events.
//!
//! [`ScreenEdgeHitEvent`] is triggered by the
//! [`screen_bounds`](crate::systems::screenbounds::screen_bounds) system on
//! the tick an entity starts touching the top or bottom edge. It fires once
//! per contact, not while the entity stays there.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;

use crate::components::animation::AnimationPlayer;
use crate::components::player::Player;
use crate::components::rigidbody::RigidBody;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenEdge {
    Top,
    Bottom,
}

#[derive(Event, Debug, Clone, Copy)]
pub struct ScreenEdgeHitEvent {
    pub entity: Entity,
    pub edge: ScreenEdge,
}

/// Landing and ceiling handling for players.
pub fn observe_player_edge_hit(
    trigger: On<ScreenEdgeHitEvent>,
    mut players: Query<(&Player, &mut AnimationPlayer, &mut RigidBody)>,
) {
    let event = trigger.event();
    let Ok((player, mut anim, mut body)) = players.get_mut(event.entity) else {
        return;
    };
    match event.edge {
        ScreenEdge::Bottom => player.on_hit_bottom(&mut anim, &mut body),
        ScreenEdge::Top => player.on_hit_top(&mut body),
    }
}
