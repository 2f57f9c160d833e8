//! Screen boundary system.
//!
//! For every entity with [`ScreenBounds`] this system:
//! 1. computes whether its rectangle touches the top/bottom edge,
//! 2. triggers [`ScreenEdgeHitEvent`] on the tick such a contact begins,
//! 3. clamps entities tagged [`InScreen`] back onto the screen.
//!
//! Edge detection uses the position before clamping.

use bevy_ecs::prelude::*;
use log::trace;

use crate::components::boxcollider::Aabb;
use crate::components::mapposition::MapPosition;
use crate::components::screenbounds::{InScreen, ScreenBounds};
use crate::components::sprite::Sprite;
use crate::events::screenedge::{ScreenEdge, ScreenEdgeHitEvent};
use crate::resources::screensize::ScreenSize;

pub fn screen_bounds(
    mut query: Query<(Entity, &mut MapPosition, &Sprite, &mut ScreenBounds, Has<InScreen>)>,
    screen: Res<ScreenSize>,
    mut commands: Commands,
) {
    for (entity, mut position, sprite, mut bounds, in_screen) in query.iter_mut() {
        let rect = Aabb::new(position.pos, sprite.size());
        let hits = bounds.update(screen.at_top(&rect), screen.at_bottom(&rect));

        if hits.top {
            trace!("{:?} hit the top edge", entity);
            commands.trigger(ScreenEdgeHitEvent {
                entity,
                edge: ScreenEdge::Top,
            });
        }
        if hits.bottom {
            trace!("{:?} hit the bottom edge", entity);
            commands.trigger(ScreenEdgeHitEvent {
                entity,
                edge: ScreenEdge::Bottom,
            });
        }

        if in_screen {
            let clamped = screen.clamp(&rect);
            if clamped != position.pos {
                position.pos = clamped;
            }
        }
    }
}
