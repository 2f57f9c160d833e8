//! Collision detection system.
//!
//! Two phases per pair of collidable entities:
//! - broad: skip pairs whose [`Group`]s are not paired in [`CollisionRules`],
//!   then test the collider boxes;
//! - narrow: when both colliders are pixel-perfect, confirm the box hit on
//!   the sprites' pixel masks.
//!
//! Confirmed pairs trigger [`CollisionEvent`]. Work is counted in
//! [`CollisionStats`].

use bevy_ecs::prelude::*;

use crate::components::boxcollider::BoxCollider;
use crate::components::group::Group;
use crate::components::mapposition::MapPosition;
use crate::components::sprite::Sprite;
use crate::events::collision::CollisionEvent;
use crate::resources::collision::{CollisionRules, CollisionStats};

pub fn collision(
    query: Query<(Entity, &MapPosition, &BoxCollider, &Sprite, &Group)>,
    rules: Res<CollisionRules>,
    mut stats: ResMut<CollisionStats>,
    mut commands: Commands,
) {
    // first we create a Vector of pairs of entities
    let mut pairs: Vec<(Entity, Entity)> = Vec::new();

    for [
        (entity_a, position_a, collider_a, sprite_a, group_a),
        (entity_b, position_b, collider_b, sprite_b, group_b),
    ] in query.iter_combinations()
    {
        if !rules.matches(group_a.name(), group_b.name()) {
            continue;
        }

        let box_a = collider_a.bounding_box(position_a.pos, sprite_a.size());
        let box_b = collider_b.bounding_box(position_b.pos, sprite_b.size());
        if !box_a.overlaps(&box_b) {
            continue;
        }
        stats.broad_phase_hits += 1;

        if collider_a.pixel_perfect && collider_b.pixel_perfect {
            if let (Some(frame_a), Some(frame_b)) = (&sprite_a.frame, &sprite_b.frame) {
                stats.mask_tests += 1;
                // Masks are anchored at the entity position, not the collider offset.
                if !frame_a
                    .mask()
                    .overlaps(frame_b.mask(), position_b.pos - position_a.pos)
                {
                    continue;
                }
            }
        }

        pairs.push((entity_a, entity_b));
    }

    for (a, b) in pairs {
        stats.collisions += 1;
        commands.trigger(CollisionEvent { a, b });
    }
}
