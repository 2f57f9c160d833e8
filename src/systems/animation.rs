//! Animation systems.
//!
//! - [`animation`] ticks every [`AnimationPlayer`] and copies its visible
//!   frame into the entity's [`Sprite`].
//! - [`sync_sprite_frames`] only copies frames. It runs at the end of a tick
//!   so restarts made by observers (landing, death) show up the same tick.
//!
//! # Related
//!
//! - [`crate::components::animation::AnimationPlayer`] – per-entity playback state
//! - [`crate::resources::animationstore::AnimationStore`] – shared definitions

use bevy_ecs::prelude::*;
use log::trace;

use crate::components::animation::AnimationPlayer;
use crate::components::sprite::Sprite;

fn show(anim: &AnimationPlayer, sprite: &mut Mut<Sprite>) {
    if sprite.frame.as_ref() != anim.current_frame() {
        sprite.frame = anim.current_frame().cloned();
    }
}

/// Advance animation playback and update the sprite frame.
pub fn animation(mut query: Query<(Entity, &mut AnimationPlayer, &mut Sprite)>) {
    for (entity, mut anim, mut sprite) in query.iter_mut() {
        if anim.tick() {
            trace!(
                "{:?} frame {:?}",
                entity,
                anim.current_frame().map(|f| f.name())
            );
        }
        show(&anim, &mut sprite);
    }
}

/// Copy the visible frame into [`Sprite`] without ticking.
pub fn sync_sprite_frames(mut query: Query<(&AnimationPlayer, &mut Sprite), Changed<AnimationPlayer>>) {
    for (anim, mut sprite) in query.iter_mut() {
        show(anim, &mut sprite);
    }
}
