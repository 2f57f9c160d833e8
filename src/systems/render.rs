//! Render hand-off.
//!
//! The engine never draws. [`collect_render_items`] gathers one
//! [`RenderItem`] per visible sprite, culled to the screen and sorted by
//! [`ZIndex`] (painter's order), and [`render_pass`] feeds them plus the HUD
//! text to a [`Renderer`] supplied by the driver.

use bevy_ecs::prelude::*;
use glam::IVec2;

use crate::components::boxcollider::{Aabb, BoxCollider};
use crate::components::mapposition::MapPosition;
use crate::components::sprite::Sprite;
use crate::components::zindex::ZIndex;
use crate::resources::framestore::FrameHandle;
use crate::resources::gamestatus::GameStatus;
use crate::resources::scoreboard::Scoreboard;
use crate::resources::screensize::ScreenSize;

/// Everything a renderer needs to draw one entity.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderItem {
    pub entity: Entity,
    pub frame: FrameHandle,
    /// Top-left corner in screen pixels.
    pub position: IVec2,
    /// Collider box, or the sprite rectangle for entities without a collider.
    pub bbox: Aabb,
    pub layer: i32,
}

/// Drawing backend implemented outside the engine.
pub trait Renderer {
    fn begin_frame(&mut self) {}

    fn draw(&mut self, item: &RenderItem);

    /// HUD text line (scoreboard, game over banner).
    fn draw_text(&mut self, _text: &str) {}

    fn end_frame(&mut self) {}
}

/// Visible sprites in draw order.
pub fn collect_render_items(world: &mut World) -> Vec<RenderItem> {
    let screen = *world.resource::<ScreenSize>();
    let mut query = world.query::<(
        Entity,
        &Sprite,
        &MapPosition,
        Option<&ZIndex>,
        Option<&BoxCollider>,
    )>();

    let mut items: Vec<RenderItem> = query
        .iter(world)
        .filter_map(|(entity, sprite, position, z, collider)| {
            let frame = sprite.frame.clone()?;
            let rect = Aabb::new(position.pos, frame.size());
            if screen.outside(&rect) {
                return None;
            }
            let bbox = collider
                .map(|c| c.bounding_box(position.pos, frame.size()))
                .unwrap_or(rect);
            Some(RenderItem {
                entity,
                frame,
                position: position.pos,
                bbox,
                layer: z.copied().unwrap_or_default().0,
            })
        })
        .collect();

    // Stable sort keeps spawn order within a layer.
    items.sort_by_key(|item| item.layer);
    items
}

/// HUD lines for the current state.
pub fn hud_lines(world: &World) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(score) = world.get_resource::<Scoreboard>() {
        lines.push(score.text());
    }
    if world.get_resource::<GameStatus>() == Some(&GameStatus::GameOver) {
        lines.push("GAME OVER!".to_string());
    }
    lines
}

pub fn render_pass(world: &mut World, renderer: &mut dyn Renderer) {
    let items = collect_render_items(world);
    renderer.begin_frame();
    for item in &items {
        renderer.draw(item);
    }
    for line in hud_lines(world) {
        renderer.draw_text(&line);
    }
    renderer.end_frame();
}
