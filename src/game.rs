//! Simulation setup and the per-tick driver.
//!
//! [`Simulation`] owns the ECS [`World`] and the tick [`Schedule`]. The
//! embedding program feeds it input, calls [`Simulation::tick`] at its own
//! pace and hands a [`Renderer`] to [`Simulation::render`].
//!
//! One tick runs, in order:
//! scroll speed, hazard spawning, animation, movement, screen bounds (edge
//! observers), player settling, collision (collision observers), off-screen
//! despawn, game-over check, scoreboard, sprite sync, tick counter.

use bevy_ecs::prelude::*;
use glam::Vec2;
use log::info;
use std::sync::Arc;

use crate::components::animation::AnimationPlayer;
use crate::components::boxcollider::BoxCollider;
use crate::components::group::Group;
use crate::components::mapposition::MapPosition;
use crate::components::player::{Player, PlayerState};
use crate::components::rigidbody::RigidBody;
use crate::components::screenbounds::{InScreen, ScreenBounds};
use crate::components::sprite::Sprite;
use crate::components::zindex::ZIndex;
use crate::events::collision::observe_player_hit;
use crate::events::input::{InputAction, InputEvent, observe_player_input};
use crate::events::screenedge::observe_player_edge_hit;
use crate::resources::animationstore::{AnimationDef, AnimationStore};
use crate::resources::assets::AssetProvider;
use crate::resources::collision::{CollisionRules, CollisionStats};
use crate::resources::framestore::FrameStore;
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestatus::GameStatus;
use crate::resources::scoreboard::Scoreboard;
use crate::resources::screensize::ScreenSize;
use crate::resources::scrollspeed::ScrollSpeed;
use crate::resources::spawner::HazardSpawner;
use crate::resources::worldtime::WorldTime;
use crate::systems::animation::{animation, sync_sprite_frames};
use crate::systems::collision::collision;
use crate::systems::despawn::despawn_out_of_screen;
use crate::systems::gamestate::{check_game_over, update_scoreboard};
use crate::systems::hazard::{ZAPPER_FRAMES, apply_scroll_speed, spawn_hazards};
use crate::systems::movement::movement;
use crate::systems::player::player_settle;
use crate::systems::render::{RenderItem, Renderer, collect_render_items, hud_lines, render_pass};
use crate::systems::screenbounds::screen_bounds;
use crate::systems::time::update_world_time;

/// Animation id of the player.
pub const PLAYER_ANIMATION: &str = "player";

/// Draw layer for players.
pub const PLAYER_LAYER: i32 = 2;

/// The fixed per-tick pipeline.
pub fn build_schedule() -> Schedule {
    let mut update = Schedule::default();
    update.add_systems(
        (
            apply_scroll_speed,
            spawn_hazards,
            animation,
            movement,
            screen_bounds,
            player_settle,
            collision,
            despawn_out_of_screen,
            check_game_over,
            update_scoreboard,
            sync_sprite_frames,
            update_world_time,
        )
            .chain(),
    );
    update
}

/// Global observers for player input, screen edges and collisions.
pub fn register_observers(world: &mut World) {
    world.spawn(Observer::new(observe_player_input));
    world.spawn(Observer::new(observe_player_edge_hit));
    world.spawn(Observer::new(observe_player_hit));
    // Ensure the observers are registered before any system triggers events.
    world.flush();
}

/// Insert every resource the tick schedule reads.
pub fn insert_resources(world: &mut World, config: &GameConfig) {
    world.insert_resource(ScreenSize::new(
        config.screen_width as i32,
        config.screen_height as i32,
    ));
    world.insert_resource(WorldTime::default());
    world.insert_resource(GameStatus::default());
    world.insert_resource(ScrollSpeed(config.scroll_speed));
    world.insert_resource(Scoreboard::new(config.distance_unit));
    world.insert_resource(HazardSpawner::new(
        config.hazard_spacing_min,
        config.hazard_spacing_max,
        config.seed,
    ));
    world.insert_resource(CollisionRules::default().with(Group::PLAYER.name(), Group::HAZARD.name()));
    world.insert_resource(CollisionStats::default());
    world.insert_resource(config.clone());
}

/// Spawn the player near the left edge at the top, falling.
pub fn spawn_player(world: &mut World, config: &GameConfig, def: Arc<AnimationDef>) -> Entity {
    let screen = *world.resource::<ScreenSize>();
    let x = (screen.w as f32 * config.start_x_fraction).round() as i32;

    let mut player = Player::new(config.fly_acceleration, config.fall_acceleration);
    let mut anim = AnimationPlayer::new(def, config.animation_speed);
    let mut body = RigidBody::accelerating(Vec2::ZERO, Vec2::ZERO);
    player.set_flying(false, &mut anim, &mut body);
    let sprite = Sprite {
        frame: anim.current_frame().cloned(),
    };

    let entity = world
        .spawn((
            player,
            Group::PLAYER,
            MapPosition::new(x, 0),
            body,
            anim,
            sprite,
            BoxCollider::from_sprite_mask(),
            ScreenBounds::default(),
            InScreen,
            ZIndex(PLAYER_LAYER),
        ))
        .id();
    info!("Spawned player {:?} at ({}, 0)", entity, x);
    entity
}

/// A running game: world, schedule and the player entity.
pub struct Simulation {
    world: World,
    schedule: Schedule,
    player: Entity,
}

impl Simulation {
    /// Build the world from `config`, loading the player animation and the
    /// zapper frames from `assets`.
    pub fn new(config: &GameConfig, assets: &dyn AssetProvider) -> Result<Self, String> {
        if config.screen_width == 0 || config.screen_height == 0 {
            return Err(format!(
                "Invalid screen size {}x{}",
                config.screen_width, config.screen_height
            ));
        }

        let player_def = assets.load_animation(PLAYER_ANIMATION, None)?;
        if player_def.sections.len() <= PlayerState::Dead.section() {
            return Err(format!(
                "Animation '{}' needs {} sections, found {}",
                PLAYER_ANIMATION,
                PlayerState::Dead.section() + 1,
                player_def.sections.len()
            ));
        }
        let zapper_frames = assets.load_frame_sequence(ZAPPER_FRAMES)?;

        let mut world = World::new();
        insert_resources(&mut world, config);

        let mut frame_store = FrameStore::default();
        frame_store.insert(ZAPPER_FRAMES, zapper_frames);
        world.insert_resource(frame_store);

        let mut anim_store = AnimationStore::default();
        let player_def = anim_store.insert(player_def);
        world.insert_resource(anim_store);

        register_observers(&mut world);
        let player = spawn_player(&mut world, config, player_def);

        let mut schedule = build_schedule();
        schedule
            .initialize(&mut world)
            .map_err(|e| format!("Failed to initialize schedule: {:?}", e))?;

        Ok(Self {
            world,
            schedule,
            player,
        })
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn player(&self) -> Entity {
        self.player
    }

    /// Run one tick of the pipeline.
    pub fn tick(&mut self) {
        self.schedule.run(&mut self.world);
        self.world.clear_trackers();
    }

    /// Deliver one input action. Returns `false` once quit was requested.
    pub fn apply_input(&mut self, action: InputAction) -> bool {
        self.world.trigger(InputEvent { action });
        self.status() != GameStatus::Quit
    }

    /// Jetpack on/off for every player.
    pub fn set_flying(&mut self, flying: bool) {
        let action = if flying {
            InputAction::FlyStart
        } else {
            InputAction::FlyStop
        };
        self.apply_input(action);
    }

    pub fn status(&self) -> GameStatus {
        *self.world.resource::<GameStatus>()
    }

    pub fn is_game_over(&self) -> bool {
        self.status() == GameStatus::GameOver
    }

    /// Whether `entity` is still part of the simulation.
    pub fn is_alive(&self, entity: Entity) -> bool {
        self.world.get_entity(entity).is_ok()
    }

    pub fn frame_count(&self) -> u64 {
        self.world.resource::<WorldTime>().frame_count
    }

    pub fn distance(&self) -> u64 {
        self.world.resource::<Scoreboard>().distance()
    }

    pub fn collision_stats(&self) -> CollisionStats {
        *self.world.resource::<CollisionStats>()
    }

    pub fn player_state(&self) -> Option<PlayerState> {
        let entity = self.world.get_entity(self.player).ok()?;
        let player = entity.get::<Player>()?;
        player.state(entity.get::<AnimationPlayer>()?)
    }

    pub fn player_position(&self) -> Option<MapPosition> {
        self.world.get::<MapPosition>(self.player).copied()
    }

    pub fn render_items(&mut self) -> Vec<RenderItem> {
        collect_render_items(&mut self.world)
    }

    pub fn hud_lines(&self) -> Vec<String> {
        hud_lines(&self.world)
    }

    pub fn render(&mut self, renderer: &mut dyn Renderer) {
        render_pass(&mut self.world, renderer);
    }
}
