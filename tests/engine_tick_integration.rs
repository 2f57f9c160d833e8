//! Engine tick integration tests for movement, screen bounds, collision,
//! despawn, animation and the full simulation pipeline.

use std::sync::Arc;

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use glam::{IVec2, Vec2};

use jetrunner::components::animation::AnimationPlayer;
use jetrunner::components::boxcollider::BoxCollider;
use jetrunner::components::group::Group;
use jetrunner::components::hazard::Zapper;
use jetrunner::components::mapposition::MapPosition;
use jetrunner::components::player::{Player, PlayerState};
use jetrunner::components::rigidbody::RigidBody;
use jetrunner::components::screenbounds::{DespawnOutOfScreen, InScreen, ScreenBounds};
use jetrunner::components::sprite::Sprite;
use jetrunner::events::collision::CollisionEvent;
use jetrunner::events::input::InputAction;
use jetrunner::events::screenedge::{ScreenEdge, ScreenEdgeHitEvent};
use jetrunner::game::{Simulation, register_observers};
use jetrunner::looping::LoopPolicy;
use jetrunner::resources::animationstore::{AnimationDef, Section};
use jetrunner::resources::assets::ManifestAssets;
use jetrunner::resources::collision::{CollisionRules, CollisionStats};
use jetrunner::resources::framestore::{FrameHandle, MaskShape, PixelMask};
use jetrunner::resources::gameconfig::GameConfig;
use jetrunner::resources::gamestatus::GameStatus;
use jetrunner::resources::input::{InputProvider, ScriptedInput};
use jetrunner::resources::screensize::ScreenSize;
use jetrunner::systems::animation::animation;
use jetrunner::systems::collision::collision;
use jetrunner::systems::despawn::despawn_out_of_screen;
use jetrunner::systems::movement::movement;
use jetrunner::systems::player::player_settle;
use jetrunner::systems::screenbounds::screen_bounds;

const SCREEN_W: i32 = 200;
const SCREEN_H: i32 = 100;

#[derive(Resource, Default)]
struct BottomHits(u32);

fn count_bottom_hits(trigger: On<ScreenEdgeHitEvent>, mut hits: ResMut<BottomHits>) {
    if trigger.event().edge == ScreenEdge::Bottom {
        hits.0 += 1;
    }
}

fn make_world() -> World {
    let mut world = World::new();
    world.insert_resource(ScreenSize::new(SCREEN_W, SCREEN_H));
    world.insert_resource(CollisionRules::default().with("player", "hazard"));
    world.insert_resource(CollisionStats::default());
    world.insert_resource(GameStatus::default());
    world.insert_resource(BottomHits::default());
    register_observers(&mut world);
    world.spawn(Observer::new(count_bottom_hits));
    world.flush();
    world
}

fn tick_movement(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(movement);
    schedule.run(world);
}

fn tick_screen_bounds(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(screen_bounds);
    schedule.run(world);
}

fn tick_bounds_and_settle(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems((screen_bounds, player_settle).chain());
    schedule.run(world);
}

fn tick_collision(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(collision);
    schedule.run(world);
}

fn tick_despawn(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(despawn_out_of_screen);
    schedule.run(world);
}

fn tick_animation(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(animation);
    schedule.run(world);
}

fn frame(name: &str, shape: MaskShape, w: u32, h: u32) -> FrameHandle {
    FrameHandle::new(name, PixelMask::from_shape(shape, w, h))
}

fn player_def() -> Arc<AnimationDef> {
    let section = |name: &str| {
        Section::new(
            name,
            (0..2)
                .map(|i| frame(&format!("{name}{i}"), MaskShape::Full, 10, 10))
                .collect(),
        )
    };
    Arc::new(
        AnimationDef::new(
            "player",
            ["running", "taking_off", "flying", "falling", "dead"]
                .into_iter()
                .map(section)
                .collect(),
        )
        .with_section_policy(0, LoopPolicy::clamp(LoopPolicy::INFINITE))
        .with_section_policy(1, LoopPolicy::clamp(1))
        .with_section_policy(2, LoopPolicy::clamp(LoopPolicy::INFINITE))
        .with_section_policy(3, LoopPolicy::reverse(LoopPolicy::INFINITE))
        .with_section_policy(4, LoopPolicy::hold(LoopPolicy::INFINITE)),
    )
}

fn spawn_player(world: &mut World, pos: IVec2, velocity: Vec2) -> Entity {
    let mut player = Player::new(-0.5, 0.5);
    let mut anim = AnimationPlayer::new(player_def(), 1);
    let mut body = RigidBody::accelerating(velocity, Vec2::ZERO);
    player.set_flying(false, &mut anim, &mut body);
    let sprite = Sprite {
        frame: anim.current_frame().cloned(),
    };
    world
        .spawn((
            player,
            Group::PLAYER,
            MapPosition { pos },
            body,
            anim,
            sprite,
            BoxCollider::from_sprite_mask(),
            ScreenBounds::default(),
            InScreen,
        ))
        .id()
}

fn spawn_hazard(world: &mut World, pos: IVec2, shape: MaskShape) -> Entity {
    world
        .spawn((
            Zapper::new(true, true),
            Group::HAZARD,
            MapPosition { pos },
            Sprite::new(frame("zap", shape, 10, 10)),
            BoxCollider::from_sprite_mask(),
            DespawnOutOfScreen,
        ))
        .id()
}

fn player_state(world: &World, entity: Entity) -> Option<PlayerState> {
    let player = world.get::<Player>(entity)?;
    player.state(world.get::<AnimationPlayer>(entity)?)
}

// =============================================================================
// Movement
// =============================================================================

#[test]
fn movement_integrates_velocity_into_position() {
    let mut world = make_world();
    let entity = world
        .spawn((MapPosition::new(50, 50), RigidBody::moving(Vec2::new(-8.0, 0.0))))
        .id();

    tick_movement(&mut world);
    tick_movement(&mut world);

    assert_eq!(world.get::<MapPosition>(entity).unwrap().pos, IVec2::new(34, 50));
}

#[test]
fn movement_applies_acceleration_after_moving() {
    let mut world = make_world();
    let entity = world
        .spawn((
            MapPosition::new(0, 0),
            RigidBody::accelerating(Vec2::new(0.0, 2.0), Vec2::new(0.0, 1.0)),
        ))
        .id();

    tick_movement(&mut world);

    let body = world.get::<RigidBody>(entity).unwrap();
    assert_eq!(world.get::<MapPosition>(entity).unwrap().pos, IVec2::new(0, 2));
    assert_eq!(body.velocity, Vec2::new(0.0, 3.0));
}

// =============================================================================
// Screen bounds
// =============================================================================

#[test]
fn landing_at_bottom_switches_to_running_and_stops() {
    let mut world = make_world();
    let player = spawn_player(&mut world, IVec2::new(20, SCREEN_H - 10), Vec2::new(0.0, 4.0));
    assert_eq!(player_state(&world, player), Some(PlayerState::Falling));

    tick_screen_bounds(&mut world);

    assert_eq!(player_state(&world, player), Some(PlayerState::Running));
    assert_eq!(world.get::<RigidBody>(player).unwrap().velocity.y, 0.0);
    assert_eq!(world.resource::<BottomHits>().0, 1);
}

#[test]
fn bottom_hit_fires_once_per_contact() {
    let mut world = make_world();
    let player = spawn_player(&mut world, IVec2::new(20, SCREEN_H - 10), Vec2::ZERO);

    for _ in 0..3 {
        tick_screen_bounds(&mut world);
    }
    assert_eq!(world.resource::<BottomHits>().0, 1);

    world.get_mut::<MapPosition>(player).unwrap().pos.y = 40;
    tick_screen_bounds(&mut world);
    assert_eq!(world.resource::<BottomHits>().0, 1);

    world.get_mut::<MapPosition>(player).unwrap().pos.y = SCREEN_H - 10;
    tick_screen_bounds(&mut world);
    tick_screen_bounds(&mut world);
    assert_eq!(world.resource::<BottomHits>().0, 2);
}

#[test]
fn in_screen_entities_are_clamped() {
    let mut world = make_world();
    let player = spawn_player(&mut world, IVec2::new(-5, SCREEN_H + 7), Vec2::ZERO);

    tick_screen_bounds(&mut world);

    assert_eq!(
        world.get::<MapPosition>(player).unwrap().pos,
        IVec2::new(0, SCREEN_H - 10)
    );
}

#[test]
fn flying_player_settles_against_the_ceiling() {
    let mut world = make_world();
    let player = spawn_player(&mut world, IVec2::new(20, 0), Vec2::new(0.0, -3.0));
    world
        .get_mut::<RigidBody>(player)
        .unwrap()
        .set_acceleration(Vec2::new(0.0, -0.5));

    tick_bounds_and_settle(&mut world);

    let body = world.get::<RigidBody>(player).unwrap();
    assert_eq!(body.velocity.y, 0.0);
    assert_eq!(body.acceleration_y(), 0.0);
}

// =============================================================================
// Collision
// =============================================================================

#[test]
fn disjoint_boxes_skip_mask_test() {
    let mut world = make_world();
    let player = spawn_player(&mut world, IVec2::new(10, 10), Vec2::ZERO);
    spawn_hazard(&mut world, IVec2::new(100, 10), MaskShape::Full);

    tick_collision(&mut world);

    let stats = *world.resource::<CollisionStats>();
    assert_eq!(stats.broad_phase_hits, 0);
    assert_eq!(stats.mask_tests, 0);
    assert!(!world.get::<Player>(player).unwrap().dead);
}

#[test]
fn box_hit_with_transparent_pixels_is_not_a_collision() {
    let mut world = make_world();
    // The player frames are opaque squares; the ellipse corner is transparent.
    let player = spawn_player(&mut world, IVec2::new(10, 10), Vec2::ZERO);
    spawn_hazard(&mut world, IVec2::new(19, 19), MaskShape::Ellipse);

    tick_collision(&mut world);

    let stats = *world.resource::<CollisionStats>();
    assert_eq!(stats.broad_phase_hits, 1);
    assert_eq!(stats.mask_tests, 1);
    assert_eq!(stats.collisions, 0);
    assert!(!world.get::<Player>(player).unwrap().dead);
}

#[test]
fn overlapping_hazard_kills_player_once() {
    let mut world = make_world();
    let player = spawn_player(&mut world, IVec2::new(10, 10), Vec2::ZERO);
    spawn_hazard(&mut world, IVec2::new(15, 15), MaskShape::Full);

    tick_collision(&mut world);

    assert!(world.get::<Player>(player).unwrap().dead);
    assert_eq!(player_state(&world, player), Some(PlayerState::Dead));
    assert_eq!(world.get::<RigidBody>(player).unwrap().acceleration_y(), 0.5);

    // Advance the dead animation, then collide again: no restart.
    tick_animation(&mut world);
    let shown = world.get::<AnimationPlayer>(player).unwrap().current_frame().cloned();
    tick_collision(&mut world);
    assert_eq!(
        world.get::<AnimationPlayer>(player).unwrap().current_frame().cloned(),
        shown
    );
    assert_eq!(world.resource::<CollisionStats>().collisions, 2);
}

#[test]
fn unpaired_groups_are_ignored() {
    let mut world = make_world();
    spawn_hazard(&mut world, IVec2::new(10, 10), MaskShape::Full);
    spawn_hazard(&mut world, IVec2::new(12, 12), MaskShape::Full);

    tick_collision(&mut world);

    assert_eq!(*world.resource::<CollisionStats>(), CollisionStats::default());
}

#[test]
fn collision_event_from_outside_kills_player() {
    let mut world = make_world();
    let player = spawn_player(&mut world, IVec2::new(10, 10), Vec2::ZERO);
    let other = world.spawn_empty().id();

    world.trigger(CollisionEvent { a: other, b: player });

    assert!(world.get::<Player>(player).unwrap().dead);
}

// =============================================================================
// Despawn
// =============================================================================

#[test]
fn entity_fully_past_right_edge_is_despawned() {
    let mut world = make_world();
    let gone = spawn_hazard(&mut world, IVec2::new(SCREEN_W, 10), MaskShape::Full);
    let edge = spawn_hazard(&mut world, IVec2::new(SCREEN_W - 1, 10), MaskShape::Full);
    let left = spawn_hazard(&mut world, IVec2::new(-10, 10), MaskShape::Full);
    let partly = spawn_hazard(&mut world, IVec2::new(-9, 10), MaskShape::Full);

    tick_despawn(&mut world);

    assert!(world.get_entity(gone).is_err());
    assert!(world.get_entity(edge).is_ok());
    assert!(world.get_entity(left).is_err());
    assert!(world.get_entity(partly).is_ok());
}

// =============================================================================
// Animation
// =============================================================================

#[test]
fn animation_system_updates_sprite_frame() {
    let mut world = make_world();
    let player = spawn_player(&mut world, IVec2::new(10, 40), Vec2::ZERO);
    let first = world.get::<Sprite>(player).unwrap().frame.clone().unwrap();
    assert_eq!(first.name(), "falling0");

    tick_animation(&mut world);

    let shown = world.get::<Sprite>(player).unwrap().frame.clone().unwrap();
    assert_eq!(shown.name(), "falling1");
}

#[test]
fn finished_animation_keeps_entity_and_last_frame() {
    let mut world = make_world();
    let frames: Vec<FrameHandle> = (0..2)
        .map(|i| frame(&format!("spark{i}"), MaskShape::Full, 4, 4))
        .collect();
    let def = Arc::new(AnimationDef::new("spark", vec![Section::new("spark", frames)]));
    let anim = AnimationPlayer::new(def, 1);
    let sprite = Sprite {
        frame: anim.current_frame().cloned(),
    };
    let spark = world.spawn((anim, sprite)).id();

    tick_animation(&mut world);
    tick_animation(&mut world);

    assert!(world.get::<AnimationPlayer>(spark).unwrap().is_finished());
    assert!(world.get_entity(spark).is_ok());
    let shown = world.get::<Sprite>(spark).unwrap().frame.clone().unwrap();
    assert_eq!(shown.name(), "spark1");
}

// =============================================================================
// Full simulation
// =============================================================================

fn simulation(seed: u64) -> Simulation {
    let assets = ManifestAssets::builtin().unwrap();
    let mut config = GameConfig::new();
    config.seed = seed;
    Simulation::new(&config, &assets).unwrap()
}

#[test]
fn simulation_player_falls_then_runs() {
    let mut sim = simulation(1);
    assert_eq!(sim.player_state(), Some(PlayerState::Falling));

    for _ in 0..60 {
        sim.tick();
    }

    let config = GameConfig::new();
    assert_eq!(sim.player_state(), Some(PlayerState::Running));
    assert_eq!(
        sim.player_position().unwrap().pos,
        IVec2::new(125, config.screen_height as i32 - 80)
    );
    assert_eq!(sim.frame_count(), 60);
    assert!(sim.distance() > 0);
}

#[test]
fn simulation_take_off_rolls_into_flying() {
    let mut sim = simulation(1);
    sim.set_flying(true);
    assert_eq!(sim.player_state(), Some(PlayerState::TakingOff));

    for _ in 0..20 {
        sim.tick();
    }

    assert_eq!(sim.player_state(), Some(PlayerState::Flying));
    assert_eq!(sim.player_position().unwrap().pos.y, 0);
}

#[test]
fn simulation_spawns_zappers_at_right_edge() {
    let mut sim = simulation(5);
    sim.set_flying(true);
    for _ in 0..70 {
        sim.tick();
    }

    let world = sim.world_mut();
    let mut query = world.query::<(&Zapper, &MapPosition, &Sprite)>();
    let zappers: Vec<_> = query
        .iter(world)
        .map(|(_, pos, sprite)| (pos.pos, sprite.size()))
        .collect();
    assert!(!zappers.is_empty());
    for (pos, size) in zappers {
        assert!(pos.x < 1000);
        assert!(pos.y >= 0 && pos.y + size.y <= 480);
    }
}

#[test]
fn simulation_game_over_stops_the_world() {
    let mut sim = simulation(2);
    let player = sim.player();
    sim.world_mut().trigger(CollisionEvent { a: player, b: player });
    assert_eq!(sim.player_state(), Some(PlayerState::Dead));

    sim.tick();
    assert!(sim.is_game_over());
    let distance = sim.distance();

    for _ in 0..100 {
        sim.tick();
    }
    assert_eq!(sim.distance(), distance);
    assert!(sim.hud_lines().contains(&"GAME OVER!".to_string()));
    assert!(sim.is_alive(player));

    // Input after death is ignored.
    sim.set_flying(true);
    assert_eq!(sim.player_state(), Some(PlayerState::Dead));
}

#[test]
fn simulation_quit_input_stops_the_driver() {
    let mut sim = simulation(0);
    assert!(sim.apply_input(InputAction::FlyStart));
    assert!(!sim.apply_input(InputAction::Quit));
    assert_eq!(sim.status(), GameStatus::Quit);
}

#[test]
fn simulation_replays_an_input_script() {
    let mut sim = simulation(3);
    let mut input = ScriptedInput::parse("0 fly_start\n30 fly_stop\n40 quit\n").unwrap();
    let mut states = Vec::new();

    for _ in 0..100 {
        let mut keep_going = true;
        for action in input.poll(sim.frame_count()) {
            keep_going &= sim.apply_input(action);
        }
        if !keep_going {
            break;
        }
        sim.tick();
        states.push(sim.player_state());
    }

    assert_eq!(sim.frame_count(), 40);
    assert_eq!(states[0], Some(PlayerState::TakingOff));
    assert_eq!(states[29], Some(PlayerState::Flying));
    assert_eq!(states[30], Some(PlayerState::Falling));
    assert_eq!(sim.status(), GameStatus::Quit);
}

#[test]
fn simulation_is_deterministic_for_a_seed() {
    let mut a = simulation(11);
    let mut b = simulation(11);
    for tick in 0..200u32 {
        if tick % 37 == 0 {
            let flying = tick % 74 == 0;
            a.set_flying(flying);
            b.set_flying(flying);
        }
        a.tick();
        b.tick();
    }
    let positions = |sim: &mut Simulation| -> Vec<(IVec2, i32)> {
        sim.render_items()
            .iter()
            .map(|item| (item.position, item.layer))
            .collect()
    };
    assert_eq!(positions(&mut a), positions(&mut b));
    assert_eq!(a.distance(), b.distance());
}

#[test]
fn render_items_are_sorted_by_layer() {
    let mut sim = simulation(4);
    for _ in 0..120 {
        sim.tick();
    }
    let layers: Vec<i32> = sim.render_items().iter().map(|i| i.layer).collect();
    let mut sorted = layers.clone();
    sorted.sort();
    assert_eq!(layers, sorted);
    assert!(layers.contains(&2));
}
