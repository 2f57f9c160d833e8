//! Input action events.
//!
//! This module defines [`InputEvent`], triggered once per delivered input
//! action. The [`InputAction`] enum lists all recognized actions; device
//! polling happens outside the engine behind
//! [`InputProvider`](crate::resources::input::InputProvider).
//!
//! [`observe_player_input`] is the only place input reaches the player.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info};

use crate::components::animation::AnimationPlayer;
use crate::components::player::Player;
use crate::components::rigidbody::RigidBody;
use crate::resources::gamestatus::GameStatus;

/// Enumeration of logical input actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    /// Jetpack pressed.
    FlyStart,
    /// Jetpack released.
    FlyStop,
    /// Leave the game.
    Quit,
}

impl std::str::FromStr for InputAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fly_start" => Ok(Self::FlyStart),
            "fly_stop" => Ok(Self::FlyStop),
            "quit" => Ok(Self::Quit),
            other => Err(format!("Unknown input action '{}'", other)),
        }
    }
}

/// Event emitted when an input action is delivered.
#[derive(Event, Debug, Clone, Copy)]
pub struct InputEvent {
    /// The input action that triggered this event.
    pub action: InputAction,
}

/// Apply fly start/stop to every player and record quit requests.
pub fn observe_player_input(
    trigger: On<InputEvent>,
    mut players: Query<(&mut Player, &mut AnimationPlayer, &mut RigidBody)>,
    mut status: ResMut<GameStatus>,
) {
    let flying = match trigger.event().action {
        InputAction::FlyStart => true,
        InputAction::FlyStop => false,
        InputAction::Quit => {
            info!("Quit requested");
            *status = GameStatus::Quit;
            return;
        }
    };
    for (mut player, mut anim, mut body) in players.iter_mut() {
        if !player.set_flying(flying, &mut anim, &mut body) {
            debug!("Ignoring {:?} for a dead player", trigger.event().action);
        }
    }
}
