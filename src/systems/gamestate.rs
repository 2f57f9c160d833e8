//! Game-over detection and the scoreboard.

use bevy_ecs::prelude::*;
use log::info;

use crate::components::player::Player;
use crate::resources::gamestatus::GameStatus;
use crate::resources::scoreboard::Scoreboard;
use crate::resources::scrollspeed::ScrollSpeed;

/// Stop the world once every player is dead.
pub fn check_game_over(
    players: Query<&Player>,
    mut status: ResMut<GameStatus>,
    mut speed: ResMut<ScrollSpeed>,
    score: Res<Scoreboard>,
) {
    if !status.is_running() {
        return;
    }
    if players.iter().all(|p| p.dead) {
        *status = GameStatus::GameOver;
        speed.0 = 0.0;
        info!("Game over. {}", score.text());
    }
}

pub fn update_scoreboard(mut score: ResMut<Scoreboard>, speed: Res<ScrollSpeed>) {
    score.add(speed.0);
}
