use bevy_ecs::prelude::Resource;

/// High-level run state.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GameStatus {
    #[default]
    Running,
    /// Every player is dead; the world stops scrolling.
    GameOver,
    /// The driver was asked to stop.
    Quit,
}

impl GameStatus {
    pub fn is_running(&self) -> bool {
        *self == GameStatus::Running
    }
}
