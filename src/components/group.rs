use bevy_ecs::prelude::Component;

/// Collision group tag, matched against [`CollisionRules`](crate::resources::collision::CollisionRules).
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Group(pub &'static str);

impl Group {
    pub const PLAYER: Group = Group("player");
    pub const HAZARD: Group = Group("hazard");

    pub fn name(&self) -> &'static str {
        self.0
    }
}
