//! Collision filtering and counters.
//!
//! [`CollisionRules`] lists which [`Group`](crate::components::group::Group)
//! pairs are tested at all. [`CollisionStats`] counts the work done by the
//! collision system, cumulatively since the last reset.

use bevy_ecs::prelude::Resource;

/// Unordered pair of group names that collide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollisionRule {
    pub group_a: &'static str,
    pub group_b: &'static str,
}

impl CollisionRule {
    pub fn new(group_a: &'static str, group_b: &'static str) -> Self {
        Self { group_a, group_b }
    }

    pub fn matches(&self, group_a: &str, group_b: &str) -> bool {
        (self.group_a == group_a && self.group_b == group_b)
            || (self.group_a == group_b && self.group_b == group_a)
    }
}

#[derive(Resource, Debug, Clone, Default)]
pub struct CollisionRules {
    pub rules: Vec<CollisionRule>,
}

impl CollisionRules {
    pub fn new(rules: Vec<CollisionRule>) -> Self {
        Self { rules }
    }

    pub fn with(mut self, group_a: &'static str, group_b: &'static str) -> Self {
        self.rules.push(CollisionRule::new(group_a, group_b));
        self
    }

    pub fn matches(&self, group_a: &str, group_b: &str) -> bool {
        self.rules.iter().any(|r| r.matches(group_a, group_b))
    }
}

#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionStats {
    /// Pairs whose boxes overlapped.
    pub broad_phase_hits: u64,
    /// Pixel-mask intersections performed.
    pub mask_tests: u64,
    /// Collision events emitted.
    pub collisions: u64,
}
