//! Kinematic body component.
//!
//! [`RigidBody`] stores a per-tick velocity and an optional constant
//! acceleration. A body without acceleration just moves; one with
//! acceleration also changes speed every tick.

use bevy_ecs::prelude::Component;
use glam::{IVec2, Vec2};

/// Velocity and optional acceleration, in pixels per tick (per tick squared).
///
/// # Example
/// ```
/// use glam::{IVec2, Vec2};
/// use jetrunner::components::rigidbody::RigidBody;
///
/// let mut body = RigidBody::accelerating(Vec2::ZERO, Vec2::new(0.0, 0.5));
/// let mut pos = IVec2::ZERO;
/// body.integrate(&mut pos);
/// body.integrate(&mut pos);
/// body.integrate(&mut pos);
/// assert_eq!(pos, IVec2::new(0, 1));
/// assert_eq!(body.velocity, Vec2::new(0.0, 1.5));
/// ```
#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct RigidBody {
    /// Displacement applied each tick.
    pub velocity: Vec2,
    /// Added to `velocity` after each displacement, when present.
    pub acceleration: Option<Vec2>,
}

impl RigidBody {
    /// Constant-velocity body.
    pub fn moving(velocity: Vec2) -> Self {
        Self {
            velocity,
            acceleration: None,
        }
    }

    pub fn accelerating(velocity: Vec2, acceleration: Vec2) -> Self {
        Self {
            velocity,
            acceleration: Some(acceleration),
        }
    }

    pub fn set_acceleration(&mut self, acceleration: Vec2) {
        self.acceleration = Some(acceleration);
    }

    /// Vertical acceleration, 0 when there is none.
    pub fn acceleration_y(&self) -> f32 {
        self.acceleration.map(|a| a.y).unwrap_or(0.0)
    }

    /// Move `pos` by the velocity (truncated to whole pixels), then apply
    /// the acceleration to the velocity.
    pub fn integrate(&mut self, pos: &mut IVec2) {
        *pos = (pos.as_vec2() + self.velocity).as_ivec2();
        if let Some(acceleration) = self.acceleration {
            self.velocity += acceleration;
        }
    }
}
