//! Player component and its state machine.
//!
//! The player's visible state is the section its
//! [`AnimationPlayer`](super::animation::AnimationPlayer) is playing, so the
//! transitions below are all "set the acceleration, restart at a section".
//! Rolling over from TakingOff to Flying happens by itself when the
//! one-shot take-off section runs out.
//!
//! ```text
//! set_flying(true)  -> TakingOff -> Flying
//! set_flying(false) -> Falling
//! hit bottom        -> Running   (unless flying or dead)
//! kill              -> Dead      (terminal)
//! ```

use bevy_ecs::prelude::Component;
use glam::Vec2;
use log::{debug, info};

use crate::components::animation::AnimationPlayer;
use crate::components::rigidbody::RigidBody;

/// Player states, numbered by their animation section.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PlayerState {
    Running = 0,
    TakingOff = 1,
    Flying = 2,
    Falling = 3,
    Dead = 4,
}

impl PlayerState {
    pub fn section(self) -> usize {
        self as usize
    }

    pub fn from_section(section: usize) -> Option<Self> {
        match section {
            0 => Some(Self::Running),
            1 => Some(Self::TakingOff),
            2 => Some(Self::Flying),
            3 => Some(Self::Falling),
            4 => Some(Self::Dead),
            _ => None,
        }
    }
}

#[derive(Component, Clone, Copy, Debug)]
pub struct Player {
    /// Jetpack held on.
    pub flying: bool,
    pub dead: bool,
    pub fly_acceleration: f32,
    pub fall_acceleration: f32,
}

impl Player {
    pub fn new(fly_acceleration: f32, fall_acceleration: f32) -> Self {
        Self {
            flying: false,
            dead: false,
            fly_acceleration,
            fall_acceleration,
        }
    }

    /// Current state as shown by the animation.
    pub fn state(&self, anim: &AnimationPlayer) -> Option<PlayerState> {
        anim.current_section().and_then(PlayerState::from_section)
    }

    fn enter(&self, state: PlayerState, acceleration: f32, anim: &mut AnimationPlayer, body: &mut RigidBody) {
        body.set_acceleration(Vec2::new(0.0, acceleration));
        anim.restart(Some(state.section()), None);
        debug!("Player -> {:?}", state);
    }

    /// Jetpack on/off. Ignored once dead; returns whether it was applied.
    pub fn set_flying(&mut self, flying: bool, anim: &mut AnimationPlayer, body: &mut RigidBody) -> bool {
        if self.dead {
            return false;
        }
        self.flying = flying;
        if flying {
            self.enter(PlayerState::TakingOff, self.fly_acceleration, anim, body);
        } else {
            self.enter(PlayerState::Falling, self.fall_acceleration, anim, body);
        }
        true
    }

    /// Enter the terminal Dead state. Returns `false` if already dead.
    pub fn kill(&mut self, anim: &mut AnimationPlayer, body: &mut RigidBody) -> bool {
        if self.dead {
            return false;
        }
        self.dead = true;
        self.flying = false;
        self.enter(PlayerState::Dead, self.fall_acceleration, anim, body);
        info!("Player died");
        true
    }

    /// Landing: stop vertical motion and start running if possible.
    pub fn on_hit_bottom(&self, anim: &mut AnimationPlayer, body: &mut RigidBody) {
        if !self.dead && !self.flying {
            anim.restart(Some(PlayerState::Running.section()), None);
            debug!("Player -> {:?}", PlayerState::Running);
        }
        body.velocity.y = 0.0;
    }

    pub fn on_hit_top(&self, body: &mut RigidBody) {
        body.velocity.y = 0.0;
    }

    /// Stop pushing into the edge the player is resting against.
    pub fn settle(&self, at_top: bool, at_bottom: bool, body: &mut RigidBody) {
        if self.dead {
            return;
        }
        let ay = body.acceleration_y();
        if (at_top && ay < 0.0) || (at_bottom && ay > 0.0) {
            body.velocity.y = 0.0;
            if let Some(acceleration) = body.acceleration.as_mut() {
                acceleration.y = 0.0;
            }
        }
    }
}
