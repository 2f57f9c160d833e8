//! Hazard spawn pacing.
//!
//! The spawner accumulates scrolled distance and asks for a new hazard once
//! it exceeds a randomly drawn spacing. All randomness comes from one seeded
//! generator, so a seed reproduces a run.

use bevy_ecs::prelude::Resource;

#[derive(Resource, Debug, Clone)]
pub struct HazardSpawner {
    /// Distance scrolled since the last spawn.
    pub distance: f32,
    /// Distance at which the next hazard appears.
    pub next_spacing: u32,
    pub spacing_min: u32,
    pub spacing_max: u32,
    pub rng: fastrand::Rng,
}

impl HazardSpawner {
    pub fn new(spacing_min: u32, spacing_max: u32, seed: u64) -> Self {
        let spacing_max = spacing_max.max(spacing_min);
        let mut rng = fastrand::Rng::with_seed(seed);
        let next_spacing = rng.u32(spacing_min..=spacing_max);
        Self {
            distance: 0.0,
            next_spacing,
            spacing_min,
            spacing_max,
            rng,
        }
    }

    /// Record `scrolled` pixels; returns `true` when a hazard is due.
    ///
    /// The check happens before the distance is added, so a hazard appears on
    /// the tick after the spacing is exceeded.
    pub fn advance(&mut self, scrolled: f32) -> bool {
        let due = self.distance > self.next_spacing as f32;
        if due {
            self.distance = 0.0;
            self.next_spacing = self.rng.u32(self.spacing_min..=self.spacing_max);
        }
        self.distance += scrolled;
        due
    }
}
