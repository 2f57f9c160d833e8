//! Screen size resource.
//!
//! Stores the playfield dimensions in pixels and answers boundary queries
//! for integer rectangles. "At" queries are boundary-inclusive (touching the
//! edge counts); "outside" queries mean fully past the edge.

use bevy_ecs::prelude::Resource;
use glam::IVec2;

use crate::components::boxcollider::Aabb;

/// Current screen size in pixels.
#[derive(Resource, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScreenSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}

impl ScreenSize {
    pub fn new(w: i32, h: i32) -> Self {
        Self { w, h }
    }

    fn last_column(&self) -> i32 {
        self.w - 1
    }

    fn last_row(&self) -> i32 {
        self.h - 1
    }

    pub fn at_top(&self, rect: &Aabb) -> bool {
        rect.top() <= 0
    }

    pub fn at_bottom(&self, rect: &Aabb) -> bool {
        rect.bottom() >= self.last_row()
    }

    pub fn at_left(&self, rect: &Aabb) -> bool {
        rect.left() <= 0
    }

    pub fn at_right(&self, rect: &Aabb) -> bool {
        rect.right() >= self.last_column()
    }

    pub fn outside_top(&self, rect: &Aabb) -> bool {
        rect.bottom() < 0
    }

    pub fn outside_bottom(&self, rect: &Aabb) -> bool {
        rect.top() > self.last_row()
    }

    pub fn outside_left(&self, rect: &Aabb) -> bool {
        rect.right() < 0
    }

    pub fn outside_right(&self, rect: &Aabb) -> bool {
        rect.left() > self.last_column()
    }

    /// Fully past any edge.
    pub fn outside(&self, rect: &Aabb) -> bool {
        self.outside_top(rect)
            || self.outside_bottom(rect)
            || self.outside_left(rect)
            || self.outside_right(rect)
    }

    /// Top-left position that snaps `rect` onto every edge it is at.
    pub fn clamp(&self, rect: &Aabb) -> IVec2 {
        let mut min = rect.min;
        if self.at_left(rect) {
            min.x = 0;
        }
        if self.at_right(rect) {
            min.x = self.w - rect.size.x;
        }
        if self.at_top(rect) {
            min.y = 0;
        }
        if self.at_bottom(rect) {
            min.y = self.h - rect.size.y;
        }
        min
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCREEN: ScreenSize = ScreenSize { w: 100, h: 50 };

    fn rect(x: i32, y: i32, w: i32, h: i32) -> Aabb {
        Aabb::new(IVec2::new(x, y), IVec2::new(w, h))
    }

    #[test]
    fn test_at_edges_are_inclusive() {
        assert!(SCREEN.at_top(&rect(10, 0, 5, 5)));
        assert!(!SCREEN.at_top(&rect(10, 1, 5, 5)));
        assert!(SCREEN.at_bottom(&rect(10, 45, 5, 5)));
        assert!(!SCREEN.at_bottom(&rect(10, 44, 5, 5)));
        assert!(SCREEN.at_right(&rect(95, 0, 5, 5)));
        assert!(SCREEN.at_left(&rect(-2, 0, 5, 5)));
    }

    #[test]
    fn test_outside_means_fully_past() {
        assert!(!SCREEN.outside_right(&rect(99, 10, 5, 5)));
        assert!(SCREEN.outside_right(&rect(100, 10, 5, 5)));
        assert!(!SCREEN.outside_left(&rect(-4, 10, 5, 5)));
        assert!(SCREEN.outside_left(&rect(-5, 10, 5, 5)));
        assert!(SCREEN.outside(&rect(10, 50, 5, 5)));
        assert!(SCREEN.outside(&rect(10, -5, 5, 5)));
        assert!(!SCREEN.outside(&rect(10, 10, 5, 5)));
    }

    #[test]
    fn test_clamp_snaps_to_edges() {
        assert_eq!(SCREEN.clamp(&rect(10, 60, 5, 5)), IVec2::new(10, 45));
        assert_eq!(SCREEN.clamp(&rect(-3, -7, 5, 5)), IVec2::new(0, 0));
        assert_eq!(SCREEN.clamp(&rect(120, 20, 5, 5)), IVec2::new(95, 20));
        assert_eq!(SCREEN.clamp(&rect(10, 20, 5, 5)), IVec2::new(10, 20));
    }
}
