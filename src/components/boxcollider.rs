use bevy_ecs::prelude::Component;
use glam::IVec2;

/// Integer rectangle in screen pixels. `right`/`bottom` are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Aabb {
    pub min: IVec2,
    pub size: IVec2,
}

impl Aabb {
    pub fn new(min: IVec2, size: IVec2) -> Self {
        Self { min, size }
    }

    pub fn left(&self) -> i32 {
        self.min.x
    }

    pub fn top(&self) -> i32 {
        self.min.y
    }

    pub fn right(&self) -> i32 {
        self.min.x + self.size.x - 1
    }

    pub fn bottom(&self) -> i32 {
        self.min.y + self.size.y - 1
    }

    pub fn is_empty(&self) -> bool {
        self.size.x <= 0 || self.size.y <= 0
    }

    /// Overlap test on shared pixels. Empty boxes never overlap.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.left() <= other.right()
            && other.left() <= self.right()
            && self.top() <= other.bottom()
            && other.top() <= self.bottom()
    }

    pub fn contains_point(&self, point: IVec2) -> bool {
        point.x >= self.left()
            && point.x <= self.right()
            && point.y >= self.top()
            && point.y <= self.bottom()
    }
}

/// Rectangular collider; optionally refined by the sprite's pixel mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Component)]
pub struct BoxCollider {
    /// Fixed size, or `None` to use the current sprite's size.
    pub size: Option<IVec2>,
    pub offset: IVec2,
    /// Confirm box hits against the sprites' pixel masks.
    pub pixel_perfect: bool,
}

impl BoxCollider {
    /// Create a BoxCollider with given size
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            size: Some(IVec2::new(width, height)),
            ..Self::default()
        }
    }

    /// Collider that follows the sprite's size and tests pixel masks.
    pub fn from_sprite_mask() -> Self {
        Self {
            pixel_perfect: true,
            ..Self::default()
        }
    }

    /// Modify BoxCollider with given offset
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn with_offset(mut self, offset: IVec2) -> Self {
        self.offset = offset;
        self
    }

    /// Collider box for an entity at `position` showing a sprite of `sprite_size`.
    pub fn bounding_box(&self, position: IVec2, sprite_size: IVec2) -> Aabb {
        Aabb::new(position + self.offset, self.size.unwrap_or(sprite_size))
    }
}
