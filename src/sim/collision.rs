//! Actor-versus-actor overlap tests
//!
//! Actors collide with the static grid through [`LevelGrid::touches`];
//! collisions between two moving actors use plain axis-aligned boxes.
//!
//! [`LevelGrid::touches`]: super::level::LevelGrid::touches

use glam::Vec2;

/// Axis-aligned bounding box (top-left corner plus size)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    #[inline]
    pub fn min(&self) -> Vec2 {
        self.pos
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.pos + self.size
    }

    /// Strict intersection: boxes that only share an edge do not overlap
    pub fn overlaps(&self, other: &Aabb) -> bool {
        let (a_min, a_max) = (self.min(), self.max());
        let (b_min, b_max) = (other.min(), other.max());
        a_max.x > b_min.x && a_min.x < b_max.x && a_max.y > b_min.y && a_min.y < b_max.y
    }
}
