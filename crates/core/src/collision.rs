//! Axis-aligned bounding box collision between entities.

use crate::entity::Entity;

/// Half-open box `[x, x + w) x [y, y + h)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Bounds {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Box of the entity's active view, anchored at its origin.
    pub fn of(entity: &Entity) -> Option<Self> {
        let view = entity.active_view()?;
        Some(Self {
            x: entity.x - view.origin_x(),
            y: entity.y - view.origin_y(),
            w: view.width(),
            h: view.height(),
        })
    }

    /// Strict overlap on both axes. Touching edges do not intersect and
    /// empty boxes intersect nothing.
    pub fn intersects(&self, other: &Bounds) -> bool {
        self.x < other.x + other.w
            && other.x < self.x + self.w
            && self.y < other.y + other.h
            && other.y < self.y + self.h
    }
}

/// Whether the active views of two entities overlap.
///
/// Entities without views never collide.
pub fn overlaps(a: &Entity, b: &Entity) -> bool {
    match (Bounds::of(a), Bounds::of(b)) {
        (Some(ba), Some(bb)) => ba.intersects(&bb),
        _ => false,
    }
}
