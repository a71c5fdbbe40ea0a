//! Entity - a positioned game object cycling through one or more views.

use arrayvec::ArrayVec;

use crate::assets::AssetLoader;
use crate::error::{GameError, Result};
use crate::types::{EntityKind, MAX_VIEWS};
use crate::view::View;

/// A positioned, animatable, visibility-toggleable game object.
///
/// Invariant: `current_view < views.len()` whenever `views` is non-empty.
#[derive(Debug, Clone)]
pub struct Entity {
    pub kind: EntityKind,
    pub x: i32,
    pub y: i32,
    pub visible: bool,
    views: ArrayVec<View, MAX_VIEWS>,
    current_view: usize,
}

impl Entity {
    /// A visible entity at the origin with no views.
    pub fn new(kind: EntityKind) -> Self {
        Self {
            kind,
            x: 0,
            y: 0,
            visible: true,
            views: ArrayVec::new(),
            current_view: 0,
        }
    }

    /// Create an entity and load `names` as its views, in order.
    pub fn load(kind: EntityKind, loader: &dyn AssetLoader, names: &[&str]) -> Result<Self> {
        let mut entity = Self::new(kind);
        for name in names {
            entity.add_view(loader.load_view(name)?)?;
        }
        Ok(entity)
    }

    /// Append a view.
    pub fn add_view(&mut self, view: View) -> Result<()> {
        self.views
            .try_push(view)
            .map_err(|_| GameError::ResourceExhaustion {
                what: "entity views",
                capacity: MAX_VIEWS,
            })
    }

    /// Step to the next view, wrapping around.
    pub fn advance_view(&mut self) {
        debug_assert!(!self.views.is_empty(), "advance_view on an entity without views");
        if self.views.is_empty() {
            return;
        }
        self.current_view = (self.current_view + 1) % self.views.len();
    }

    /// Select a view by index. Out-of-range indices are ignored.
    pub fn set_view(&mut self, index: usize) {
        debug_assert!(index < self.views.len(), "view index {index} out of range");
        if index < self.views.len() {
            self.current_view = index;
        }
    }

    pub fn set_position(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn current_view(&self) -> usize {
        self.current_view
    }

    pub fn views(&self) -> &[View] {
        &self.views
    }

    pub fn has_views(&self) -> bool {
        !self.views.is_empty()
    }

    /// The active view, or `None` for an entity without views.
    pub fn active_view(&self) -> Option<&View> {
        self.views.get(self.current_view)
    }

    /// Width of the first view, used for off-screen checks.
    pub fn base_width(&self) -> i32 {
        self.views.first().map_or(0, View::width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity_with_views(n: usize) -> Entity {
        let mut e = Entity::new(EntityKind::Player);
        for i in 0..n {
            e.add_view(View::filled(1, 1, char::from(b'0' + i as u8))).unwrap();
        }
        e
    }

    #[test]
    fn new_entity_is_visible_at_origin() {
        let e = Entity::new(EntityKind::Decoration);
        assert!(e.visible);
        assert_eq!((e.x, e.y), (0, 0));
        assert!(!e.has_views());
        assert!(e.active_view().is_none());
    }

    #[test]
    fn advance_view_wraps_after_full_cycle() {
        for n in 1..=MAX_VIEWS {
            let mut e = entity_with_views(n);
            e.set_view(n / 2);
            let start = e.current_view();
            for _ in 0..n {
                e.advance_view();
            }
            assert_eq!(e.current_view(), start, "cycle of {n} views");
        }
    }

    #[test]
    fn add_view_rejects_overflow() {
        let mut e = entity_with_views(MAX_VIEWS);
        let err = e.add_view(View::filled(1, 1, 'x')).unwrap_err();
        assert!(matches!(
            err,
            GameError::ResourceExhaustion { what: "entity views", capacity: MAX_VIEWS }
        ));
        assert_eq!(e.views().len(), MAX_VIEWS);
    }

    #[test]
    fn active_view_follows_selection() {
        let mut e = entity_with_views(3);
        e.set_view(2);
        assert_eq!(e.active_view().unwrap().body(), "2");
    }

    #[test]
    fn base_width_uses_first_view() {
        let mut e = Entity::new(EntityKind::Obstacle);
        assert_eq!(e.base_width(), 0);
        e.add_view(View::filled(7, 1, '#')).unwrap();
        e.add_view(View::filled(2, 1, '#')).unwrap();
        e.advance_view();
        assert_eq!(e.base_width(), 7);
    }
}
