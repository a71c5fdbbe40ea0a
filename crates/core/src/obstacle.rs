//! Obstacles - paired top/bottom parts around a vertical gap.

use crate::assets::AssetLoader;
use crate::entity::Entity;
use crate::error::Result;
use crate::rng::SimpleRng;
use crate::types::{EntityKind, Playfield};
use crate::world::{EntityId, World};

/// Asset name of the upper part.
pub const OBSTACLE_TOP_ASSET: &str = "obstacle_top";
/// Asset name of the lower part.
pub const OBSTACLE_BOTTOM_ASSET: &str = "obstacle_bottom";

/// A gap obstacle. The parts are derived from `x`, `y` and `gap`.
#[derive(Debug, Clone)]
pub struct Obstacle {
    pub x: i32,
    /// Vertical center of the gap.
    pub y: i32,
    /// Half-size of the gap.
    pub gap: i32,
    pub score_awarded: bool,
    top: EntityId,
    bottom: EntityId,
}

impl Obstacle {
    /// Load both parts, register them and place them.
    pub fn create(
        world: &mut World,
        loader: &dyn AssetLoader,
        x: i32,
        y: i32,
        gap: i32,
    ) -> Result<Self> {
        let top = Entity::load(EntityKind::Obstacle, loader, &[OBSTACLE_TOP_ASSET])?;
        let bottom = Entity::load(EntityKind::Obstacle, loader, &[OBSTACLE_BOTTOM_ASSET])?;

        let obstacle = Self {
            x,
            y,
            gap,
            score_awarded: false,
            top: world.register(top)?,
            bottom: world.register(bottom)?,
        };
        obstacle.sync(world);
        Ok(obstacle)
    }

    pub fn top(&self) -> EntityId {
        self.top
    }

    pub fn bottom(&self) -> EntityId {
        self.bottom
    }

    pub fn parts(&self) -> [EntityId; 2] {
        [self.top, self.bottom]
    }

    /// Move both parts to match the obstacle's position.
    ///
    /// Call after every change to `x`, `y` or `gap`.
    pub fn sync(&self, world: &mut World) {
        world[self.top].set_position(self.x, self.y - self.gap);
        world[self.bottom].set_position(self.x, self.y + self.gap);
    }

    /// Move to `(x, y)` and re-derive the parts.
    pub fn place(&mut self, world: &mut World, x: i32, y: i32) {
        self.x = x;
        self.y = y;
        self.sync(world);
    }

    /// Whether the obstacle has scrolled fully past the left edge.
    pub fn is_offscreen(&self, world: &World) -> bool {
        self.x < -world[self.top].base_width()
    }

    /// Teleport to the right edge with a fresh gap center once off-screen.
    ///
    /// Returns whether the obstacle was recycled. Does not sync the parts.
    pub fn recycle_if_offscreen(
        &mut self,
        world: &World,
        field: Playfield,
        rng: &mut SimpleRng,
    ) -> bool {
        if !self.is_offscreen(world) {
            return false;
        }
        self.x = field.w();
        self.y = random_gap_center(rng, field);
        self.score_awarded = false;
        true
    }
}

/// Uniform gap center in `[height / 4, height * 3 / 4)`.
pub fn random_gap_center(rng: &mut SimpleRng, field: Playfield) -> i32 {
    let h = field.h();
    rng.range_i32(h / 4, h * 3 / 4)
}
