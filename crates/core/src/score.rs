//! Score counter - a fixed row of digit entities.
//!
//! Digit `i` shows the `10^i` place and sits `i * (digit width + 1)` cells
//! left of the anchor. Leading zeros are never shown, so a score of zero
//! shows no digits at all.

use arrayvec::ArrayVec;

use crate::assets::AssetLoader;
use crate::entity::Entity;
use crate::error::Result;
use crate::types::{EntityKind, SCORE_COUNTER_DIGITS};
use crate::world::{EntityId, World};

/// Asset names of the ten digit glyphs, indexed by value.
pub const DIGIT_ASSETS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

#[derive(Debug, Clone)]
pub struct ScoreCounter {
    x: i32,
    y: i32,
    /// Least-significant digit first.
    digits: ArrayVec<EntityId, SCORE_COUNTER_DIGITS>,
}

impl ScoreCounter {
    /// Load and register the digit entities, anchored at `(x, y)`.
    pub fn create(world: &mut World, loader: &dyn AssetLoader, x: i32, y: i32) -> Result<Self> {
        let mut digits = ArrayVec::new();
        for place in 0..SCORE_COUNTER_DIGITS {
            let mut digit = Entity::load(EntityKind::Decoration, loader, &DIGIT_ASSETS)?;
            digit.set_position(x - place as i32 * (digit.base_width() + 1), y);
            digits.push(world.register(digit)?);
        }

        let counter = Self { x, y, digits };
        counter.update(world, 0);
        Ok(counter)
    }

    pub fn anchor(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    /// Digit entity for the `10^place` position.
    pub fn digit(&self, place: usize) -> Option<EntityId> {
        self.digits.get(place).copied()
    }

    pub fn digits(&self) -> &[EntityId] {
        &self.digits
    }

    /// Show `score`. Digits beyond the counter's width are dropped.
    pub fn update(&self, world: &mut World, score: u32) {
        let mut rest = score;
        let mut shown = 0;
        while rest > 0 && shown < self.digits.len() {
            let digit = &mut world[self.digits[shown]];
            digit.set_view((rest % 10) as usize);
            digit.visible = true;
            rest /= 10;
            shown += 1;
        }
        for &id in &self.digits[shown..] {
            world[id].visible = false;
        }
    }
}
