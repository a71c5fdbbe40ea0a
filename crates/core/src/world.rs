//! World - the entity arena and render list.
//!
//! Entities are registered once at startup and addressed by [`EntityId`].
//! Registration order is paint order: later entities are drawn on top.

use std::ops::{Index, IndexMut};

use arrayvec::ArrayVec;

use crate::entity::Entity;
use crate::error::{GameError, Result};
use crate::types::MAX_ENTITIES;

/// Stable handle to a registered entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityId(usize);

impl EntityId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Owns every entity in the game.
#[derive(Debug, Clone, Default)]
pub struct World {
    entities: ArrayVec<Entity, MAX_ENTITIES>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an entity and return its handle.
    pub fn register(&mut self, entity: Entity) -> Result<EntityId> {
        let id = EntityId(self.entities.len());
        tracing::debug!(
            id = id.0,
            kind = ?entity.kind,
            views = entity.views().len(),
            "registering entity"
        );
        self.entities
            .try_push(entity)
            .map_err(|_| GameError::ResourceExhaustion {
                what: "entities",
                capacity: MAX_ENTITIES,
            })?;
        Ok(id)
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(id.0)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.get_mut(id.0)
    }

    /// Entities in paint order.
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl Index<EntityId> for World {
    type Output = Entity;

    fn index(&self, id: EntityId) -> &Entity {
        &self.entities[id.0]
    }
}

impl IndexMut<EntityId> for World {
    fn index_mut(&mut self, id: EntityId) -> &mut Entity {
        &mut self.entities[id.0]
    }
}
