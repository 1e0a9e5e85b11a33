//! Entities: colored rectangles with a world location and movement state.

use std::fmt;

use crate::movement::Movement;
use crate::types::{Color, Loc, Size};

/// Unique, monotonically assigned entity identifier.
///
/// Id `0` is reserved for the player by creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntityId(pub u64);

impl EntityId {
    pub const PLAYER: EntityId = EntityId(0);
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A rectangle in world space. `loc` is the rectangle's center.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    id: EntityId,
    pub color: Color,
    pub size: Size,
    pub loc: Loc,
    pub movement: Movement,
}

impl Entity {
    /// Entities are normally created through [`crate::Game::new_entity`].
    pub(crate) fn new(id: EntityId) -> Self {
        Self {
            id,
            color: Color::RED,
            size: Size::new(50, 100),
            loc: Loc::ORIGIN,
            movement: Movement::default(),
        }
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    /// Steer by `dir` for one tick and move.
    pub fn step(&mut self, dir: Loc) {
        self.movement.update(dir);
        self.loc = self.movement.next_loc(self.loc);
    }
}
