//! Card instances - cards in play.
//!
//! A `Placeable` is one physical card: it shares its immutable
//! [`CardDefinition`] and tracks where it currently is. Only the board moves
//! placeables between locations.
//!
//! ## Lifecycle
//!
//! - Dealt into `Hand` (with the source collaborator, or held by the pointer)
//! - Committed `OnTile` when a placement or push that moves it is confirmed
//! - `Destroyed` when a Bomb arrow beats it; this is terminal

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::arrow::Arrow;
use super::definition::{CardDefinition, CardId};
use crate::core::{Direction, PlaceableId, TileId};

/// Where a placeable currently is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    /// Not on the board: in the hand or held by the pointer.
    Hand,
    /// Committed occupant of a tile.
    OnTile(TileId),
    /// Removed from play.
    Destroyed,
}

/// A card instance in play.
#[derive(Clone, Debug)]
pub struct Placeable {
    id: PlaceableId,
    card: Arc<CardDefinition>,
    location: Location,
}

impl Placeable {
    /// Create a placeable in the hand.
    #[must_use]
    pub fn new(id: PlaceableId, card: Arc<CardDefinition>) -> Self {
        Self {
            id,
            card,
            location: Location::Hand,
        }
    }

    #[must_use]
    pub fn id(&self) -> PlaceableId {
        self.id
    }

    /// The shared card definition.
    #[must_use]
    pub fn card(&self) -> &CardDefinition {
        &self.card
    }

    #[must_use]
    pub fn card_id(&self) -> CardId {
        self.card.id
    }

    #[must_use]
    pub fn location(&self) -> Location {
        self.location
    }

    /// The arrow on side `dir` of this card.
    #[must_use]
    pub fn arrow_at(&self, dir: Direction) -> Arrow {
        self.card.arrow_at(dir)
    }

    #[must_use]
    pub fn is_destroyed(&self) -> bool {
        self.location == Location::Destroyed
    }

    /// The tile this card is committed to, if any.
    #[must_use]
    pub fn tile(&self) -> Option<TileId> {
        match self.location {
            Location::OnTile(tile) => Some(tile),
            Location::Hand | Location::Destroyed => None,
        }
    }

    pub(crate) fn settle_on(&mut self, tile: TileId) {
        self.location = Location::OnTile(tile);
    }

    pub(crate) fn destroy(&mut self) {
        self.location = Location::Destroyed;
    }
}
