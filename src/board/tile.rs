//! Tiles: nodes of the board graph.
//!
//! A tile has a fixed type, four fixed neighbor links, at most one committed
//! occupant, and, while a preview negotiation is outstanding, a
//! [`TilePreview`] describing what will happen to it on commit.
//!
//! ## State machine
//!
//! ```text
//!   Idle --try_push accepted--> Previewing --confirm--> Idle (occupant replaced)
//!                                          --cancel---> Idle (occupant untouched)
//! ```

use serde::{Deserialize, Serialize};

use crate::core::{Direction, GridPos, PlaceableId, TileId};

/// Kind of tile, fixed when the board is built.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileType {
    #[default]
    Normal,
    /// Cannot be the landing tile of a placement.
    Dead,
}

/// Whether a preview is outstanding on a tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TileState {
    Idle,
    Previewing,
}

/// Tentative change recorded on a tile between preview and confirm/cancel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TilePreview {
    /// Card that will occupy the tile on commit. `None` when a push effect
    /// with no source card clears the tile.
    pub occupant: Option<PlaceableId>,

    /// Neighbor that receives the current occupant on commit.
    pub push_target: Option<TileId>,

    /// Current occupant that a Bomb arrow destroys on commit.
    pub destroys: Option<PlaceableId>,
}

/// A node of the board graph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tile {
    id: TileId,
    position: GridPos,
    tile_type: TileType,
    neighbors: [Option<TileId>; 4],
    occupant: Option<PlaceableId>,
    preview: Option<TilePreview>,
}

impl Tile {
    pub(crate) fn new(id: TileId, position: GridPos, tile_type: TileType) -> Self {
        Self {
            id,
            position,
            tile_type,
            neighbors: [None; 4],
            occupant: None,
            preview: None,
        }
    }

    #[must_use]
    pub fn id(&self) -> TileId {
        self.id
    }

    #[must_use]
    pub fn position(&self) -> GridPos {
        self.position
    }

    #[must_use]
    pub fn tile_type(&self) -> TileType {
        self.tile_type
    }

    #[must_use]
    pub fn is_dead(&self) -> bool {
        self.tile_type == TileType::Dead
    }

    /// The adjacent tile in `dir`, or `None` at a board edge or hole.
    #[must_use]
    pub fn neighbor(&self, dir: Direction) -> Option<TileId> {
        self.neighbors[dir.index()]
    }

    /// All four neighbor links, clockwise from Up.
    #[must_use]
    pub fn neighbors(&self) -> [Option<TileId>; 4] {
        self.neighbors
    }

    /// The committed occupant.
    #[must_use]
    pub fn occupant(&self) -> Option<PlaceableId> {
        self.occupant
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.occupant.is_none()
    }

    #[must_use]
    pub fn state(&self) -> TileState {
        match self.preview {
            Some(_) => TileState::Previewing,
            None => TileState::Idle,
        }
    }

    #[must_use]
    pub fn is_previewing(&self) -> bool {
        self.preview.is_some()
    }

    /// The outstanding preview, if any.
    #[must_use]
    pub fn preview(&self) -> Option<&TilePreview> {
        self.preview.as_ref()
    }

    /// The card that will occupy this tile if the preview is confirmed.
    #[must_use]
    pub fn preview_occupant(&self) -> Option<PlaceableId> {
        self.preview.and_then(|p| p.occupant)
    }

    /// The neighbor this tile's pending push displaces into.
    #[must_use]
    pub fn push_target(&self) -> Option<TileId> {
        self.preview.and_then(|p| p.push_target)
    }

    pub(crate) fn set_neighbor(&mut self, dir: Direction, neighbor: Option<TileId>) {
        self.neighbors[dir.index()] = neighbor;
    }

    pub(crate) fn set_occupant(&mut self, occupant: Option<PlaceableId>) {
        self.occupant = occupant;
    }

    pub(crate) fn begin_preview(&mut self, preview: TilePreview) {
        self.preview = Some(preview);
    }

    pub(crate) fn take_preview(&mut self) -> Option<TilePreview> {
        self.preview.take()
    }
}
