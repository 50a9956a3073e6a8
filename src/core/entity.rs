//! Identification of board objects.
//!
//! Tiles live in an arena owned by the [`Board`](crate::board::Board) and are
//! referenced by `TileId` (their arena index). Cards in play are referenced by
//! `PlaceableId`, allocated by the board when a card is dealt.
//!
//! ## ID Layout
//!
//! Tile ids are assigned row-major over the grid, skipping holes:
//!
//! ```
//! use tile_push::{Board, BoardConfig, GridPos, TileId};
//!
//! let board = Board::new(BoardConfig::new(3, 3)).unwrap();
//!
//! assert_eq!(board.tile_at(GridPos::new(0, 0)), Some(TileId(0)));
//! assert_eq!(board.tile_at(GridPos::new(2, 1)), Some(TileId(5)));
//! ```

use serde::{Deserialize, Serialize};

/// Index of a tile in the board's arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TileId(pub u32);

impl TileId {
    /// Create a tile ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the arena index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tile({})", self.0)
    }
}

/// Identifier of a card instance in play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlaceableId(pub u32);

impl PlaceableId {
    /// Create a placeable ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for PlaceableId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for PlaceableId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Placeable({})", self.0)
    }
}

/// Grid coordinates of a tile. `row` 0 is the top row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPos {
    pub col: u32,
    pub row: u32,
}

impl GridPos {
    #[must_use]
    pub const fn new(col: u32, row: u32) -> Self {
        Self { col, row }
    }

    /// The position one step in `dir`, or `None` when it would leave the
    /// `width` x `height` grid.
    ///
    /// ```
    /// use tile_push::{Direction, GridPos};
    ///
    /// let corner = GridPos::new(0, 0);
    /// assert_eq!(corner.step(Direction::Up, 3, 3), None);
    /// assert_eq!(corner.step(Direction::Right, 3, 3), Some(GridPos::new(1, 0)));
    /// ```
    #[must_use]
    pub fn step(self, dir: super::Direction, width: u32, height: u32) -> Option<Self> {
        let (dx, dy) = dir.offset();
        let col = i64::from(self.col) + i64::from(dx);
        let row = i64::from(self.row) + i64::from(dy);
        if col < 0 || row < 0 || col >= i64::from(width) || row >= i64::from(height) {
            return None;
        }
        Some(Self::new(col as u32, row as u32))
    }
}

impl std::fmt::Display for GridPos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}
