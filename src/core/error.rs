//! Setup-time errors.
//!
//! Rule outcomes (lost contests, blocked pushes, Dead-tile roots) are plain
//! `bool`s and never show up here. These errors only come from building a
//! board or loading card data.

use super::{Direction, GridPos, TileId};
use crate::cards::CardId;

/// Errors raised while building a [`Board`](crate::board::Board).
#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    #[error("board must have at least one tile, got {width}x{height}")]
    EmptyBoard { width: u32, height: u32 },

    #[error("position {pos} lies outside the {width}x{height} grid")]
    PositionOutOfBounds { pos: GridPos, width: u32, height: u32 },

    #[error("position {0} is marked both dead and as a hole")]
    DeadHole(GridPos),

    #[error("adjacency of {tile} towards {dir} points at missing {target}")]
    AdjacencyOutOfRange {
        tile: TileId,
        dir: Direction,
        target: TileId,
    },

    #[error("invalid board configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}

/// Errors raised while loading card definitions.
#[derive(Debug, thiserror::Error)]
pub enum CardDataError {
    #[error("malformed card data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("card {0} is already registered")]
    DuplicateCard(CardId),
}
