//! # tile-push
//!
//! Placement and chain-push rules engine for a grid card-battle game.
//!
//! Cards carry four arrows (Up, Right, Down, Left), each with a strength and
//! an optional effect. Placing a card on an occupied tile contests the
//! occupant: if the incoming arrow wins, the occupant is shoved one tile
//! further along the same line, possibly shoving the next card, and so on.
//!
//! ## Design Principles
//!
//! 1. **Two-phase placement**: a preview negotiates the whole chain without
//!    committing anything; the caller then confirms or cancels.
//!
//! 2. **Failure never mutates**: a push chain is planned over an immutable
//!    board and applied only when every link accepts.
//!
//! 3. **Arena-owned graph**: the board owns every tile; neighbor links are
//!    `TileId`s, never references.
//!
//! ## Rules at a Glance
//!
//! - An empty tile always accepts.
//! - The attacking strength is the max of the incoming arrow and every
//!   arrow that already won on this line. It must be strictly greater than
//!   the defending arrow.
//! - A winning Bomb arrow destroys the defender; no room is needed.
//! - Any other win needs a neighbor to push into; a board edge blocks.
//! - After a card lands from the hand, its Push arrows shove their
//!   neighbors.
//!
//! ## Modules
//!
//! - `core`: directions, identifiers, configuration, errors
//! - `cards`: arrows, card definitions, placeables, registry
//! - `board`: tiles, push negotiation, placement area, effect resolution
//! - `events`: placement notifications for the presentation layer

pub mod board;
pub mod cards;
pub mod core;
pub mod events;

// Re-export commonly used types
pub use crate::core::{
    BoardConfig, BoardError, CardDataError, DeadTileRule, Direction, GridPos, PlaceableId, TileId,
};

pub use crate::cards::{
    Arrow, ArrowEffect, ArrowStrength, CardDefinition, CardId, CardRegistry, Location, Placeable,
};

pub use crate::board::{
    Board, PreviewRequest, PushPlan, PushStep, Tile, TilePreview, TileState, TileType,
};

pub use crate::events::{PlacementEvent, PlacementObserver};
