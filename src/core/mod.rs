//! Core engine types: directions, identifiers, configuration, errors.
//!
//! These are the building blocks shared by the card model and the board.

pub mod config;
pub mod direction;
pub mod entity;
pub mod error;

pub use config::{BoardConfig, DeadTileRule};
pub use direction::Direction;
pub use entity::{GridPos, PlaceableId, TileId};
pub use error::{BoardError, CardDataError};
