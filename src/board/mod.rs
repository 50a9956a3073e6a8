//! The board and its placement rules.
//!
//! - `Tile`: graph node with occupant, neighbor links, and preview state
//! - `Board`: tile arena, placeables, event queue
//! - Push negotiation: `plan_push`, `try_push`, `confirm`, `cancel`
//! - Placement area: `request_preview`, `confirm_preview`, `cancel_preview`
//! - Effect resolution: Push arrows fired after a card lands

mod effects;
mod grid;
mod placement;
mod push;
mod tile;

pub use grid::Board;
pub use placement::PreviewRequest;
pub use push::{PushPlan, PushStep};
pub use tile::{Tile, TilePreview, TileState, TileType};
