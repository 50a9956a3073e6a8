//! Board configuration.
//!
//! Games describe their board at startup with a `BoardConfig`:
//! - Grid dimensions
//! - Dead tiles (cannot be the landing tile of a placement)
//! - Holes (grid cells without a tile at all)
//! - How Dead tiles treat pushed cards
//! - A cap on push chain length
//!
//! The engine derives the tile graph from this once; it never changes after.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::error::BoardError;
use super::GridPos;

/// How Dead tiles take part in push chains.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeadTileRule {
    /// A Dead tile refuses only the root of a placement. Cards pushed
    /// mid-chain contest it like any other tile and may come to rest on it.
    #[default]
    RootOnly,
    /// A Dead tile refuses every incoming card, root or pushed. Its
    /// occupant (if any) can still be pushed out by a neighbor's chain.
    RejectAll,
}

/// Complete board configuration.
///
/// ## Example
///
/// ```
/// use tile_push::{BoardConfig, DeadTileRule, GridPos};
///
/// let config = BoardConfig::new(4, 4)
///     .with_dead_tile(GridPos::new(0, 0))
///     .with_hole(GridPos::new(3, 3))
///     .with_dead_tile_rule(DeadTileRule::RejectAll);
///
/// assert!(config.validate().is_ok());
/// assert!(config.is_dead(GridPos::new(0, 0)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Number of columns.
    pub width: u32,

    /// Number of rows.
    pub height: u32,

    /// Tiles of type Dead.
    #[serde(default)]
    pub dead_tiles: Vec<GridPos>,

    /// Grid cells that have no tile. Neighbors see them as board edges.
    #[serde(default)]
    pub holes: Vec<GridPos>,

    /// Whether Dead tiles also refuse pushed cards.
    #[serde(default)]
    pub dead_tile_rule: DeadTileRule,

    /// Longest push chain (in tiles) a single negotiation may visit.
    /// `None` means the tile count, which a straight chain can never exceed.
    #[serde(default)]
    pub max_chain_depth: Option<usize>,
}

impl BoardConfig {
    /// Create a configuration for a `width` x `height` grid of Normal tiles.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            dead_tiles: Vec::new(),
            holes: Vec::new(),
            dead_tile_rule: DeadTileRule::default(),
            max_chain_depth: None,
        }
    }

    /// Parse a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, BoardError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Mark a tile as Dead.
    #[must_use]
    pub fn with_dead_tile(mut self, pos: GridPos) -> Self {
        self.dead_tiles.push(pos);
        self
    }

    /// Remove the tile at `pos` from the grid.
    #[must_use]
    pub fn with_hole(mut self, pos: GridPos) -> Self {
        self.holes.push(pos);
        self
    }

    /// Set the Dead tile rule.
    #[must_use]
    pub fn with_dead_tile_rule(mut self, rule: DeadTileRule) -> Self {
        self.dead_tile_rule = rule;
        self
    }

    /// Cap the push chain length.
    #[must_use]
    pub fn with_max_chain_depth(mut self, depth: usize) -> Self {
        self.max_chain_depth = Some(depth);
        self
    }

    /// Check whether `pos` is marked Dead.
    #[must_use]
    pub fn is_dead(&self, pos: GridPos) -> bool {
        self.dead_tiles.contains(&pos)
    }

    /// Check whether `pos` is a hole.
    #[must_use]
    pub fn is_hole(&self, pos: GridPos) -> bool {
        self.holes.contains(&pos)
    }

    /// Check dimensions and that every listed position is on the grid.
    pub fn validate(&self) -> Result<(), BoardError> {
        if self.width == 0 || self.height == 0 {
            return Err(BoardError::EmptyBoard {
                width: self.width,
                height: self.height,
            });
        }

        for &pos in self.dead_tiles.iter().chain(&self.holes) {
            if pos.col >= self.width || pos.row >= self.height {
                return Err(BoardError::PositionOutOfBounds {
                    pos,
                    width: self.width,
                    height: self.height,
                });
            }
        }

        if let Some(&pos) = self.dead_tiles.iter().find(|p| self.holes.contains(p)) {
            return Err(BoardError::DeadHole(pos));
        }

        let tile_count = self.width as usize * self.height as usize;
        let distinct_holes: FxHashSet<GridPos> = self.holes.iter().copied().collect();
        if distinct_holes.len() >= tile_count {
            return Err(BoardError::EmptyBoard {
                width: self.width,
                height: self.height,
            });
        }

        Ok(())
    }
}
