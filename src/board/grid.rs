//! The board: tile arena, adjacency, placeables, and event queue.
//!
//! `Board` exclusively owns every tile and every placeable. Tiles reference
//! their neighbors by [`TileId`] only, so the 2D mesh of links never becomes
//! an ownership cycle.
//!
//! Tiles, placeables, and queued events live in `im` persistent vectors:
//! cloning a board is O(1), which makes [`Board::snapshot`] and hypothetical
//! evaluation ([`Board::legal_previews`]) cheap.

use std::sync::Arc;

use tracing::{debug, warn};

use super::placement::PreviewRequest;
use super::tile::{Tile, TileType};
use crate::cards::{Arrow, CardDefinition, Placeable};
use crate::core::{BoardConfig, BoardError, Direction, GridPos, PlaceableId, TileId};
use crate::events::{PlacementEvent, PlacementObserver};

/// The game board.
///
/// ## Example
///
/// ```
/// use std::sync::Arc;
/// use tile_push::{Board, BoardConfig, CardDefinition, CardId, Direction, GridPos};
///
/// let mut board = Board::new(BoardConfig::new(3, 3)).unwrap();
/// let card = board.deal(Arc::new(CardDefinition::new(CardId::new(1), "Blank")));
/// let center = board.tile_at(GridPos::new(1, 1)).unwrap();
///
/// assert!(board.request_preview(center, card, Some(Direction::Left)));
/// assert!(board.confirm_preview());
/// assert_eq!(board.occupant(center), Some(card));
/// ```
#[derive(Clone, Debug)]
pub struct Board {
    config: BoardConfig,

    /// Tile arena indexed by `TileId`.
    tiles: im::Vector<Tile>,

    /// Row-major grid cells -> tile. `None` for holes.
    cells: Arc<[Option<TileId>]>,

    /// Placeables indexed by `PlaceableId`. Ids are never reused.
    placeables: im::Vector<Placeable>,

    events: im::Vector<PlacementEvent>,

    pub(crate) outstanding: Option<PreviewRequest>,

    pub(crate) max_chain_depth: usize,
}

impl Board {
    /// Build a board whose adjacency follows the grid geometry.
    pub fn new(config: BoardConfig) -> Result<Self, BoardError> {
        config.validate()?;

        let mut cells = Vec::with_capacity(config.width as usize * config.height as usize);
        let mut tiles = im::Vector::new();
        for row in 0..config.height {
            for col in 0..config.width {
                let pos = GridPos::new(col, row);
                if config.is_hole(pos) {
                    cells.push(None);
                    continue;
                }
                let id = TileId::new(tiles.len() as u32);
                let tile_type = if config.is_dead(pos) {
                    TileType::Dead
                } else {
                    TileType::Normal
                };
                tiles.push_back(Tile::new(id, pos, tile_type));
                cells.push(Some(id));
            }
        }

        let mut board = Self {
            max_chain_depth: config.max_chain_depth.unwrap_or(tiles.len()).max(1),
            config,
            tiles,
            cells: cells.into(),
            placeables: im::Vector::new(),
            events: im::Vector::new(),
            outstanding: None,
        };

        for index in 0..board.tiles.len() {
            let pos = board.tiles[index].position();
            for dir in Direction::ALL {
                let neighbor = pos
                    .step(dir, board.config.width, board.config.height)
                    .and_then(|p| board.cell(p));
                if let Some(tile) = board.tiles.get_mut(index) {
                    tile.set_neighbor(dir, neighbor);
                }
            }
        }

        debug!(
            width = board.config.width,
            height = board.config.height,
            tiles = board.tiles.len(),
            "Built board"
        );
        Ok(board)
    }

    /// Build a board with tiles laid out by `config` but links supplied by
    /// `adjacency`. The function is evaluated once per tile and direction.
    pub fn with_adjacency<F>(config: BoardConfig, adjacency: F) -> Result<Self, BoardError>
    where
        F: Fn(TileId, Direction) -> Option<TileId>,
    {
        let mut board = Self::new(config)?;
        let tile_count = board.tiles.len();

        for index in 0..tile_count {
            let tile = TileId::new(index as u32);
            for dir in Direction::ALL {
                let neighbor = adjacency(tile, dir);
                if let Some(target) = neighbor {
                    if target.index() >= tile_count {
                        return Err(BoardError::AdjacencyOutOfRange { tile, dir, target });
                    }
                }
                if let Some(t) = board.tiles.get_mut(index) {
                    t.set_neighbor(dir, neighbor);
                }
            }
        }

        Ok(board)
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    #[must_use]
    pub fn tile(&self, id: TileId) -> Option<&Tile> {
        self.tiles.get(id.index())
    }

    /// The tile at a grid position, if the position holds one.
    #[must_use]
    pub fn tile_at(&self, pos: GridPos) -> Option<TileId> {
        if pos.col >= self.config.width || pos.row >= self.config.height {
            return None;
        }
        self.cell(pos)
    }

    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    /// Committed occupant of a tile.
    #[must_use]
    pub fn occupant(&self, tile: TileId) -> Option<PlaceableId> {
        self.tile(tile).and_then(Tile::occupant)
    }

    #[must_use]
    pub fn placeable(&self, id: PlaceableId) -> Option<&Placeable> {
        self.placeables.get(id.raw() as usize)
    }

    pub fn placeables(&self) -> impl Iterator<Item = &Placeable> {
        self.placeables.iter()
    }

    /// Longest push chain a single negotiation may visit.
    #[must_use]
    pub fn max_chain_depth(&self) -> usize {
        self.max_chain_depth
    }

    /// An independent copy of the current board. O(1).
    #[must_use]
    pub fn snapshot(&self) -> Board {
        self.clone()
    }

    // === Placeables ===

    /// Put a new card into play, in the hand.
    pub fn deal(&mut self, card: Arc<CardDefinition>) -> PlaceableId {
        let id = PlaceableId::new(self.placeables.len() as u32);
        debug!(placeable = %id, card = %card.id, "Dealt card");
        self.placeables.push_back(Placeable::new(id, card));
        id
    }

    // === Events ===

    /// Events queued since the last drain, oldest first.
    pub fn pending_events(&self) -> impl Iterator<Item = &PlacementEvent> {
        self.events.iter()
    }

    /// Take all queued events.
    pub fn drain_events(&mut self) -> Vec<PlacementEvent> {
        std::mem::take(&mut self.events).into_iter().collect()
    }

    /// Deliver and clear all queued events.
    pub fn dispatch_events<O: PlacementObserver + ?Sized>(&mut self, observer: &mut O) {
        for event in self.drain_events() {
            observer.notify(&event);
        }
    }

    // === Crate internals ===

    fn cell(&self, pos: GridPos) -> Option<TileId> {
        let index = pos.row as usize * self.config.width as usize + pos.col as usize;
        self.cells.get(index).copied().flatten()
    }

    pub(crate) fn tile_mut(&mut self, id: TileId) -> Option<&mut Tile> {
        self.tiles.get_mut(id.index())
    }

    pub(crate) fn placeable_mut(&mut self, id: PlaceableId) -> Option<&mut Placeable> {
        self.placeables.get_mut(id.raw() as usize)
    }

    /// The arrow on side `dir` of a placeable's card.
    pub(crate) fn arrow_of(&self, id: PlaceableId, dir: Direction) -> Option<Arrow> {
        let arrow = self.placeable(id).map(|p| p.arrow_at(dir));
        if arrow.is_none() {
            warn!(placeable = %id, "Unknown placeable referenced");
        }
        arrow
    }

    pub(crate) fn emit(&mut self, event: PlacementEvent) {
        self.events.push_back(event);
    }
}
