//! Placement area: the external preview/confirm/cancel contract.
//!
//! The input layer translates a pointer gesture into "card X over tile T,
//! entering across edge E" (or over the tile center, with no edge) and calls
//! [`Board::request_preview`]. When the gesture ends it calls
//! [`Board::confirm_preview`] or [`Board::cancel_preview`].
//!
//! At most one preview chain is outstanding per board: a new request cancels
//! the previous one first. Repeating the request that is already outstanding
//! changes nothing.

use rustc_hash::FxHashSet;
use tracing::{debug, warn};

use super::grid::Board;
use super::push::{PushPlan, PushStep};
use super::tile::Tile;
use crate::cards::{ArrowStrength, Location};
use crate::core::{Direction, PlaceableId, TileId};

/// A preview the board is currently holding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PreviewRequest {
    pub tile: TileId,
    pub placeable: PlaceableId,
    /// Edge the card enters across. `None` for a center placement.
    pub edge: Option<Direction>,
}

impl Board {
    /// Root-placement entry point: refuse Dead tiles and cards that are not
    /// in the hand, otherwise negotiate the push.
    pub(crate) fn request_placement(&mut self, tile: TileId, placeable: PlaceableId, entry_edge: Direction) -> bool {
        if !self.can_place_root(tile, placeable) {
            return false;
        }
        self.try_push(tile, Some(placeable), entry_edge, ArrowStrength::None)
    }

    /// Preview placing `placeable` on `tile`.
    ///
    /// With an edge, an occupied tile is contested along the line the card
    /// travels. Without one, only an empty tile accepts.
    pub fn request_preview(&mut self, tile: TileId, placeable: PlaceableId, edge: Option<Direction>) -> bool {
        let request = PreviewRequest {
            tile,
            placeable,
            edge,
        };
        if self.outstanding == Some(request) && self.tile(tile).is_some_and(Tile::is_previewing) {
            return true;
        }
        self.cancel_preview();

        let accepted = match edge {
            Some(edge) => self.request_placement(tile, placeable, edge),
            None => self.request_center_placement(tile, placeable),
        };

        if accepted {
            self.outstanding = Some(request);
        }
        debug!(tile = %tile, placeable = %placeable, edge = ?edge, accepted, "Preview requested");
        accepted
    }

    /// Commit the outstanding preview and resolve the placed card's Push
    /// arrows. Returns `false` if no preview was outstanding.
    pub fn confirm_preview(&mut self) -> bool {
        let Some(request) = self.outstanding.take() else {
            return false;
        };
        self.confirm_and_resolve_effects(request.tile)
    }

    /// Drop the outstanding preview, if any, along with any preview chain
    /// left on the board without a request.
    pub fn cancel_preview(&mut self) {
        if let Some(request) = self.outstanding.take() {
            self.cancel(request.tile);
        }
        for root in self.preview_roots() {
            warn!(tile = %root, "Cancelling preview chain with no outstanding request");
            self.cancel(root);
        }
    }

    /// Preview and immediately confirm.
    pub fn place(&mut self, tile: TileId, placeable: PlaceableId, edge: Option<Direction>) -> bool {
        self.request_preview(tile, placeable, edge) && self.confirm_preview()
    }

    #[must_use]
    pub fn outstanding_preview(&self) -> Option<PreviewRequest> {
        self.outstanding
    }

    /// Tiles of the outstanding preview chain, root first.
    #[must_use]
    pub fn preview_chain(&self) -> Vec<TileId> {
        let mut chain = Vec::new();
        let mut next = self.outstanding.map(|r| r.tile);
        while let Some(tile) = next {
            if chain.contains(&tile) || chain.len() > self.tile_count() {
                break;
            }
            chain.push(tile);
            next = self.tile(tile).and_then(|t| t.push_target());
        }
        chain
    }

    /// Every `(tile, edge)` whose preview would be accepted for `placeable`,
    /// ignoring any preview currently outstanding.
    #[must_use]
    pub fn legal_previews(&self, placeable: PlaceableId) -> Vec<(TileId, Option<Direction>)> {
        let mut scratch = self.snapshot();
        scratch.cancel_preview();

        let mut legal = Vec::new();
        for tile in scratch.tiles() {
            let id = tile.id();
            if !scratch.can_place_root(id, placeable) {
                continue;
            }
            if tile.is_empty() {
                legal.push((id, None));
            }
            for edge in Direction::ALL {
                if scratch
                    .plan_push(id, Some(placeable), edge, ArrowStrength::None)
                    .is_some()
                {
                    legal.push((id, Some(edge)));
                }
            }
        }
        legal
    }

    /// Previewing tiles that no other previewing tile pushes into.
    fn preview_roots(&self) -> Vec<TileId> {
        let targets: FxHashSet<TileId> = self.tiles().filter_map(Tile::push_target).collect();
        self.tiles()
            .filter(|t| t.is_previewing() && !targets.contains(&t.id()))
            .map(Tile::id)
            .collect()
    }

    fn request_center_placement(&mut self, tile: TileId, placeable: PlaceableId) -> bool {
        if !self.can_place_root(tile, placeable) {
            return false;
        }
        match self.tile(tile) {
            Some(t) if t.is_empty() && !t.is_previewing() => {}
            _ => return false,
        }
        self.apply_plan(&PushPlan::single(PushStep {
            tile,
            incoming: Some(placeable),
            push_target: None,
            destroys: None,
        }));
        true
    }

    /// Checks that only apply to the first tile of a placement.
    fn can_place_root(&self, tile: TileId, placeable: PlaceableId) -> bool {
        let Some(t) = self.tile(tile) else {
            warn!(tile = %tile, "Unknown tile referenced");
            return false;
        };
        if t.is_dead() {
            return false;
        }
        match self.placeable(placeable).map(|p| p.location()) {
            Some(Location::Hand) => true,
            Some(location) => {
                debug!(placeable = %placeable, ?location, "Card is not in hand");
                false
            }
            None => {
                warn!(placeable = %placeable, "Unknown placeable referenced");
                false
            }
        }
    }
}
