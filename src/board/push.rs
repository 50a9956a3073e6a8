//! Chain-push negotiation.
//!
//! Placing a card on an occupied tile starts a contest along one line of
//! tiles. At every link the incoming card's arrow facing the push (or the
//! strongest arrow seen so far on this line, whichever is higher) must beat
//! the defender's arrow on the entry edge. A plain win shoves the defender
//! one tile further along the line, where it becomes the incoming card of
//! the next contest. A Bomb win destroys the defender and ends the chain. An
//! empty tile always accepts and ends the chain.
//!
//! ## Plan, then apply
//!
//! [`Board::plan_push`] walks the chain over `&self` and returns the proposed
//! diff as a [`PushPlan`]. Only an accepted plan is written to the tiles as
//! previews, so a rejected negotiation never touches board state at any
//! depth.
//!
//! ## Commit order
//!
//! [`Board::confirm`] follows `push_target` links to the far end of the chain
//! and settles tiles from there inward, so a displaced card is always placed
//! on its new tile before the tile it left is overwritten.

use smallvec::SmallVec;
use tracing::{debug, trace, warn};

use super::grid::Board;
use super::tile::TilePreview;
use crate::cards::{ArrowEffect, ArrowStrength};
use crate::core::{DeadTileRule, Direction, PlaceableId, TileId};
use crate::events::PlacementEvent;

/// One tile's part in an accepted push chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PushStep {
    /// The tile that changes.
    pub tile: TileId,
    /// Card that will occupy the tile. `None` clears it.
    pub incoming: Option<PlaceableId>,
    /// Neighbor the current occupant is shoved into.
    pub push_target: Option<TileId>,
    /// Current occupant destroyed by a Bomb arrow.
    pub destroys: Option<PlaceableId>,
}

impl From<PushStep> for TilePreview {
    fn from(step: PushStep) -> Self {
        TilePreview {
            occupant: step.incoming,
            push_target: step.push_target,
            destroys: step.destroys,
        }
    }
}

/// An accepted push negotiation, root tile first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PushPlan {
    steps: SmallVec<[PushStep; 8]>,
}

impl PushPlan {
    pub(crate) fn single(step: PushStep) -> Self {
        let mut steps = SmallVec::new();
        steps.push(step);
        Self { steps }
    }

    /// Steps from the root tile to the far end of the chain.
    #[must_use]
    pub fn steps(&self) -> &[PushStep] {
        &self.steps
    }

    /// Tiles touched by the plan, root first.
    pub fn tiles(&self) -> impl Iterator<Item = TileId> + '_ {
        self.steps.iter().map(|s| s.tile)
    }

    #[must_use]
    pub fn root(&self) -> Option<TileId> {
        self.steps.first().map(|s| s.tile)
    }

    /// Cards this plan destroys on commit.
    pub fn destroyed(&self) -> impl Iterator<Item = PlaceableId> + '_ {
        self.steps.iter().filter_map(|s| s.destroys)
    }

    /// Number of tiles in the chain.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl Board {
    /// Negotiate a push without changing anything.
    ///
    /// `incoming` is the card entering `tile` across `entry_edge`; `None`
    /// stands for a push with no source card (a Push arrow effect), whose
    /// contest strength is `strongest_so_far` alone.
    ///
    /// Returns the proposed diff if every link of the chain accepts.
    #[must_use]
    pub fn plan_push(
        &self,
        tile: TileId,
        incoming: Option<PlaceableId>,
        entry_edge: Direction,
        strongest_so_far: ArrowStrength,
    ) -> Option<PushPlan> {
        let mut steps = SmallVec::new();
        if self.plan_link(tile, incoming, entry_edge, strongest_so_far, &mut steps) {
            Some(PushPlan { steps })
        } else {
            None
        }
    }

    fn plan_link(
        &self,
        tile_id: TileId,
        incoming: Option<PlaceableId>,
        entry_edge: Direction,
        strongest_so_far: ArrowStrength,
        steps: &mut SmallVec<[PushStep; 8]>,
    ) -> bool {
        if steps.len() >= self.max_chain_depth {
            warn!(tile = %tile_id, depth = steps.len(), "Push chain exceeds depth cap");
            return false;
        }
        if steps.iter().any(|s| s.tile == tile_id) {
            warn!(tile = %tile_id, "Push chain revisits a tile; adjacency has a cycle");
            return false;
        }

        let Some(tile) = self.tile(tile_id) else {
            warn!(tile = %tile_id, "Unknown tile referenced");
            return false;
        };
        if tile.is_previewing() {
            debug!(tile = %tile_id, "Tile already has an outstanding preview");
            return false;
        }
        if tile.is_dead()
            && incoming.is_some()
            && self.config().dead_tile_rule == DeadTileRule::RejectAll
        {
            trace!(tile = %tile_id, "Dead tile refuses pushed card");
            return false;
        }

        let Some(defender) = tile.occupant() else {
            steps.push(PushStep {
                tile: tile_id,
                incoming,
                push_target: None,
                destroys: None,
            });
            return true;
        };

        let pushing = entry_edge.opposite();
        let incoming_arrow = match incoming {
            Some(card) => match self.arrow_of(card, pushing) {
                Some(arrow) => Some(arrow),
                None => return false,
            },
            None => None,
        };
        let contest = incoming_arrow.map_or(strongest_so_far, |a| a.strength.max(strongest_so_far));
        let Some(defending) = self.arrow_of(defender, entry_edge) else {
            return false;
        };

        trace!(
            tile = %tile_id,
            edge = ?entry_edge,
            attack = ?contest,
            defend = ?defending.strength,
            "Contest"
        );
        if !contest.beats(defending.strength) {
            return false;
        }

        match incoming_arrow.map(|a| a.effect) {
            Some(ArrowEffect::Bomb) => {
                steps.push(PushStep {
                    tile: tile_id,
                    incoming,
                    push_target: None,
                    destroys: Some(defender),
                });
                true
            }
            Some(ArrowEffect::None | ArrowEffect::Push) | None => {
                let Some(next) = tile.neighbor(pushing) else {
                    trace!(tile = %tile_id, "No room to push into");
                    return false;
                };
                steps.push(PushStep {
                    tile: tile_id,
                    incoming,
                    push_target: Some(next),
                    destroys: None,
                });
                self.plan_link(next, Some(defender), entry_edge, contest, steps)
            }
        }
    }

    /// Negotiate a push and, if every link accepts, record it as a preview
    /// on each tile of the chain.
    ///
    /// Returns `false` with no state change on rejection.
    pub(crate) fn try_push(
        &mut self,
        tile: TileId,
        incoming: Option<PlaceableId>,
        entry_edge: Direction,
        strongest_so_far: ArrowStrength,
    ) -> bool {
        match self.plan_push(tile, incoming, entry_edge, strongest_so_far) {
            Some(plan) => {
                self.apply_plan(&plan);
                true
            }
            None => false,
        }
    }

    /// Write an accepted plan to the tiles as previews.
    pub(crate) fn apply_plan(&mut self, plan: &PushPlan) {
        for (depth, step) in plan.steps().iter().enumerate() {
            let Some(tile) = self.tile_mut(step.tile) else {
                continue;
            };
            tile.begin_preview((*step).into());
            let position = tile.position();

            // The root card is still under the pointer; only displaced cards
            // are shown at their tentative tile.
            if depth > 0 {
                if let Some(placeable) = step.incoming {
                    self.emit(PlacementEvent::Previewed {
                        placeable,
                        tile: step.tile,
                        position,
                    });
                }
            }
        }
        debug!(root = ?plan.root(), length = plan.len(), "Preview accepted");
    }

    /// Commit the preview on `tile` and, first, every tile down its push
    /// chain. Returns `false` (and does nothing) if `tile` is not previewing.
    pub(crate) fn confirm(&mut self, tile: TileId) -> bool {
        let Some(preview) = self.tile_mut(tile).and_then(|t| t.take_preview()) else {
            return false;
        };
        self.release_outstanding(tile);

        if let Some(next) = preview.push_target {
            self.confirm(next);
        }

        if let Some(victim) = preview.destroys {
            if let Some(p) = self.placeable_mut(victim) {
                p.destroy();
            }
            debug!(tile = %tile, placeable = %victim, "Card destroyed by bomb");
            self.emit(PlacementEvent::Destroyed {
                placeable: victim,
                tile,
            });
        }

        let Some(t) = self.tile_mut(tile) else {
            return false;
        };
        t.set_occupant(preview.occupant);
        let position = t.position();

        if let Some(placeable) = preview.occupant {
            if let Some(p) = self.placeable_mut(placeable) {
                p.settle_on(tile);
            }
            self.emit(PlacementEvent::PlacedAt {
                placeable,
                tile,
                position,
            });
        }
        debug!(tile = %tile, occupant = ?preview.occupant, "Confirmed");
        true
    }

    /// Discard the preview on `tile` and every tile down its push chain.
    /// Committed occupants are untouched. No-op if `tile` is not previewing.
    pub(crate) fn cancel(&mut self, tile: TileId) {
        let Some(preview) = self.tile_mut(tile).and_then(|t| t.take_preview()) else {
            return;
        };
        self.release_outstanding(tile);

        if let Some(next) = preview.push_target {
            self.cancel(next);
        }

        if let Some(placeable) = preview.occupant {
            self.emit(PlacementEvent::ReturnedToOrigin { placeable });
        }
        debug!(tile = %tile, "Cancelled");
    }

    /// Forget the outstanding request once its root tile is settled.
    fn release_outstanding(&mut self, tile: TileId) {
        if self.outstanding.map(|r| r.tile) == Some(tile) {
            self.outstanding = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::cards::{Arrow, CardDefinition, CardId, Location};
    use crate::core::{BoardConfig, GridPos};

    /// A card with the same arrow on every side.
    fn uniform(board: &mut Board, arrow: Arrow) -> PlaceableId {
        board.deal(Arc::new(CardDefinition::new(CardId::new(0), "Uniform").with_arrows([arrow; 4])))
    }

    /// Commit `card` onto `tile` directly, bypassing negotiation.
    fn seat(board: &mut Board, tile: TileId, card: PlaceableId) {
        board.apply_plan(&PushPlan::single(PushStep {
            tile,
            incoming: Some(card),
            push_target: None,
            destroys: None,
        }));
        assert!(board.confirm(tile));
        board.drain_events();
    }

    fn row(width: u32) -> Board {
        Board::new(BoardConfig::new(width, 1)).unwrap()
    }

    #[test]
    fn test_empty_tile_accepts() {
        let mut board = row(1);
        let card = uniform(&mut board, Arrow::NONE);

        assert!(board.try_push(TileId(0), Some(card), Direction::Left, ArrowStrength::None));
        let tile = board.tile(TileId(0)).unwrap();
        assert_eq!(tile.preview_occupant(), Some(card));
        assert_eq!(tile.push_target(), None);
        assert_eq!(tile.occupant(), None);
    }

    #[test]
    fn test_push_into_neighbor() {
        let mut board = row(2);
        let defender = uniform(&mut board, Arrow::plain(ArrowStrength::Single));
        let attacker = uniform(&mut board, Arrow::plain(ArrowStrength::Double));
        seat(&mut board, TileId(0), defender);

        // Entering tile 0 across its Left edge pushes Right, into tile 1.
        let plan = board
            .plan_push(TileId(0), Some(attacker), Direction::Left, ArrowStrength::None)
            .unwrap();
        assert_eq!(plan.tiles().collect::<Vec<_>>(), vec![TileId(0), TileId(1)]);
        assert_eq!(plan.steps()[1].incoming, Some(defender));

        board.apply_plan(&plan);
        assert!(board.confirm(TileId(0)));
        assert_eq!(board.occupant(TileId(0)), Some(attacker));
        assert_eq!(board.occupant(TileId(1)), Some(defender));
        assert_eq!(board.placeable(defender).unwrap().location(), Location::OnTile(TileId(1)));
    }

    #[test]
    fn test_tie_holds() {
        let mut board = row(2);
        let defender = uniform(&mut board, Arrow::plain(ArrowStrength::Single));
        let attacker = uniform(&mut board, Arrow::plain(ArrowStrength::Single));
        seat(&mut board, TileId(0), defender);

        assert!(!board.try_push(TileId(0), Some(attacker), Direction::Left, ArrowStrength::None));
        assert!(!board.tile(TileId(0)).unwrap().is_previewing());
    }

    #[test]
    fn test_bomb_at_edge() {
        let mut board = row(1);
        let defender = uniform(&mut board, Arrow::plain(ArrowStrength::Single));
        let bomber = uniform(&mut board, Arrow::bomb(ArrowStrength::Double));
        seat(&mut board, TileId(0), defender);

        let plan = board
            .plan_push(TileId(0), Some(bomber), Direction::Left, ArrowStrength::None)
            .unwrap();
        assert_eq!(plan.destroyed().collect::<Vec<_>>(), vec![defender]);

        board.apply_plan(&plan);
        // Destruction waits for commit.
        assert!(!board.placeable(defender).unwrap().is_destroyed());

        assert!(board.confirm(TileId(0)));
        assert!(board.placeable(defender).unwrap().is_destroyed());
        assert_eq!(board.occupant(TileId(0)), Some(bomber));
    }

    #[test]
    fn test_sourceless_push_clears_tile() {
        let mut board = row(2);
        let defender = uniform(&mut board, Arrow::plain(ArrowStrength::Single));
        seat(&mut board, TileId(0), defender);

        assert!(board.try_push(TileId(0), None, Direction::Left, ArrowStrength::Double));
        assert!(board.confirm(TileId(0)));
        assert_eq!(board.occupant(TileId(0)), None);
        assert_eq!(board.occupant(TileId(1)), Some(defender));
    }

    #[test]
    fn test_cycle_in_adjacency_rejected() {
        // Two tiles linked to each other both ways: Right of 1 is 0 again.
        let mut board = Board::with_adjacency(BoardConfig::new(2, 1), |tile, dir| match dir {
            Direction::Right | Direction::Left => Some(TileId(1 - tile.0)),
            _ => None,
        })
        .unwrap();
        let a = uniform(&mut board, Arrow::NONE);
        let b = uniform(&mut board, Arrow::NONE);
        seat(&mut board, TileId(0), a);
        seat(&mut board, TileId(1), b);

        assert!(board
            .plan_push(TileId(0), None, Direction::Left, ArrowStrength::Double)
            .is_none());
    }

    #[test]
    fn test_depth_cap() {
        let mut board = Board::new(BoardConfig::new(3, 1).with_max_chain_depth(2)).unwrap();
        let a = uniform(&mut board, Arrow::NONE);
        seat(&mut board, TileId(0), a);
        let b = uniform(&mut board, Arrow::NONE);
        seat(&mut board, TileId(1), b);

        // Needs three tiles: 0 -> 1 -> 2.
        assert!(board
            .plan_push(TileId(0), None, Direction::Left, ArrowStrength::Single)
            .is_none());
        // Two tiles fits.
        assert!(board
            .plan_push(TileId(1), None, Direction::Left, ArrowStrength::Single)
            .is_some());
    }

    #[test]
    fn test_dead_tile_reject_all() {
        let config = BoardConfig::new(2, 1)
            .with_dead_tile(GridPos::new(1, 0))
            .with_dead_tile_rule(DeadTileRule::RejectAll);
        let mut board = Board::new(config).unwrap();
        let defender = uniform(&mut board, Arrow::NONE);
        seat(&mut board, TileId(0), defender);

        assert!(board
            .plan_push(TileId(0), None, Direction::Left, ArrowStrength::Single)
            .is_none());
    }

    #[test]
    fn test_dead_tile_root_only_accepts_pushed() {
        let config = BoardConfig::new(2, 1).with_dead_tile(GridPos::new(1, 0));
        let mut board = Board::new(config).unwrap();
        let defender = uniform(&mut board, Arrow::NONE);
        seat(&mut board, TileId(0), defender);

        assert!(board.try_push(TileId(0), None, Direction::Left, ArrowStrength::Single));
        assert!(board.confirm(TileId(0)));
        assert_eq!(board.occupant(TileId(1)), Some(defender));
    }

    #[test]
    fn test_confirm_and_cancel_idle_are_noops() {
        let mut board = row(2);
        let before = board.snapshot();

        assert!(!board.confirm(TileId(0)));
        board.cancel(TileId(1));
        assert!(!board.confirm(TileId(99)));

        assert_eq!(board.tiles().collect::<Vec<_>>(), before.tiles().collect::<Vec<_>>());
        assert!(board.drain_events().is_empty());
    }

    #[test]
    fn test_cancel_restores_idle() {
        let mut board = row(2);
        let defender = uniform(&mut board, Arrow::NONE);
        let attacker = uniform(&mut board, Arrow::plain(ArrowStrength::Single));
        seat(&mut board, TileId(0), defender);

        assert!(board.try_push(TileId(0), Some(attacker), Direction::Left, ArrowStrength::None));
        board.cancel(TileId(0));

        assert!(!board.tile(TileId(0)).unwrap().is_previewing());
        assert!(!board.tile(TileId(1)).unwrap().is_previewing());
        assert_eq!(board.occupant(TileId(0)), Some(defender));
        assert_eq!(board.occupant(TileId(1)), None);
    }

    #[test]
    fn test_previewing_tile_refuses_second_negotiation() {
        let mut board = row(1);
        let a = uniform(&mut board, Arrow::NONE);
        let b = uniform(&mut board, Arrow::NONE);

        assert!(board.try_push(TileId(0), Some(a), Direction::Left, ArrowStrength::None));
        assert!(!board.try_push(TileId(0), Some(b), Direction::Left, ArrowStrength::None));
        assert_eq!(board.tile(TileId(0)).unwrap().preview_occupant(), Some(a));
    }
}
