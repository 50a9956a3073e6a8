//! Post-placement effect resolution.
//!
//! When a card lands from the hand (not when it is shoved by another card),
//! each of its Push arrows tries to shove the neighbor it points at. The
//! shove is an ordinary push negotiation with no source card, contested at
//! the arrow's strength, and is confirmed on the spot. Directions resolve
//! clockwise from Up and independently of one another.

use smallvec::SmallVec;
use tracing::debug;

use super::grid::Board;
use crate::cards::{ArrowEffect, ArrowStrength};
use crate::core::{Direction, TileId};

impl Board {
    /// Confirm a root placement on `tile`, then resolve the settled card's
    /// Push arrows. Returns `false` if `tile` had no preview.
    pub(crate) fn confirm_and_resolve_effects(&mut self, tile: TileId) -> bool {
        if !self.confirm(tile) {
            return false;
        }
        self.resolve_push_effects(tile);
        true
    }

    /// Fire the Push arrows of the card on `tile`.
    ///
    /// Returns the directions whose shove displaced a card.
    pub(crate) fn resolve_push_effects(&mut self, tile: TileId) -> SmallVec<[Direction; 4]> {
        let mut fired = SmallVec::new();
        let Some(source) = self.tile(tile) else {
            return fired;
        };
        let Some(card) = source.occupant().and_then(|p| self.placeable(p)) else {
            return fired;
        };

        let triggers: SmallVec<[(Direction, ArrowStrength, TileId); 4]> = card
            .card()
            .arrows()
            .filter_map(|(dir, arrow)| match arrow.effect {
                ArrowEffect::Push => source.neighbor(dir).map(|n| (dir, arrow.strength, n)),
                ArrowEffect::None | ArrowEffect::Bomb => None,
            })
            .collect();

        for (dir, strength, neighbor) in triggers {
            let occupied = self.occupant(neighbor).is_some();
            // The neighbor is entered across its edge facing this tile.
            if self.try_push(neighbor, None, dir.opposite(), strength) {
                self.confirm(neighbor);
                if occupied {
                    debug!(tile = %tile, direction = ?dir, "Push effect displaced neighbor");
                    fired.push(dir);
                }
            }
        }
        fired
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::cards::{Arrow, CardDefinition, CardId};
    use crate::core::{BoardConfig, GridPos, PlaceableId};

    fn deal(board: &mut Board, arrows: [Arrow; 4]) -> PlaceableId {
        board.deal(Arc::new(CardDefinition::new(CardId::new(0), "Card").with_arrows(arrows)))
    }

    #[test]
    fn test_push_arrow_shoves_neighbor() {
        let mut board = Board::new(BoardConfig::new(3, 1)).unwrap();
        let neighbor = deal(&mut board, [Arrow::NONE; 4]);
        assert!(board.place(TileId(1), neighbor, None));

        let pusher = deal(
            &mut board,
            [Arrow::NONE, Arrow::push(ArrowStrength::Single), Arrow::NONE, Arrow::NONE],
        );
        assert!(board.request_preview(TileId(0), pusher, None));
        assert!(board.confirm_preview());

        assert_eq!(board.occupant(TileId(0)), Some(pusher));
        assert_eq!(board.occupant(TileId(1)), None);
        assert_eq!(board.occupant(TileId(2)), Some(neighbor));
    }

    #[test]
    fn test_push_arrow_loses_contest() {
        let mut board = Board::new(BoardConfig::new(3, 1)).unwrap();
        let neighbor = deal(&mut board, [Arrow::plain(ArrowStrength::Single); 4]);
        assert!(board.place(TileId(1), neighbor, None));

        let pusher = deal(
            &mut board,
            [Arrow::NONE, Arrow::push(ArrowStrength::Single), Arrow::NONE, Arrow::NONE],
        );
        assert!(board.place(TileId(0), pusher, None));

        assert_eq!(board.occupant(TileId(1)), Some(neighbor));
        assert_eq!(board.occupant(TileId(2)), None);
    }

    #[test]
    fn test_directions_resolve_independently() {
        // 3 wide, 4 tall; the pusher lands at (1, 1) with Push arrows Up and
        // Down. The Up neighbor sits against the top edge and cannot move;
        // the Down neighbor has room below it.
        let mut board = Board::new(BoardConfig::new(3, 4)).unwrap();
        let up = deal(&mut board, [Arrow::NONE; 4]);
        let down = deal(&mut board, [Arrow::NONE; 4]);
        let center = board.tile_at(GridPos::new(1, 1)).unwrap();
        let up_tile = board.tile_at(GridPos::new(1, 0)).unwrap();
        let down_tile = board.tile_at(GridPos::new(1, 2)).unwrap();
        let bottom_tile = board.tile_at(GridPos::new(1, 3)).unwrap();
        assert!(board.place(up_tile, up, None));
        assert!(board.place(down_tile, down, None));

        let pusher = deal(
            &mut board,
            [
                Arrow::push(ArrowStrength::Double),
                Arrow::NONE,
                Arrow::push(ArrowStrength::Double),
                Arrow::NONE,
            ],
        );
        assert!(board.request_preview(center, pusher, None));
        assert!(board.confirm(center));
        let fired = board.resolve_push_effects(center);

        assert_eq!(fired.as_slice(), &[Direction::Down]);
        assert_eq!(board.occupant(up_tile), Some(up));
        assert_eq!(board.occupant(down_tile), None);
        assert_eq!(board.occupant(bottom_tile), Some(down));
    }

    #[test]
    fn test_push_effect_reports_fired_directions() {
        let mut board = Board::new(BoardConfig::new(1, 3)).unwrap();
        let below = deal(&mut board, [Arrow::NONE; 4]);
        assert!(board.place(TileId(1), below, None));

        let pusher = deal(
            &mut board,
            [
                Arrow::push(ArrowStrength::Single),
                Arrow::NONE,
                Arrow::push(ArrowStrength::Single),
                Arrow::NONE,
            ],
        );
        assert!(board.request_preview(TileId(0), pusher, None));
        assert!(board.confirm(TileId(0)));
        let fired = board.resolve_push_effects(TileId(0));

        assert_eq!(fired.as_slice(), &[Direction::Down]);
        assert_eq!(board.occupant(TileId(2)), Some(below));
    }

    #[test]
    fn test_confirm_and_resolve_without_preview() {
        let mut board = Board::new(BoardConfig::new(1, 1)).unwrap();
        assert!(!board.confirm_and_resolve_effects(TileId(0)));
    }
}
