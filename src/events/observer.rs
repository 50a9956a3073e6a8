//! Observer trait for placement notifications.
//!
//! Collaborators implement only the callbacks they care about; the rest
//! default to no-ops. `notify` routes an event to the matching callback.

use super::PlacementEvent;
use crate::core::{GridPos, PlaceableId, TileId};

/// Receives placement notifications from the board.
///
/// ## Example
///
/// ```
/// use tile_push::{GridPos, PlaceableId, PlacementEvent, PlacementObserver, TileId};
///
/// #[derive(Default)]
/// struct Landed(Vec<PlaceableId>);
///
/// impl PlacementObserver for Landed {
///     fn on_placed_at(&mut self, placeable: PlaceableId, _tile: TileId, _pos: GridPos) {
///         self.0.push(placeable);
///     }
/// }
///
/// let mut landed = Landed::default();
/// landed.notify(&PlacementEvent::PlacedAt {
///     placeable: PlaceableId(3),
///     tile: TileId(0),
///     position: GridPos::new(0, 0),
/// });
/// assert_eq!(landed.0, vec![PlaceableId(3)]);
/// ```
pub trait PlacementObserver {
    /// A displaced card is shown at its tentative position.
    fn on_previewed_at(&mut self, _placeable: PlaceableId, _tile: TileId, _position: GridPos) {}

    /// A card settled at its final position.
    fn on_placed_at(&mut self, _placeable: PlaceableId, _tile: TileId, _position: GridPos) {}

    /// A card goes back to where it was before the cancelled preview.
    fn on_returned_to_origin(&mut self, _placeable: PlaceableId) {}

    /// A card was removed from play.
    fn on_destroyed(&mut self, _placeable: PlaceableId) {}

    /// Route one event to its callback.
    fn notify(&mut self, event: &PlacementEvent) {
        match *event {
            PlacementEvent::Previewed {
                placeable,
                tile,
                position,
            } => self.on_previewed_at(placeable, tile, position),
            PlacementEvent::PlacedAt {
                placeable,
                tile,
                position,
            } => self.on_placed_at(placeable, tile, position),
            PlacementEvent::ReturnedToOrigin { placeable } => self.on_returned_to_origin(placeable),
            PlacementEvent::Destroyed { placeable, .. } => self.on_destroyed(placeable),
        }
    }
}

/// Records every event verbatim.
impl PlacementObserver for Vec<PlacementEvent> {
    fn notify(&mut self, event: &PlacementEvent) {
        self.push(*event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Counter {
        previewed: usize,
        placed: usize,
        returned: usize,
        destroyed: usize,
    }

    impl PlacementObserver for Counter {
        fn on_previewed_at(&mut self, _: PlaceableId, _: TileId, _: GridPos) {
            self.previewed += 1;
        }
        fn on_placed_at(&mut self, _: PlaceableId, _: TileId, _: GridPos) {
            self.placed += 1;
        }
        fn on_returned_to_origin(&mut self, _: PlaceableId) {
            self.returned += 1;
        }
        fn on_destroyed(&mut self, _: PlaceableId) {
            self.destroyed += 1;
        }
    }

    #[test]
    fn test_notify_routes_each_variant() {
        let mut counter = Counter::default();
        let p = PlaceableId(0);
        let t = TileId(0);
        let pos = GridPos::new(0, 0);

        counter.notify(&PlacementEvent::Previewed { placeable: p, tile: t, position: pos });
        counter.notify(&PlacementEvent::PlacedAt { placeable: p, tile: t, position: pos });
        counter.notify(&PlacementEvent::PlacedAt { placeable: p, tile: t, position: pos });
        counter.notify(&PlacementEvent::ReturnedToOrigin { placeable: p });
        counter.notify(&PlacementEvent::Destroyed { placeable: p, tile: t });

        assert_eq!(counter.previewed, 1);
        assert_eq!(counter.placed, 2);
        assert_eq!(counter.returned, 1);
        assert_eq!(counter.destroyed, 1);
    }

    #[test]
    fn test_vec_records_everything() {
        let mut log: Vec<PlacementEvent> = Vec::new();
        let event = PlacementEvent::ReturnedToOrigin {
            placeable: PlaceableId(4),
        };
        log.notify(&event);
        assert_eq!(log, vec![event]);
    }
}
