//! Placement events.
//!
//! The board queues one event every time a card visibly moves or leaves
//! play. Rendering and animation sit outside the engine, so these events are
//! the only thing they see.

use serde::{Deserialize, Serialize};

use crate::core::{GridPos, PlaceableId, TileId};

/// Something that happened to a placeable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlacementEvent {
    /// A displaced card is shown at its tentative tile during a preview.
    /// The card being placed (held by the pointer) gets no such event.
    Previewed {
        placeable: PlaceableId,
        tile: TileId,
        position: GridPos,
    },

    /// A card settled on a tile at commit.
    PlacedAt {
        placeable: PlaceableId,
        tile: TileId,
        position: GridPos,
    },

    /// A tentatively moved card goes back where it came from (its committed
    /// tile, or the hand) because the preview was cancelled.
    ReturnedToOrigin { placeable: PlaceableId },

    /// A card was destroyed by a Bomb arrow while sitting on `tile`.
    Destroyed {
        placeable: PlaceableId,
        tile: TileId,
    },
}

impl PlacementEvent {
    /// The placeable this event is about.
    #[must_use]
    pub fn placeable(&self) -> PlaceableId {
        match *self {
            PlacementEvent::Previewed { placeable, .. }
            | PlacementEvent::PlacedAt { placeable, .. }
            | PlacementEvent::ReturnedToOrigin { placeable }
            | PlacementEvent::Destroyed { placeable, .. } => placeable,
        }
    }

    /// Whether this event reflects committed state rather than a preview.
    #[must_use]
    pub fn is_commit(&self) -> bool {
        matches!(
            self,
            PlacementEvent::PlacedAt { .. } | PlacementEvent::Destroyed { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeable_accessor() {
        let events = [
            PlacementEvent::Previewed {
                placeable: PlaceableId(1),
                tile: TileId(0),
                position: GridPos::new(0, 0),
            },
            PlacementEvent::PlacedAt {
                placeable: PlaceableId(1),
                tile: TileId(0),
                position: GridPos::new(0, 0),
            },
            PlacementEvent::ReturnedToOrigin {
                placeable: PlaceableId(1),
            },
            PlacementEvent::Destroyed {
                placeable: PlaceableId(1),
                tile: TileId(0),
            },
        ];

        for event in &events {
            assert_eq!(event.placeable(), PlaceableId(1));
        }
        let commits: Vec<_> = events.iter().map(PlacementEvent::is_commit).collect();
        assert_eq!(commits, vec![false, true, false, true]);
    }

    #[test]
    fn test_serialization() {
        let event = PlacementEvent::Destroyed {
            placeable: PlaceableId(9),
            tile: TileId(2),
        };
        let json = serde_json::to_string(&event).unwrap();
        let deserialized: PlacementEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deserialized);
    }
}
