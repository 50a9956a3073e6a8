//! Card definitions - static card data.
//!
//! `CardDefinition` holds the immutable properties of a card: its name, the
//! key of its display image, and one arrow per side. Definitions are loaded
//! once and shared by every instance in play.
//!
//! Instance-specific data (where the card currently is) lives in
//! [`Placeable`](super::Placeable).

use serde::{Deserialize, Serialize};

use super::arrow::Arrow;
use crate::core::Direction;

/// Unique identifier for a card definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Static card definition.
///
/// Arrows are stored clockwise: Up, Right, Down, Left.
///
/// ## Example
///
/// ```
/// use tile_push::{Arrow, ArrowStrength, CardDefinition, CardId, Direction};
///
/// let knight = CardDefinition::new(CardId::new(1), "Knight")
///     .with_arrow(Direction::Up, Arrow::plain(ArrowStrength::Double))
///     .with_arrow(Direction::Left, Arrow::push(ArrowStrength::Single));
///
/// assert_eq!(knight.arrow_at(Direction::Up).strength, ArrowStrength::Double);
/// assert_eq!(knight.arrow_at(Direction::Down), Arrow::NONE);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Unique identifier for this card definition.
    pub id: CardId,

    /// Card name (for display/debugging).
    pub name: String,

    /// Key of the display image. The engine never interprets it.
    #[serde(default)]
    pub image: Option<String>,

    /// One arrow per side, indexed by [`Direction::index`].
    #[serde(default)]
    pub arrows: [Arrow; 4],
}

impl CardDefinition {
    /// Create a card with no arrows.
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            image: None,
            arrows: [Arrow::NONE; 4],
        }
    }

    /// Set the display image key (builder pattern).
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Set one arrow (builder pattern).
    #[must_use]
    pub fn with_arrow(mut self, dir: Direction, arrow: Arrow) -> Self {
        self.arrows[dir.index()] = arrow;
        self
    }

    /// Set all four arrows, clockwise from Up.
    #[must_use]
    pub fn with_arrows(mut self, arrows: [Arrow; 4]) -> Self {
        self.arrows = arrows;
        self
    }

    /// The arrow on side `dir`.
    #[must_use]
    pub fn arrow_at(&self, dir: Direction) -> Arrow {
        self.arrows[dir.index()]
    }

    /// Iterate over `(direction, arrow)` pairs, clockwise from Up.
    pub fn arrows(&self) -> impl Iterator<Item = (Direction, Arrow)> + '_ {
        Direction::ALL.into_iter().map(move |dir| (dir, self.arrow_at(dir)))
    }
}
