//! Arrow model: directional strength and special effect.
//!
//! Every card side carries one arrow. Contests compare strengths with
//! `>`: a tie never beats the defender.

use serde::{Deserialize, Serialize};

/// Strength of an arrow. Variants are declared weakest first, so the
/// derived `Ord` is the game order `None < Single < Double`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ArrowStrength {
    #[default]
    None,
    Single,
    Double,
}

impl ArrowStrength {
    /// Whether an attack of this strength beats a defending `other`.
    ///
    /// ```
    /// use tile_push::ArrowStrength;
    ///
    /// assert!(ArrowStrength::Double.beats(ArrowStrength::Single));
    /// assert!(!ArrowStrength::Single.beats(ArrowStrength::Single));
    /// ```
    #[must_use]
    pub fn beats(self, other: ArrowStrength) -> bool {
        self > other
    }
}

/// Special effect attached to an arrow.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArrowEffect {
    #[default]
    None,
    /// A winning Bomb arrow destroys the defender instead of pushing it.
    Bomb,
    /// After the card lands, it shoves the neighbor this arrow points at.
    Push,
}

/// One arrow: strength plus effect.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Arrow {
    pub strength: ArrowStrength,
    #[serde(default)]
    pub effect: ArrowEffect,
}

impl Arrow {
    /// An absent arrow: no strength, no effect.
    pub const NONE: Arrow = Arrow::new(ArrowStrength::None, ArrowEffect::None);

    #[must_use]
    pub const fn new(strength: ArrowStrength, effect: ArrowEffect) -> Self {
        Self { strength, effect }
    }

    /// A plain arrow of the given strength.
    #[must_use]
    pub const fn plain(strength: ArrowStrength) -> Self {
        Self::new(strength, ArrowEffect::None)
    }

    #[must_use]
    pub const fn bomb(strength: ArrowStrength) -> Self {
        Self::new(strength, ArrowEffect::Bomb)
    }

    #[must_use]
    pub const fn push(strength: ArrowStrength) -> Self {
        Self::new(strength, ArrowEffect::Push)
    }
}
