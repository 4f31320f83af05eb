//! Development cards.
//!
//! A card is a plain value: level, bonus color, prestige, cost. The real
//! decks contain no two identical cards per level, but nothing relies on
//! that; equality is structural and lookups remove the first equal card.

use serde::{Deserialize, Serialize};

use crate::core::Gem;
use crate::tokens::TokenCollection;

/// Deck tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Level {
    One,
    Two,
    Three,
}

impl Level {
    /// All levels, lowest first.
    pub const ALL: [Level; 3] = [Level::One, Level::Two, Level::Three];

    /// The printed level number (1-3).
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Level::One => 1,
            Level::Two => 2,
            Level::Three => 3,
        }
    }

    /// 0-based position among the decks.
    #[must_use]
    pub const fn index(self) -> usize {
        self.number() as usize - 1
    }

    /// Level from its printed number.
    #[must_use]
    pub const fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Level::One),
            2 => Some(Level::Two),
            3 => Some(Level::Three),
            _ => None,
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// An immutable development card.
///
/// ```
/// use splendor_engine::cards::{DevelopmentCard, Level};
/// use splendor_engine::core::Gem;
///
/// let card = DevelopmentCard::new(Level::One, Gem::Black, 2, &[(Gem::Blue, 2), (Gem::Red, 1)]);
/// assert_eq!(card.to_string(), "l1p2black/{blue: 2, red: 1}");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DevelopmentCard {
    level: Level,
    color: Gem,
    prestige: u32,
    cost: TokenCollection,
}

impl DevelopmentCard {
    /// Create a card.
    ///
    /// Panics if the bonus color or any cost entry is the joker; those
    /// cards do not exist.
    #[must_use]
    pub fn new(level: Level, color: Gem, prestige: u32, cost: &[(Gem, u32)]) -> Self {
        assert!(!color.is_joker(), "Card bonus cannot be the joker color");
        assert!(
            cost.iter().all(|(gem, _)| !gem.is_joker()),
            "Card cost cannot include the joker color"
        );

        Self {
            level,
            color,
            prestige,
            cost: TokenCollection::from_pairs(cost),
        }
    }

    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }

    /// Bonus color granted once purchased.
    #[must_use]
    pub fn color(&self) -> Gem {
        self.color
    }

    #[must_use]
    pub fn prestige(&self) -> u32 {
        self.prestige
    }

    #[must_use]
    pub fn cost(&self) -> &TokenCollection {
        &self.cost
    }
}

impl std::fmt::Display for DevelopmentCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "l{}p{}{}/{}", self.level, self.prestige, self.color, self.cost)
    }
}
