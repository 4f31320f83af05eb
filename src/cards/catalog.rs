//! The published card and noble pools.
//!
//! 40 level-one, 30 level-two and 20 level-three development cards, and
//! ten nobles worth three prestige each.

use super::card::{DevelopmentCard, Level};
use super::deck::Deck;
use crate::core::Gem::{self, Black, Blue, Green, Red, White};
use crate::nobles::Noble;

type CardRow = (Gem, u32, &'static [(Gem, u32)]);

const LEVEL_ONE: &[CardRow] = &[
    (Black, 0, &[(Green, 1), (Red, 3), (Black, 1)]),
    (Black, 0, &[(Green, 2), (Red, 1)]),
    (Black, 0, &[(Green, 3)]),
    (Black, 0, &[(White, 1), (Blue, 1), (Green, 1), (Red, 1)]),
    (Black, 0, &[(White, 1), (Blue, 2), (Green, 1), (Red, 1)]),
    (Black, 0, &[(White, 2), (Blue, 2), (Red, 1)]),
    (Black, 0, &[(White, 2), (Green, 2)]),
    (Black, 1, &[(Blue, 4)]),
    (Blue, 0, &[(Black, 3)]),
    (Blue, 0, &[(Blue, 1), (Green, 3), (Red, 1)]),
    (Blue, 0, &[(Green, 2), (Black, 2)]),
    (Blue, 0, &[(White, 1), (Black, 2)]),
    (Blue, 0, &[(White, 1), (Green, 1), (Red, 1), (Black, 1)]),
    (Blue, 0, &[(White, 1), (Green, 1), (Red, 2), (Black, 1)]),
    (Blue, 0, &[(White, 1), (Green, 2), (Red, 2)]),
    (Blue, 1, &[(Red, 4)]),
    (Green, 0, &[(Blue, 1), (Red, 2), (Black, 2)]),
    (Green, 0, &[(Blue, 2), (Red, 2)]),
    (Green, 0, &[(Red, 3)]),
    (Green, 0, &[(White, 1), (Blue, 1), (Red, 1), (Black, 1)]),
    (Green, 0, &[(White, 1), (Blue, 1), (Red, 1), (Black, 2)]),
    (Green, 0, &[(White, 1), (Blue, 3), (Green, 1)]),
    (Green, 0, &[(White, 2), (Blue, 1)]),
    (Green, 1, &[(Black, 4)]),
    (Red, 0, &[(Blue, 2), (Green, 1)]),
    (Red, 0, &[(White, 1), (Blue, 1), (Green, 1), (Black, 1)]),
    (Red, 0, &[(White, 1), (Red, 1), (Black, 3)]),
    (Red, 0, &[(White, 2), (Blue, 1), (Green, 1), (Black, 1)]),
    (Red, 0, &[(White, 2), (Green, 1), (Black, 2)]),
    (Red, 0, &[(White, 2), (Red, 2)]),
    (Red, 0, &[(White, 3)]),
    (Red, 1, &[(White, 4)]),
    (White, 0, &[(Blue, 1), (Green, 1), (Red, 1), (Black, 1)]),
    (White, 0, &[(Blue, 1), (Green, 2), (Red, 1), (Black, 1)]),
    (White, 0, &[(Blue, 2), (Black, 2)]),
    (White, 0, &[(Blue, 2), (Green, 2), (Black, 1)]),
    (White, 0, &[(Blue, 3)]),
    (White, 0, &[(Red, 2), (Black, 1)]),
    (White, 0, &[(White, 3), (Blue, 1), (Black, 1)]),
    (White, 1, &[(Green, 4)]),
];

const LEVEL_TWO: &[CardRow] = &[
    (Black, 1, &[(White, 3), (Blue, 2), (Green, 2)]),
    (Black, 1, &[(White, 3), (Green, 3), (Black, 2)]),
    (Black, 2, &[(Blue, 1), (Green, 4), (Red, 2)]),
    (Black, 2, &[(Green, 5), (Red, 3)]),
    (Black, 2, &[(White, 5)]),
    (Black, 3, &[(Black, 6)]),
    (Blue, 1, &[(Blue, 2), (Green, 2), (Red, 3)]),
    (Blue, 1, &[(Blue, 2), (Green, 3), (Black, 3)]),
    (Blue, 2, &[(Blue, 5)]),
    (Blue, 2, &[(White, 2), (Red, 1), (Black, 4)]),
    (Blue, 2, &[(White, 5), (Blue, 3)]),
    (Blue, 3, &[(Blue, 6)]),
    (Green, 1, &[(White, 2), (Blue, 3), (Black, 2)]),
    (Green, 1, &[(White, 3), (Green, 2), (Red, 3)]),
    (Green, 2, &[(Blue, 5), (Green, 3)]),
    (Green, 2, &[(Green, 5)]),
    (Green, 2, &[(White, 4), (Blue, 2), (Black, 1)]),
    (Green, 3, &[(Green, 6)]),
    (Red, 1, &[(Blue, 3), (Red, 2), (Black, 3)]),
    (Red, 1, &[(White, 2), (Red, 2), (Black, 3)]),
    (Red, 2, &[(Black, 5)]),
    (Red, 2, &[(White, 1), (Blue, 4), (Green, 2)]),
    (Red, 2, &[(White, 3), (Black, 5)]),
    (Red, 3, &[(Red, 6)]),
    (White, 1, &[(Green, 3), (Red, 2), (Black, 2)]),
    (White, 1, &[(White, 2), (Blue, 3), (Red, 3)]),
    (White, 2, &[(Green, 1), (Red, 4), (Black, 2)]),
    (White, 2, &[(Red, 5)]),
    (White, 2, &[(Red, 5), (Black, 3)]),
    (White, 3, &[(White, 6)]),
];

const LEVEL_THREE: &[CardRow] = &[
    (Black, 3, &[(White, 3), (Blue, 3), (Green, 5), (Red, 3)]),
    (Black, 4, &[(Green, 3), (Red, 6), (Black, 3)]),
    (Black, 4, &[(Red, 7)]),
    (Black, 5, &[(Red, 7), (Black, 3)]),
    (Blue, 3, &[(White, 3), (Green, 3), (Red, 3), (Black, 5)]),
    (Blue, 4, &[(White, 6), (Blue, 3), (Black, 3)]),
    (Blue, 4, &[(White, 7)]),
    (Blue, 5, &[(White, 7), (Blue, 3)]),
    (Green, 3, &[(White, 5), (Blue, 3), (Red, 3), (Black, 3)]),
    (Green, 4, &[(Blue, 7)]),
    (Green, 4, &[(White, 3), (Blue, 6), (Green, 3)]),
    (Green, 5, &[(Blue, 7), (Green, 3)]),
    (Red, 3, &[(White, 3), (Blue, 5), (Green, 3), (Black, 3)]),
    (Red, 4, &[(Blue, 3), (Green, 6), (Red, 3)]),
    (Red, 4, &[(Green, 7)]),
    (Red, 5, &[(Green, 7), (Red, 3)]),
    (White, 3, &[(Blue, 3), (Green, 3), (Red, 5), (Black, 3)]),
    (White, 4, &[(Black, 7)]),
    (White, 4, &[(White, 3), (Red, 3), (Black, 6)]),
    (White, 5, &[(White, 3), (Black, 7)]),
];

const NOBLES: &[(u32, &[(Gem, u32)])] = &[
    (3, &[(Black, 3), (Blue, 3), (White, 3)]),
    (3, &[(Black, 3), (Red, 3), (Green, 3)]),
    (3, &[(Black, 3), (Red, 3), (White, 3)]),
    (3, &[(Black, 4), (Red, 4)]),
    (3, &[(Black, 4), (White, 4)]),
    (3, &[(Blue, 3), (Red, 3), (Green, 3)]),
    (3, &[(Blue, 3), (White, 3), (Green, 3)]),
    (3, &[(Blue, 4), (Green, 4)]),
    (3, &[(Blue, 4), (White, 4)]),
    (3, &[(Red, 4), (Green, 4)]),
];

fn rows(level: Level) -> &'static [CardRow] {
    match level {
        Level::One => LEVEL_ONE,
        Level::Two => LEVEL_TWO,
        Level::Three => LEVEL_THREE,
    }
}

/// Every card of a level, in catalog order.
#[must_use]
pub fn cards(level: Level) -> Vec<DevelopmentCard> {
    rows(level)
        .iter()
        .map(|&(color, prestige, cost)| DevelopmentCard::new(level, color, prestige, cost))
        .collect()
}

/// An unshuffled deck holding every card of a level.
#[must_use]
pub fn deck(level: Level) -> Deck {
    Deck::new(level, cards(level))
}

/// All ten nobles, in catalog order.
#[must_use]
pub fn nobles() -> Vec<Noble> {
    NOBLES
        .iter()
        .map(|&(prestige, cost)| Noble::new(prestige, cost))
        .collect()
}
