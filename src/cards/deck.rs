//! One level's draw pile and face-up row.
//!
//! The deck is a single ordered list. Positions `0..FACING_CARDS` are
//! face up; position `FACING_CARDS` is the top of the face-down pile.
//! Removing a face-up card shifts everything behind it forward, which
//! is how the next hidden card comes into view.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::card::{DevelopmentCard, Level};
use crate::core::{GameError, GameRng, Result};

/// Face-up cards per level.
pub const FACING_CARDS: usize = 4;

/// Cards visible on the table for one level.
pub type Facing<'a> = SmallVec<[&'a DevelopmentCard; FACING_CARDS]>;

/// Undealt and face-up cards of a single level.
///
/// Backed by `im::Vector`, so cloning a deck into a new snapshot shares
/// structure with the old one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    level: Level,
    cards: Vector<DevelopmentCard>,
}

impl Deck {
    /// Build a deck in the given order.
    ///
    /// Panics if a card belongs to another level.
    #[must_use]
    pub fn new(level: Level, cards: impl IntoIterator<Item = DevelopmentCard>) -> Self {
        let cards: Vector<DevelopmentCard> = cards.into_iter().collect();
        assert!(
            cards.iter().all(|c| c.level() == level),
            "Deck of level {} given a card of another level",
            level
        );
        Self { level, cards }
    }

    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards still face down.
    #[must_use]
    pub fn hidden_count(&self) -> usize {
        self.cards.len().saturating_sub(FACING_CARDS)
    }

    /// All cards, face-up first.
    pub fn iter(&self) -> impl Iterator<Item = &DevelopmentCard> {
        self.cards.iter()
    }

    /// Up to four face-up cards; fewer once the deck runs low.
    #[must_use]
    pub fn facing(&self) -> Facing<'_> {
        self.cards.iter().take(FACING_CARDS).collect()
    }

    /// Position of the first card equal to `card`, anywhere in the deck.
    #[must_use]
    pub fn find_card(&self, card: &DevelopmentCard) -> Option<usize> {
        self.cards.iter().position(|c| c == card)
    }

    /// Position of the first face-up card equal to `card`.
    #[must_use]
    pub fn find_facing(&self, card: &DevelopmentCard) -> Option<usize> {
        self.find_card(card).filter(|&i| i < FACING_CARDS)
    }

    /// Remove and return the card at `index`.
    pub fn pop_by_index(&mut self, index: usize) -> Result<DevelopmentCard> {
        if index >= self.cards.len() {
            return Err(GameError::IndexOutOfRange { index, len: self.cards.len() });
        }
        Ok(self.cards.remove(index))
    }

    /// The top face-down card, without removing it.
    #[must_use]
    pub fn hidden_top(&self) -> Option<&DevelopmentCard> {
        self.cards.get(FACING_CARDS)
    }

    /// Remove and return the top face-down card.
    pub fn pop_hidden_top(&mut self) -> Result<DevelopmentCard> {
        if self.cards.len() <= FACING_CARDS {
            return Err(GameError::DeckExhausted {
                level: self.level,
                remaining: self.cards.len(),
            });
        }
        Ok(self.cards.remove(FACING_CARDS))
    }

    /// Randomize the order. Only used while setting up a game.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        let mut cards: Vec<DevelopmentCard> = self.cards.iter().cloned().collect();
        rng.shuffle(&mut cards);
        self.cards = cards.into_iter().collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Gem;

    fn numbered_deck(n: u32) -> Deck {
        // Prestige doubles as a card number so cards are distinguishable.
        Deck::new(
            Level::One,
            (0..n).map(|i| DevelopmentCard::new(Level::One, Gem::Red, i, &[(Gem::Blue, 1)])),
        )
    }

    fn prestiges(cards: &[&DevelopmentCard]) -> Vec<u32> {
        cards.iter().map(|c| c.prestige()).collect()
    }

    #[test]
    fn test_facing_window() {
        let deck = numbered_deck(7);
        assert_eq!(prestiges(&deck.facing()), vec![0, 1, 2, 3]);
        assert_eq!(deck.hidden_count(), 3);
    }

    #[test]
    fn test_facing_short_deck() {
        let deck = numbered_deck(2);
        assert_eq!(deck.facing().len(), 2);
        assert_eq!(numbered_deck(0).facing().len(), 0);
    }

    #[test]
    fn test_pop_slides_window() {
        let mut deck = numbered_deck(7);
        let popped = deck.pop_by_index(2).unwrap();

        assert_eq!(popped.prestige(), 2);
        assert_eq!(prestiges(&deck.facing()), vec![0, 1, 3, 4]);
    }

    #[test]
    fn test_pop_out_of_range() {
        let mut deck = numbered_deck(3);
        assert_eq!(
            deck.pop_by_index(3),
            Err(GameError::IndexOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(deck.len(), 3);
    }

    #[test]
    fn test_pop_hidden_top() {
        let mut deck = numbered_deck(6);
        assert_eq!(deck.hidden_top().map(|c| c.prestige()), Some(4));
        assert_eq!(deck.pop_hidden_top().unwrap().prestige(), 4);
        assert_eq!(deck.pop_hidden_top().unwrap().prestige(), 5);
        assert_eq!(
            deck.pop_hidden_top(),
            Err(GameError::DeckExhausted { level: Level::One, remaining: 4 })
        );
    }

    #[test]
    fn test_find_card() {
        let deck = numbered_deck(6);
        let fifth = DevelopmentCard::new(Level::One, Gem::Red, 5, &[(Gem::Blue, 1)]);
        let missing = DevelopmentCard::new(Level::One, Gem::Red, 9, &[(Gem::Blue, 1)]);

        assert_eq!(deck.find_card(&fifth), Some(5));
        assert_eq!(deck.find_facing(&fifth), None);
        assert_eq!(deck.find_card(&missing), None);
    }

    #[test]
    fn test_find_returns_first_duplicate() {
        let card = DevelopmentCard::new(Level::One, Gem::Red, 0, &[(Gem::Blue, 1)]);
        let deck = Deck::new(Level::One, vec![card.clone(), card.clone()]);
        assert_eq!(deck.find_card(&card), Some(0));
    }

    #[test]
    fn test_shuffle_is_seeded() {
        let mut a = numbered_deck(20);
        let mut b = numbered_deck(20);
        a.shuffle(&mut GameRng::new(3));
        b.shuffle(&mut GameRng::new(3));

        assert_eq!(a, b);
        assert_ne!(a, numbered_deck(20));
        assert_eq!(a.len(), 20);
    }
}
