//! Shared table state: three decks, the nobles, the token pool.
//!
//! A `GameState` is never changed once it is recorded in history. New
//! states are derived with the `with_*` helpers, which clone the
//! previous state and swap one component. Decks and the noble set are
//! `im` vectors, so a derived state shares structure with its parent.

use serde::{Deserialize, Serialize};

use crate::cards::{catalog, Deck, Level};
use crate::core::{GameRng, Result, RulesConfig};
use crate::nobles::NobleSet;
use crate::tokens::TokenCollection;

/// Snapshot of everything on the table that no player owns.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    decks: [Deck; 3],
    nobles: NobleSet,
    pool: TokenCollection,
}

impl GameState {
    /// Assemble a state from its parts.
    ///
    /// Panics if the decks are not given in level order.
    #[must_use]
    pub fn new(decks: [Deck; 3], nobles: NobleSet, pool: TokenCollection) -> Self {
        for (deck, level) in decks.iter().zip(Level::ALL) {
            assert_eq!(deck.level(), level, "Decks must be given in level order");
        }
        Self { decks, nobles, pool }
    }

    /// The opening state for `player_count` players.
    ///
    /// Each deck is shuffled from its own RNG stream, and `player_count + 1`
    /// nobles are drawn from the shuffled noble pool.
    pub fn setup(player_count: usize, config: &RulesConfig, rng: &GameRng) -> Result<Self> {
        let per_color = config.tokens_per_color_for(player_count)?;

        let decks = Level::ALL.map(|level| {
            let mut deck = catalog::deck(level);
            deck.shuffle(&mut rng.for_context(&format!("deck-{}", level)));
            deck
        });

        let mut nobles = catalog::nobles();
        rng.for_context("nobles").shuffle(&mut nobles);
        nobles.truncate(config.nobles_for(player_count));

        Ok(Self {
            decks,
            nobles: NobleSet::new(nobles),
            pool: TokenCollection::starting_pool(per_color, config.joker_tokens),
        })
    }

    #[must_use]
    pub fn deck(&self, level: Level) -> &Deck {
        &self.decks[level.index()]
    }

    pub fn decks(&self) -> impl Iterator<Item = &Deck> {
        self.decks.iter()
    }

    #[must_use]
    pub fn nobles(&self) -> &NobleSet {
        &self.nobles
    }

    /// The shared token pool.
    #[must_use]
    pub fn pool(&self) -> &TokenCollection {
        &self.pool
    }

    /// A copy with `deck` replacing the deck of the same level.
    #[must_use]
    pub fn with_deck(&self, deck: Deck) -> Self {
        let index = deck.level().index();
        let mut next = self.clone();
        next.decks[index] = deck;
        next
    }

    #[must_use]
    pub fn with_nobles(&self, nobles: NobleSet) -> Self {
        let mut next = self.clone();
        next.nobles = nobles;
        next
    }

    #[must_use]
    pub fn with_pool(&self, pool: TokenCollection) -> Self {
        let mut next = self.clone();
        next.pool = pool;
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Gem;

    fn opening(player_count: usize, seed: u64) -> GameState {
        GameState::setup(player_count, &RulesConfig::default(), &GameRng::new(seed)).unwrap()
    }

    #[test]
    fn test_setup_two_players() {
        let state = opening(2, 42);

        assert_eq!(state.deck(Level::One).len(), 40);
        assert_eq!(state.deck(Level::Two).len(), 30);
        assert_eq!(state.deck(Level::Three).len(), 20);
        assert_eq!(state.nobles().len(), 3);
        assert_eq!(state.pool().count_of(Gem::Black), 4);
        assert_eq!(state.pool().count_of(Gem::Yellow), 5);
    }

    #[test]
    fn test_setup_scales_with_players() {
        let state = opening(4, 42);
        assert_eq!(state.nobles().len(), 5);
        assert_eq!(state.pool().count_of(Gem::Red), 7);
        assert_eq!(state.pool().count(), 40);
    }

    #[test]
    fn test_setup_rejects_player_count() {
        let result = GameState::setup(5, &RulesConfig::default(), &GameRng::new(1));
        assert!(result.is_err());
    }

    #[test]
    fn test_setup_is_seeded() {
        assert_eq!(opening(3, 9), opening(3, 9));
        assert_ne!(opening(3, 9), opening(3, 10));
    }

    #[test]
    fn test_with_helpers_leave_original_untouched() {
        let state = opening(2, 42);

        let mut pool = *state.pool();
        pool.remove(Gem::Black, 1).unwrap();
        let next = state.with_pool(pool);

        assert_eq!(state.pool().count_of(Gem::Black), 4);
        assert_eq!(next.pool().count_of(Gem::Black), 3);
        assert_eq!(next.deck(Level::One), state.deck(Level::One));

        let mut deck = state.deck(Level::Two).clone();
        deck.pop_by_index(0).unwrap();
        let next = state.with_deck(deck);
        assert_eq!(next.deck(Level::Two).len(), 29);
        assert_eq!(state.deck(Level::Two).len(), 30);
        assert_eq!(next.deck(Level::Three), state.deck(Level::Three));

        let next = state.with_nobles(NobleSet::default());
        assert!(next.nobles().is_empty());
        assert_eq!(state.nobles().len(), 3);
    }
}
