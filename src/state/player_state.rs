//! One player's holdings at a point in the game.

use serde::{Deserialize, Serialize};

use crate::cards::{DevelopmentCardCollection, Reserve};
use crate::core::RulesConfig;
use crate::tokens::PlayerTokenCache;

/// Snapshot of a player's tokens, purchased cards, and reserve.
///
/// Like `GameState`, never changed after it is recorded; derive new
/// snapshots with the `with_*` helpers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    tokens: PlayerTokenCache,
    cards: DevelopmentCardCollection,
    reserve: Reserve,
}

impl PlayerState {
    #[must_use]
    pub fn new(
        tokens: PlayerTokenCache,
        cards: DevelopmentCardCollection,
        reserve: Reserve,
    ) -> Self {
        Self { tokens, cards, reserve }
    }

    /// A player with nothing, sized by the rules.
    #[must_use]
    pub fn empty(config: &RulesConfig) -> Self {
        Self {
            tokens: PlayerTokenCache::new(config.player_token_limit),
            cards: DevelopmentCardCollection::new(),
            reserve: Reserve::new(config.reserve_limit),
        }
    }

    #[must_use]
    pub fn tokens(&self) -> &PlayerTokenCache {
        &self.tokens
    }

    /// Purchased cards and claimed nobles.
    #[must_use]
    pub fn cards(&self) -> &DevelopmentCardCollection {
        &self.cards
    }

    #[must_use]
    pub fn reserve(&self) -> &Reserve {
        &self.reserve
    }

    #[must_use]
    pub fn with_tokens(&self, tokens: PlayerTokenCache) -> Self {
        let mut next = self.clone();
        next.tokens = tokens;
        next
    }

    #[must_use]
    pub fn with_cards(&self, cards: DevelopmentCardCollection) -> Self {
        let mut next = self.clone();
        next.cards = cards;
        next
    }

    #[must_use]
    pub fn with_reserve(&self, reserve: Reserve) -> Self {
        let mut next = self.clone();
        next.reserve = reserve;
        next
    }

    /// Prestige from purchased cards and claimed nobles.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.cards.prestige()
    }

    #[must_use]
    pub fn has_won(&self, winning_score: u32) -> bool {
        self.score() >= winning_score
    }
}

impl std::fmt::Display for PlayerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Player state:")?;
        writeln!(f, "Tokens: {}", self.tokens)?;
        writeln!(f, "{}", self.cards)?;
        write!(f, "Reserved: {}/{}", self.reserve.len(), self.reserve.limit())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{DevelopmentCard, Level};
    use crate::core::Gem;
    use crate::nobles::Noble;

    fn scored_state() -> PlayerState {
        let mut cards = DevelopmentCardCollection::new();
        cards.add(DevelopmentCard::new(
            Level::One,
            Gem::Black,
            2,
            &[(Gem::Blue, 2), (Gem::Red, 1)],
        ));
        cards.add(DevelopmentCard::new(Level::Two, Gem::Black, 0, &[(Gem::Blue, 3)]));
        cards.add(DevelopmentCard::new(
            Level::One,
            Gem::Blue,
            1,
            &[(Gem::White, 1), (Gem::Red, 1)],
        ));

        PlayerState::empty(&RulesConfig::default()).with_cards(cards)
    }

    #[test]
    fn test_score() {
        let state = scored_state();
        assert_eq!(state.score(), 3);
        assert!(!state.has_won(15));
        assert!(state.has_won(3));
    }

    #[test]
    fn test_noble_prestige_counts() {
        let state = scored_state();
        let mut cards = state.cards().clone();
        cards.claim_noble(Noble::new(3, &[(Gem::Black, 2)]));
        assert_eq!(state.with_cards(cards).score(), 6);
    }

    #[test]
    fn test_with_helpers() {
        let state = scored_state();

        let mut tokens = *state.tokens();
        tokens.add(Gem::Red, 2);
        let next = state.with_tokens(tokens);

        assert_eq!(next.tokens().count(), 2);
        assert_eq!(state.tokens().count(), 0);
        assert_eq!(next.cards(), state.cards());

        let mut reserve = state.reserve().clone();
        reserve
            .add(DevelopmentCard::new(Level::Three, Gem::Red, 4, &[(Gem::Green, 7)]))
            .unwrap();
        let next = state.with_reserve(reserve);
        assert_eq!(next.reserve().len(), 1);
        assert!(state.reserve().is_empty());
    }
}
