//! End-of-game outcome.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;
use crate::state::PlayerState;

/// Result of a finished game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Players tied on prestige and on purchased card count.
    Winners(Vec<PlayerId>),
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Winners(ps) => ps.contains(&player),
        }
    }

    /// Rank finished players: most prestige wins, fewest purchased cards
    /// breaks a tie. Returns `None` for an empty table.
    #[must_use]
    pub fn decide<'a>(
        players: impl IntoIterator<Item = (PlayerId, &'a PlayerState)>,
    ) -> Option<Self> {
        let ranked: Vec<(PlayerId, u32, usize)> = players
            .into_iter()
            .map(|(id, state)| (id, state.score(), state.cards().len()))
            .collect();

        let best_score = ranked.iter().map(|&(_, score, _)| score).max()?;
        let fewest_cards = ranked
            .iter()
            .filter(|&&(_, score, _)| score == best_score)
            .map(|&(_, _, cards)| cards)
            .min()?;

        let mut winners: Vec<PlayerId> = ranked
            .iter()
            .filter(|&&(_, score, cards)| score == best_score && cards == fewest_cards)
            .map(|&(id, _, _)| id)
            .collect();

        if winners.len() == 1 {
            winners.pop().map(GameResult::Winner)
        } else {
            Some(GameResult::Winners(winners))
        }
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Winner(p) => write!(f, "{} wins", p),
            GameResult::Winners(ps) => {
                let names: Vec<String> = ps.iter().map(ToString::to_string).collect();
                write!(f, "shared victory: {}", names.join(", "))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{DevelopmentCard, DevelopmentCardCollection, Level};
    use crate::core::{Gem, RulesConfig};

    fn with_cards(prestiges: &[u32]) -> PlayerState {
        let mut cards = DevelopmentCardCollection::new();
        for &prestige in prestiges {
            cards.add(DevelopmentCard::new(Level::Three, Gem::White, prestige, &[(Gem::Black, 7)]));
        }
        PlayerState::empty(&RulesConfig::default()).with_cards(cards)
    }

    #[test]
    fn test_is_winner() {
        let result = GameResult::Winner(PlayerId::new(1));
        assert!(!result.is_winner(PlayerId::new(0)));
        assert!(result.is_winner(PlayerId::new(1)));

        let shared = GameResult::Winners(vec![PlayerId::new(0), PlayerId::new(2)]);
        assert!(shared.is_winner(PlayerId::new(0)));
        assert!(!shared.is_winner(PlayerId::new(1)));
    }

    #[test]
    fn test_highest_score_wins() {
        let a = with_cards(&[5, 5, 5]);
        let b = with_cards(&[5, 5, 4, 3]);

        let result = GameResult::decide([(PlayerId::new(0), &a), (PlayerId::new(1), &b)]);
        assert_eq!(result, Some(GameResult::Winner(PlayerId::new(1))));
    }

    #[test]
    fn test_fewest_cards_breaks_tie() {
        let a = with_cards(&[5, 5, 5]);
        let b = with_cards(&[5, 5, 4, 1]);

        let result = GameResult::decide([(PlayerId::new(0), &a), (PlayerId::new(1), &b)]);
        assert_eq!(result, Some(GameResult::Winner(PlayerId::new(0))));
    }

    #[test]
    fn test_full_tie_is_shared() {
        let a = with_cards(&[5, 5, 5]);
        let b = with_cards(&[3, 7, 5]);
        let c = with_cards(&[1]);

        let result = GameResult::decide([
            (PlayerId::new(0), &a),
            (PlayerId::new(1), &b),
            (PlayerId::new(2), &c),
        ]);
        assert_eq!(
            result,
            Some(GameResult::Winners(vec![PlayerId::new(0), PlayerId::new(1)]))
        );
        assert_eq!(
            result.unwrap().to_string(),
            "shared victory: Player 0, Player 1"
        );
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(GameResult::decide(Vec::<(PlayerId, &PlayerState)>::new()), None);
    }
}
