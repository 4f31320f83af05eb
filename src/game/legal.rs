//! Legal action enumeration.
//!
//! Candidates are generated from what is on the table and then run
//! through the same transitions `Game` uses, so an action is listed if
//! and only if applying it would succeed.

use crate::cards::Level;
use crate::core::{Gem, RulesConfig};
use crate::state::{GameState, PlayerState};

use super::action::Action;
use super::transitions;

/// Every action worth trying for `player`, legal or not.
///
/// Cards equal in value are listed once.
#[must_use]
pub fn candidates(game: &GameState, player: &PlayerState) -> Vec<Action> {
    let mut actions = Vec::new();

    let colors = Gem::COMMON;
    for i in 0..colors.len() {
        for j in i + 1..colors.len() {
            for k in j + 1..colors.len() {
                actions.push(Action::TakeThreeTokens([colors[i], colors[j], colors[k]]));
            }
        }
    }
    actions.extend(colors.iter().map(|&gem| Action::TakeTwoTokens(gem)));

    for level in Level::ALL {
        for card in game.deck(level).facing() {
            push_unique(&mut actions, Action::ReserveCard(card.clone()));
            push_unique(&mut actions, Action::PurchaseCard(card.clone()));
        }
        actions.push(Action::ReserveHiddenCard(level));
    }

    for card in player.reserve().iter() {
        push_unique(&mut actions, Action::PurchaseReservedCard(card.clone()));
    }

    actions
}

/// Actions `player` could take right now.
#[must_use]
pub fn legal_actions(config: &RulesConfig, game: &GameState, player: &PlayerState) -> Vec<Action> {
    candidates(game, player)
        .into_iter()
        .filter(|action| transitions::plan(config, game, player, action).is_ok())
        .collect()
}

fn push_unique(actions: &mut Vec<Action>, action: Action) {
    if !actions.contains(&action) {
        actions.push(action);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameRng;

    fn opening() -> (RulesConfig, GameState, PlayerState) {
        let config = RulesConfig::default();
        let game = GameState::setup(2, &config, &GameRng::new(42)).unwrap();
        let player = PlayerState::empty(&config);
        (config, game, player)
    }

    #[test]
    fn test_opening_moves() {
        let (config, game, player) = opening();
        let legal = legal_actions(&config, &game, &player);

        let takes = legal
            .iter()
            .filter(|a| matches!(a, Action::TakeThreeTokens(_)))
            .count();
        assert_eq!(takes, 10);

        // Every color starts at 4, enough for a pair.
        let pairs = legal
            .iter()
            .filter(|a| matches!(a, Action::TakeTwoTokens(_)))
            .count();
        assert_eq!(pairs, 5);

        assert!(legal.iter().any(|a| matches!(a, Action::ReserveCard(_))));
        assert!(legal.contains(&Action::ReserveHiddenCard(Level::Three)));
        assert!(!legal.iter().any(Action::is_purchase));
    }

    #[test]
    fn test_every_listed_action_applies() {
        let (config, game, player) = opening();

        for action in legal_actions(&config, &game, &player) {
            assert!(
                transitions::plan(&config, &game, &player, &action).is_ok(),
                "{} listed but rejected",
                action
            );
        }
    }

    #[test]
    fn test_full_hands_can_only_buy() {
        let (config, game, _) = opening();
        let mut tokens = crate::tokens::PlayerTokenCache::new(config.player_token_limit);
        tokens.add(Gem::Yellow, 10);
        let player = PlayerState::empty(&config).with_tokens(tokens);

        let legal = legal_actions(&config, &game, &player);
        assert!(!legal.is_empty());
        assert!(legal.iter().all(Action::is_purchase));
    }
}
