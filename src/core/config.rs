//! Rule parameters.
//!
//! `RulesConfig::default()` is the published ruleset. Every number the
//! transition layer checks against lives here so house rules can be
//! tried without touching the engine.

use serde::{Deserialize, Serialize};

use super::error::{GameError, Result};

/// Tunable rule constants.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Fewest players a game can be created for.
    pub min_players: usize,

    /// Most players a game can be created for.
    pub max_players: usize,

    /// Ceiling on tokens a single player may hold.
    pub player_token_limit: u32,

    /// Cards a player may hold in reserve.
    pub reserve_limit: usize,

    /// Prestige that ends the game.
    pub winning_score: u32,

    /// A color stack must hold at least this many tokens to take two.
    pub pair_take_min_stack: u32,

    /// Joker tokens in the shared pool, regardless of player count.
    pub joker_tokens: u32,

    /// Tokens of each common color, indexed by `player_count - min_players`.
    pub tokens_per_color: Vec<u32>,

    /// Reject actions from anyone but the current player.
    pub enforce_turn_order: bool,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            min_players: 2,
            max_players: 4,
            player_token_limit: 10,
            reserve_limit: 3,
            winning_score: 15,
            pair_take_min_stack: 4,
            joker_tokens: 5,
            tokens_per_color: vec![4, 5, 7],
            enforce_turn_order: false,
        }
    }
}

impl RulesConfig {
    /// Set the player token ceiling.
    #[must_use]
    pub fn with_player_token_limit(mut self, limit: u32) -> Self {
        self.player_token_limit = limit;
        self
    }

    /// Set the reserve size.
    #[must_use]
    pub fn with_reserve_limit(mut self, limit: usize) -> Self {
        self.reserve_limit = limit;
        self
    }

    /// Set the prestige needed to end the game.
    #[must_use]
    pub fn with_winning_score(mut self, score: u32) -> Self {
        self.winning_score = score;
        self
    }

    /// Set the minimum stack for taking two tokens.
    #[must_use]
    pub fn with_pair_take_min_stack(mut self, min: u32) -> Self {
        self.pair_take_min_stack = min;
        self
    }

    /// Require actions to come from the current player.
    #[must_use]
    pub fn with_turn_order(mut self, enforce: bool) -> Self {
        self.enforce_turn_order = enforce;
        self
    }

    /// Check a requested player count against the allowed range.
    pub fn check_player_count(&self, player_count: usize) -> Result<()> {
        let covered = self.min_players + self.tokens_per_color.len();
        if player_count < self.min_players
            || player_count > self.max_players
            || player_count >= covered
        {
            return Err(GameError::InvalidPlayerCount {
                requested: player_count,
                min: self.min_players,
                max: self.max_players.min(covered.saturating_sub(1)),
            });
        }
        Ok(())
    }

    /// Tokens of each common color for the given player count.
    pub fn tokens_per_color_for(&self, player_count: usize) -> Result<u32> {
        self.check_player_count(player_count)?;
        Ok(self.tokens_per_color[player_count - self.min_players])
    }

    /// Nobles revealed at setup: one more than the number of players.
    #[must_use]
    pub fn nobles_for(&self, player_count: usize) -> usize {
        player_count + 1
    }
}
