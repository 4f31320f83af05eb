//! The game aggregate.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::{DevelopmentCard, Level};
use crate::core::{GameError, GameRng, Gem, PlayerId, Result, RulesConfig};
use crate::state::{GameState, GameStateHistory, PlayerState, PlayerStateHistory};

use super::action::{Action, ActionRecord};
use super::legal;
use super::result::GameResult;
use super::transitions::{self, Outcome};

/// Shown by front ends before the first turn.
pub const GAME_INTRO: &str = "\
In Splendor, you take on the role of a rich merchant during the Renaissance. \
You will use your resources to acquire mines, transportation methods, and artisans \
who will allow you to turn raw gems into beautiful jewels.

During the game, the players take gem and gold tokens. With these tokens, they purchase \
development cards, which are worth prestige points and/or bonuses. These bonuses allow \
players to purchase subsequent development cards for a lesser cost. When a player has \
enough bonuses, they immediately receive a visit from a noble (which is also worth \
prestige points).

As soon as a player reaches 15 prestige points, the current round ends and the player \
with the most prestige points is declared the winner.";

/// Prefix of generated player names.
pub const RANDOM_NAME_PREFIX: &str = "PLAYER_";

/// Random letters after the prefix.
const RANDOM_NAME_LETTERS: usize = 8;

/// Longest accepted player name, after trimming.
pub const MAX_NAME_LEN: usize = 255;

/// A seated player and their snapshot history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    name: String,
    history: PlayerStateHistory,
}

impl Player {
    fn new(id: PlayerId, name: String, opening: PlayerState) -> Self {
        let mut history = PlayerStateHistory::new();
        history.append(opening);
        Self { id, name, history }
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn history(&self) -> &PlayerStateHistory {
        &self.history
    }
}

/// Builder for creating a `Game`.
#[derive(Clone, Debug)]
pub struct GameBuilder {
    player_count: usize,
    config: RulesConfig,
    seed: u64,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self {
            player_count: 2,
            config: RulesConfig::default(),
            seed: 0,
        }
    }
}

impl GameBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn player_count(mut self, count: usize) -> Self {
        self.player_count = count;
        self
    }

    #[must_use]
    pub fn config(mut self, config: RulesConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Deal the opening table. Players are added afterwards.
    pub fn build(self) -> Result<Game> {
        self.config.check_player_count(self.player_count)?;

        let rng = GameRng::new(self.seed);
        let opening = GameState::setup(self.player_count, &self.config, &rng)?;
        let nobles = opening.nobles().len();

        let mut history = GameStateHistory::new();
        history.append(opening);

        tracing::info!(
            "New game: {} players, seed {}, {} nobles in play",
            self.player_count,
            self.seed,
            nobles
        );

        Ok(Game {
            names: rng.for_context("names"),
            config: self.config,
            player_count: self.player_count,
            players: Vec::with_capacity(self.player_count),
            history,
            current_player: PlayerId::new(0),
            round: 1,
            log: Vector::new(),
        })
    }
}

/// A game in progress.
///
/// Owns the table history and every player's history. Actions are
/// validated in full before either history changes; a committed action
/// appends one snapshot to the table history and one to the acting
/// player's history.
#[derive(Clone, Debug)]
pub struct Game {
    config: RulesConfig,
    player_count: usize,
    players: Vec<Player>,
    history: GameStateHistory,
    names: GameRng,
    current_player: PlayerId,
    round: u32,
    log: Vector<ActionRecord>,
}

impl Game {
    /// A game for `player_count` players under the standard rules.
    pub fn new(player_count: usize, seed: u64) -> Result<Self> {
        GameBuilder::new().player_count(player_count).seed(seed).build()
    }

    // === Setup ===

    /// Seat a player under `name` (trimmed).
    pub fn add_player(&mut self, name: &str) -> Result<PlayerId> {
        if self.players.len() >= self.player_count {
            return Err(GameError::TooManyPlayers {
                max: self.player_count,
            });
        }
        let name = name.trim();
        if name.is_empty() {
            return Err(GameError::InvalidPlayerName {
                reason: "name is empty",
            });
        }
        if name.chars().count() > MAX_NAME_LEN {
            return Err(GameError::InvalidPlayerName {
                reason: "name is longer than 255 characters",
            });
        }

        let id = PlayerId::new(self.players.len() as u8);
        self.players
            .push(Player::new(id, name.to_string(), PlayerState::empty(&self.config)));

        tracing::info!("{} joined as {}", name, id);
        Ok(id)
    }

    /// Seat a player under a generated `PLAYER_XXXXXXXX` name.
    pub fn add_random_player(&mut self) -> Result<PlayerId> {
        if self.players.len() >= self.player_count {
            return Err(GameError::TooManyPlayers {
                max: self.player_count,
            });
        }
        let name = format!(
            "{}{}",
            RANDOM_NAME_PREFIX,
            self.names.uppercase_letters(RANDOM_NAME_LETTERS)
        );
        self.add_player(&name)
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    /// Seats at the table, filled or not.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.player_count
    }

    /// Players seated so far, in turn order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, player: PlayerId) -> Result<&Player> {
        self.players
            .get(player.index())
            .ok_or(GameError::UnknownPlayer(player))
    }

    /// Whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    /// Current round, starting at 1.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Latest table snapshot.
    ///
    /// The table history starts with the opening deal and cannot be
    /// reverted below one entry.
    #[must_use]
    pub fn current_game_state(&self) -> &GameState {
        self.history
            .current()
            .expect("table history always holds the opening deal")
    }

    #[must_use]
    pub fn game_history(&self) -> &GameStateHistory {
        &self.history
    }

    /// Latest snapshot of `player`.
    pub fn player_state(&self, player: PlayerId) -> Result<&PlayerState> {
        let seat = self.player(player)?;
        seat.history
            .current()
            .ok_or(GameError::UnknownPlayer(player))
    }

    /// Every committed action, oldest first.
    pub fn action_log(&self) -> impl Iterator<Item = &ActionRecord> {
        self.log.iter()
    }

    // === Scoring ===

    /// Prestige from cards and nobles.
    pub fn current_score(&self, player: PlayerId) -> Result<u32> {
        Ok(self.player_state(player)?.score())
    }

    pub fn has_won(&self, player: PlayerId) -> Result<bool> {
        Ok(self.player_state(player)?.has_won(self.config.winning_score))
    }

    /// The outcome, once someone has reached the winning score and the
    /// round they did it in has been played out.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        if self.log.is_empty() || self.current_player != PlayerId::new(0) {
            return None;
        }
        let finished: Vec<(PlayerId, &PlayerState)> = self
            .players
            .iter()
            .filter_map(|p| p.history.current().map(|state| (p.id, state)))
            .collect();
        if !finished
            .iter()
            .any(|(_, state)| state.has_won(self.config.winning_score))
        {
            return None;
        }
        GameResult::decide(finished)
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.result().is_some()
    }

    // === Actions ===

    pub fn take_three_tokens(&mut self, player: PlayerId, colors: [Gem; 3]) -> Result<()> {
        self.apply(player, &Action::TakeThreeTokens(colors))
    }

    pub fn take_two_tokens(&mut self, player: PlayerId, gem: Gem) -> Result<()> {
        self.apply(player, &Action::TakeTwoTokens(gem))
    }

    pub fn reserve_card(&mut self, player: PlayerId, card: &DevelopmentCard) -> Result<()> {
        self.apply(player, &Action::ReserveCard(card.clone()))
    }

    pub fn reserve_hidden_card(&mut self, player: PlayerId, level: Level) -> Result<()> {
        self.apply(player, &Action::ReserveHiddenCard(level))
    }

    pub fn purchase_card(&mut self, player: PlayerId, card: &DevelopmentCard) -> Result<()> {
        self.apply(player, &Action::PurchaseCard(card.clone()))
    }

    pub fn purchase_reserved_card(
        &mut self,
        player: PlayerId,
        card: &DevelopmentCard,
    ) -> Result<()> {
        self.apply(player, &Action::PurchaseReservedCard(card.clone()))
    }

    /// Validate and commit `action` for `player`.
    ///
    /// On failure neither history changes and the turn does not pass.
    pub fn apply(&mut self, player: PlayerId, action: &Action) -> Result<()> {
        match self.check(player, action) {
            Ok(outcome) => {
                self.commit(player, action, outcome);
                Ok(())
            }
            Err(err) => {
                tracing::debug!("{} cannot {}: {}", player, action, err);
                Err(err)
            }
        }
    }

    /// What `action` would produce, without committing it.
    pub fn check(&self, player: PlayerId, action: &Action) -> Result<Outcome> {
        let state = self.player_state(player)?;
        self.ensure_seated()?;
        if self.config.enforce_turn_order && player != self.current_player {
            return Err(GameError::NotPlayersTurn {
                expected: self.current_player,
                actual: player,
            });
        }
        transitions::plan(&self.config, self.current_game_state(), state, action)
    }

    /// Actions `player` could take right now.
    pub fn legal_actions(&self, player: PlayerId) -> Result<Vec<Action>> {
        let state = self.player_state(player)?;
        self.ensure_seated()?;
        if self.config.enforce_turn_order && player != self.current_player {
            return Ok(Vec::new());
        }
        Ok(legal::legal_actions(&self.config, self.current_game_state(), state))
    }

    /// Play starts once every seat is filled.
    fn ensure_seated(&self) -> Result<()> {
        if self.players.len() < self.player_count {
            return Err(GameError::TableNotFull {
                seated: self.players.len(),
                seats: self.player_count,
            });
        }
        Ok(())
    }

    fn commit(&mut self, player: PlayerId, action: &Action, outcome: Outcome) {
        let Outcome {
            game,
            player: state,
            noble,
        } = outcome;

        self.history.append(game);
        if let Some(seat) = self.players.get_mut(player.index()) {
            seat.history.append(state);
        }

        let record = ActionRecord::new(player, action.clone(), self.round, self.log.len() as u32);
        self.log.push_back(record);

        tracing::debug!("Round {}: {} did {}", self.round, player, action);
        if let Some(noble) = noble {
            tracing::debug!("Noble {} visits {}", noble, player);
        }

        self.advance_turn(player);
    }

    /// Pass the turn to whoever sits after `player`.
    fn advance_turn(&mut self, player: PlayerId) {
        let next = player.next(self.player_count);
        if next.index() == 0 {
            self.round += 1;
        }
        self.current_player = next;
    }

    // === History ===

    /// Truncate the table history to its first `index` states.
    ///
    /// Player histories, the turn, and the action log are left alone.
    pub fn revert_game_history(&mut self, index: usize) -> Result<()> {
        self.history.revert(index)?;
        tracing::debug!("Game history reverted to state {}", index);
        Ok(())
    }

    /// Truncate `player`'s history to its first `index` states.
    pub fn revert_player_history(&mut self, player: PlayerId, index: usize) -> Result<()> {
        let seat = self
            .players
            .get_mut(player.index())
            .ok_or(GameError::UnknownPlayer(player))?;
        seat.history.revert(index)?;
        tracing::debug!("{} history reverted to state {}", player, index);
        Ok(())
    }
}
