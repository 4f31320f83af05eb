//! Rule violations reported by the engine.
//!
//! Every failure is synchronous, typed, and leaves game state untouched.

use super::gem::Gem;
use super::player::PlayerId;
use crate::cards::Level;

/// Engine result type.
pub type Result<T> = std::result::Result<T, GameError>;

/// Broad cause of a [`GameError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum ErrorKind {
    /// Game or player setup was rejected.
    Setup,
    /// Malformed caller input (unknown color, wrong turn).
    Input,
    /// The shared token pool cannot cover the request.
    Pool,
    /// A player-owned container is at its ceiling.
    PlayerCapacity,
    /// A card, noble, index, or deck position does not exist.
    Lookup,
    /// The player cannot pay for a card.
    Affordability,
    /// A revert index is outside the recorded history.
    History,
}

/// A rejected operation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("player count must be between {min} and {max}, got {requested}")]
    InvalidPlayerCount { requested: usize, min: usize, max: usize },

    #[error("game already has all {max} players")]
    TooManyPlayers { max: usize },

    #[error("only {seated} of {seats} seats are filled")]
    TableNotFull { seated: usize, seats: usize },

    #[error("no such player: {0}")]
    UnknownPlayer(PlayerId),

    #[error("invalid player name: {reason}")]
    InvalidPlayerName { reason: &'static str },

    #[error("it is {expected}'s turn, not {actual}'s")]
    NotPlayersTurn { expected: PlayerId, actual: PlayerId },

    #[error("unknown color '{name}'")]
    UnknownColor { name: String },

    #[error("chosen colors must all differ ({0} repeated)")]
    DuplicateColor(Gem),

    #[error("joker tokens cannot be taken directly")]
    JokerNotAllowed,

    #[error("no {0} tokens left in the pool")]
    PoolExhausted(Gem),

    #[error("pool holds {available} {gem} tokens, at least {required} needed to take two")]
    StackTooLowForPairTake { gem: Gem, available: u32, required: u32 },

    #[error("player holds {held} of {limit} tokens, cannot take {requested} more")]
    PlayerCacheFull { held: u32, limit: u32, requested: u32 },

    #[error("reserve already holds {limit} cards")]
    ReserveFull { limit: usize },

    #[error("cannot remove {requested} {gem} tokens, only {available} present")]
    InsufficientQuantity { gem: Gem, requested: u32, available: u32 },

    #[error("card {card} not found")]
    CardNotFound { card: String },

    #[error("noble {noble} not found")]
    NobleNotFound { noble: String },

    #[error("index {index} out of range for {len} entries")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("level {level} deck has no face-down card left ({remaining} cards remain)")]
    DeckExhausted { level: Level, remaining: usize },

    #[error("cannot afford card: short by {shortfall} tokens after using jokers")]
    InsufficientFunds { shortfall: u32 },

    #[error("history index {requested} invalid, history holds {len} states")]
    InvalidHistoryIndex { requested: usize, len: usize },
}

impl GameError {
    /// Which part of the rules this error comes from.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            GameError::InvalidPlayerCount { .. }
            | GameError::TooManyPlayers { .. }
            | GameError::InvalidPlayerName { .. }
            | GameError::TableNotFull { .. } => ErrorKind::Setup,
            GameError::UnknownPlayer(_)
            | GameError::NotPlayersTurn { .. }
            | GameError::UnknownColor { .. }
            | GameError::DuplicateColor(_)
            | GameError::JokerNotAllowed => ErrorKind::Input,
            GameError::PoolExhausted(_)
            | GameError::StackTooLowForPairTake { .. }
            | GameError::InsufficientQuantity { .. } => ErrorKind::Pool,
            GameError::PlayerCacheFull { .. } | GameError::ReserveFull { .. } => {
                ErrorKind::PlayerCapacity
            }
            GameError::CardNotFound { .. }
            | GameError::NobleNotFound { .. }
            | GameError::IndexOutOfRange { .. }
            | GameError::DeckExhausted { .. } => ErrorKind::Lookup,
            GameError::InsufficientFunds { .. } => ErrorKind::Affordability,
            GameError::InvalidHistoryIndex { .. } => ErrorKind::History,
        }
    }
}
