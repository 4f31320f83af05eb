//! # splendor-engine
//!
//! Rules engine for the Splendor board game.
//!
//! ## Design Principles
//!
//! 1. **Snapshots, not mutation**: A state placed in history is never
//!    changed. Every action derives new snapshots from the current ones.
//!
//! 2. **Validate, then commit**: An action checks every rule before the
//!    table or player history moves. Errors leave the game untouched.
//!
//! 3. **Values, not identities**: Cards and nobles compare by value.
//!    Removing a card removes the first equal one.
//!
//! ## Architecture
//!
//! - **Two histories**: The table and each player keep independent,
//!   revertible snapshot histories.
//!
//! - **Persistent Data Structures**: Cheap snapshot cloning via `im-rs`.
//!
//! - **Seeded randomness**: One seed fixes deck order, the noble draw,
//!   and generated player names.
//!
//! ## Modules
//!
//! - `core`: Gems, players, RNG, rules configuration, errors
//! - `tokens`: Token pools, player caches, payment planning
//! - `cards`: Development cards, decks, reserves, the card catalog
//! - `nobles`: Nobles and the nobles in play
//! - `state`: Table and player snapshots, histories
//! - `game`: The game aggregate, actions, legal moves, results

pub mod core;
pub mod tokens;
pub mod cards;
pub mod nobles;
pub mod state;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    Gem, PlayerId,
    GameRng,
    RulesConfig,
    ErrorKind, GameError, Result,
};

pub use crate::tokens::{
    TokenCollection, PlayerTokenCache,
    SpendPlan, Payment, compute_spend, weigh_payment,
};

pub use crate::cards::{
    DevelopmentCard, DevelopmentCardCollection, Level,
    Deck, Facing, Reserve, FACING_CARDS,
};

pub use crate::nobles::{Noble, NobleSet};

pub use crate::state::{GameState, PlayerState, History, GameStateHistory, PlayerStateHistory};

pub use crate::game::{
    Game, GameBuilder, Player,
    Action, ActionRecord, GameResult, Outcome,
    GAME_INTRO,
};
