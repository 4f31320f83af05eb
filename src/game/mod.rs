//! Game aggregate and the action layer.
//!
//! ## Key Types
//!
//! - `Game`: Owns the table history and every player's history
//! - `GameBuilder`: Player count, rules, and seed for a new game
//! - `Action`: The six moves a player can make
//! - `ActionRecord`: Entry in the append-only action log
//! - `GameResult`: Winner or shared victory
//!
//! Transitions live in `transitions` as pure functions over snapshots;
//! `Game` only commits what they return.

mod action;
#[allow(clippy::module_inception)]
mod game;
pub mod legal;
mod result;
pub mod transitions;

pub use action::{Action, ActionRecord};
pub use game::{Game, GameBuilder, Player, GAME_INTRO, MAX_NAME_LEN, RANDOM_NAME_PREFIX};
pub use result::GameResult;
pub use transitions::Outcome;
