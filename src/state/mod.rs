//! Immutable snapshots and their histories.
//!
//! ## GameState
//!
//! The table: three decks, nobles in play, the shared token pool.
//!
//! ## PlayerState
//!
//! One player's tokens, purchased cards, and reserve.
//!
//! ## History
//!
//! Append-only sequence of snapshots with revert-to-index. The game and
//! each player keep independent histories.

pub mod game_state;
pub mod history;
pub mod player_state;

pub use game_state::GameState;
pub use history::{GameStateHistory, History, PlayerStateHistory};
pub use player_state::PlayerState;
