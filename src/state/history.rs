//! Append-only snapshot histories with destructive revert.
//!
//! States are numbered from 1 for callers: state 1 is the first one
//! appended, and `current_index()` is the number of states held.
//! `revert(n)` keeps states `1..=n` and drops the rest; there is no redo.
//!
//! ```
//! use splendor_engine::state::History;
//!
//! let mut history = History::new();
//! history.append("a");
//! history.append("b");
//! history.append("c");
//!
//! history.revert(2).unwrap();
//! assert_eq!(history.current(), Some(&"b"));
//! assert_eq!(history.current_index(), 2);
//! ```

use im::Vector;
use serde::{Deserialize, Serialize};

use super::game_state::GameState;
use super::player_state::PlayerState;
use crate::core::{GameError, Result};

/// Ordered snapshots, oldest first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct History<T: Clone> {
    states: Vector<T>,
}

/// History of the shared table.
pub type GameStateHistory = History<GameState>;

/// History of a single player.
pub type PlayerStateHistory = History<PlayerState>;

impl<T: Clone> Default for History<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> History<T> {
    #[must_use]
    pub fn new() -> Self {
        Self { states: Vector::new() }
    }

    pub fn append(&mut self, state: T) {
        self.states.push_back(state);
    }

    /// The latest state, or `None` before anything is appended.
    #[must_use]
    pub fn current(&self) -> Option<&T> {
        self.states.last()
    }

    /// Number of states held; the 1-based index of `current()`.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.states.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// The state at 1-based `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        index.checked_sub(1).and_then(|i| self.states.get(i))
    }

    /// Keep the first `index` states and discard the rest.
    pub fn revert(&mut self, index: usize) -> Result<()> {
        if index == 0 || index > self.states.len() {
            return Err(GameError::InvalidHistoryIndex {
                requested: index,
                len: self.states.len(),
            });
        }
        self.states.truncate(index);
        Ok(())
    }

    /// Oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.states.iter()
    }
}
