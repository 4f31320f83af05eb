//! Nobles still on the table.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::noble::Noble;
use crate::core::{GameError, Result};
use crate::tokens::TokenCollection;

/// Nobles available to be claimed. Only ever shrinks.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NobleSet {
    nobles: Vector<Noble>,
}

impl NobleSet {
    #[must_use]
    pub fn new(nobles: impl IntoIterator<Item = Noble>) -> Self {
        Self {
            nobles: nobles.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nobles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nobles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Noble> {
        self.nobles.iter()
    }

    /// Position of the first noble equal to `noble`.
    #[must_use]
    pub fn find(&self, noble: &Noble) -> Option<usize> {
        self.nobles.iter().position(|n| n == noble)
    }

    pub fn pop_by_index(&mut self, index: usize) -> Result<Noble> {
        if index >= self.nobles.len() {
            return Err(GameError::IndexOutOfRange { index, len: self.nobles.len() });
        }
        Ok(self.nobles.remove(index))
    }

    /// Remove the first noble equal to `noble`.
    pub fn remove(&mut self, noble: &Noble) -> Result<Noble> {
        let index = self
            .find(noble)
            .ok_or_else(|| GameError::NobleNotFound { noble: noble.to_string() })?;
        self.pop_by_index(index)
    }

    /// First noble, in table order, that these discounts attract.
    #[must_use]
    pub fn first_attracted(&self, discounts: &TokenCollection) -> Option<usize> {
        self.nobles.iter().position(|n| n.is_attracted_to(discounts))
    }
}
