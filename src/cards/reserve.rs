//! Cards a player holds but has not yet bought.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::card::DevelopmentCard;
use crate::core::{GameError, Result};

/// Bounded list of reserved cards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reserve {
    cards: Vector<DevelopmentCard>,
    limit: usize,
}

impl Reserve {
    /// An empty reserve holding at most `limit` cards.
    #[must_use]
    pub fn new(limit: usize) -> Self {
        Self {
            cards: Vector::new(),
            limit,
        }
    }

    #[must_use]
    pub fn limit(&self) -> usize {
        self.limit
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cards.len() >= self.limit
    }

    /// Fail with `ReserveFull` if no slot is free.
    pub fn ensure_space(&self) -> Result<()> {
        if self.is_full() {
            return Err(GameError::ReserveFull { limit: self.limit });
        }
        Ok(())
    }

    pub fn add(&mut self, card: DevelopmentCard) -> Result<()> {
        self.ensure_space()?;
        self.cards.push_back(card);
        Ok(())
    }

    #[must_use]
    pub fn contains(&self, card: &DevelopmentCard) -> bool {
        self.cards.iter().any(|c| c == card)
    }

    /// Remove the first card equal to `card`.
    pub fn remove(&mut self, card: &DevelopmentCard) -> Result<DevelopmentCard> {
        let index = self
            .cards
            .iter()
            .position(|c| c == card)
            .ok_or_else(|| GameError::CardNotFound { card: card.to_string() })?;
        Ok(self.cards.remove(index))
    }

    pub fn iter(&self) -> impl Iterator<Item = &DevelopmentCard> {
        self.cards.iter()
    }
}
