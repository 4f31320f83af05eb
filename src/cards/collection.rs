//! Purchased cards and claimed nobles.
//!
//! Bought cards are grouped by bonus color; the size of each group is
//! that color's discount. Claimed nobles ride along here because they
//! count toward prestige the same way cards do.

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::card::DevelopmentCard;
use crate::core::Gem;
use crate::nobles::Noble;
use crate::tokens::TokenCollection;

/// A player's tableau.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DevelopmentCardCollection {
    by_color: FxHashMap<Gem, Vector<DevelopmentCard>>,
    nobles: Vector<Noble>,
}

impl DevelopmentCardCollection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, card: DevelopmentCard) {
        self.by_color.entry(card.color()).or_default().push_back(card);
    }

    /// Cards of one bonus color, in purchase order.
    pub fn cards_of(&self, gem: Gem) -> impl Iterator<Item = &DevelopmentCard> {
        self.by_color.get(&gem).into_iter().flat_map(|cards| cards.iter())
    }

    /// Cards of one bonus color.
    #[must_use]
    pub fn count_of(&self, gem: Gem) -> usize {
        self.by_color.get(&gem).map_or(0, Vector::len)
    }

    /// Total purchased cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_color.values().map(Vector::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0 && self.nobles.is_empty()
    }

    /// Discount on one color.
    #[must_use]
    pub fn discount(&self, gem: Gem) -> u32 {
        self.count_of(gem) as u32
    }

    /// Discounts on every common color.
    #[must_use]
    pub fn discounts(&self) -> TokenCollection {
        let mut discounts = TokenCollection::new();
        for gem in Gem::COMMON {
            discounts.add(gem, self.discount(gem));
        }
        discounts
    }

    pub fn claim_noble(&mut self, noble: Noble) {
        self.nobles.push_back(noble);
    }

    pub fn nobles(&self) -> impl Iterator<Item = &Noble> {
        self.nobles.iter()
    }

    /// Prestige from cards and nobles.
    #[must_use]
    pub fn prestige(&self) -> u32 {
        let cards: u32 = self
            .by_color
            .values()
            .flat_map(|cards| cards.iter())
            .map(DevelopmentCard::prestige)
            .sum();
        let nobles: u32 = self.nobles.iter().map(Noble::prestige).sum();
        cards + nobles
    }
}

impl std::fmt::Display for DevelopmentCardCollection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Dev cards on hand: {}", self.discounts())?;
        if !self.nobles.is_empty() {
            write!(f, ", nobles: {}", self.nobles.len())?;
        }
        Ok(())
    }
}
