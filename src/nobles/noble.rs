//! Noble tiles.

use serde::{Deserialize, Serialize};

use crate::core::Gem;
use crate::tokens::TokenCollection;

/// A noble, claimed by the first player whose card bonuses meet its cost.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Noble {
    prestige: u32,
    cost: TokenCollection,
}

impl Noble {
    /// Create a noble.
    ///
    /// Panics if the cost names the joker color.
    #[must_use]
    pub fn new(prestige: u32, cost: &[(Gem, u32)]) -> Self {
        assert!(
            cost.iter().all(|(gem, _)| !gem.is_joker()),
            "Noble cost cannot include the joker color"
        );
        Self {
            prestige,
            cost: TokenCollection::from_pairs(cost),
        }
    }

    #[must_use]
    pub fn prestige(&self) -> u32 {
        self.prestige
    }

    /// Card bonuses required, per color.
    #[must_use]
    pub fn cost(&self) -> &TokenCollection {
        &self.cost
    }

    /// Do these per-color discounts satisfy the noble?
    #[must_use]
    pub fn is_attracted_to(&self, discounts: &TokenCollection) -> bool {
        discounts.covers(&self.cost)
    }
}

impl std::fmt::Display for Noble {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "p{}/{}", self.prestige, self.cost)
    }
}
