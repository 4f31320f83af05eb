//! Payment planning.
//!
//! Affordability and the actual debit come from one computation: the
//! plan lists exactly which tokens leave the payer, direct colors first
//! and jokers only for what those cannot cover. Jokers are fungible, so
//! the shortfall is summed across every color before comparing against
//! the joker count.

use serde::{Deserialize, Serialize};

use super::collection::TokenCollection;
use crate::core::Gem;

/// The exact tokens a purchase takes from the payer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpendPlan {
    tokens: TokenCollection,
}

impl SpendPlan {
    /// Tokens to debit, jokers included.
    #[must_use]
    pub fn tokens(&self) -> &TokenCollection {
        &self.tokens
    }

    /// Jokers standing in for missing colors.
    #[must_use]
    pub fn jokers_used(&self) -> u32 {
        self.tokens.count_of(Gem::JOKER)
    }

    /// Total tokens spent.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.tokens.count()
    }
}

/// Outcome of weighing a cost against holdings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Payment {
    /// The cost can be paid with this plan.
    Covered(SpendPlan),
    /// Jokers fall short by this many tokens.
    Short(u32),
}

/// Weigh `cost`, reduced by per-color `discounts`, against `owned` tokens.
#[must_use]
pub fn weigh_payment(
    owned: &TokenCollection,
    cost: &TokenCollection,
    discounts: &TokenCollection,
) -> Payment {
    let mut tokens = TokenCollection::new();
    let mut shortfall = 0;

    for gem in Gem::COMMON {
        let due = cost.count_of(gem).saturating_sub(discounts.count_of(gem));
        let direct = due.min(owned.count_of(gem));
        tokens.add(gem, direct);
        shortfall += due - direct;
    }

    let jokers = owned.count_of(Gem::JOKER);
    if shortfall > jokers {
        return Payment::Short(shortfall - jokers);
    }
    tokens.add(Gem::JOKER, shortfall);
    Payment::Covered(SpendPlan { tokens })
}

/// The spend plan for `cost`, or `None` if it cannot be paid.
#[must_use]
pub fn compute_spend(
    owned: &TokenCollection,
    cost: &TokenCollection,
    discounts: &TokenCollection,
) -> Option<SpendPlan> {
    match weigh_payment(owned, cost, discounts) {
        Payment::Covered(plan) => Some(plan),
        Payment::Short(_) => None,
    }
}
