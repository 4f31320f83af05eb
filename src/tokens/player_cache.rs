//! A player's tokens, with the hand ceiling.

use serde::{Deserialize, Serialize};

use super::collection::TokenCollection;
use super::spend::{weigh_payment, Payment, SpendPlan};
use crate::core::{GameError, Gem, Result};

/// Tokens held by one player.
///
/// The ceiling is not enforced by `add`; the transition layer checks
/// `space_remaining` before granting tokens, so `is_over_max` only
/// turns true if a caller bypasses it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerTokenCache {
    tokens: TokenCollection,
    limit: u32,
}

impl PlayerTokenCache {
    /// An empty cache with the given ceiling.
    #[must_use]
    pub const fn new(limit: u32) -> Self {
        Self {
            tokens: TokenCollection::new(),
            limit,
        }
    }

    /// A cache already holding `tokens`.
    #[must_use]
    pub const fn with_tokens(tokens: TokenCollection, limit: u32) -> Self {
        Self { tokens, limit }
    }

    /// The underlying counts.
    #[must_use]
    pub fn tokens(&self) -> &TokenCollection {
        &self.tokens
    }

    /// The ceiling.
    #[must_use]
    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn add(&mut self, gem: Gem, n: u32) {
        self.tokens.add(gem, n);
    }

    pub fn remove(&mut self, gem: Gem, n: u32) -> Result<()> {
        self.tokens.remove(gem, n)
    }

    #[must_use]
    pub fn count(&self) -> u32 {
        self.tokens.count()
    }

    #[must_use]
    pub fn count_of(&self, gem: Gem) -> u32 {
        self.tokens.count_of(gem)
    }

    #[must_use]
    pub fn is_at_max(&self) -> bool {
        self.count() >= self.limit
    }

    #[must_use]
    pub fn is_over_max(&self) -> bool {
        self.count() > self.limit
    }

    /// Tokens that can still be taken before hitting the ceiling.
    #[must_use]
    pub fn space_remaining(&self) -> u32 {
        self.limit.saturating_sub(self.count())
    }

    /// Fail with `PlayerCacheFull` unless `n` more tokens fit.
    pub fn ensure_space(&self, n: u32) -> Result<()> {
        if self.space_remaining() < n {
            return Err(GameError::PlayerCacheFull {
                held: self.count(),
                limit: self.limit,
                requested: n,
            });
        }
        Ok(())
    }

    /// Can these tokens alone pay `cost`?
    #[must_use]
    pub fn can_afford(&self, cost: &TokenCollection) -> bool {
        self.spend_plan(cost, &TokenCollection::new()).is_ok()
    }

    /// The exact tokens that would pay `cost` after `discounts`.
    pub fn spend_plan(
        &self,
        cost: &TokenCollection,
        discounts: &TokenCollection,
    ) -> Result<SpendPlan> {
        match weigh_payment(&self.tokens, cost, discounts) {
            Payment::Covered(plan) => Ok(plan),
            Payment::Short(shortfall) => Err(GameError::InsufficientFunds { shortfall }),
        }
    }

    /// Pay `cost` after `discounts`, returning the tokens spent.
    ///
    /// Nothing is removed unless the whole cost is covered.
    pub fn purchase(
        &mut self,
        cost: &TokenCollection,
        discounts: &TokenCollection,
    ) -> Result<SpendPlan> {
        let plan = self.spend_plan(cost, discounts)?;
        self.tokens.remove_all(plan.tokens())?;
        Ok(plan)
    }
}

impl std::fmt::Display for PlayerTokenCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}/{})", self.tokens, self.count(), self.limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cache(pairs: &[(Gem, u32)]) -> PlayerTokenCache {
        PlayerTokenCache::with_tokens(TokenCollection::from_pairs(pairs), 10)
    }

    #[test]
    fn test_ceiling_queries() {
        let mut tokens = cache(&[(Gem::Red, 8)]);
        assert_eq!(tokens.space_remaining(), 2);
        assert!(!tokens.is_at_max());

        tokens.add(Gem::Blue, 2);
        assert!(tokens.is_at_max());
        assert!(!tokens.is_over_max());
        assert_eq!(tokens.space_remaining(), 0);

        tokens.add(Gem::Blue, 1);
        assert!(tokens.is_over_max());
        assert_eq!(tokens.space_remaining(), 0);
    }

    #[test]
    fn test_ensure_space() {
        let tokens = cache(&[(Gem::Green, 8)]);
        assert!(tokens.ensure_space(2).is_ok());
        assert_eq!(
            tokens.ensure_space(3),
            Err(GameError::PlayerCacheFull { held: 8, limit: 10, requested: 3 })
        );
    }

    #[test]
    fn test_purchase_with_joker() {
        let mut tokens = cache(&[(Gem::Black, 2), (Gem::Yellow, 1)]);
        let cost = TokenCollection::from_pairs(&[(Gem::Black, 3)]);

        assert!(tokens.can_afford(&cost));
        tokens.purchase(&cost, &TokenCollection::new()).unwrap();

        assert_eq!(tokens.count_of(Gem::Black), 0);
        assert_eq!(tokens.count_of(Gem::Yellow), 0);
    }

    #[test]
    fn test_failed_purchase_spends_nothing() {
        let mut tokens = cache(&[(Gem::Black, 1), (Gem::Yellow, 1)]);
        let cost = TokenCollection::from_pairs(&[(Gem::Black, 3)]);

        assert!(!tokens.can_afford(&cost));
        assert_eq!(
            tokens.purchase(&cost, &TokenCollection::new()),
            Err(GameError::InsufficientFunds { shortfall: 1 })
        );
        assert_eq!(tokens.count(), 2);
    }
}
