//! Per-color token counts.
//!
//! Tokens of one color are interchangeable, so a collection is just six
//! counters. The same type stores the shared pool, a player's holdings,
//! card and noble costs, and per-color discounts.

use serde::{Deserialize, Serialize};

use crate::core::{GameError, Gem, Result};

/// Mapping from color to a non-negative count.
///
/// Removing more than is present fails; counts never clamp.
///
/// ```
/// use splendor_engine::core::Gem;
/// use splendor_engine::tokens::TokenCollection;
///
/// let mut pool = TokenCollection::new();
/// pool.add(Gem::Red, 2);
/// pool.remove(Gem::Red, 1).unwrap();
/// assert_eq!(pool.count_of(Gem::Red), 1);
/// assert!(pool.remove(Gem::Red, 5).is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenCollection {
    counts: [u32; Gem::COUNT],
}

impl TokenCollection {
    /// An empty collection.
    #[must_use]
    pub const fn new() -> Self {
        Self { counts: [0; Gem::COUNT] }
    }

    /// Build from `(color, count)` pairs. Repeated colors accumulate.
    #[must_use]
    pub fn from_pairs(pairs: &[(Gem, u32)]) -> Self {
        let mut collection = Self::new();
        for &(gem, n) in pairs {
            collection.add(gem, n);
        }
        collection
    }

    /// The shared pool a game starts with.
    #[must_use]
    pub fn starting_pool(per_color: u32, jokers: u32) -> Self {
        let mut pool = Self::new();
        for gem in Gem::COMMON {
            pool.add(gem, per_color);
        }
        pool.add(Gem::JOKER, jokers);
        pool
    }

    /// Add `n` tokens of a color.
    pub fn add(&mut self, gem: Gem, n: u32) {
        self.counts[gem.index()] += n;
    }

    /// Remove `n` tokens of a color, or fail without changing anything.
    pub fn remove(&mut self, gem: Gem, n: u32) -> Result<()> {
        let available = self.counts[gem.index()];
        if available < n {
            return Err(GameError::InsufficientQuantity { gem, requested: n, available });
        }
        self.counts[gem.index()] = available - n;
        Ok(())
    }

    /// Add every token of `other`.
    pub fn add_all(&mut self, other: &TokenCollection) {
        for gem in Gem::ALL {
            self.add(gem, other.count_of(gem));
        }
    }

    /// Remove every token of `other`, all or nothing.
    pub fn remove_all(&mut self, other: &TokenCollection) -> Result<()> {
        for gem in Gem::ALL {
            let requested = other.count_of(gem);
            let available = self.count_of(gem);
            if available < requested {
                return Err(GameError::InsufficientQuantity { gem, requested, available });
            }
        }
        for gem in Gem::ALL {
            self.counts[gem.index()] -= other.count_of(gem);
        }
        Ok(())
    }

    /// Total tokens across all colors.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// Tokens of one color.
    #[must_use]
    pub fn count_of(&self, gem: Gem) -> u32 {
        self.counts[gem.index()]
    }

    /// No tokens of this color?
    #[must_use]
    pub fn is_empty_of(&self, gem: Gem) -> bool {
        self.count_of(gem) == 0
    }

    /// No tokens at all?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Colors with a non-zero count, in table order.
    pub fn iter(&self) -> impl Iterator<Item = (Gem, u32)> + '_ {
        Gem::ALL
            .into_iter()
            .map(move |gem| (gem, self.count_of(gem)))
            .filter(|&(_, n)| n > 0)
    }

    /// Does every color meet the count required by `requirement`?
    #[must_use]
    pub fn covers(&self, requirement: &TokenCollection) -> bool {
        Gem::ALL
            .into_iter()
            .all(|gem| self.count_of(gem) >= requirement.count_of(gem))
    }
}

impl std::fmt::Display for TokenCollection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, (gem, n)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", gem, n)?;
        }
        write!(f, "}}")
    }
}
