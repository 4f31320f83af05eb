//! Token bookkeeping: counted collections, player caches, payment plans.
//!
//! ## Key Types
//!
//! - `TokenCollection`: per-color counts (pool, holdings, costs, discounts)
//! - `PlayerTokenCache`: a player's holdings with the hand ceiling
//! - `SpendPlan`: the exact tokens a purchase debits

pub mod collection;
pub mod player_cache;
pub mod spend;

pub use collection::TokenCollection;
pub use player_cache::PlayerTokenCache;
pub use spend::{compute_spend, weigh_payment, Payment, SpendPlan};
