//! Core vocabulary: gem colors, player seats, RNG, rule configuration, errors.
//!
//! Nothing here knows about cards or game state; every other module
//! builds on these types.

pub mod gem;
pub mod player;
pub mod rng;
pub mod config;
pub mod error;

pub use gem::Gem;
pub use player::PlayerId;
pub use rng::GameRng;
pub use config::RulesConfig;
pub use error::{ErrorKind, GameError, Result};
