//! Card system: development cards, decks, reserves, tableaus.
//!
//! ## Key Types
//!
//! - `Level`: Deck tier (1-3)
//! - `DevelopmentCard`: Immutable card value with structural equality
//! - `Deck`: One level's face-up row and face-down pile
//! - `Reserve`: Cards a player holds but has not bought
//! - `DevelopmentCardCollection`: Purchased cards by color, plus claimed nobles
//! - `catalog`: The fixed card and noble pools

pub mod card;
pub mod catalog;
pub mod collection;
pub mod deck;
pub mod reserve;

pub use card::{DevelopmentCard, Level};
pub use collection::DevelopmentCardCollection;
pub use deck::{Deck, Facing, FACING_CARDS};
pub use reserve::Reserve;
