//! Nobles and the set of nobles in play.

pub mod noble;
pub mod set;

pub use noble::Noble;
pub use set::NobleSet;
