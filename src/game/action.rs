//! Player actions and the action log.
//!
//! An `Action` is a fully resolved request: colors are already parsed
//! into `Gem`s and cards are named by value. Cards have no identity of
//! their own, so `ReserveCard(card)` targets the first face-up card
//! equal to `card`.

use serde::{Deserialize, Serialize};

use crate::cards::{DevelopmentCard, Level};
use crate::core::{Gem, PlayerId};

/// One turn's worth of play.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// One token each of three different colors.
    TakeThreeTokens([Gem; 3]),
    /// Two tokens of one color.
    TakeTwoTokens(Gem),
    /// Reserve a face-up card and take a joker.
    ReserveCard(DevelopmentCard),
    /// Reserve the top face-down card of a level and take a joker.
    ReserveHiddenCard(Level),
    /// Buy a face-up card.
    PurchaseCard(DevelopmentCard),
    /// Buy a card from the player's own reserve.
    PurchaseReservedCard(DevelopmentCard),
}

impl Action {
    /// Does this action add a card to the player's tableau?
    #[must_use]
    pub fn is_purchase(&self) -> bool {
        matches!(self, Action::PurchaseCard(_) | Action::PurchaseReservedCard(_))
    }

    /// Does this action put a card into the player's reserve?
    #[must_use]
    pub fn is_reserve(&self) -> bool {
        matches!(self, Action::ReserveCard(_) | Action::ReserveHiddenCard(_))
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::TakeThreeTokens([a, b, c]) => write!(f, "take {}, {}, {}", a, b, c),
            Action::TakeTwoTokens(gem) => write!(f, "take two {}", gem),
            Action::ReserveCard(card) => write!(f, "reserve {}", card),
            Action::ReserveHiddenCard(level) => write!(f, "reserve hidden level {}", level),
            Action::PurchaseCard(card) => write!(f, "purchase {}", card),
            Action::PurchaseReservedCard(card) => write!(f, "purchase reserved {}", card),
        }
    }
}

/// A committed action.
///
/// The log is append-only and is not rewound by history reverts, so
/// it doubles as an audit trail.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Who acted.
    pub player: PlayerId,

    /// What they did.
    pub action: Action,

    /// Round the action was taken in (1-based).
    pub round: u32,

    /// Position in the log.
    pub sequence: u32,
}

impl ActionRecord {
    #[must_use]
    pub fn new(player: PlayerId, action: Action, round: u32, sequence: u32) -> Self {
        Self {
            player,
            action,
            round,
            sequence,
        }
    }
}
