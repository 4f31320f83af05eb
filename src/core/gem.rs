//! Gem colors and the joker.
//!
//! Splendor has five common gem colors and one joker color (gold).
//! Tokens and card costs are counted per color, so `Gem` doubles as
//! the index into every per-color table in the engine.

use serde::{Deserialize, Serialize};

use super::error::GameError;

/// One of the six token colors.
///
/// `Yellow` is the joker: it can stand in for any common color when
/// paying, but no cost ever asks for it directly.
///
/// ```
/// use splendor_engine::core::Gem;
///
/// let gem: Gem = "Black".parse().unwrap();
/// assert_eq!(gem, Gem::Black);
/// assert_eq!(gem.long_description(), "black (onyx)");
/// assert!(Gem::Yellow.is_joker());
/// ```
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Gem {
    Black,
    Blue,
    Green,
    Red,
    White,
    Yellow,
}

impl Gem {
    /// Number of colors, joker included.
    pub const COUNT: usize = 6;

    /// All colors in table order.
    pub const ALL: [Gem; Gem::COUNT] = [
        Gem::Black,
        Gem::Blue,
        Gem::Green,
        Gem::Red,
        Gem::White,
        Gem::Yellow,
    ];

    /// The five colors a cost or discount can name.
    pub const COMMON: [Gem; 5] = [Gem::Black, Gem::Blue, Gem::Green, Gem::Red, Gem::White];

    /// The joker color.
    pub const JOKER: Gem = Gem::Yellow;

    /// Position of this color in per-color tables.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Is this the wildcard color?
    #[must_use]
    pub const fn is_joker(self) -> bool {
        matches!(self, Gem::Yellow)
    }

    /// Name of the gem printed on tokens of this color.
    #[must_use]
    pub const fn gem_name(self) -> &'static str {
        match self {
            Gem::Black => "onyx",
            Gem::Blue => "sapphire",
            Gem::Green => "emerald",
            Gem::Red => "ruby",
            Gem::White => "diamond",
            Gem::Yellow => "gold",
        }
    }

    /// Color followed by gem name, e.g. `black (onyx)`.
    #[must_use]
    pub fn long_description(self) -> String {
        format!("{} ({})", self, self.gem_name())
    }

    /// Parse a color name, reporting unknown names as a rule error.
    pub fn parse_color(name: &str) -> Result<Self, GameError> {
        name.trim()
            .parse()
            .map_err(|_| GameError::UnknownColor { name: name.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_table_order_matches_index() {
        for (i, gem) in Gem::ALL.iter().enumerate() {
            assert_eq!(gem.index(), i);
        }
        assert_eq!(Gem::iter().count(), Gem::COUNT);
    }

    #[test]
    fn test_only_yellow_is_joker() {
        assert!(Gem::JOKER.is_joker());
        assert!(Gem::COMMON.iter().all(|g| !g.is_joker()));
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(Gem::parse_color("red").unwrap(), Gem::Red);
        assert_eq!(Gem::parse_color(" WHITE ").unwrap(), Gem::White);
        assert_eq!(Gem::parse_color("Yellow").unwrap(), Gem::Yellow);
    }

    #[test]
    fn test_parse_unknown_color() {
        let err = Gem::parse_color("purple").unwrap_err();
        assert_eq!(err, GameError::UnknownColor { name: "purple".into() });
    }

    #[test]
    fn test_descriptions() {
        assert_eq!(Gem::Blue.to_string(), "blue");
        assert_eq!(Gem::White.long_description(), "white (diamond)");
        assert_eq!(Gem::Yellow.gem_name(), "gold");
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Gem::Green).unwrap();
        assert_eq!(json, "\"green\"");
        let back: Gem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Gem::Green);
    }
}
