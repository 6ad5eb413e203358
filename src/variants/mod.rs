//! Game variants: how many hole cards a player holds and how they combine
//! with the community to form the best five-card hand.

pub mod holdem;
pub mod omaha;

use crate::cards::Card;
use crate::error::{InvalidState, Result};
use crate::evaluator::HandStrength;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Texas Hold'em: best five of two hole + five community cards.
    #[default]
    TwoHoleCard,
    /// Omaha: exactly two of four hole cards with exactly three community cards.
    FourHoleCard,
}

impl Variant {
    pub const fn hole_cards(self) -> usize {
        match self {
            Variant::TwoHoleCard => 2,
            Variant::FourHoleCard => 4,
        }
    }

    pub const fn tag(self) -> &'static str {
        match self {
            Variant::TwoHoleCard => "texas_holdem",
            Variant::FourHoleCard => "omaha",
        }
    }

    /// Best strength `hole` can make with `community` under this variant's rules.
    /// `hand` is the seat index reported if `hole` has the wrong size.
    ///
    /// ```
    /// use poker_equity::cards::parse_cards;
    /// use poker_equity::evaluator::Category;
    /// use poker_equity::hand::Community;
    /// use poker_equity::variants::Variant;
    ///
    /// let board: Community = "Kc Kd Kh 2c 2d".parse().unwrap();
    /// let hole = parse_cards("2h 2s Ac 9d").unwrap();
    /// let s = Variant::FourHoleCard.best_strength(0, &hole, board.as_array()).unwrap();
    /// assert_eq!(s.category(), Category::FourOfAKind);
    /// ```
    pub fn best_strength(
        self,
        hand: usize,
        hole: &[Card],
        community: &[Card; 5],
    ) -> Result<HandStrength> {
        let wrong_size =
            || InvalidState::HandSize { hand, expected: self.hole_cards(), found: hole.len() };
        match self {
            Variant::TwoHoleCard => {
                let hole = hole.try_into().map_err(|_| wrong_size())?;
                Ok(holdem::best_strength(hole, community))
            }
            Variant::FourHoleCard => {
                let hole = hole.try_into().map_err(|_| wrong_size())?;
                Ok(omaha::best_strength(hole, community))
            }
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum VariantParseError {
    #[error("unknown variant: '{0}'")]
    Unknown(String),
}

impl FromStr for Variant {
    type Err = VariantParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "texas_holdem" | "holdem" | "two_hole_card" => Ok(Variant::TwoHoleCard),
            "omaha" | "four_hole_card" => Ok(Variant::FourHoleCard),
            _ => Err(VariantParseError::Unknown(s.to_string())),
        }
    }
}
