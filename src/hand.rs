use crate::cards::{parse_cards, Card};
use crate::error::{EquityError, InvalidState, Result};
use crate::variants::Variant;
use std::fmt;
use std::str::FromStr;

/// One player's hole cards, in the order supplied.
///
/// A hand only guarantees its cards are distinct; whether the count fits a
/// variant is checked where the variant is known.
///
/// ```
/// use poker_equity::hand::Hand;
///
/// let hand: Hand = "Ah Kh".parse().unwrap();
/// assert_eq!(hand.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn try_new(cards: Vec<Card>) -> Result<Self> {
        ensure_distinct(&cards)?;
        Ok(Self { cards })
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl FromStr for Hand {
    type Err = EquityError;
    fn from_str(s: &str) -> Result<Self> {
        Hand::try_new(parse_cards(s)?)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.cards.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

/// The five shared cards of one deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Community([Card; 5]);

impl Community {
    pub fn try_new(cards: &[Card]) -> Result<Self> {
        let five: [Card; 5] =
            cards.try_into().map_err(|_| InvalidState::CommunitySize { found: cards.len() })?;
        ensure_distinct(&five)?;
        Ok(Self(five))
    }

    pub fn as_array(&self) -> &[Card; 5] {
        &self.0
    }
}

impl FromStr for Community {
    type Err = EquityError;
    fn from_str(s: &str) -> Result<Self> {
        Community::try_new(&parse_cards(s)?)
    }
}

/// Reject any card that appears twice in `cards`.
pub(crate) fn ensure_distinct(cards: &[Card]) -> Result<()> {
    let mut seen = 0u64;
    for &card in cards {
        let bit = 1u64 << card.index();
        if seen & bit != 0 {
            return Err(InvalidState::DuplicateCard { card }.into());
        }
        seen |= bit;
    }
    Ok(())
}

/// Turn per-player card-label sequences (as produced by a card detector) into
/// hands for `variant`.
///
/// Every sequence must be non-empty and of even length. The first two (or
/// four) labels form the hand; anything after that is ignored.
///
/// ```
/// use poker_equity::hand::hands_from_labels;
/// use poker_equity::variants::Variant;
///
/// let hands = hands_from_labels(&[vec!["Ah", "Kh"], vec!["10s", "9s"]], Variant::TwoHoleCard).unwrap();
/// assert_eq!(hands[1].to_string(), "Ts 9s");
/// ```
pub fn hands_from_labels<L, S>(labels: &[L], variant: Variant) -> Result<Vec<Hand>>
where
    L: AsRef<[S]>,
    S: AsRef<str>,
{
    let need = variant.hole_cards();
    labels
        .iter()
        .enumerate()
        .map(|(hand, seq)| -> Result<Hand> {
            let seq = seq.as_ref();
            if seq.is_empty() || seq.len() % 2 != 0 {
                return Err(InvalidState::IncompleteLabels { hand, found: seq.len() }.into());
            }
            if seq.len() < need {
                return Err(InvalidState::HandSize { hand, expected: need, found: seq.len() }.into());
            }
            let cards = seq[..need]
                .iter()
                .map(|s| s.as_ref().parse::<Card>())
                .collect::<std::result::Result<Vec<_>, _>>()?;
            Hand::try_new(cards)
        })
        .collect()
}
