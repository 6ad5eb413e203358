pub(crate) mod combinations;
pub(crate) mod rank_groups;
mod tables;

use crate::cards::{Card, Rank};
use crate::error::{InvalidState, Result};
use combinations::Combinations;
use std::fmt;

/// Compact, comparable hand strength. Higher is better; equal values are an
/// exact tie.
///
/// Layout (most significant -> least):
/// `[ category (4 bits) | r0 (4) | r1 (4) | r2 (4) | r3 (4) | r4 (4) ]`
/// where `r0..r4` are tiebreak ranks in significance order, zero-padded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandStrength(u32);

/// Poker hand category from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum Category {
    HighCard = 0,
    Pair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::HighCard,
        Category::Pair,
        Category::TwoPair,
        Category::ThreeOfAKind,
        Category::Straight,
        Category::Flush,
        Category::FullHouse,
        Category::FourOfAKind,
        Category::StraightFlush,
    ];

    pub const fn ordinal(self) -> u8 {
        self as u8
    }
}

impl HandStrength {
    const CAT_SHIFT: u32 = 20;
    const RANK_STRIDE: u32 = 4;

    /// Return the packed comparable value.
    pub const fn raw(self) -> u32 {
        self.0
    }

    pub fn category(self) -> Category {
        let ordinal = (self.0 >> Self::CAT_SHIFT) as usize;
        Category::ALL.get(ordinal).copied().unwrap_or(Category::HighCard)
    }

    /// Tiebreak ranks in significance order.
    pub fn tiebreaks(self) -> impl Iterator<Item = Rank> {
        (0..5).filter_map(move |i| {
            let shift = Self::CAT_SHIFT - Self::RANK_STRIDE * (i + 1);
            Rank::from_value(((self.0 >> shift) & 0xF) as u8)
        })
    }

    /// Pack a category and up to five tiebreak ranks (most significant first).
    pub(crate) fn from_parts<I>(category: Category, ranks: I) -> Self
    where
        I: IntoIterator<Item = Rank>,
    {
        let mut v = (category as u32) << Self::CAT_SHIFT;
        for (i, r) in ranks.into_iter().take(5).enumerate() {
            let offset = Self::CAT_SHIFT - Self::RANK_STRIDE * (i as u32 + 1);
            v |= (r.value() as u32) << offset;
        }
        HandStrength(v)
    }
}

impl fmt::Display for HandStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} (", self.category())?;
        for (i, r) in self.tiebreaks().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{r}")?;
        }
        write!(f, ")")
    }
}

/// Classify exactly five distinct cards.
///
/// ```
/// use poker_equity::cards::parse_cards;
/// use poker_equity::evaluator::{evaluate, Category};
///
/// let wheel = evaluate(&parse_cards("Ah 2c 3d 4s 5h").unwrap()).unwrap();
/// let six_high = evaluate(&parse_cards("2c 3d 4s 5h 6c").unwrap()).unwrap();
/// assert_eq!(wheel.category(), Category::Straight);
/// assert!(six_high > wheel);
/// ```
pub fn evaluate(cards: &[Card]) -> Result<HandStrength> {
    let five: &[Card; 5] =
        cards.try_into().map_err(|_| InvalidState::EvaluatorInput { found: cards.len() })?;
    let mut seen = 0u64;
    for &card in five {
        let bit = 1u64 << card.index();
        if seen & bit != 0 {
            return Err(InvalidState::DuplicateCard { card }.into());
        }
        seen |= bit;
    }
    Ok(evaluate_five(five))
}

/// Table-driven classification of five cards. No validation and no
/// allocation; the result for repeated cards is unspecified.
#[inline]
pub fn evaluate_five(cards: &[Card; 5]) -> HandStrength {
    let t = tables::tables();
    let [a, b, c, d, e] = (*cards).map(Card::bits);
    let rank_mask = ((a | b | c | d | e) >> 16) as usize;
    if a & b & c & d & e & 0xF000 != 0 {
        return t.flush(rank_mask);
    }
    if rank_mask.count_ones() == 5 {
        return t.unique(rank_mask);
    }
    let product = (a & 0xFF) * (b & 0xFF) * (c & 0xFF) * (d & 0xFF) * (e & 0xFF);
    t.paired(product)
}

/// Best five-card strength out of seven cards (all 21 subsets).
pub fn evaluate_seven(cards: &[Card; 7]) -> HandStrength {
    Combinations::<5>::new(7)
        .map(|[i, j, k, l, m]| evaluate_five(&[cards[i], cards[j], cards[k], cards[l], cards[m]]))
        .max()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{parse_cards, Suit};
    use crate::error::EquityError;

    fn five(s: &str) -> [Card; 5] {
        parse_cards(s).unwrap().try_into().unwrap()
    }

    #[test]
    fn wrong_card_count_errors() {
        let four = parse_cards("As Ks Qs Js").unwrap();
        let err = evaluate(&four).unwrap_err();
        assert_eq!(err, EquityError::InvalidState(InvalidState::EvaluatorInput { found: 4 }));
        let six = parse_cards("As Ks Qs Js Ts 9s").unwrap();
        assert!(evaluate(&six).is_err());
    }

    #[test]
    fn duplicate_cards_error() {
        let dup = parse_cards("As Ks Qs Js As").unwrap();
        let err = evaluate(&dup).unwrap_err();
        let card = Card::new(Rank::Ace, Suit::Spades);
        assert_eq!(err, EquityError::InvalidState(InvalidState::DuplicateCard { card }));
    }

    #[test]
    fn pair_kicker_breaks_tie() {
        let ace_kicker = evaluate_five(&five("Kh Kd Ac 7s 3h"));
        let queen_kicker = evaluate_five(&five("Ks Kc Qd 7h 3c"));
        assert_eq!(ace_kicker.category(), Category::Pair);
        assert!(ace_kicker > queen_kicker);
    }

    #[test]
    fn same_ranks_different_suits_tie() {
        let a = evaluate_five(&five("Kh Kd Ac 7s 3h"));
        let b = evaluate_five(&five("Ks Kc Ad 7h 3c"));
        assert_eq!(a, b);
    }

    #[test]
    fn strength_reports_tiebreaks() {
        let s = evaluate_five(&five("3c 3d 3h Js Jc"));
        assert_eq!(s.category(), Category::FullHouse);
        assert_eq!(s.tiebreaks().collect::<Vec<_>>(), vec![Rank::Three, Rank::Jack]);
        assert_eq!(s.to_string(), "FullHouse (3 J)");
    }

    #[test]
    fn seven_picks_best_subset() {
        let seven: [Card; 7] = parse_cards("As Ah Ks Qs Js Ts 9s").unwrap().try_into().unwrap();
        let s = evaluate_seven(&seven);
        assert_eq!(s.category(), Category::StraightFlush);
        assert_eq!(s.tiebreaks().next(), Some(Rank::Ace));
    }

    #[test]
    fn category_ladder_is_ordered() {
        let ladder = [
            "Ah Kd 7s 5c 2d",
            "Ah Ad Ts 9c 2d",
            "Jc Jd 9c 9h 2s",
            "Qc Qd Qh 9s 2c",
            "Ac 2d 3h 4s 5c",
            "Kh Th 8h 6h 3h",
            "Tc Td Th 2s 2h",
            "9c 9d 9h 9s Ac",
            "As Ks Qs Js Ts",
        ];
        let strengths: Vec<HandStrength> = ladder.iter().map(|s| evaluate_five(&five(s))).collect();
        for (s, cat) in strengths.iter().zip(Category::ALL) {
            assert_eq!(s.category(), cat);
        }
        assert!(strengths.windows(2).all(|w| w[0] < w[1]));
    }
}
