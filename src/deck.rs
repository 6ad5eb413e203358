use crate::cards::Card;
use crate::error::{EquityError, InvalidState, Result};
use rand::Rng;

/// The standard 52-card deck minus any excluded cards.
///
/// A deck is meant to serve one trial: draws remove cards permanently, so a
/// new trial starts from a fresh deck (or a clone of a pristine one).
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// ```
    /// use poker_equity::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), 52);
    /// ```
    pub fn standard() -> Self {
        Self { cards: Card::all().collect() }
    }

    /// Build the 52-card deck without `excluded`.
    ///
    /// ```
    /// use poker_equity::cards::parse_cards;
    /// use poker_equity::deck::Deck;
    ///
    /// let deck = Deck::new_excluding(&parse_cards("Ah Kh").unwrap()).unwrap();
    /// assert_eq!(deck.len(), 50);
    /// ```
    pub fn new_excluding(excluded: &[Card]) -> Result<Self> {
        if excluded.len() > 52 {
            return Err(InvalidState::TooManyExcluded { found: excluded.len() }.into());
        }
        let mut used = 0u64;
        for &card in excluded {
            let bit = 1u64 << card.index();
            if used & bit != 0 {
                return Err(InvalidState::DuplicateCard { card }.into());
            }
            used |= bit;
        }
        let cards = Card::all().filter(|c| used & (1u64 << c.index()) == 0).collect();
        Ok(Self { cards })
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Remove and return one card chosen uniformly at random.
    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Card> {
        if self.cards.is_empty() {
            return Err(EquityError::InsufficientCards { requested: 1, remaining: 0 });
        }
        let i = rng.random_range(0..self.cards.len());
        Ok(self.cards.swap_remove(i))
    }

    /// Remove and return `n` cards chosen uniformly at random without replacement.
    /// Fails without touching the deck if fewer than `n` cards remain.
    pub fn draw_n<R: Rng + ?Sized>(&mut self, n: usize, rng: &mut R) -> Result<Vec<Card>> {
        if n > self.cards.len() {
            return Err(EquityError::InsufficientCards { requested: n, remaining: self.cards.len() });
        }
        let mut out = Vec::with_capacity(n);
        for _ in 0..n {
            let i = rng.random_range(0..self.cards.len());
            out.push(self.cards.swap_remove(i));
        }
        Ok(out)
    }
}
