use poker_equity::cards::{Card, Rank::*, Suit::*};
use poker_equity::evaluator::Category;
use poker_equity::variants::holdem::best_strength;

#[test]
fn pair_beats_lower_pair() {
    let board = [
        Card::new(Ace, Clubs),
        Card::new(Nine, Diamonds),
        Card::new(Four, Spades),
        Card::new(Two, Hearts),
        Card::new(Six, Clubs),
    ];
    let a = best_strength(&[Card::new(King, Spades), Card::new(King, Hearts)], &board);
    let b = best_strength(&[Card::new(Queen, Clubs), Card::new(Queen, Hearts)], &board);
    assert!(a > b, "Higher pair should beat lower pair");
}

#[test]
fn pair_kicker_breaks_ties() {
    let board = [
        Card::new(King, Clubs),
        Card::new(Nine, Diamonds),
        Card::new(Four, Spades),
        Card::new(Two, Hearts),
        Card::new(Six, Clubs),
    ];
    let a = best_strength(&[Card::new(King, Spades), Card::new(Ace, Diamonds)], &board);
    let b = best_strength(&[Card::new(King, Hearts), Card::new(Queen, Diamonds)], &board);
    assert!(a > b, "Pair with higher kicker should win");
}

#[test]
fn two_pair_ordering_high_then_low() {
    let board = [
        Card::new(King, Clubs),
        Card::new(Nine, Diamonds),
        Card::new(Four, Spades),
        Card::new(Two, Hearts),
        Card::new(Ace, Clubs),
    ];
    let a = best_strength(&[Card::new(King, Spades), Card::new(Nine, Clubs)], &board);
    let b = best_strength(&[Card::new(King, Hearts), Card::new(Two, Diamonds)], &board);
    assert!(a > b, "K9 two pair should beat K2 two pair");
}

#[test]
fn board_plays_for_both_is_a_tie() {
    let board = [
        Card::new(Ace, Clubs),
        Card::new(King, Diamonds),
        Card::new(Queen, Spades),
        Card::new(Jack, Hearts),
        Card::new(Ten, Clubs),
    ];
    let a = best_strength(&[Card::new(Two, Spades), Card::new(Three, Hearts)], &board);
    let b = best_strength(&[Card::new(Four, Diamonds), Card::new(Five, Hearts)], &board);
    assert_eq!(a.category(), Category::Straight);
    assert_eq!(a, b);
}

#[test]
fn straight_top_card_and_wheel() {
    let board = [
        Card::new(Five, Clubs),
        Card::new(Four, Diamonds),
        Card::new(Three, Spades),
        Card::new(Two, Hearts),
        Card::new(King, Clubs),
    ];
    let a = best_strength(&[Card::new(Ace, Diamonds), Card::new(Nine, Clubs)], &board);
    let b = best_strength(&[Card::new(Six, Diamonds), Card::new(Nine, Hearts)], &board);
    assert!(a < b, "6-high straight should beat wheel A-5");
}

#[test]
fn flush_order_by_kickers() {
    let board = [
        Card::new(Ace, Clubs),
        Card::new(Nine, Clubs),
        Card::new(Four, Clubs),
        Card::new(Two, Clubs),
        Card::new(Six, Diamonds),
    ];
    let a = best_strength(&[Card::new(King, Clubs), Card::new(Queen, Diamonds)], &board);
    let b = best_strength(&[Card::new(Queen, Clubs), Card::new(Jack, Diamonds)], &board);
    assert!(a > b, "Flush with higher second card should win");
}

#[test]
fn full_house_ordering_trips_then_pair() {
    let board = [
        Card::new(King, Clubs),
        Card::new(King, Diamonds),
        Card::new(Four, Spades),
        Card::new(Four, Hearts),
        Card::new(Two, Clubs),
    ];
    let a = best_strength(&[Card::new(King, Spades), Card::new(Ace, Diamonds)], &board); // KKK44
    let b = best_strength(&[Card::new(Four, Diamonds), Card::new(Ace, Hearts)], &board); // 444KK
    assert_eq!(a.category(), Category::FullHouse);
    assert_eq!(b.category(), Category::FullHouse);
    assert!(a > b, "Full House with higher trips should win");
}
