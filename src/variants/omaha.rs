use crate::cards::Card;
use crate::evaluator::combinations::Combinations;
use crate::evaluator::{evaluate_five, HandStrength};

/// Best hand using exactly two of four hole cards and exactly three community
/// cards: max over 6 x 10 = 60 five-card evaluations.
pub fn best_strength(hole: &[Card; 4], community: &[Card; 5]) -> HandStrength {
    let mut best = HandStrength::default();
    for [i, j] in Combinations::<2>::new(4) {
        for [a, b, c] in Combinations::<3>::new(5) {
            let s = evaluate_five(&[hole[i], hole[j], community[a], community[b], community[c]]);
            best = best.max(s);
        }
    }
    best
}
