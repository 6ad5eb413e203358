use crate::cards::Card;
use crate::evaluator::{evaluate_seven, HandStrength};

/// Best five of the seven cards formed by two hole cards and the board.
#[inline]
pub fn best_strength(hole: &[Card; 2], community: &[Card; 5]) -> HandStrength {
    let [a, b] = *hole;
    let [c, d, e, f, g] = *community;
    evaluate_seven(&[a, b, c, d, e, f, g])
}
