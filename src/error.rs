use crate::cards::{Card, CardParseError};

/// A structural precondition that the caller's input violated.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InvalidState {
    #[error("no known hands supplied")]
    NoHands,
    #[error("{hands} known hands do not fit at a table of {seats} seats")]
    TooManyHands { hands: usize, seats: usize },
    #[error("hand {hand}: expected {expected} hole cards, got {found}")]
    HandSize { hand: usize, expected: usize, found: usize },
    #[error("card {card} appears more than once")]
    DuplicateCard { card: Card },
    #[error("hand {hand}: {found} detected cards do not form a complete hand")]
    IncompleteLabels { hand: usize, found: usize },
    #[error("evaluator needs exactly five cards, got {found}")]
    EvaluatorInput { found: usize },
    #[error("cannot exclude {found} cards from a 52-card deck")]
    TooManyExcluded { found: usize },
    #[error("community needs exactly five cards, got {found}")]
    CommunitySize { found: usize },
    #[error("trial count must be positive")]
    ZeroTrials,
    #[error("table size must be positive")]
    ZeroTableSize,
    #[error("shard count must be positive")]
    ZeroShards,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EquityError {
    #[error("card parse error: {0}")]
    Parse(#[from] CardParseError),
    #[error("invalid state: {0}")]
    InvalidState(#[from] InvalidState),
    #[error("insufficient cards: requested {requested}, {remaining} remaining")]
    InsufficientCards { requested: usize, remaining: usize },
}

pub type Result<T, E = EquityError> = std::result::Result<T, E>;
