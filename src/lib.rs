//! poker-equity: Monte Carlo win/split probabilities for known poker hands
//!
//! Goals:
//! - Estimate equity for any subset of seats whose hole cards are known
//! - Texas Hold'em (two hole cards) and Omaha (four hole cards, exactly two used)
//! - Self-contained, table-driven five-card evaluator
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start
//! ```
//! use poker_equity::config::SimulationConfig;
//! use poker_equity::simulator::simulate_labels;
//!
//! let cfg = SimulationConfig::default().with_table_size(2).with_trials(500).with_seed(42);
//! let probs = simulate_labels(&[vec!["Ah", "Kh"]], &cfg).unwrap();
//! assert!(probs[0] > 0.5 && probs[0] < 0.8);
//! ```
//!
//! ## Evaluate five cards
//! ```
//! use poker_equity::cards::parse_cards;
//! use poker_equity::evaluator::{evaluate, Category};
//!
//! let s = evaluate(&parse_cards("Kh Kd Ac 7s 3h").unwrap()).unwrap();
//! assert_eq!(s.category(), Category::Pair);
//! ```

pub mod cards;
pub mod config;
pub mod deck;
pub mod error;
pub mod evaluator;
pub mod hand;
pub mod simulator;
pub mod variants;

pub use error::{EquityError, InvalidState};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
