//! Monte Carlo equity estimation.
//!
//! Each trial deals random hole cards to the empty seats and a random
//! community from whatever the known hands left in the deck, ranks every
//! seat, and credits the known winners (ties split evenly). Trials are split
//! into shards with private RNG streams and accumulators, run independently
//! (in parallel with the `parallel` feature) and summed in shard order.

use crate::cards::Card;
use crate::config::SimulationConfig;
use crate::deck::Deck;
use crate::error::{InvalidState, Result};
use crate::evaluator::HandStrength;
use crate::hand::{ensure_distinct, hands_from_labels, Hand};
use crate::variants::Variant;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Decimal places kept in reported probabilities.
pub const PRECISION: i32 = 4;

/// One known hand's estimated share of the pot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandEquity {
    pub hand_index: usize,
    pub probability: f64,
}

/// Everything a presentation layer needs about a finished run.
#[derive(Debug, Clone, PartialEq)]
pub struct EquityReport {
    pub variant: Variant,
    pub equities: Vec<HandEquity>,
}

/// Estimate, for each known hand, the probability it wins or splits the pot.
///
/// Probabilities are per hand and rounded to [`PRECISION`] places; they do not
/// sum to one when empty seats are filled with random opponents. All input
/// problems are reported before any card is dealt, and a failing trial fails
/// the whole run.
///
/// ```
/// use poker_equity::config::SimulationConfig;
/// use poker_equity::hand::Hand;
/// use poker_equity::simulator::simulate;
///
/// let hands: Vec<Hand> = vec!["Ah Ad".parse().unwrap(), "7c 2d".parse().unwrap()];
/// let cfg = SimulationConfig::default().with_table_size(2).with_trials(200).with_seed(1);
/// let p = simulate(&hands, &cfg).unwrap();
/// assert!(p[0] > p[1]);
/// ```
pub fn simulate(known: &[Hand], config: &SimulationConfig) -> Result<Vec<f64>> {
    let plan = Plan::new(known, config)?;
    let base_seed = config.seed.unwrap_or_else(|| rand::rng().random());
    log::debug!(
        "simulating {} trials of {} with {} known of {} seats over {} shards",
        config.trial_count,
        config.variant,
        known.len(),
        config.table_size,
        config.shards
    );

    let jobs: Vec<(usize, usize)> =
        config.shard_sizes().enumerate().filter(|&(_, trials)| trials > 0).collect();

    #[cfg(feature = "parallel")]
    let shards: Vec<Result<Accumulator>> = {
        use rayon::prelude::*;
        jobs.par_iter().map(|&(shard, trials)| plan.run_shard(shard, trials, base_seed)).collect()
    };
    #[cfg(not(feature = "parallel"))]
    let shards: Vec<Result<Accumulator>> =
        jobs.iter().map(|&(shard, trials)| plan.run_shard(shard, trials, base_seed)).collect();

    let mut total = Accumulator::new(known.len());
    for shard in shards {
        match shard {
            Ok(acc) => total.merge(&acc),
            Err(e) => {
                log::warn!("simulation aborted: {e}");
                return Err(e);
            }
        }
    }
    let probabilities = total.finish();
    log::debug!("simulation finished: {probabilities:?}");
    Ok(probabilities)
}

/// [`simulate`] over card-label sequences from a card detector.
pub fn simulate_labels<L, S>(labels: &[L], config: &SimulationConfig) -> Result<Vec<f64>>
where
    L: AsRef<[S]>,
    S: AsRef<str>,
{
    let hands = hands_from_labels(labels, config.variant)?;
    simulate(&hands, config)
}

/// [`simulate`], packaged with hand indices and the variant for display.
pub fn run(known: &[Hand], config: &SimulationConfig) -> Result<EquityReport> {
    let equities = simulate(known, config)?
        .into_iter()
        .enumerate()
        .map(|(hand_index, probability)| HandEquity { hand_index, probability })
        .collect();
    Ok(EquityReport { variant: config.variant, equities })
}

/// Validated, immutable inputs shared by every shard.
struct Plan<'a> {
    known: &'a [Hand],
    variant: Variant,
    synthetic_seats: usize,
    /// Pristine deck minus the known cards; cloned once per trial.
    deck: Deck,
}

impl<'a> Plan<'a> {
    fn new(known: &'a [Hand], config: &SimulationConfig) -> Result<Self> {
        config.validate()?;
        if known.is_empty() {
            return Err(InvalidState::NoHands.into());
        }
        if known.len() > config.table_size {
            return Err(
                InvalidState::TooManyHands { hands: known.len(), seats: config.table_size }.into()
            );
        }
        let expected = config.variant.hole_cards();
        if let Some((hand, h)) = known.iter().enumerate().find(|(_, h)| h.len() != expected) {
            return Err(InvalidState::HandSize { hand, expected, found: h.len() }.into());
        }
        let committed: Vec<Card> = known.iter().flat_map(|h| h.as_slice()).copied().collect();
        ensure_distinct(&committed)?;

        Ok(Self {
            known,
            variant: config.variant,
            synthetic_seats: config.table_size - known.len(),
            deck: Deck::new_excluding(&committed)?,
        })
    }

    fn run_shard(&self, shard: usize, trials: usize, base_seed: u64) -> Result<Accumulator> {
        let mut rng = ChaCha8Rng::seed_from_u64(base_seed.wrapping_add(shard as u64));
        let mut acc = Accumulator::new(self.known.len());
        let mut strengths = Vec::with_capacity(self.known.len() + self.synthetic_seats);
        for _ in 0..trials {
            self.trial(&mut rng, &mut strengths)?;
            acc.record(&strengths);
        }
        log::trace!("shard {shard} finished {trials} trials");
        Ok(acc)
    }

    /// Deal one hand and leave every seat's best strength in `strengths`,
    /// known seats first.
    fn trial<R: Rng + ?Sized>(&self, rng: &mut R, strengths: &mut Vec<HandStrength>) -> Result<()> {
        let hole = self.variant.hole_cards();
        let mut deck = self.deck.clone();
        let synthetic = deck.draw_n(self.synthetic_seats * hole, rng)?;
        let drawn = deck.draw_n(5, rng)?;
        let community: &[Card; 5] = drawn
            .as_slice()
            .try_into()
            .map_err(|_| InvalidState::CommunitySize { found: drawn.len() })?;

        strengths.clear();
        let seats = self.known.iter().map(Hand::as_slice).chain(synthetic.chunks_exact(hole));
        for (seat, cards) in seats.enumerate() {
            strengths.push(self.variant.best_strength(seat, cards, community)?);
        }
        Ok(())
    }
}

/// Running win credit per known hand.
#[derive(Debug, Clone, PartialEq)]
struct Accumulator {
    credit: Vec<f64>,
    trials: usize,
}

impl Accumulator {
    fn new(known: usize) -> Self {
        Self { credit: vec![0.0; known], trials: 0 }
    }

    /// Split one pot among the seats holding the strongest hand. `strengths`
    /// lists known seats first; seats past the known ones earn nothing.
    fn record(&mut self, strengths: &[HandStrength]) {
        self.trials += 1;
        let Some(&best) = strengths.iter().max() else {
            return;
        };
        let winners = strengths.iter().filter(|&&s| s == best).count();
        let share = 1.0 / winners as f64;
        for (credit, &s) in self.credit.iter_mut().zip(strengths) {
            if s == best {
                *credit += share;
            }
        }
    }

    fn merge(&mut self, other: &Accumulator) {
        for (a, b) in self.credit.iter_mut().zip(&other.credit) {
            *a += b;
        }
        self.trials += other.trials;
    }

    fn finish(self) -> Vec<f64> {
        let trials = self.trials.max(1) as f64;
        let scale = 10f64.powi(PRECISION);
        self.credit.into_iter().map(|c| (c / trials * scale).round() / scale).collect()
    }
}
