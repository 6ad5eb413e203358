use crate::error::{InvalidState, Result};
use crate::variants::Variant;

pub const DEFAULT_TRIALS: usize = 1000;
pub const DEFAULT_TABLE_SIZE: usize = 9;
pub const DEFAULT_SHARDS: usize = 8;

/// Knobs for one simulation run.
///
/// ```
/// use poker_equity::config::SimulationConfig;
/// use poker_equity::variants::Variant;
///
/// let cfg = SimulationConfig::default()
///     .with_variant(Variant::FourHoleCard)
///     .with_table_size(6)
///     .with_seed(7);
/// assert_eq!(cfg.trial_count, 1000);
/// assert_eq!(cfg.seed, Some(7));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationConfig {
    pub trial_count: usize,
    /// Total seats, known hands included.
    pub table_size: usize,
    pub variant: Variant,
    /// Fixed base seed for reproducible runs; `None` draws one from OS entropy per run.
    pub seed: Option<u64>,
    /// Number of independent trial shards. Results depend on this value (each
    /// shard has its own RNG stream) but never on how many threads run them.
    pub shards: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            trial_count: DEFAULT_TRIALS,
            table_size: DEFAULT_TABLE_SIZE,
            variant: Variant::default(),
            seed: None,
            shards: DEFAULT_SHARDS,
        }
    }
}

impl SimulationConfig {
    pub fn with_trials(mut self, trial_count: usize) -> Self {
        self.trial_count = trial_count;
        self
    }

    pub fn with_table_size(mut self, table_size: usize) -> Self {
        self.table_size = table_size;
        self
    }

    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_shards(mut self, shards: usize) -> Self {
        self.shards = shards;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.trial_count == 0 {
            return Err(InvalidState::ZeroTrials.into());
        }
        if self.table_size == 0 {
            return Err(InvalidState::ZeroTableSize.into());
        }
        if self.shards == 0 {
            return Err(InvalidState::ZeroShards.into());
        }
        Ok(())
    }

    /// Trials assigned to each shard: an even split, remainder to the first shards.
    pub(crate) fn shard_sizes(&self) -> impl Iterator<Item = usize> {
        let (base, extra) = (self.trial_count / self.shards, self.trial_count % self.shards);
        (0..self.shards).map(move |i| base + usize::from(i < extra))
    }
}
