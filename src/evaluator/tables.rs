//! Lookup tables for five-card classification, keyed on the packed card
//! encoding.
//!
//! - `flush`: all five cards share a suit; indexed by the 13-bit rank mask.
//! - `unique`: five distinct ranks, no flush (straights and high cards);
//!   indexed by the rank mask.
//! - `paired`: everything else, keyed by the product of the five rank primes
//!   and looked up by binary search.
//!
//! Built once on first use.

use super::rank_groups::classify;
use super::HandStrength;
use crate::cards::RANK_PRIMES;
use std::sync::OnceLock;

const MASKS: usize = 1 << 13;

pub(crate) struct Tables {
    flush: Vec<HandStrength>,
    unique: Vec<HandStrength>,
    paired: Vec<(u32, HandStrength)>,
}

static TABLES: OnceLock<Tables> = OnceLock::new();

pub(crate) fn tables() -> &'static Tables {
    TABLES.get_or_init(Tables::build)
}

impl Tables {
    #[inline]
    pub(crate) fn flush(&self, rank_mask: usize) -> HandStrength {
        self.flush[rank_mask & (MASKS - 1)]
    }

    #[inline]
    pub(crate) fn unique(&self, rank_mask: usize) -> HandStrength {
        self.unique[rank_mask & (MASKS - 1)]
    }

    /// Missing keys only arise from impossible rank multisets (five of a kind).
    #[inline]
    pub(crate) fn paired(&self, prime_product: u32) -> HandStrength {
        match self.paired.binary_search_by_key(&prime_product, |&(k, _)| k) {
            Ok(i) => self.paired[i].1,
            Err(_) => HandStrength::default(),
        }
    }

    fn build() -> Self {
        let mut flush = vec![HandStrength::default(); MASKS];
        let mut unique = vec![HandStrength::default(); MASKS];
        for mask in (0..MASKS).filter(|m| m.count_ones() == 5) {
            let mut counts = [0u8; 15];
            for idx in (0..13usize).filter(|&i| mask & (1 << i) != 0) {
                counts[idx + 2] = 1;
            }
            flush[mask] = classify(&counts, true);
            unique[mask] = classify(&counts, false);
        }

        let mut paired = Vec::with_capacity(4888);
        let mut idx = [0usize; 5];
        collect_paired(&mut idx, 0, 0, &mut paired);
        paired.sort_unstable_by_key(|&(k, _)| k);

        log::trace!("evaluator tables built: {} paired entries", paired.len());
        Self { flush, unique, paired }
    }
}

/// Walk every non-decreasing rank-index 5-tuple; keep those with a repeated
/// rank and no rank used five times.
fn collect_paired(
    idx: &mut [usize; 5],
    depth: usize,
    start: usize,
    out: &mut Vec<(u32, HandStrength)>,
) {
    if depth == 5 {
        let mut counts = [0u8; 15];
        for &i in idx.iter() {
            counts[i + 2] += 1;
        }
        let max = counts.iter().copied().max().unwrap_or(0);
        if (2..=4).contains(&max) {
            let product = idx.iter().map(|&i| RANK_PRIMES[i]).product();
            out.push((product, classify(&counts, false)));
        }
        return;
    }
    for i in start..13 {
        idx[depth] = i;
        collect_paired(idx, depth + 1, i, out);
    }
}
