use crate::cards::Rank;
use crate::evaluator::{Category, HandStrength};

/// Groups ranks by their frequency in a hand, sorted by (count desc, rank desc).
///
/// Example: AAAKQ groups as [(Ace, 3), (King, 1), (Queen, 1)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RankGroups {
    groups: Vec<(Rank, u8)>,
}

impl RankGroups {
    /// The array is indexed by rank value (2-14).
    pub(crate) fn from_counts(rank_counts: &[u8; 15]) -> Self {
        let mut groups: Vec<(Rank, u8)> = Rank::ALL
            .iter()
            .copied()
            .filter(|r| rank_counts[r.value() as usize] > 0)
            .map(|r| (r, rank_counts[r.value() as usize]))
            .collect();
        groups.sort_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));
        Self { groups }
    }

    pub(crate) fn quad(&self) -> Option<Rank> {
        self.with_count(4).next()
    }

    pub(crate) fn trips(&self) -> Option<Rank> {
        self.with_count(3).next()
    }

    /// Pair ranks, descending.
    pub(crate) fn pairs(&self) -> Vec<Rank> {
        self.with_count(2).collect()
    }

    /// Singleton ranks, descending.
    pub(crate) fn kickers(&self) -> Vec<Rank> {
        self.with_count(1).collect()
    }

    fn with_count(&self, n: u8) -> impl Iterator<Item = Rank> + '_ {
        self.groups.iter().filter(move |(_, c)| *c == n).map(|(r, _)| *r)
    }
}

/// Top rank of a five-distinct-rank straight, if the counts form one.
/// The wheel (A-2-3-4-5) reports Five.
pub(crate) fn straight_top(rank_counts: &[u8; 15]) -> Option<Rank> {
    let present = |v: usize| rank_counts[v] > 0;
    for top in (6..=14usize).rev() {
        if (top - 4..=top).all(present) {
            return Rank::from_value(top as u8);
        }
    }
    if present(14) && (2..=5).all(present) {
        return Some(Rank::Five);
    }
    None
}

/// Reference classifier over a five-card rank multiset. Slow but obviously
/// correct; the lookup tables are generated from it.
pub(crate) fn classify(rank_counts: &[u8; 15], flush: bool) -> HandStrength {
    let groups = RankGroups::from_counts(rank_counts);
    let straight = straight_top(rank_counts);
    let kickers = groups.kickers();

    if let (true, Some(top)) = (flush, straight) {
        return HandStrength::from_parts(Category::StraightFlush, [top]);
    }
    if let Some(quad) = groups.quad() {
        return HandStrength::from_parts(Category::FourOfAKind, once_then(quad, kickers));
    }
    let pairs = groups.pairs();
    if let (Some(trips), Some(&pair)) = (groups.trips(), pairs.first()) {
        return HandStrength::from_parts(Category::FullHouse, [trips, pair]);
    }
    if flush {
        return HandStrength::from_parts(Category::Flush, kickers);
    }
    if let Some(top) = straight {
        return HandStrength::from_parts(Category::Straight, [top]);
    }
    if let Some(trips) = groups.trips() {
        return HandStrength::from_parts(Category::ThreeOfAKind, once_then(trips, kickers));
    }
    match pairs.len() {
        0 => HandStrength::from_parts(Category::HighCard, kickers),
        1 => HandStrength::from_parts(Category::Pair, pairs.into_iter().chain(kickers)),
        _ => HandStrength::from_parts(Category::TwoPair, pairs.into_iter().chain(kickers)),
    }
}

fn once_then(first: Rank, rest: Vec<Rank>) -> impl Iterator<Item = Rank> {
    std::iter::once(first).chain(rest)
}
