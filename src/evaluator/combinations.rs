/// Lexicographic K-of-N index combinations, e.g. C(7,5) = 21, C(4,2) = 6,
/// C(5,3) = 10.
///
/// Yields fixed-size arrays so callers can destructure without allocating.
pub(crate) struct Combinations<const K: usize> {
    n: usize,
    indices: [usize; K],
    done: bool,
}

impl<const K: usize> Combinations<K> {
    pub(crate) fn new(n: usize) -> Self {
        let mut indices = [0usize; K];
        for (i, slot) in indices.iter_mut().enumerate() {
            *slot = i;
        }
        Self { n, indices, done: K > n }
    }
}

impl<const K: usize> Iterator for Combinations<K> {
    type Item = [usize; K];

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let result = self.indices;

        // rightmost index that can still move right
        match (0..K).rev().find(|&i| self.indices[i] < self.n - (K - i)) {
            Some(i) => {
                self.indices[i] += 1;
                for j in (i + 1)..K {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
            }
            None => self.done = true,
        }
        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn counts_match_binomials() {
        assert_eq!(Combinations::<5>::new(7).count(), 21);
        assert_eq!(Combinations::<2>::new(4).count(), 6);
        assert_eq!(Combinations::<3>::new(5).count(), 10);
        assert_eq!(Combinations::<5>::new(5).count(), 1);
        assert_eq!(Combinations::<3>::new(2).count(), 0);
    }

    #[test]
    fn two_of_four_in_order() {
        let combos: Vec<[usize; 2]> = Combinations::new(4).collect();
        assert_eq!(combos, vec![[0, 1], [0, 2], [0, 3], [1, 2], [1, 3], [2, 3]]);
    }

    #[test]
    fn three_of_five_endpoints() {
        let combos: Vec<[usize; 3]> = Combinations::new(5).collect();
        assert_eq!(combos.first(), Some(&[0, 1, 2]));
        assert_eq!(combos.last(), Some(&[2, 3, 4]));
    }

    #[test]
    fn five_of_seven_is_strictly_increasing_and_unique() {
        let combos: Vec<[usize; 5]> = Combinations::new(7).collect();
        let mut seen = HashSet::new();
        for c in &combos {
            assert!(c.windows(2).all(|w| w[0] < w[1]));
            assert!(c.iter().all(|&i| i < 7));
            assert!(seen.insert(*c), "duplicate combination {c:?}");
        }
        assert!(combos.windows(2).all(|w| w[0] < w[1]), "not lexicographic");
        assert_eq!(combos.last(), Some(&[2, 3, 4, 5, 6]));
    }

    #[test]
    fn exhausted_iterator_stays_exhausted() {
        let mut it = Combinations::<2>::new(4);
        for _ in 0..6 {
            assert!(it.next().is_some());
        }
        assert!(it.next().is_none());
        assert!(it.next().is_none());
    }
}
