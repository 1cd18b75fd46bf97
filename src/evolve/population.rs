//! Index-based population contract.
//!
//! [`Population`] is what [`evolve`](super::evolve) operates on: a
//! fixed-length, indexable collection that can be ranked, mutated,
//! recombined, copied within itself, and deduplicated. Slices and vectors
//! of any [`Entity`] implement it.

use super::types::Entity;
use rand::Rng;
use std::cmp::Ordering;
use std::collections::HashSet;

/// An ordered, fixed-length collection of entities.
///
/// The evolution step only ever reorders and overwrites slots; it never
/// changes the length.
pub trait Population {
    /// Number of entities.
    fn len(&self) -> usize;

    /// Returns `true` if the population holds no entities.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Exchanges the entities at `i` and `j`.
    fn swap(&mut self, i: usize, j: usize);

    /// Returns `true` iff the entity at `i` has a strictly lower score than
    /// the entity at `j`.
    fn less(&self, i: usize, j: usize) -> bool;

    /// Mutates the entity at `i` in place.
    fn mutate<R: Rng>(&mut self, i: usize, rng: &mut R);

    /// Recombines the entities at `i` and `j`. Both may change.
    ///
    /// `i == j` is allowed.
    fn crossover<R: Rng>(&mut self, i: usize, j: usize, rng: &mut R);

    /// Overwrites the entity at `dst` with an independent copy of the
    /// entity at `src`.
    fn copy(&mut self, dst: usize, src: usize);

    /// Resets every entity whose identity was already seen earlier in
    /// iteration order. First occurrences are left untouched.
    ///
    /// Returns the number of entities reset.
    fn dedup(&mut self) -> usize;

    /// Sorts ascending by score (best first).
    ///
    /// The provided implementation is an in-place heap sort built on
    /// [`less`](Population::less) and [`swap`](Population::swap).
    ///
    /// # Complexity
    /// O(n log n) comparisons
    fn rank(&mut self) {
        let n = self.len();
        for root in (0..n / 2).rev() {
            sift_down(self, root, n);
        }
        for end in (1..n).rev() {
            self.swap(0, end);
            sift_down(self, 0, end);
        }
    }
}

/// Restores the max-heap property below `root` within `[0, end)`.
fn sift_down<P: Population + ?Sized>(population: &mut P, mut root: usize, end: usize) {
    loop {
        let mut child = 2 * root + 1;
        if child >= end {
            return;
        }
        if child + 1 < end && population.less(child, child + 1) {
            child += 1;
        }
        if !population.less(root, child) {
            return;
        }
        population.swap(root, child);
        root = child;
    }
}

impl<E: Entity> Population for [E] {
    fn len(&self) -> usize {
        <[E]>::len(self)
    }

    fn swap(&mut self, i: usize, j: usize) {
        <[E]>::swap(self, i, j);
    }

    fn less(&self, i: usize, j: usize) -> bool {
        self[i].score() < self[j].score()
    }

    fn mutate<R: Rng>(&mut self, i: usize, rng: &mut R) {
        self[i].mutate(rng);
    }

    fn crossover<R: Rng>(&mut self, i: usize, j: usize, rng: &mut R) {
        if i == j {
            // Two `&mut` to one slot are impossible; cross with a throwaway twin.
            let mut twin = self[i].clone();
            self[i].crossover(&mut twin, rng);
            return;
        }
        let (a, b) = pair_mut(self, i, j);
        a.crossover(b, rng);
    }

    fn copy(&mut self, dst: usize, src: usize) {
        if dst != src {
            let duplicate = self[src].clone();
            self[dst] = duplicate;
        }
    }

    fn dedup(&mut self) -> usize {
        let mut seen: HashSet<String> = HashSet::with_capacity(<[E]>::len(self));
        let mut resets = 0;
        for entity in self.iter_mut() {
            if !seen.insert(entity.identity()) {
                entity.reset();
                resets += 1;
            }
        }
        resets
    }

    fn rank(&mut self) {
        self.sort_by(|a, b| by_score(a.score(), b.score()));
    }
}

impl<E: Entity> Population for Vec<E> {
    fn len(&self) -> usize {
        Population::len(self.as_slice())
    }

    fn swap(&mut self, i: usize, j: usize) {
        Population::swap(self.as_mut_slice(), i, j);
    }

    fn less(&self, i: usize, j: usize) -> bool {
        Population::less(self.as_slice(), i, j)
    }

    fn mutate<R: Rng>(&mut self, i: usize, rng: &mut R) {
        Population::mutate(self.as_mut_slice(), i, rng);
    }

    fn crossover<R: Rng>(&mut self, i: usize, j: usize, rng: &mut R) {
        Population::crossover(self.as_mut_slice(), i, j, rng);
    }

    fn copy(&mut self, dst: usize, src: usize) {
        Population::copy(self.as_mut_slice(), dst, src);
    }

    fn dedup(&mut self) -> usize {
        Population::dedup(self.as_mut_slice())
    }

    fn rank(&mut self) {
        Population::rank(self.as_mut_slice());
    }
}

/// Ascending score order with NaN after every other score.
///
/// A total order, so the standard sort never sees an inconsistent
/// comparator.
fn by_score(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
        (false, true) => Ordering::Less,
        (true, false) => Ordering::Greater,
        (true, true) => Ordering::Equal,
    }
}

/// Borrows two distinct slots mutably at once.
fn pair_mut<T>(items: &mut [T], i: usize, j: usize) -> (&mut T, &mut T) {
    debug_assert_ne!(i, j);
    if i < j {
        let (lo, hi) = items.split_at_mut(j);
        (&mut lo[i], &mut hi[0])
    } else {
        let (lo, hi) = items.split_at_mut(i);
        (&mut hi[0], &mut lo[j])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use proptest::prelude::*;
    use rand::Rng;

    /// Entity whose identity is a small tag, independent of its score.
    #[derive(Clone, Debug, PartialEq)]
    struct Tagged {
        tag: u8,
        value: f64,
    }

    impl Entity for Tagged {
        fn score(&self) -> f64 {
            self.value
        }
        fn mutate<R: Rng>(&mut self, rng: &mut R) {
            self.value += rng.random_range(-1.0..1.0);
            self.tag = self.tag.wrapping_add(1);
        }
        fn crossover<R: Rng>(&mut self, other: &mut Self, _rng: &mut R) {
            std::mem::swap(&mut self.tag, &mut other.tag);
        }
        fn reset(&mut self) {
            self.tag = 0;
            self.value = 0.0;
        }
        fn identity(&self) -> String {
            self.tag.to_string()
        }
    }

    fn tagged(pairs: &[(u8, f64)]) -> Vec<Tagged> {
        pairs
            .iter()
            .map(|&(tag, value)| Tagged { tag, value })
            .collect()
    }

    /// Scores only; exercises the provided heap-sort `rank`.
    struct Scores(Vec<f64>);

    impl Population for Scores {
        fn len(&self) -> usize {
            self.0.len()
        }
        fn swap(&mut self, i: usize, j: usize) {
            self.0.swap(i, j);
        }
        fn less(&self, i: usize, j: usize) -> bool {
            self.0[i] < self.0[j]
        }
        fn mutate<R: Rng>(&mut self, _i: usize, _rng: &mut R) {}
        fn crossover<R: Rng>(&mut self, _i: usize, _j: usize, _rng: &mut R) {}
        fn copy(&mut self, dst: usize, src: usize) {
            self.0[dst] = self.0[src];
        }
        fn dedup(&mut self) -> usize {
            0
        }
    }

    #[test]
    fn test_less_is_strict() {
        let pop = tagged(&[(1, 2.0), (2, 2.0), (3, 1.0)]);
        assert!(!Population::less(pop.as_slice(), 0, 1));
        assert!(!Population::less(pop.as_slice(), 1, 0));
        assert!(Population::less(pop.as_slice(), 2, 0));
    }

    #[test]
    fn test_rank_sorts_ascending() {
        let mut pop = tagged(&[(1, 5.0), (2, -1.0), (3, 3.0), (4, 0.5)]);
        Population::rank(&mut pop);
        let scores: Vec<f64> = pop.iter().map(|e| e.value).collect();
        assert_eq!(scores, vec![-1.0, 0.5, 3.0, 5.0]);
    }

    #[test]
    fn test_rank_puts_nan_last() {
        let mut pop = tagged(&[
            (1, f64::NAN),
            (2, 4.0),
            (3, -f64::NAN),
            (4, -2.0),
            (5, f64::INFINITY),
            (6, f64::NAN),
            (7, 0.0),
        ]);
        Population::rank(&mut pop);

        let tags: Vec<u8> = pop[..4].iter().map(|e| e.tag).collect();
        assert_eq!(tags, vec![4, 7, 2, 5]);
        assert!(pop[4..].iter().all(|e| e.value.is_nan()));
    }

    #[test]
    fn test_by_score_is_total() {
        let values = [f64::NAN, -f64::NAN, -1.0, 0.0, -0.0, f64::INFINITY];
        for &a in &values {
            assert_eq!(by_score(a, a), Ordering::Equal);
            for &b in &values {
                assert_eq!(by_score(a, b), by_score(b, a).reverse());
            }
        }
    }

    #[test]
    fn test_copy_does_not_alias() {
        let mut pop = tagged(&[(1, 1.0), (2, 2.0)]);
        Population::copy(&mut pop, 1, 0);
        assert_eq!(pop[1], pop[0]);

        let mut rng = create_rng(42);
        Population::mutate(&mut pop, 1, &mut rng);
        assert_eq!(pop[0], Tagged { tag: 1, value: 1.0 });
        assert_ne!(pop[1].identity(), pop[0].identity());
    }

    #[test]
    fn test_copy_onto_itself_is_noop() {
        let mut pop = tagged(&[(7, 3.0)]);
        Population::copy(&mut pop, 0, 0);
        assert_eq!(pop[0], Tagged { tag: 7, value: 3.0 });
    }

    #[test]
    fn test_crossover_modifies_both() {
        let mut pop = tagged(&[(1, 1.0), (2, 2.0), (3, 3.0)]);
        let mut rng = create_rng(42);
        Population::crossover(&mut pop, 2, 0, &mut rng);
        assert_eq!(pop[0].tag, 3);
        assert_eq!(pop[2].tag, 1);
        assert_eq!(pop[1].tag, 2);
    }

    #[test]
    fn test_self_crossover_is_allowed() {
        let mut pop = tagged(&[(1, 1.0), (2, 2.0)]);
        let mut rng = create_rng(42);
        Population::crossover(&mut pop, 1, 1, &mut rng);
        // Swapping tags with an identical twin changes nothing.
        assert_eq!(pop[1], Tagged { tag: 2, value: 2.0 });
    }

    #[test]
    fn test_dedup_keeps_first_occurrence() {
        let mut pop = tagged(&[(4, 1.0), (5, 2.0), (4, 3.0), (5, 4.0), (4, 5.0)]);
        let resets = Population::dedup(&mut pop);
        assert_eq!(resets, 3);
        assert_eq!(pop[0], Tagged { tag: 4, value: 1.0 });
        assert_eq!(pop[1], Tagged { tag: 5, value: 2.0 });
        for e in &pop[2..] {
            assert_eq!(*e, Tagged { tag: 0, value: 0.0 });
        }
    }

    #[test]
    fn test_dedup_unique_population_untouched() {
        let mut pop = tagged(&[(1, 1.0), (2, 2.0), (3, 3.0)]);
        let before = pop.clone();
        assert_eq!(Population::dedup(&mut pop), 0);
        assert_eq!(pop, before);
    }

    #[test]
    fn test_heap_sort_rank_default() {
        let mut pop = Scores(vec![3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0]);
        pop.rank();
        assert_eq!(pop.0, vec![1.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 9.0]);
    }

    #[test]
    fn test_heap_sort_rank_trivial_sizes() {
        let mut empty = Scores(vec![]);
        empty.rank();
        assert!(empty.is_empty());

        let mut single = Scores(vec![2.0]);
        single.rank();
        assert_eq!(single.0, vec![2.0]);
    }

    proptest! {
        #[test]
        fn prop_dedup_idempotent(
            pairs in prop::collection::vec((0u8..6, -10.0f64..10.0), 0..40)
        ) {
            let mut pop = tagged(&pairs);
            Population::dedup(&mut pop);
            let once = pop.clone();
            Population::dedup(&mut pop);
            prop_assert_eq!(pop, once);
        }

        #[test]
        fn prop_dedup_leaves_no_duplicates_but_zero(
            pairs in prop::collection::vec((0u8..6, -10.0f64..10.0), 0..40)
        ) {
            let mut pop = tagged(&pairs);
            Population::dedup(&mut pop);
            let mut seen = HashSet::new();
            for e in &pop {
                let fresh = seen.insert(e.identity());
                prop_assert!(fresh || e.tag == 0);
            }
        }

        #[test]
        fn prop_heap_sort_matches_std_sort(
            scores in prop::collection::vec(-1000.0f64..1000.0, 0..64)
        ) {
            let mut pop = Scores(scores.clone());
            pop.rank();
            let mut expected = scores;
            expected.sort_by(|a, b| a.partial_cmp(b).unwrap());
            prop_assert_eq!(pop.0, expected);
        }

        #[test]
        fn prop_rank_with_nan_scores(
            values in prop::collection::vec(
                prop_oneof![3 => -100.0f64..100.0, 1 => Just(f64::NAN)],
                0..64,
            )
        ) {
            let mut pop = tagged(&values.iter().map(|&v| (1, v)).collect::<Vec<_>>());
            Population::rank(&mut pop);

            let finite = values.iter().filter(|v| !v.is_nan()).count();
            let mut expected: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
            expected.sort_by(|a, b| a.partial_cmp(b).unwrap());
            let front: Vec<f64> = pop[..finite].iter().map(|e| e.value).collect();
            prop_assert_eq!(front, expected);
            prop_assert!(pop[finite..].iter().all(|e| e.value.is_nan()));
        }
    }
}
