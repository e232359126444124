//! Fisher-Yates shuffling

use rand::Rng;

/// Return a shuffled copy of `items` using the thread-local RNG
///
/// The input slice is left untouched.
pub fn shuffle<T: Clone>(items: &[T]) -> Vec<T> {
    shuffle_with(items, &mut rand::thread_rng())
}

/// Return a shuffled copy of `items` drawing from `rng`
pub fn shuffle_with<T, R>(items: &[T], rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: Rng + ?Sized,
{
    let mut copy = items.to_vec();
    shuffle_in_place(&mut copy, rng);
    copy
}

/// Shuffle `items` in place
///
/// Walks the index down from the length to 1, swapping the last unshuffled
/// element with one drawn uniformly from `[0, index)`.
pub fn shuffle_in_place<T, R>(items: &mut [T], rng: &mut R)
where
    R: Rng + ?Sized,
{
    for current in (1..=items.len()).rev() {
        let random = rng.gen_range(0..current);
        items.swap(current - 1, random);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::{rngs::StdRng, SeedableRng};
    use std::collections::HashMap;

    #[test]
    fn empty_and_singleton() {
        let empty: Vec<u8> = Vec::new();
        assert!(shuffle(&empty).is_empty());
        assert_eq!(shuffle(&["only"]), vec!["only"]);
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let items: Vec<u32> = (0..20).collect();
        let a = shuffle_with(&items, &mut StdRng::seed_from_u64(42));
        let b = shuffle_with(&items, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn works_for_types_without_serialization() {
        #[derive(Debug, Clone)]
        struct Card {
            rank: std::rc::Rc<u8>,
        }
        let deck: Vec<Card> = (1..=4).map(|r| Card { rank: std::rc::Rc::new(r) }).collect();
        let mut ranks: Vec<u8> = shuffle(&deck).iter().map(|c| *c.rank).collect();
        ranks.sort_unstable();
        assert_eq!(ranks, vec![1, 2, 3, 4]);
    }

    #[test]
    fn permutations_are_roughly_uniform() {
        let items = [1, 2, 3];
        let trials = 60_000;
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let mut counts: HashMap<Vec<i32>, usize> = HashMap::new();

        for _ in 0..trials {
            *counts.entry(shuffle_with(&items, &mut rng)).or_default() += 1;
        }

        assert_eq!(counts.len(), 6);
        let expected = trials / 6;
        for (perm, count) in counts {
            let deviation = count.abs_diff(expected);
            assert!(
                deviation < expected / 10,
                "permutation {:?} seen {} times, expected about {}",
                perm,
                count,
                expected
            );
        }
    }

    proptest! {
        #[test]
        fn keeps_length_and_elements(items in proptest::collection::vec(any::<i16>(), 0..64)) {
            let shuffled = shuffle(&items);
            prop_assert_eq!(shuffled.len(), items.len());

            let mut sorted_in = items.clone();
            let mut sorted_out = shuffled;
            sorted_in.sort_unstable();
            sorted_out.sort_unstable();
            prop_assert_eq!(sorted_in, sorted_out);
        }

        #[test]
        fn leaves_input_untouched(items in proptest::collection::vec(any::<u8>(), 0..64), seed in any::<u64>()) {
            let before = items.clone();
            let _ = shuffle_with(&items, &mut StdRng::seed_from_u64(seed));
            prop_assert_eq!(items, before);
        }
    }
}
