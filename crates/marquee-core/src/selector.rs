//! Uniform random selection over ordered sequences.
//!
//! The random source is always passed in or owned explicitly; nothing here
//! reaches for hidden global state. Every draw is independent: there is no
//! memory of earlier picks and repeats are allowed.

use std::num::NonZeroUsize;

use rand::rngs::ThreadRng;
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::{Error, Result};
use crate::table::CategoryTable;

/// Draw an index uniformly from `[0, len)`.
pub fn uniform_index<R: Rng + ?Sized>(len: NonZeroUsize, rng: &mut R) -> usize {
    rng.random_range(0..len.get())
}

/// Draw an index uniformly from `[0, len)`, failing when `len` is zero.
pub fn pick_index<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Result<usize> {
    let len = NonZeroUsize::new(len).ok_or(Error::EmptyTable)?;
    Ok(uniform_index(len, rng))
}

/// Return a reference to a uniformly chosen element of `items`.
///
/// Returns [`Error::EmptyTable`] for an empty slice rather than any
/// placeholder value.
pub fn pick<'a, T, R: Rng + ?Sized>(items: &'a [T], rng: &mut R) -> Result<&'a T> {
    let index = pick_index(items.len(), rng)?;
    Ok(&items[index])
}

/// Random selector that owns its random source.
///
/// Use one selector per thread; methods take `&mut self`.
#[derive(Debug, Clone)]
pub struct RandomSelector<R> {
    rng: R,
}

impl<R: RngCore> RandomSelector<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn pick_index(&mut self, len: usize) -> Result<usize> {
        pick_index(len, &mut self.rng)
    }

    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Result<&'a T> {
        pick(items, &mut self.rng)
    }

    /// Pick from a category table. Infallible since tables are never empty.
    pub fn choose(&mut self, table: &CategoryTable) -> &'static str {
        table.pick(&mut self.rng)
    }

    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl RandomSelector<ChaCha8Rng> {
    /// Selector over a ChaCha8 stream; the same seed replays the same picks.
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl RandomSelector<ThreadRng> {
    pub fn thread_local() -> Self {
        Self::new(rand::rng())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_slice_is_rejected() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let items: [&str; 0] = [];
        assert_eq!(pick(&items, &mut rng), Err(Error::EmptyTable));
        assert_eq!(pick_index(0, &mut rng), Err(Error::EmptyTable));
    }

    #[test]
    fn single_element_is_always_returned() {
        let mut selector = RandomSelector::seeded(7);
        for _ in 0..100 {
            assert_eq!(selector.pick(&["only"]), Ok(&"only"));
        }
    }

    #[test]
    fn same_seed_replays_same_indices() {
        let items = ["a", "b", "c"];
        let mut first = RandomSelector::seeded(42);
        let mut second = RandomSelector::seeded(42);

        let run_a: Vec<&str> = (0..3)
            .map(|_| *first.pick(&items).expect("non-empty"))
            .collect();
        let run_b: Vec<&str> = (0..3)
            .map(|_| *second.pick(&items).expect("non-empty"))
            .collect();

        assert_eq!(run_a, run_b);
    }

    #[test]
    fn indices_stay_in_bounds() {
        let mut selector = RandomSelector::seeded(3);
        for len in 1..50 {
            for _ in 0..20 {
                let index = selector.pick_index(len).expect("non-zero len");
                assert!(index < len);
            }
        }
    }

    #[test]
    fn works_through_dyn_rng() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let rng: &mut dyn RngCore = &mut rng;
        let value = pick(&[1, 2, 3], rng).expect("non-empty");
        assert!([1, 2, 3].contains(value));
    }
}
