use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_pcg::Pcg64;
use std::vec;

/// An iterator over a seeded random permutation of the given values
/// The same seed always produces the same order
pub struct ShuffledGenerator<T> {
    values: vec::IntoIter<T>,
}

impl<T> ShuffledGenerator<T> {
    pub fn new(mut values: Vec<T>, seed: u64) -> ShuffledGenerator<T> {
        let mut rng = Pcg64::seed_from_u64(seed);
        values.shuffle(&mut rng);
        ShuffledGenerator {
            values: values.into_iter(),
        }
    }
}

impl_generated_iterator!(ShuffledGenerator<T>, T);
