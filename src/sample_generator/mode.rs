use ordered_float::OrderedFloat;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;
use std::collections::BTreeSet;
use std::vec;

/// An iterator that will generate `num` values in random order, where `value`
/// appears `frequency` times and every other value appears exactly once
/// With `frequency >= 2`, `value` is the only mode of the sequence
pub struct ModeGenerator {
    values: vec::IntoIter<f64>,
}

impl ModeGenerator {
    pub fn new(value: f64, frequency: usize, num: usize, seed: u64) -> ModeGenerator {
        assert!(frequency > 0 && frequency <= num);
        assert!(value.is_finite());
        let mut rng = Pcg64::seed_from_u64(seed);

        // Draw distinct values around the target one
        let mut seen = BTreeSet::new();
        seen.insert(OrderedFloat(value));
        let mut values = vec![value; frequency];
        while values.len() < num {
            let offset: f64 = rng.gen_range(-1., 1.);
            let other = value + offset;
            if seen.insert(OrderedFloat(other)) {
                values.push(other);
            }
        }

        values.shuffle(&mut rng);
        ModeGenerator {
            values: values.into_iter(),
        }
    }
}

impl_generated_iterator!(ModeGenerator, f64);
