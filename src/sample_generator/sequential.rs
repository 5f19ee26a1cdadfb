use std::vec;

/// An iterator that will generate `num` equally spaced values centred on
/// `value`: v[i] = value + i - (num - 1) / 2
/// The offsets are symmetric, so both the median and the mean are `value`.
/// For an even `num` the two middle values are `value - 0.5` and `value + 0.5`
pub struct SequentialGenerator {
    values: vec::IntoIter<f64>,
}

pub enum SequentialOrder {
    Ascending,
    Descending,
}

impl SequentialGenerator {
    pub fn new(value: f64, num: usize, order: SequentialOrder) -> SequentialGenerator {
        assert!(num > 0);
        let half_span = (num - 1) as f64 / 2.;
        // The offset is added to `value` last, so odd sequences hold `value`
        // exactly at their middle position
        let at = |i: usize| value + (i as f64 - half_span);
        let values: Vec<f64> = match order {
            SequentialOrder::Ascending => (0..num).map(at).collect(),
            SequentialOrder::Descending => (0..num).rev().map(at).collect(),
        };
        SequentialGenerator {
            values: values.into_iter(),
        }
    }
}

impl_generated_iterator!(SequentialGenerator, f64);
