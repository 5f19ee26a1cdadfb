use ordered_float::OrderedFloat;
use std::cmp::Ordering;
use std::fmt::Debug;
use std::ops::Add;

/// A primitive numeric value that can be stored in a [`StatSet`](crate::StatSet)
///
/// Floats are accepted as-is, NaN included: [`Sample::sample_cmp`] gives them
/// a total order where every NaN is equal to the others and greater than any
/// other value
pub trait Sample: Copy + PartialOrd + Add<Output = Self> + Debug {
    /// Additive identity, the starting point of the mean
    const ZERO: Self;

    /// Total order used to keep samples sorted
    fn sample_cmp(&self, other: &Self) -> Ordering;

    /// Divide this value by a sample count, in this type's own arithmetic.
    /// For integers the quotient truncates toward zero
    fn div_len(self, len: usize) -> Self;

    /// Widen to a f64, used to average the two middle values of the median
    fn to_f64(self) -> f64;
}

// Integers up to 64 bits divide in i128, so a count that does not fit in the
// type itself still gives the exact truncated quotient
macro_rules! impl_widened_integer {
    ($($t:ty),*) => {$(
        impl Sample for $t {
            const ZERO: Self = 0;

            fn sample_cmp(&self, other: &Self) -> Ordering {
                self.cmp(other)
            }

            fn div_len(self, len: usize) -> Self {
                (self as i128 / len as i128) as $t
            }

            fn to_f64(self) -> f64 {
                self as f64
            }
        }
    )*};
}

macro_rules! impl_wide_integer {
    ($($t:ty),*) => {$(
        impl Sample for $t {
            const ZERO: Self = 0;

            fn sample_cmp(&self, other: &Self) -> Ordering {
                self.cmp(other)
            }

            fn div_len(self, len: usize) -> Self {
                self / len as $t
            }

            fn to_f64(self) -> f64 {
                self as f64
            }
        }
    )*};
}

macro_rules! impl_float {
    ($($t:ty),*) => {$(
        impl Sample for $t {
            const ZERO: Self = 0.;

            fn sample_cmp(&self, other: &Self) -> Ordering {
                OrderedFloat(*self).cmp(&OrderedFloat(*other))
            }

            fn div_len(self, len: usize) -> Self {
                self / len as $t
            }

            fn to_f64(self) -> f64 {
                self as f64
            }
        }
    )*};
}

impl_widened_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_wide_integer!(i128, u128);
impl_float!(f32, f64);
