use crate::error::{Result, StatError};
use crate::sample::Sample;
use crate::{mean, median, mode};
use std::cmp::Ordering;
use std::iter::FromIterator;
use std::slice;
use tracing::{debug, trace};

/// A multiset of numeric samples, kept sorted, that answers simple statistics
///
/// Samples can only be added: the sorted order is maintained on insertion and
/// there is no way to mutate or remove a stored value
#[derive(Debug, Clone)]
pub struct StatSet<T> {
    samples: Vec<T>,
}

impl<T> Default for StatSet<T> {
    fn default() -> Self {
        StatSet {
            samples: Vec::new(),
        }
    }
}

impl<T: Sample> StatSet<T> {
    pub fn new() -> Self {
        StatSet::default()
    }

    /// Add a sample to the set, after any equal values already stored
    /// Any value is accepted. NaN sorts after every other value, so finite
    /// samples stay sorted ahead of it
    pub fn add_sample(&mut self, value: T) {
        let index = self
            .samples
            .partition_point(|sample| sample.sample_cmp(&value) != Ordering::Greater);
        self.samples.insert(index, value);
        trace!(index, len = self.samples.len(), "added sample");
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Arithmetic mean of the samples, computed as the sum of each sample
    /// divided by the count
    ///
    /// For integer types every term truncates, so this may be lower than the
    /// true mean: `{1, 1, 1}` gives `0`. In exchange, `{1, u64::MAX}` gives
    /// `u64::MAX / 2` instead of overflowing
    pub fn arithmetic_mean(&self) -> Result<T> {
        mean::arithmetic_mean(&self.samples).ok_or_else(|| empty("arithmetic_mean"))
    }

    /// Median of the samples, always as a f64
    pub fn median(&self) -> Result<f64> {
        median::median(&self.samples).ok_or_else(|| empty("median"))
    }

    /// Most frequent sample. Ties go to the smallest value
    pub fn mode(&self) -> Result<T> {
        mode::mode(&self.samples).ok_or_else(|| empty("mode"))
    }

    /// Number of stored samples equal to `value`. All NaNs count as equal
    pub fn count(&self, value: &T) -> usize {
        let start = self
            .samples
            .partition_point(|sample| sample.sample_cmp(value) == Ordering::Less);
        let end = self
            .samples
            .partition_point(|sample| sample.sample_cmp(value) != Ordering::Greater);
        end - start
    }

    pub fn min(&self) -> Option<T> {
        self.samples.first().copied()
    }

    /// Largest sample, which is NaN if any was added
    pub fn max(&self) -> Option<T> {
        self.samples.last().copied()
    }

    /// Iterate over the samples in ascending order
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.samples.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.samples
    }
}

fn empty(query: &'static str) -> StatError {
    debug!(query, "statistics query on an empty set");
    StatError::EmptyCollection
}

impl<T: Sample> Extend<T> for StatSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add_sample(value);
        }
    }
}

impl<T: Sample> FromIterator<T> for StatSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = StatSet::new();
        set.extend(iter);
        set
    }
}

impl<'a, T> IntoIterator for &'a StatSet<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}
