//! Iterators producing sample sequences whose statistics are known up front,
//! used to exercise a [`StatSet`](crate::StatSet) with larger inputs
//!
//! Every generator draws its whole sequence up front and then hands it out
//! through a `values` iterator

// Forward `Iterator` to the `values` field
macro_rules! impl_generated_iterator {
    ($name:ident $(<$t:ident>)?, $item:ty) => {
        impl$(<$t>)? Iterator for $name$(<$t>)? {
            type Item = $item;

            fn next(&mut self) -> Option<Self::Item> {
                self.values.next()
            }

            fn size_hint(&self) -> (usize, Option<usize>) {
                self.values.size_hint()
            }
        }

        impl$(<$t>)? std::iter::FusedIterator for $name$(<$t>)? {}

        impl$(<$t>)? ExactSizeIterator for $name$(<$t>)? {}
    };
}

mod mode;
mod sequential;
mod shuffled;

pub use mode::*;
pub use sequential::*;
pub use shuffled::*;
