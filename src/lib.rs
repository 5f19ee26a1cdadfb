//! A sorted multiset of numeric samples that computes the arithmetic mean,
//! median and mode on demand
//!
//! ```
//! use stat_set::StatSet;
//!
//! let mut set = StatSet::new();
//! for value in vec![3., 1., 3., 2.] {
//!     set.add_sample(value);
//! }
//! assert_eq!(set.len(), 4);
//! assert_eq!(set.arithmetic_mean(), Ok(2.25));
//! assert_eq!(set.median(), Ok(2.5));
//! assert_eq!(set.mode(), Ok(3.));
//! ```
//!
//! The statistics only run over the set's own sorted storage, so there is no
//! public way to call them on an arbitrary slice:
//!
//! ```compile_fail
//! let _ = stat_set::mean::arithmetic_mean(&[2, 1]);
//! ```


mod error;
mod mean;
mod median;
mod mode;
mod sample;
mod stat_set;

#[cfg(feature = "sample-generator")]
pub mod sample_generator;

pub use error::{Result, StatError};
pub use sample::Sample;
pub use stat_set::StatSet;
