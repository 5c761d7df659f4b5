//! Commonly used types and traits.
//!
//! ```
//! use seqstats::prelude::*;
//!
//! let data = [3_i64, 1, 4, 1, 5, 9, 2, 6];
//! assert_eq!(data.range().unwrap(), 8);
//!
//! let bins = Histogram::new()
//!     .bin_count(4)
//!     .mode(BinningMode::MaxValueInclusive)
//!     .compute(&data)
//!     .unwrap();
//! assert_eq!(bins.iter().map(Bin::count).sum::<usize>(), data.len());
//!
//! let sparse = [Some(2.0), None, Some(4.0)];
//! assert_eq!(sparse.present_mean().unwrap(), Some(3.0));
//! ```

// Error types
pub use crate::error::{Error, ErrorKind, Result};

// Traits
pub use crate::ext::{NullableStatistics, Statistics};
pub use crate::traits::Numeric;

// Histogram types
pub use crate::binning::{Bin, BinningMode, Range, UpperBound};
pub use crate::histogram::Histogram;

// Comparison helpers
pub use crate::utils::{approx_eq, approx_eq_relative, EPSILON, LOOSE_EPSILON};
