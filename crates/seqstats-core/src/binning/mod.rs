//! Histogram binning engine.
//!
//! A histogram is built in two steps: [`create_bins`] turns an interval and a
//! bin count into contiguous bins, and [`assign_bins`] tallies values into
//! them. [`bin_values`] runs both over a re-iterable sequence, taking the
//! interval from the data itself.

mod bins;
mod range;

pub use bins::{
    assign_bins, create_bins, locate_bin, Bin, DEGENERATE_PADDING, EXPANSION_FRACTION,
};
pub use range::{Range, UpperBound};

use crate::error::Result;
use crate::kernels::extrema::min_max;

/// How the data interval is mapped onto bins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BinningMode {
    /// Bins start at the sequence minimum; the last bin extends to `+inf`.
    #[default]
    Unbounded,
    /// Bins span `[min, max]` exactly; the last bin includes `max`.
    MaxValueInclusive,
    /// The interval is padded on both sides so every value falls strictly
    /// inside a half-open bin.
    ExpandRange,
}

/// Builds a histogram of `values` with `bin_count` bins.
///
/// The sequence is walked twice: once for its extrema, once to tally.
///
/// # Errors
///
/// - `Error::EmptyInput` if the sequence is empty
/// - `Error::InvalidBinCount` if `bin_count` is zero
/// - `Error::InvalidRange` if the extrema are not finite
///
/// # Example
///
/// ```
/// use seqstats_core::binning::{bin_values, BinningMode};
///
/// let bins = bin_values([1.0, 2.0, 2.5, 4.0], 3, BinningMode::MaxValueInclusive).unwrap();
/// let counts: Vec<usize> = bins.iter().map(|b| b.count()).collect();
/// assert_eq!(counts, vec![1, 2, 1]);
/// ```
pub fn bin_values<I>(values: I, bin_count: usize, mode: BinningMode) -> Result<Vec<Bin>>
where
    I: IntoIterator<Item = f64>,
    I::IntoIter: Clone,
{
    let iter = values.into_iter();
    let (min, max) = min_max(iter.clone())?;
    let bins = create_bins(min, max, bin_count, mode)?;
    assign_bins(iter, &bins)
}
