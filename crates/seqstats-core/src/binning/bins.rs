//! Bin construction and assignment.
//!
//! [`create_bins`] splits an interval into equal-width, contiguous bins
//! according to a [`BinningMode`]. [`assign_bins`] then tallies a sequence
//! into those bins in a single pass, returning new bins rather than mutating
//! the ones it was given.
//!
//! # Example
//!
//! ```
//! use seqstats_core::binning::{assign_bins, create_bins, BinningMode};
//!
//! let data: Vec<f64> = (1..=10).map(f64::from).collect();
//! let bins = create_bins(1.0, 10.0, 2, BinningMode::Unbounded).unwrap();
//! let bins = assign_bins(data, &bins).unwrap();
//!
//! assert_eq!(bins[0].range().to_string(), "[1, 5.5)");
//! assert_eq!(bins[1].range().to_string(), "[5.5, inf)");
//! assert_eq!(bins[0].count(), 5);
//! assert_eq!(bins[1].count(), 5);
//! ```

use super::range::Range;
use super::BinningMode;
use crate::error::{Error, Result};
use crate::traits::validate_bin_count;

/// Fraction of the data span added to each side under [`BinningMode::ExpandRange`].
pub const EXPANSION_FRACTION: f64 = 0.001;

/// Padding added to each side under [`BinningMode::ExpandRange`] when every
/// value is identical.
pub const DEGENERATE_PADDING: f64 = 0.5;

/// A histogram bin: a [`Range`] and the number of values that fell into it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bin {
    range: Range,
    count: usize,
}

impl Bin {
    /// Creates an empty bin.
    #[must_use]
    pub const fn new(range: Range) -> Self {
        Self { range, count: 0 }
    }

    /// Creates a bin holding `count` values.
    #[must_use]
    pub const fn with_count(range: Range, count: usize) -> Self {
        Self { range, count }
    }

    /// The interval this bin covers.
    #[inline]
    #[must_use]
    pub const fn range(&self) -> &Range {
        &self.range
    }

    /// Number of values assigned to this bin.
    #[inline]
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }
}

#[inline]
#[allow(clippy::cast_precision_loss)]
fn index_as_f64(index: usize) -> f64 {
    index as f64
}

/// The next representable `f64` above a finite `x`.
fn step_up(x: f64) -> f64 {
    if x == 0.0 {
        f64::from_bits(1)
    } else if x > 0.0 {
        f64::from_bits(x.to_bits() + 1)
    } else {
        f64::from_bits(x.to_bits() - 1)
    }
}

fn step_down(x: f64) -> f64 {
    -step_up(-x)
}

/// Widens `[min, max]` so both ends lie strictly inside the result.
///
/// Fails when an extreme is already the largest finite magnitude and no
/// finite edge lies beyond it.
fn expanded_bounds(min: f64, max: f64) -> Result<(f64, f64)> {
    // Four ULPs at the larger magnitude keeps the padding visible after rounding.
    let ulp_floor = min.abs().max(max.abs()) * f64::EPSILON * 4.0;
    let span = max - min;
    let pad = if span.is_infinite() {
        (max / 2.0 - min / 2.0) * (2.0 * EXPANSION_FRACTION)
    } else if span > 0.0 {
        (span * EXPANSION_FRACTION).max(ulp_floor)
    } else {
        DEGENERATE_PADDING.max(ulp_floor)
    };

    // A pad that rounds away entirely (subnormal spans) still moves each edge
    // by one representable step.
    let mut lower = (min - pad).max(-f64::MAX);
    if lower >= min {
        lower = step_down(min);
    }
    let mut upper = (max + pad).min(f64::MAX);
    if upper <= max {
        upper = step_up(max);
    }

    if lower.is_finite() && upper.is_finite() {
        Ok((lower, upper))
    } else {
        Err(Error::InvalidRange { min, max })
    }
}

/// Builds `bin_count` contiguous, equal-width bins covering `[min, max]`.
///
/// Bin `i` spans `[lower + width * i, lower + width * (i + 1))`; each bin
/// starts exactly where the previous one ends. Intervals wider than
/// `f64::MAX` are split from `lower / n` and `upper / n` so the bins stay
/// equal-width. The last bin depends on `mode`:
///
/// | mode                | effective interval          | last bin          |
/// |---------------------|-----------------------------|-------------------|
/// | `Unbounded`         | `[min, max]`                | `[edge, +inf)`    |
/// | `MaxValueInclusive` | `[min, max]`                | `[edge, max]`     |
/// | `ExpandRange`       | `[min - pad, max + pad]`    | `[edge, max+pad)` |
///
/// # Errors
///
/// - `Error::InvalidBinCount` if `bin_count` is zero
/// - `Error::InvalidRange` if a bound is not finite or `max < min`, or if
///   `ExpandRange` cannot place a finite edge beyond `±f64::MAX`
pub fn create_bins(min: f64, max: f64, bin_count: usize, mode: BinningMode) -> Result<Vec<Bin>> {
    validate_bin_count(bin_count)?;
    if !min.is_finite() || !max.is_finite() || max < min {
        return Err(Error::InvalidRange { min, max });
    }

    let (lower, upper) = match mode {
        BinningMode::ExpandRange => expanded_bounds(min, max)?,
        BinningMode::Unbounded | BinningMode::MaxValueInclusive => (min, max),
    };
    let n = index_as_f64(bin_count);
    let span = upper - lower;
    let edge = |i: usize| {
        let t = index_as_f64(i);
        if span.is_finite() {
            lower + span / n * t
        } else {
            lower / n * (n - t) + upper / n * t
        }
    };

    let mut bins = Vec::with_capacity(bin_count);
    let mut start = lower;
    for i in 1..bin_count {
        // Clamped so rounding can never produce an edge past `upper` or before `start`.
        let end = edge(i).min(upper).max(start);
        bins.push(Bin::new(Range::new(start, end)?));
        start = end;
    }

    let last = match mode {
        BinningMode::Unbounded => Range::unbounded(start)?,
        BinningMode::MaxValueInclusive => Range::inclusive(start, upper)?,
        BinningMode::ExpandRange => Range::new(start, upper)?,
    };
    bins.push(Bin::new(last));

    Ok(bins)
}

/// Finds the index of the bin containing `value`.
///
/// Bins must be contiguous and in ascending order, as produced by
/// [`create_bins`]. Runs in `O(log n)`.
#[must_use]
pub fn locate_bin(bins: &[Bin], value: f64) -> Option<usize> {
    let last = bins.len().checked_sub(1)?;
    let index = bins
        .partition_point(|bin| bin.range.max() <= value)
        .min(last);
    bins[index].range.contains(value).then_some(index)
}

/// Tallies `values` into `bins`.
///
/// Returns a new set of bins with the same ranges whose counts are the
/// original counts plus the number of values that landed in each.
///
/// # Errors
///
/// Returns `Error::UnassignedValue` for the first value no bin contains (NaN,
/// or a value outside the interval the bins were built for).
pub fn assign_bins<I>(values: I, bins: &[Bin]) -> Result<Vec<Bin>>
where
    I: IntoIterator<Item = f64>,
{
    let initial: Vec<usize> = bins.iter().map(Bin::count).collect();

    let counts = values.into_iter().try_fold(initial, |mut counts, value| {
        let index = locate_bin(bins, value).ok_or(Error::UnassignedValue { value })?;
        counts[index] += 1;
        Ok::<_, Error>(counts)
    })?;

    Ok(bins
        .iter()
        .zip(counts)
        .map(|(bin, count)| Bin::with_count(bin.range, count))
        .collect())
}
