//! Histograms over slices of numbers.
//!
//! The bin interval is taken from the data: its minimum and maximum, adjusted
//! by the [`BinningMode`]. Every value lands in exactly one bin, so the bin
//! counts always sum to the number of values binned.
//!
//! # Example
//!
//! ```
//! use seqstats::histogram::{histogram, Histogram};
//! use seqstats::binning::BinningMode;
//!
//! let data = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
//! let bins = histogram(&data, 2, BinningMode::Unbounded).unwrap();
//! assert_eq!(bins[0].range().to_string(), "[1, 5.5)");
//! assert_eq!(bins[1].range().to_string(), "[5.5, inf)");
//! assert_eq!((bins[0].count(), bins[1].count()), (5, 5));
//!
//! // Same thing through the configuration builder
//! let bins = Histogram::new().bin_count(2).compute(&data).unwrap();
//! assert_eq!(bins.len(), 2);
//! ```

use seqstats_core::binning::{bin_values, Bin, BinningMode};
use seqstats_core::traits::validate_bin_count;

use crate::error::Result;
use crate::nullable::when_present;
use crate::traits::Numeric;

fn histogram_of<T, I>(values: I, bin_count: usize, mode: BinningMode) -> Result<Vec<Bin>>
where
    T: Numeric,
    I: Iterator<Item = T> + Clone,
{
    bin_values(values.map(Numeric::widen), bin_count, mode)
}

/// Builds a histogram of `data` with `bin_count` bins.
///
/// # Errors
///
/// - `Error::InvalidBinCount` if `bin_count` is zero
/// - `Error::EmptyInput` if `data` is empty
/// - `Error::InvalidRange` if `data` holds an infinite value
/// - `Error::UnassignedValue` if `data` holds NaN
pub fn histogram<T: Numeric>(data: &[T], bin_count: usize, mode: BinningMode) -> Result<Vec<Bin>> {
    validate_bin_count(bin_count)?;
    histogram_of(data.iter().copied(), bin_count, mode)
}

/// Builds a histogram of the projected values.
///
/// # Errors
///
/// Same as [`histogram`].
pub fn histogram_by<S, T, F>(
    data: &[S],
    bin_count: usize,
    mode: BinningMode,
    selector: F,
) -> Result<Vec<Bin>>
where
    T: Numeric,
    F: Fn(&S) -> T,
{
    validate_bin_count(bin_count)?;
    histogram_of(data.iter().map(&selector), bin_count, mode)
}

/// Builds a histogram of the present values, or `None` if there are none.
///
/// # Errors
///
/// Same as [`histogram`], except that an empty or all-absent input is not an error.
pub fn histogram_nullable<T: Numeric>(
    data: &[Option<T>],
    bin_count: usize,
    mode: BinningMode,
) -> Result<Option<Vec<Bin>>> {
    validate_bin_count(bin_count)?;
    when_present(data.iter().filter_map(|v| *v), |values| {
        histogram_of(values, bin_count, mode)
    })
}

/// Builds a histogram of the present projected values, or `None` if there are none.
///
/// # Errors
///
/// Same as [`histogram_nullable`].
pub fn histogram_nullable_by<S, T, F>(
    data: &[S],
    bin_count: usize,
    mode: BinningMode,
    selector: F,
) -> Result<Option<Vec<Bin>>>
where
    T: Numeric,
    F: Fn(&S) -> Option<T>,
{
    validate_bin_count(bin_count)?;
    when_present(data.iter().filter_map(&selector), |values| {
        histogram_of(values, bin_count, mode)
    })
}

/// Histogram configuration.
///
/// Defaults to 10 bins in [`BinningMode::Unbounded`].
///
/// # Example
///
/// ```
/// use seqstats::histogram::Histogram;
/// use seqstats::binning::BinningMode;
///
/// let config = Histogram::new()
///     .bin_count(4)
///     .mode(BinningMode::MaxValueInclusive);
///
/// let bins = config.compute(&[0.0, 1.0, 2.0, 3.0, 4.0]).unwrap();
/// assert_eq!(bins.iter().map(|b| b.count()).collect::<Vec<_>>(), vec![1, 1, 1, 2]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Histogram {
    bin_count: usize,
    mode: BinningMode,
}

impl Default for Histogram {
    /// Creates a configuration with 10 unbounded bins.
    fn default() -> Self {
        Self {
            bin_count: 10,
            mode: BinningMode::Unbounded,
        }
    }
}

impl Histogram {
    /// Creates a configuration with 10 unbounded bins.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of bins.
    ///
    /// Default: 10
    #[must_use]
    pub const fn bin_count(mut self, bin_count: usize) -> Self {
        self.bin_count = bin_count;
        self
    }

    /// Sets the binning mode.
    ///
    /// Default: [`BinningMode::Unbounded`]
    #[must_use]
    pub const fn mode(mut self, mode: BinningMode) -> Self {
        self.mode = mode;
        self
    }

    /// Returns the number of bins.
    #[must_use]
    pub const fn get_bin_count(&self) -> usize {
        self.bin_count
    }

    /// Returns the binning mode.
    #[must_use]
    pub const fn get_mode(&self) -> BinningMode {
        self.mode
    }

    /// Builds a histogram of `data` using this configuration.
    ///
    /// # Errors
    ///
    /// Same as [`histogram`].
    pub fn compute<T: Numeric>(&self, data: &[T]) -> Result<Vec<Bin>> {
        histogram(data, self.bin_count, self.mode)
    }

    /// Builds a histogram of the projected values using this configuration.
    ///
    /// # Errors
    ///
    /// Same as [`histogram`].
    pub fn compute_by<S, T, F>(&self, data: &[S], selector: F) -> Result<Vec<Bin>>
    where
        T: Numeric,
        F: Fn(&S) -> T,
    {
        histogram_by(data, self.bin_count, self.mode, selector)
    }

    /// Builds a histogram of the present values using this configuration.
    ///
    /// # Errors
    ///
    /// Same as [`histogram_nullable`].
    pub fn compute_nullable<T: Numeric>(&self, data: &[Option<T>]) -> Result<Option<Vec<Bin>>> {
        histogram_nullable(data, self.bin_count, self.mode)
    }

    /// Builds a histogram of the present projected values using this configuration.
    ///
    /// # Errors
    ///
    /// Same as [`histogram_nullable`].
    pub fn compute_nullable_by<S, T, F>(
        &self,
        data: &[S],
        selector: F,
    ) -> Result<Option<Vec<Bin>>>
    where
        T: Numeric,
        F: Fn(&S) -> Option<T>,
    {
        histogram_nullable_by(data, self.bin_count, self.mode, selector)
    }
}
