//! Method-call syntax for slices.
//!
//! [`Statistics`] is implemented for `[T]` and [`NullableStatistics`] for
//! `[Option<T>]`, so anything that dereferences to a slice (arrays, `Vec`)
//! can call the statistics directly.
//!
//! # Example
//!
//! ```
//! use seqstats::ext::{NullableStatistics, Statistics};
//!
//! let dense: Vec<f64> = vec![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
//! assert!((dense.std_dev_p().unwrap() - 2.0).abs() < 1e-10);
//!
//! let sparse = vec![Some(1), None, Some(3)];
//! assert_eq!(sparse.present_range().unwrap(), Some(2));
//! ```

use seqstats_core::binning::{Bin, BinningMode};

use crate::error::Result;
use crate::traits::Numeric;
use crate::{histogram, nullable, stats};

/// Statistics over a slice of numbers.
///
/// See [`crate::stats`] for the semantics of each method.
pub trait Statistics<T: Numeric> {
    /// `max - min`.
    ///
    /// # Errors
    ///
    /// See [`stats::range`].
    fn range(&self) -> Result<T>;

    /// Arithmetic mean.
    ///
    /// # Errors
    ///
    /// See [`stats::mean`].
    fn mean(&self) -> Result<T::Stat>;

    /// Sample variance.
    ///
    /// # Errors
    ///
    /// See [`stats::variance`].
    fn variance(&self) -> Result<T::Stat>;

    /// Population variance.
    ///
    /// # Errors
    ///
    /// See [`stats::variance_p`].
    fn variance_p(&self) -> Result<T::Stat>;

    /// Sample standard deviation.
    ///
    /// # Errors
    ///
    /// See [`stats::std_dev`].
    fn std_dev(&self) -> Result<T::Stat>;

    /// Population standard deviation.
    ///
    /// # Errors
    ///
    /// See [`stats::std_dev_p`].
    fn std_dev_p(&self) -> Result<T::Stat>;

    /// Sample skewness.
    ///
    /// # Errors
    ///
    /// See [`stats::skewness`].
    fn skewness(&self) -> Result<T::Stat>;

    /// Sample excess kurtosis.
    ///
    /// # Errors
    ///
    /// See [`stats::kurtosis`].
    fn kurtosis(&self) -> Result<T::Stat>;

    /// Histogram with `bin_count` bins.
    ///
    /// # Errors
    ///
    /// See [`histogram::histogram`].
    fn histogram(&self, bin_count: usize, mode: BinningMode) -> Result<Vec<Bin>>;
}

impl<T: Numeric> Statistics<T> for [T] {
    fn range(&self) -> Result<T> {
        stats::range(self)
    }

    fn mean(&self) -> Result<T::Stat> {
        stats::mean(self)
    }

    fn variance(&self) -> Result<T::Stat> {
        stats::variance(self)
    }

    fn variance_p(&self) -> Result<T::Stat> {
        stats::variance_p(self)
    }

    fn std_dev(&self) -> Result<T::Stat> {
        stats::std_dev(self)
    }

    fn std_dev_p(&self) -> Result<T::Stat> {
        stats::std_dev_p(self)
    }

    fn skewness(&self) -> Result<T::Stat> {
        stats::skewness(self)
    }

    fn kurtosis(&self) -> Result<T::Stat> {
        stats::kurtosis(self)
    }

    fn histogram(&self, bin_count: usize, mode: BinningMode) -> Result<Vec<Bin>> {
        histogram::histogram(self, bin_count, mode)
    }
}

/// Statistics over the present values of a slice of optional numbers.
///
/// Each method returns `Ok(None)` when no value is present. See
/// [`crate::nullable`] for details.
pub trait NullableStatistics<T: Numeric> {
    /// `max - min` of the present values.
    ///
    /// # Errors
    ///
    /// See [`nullable::range`].
    fn present_range(&self) -> Result<Option<T>>;

    /// Arithmetic mean of the present values.
    ///
    /// # Errors
    ///
    /// See [`nullable::mean`].
    fn present_mean(&self) -> Result<Option<T::Stat>>;

    /// Sample variance of the present values.
    ///
    /// # Errors
    ///
    /// See [`nullable::variance`].
    fn present_variance(&self) -> Result<Option<T::Stat>>;

    /// Population variance of the present values.
    ///
    /// # Errors
    ///
    /// See [`nullable::variance_p`].
    fn present_variance_p(&self) -> Result<Option<T::Stat>>;

    /// Sample standard deviation of the present values.
    ///
    /// # Errors
    ///
    /// See [`nullable::std_dev`].
    fn present_std_dev(&self) -> Result<Option<T::Stat>>;

    /// Population standard deviation of the present values.
    ///
    /// # Errors
    ///
    /// See [`nullable::std_dev_p`].
    fn present_std_dev_p(&self) -> Result<Option<T::Stat>>;

    /// Sample skewness of the present values.
    ///
    /// # Errors
    ///
    /// See [`nullable::skewness`].
    fn present_skewness(&self) -> Result<Option<T::Stat>>;

    /// Sample excess kurtosis of the present values.
    ///
    /// # Errors
    ///
    /// See [`nullable::kurtosis`].
    fn present_kurtosis(&self) -> Result<Option<T::Stat>>;

    /// Histogram of the present values.
    ///
    /// # Errors
    ///
    /// See [`histogram::histogram_nullable`].
    fn present_histogram(&self, bin_count: usize, mode: BinningMode) -> Result<Option<Vec<Bin>>>;
}

impl<T: Numeric> NullableStatistics<T> for [Option<T>] {
    fn present_range(&self) -> Result<Option<T>> {
        nullable::range(self)
    }

    fn present_mean(&self) -> Result<Option<T::Stat>> {
        nullable::mean(self)
    }

    fn present_variance(&self) -> Result<Option<T::Stat>> {
        nullable::variance(self)
    }

    fn present_variance_p(&self) -> Result<Option<T::Stat>> {
        nullable::variance_p(self)
    }

    fn present_std_dev(&self) -> Result<Option<T::Stat>> {
        nullable::std_dev(self)
    }

    fn present_std_dev_p(&self) -> Result<Option<T::Stat>> {
        nullable::std_dev_p(self)
    }

    fn present_skewness(&self) -> Result<Option<T::Stat>> {
        nullable::skewness(self)
    }

    fn present_kurtosis(&self) -> Result<Option<T::Stat>> {
        nullable::kurtosis(self)
    }

    fn present_histogram(&self, bin_count: usize, mode: BinningMode) -> Result<Option<Vec<Bin>>> {
        histogram::histogram_nullable(self, bin_count, mode)
    }
}
