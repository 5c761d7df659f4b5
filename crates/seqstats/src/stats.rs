//! Statistics over slices of numbers.
//!
//! Each statistic comes in two forms:
//!
//! - `name(&[T])` summarises the values directly
//! - `name_by(&[S], selector)` summarises `selector(element)` for each element
//!
//! Moment statistics are accumulated in `f64` and reported in
//! [`Numeric::Stat`]: `f64` for integer inputs, the input precision for
//! floating-point inputs. [`range`] is reported in the input representation.
//!
//! # Example
//!
//! ```
//! use seqstats::stats::{kurtosis, range, std_dev_by};
//!
//! let data = [1_i32, 2, 3, 4, 5, 6, 7, 8, 9, 10];
//! assert_eq!(range(&data).unwrap(), 9);
//! assert!((kurtosis(&data).unwrap() + 1.2).abs() < 1e-10);
//!
//! struct Trade { qty: u32 }
//! let trades = [Trade { qty: 2 }, Trade { qty: 4 }, Trade { qty: 6 }];
//! assert!((std_dev_by(&trades, |t| t.qty).unwrap() - 2.0).abs() < 1e-10);
//! ```

use seqstats_core::kernels::{self, moments};

use crate::error::Result;
use crate::traits::Numeric;

pub(crate) fn range_of<T, I>(values: I) -> Result<T>
where
    T: Numeric,
    I: Iterator<Item = T>,
{
    kernels::range(values)
}

pub(crate) fn mean_of<T, I>(values: I) -> Result<T::Stat>
where
    T: Numeric,
    I: Iterator<Item = T>,
{
    T::narrow(moments::mean(values.map(Numeric::widen))?)
}

pub(crate) fn variance_of<T, I>(values: I) -> Result<T::Stat>
where
    T: Numeric,
    I: Iterator<Item = T> + Clone,
{
    T::narrow(moments::sample_variance(values.map(Numeric::widen))?)
}

pub(crate) fn variance_p_of<T, I>(values: I) -> Result<T::Stat>
where
    T: Numeric,
    I: Iterator<Item = T> + Clone,
{
    T::narrow(moments::population_variance(values.map(Numeric::widen))?)
}

// The variance is narrowed before the root is taken, then narrowed again, so
// reduced-precision inputs see the same rounding as their variance.
pub(crate) fn std_dev_of<T, I>(values: I) -> Result<T::Stat>
where
    T: Numeric,
    I: Iterator<Item = T> + Clone,
{
    T::narrow(variance_of(values)?.widen().sqrt())
}

pub(crate) fn std_dev_p_of<T, I>(values: I) -> Result<T::Stat>
where
    T: Numeric,
    I: Iterator<Item = T> + Clone,
{
    T::narrow(variance_p_of(values)?.widen().sqrt())
}

pub(crate) fn skewness_of<T, I>(values: I) -> Result<T::Stat>
where
    T: Numeric,
    I: Iterator<Item = T> + Clone,
{
    T::narrow(moments::skewness(values.map(Numeric::widen))?)
}

pub(crate) fn kurtosis_of<T, I>(values: I) -> Result<T::Stat>
where
    T: Numeric,
    I: Iterator<Item = T> + Clone,
{
    T::narrow(moments::kurtosis(values.map(Numeric::widen))?)
}

/// Computes `max - min`.
///
/// # Errors
///
/// - `Error::EmptyInput` if `data` is empty
/// - `Error::Overflow` if the difference does not fit in `T`
pub fn range<T: Numeric>(data: &[T]) -> Result<T> {
    range_of(data.iter().copied())
}

/// Computes `max - min` of the projected values.
///
/// # Errors
///
/// Same as [`range`].
pub fn range_by<S, T, F>(data: &[S], selector: F) -> Result<T>
where
    T: Numeric,
    F: Fn(&S) -> T,
{
    range_of(data.iter().map(&selector))
}

/// Computes the arithmetic mean.
///
/// # Errors
///
/// Returns `Error::EmptyInput` if `data` is empty.
pub fn mean<T: Numeric>(data: &[T]) -> Result<T::Stat> {
    mean_of(data.iter().copied())
}

/// Computes the arithmetic mean of the projected values.
///
/// # Errors
///
/// Same as [`mean`].
pub fn mean_by<S, T, F>(data: &[S], selector: F) -> Result<T::Stat>
where
    T: Numeric,
    F: Fn(&S) -> T,
{
    mean_of(data.iter().map(&selector))
}

/// Computes the sample variance (divides by `n - 1`).
///
/// # Errors
///
/// - `Error::EmptyInput` if `data` is empty
/// - `Error::InsufficientData` if `data` holds a single value
pub fn variance<T: Numeric>(data: &[T]) -> Result<T::Stat> {
    variance_of(data.iter().copied())
}

/// Computes the sample variance of the projected values.
///
/// # Errors
///
/// Same as [`variance`].
pub fn variance_by<S, T, F>(data: &[S], selector: F) -> Result<T::Stat>
where
    T: Numeric,
    F: Fn(&S) -> T,
{
    variance_of(data.iter().map(&selector))
}

/// Computes the population variance (divides by `n`).
///
/// # Errors
///
/// Returns `Error::EmptyInput` if `data` is empty.
pub fn variance_p<T: Numeric>(data: &[T]) -> Result<T::Stat> {
    variance_p_of(data.iter().copied())
}

/// Computes the population variance of the projected values.
///
/// # Errors
///
/// Same as [`variance_p`].
pub fn variance_p_by<S, T, F>(data: &[S], selector: F) -> Result<T::Stat>
where
    T: Numeric,
    F: Fn(&S) -> T,
{
    variance_p_of(data.iter().map(&selector))
}

/// Computes the sample standard deviation.
///
/// # Errors
///
/// Same as [`variance`].
pub fn std_dev<T: Numeric>(data: &[T]) -> Result<T::Stat> {
    std_dev_of(data.iter().copied())
}

/// Computes the sample standard deviation of the projected values.
///
/// # Errors
///
/// Same as [`variance`].
pub fn std_dev_by<S, T, F>(data: &[S], selector: F) -> Result<T::Stat>
where
    T: Numeric,
    F: Fn(&S) -> T,
{
    std_dev_of(data.iter().map(&selector))
}

/// Computes the population standard deviation.
///
/// # Errors
///
/// Same as [`variance_p`].
pub fn std_dev_p<T: Numeric>(data: &[T]) -> Result<T::Stat> {
    std_dev_p_of(data.iter().copied())
}

/// Computes the population standard deviation of the projected values.
///
/// # Errors
///
/// Same as [`variance_p`].
pub fn std_dev_p_by<S, T, F>(data: &[S], selector: F) -> Result<T::Stat>
where
    T: Numeric,
    F: Fn(&S) -> T,
{
    std_dev_p_of(data.iter().map(&selector))
}

/// Computes the bias-corrected sample skewness.
///
/// # Errors
///
/// - `Error::EmptyInput` if `data` is empty
/// - `Error::InsufficientData` if `data` holds fewer than 3 values
pub fn skewness<T: Numeric>(data: &[T]) -> Result<T::Stat> {
    skewness_of(data.iter().copied())
}

/// Computes the sample skewness of the projected values.
///
/// # Errors
///
/// Same as [`skewness`].
pub fn skewness_by<S, T, F>(data: &[S], selector: F) -> Result<T::Stat>
where
    T: Numeric,
    F: Fn(&S) -> T,
{
    skewness_of(data.iter().map(&selector))
}

/// Computes the sample excess kurtosis.
///
/// # Errors
///
/// - `Error::EmptyInput` if `data` is empty
/// - `Error::InsufficientData` if `data` holds fewer than 4 values
pub fn kurtosis<T: Numeric>(data: &[T]) -> Result<T::Stat> {
    kurtosis_of(data.iter().copied())
}

/// Computes the sample excess kurtosis of the projected values.
///
/// # Errors
///
/// Same as [`kurtosis`].
pub fn kurtosis_by<S, T, F>(data: &[S], selector: F) -> Result<T::Stat>
where
    T: Numeric,
    F: Fn(&S) -> T,
{
    kurtosis_of(data.iter().map(&selector))
}
