//! Statistics over sequences with missing values.
//!
//! Absent (`None`) elements are skipped and the remaining values are passed
//! to the matching function in [`crate::stats`]. When nothing is present the
//! result is `Ok(None)` rather than an error. Every other failure (too few
//! present values for skewness, say) is still reported.
//!
//! # Example
//!
//! ```
//! use seqstats::nullable::{range, variance};
//!
//! let data: [Option<f64>; 4] = [Some(4.0), None, Some(8.0), Some(6.0)];
//! assert_eq!(range(&data).unwrap(), Some(4.0));
//! assert!((variance(&data).unwrap().unwrap() - 4.0).abs() < 1e-10);
//!
//! let nothing: [Option<f64>; 2] = [None, None];
//! assert_eq!(variance(&nothing).unwrap(), None);
//! ```

use crate::error::Result;
use crate::stats;
use crate::traits::Numeric;

/// Runs `statistic` over `values` unless the sequence is empty.
pub(crate) fn when_present<I, R, F>(values: I, statistic: F) -> Result<Option<R>>
where
    I: Iterator + Clone,
    F: FnOnce(I) -> Result<R>,
{
    if values.clone().next().is_none() {
        return Ok(None);
    }
    statistic(values).map(Some)
}

/// Computes `max - min` of the present values.
///
/// # Errors
///
/// Returns `Error::Overflow` if the difference does not fit in `T`.
pub fn range<T: Numeric>(data: &[Option<T>]) -> Result<Option<T>> {
    when_present(data.iter().filter_map(|v| *v), stats::range_of)
}

/// Computes `max - min` of the present projected values.
///
/// # Errors
///
/// Same as [`range`].
pub fn range_by<S, T, F>(data: &[S], selector: F) -> Result<Option<T>>
where
    T: Numeric,
    F: Fn(&S) -> Option<T>,
{
    when_present(data.iter().filter_map(&selector), stats::range_of)
}

/// Computes the arithmetic mean of the present values.
///
/// # Errors
///
/// Returns `Error::NumericConversion` if the mean cannot be represented.
pub fn mean<T: Numeric>(data: &[Option<T>]) -> Result<Option<T::Stat>> {
    when_present(data.iter().filter_map(|v| *v), stats::mean_of)
}

/// Computes the arithmetic mean of the present projected values.
///
/// # Errors
///
/// Same as [`mean`].
pub fn mean_by<S, T, F>(data: &[S], selector: F) -> Result<Option<T::Stat>>
where
    T: Numeric,
    F: Fn(&S) -> Option<T>,
{
    when_present(data.iter().filter_map(&selector), stats::mean_of)
}

/// Computes the sample variance of the present values.
///
/// # Errors
///
/// Returns `Error::InsufficientData` if exactly one value is present.
pub fn variance<T: Numeric>(data: &[Option<T>]) -> Result<Option<T::Stat>> {
    when_present(data.iter().filter_map(|v| *v), stats::variance_of)
}

/// Computes the sample variance of the present projected values.
///
/// # Errors
///
/// Same as [`variance`].
pub fn variance_by<S, T, F>(data: &[S], selector: F) -> Result<Option<T::Stat>>
where
    T: Numeric,
    F: Fn(&S) -> Option<T>,
{
    when_present(data.iter().filter_map(&selector), stats::variance_of)
}

/// Computes the population variance of the present values.
///
/// # Errors
///
/// Returns `Error::NumericConversion` if the result cannot be represented.
pub fn variance_p<T: Numeric>(data: &[Option<T>]) -> Result<Option<T::Stat>> {
    when_present(data.iter().filter_map(|v| *v), stats::variance_p_of)
}

/// Computes the population variance of the present projected values.
///
/// # Errors
///
/// Same as [`variance_p`].
pub fn variance_p_by<S, T, F>(data: &[S], selector: F) -> Result<Option<T::Stat>>
where
    T: Numeric,
    F: Fn(&S) -> Option<T>,
{
    when_present(data.iter().filter_map(&selector), stats::variance_p_of)
}

/// Computes the sample standard deviation of the present values.
///
/// # Errors
///
/// Same as [`variance`].
pub fn std_dev<T: Numeric>(data: &[Option<T>]) -> Result<Option<T::Stat>> {
    when_present(data.iter().filter_map(|v| *v), stats::std_dev_of)
}

/// Computes the sample standard deviation of the present projected values.
///
/// # Errors
///
/// Same as [`variance`].
pub fn std_dev_by<S, T, F>(data: &[S], selector: F) -> Result<Option<T::Stat>>
where
    T: Numeric,
    F: Fn(&S) -> Option<T>,
{
    when_present(data.iter().filter_map(&selector), stats::std_dev_of)
}

/// Computes the population standard deviation of the present values.
///
/// # Errors
///
/// Same as [`variance_p`].
pub fn std_dev_p<T: Numeric>(data: &[Option<T>]) -> Result<Option<T::Stat>> {
    when_present(data.iter().filter_map(|v| *v), stats::std_dev_p_of)
}

/// Computes the population standard deviation of the present projected values.
///
/// # Errors
///
/// Same as [`variance_p`].
pub fn std_dev_p_by<S, T, F>(data: &[S], selector: F) -> Result<Option<T::Stat>>
where
    T: Numeric,
    F: Fn(&S) -> Option<T>,
{
    when_present(data.iter().filter_map(&selector), stats::std_dev_p_of)
}

/// Computes the sample skewness of the present values.
///
/// # Errors
///
/// Returns `Error::InsufficientData` if one or two values are present.
pub fn skewness<T: Numeric>(data: &[Option<T>]) -> Result<Option<T::Stat>> {
    when_present(data.iter().filter_map(|v| *v), stats::skewness_of)
}

/// Computes the sample skewness of the present projected values.
///
/// # Errors
///
/// Same as [`skewness`].
pub fn skewness_by<S, T, F>(data: &[S], selector: F) -> Result<Option<T::Stat>>
where
    T: Numeric,
    F: Fn(&S) -> Option<T>,
{
    when_present(data.iter().filter_map(&selector), stats::skewness_of)
}

/// Computes the sample excess kurtosis of the present values.
///
/// # Errors
///
/// Returns `Error::InsufficientData` if between one and three values are present.
pub fn kurtosis<T: Numeric>(data: &[Option<T>]) -> Result<Option<T::Stat>> {
    when_present(data.iter().filter_map(|v| *v), stats::kurtosis_of)
}

/// Computes the sample excess kurtosis of the present projected values.
///
/// # Errors
///
/// Same as [`kurtosis`].
pub fn kurtosis_by<S, T, F>(data: &[S], selector: F) -> Result<Option<T::Stat>>
where
    T: Numeric,
    F: Fn(&S) -> Option<T>,
{
    when_present(data.iter().filter_map(&selector), stats::kurtosis_of)
}
