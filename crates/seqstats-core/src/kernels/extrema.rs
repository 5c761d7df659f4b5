//! Single-pass minimum, maximum and range.
//!
//! NaN never wins a comparison here: it is skipped when a comparable value
//! exists, and an all-NaN input yields NaN extrema.

use crate::error::{Error, Result};
use crate::traits::Numeric;

/// Returns `true` if `value` does not compare with itself (NaN).
#[inline]
fn is_unordered<T: PartialOrd>(value: &T) -> bool {
    value.partial_cmp(value).is_none()
}

/// Finds the minimum and maximum of a sequence in its own representation.
///
/// # Errors
///
/// Returns `Error::EmptyInput` if the sequence is empty.
///
/// # Example
///
/// ```
/// use seqstats_core::kernels::extrema::extrema;
///
/// assert_eq!(extrema([3, -1, 7, 2]).unwrap(), (-1, 7));
/// ```
pub fn extrema<T, I>(values: I) -> Result<(T, T)>
where
    T: PartialOrd + Copy,
    I: IntoIterator<Item = T>,
{
    let mut iter = values.into_iter();
    let first = iter.next().ok_or(Error::EmptyInput)?;

    Ok(iter.fold((first, first), |(lo, hi), x| {
        let lo = if x < lo || is_unordered(&lo) { x } else { lo };
        let hi = if x > hi || is_unordered(&hi) { x } else { hi };
        (lo, hi)
    }))
}

/// Finds the minimum and maximum of a widened `f64` sequence.
///
/// # Errors
///
/// Returns `Error::EmptyInput` if the sequence is empty.
pub fn min_max<I>(values: I) -> Result<(f64, f64)>
where
    I: IntoIterator<Item = f64>,
{
    extrema(values)
}

/// Computes `max - min` in the caller's representation.
///
/// # Errors
///
/// - `Error::EmptyInput` if the sequence is empty
/// - `Error::Overflow` if the difference does not fit in `T`
///
/// # Example
///
/// ```
/// use seqstats_core::kernels::extrema::range;
///
/// assert_eq!(range([4_i64, 9, -2]).unwrap(), 11);
/// assert!((range([0.5_f64, 2.0]).unwrap() - 1.5).abs() < 1e-12);
/// ```
pub fn range<T, I>(values: I) -> Result<T>
where
    T: Numeric,
    I: IntoIterator<Item = T>,
{
    let (min, max) = extrema(values)?;
    T::span(max, min).ok_or(Error::Overflow {
        context: "max - min exceeds the element representation",
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extrema_integers() {
        assert_eq!(extrema([5, 3, 9, 1, 7]).unwrap(), (1, 9));
    }

    #[test]
    fn test_extrema_single() {
        assert_eq!(extrema([42_u32]).unwrap(), (42, 42));
    }

    #[test]
    fn test_extrema_empty() {
        assert!(matches!(extrema(Vec::<i32>::new()), Err(Error::EmptyInput)));
    }

    #[test]
    fn test_min_max_skips_nan() {
        let (lo, hi) = min_max([f64::NAN, 2.0, f64::NAN, -1.0, 4.0]).unwrap();
        assert!((lo + 1.0).abs() < 1e-12);
        assert!((hi - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_min_max_all_nan() {
        let (lo, hi) = min_max([f64::NAN, f64::NAN]).unwrap();
        assert!(lo.is_nan());
        assert!(hi.is_nan());
    }

    #[test]
    fn test_range_non_negative() {
        assert_eq!(range([-3_i32, -3, -3]).unwrap(), 0);
        assert!((range([1.5_f32, -0.5]).unwrap() - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_range_overflow() {
        let result = range([i32::MIN, i32::MAX]);
        assert!(matches!(result, Err(Error::Overflow { .. })));
    }

    #[test]
    fn test_range_unsigned() {
        assert_eq!(range([10_u64, 3, 8]).unwrap(), 7);
    }
}
