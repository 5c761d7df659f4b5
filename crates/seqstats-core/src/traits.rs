//! Core traits for seqstats numeric operations.
//!
//! The engines accumulate in `f64` regardless of the caller's element type.
//! [`Numeric`] describes how a representation widens into that accumulator,
//! which representation its statistics are reported in, and how the result
//! is narrowed back at the return boundary.
//!
//! # Example
//!
//! ```
//! use seqstats_core::traits::Numeric;
//!
//! fn widened_sum<T: Numeric>(data: &[T]) -> f64 {
//!     data.iter().map(|&x| x.widen()).sum()
//! }
//!
//! assert!((widened_sum(&[1_i32, 2, 3]) - 6.0).abs() < 1e-12);
//! let stat: f32 = f32::narrow(2.5).unwrap();
//! assert!((stat - 2.5).abs() < 1e-6);
//! ```

use std::fmt::Debug;

use num_traits::{Float, NumCast};

use crate::error::{Error, Result};

/// A numeric representation the engines can summarise.
///
/// # Type Bounds
///
/// - `PartialOrd`: needed for minimum/maximum (and therefore range)
/// - `NumCast`: conversions into and out of the `f64` accumulator
/// - `Copy + Send + Sync`: values are cheap to pass around and share
///
/// Implementations are provided for `i32`, `i64`, `u32`, `u64`, `f32` and
/// `f64`. Other representations (a fixed-point decimal, for example) can
/// implement the trait themselves.
pub trait Numeric: Copy + PartialOrd + NumCast + Debug + Send + Sync + 'static {
    /// The representation moment statistics are reported in.
    ///
    /// Integer inputs report in `f64`; floating-point inputs report in their
    /// own precision.
    type Stat: Numeric + Float;

    /// Widens the value into the `f64` accumulator.
    fn widen(self) -> f64;

    /// Computes `max - min` in this representation.
    ///
    /// Returns `None` if the difference does not fit.
    fn span(max: Self, min: Self) -> Option<Self>;

    /// Narrows an accumulated `f64` into [`Self::Stat`].
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if the value cannot be represented,
    /// including a finite value that would overflow to infinity.
    #[inline]
    fn narrow(value: f64) -> Result<Self::Stat> {
        let unrepresentable = || Error::NumericConversion {
            context: "f64 accumulator to statistic representation",
        };
        let narrowed = <Self::Stat as NumCast>::from(value).ok_or_else(unrepresentable)?;
        if value.is_finite() && !narrowed.is_finite() {
            return Err(unrepresentable());
        }
        Ok(narrowed)
    }
}

macro_rules! impl_numeric_integer {
    ($($t:ty),*) => {$(
        impl Numeric for $t {
            type Stat = f64;

            #[inline]
            #[allow(clippy::cast_precision_loss, clippy::cast_lossless)]
            fn widen(self) -> f64 {
                self as f64
            }

            #[inline]
            fn span(max: Self, min: Self) -> Option<Self> {
                max.checked_sub(min)
            }
        }
    )*};
}

macro_rules! impl_numeric_float {
    ($($t:ty),*) => {$(
        impl Numeric for $t {
            type Stat = $t;

            #[inline]
            #[allow(clippy::cast_lossless)]
            fn widen(self) -> f64 {
                self as f64
            }

            #[inline]
            fn span(max: Self, min: Self) -> Option<Self> {
                Some(max - min)
            }
        }
    )*};
}

impl_numeric_integer!(i32, i64, u32, u64);
impl_numeric_float!(f32, f64);

/// Validates that `count` observations are enough for `statistic`.
///
/// # Errors
///
/// - `Error::EmptyInput` if `count` is zero
/// - `Error::InsufficientData` if `count` is below `required`
#[inline]
pub const fn validate_count(count: usize, required: usize, statistic: &'static str) -> Result<()> {
    if count == 0 {
        Err(Error::EmptyInput)
    } else if count < required {
        Err(Error::InsufficientData {
            statistic,
            required,
            actual: count,
        })
    } else {
        Ok(())
    }
}

/// Validates a requested number of histogram bins.
///
/// # Errors
///
/// Returns `Error::InvalidBinCount` if `bin_count` is zero.
#[inline]
pub const fn validate_bin_count(bin_count: usize) -> Result<()> {
    if bin_count == 0 {
        Err(Error::InvalidBinCount {
            bin_count,
            reason: "bin count must be at least 1",
        })
    } else {
        Ok(())
    }
}
