//! Numeric ranges with a switchable upper-bound policy.

use std::fmt;

use crate::error::{Error, Result};

/// Whether a [`Range`]'s upper edge belongs to the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UpperBound {
    /// `[min, max)`
    #[default]
    Exclusive,
    /// `[min, max]`
    Inclusive,
}

/// An ordered interval `min..max` with `max >= min`.
///
/// The lower edge is always inclusive. A range whose `max` is `+inf` is
/// unbounded and contains every finite value at or above `min`.
///
/// # Example
///
/// ```
/// use seqstats_core::binning::Range;
///
/// let r = Range::new(1.0, 5.5).unwrap();
/// assert!(r.contains(1.0));
/// assert!(!r.contains(5.5));
///
/// let r = Range::inclusive(1.0, 5.5).unwrap();
/// assert!(r.contains(5.5));
/// assert_eq!(r.to_string(), "[1, 5.5]");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    min: f64,
    max: f64,
    upper: UpperBound,
}

impl Range {
    /// Creates a range with the given upper-bound policy.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidRange` if either bound is NaN or `max < min`.
    pub fn with_upper(min: f64, max: f64, upper: UpperBound) -> Result<Self> {
        if min.is_nan() || max.is_nan() || max < min {
            return Err(Error::InvalidRange { min, max });
        }
        Ok(Self { min, max, upper })
    }

    /// Creates a half-open range `[min, max)`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidRange` if either bound is NaN or `max < min`.
    pub fn new(min: f64, max: f64) -> Result<Self> {
        Self::with_upper(min, max, UpperBound::Exclusive)
    }

    /// Creates a closed range `[min, max]`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidRange` if either bound is NaN or `max < min`.
    pub fn inclusive(min: f64, max: f64) -> Result<Self> {
        Self::with_upper(min, max, UpperBound::Inclusive)
    }

    /// Creates the range `[min, +inf)`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidRange` if `min` is NaN.
    pub fn unbounded(min: f64) -> Result<Self> {
        Self::with_upper(min, f64::INFINITY, UpperBound::Exclusive)
    }

    /// Lower edge (inclusive).
    #[inline]
    #[must_use]
    pub const fn min(&self) -> f64 {
        self.min
    }

    /// Upper edge.
    #[inline]
    #[must_use]
    pub const fn max(&self) -> f64 {
        self.max
    }

    /// Upper-bound policy.
    #[inline]
    #[must_use]
    pub const fn upper(&self) -> UpperBound {
        self.upper
    }

    /// Returns `true` if the upper edge is `+inf`.
    #[inline]
    #[must_use]
    pub fn is_unbounded(&self) -> bool {
        self.max.is_infinite() && self.max.is_sign_positive()
    }

    /// `max - min`.
    #[inline]
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    /// Returns `true` if `value` lies within the range.
    #[inline]
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min
            && match self.upper {
                UpperBound::Exclusive => value < self.max,
                UpperBound::Inclusive => value <= self.max,
            }
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let close = match self.upper {
            UpperBound::Exclusive => ')',
            UpperBound::Inclusive => ']',
        };
        write!(f, "[{}, {}{close}", self.min, self.max)
    }
}
