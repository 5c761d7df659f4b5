//! Helpers for comparing computed statistics.
//!
//! Moment statistics pass through several floating-point operations, so
//! results rarely match a reference value bit for bit. These helpers compare
//! within a tolerance.
//!
//! ```
//! use seqstats::utils::{approx_eq, EPSILON};
//! use seqstats::stats::variance_p;
//!
//! let var = variance_p(&[0.1, 0.2, 0.3]).unwrap();
//! assert!(approx_eq(var, 0.02 / 3.0, EPSILON));
//! ```

use num_traits::Float;

/// Absolute tolerance for results accumulated in `f64`.
pub const EPSILON: f64 = 1e-10;

/// Absolute tolerance for `f32` results or long accumulations.
pub const LOOSE_EPSILON: f64 = 1e-6;

/// Returns `true` if `a` and `b` differ by less than `tolerance`.
///
/// Two NaNs compare equal, so a statistic that is undefined for its input can
/// be checked against an expected NaN.
///
/// ```
/// use seqstats::utils::approx_eq;
///
/// assert!(approx_eq(2.0_f32, 2.000_000_1, 1e-6));
/// assert!(approx_eq(f64::NAN, f64::NAN, 1e-10));
/// assert!(!approx_eq(f64::NAN, 0.0, 1e-10));
/// ```
#[inline]
#[must_use]
pub fn approx_eq<T: Float>(a: T, b: T, tolerance: T) -> bool {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => true,
        (false, false) => (a - b).abs() < tolerance,
        _ => false,
    }
}

/// Returns `true` if the difference between `a` and `b`, relative to the
/// larger magnitude, is below `rel_tolerance`.
///
/// ```
/// use seqstats::utils::approx_eq_relative;
///
/// assert!(approx_eq_relative(1e12, 1e12 + 1.0, 1e-9));
/// assert!(!approx_eq_relative(1e-12, 2e-12, 1e-9));
/// ```
#[inline]
#[must_use]
pub fn approx_eq_relative<T: Float>(a: T, b: T, rel_tolerance: T) -> bool {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => return true,
        (false, false) => {}
        _ => return false,
    }
    let scale = a.abs().max(b.abs());
    if scale.is_zero() {
        return true;
    }
    (a - b).abs() / scale < rel_tolerance
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approx_eq() {
        assert!(approx_eq(1.0, 1.0 + 1e-12, EPSILON));
        assert!(!approx_eq(1.0, 1.0 + 1e-9, EPSILON));
        assert!(approx_eq(1.0_f32, 1.000_000_5, 1e-6));
    }

    #[test]
    fn test_approx_eq_nan() {
        assert!(approx_eq(f64::NAN, f64::NAN, EPSILON));
        assert!(!approx_eq(1.0, f64::NAN, EPSILON));
        assert!(!approx_eq(f64::NAN, 1.0, EPSILON));
    }

    #[test]
    fn test_approx_eq_relative() {
        assert!(approx_eq_relative(0.0, 0.0, 1e-9));
        assert!(approx_eq_relative(-0.0, 0.0, 1e-9));
        assert!(approx_eq_relative(1e10, 1e10 + 1.0, 1e-9));
        assert!(!approx_eq_relative(1.0, 1.1, 1e-3));
        assert!(!approx_eq_relative(f64::NAN, 1.0, 1e-3));
    }
}
