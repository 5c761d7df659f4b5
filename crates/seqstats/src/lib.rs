//! seqstats: descriptive statistics and histograms over numeric sequences
//!
//! Summarises slices of integers or floats: range, mean, sample and
//! population variance and standard deviation, skewness, excess kurtosis,
//! and equal-width histograms.
//!
//! # Features
//!
//! - **Generic**: `i32`, `i64`, `u32`, `u64`, `f32` and `f64` through [`Numeric`]
//! - **Projections**: every statistic has a `_by` form taking a selector
//! - **Missing values**: [`nullable`] skips `None` and yields `Ok(None)` when
//!   nothing is present
//! - **Errors, not panics**: every failure is an [`Error`] with an [`ErrorKind`]
//!
//! # Quick Start
//!
//! ```
//! use seqstats::prelude::*;
//!
//! let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
//! assert!(approx_eq(data.variance_p().unwrap(), 4.0, EPSILON));
//! assert!(approx_eq(data.skewness().unwrap(), 0.818_487_553_356_799_7, EPSILON));
//!
//! let bins = data.histogram(2, BinningMode::Unbounded).unwrap();
//! assert_eq!(bins[0].range().to_string(), "[2, 5.5)");
//! assert_eq!(bins[1].range().to_string(), "[5.5, inf)");
//! ```
//!
//! # Error Handling
//!
//! ```
//! use seqstats::{stats, ErrorKind};
//!
//! let err = stats::kurtosis(&[1.0, 2.0, 3.0]).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::InvalidState);
//!
//! let empty: [u32; 0] = [];
//! assert!(stats::mean(&empty).is_err());
//! ```

#![deny(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::perf)]
#![warn(clippy::needless_collect)]
#![allow(clippy::module_name_repetitions)]

pub use seqstats_core::{binning, error, kernels, traits};

pub mod ext;
pub mod histogram;
pub mod nullable;
pub mod prelude;
pub mod stats;
pub mod utils;

// Re-export commonly used types at crate root
pub use binning::{Bin, BinningMode, Range, UpperBound};
pub use error::{Error, ErrorKind, Result};
pub use ext::{NullableStatistics, Statistics};
pub use histogram::Histogram;
pub use traits::Numeric;
pub use utils::{approx_eq, approx_eq_relative, EPSILON, LOOSE_EPSILON};
