//! seqstats-core: moment and histogram-binning engines
//!
//! This crate holds the numerical content of seqstats. Everything here works
//! on `f64` sequences (or, for range, on the caller's own representation);
//! the `seqstats` crate layers slices, optional values and projections on top.
//!
//! - [`kernels`]: mean, variance, standard deviation, skewness, kurtosis, range
//! - [`binning`]: bin construction under a [`binning::BinningMode`] and
//!   single-pass assignment

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod binning;
pub mod error;
pub mod kernels;
pub mod traits;

pub use error::{Error, ErrorKind, Result};
pub use traits::Numeric;
