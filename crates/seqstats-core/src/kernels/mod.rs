//! Numeric kernels for the moment engine.
//!
//! - [`moments`]: mean, variance, standard deviation, skewness and kurtosis
//!   accumulated in `f64`
//! - [`extrema`]: minimum, maximum and range in the caller's representation

pub mod extrema;
pub mod moments;

pub use extrema::{extrema, min_max, range};
pub use moments::{
    kurtosis, mean, population_std_dev, population_variance, sample_std_dev, sample_variance,
    skewness,
};
