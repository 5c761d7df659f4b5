//! Moment statistics over `f64` sequences.
//!
//! Every kernel takes an `IntoIterator<Item = f64>`. Kernels that need more
//! than one pass over the data additionally require the iterator to be
//! `Clone`, so a lazily mapped slice can be re-walked without first being
//! collected into a buffer.
//!
//! # Conventions
//!
//! - **Sample statistics** divide by `n - 1` and need at least 2 values.
//! - **Population statistics** divide by `n` and need at least 1 value.
//! - **Skewness** is the adjusted Fisher-Pearson estimator and needs 3 values.
//! - **Kurtosis** is the sample excess kurtosis and needs 4 values.
//! - Integer powers above two go through `powf` so results agree with
//!   reference outputs computed with a general `pow` routine.
//!
//! A constant sequence has zero standard deviation, so skewness and kurtosis
//! of such a sequence are NaN.
//!
//! # Example
//!
//! ```
//! use seqstats_core::kernels::moments::{kurtosis, population_variance, sample_variance};
//!
//! let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
//! assert!((population_variance(data).unwrap() - 4.0).abs() < 1e-12);
//! assert!((sample_variance(data).unwrap() - 32.0 / 7.0).abs() < 1e-12);
//! assert!((kurtosis(data).unwrap() - 0.940_625).abs() < 1e-9);
//! ```

use crate::error::Result;
use crate::traits::validate_count;

#[inline]
#[allow(clippy::cast_precision_loss)]
fn count_as_f64(count: usize) -> f64 {
    count as f64
}

/// Count and arithmetic mean from a single pass.
#[derive(Debug, Clone, Copy)]
struct Centre {
    count: usize,
    mean: f64,
}

fn centre<I>(values: I, required: usize, statistic: &'static str) -> Result<Centre>
where
    I: IntoIterator<Item = f64>,
{
    let (count, sum) = values
        .into_iter()
        .fold((0_usize, 0.0_f64), |(count, sum), x| (count + 1, sum + x));
    validate_count(count, required, statistic)?;
    Ok(Centre {
        count,
        mean: sum / count_as_f64(count),
    })
}

fn squared_deviations<I>(values: I, mean: f64) -> f64
where
    I: IntoIterator<Item = f64>,
{
    values.into_iter().fold(0.0, |acc, x| {
        let diff = x - mean;
        acc + diff * diff
    })
}

/// Running moments for one statistic call.
///
/// The second moment follows Welford's recurrence, so it is taken about the
/// running mean as it evolves. The fourth moment is taken about a fixed
/// centre supplied up front (the true mean from a previous pass). Kurtosis is
/// defined in terms of exactly this pair.
#[derive(Debug, Clone, Copy)]
pub(crate) struct MomentAccumulator {
    count: usize,
    running_mean: f64,
    m2: f64,
    m4: f64,
    centre: f64,
}

impl MomentAccumulator {
    /// Creates an empty accumulator whose fourth moment is taken about `centre`.
    pub(crate) const fn centred_at(centre: f64) -> Self {
        Self {
            count: 0,
            running_mean: 0.0,
            m2: 0.0,
            m4: 0.0,
            centre,
        }
    }

    pub(crate) fn update(&mut self, value: f64) {
        self.count += 1;

        // Welford's algorithm
        let delta = value - self.running_mean;
        self.running_mean += delta / count_as_f64(self.count);
        self.m2 += delta * (value - self.running_mean);

        self.m4 += (value - self.centre).powf(4.0);
    }

    pub(crate) const fn count(&self) -> usize {
        self.count
    }

    /// Sample variance from the Welford second moment (`m2 / (n - 1)`).
    pub(crate) fn sample_variance(&self) -> f64 {
        self.m2 / count_as_f64(self.count - 1)
    }

    pub(crate) const fn fourth_moment(&self) -> f64 {
        self.m4
    }
}

/// Computes the arithmetic mean.
///
/// # Errors
///
/// Returns `Error::EmptyInput` if the sequence is empty.
pub fn mean<I>(values: I) -> Result<f64>
where
    I: IntoIterator<Item = f64>,
{
    centre(values, 1, "mean").map(|c| c.mean)
}

/// Computes the sample variance (divides by `n - 1`).
///
/// # Errors
///
/// - `Error::EmptyInput` if the sequence is empty
/// - `Error::InsufficientData` if it holds a single value
pub fn sample_variance<I>(values: I) -> Result<f64>
where
    I: IntoIterator<Item = f64>,
    I::IntoIter: Clone,
{
    let iter = values.into_iter();
    let c = centre(iter.clone(), 2, "variance")?;
    Ok(squared_deviations(iter, c.mean) / count_as_f64(c.count - 1))
}

/// Computes the population variance (divides by `n`).
///
/// # Errors
///
/// Returns `Error::EmptyInput` if the sequence is empty.
pub fn population_variance<I>(values: I) -> Result<f64>
where
    I: IntoIterator<Item = f64>,
    I::IntoIter: Clone,
{
    let iter = values.into_iter();
    let c = centre(iter.clone(), 1, "population variance")?;
    Ok(squared_deviations(iter, c.mean) / count_as_f64(c.count))
}

/// Computes the sample standard deviation, `sqrt(sample_variance)`.
///
/// # Errors
///
/// Same as [`sample_variance`].
pub fn sample_std_dev<I>(values: I) -> Result<f64>
where
    I: IntoIterator<Item = f64>,
    I::IntoIter: Clone,
{
    sample_variance(values).map(f64::sqrt)
}

/// Computes the population standard deviation, `sqrt(population_variance)`.
///
/// # Errors
///
/// Same as [`population_variance`].
pub fn population_std_dev<I>(values: I) -> Result<f64>
where
    I: IntoIterator<Item = f64>,
    I::IntoIter: Clone,
{
    population_variance(values).map(f64::sqrt)
}

/// Computes the bias-corrected sample skewness.
///
/// ```text
/// s      = sample standard deviation
/// M3     = Σ ((x - mean) / s)^3
/// result = M3 * n / ((n - 1) * (n - 2))
/// ```
///
/// # Errors
///
/// - `Error::EmptyInput` if the sequence is empty
/// - `Error::InsufficientData` if it holds fewer than 3 values
pub fn skewness<I>(values: I) -> Result<f64>
where
    I: IntoIterator<Item = f64>,
    I::IntoIter: Clone,
{
    let iter = values.into_iter();
    let c = centre(iter.clone(), 3, "skewness")?;
    let s = (squared_deviations(iter.clone(), c.mean) / count_as_f64(c.count - 1)).sqrt();

    let m3 = iter.fold(0.0, |acc, x| acc + ((x - c.mean) / s).powf(3.0));

    let n = count_as_f64(c.count);
    Ok(m3 * n / ((n - 1.0) * (n - 2.0)))
}

/// Computes the sample excess kurtosis.
///
/// The first pass finds the mean. The second pass accumulates a Welford
/// second moment `M2` (about the running mean) together with a fourth
/// moment `M4` about the mean from the first pass:
///
/// ```text
/// s      = sqrt(M2 / (n - 1))
/// result = n(n+1) / ((n-1)(n-2)(n-3)) * M4 / s^4  -  3(n-1)^2 / ((n-2)(n-3))
/// ```
///
/// # Errors
///
/// - `Error::EmptyInput` if the sequence is empty
/// - `Error::InsufficientData` if it holds fewer than 4 values
pub fn kurtosis<I>(values: I) -> Result<f64>
where
    I: IntoIterator<Item = f64>,
    I::IntoIter: Clone,
{
    let iter = values.into_iter();
    let c = centre(iter.clone(), 4, "kurtosis")?;

    let mut acc = MomentAccumulator::centred_at(c.mean);
    iter.for_each(|x| acc.update(x));

    let s = acc.sample_variance().sqrt();
    let n = count_as_f64(acc.count());

    let term1 = (n * (n + 1.0)) / ((n - 1.0) * (n - 2.0) * (n - 3.0));
    let term2 = acc.fourth_moment() / s.powf(4.0);
    let term3 = (3.0 * (n - 1.0).powf(2.0)) / ((n - 2.0) * (n - 3.0));

    Ok(term1 * term2 - term3)
}
