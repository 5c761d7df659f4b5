//! Shared test utilities for seqstats tests.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Standard epsilon for high-precision comparisons.
#[allow(dead_code)]
pub const EPSILON: f64 = 1e-10;

/// Looser epsilon for f32 results and long accumulations.
#[allow(dead_code)]
pub const LOOSE_EPSILON: f64 = 1e-6;

/// Approximate equality; two NaNs compare equal.
#[allow(dead_code)]
pub fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    if a.is_nan() && b.is_nan() {
        return true;
    }
    if a.is_nan() || b.is_nan() {
        return false;
    }
    (a - b).abs() < eps
}

/// Reproducible sample of `len` values uniform in `low..high`.
#[allow(dead_code)]
pub fn seeded_sample(seed: u64, len: usize, low: f64, high: f64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen_range(low..high)).collect()
}

/// Reproducible sample with roughly `absent_ratio` of the slots set to `None`.
#[allow(dead_code)]
pub fn seeded_sparse_sample(seed: u64, len: usize, absent_ratio: f64) -> Vec<Option<f64>> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len)
        .map(|_| {
            let value = rng.gen_range(-100.0..100.0);
            (!rng.gen_bool(absent_ratio)).then_some(value)
        })
        .collect()
}

/// Reference two-pass variance used to cross-check the library.
#[allow(dead_code)]
#[allow(clippy::cast_precision_loss)]
pub fn naive_variance(data: &[f64], ddof: usize) -> f64 {
    let n = data.len() as f64;
    let mean = data.iter().sum::<f64>() / n;
    data.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - ddof as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_sample_is_reproducible() {
        assert_eq!(seeded_sample(7, 16, 0.0, 1.0), seeded_sample(7, 16, 0.0, 1.0));
    }

    #[test]
    fn test_naive_variance() {
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert!(approx_eq(naive_variance(&data, 0), 4.0, EPSILON));
    }
}
