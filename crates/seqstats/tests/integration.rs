//! End-to-end tests through the public facade.

#![allow(clippy::float_cmp)]
#![allow(clippy::unreadable_literal)]

mod common;

use common::{approx_eq, naive_variance, seeded_sample, seeded_sparse_sample, EPSILON};
use seqstats::binning::{Bin, BinningMode, UpperBound};
use seqstats::histogram::{histogram, histogram_by, histogram_nullable, Histogram};
use seqstats::{nullable, stats, NullableStatistics, Statistics};

fn counts(bins: &[Bin]) -> Vec<usize> {
    bins.iter().map(Bin::count).collect()
}

// ==================== Histogram ====================

#[test]
fn histogram_one_to_ten_two_unbounded_bins() {
    let data = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
    let bins = histogram(&data, 2, BinningMode::Unbounded).unwrap();

    assert_eq!(bins.len(), 2);
    assert_eq!(bins[0].range().min(), 1.0);
    assert_eq!(bins[0].range().max(), 5.5);
    assert_eq!(bins[0].range().upper(), UpperBound::Exclusive);
    assert_eq!(bins[1].range().min(), 5.5);
    assert!(bins[1].range().is_unbounded());
    assert_eq!(counts(&bins), vec![5, 5]);
}

#[test]
fn histogram_bins_are_contiguous() {
    let data = seeded_sample(11, 500, -50.0, 50.0);
    for mode in [
        BinningMode::Unbounded,
        BinningMode::MaxValueInclusive,
        BinningMode::ExpandRange,
    ] {
        let bins = histogram(&data, 7, mode).unwrap();
        for pair in bins.windows(2) {
            assert_eq!(pair[0].range().max(), pair[1].range().min(), "{mode:?}");
        }
        assert_eq!(counts(&bins).iter().sum::<usize>(), data.len(), "{mode:?}");
    }
}

#[test]
fn histogram_modes_place_max_in_last_bin() {
    let data = [0.0, 2.5, 5.0, 7.5, 10.0];

    let bins = histogram(&data, 4, BinningMode::MaxValueInclusive).unwrap();
    assert_eq!(bins[3].range().upper(), UpperBound::Inclusive);
    assert_eq!(bins[3].range().max(), 10.0);
    assert_eq!(counts(&bins), vec![1, 1, 1, 2]);

    let bins = histogram(&data, 4, BinningMode::ExpandRange).unwrap();
    assert!(bins[0].range().min() < 0.0);
    assert!(bins[3].range().max() > 10.0);
    assert_eq!(counts(&bins).iter().sum::<usize>(), 5);
    assert!(bins[3].range().contains(10.0));
}

#[test]
fn histogram_constant_sequence() {
    let data = [4_u64; 6];
    for mode in [
        BinningMode::Unbounded,
        BinningMode::MaxValueInclusive,
        BinningMode::ExpandRange,
    ] {
        let bins = histogram(&data, 3, mode).unwrap();
        assert_eq!(bins.len(), 3, "{mode:?}");
        assert_eq!(counts(&bins).iter().sum::<usize>(), 6, "{mode:?}");
    }
}

#[test]
fn histogram_by_projection_and_builder_agree() {
    struct Order {
        amount: i32,
    }
    let orders: Vec<Order> = [12, 40, 7, 33, 25, 18, 9].map(|amount| Order { amount }).into();

    let direct = histogram_by(&orders, 3, BinningMode::MaxValueInclusive, |o| o.amount).unwrap();
    let built = Histogram::new()
        .bin_count(3)
        .mode(BinningMode::MaxValueInclusive)
        .compute_by(&orders, |o| o.amount)
        .unwrap();
    assert_eq!(direct, built);
    assert_eq!(counts(&direct).iter().sum::<usize>(), orders.len());
}

#[test]
fn histogram_nullable_matches_dense() {
    let sparse = seeded_sparse_sample(5, 200, 0.3);
    let dense: Vec<f64> = sparse.iter().flatten().copied().collect();

    let a = histogram_nullable(&sparse, 5, BinningMode::ExpandRange)
        .unwrap()
        .unwrap();
    let b = histogram(&dense, 5, BinningMode::ExpandRange).unwrap();
    assert_eq!(a, b);
}

#[test]
fn histogram_expand_range_subnormal_values() {
    let data = [0.0, 5e-324];
    let bins = histogram(&data, 2, BinningMode::ExpandRange).unwrap();
    assert_eq!(counts(&bins), vec![1, 1]);
    assert!(bins[0].range().min() < 0.0);
    assert!(bins[1].range().max() > 5e-324);
}

#[test]
fn histogram_span_beyond_f64_max_keeps_every_bin() {
    let data = [-1e308, 0.0, 1e308];
    for mode in [
        BinningMode::Unbounded,
        BinningMode::MaxValueInclusive,
        BinningMode::ExpandRange,
    ] {
        let bins = histogram(&data, 3, mode).unwrap();
        assert_eq!(counts(&bins), vec![1, 1, 1], "{mode:?}");
        assert!(bins[0].range().min().is_finite(), "{mode:?}");
        assert!(bins[1].range().max().is_finite(), "{mode:?}");
    }
}

// ==================== Moments ====================

#[test]
fn moments_agree_with_naive_reference() {
    let data = seeded_sample(42, 1_000, 0.0, 1_000.0);
    let var = stats::variance(&data).unwrap();
    let var_p = stats::variance_p(&data).unwrap();

    assert!(approx_eq(var, naive_variance(&data, 1), 1e-6));
    assert!(approx_eq(var_p, naive_variance(&data, 0), 1e-6));
    assert!(approx_eq(stats::std_dev(&data).unwrap(), var.sqrt(), EPSILON));
    assert!(approx_eq(stats::std_dev_p(&data).unwrap(), var_p.sqrt(), EPSILON));
}

#[test]
fn moments_are_shift_invariant() {
    let data = seeded_sample(3, 300, -1.0, 1.0);
    let shifted: Vec<f64> = data.iter().map(|x| x + 1_000.0).collect();

    assert!(approx_eq(
        stats::variance(&data).unwrap(),
        stats::variance(&shifted).unwrap(),
        1e-8
    ));
    assert!(approx_eq(
        stats::skewness(&data).unwrap(),
        stats::skewness(&shifted).unwrap(),
        1e-6
    ));
    assert!(approx_eq(
        stats::kurtosis(&data).unwrap(),
        stats::kurtosis(&shifted).unwrap(),
        1e-6
    ));
}

#[test]
fn skewness_sign_follows_tail() {
    let right_tail = [1.0, 1.0, 2.0, 2.0, 3.0, 20.0];
    let left_tail: Vec<f64> = right_tail.iter().map(|x| -x).collect();
    assert!(stats::skewness(&right_tail).unwrap() > 0.0);
    assert!(stats::skewness(&left_tail).unwrap() < 0.0);
}

#[test]
fn constant_sequence_moments() {
    let data: [f64; 8] = [3.5; 8];
    assert_eq!(stats::range(&data).unwrap(), 0.0);
    assert_eq!(stats::variance(&data).unwrap(), 0.0);
    assert_eq!(stats::std_dev_p(&data).unwrap(), 0.0);
    assert!(stats::skewness(&data).unwrap().is_nan());
    assert!(stats::kurtosis(&data).unwrap().is_nan());
}

#[test]
fn integer_inputs_match_float_inputs() {
    let ints = [3_i64, -7, 12, 0, 5, 5, 9, -2];
    #[allow(clippy::cast_precision_loss)]
    let floats: Vec<f64> = ints.iter().map(|&x| x as f64).collect();

    let kurt = stats::kurtosis(&ints).unwrap();
    let skew = stats::skewness(&ints).unwrap();
    assert!(approx_eq(kurt, stats::kurtosis(&floats).unwrap(), EPSILON));
    assert!(approx_eq(skew, stats::skewness(&floats).unwrap(), EPSILON));
    assert_eq!(stats::range(&ints).unwrap(), 19);
}

#[test]
fn unsigned_range_does_not_underflow() {
    let data = [u32::MAX, 0, 17];
    assert_eq!(stats::range(&data).unwrap(), u32::MAX);
}

// ==================== Nullable and extension traits ====================

#[test]
fn nullable_statistics_skip_absent() {
    let sparse = seeded_sparse_sample(9, 150, 0.4);
    let dense: Vec<f64> = sparse.iter().flatten().copied().collect();

    assert_eq!(nullable::range(&sparse).unwrap(), Some(stats::range(&dense).unwrap()));
    assert!(approx_eq(
        nullable::kurtosis(&sparse).unwrap().unwrap(),
        stats::kurtosis(&dense).unwrap(),
        EPSILON
    ));
    assert!(approx_eq(
        sparse.present_std_dev().unwrap().unwrap(),
        dense.std_dev().unwrap(),
        EPSILON
    ));
}

#[test]
fn extension_traits_match_free_functions() {
    let data = seeded_sample(21, 64, 10.0, 20.0);
    assert_eq!(data.mean().unwrap(), stats::mean(&data).unwrap());
    assert_eq!(data.variance_p().unwrap(), stats::variance_p(&data).unwrap());
    assert_eq!(data.skewness().unwrap(), stats::skewness(&data).unwrap());
    assert_eq!(
        data.histogram(4, BinningMode::Unbounded).unwrap(),
        histogram(&data, 4, BinningMode::Unbounded).unwrap()
    );
}

#[test]
fn range_display_round_trip_through_bins() {
    let bins = Histogram::new()
        .bin_count(2)
        .mode(BinningMode::MaxValueInclusive)
        .compute(&[1.0, 5.5, 10.0])
        .unwrap();
    assert_eq!(bins[0].range().to_string(), "[1, 5.5)");
    assert_eq!(bins[1].range().to_string(), "[5.5, 10]");
}
