#![cfg(feature = "dev")]
//! Tests for sorting utilities.
//!
//! ## Test Organization
//!
//! 1. **Detection** - Finding the first out-of-order sample
//! 2. **Sorting** - Fast path, stability, NaN handling
//! 3. **Unsorting** - Restoring the original order

use loess_smoother::internals::primitives::sample::Sample;
use loess_smoother::internals::primitives::sorting::{
    first_unsorted, sort_by_x, split_columns, unsort,
};

fn samples(xs: &[f64]) -> Vec<Sample> {
    xs.iter()
        .enumerate()
        .map(|(i, &x)| Sample::new(x, i as f64))
        .collect()
}

// ============================================================================
// Detection Tests
// ============================================================================

/// Sorted and equal timestamps are in order.
#[test]
fn test_first_unsorted_sorted() {
    assert_eq!(first_unsorted(&samples(&[])), None);
    assert_eq!(first_unsorted(&samples(&[1.0])), None);
    assert_eq!(first_unsorted(&samples(&[1.0, 1.0, 2.0, 5.0])), None);
}

/// Reports the index of the sample that goes backwards.
#[test]
fn test_first_unsorted_reports_index() {
    assert_eq!(first_unsorted(&samples(&[1.0, 3.0, 2.0, 0.0])), Some(2));
    assert_eq!(first_unsorted(&samples(&[5.0, 4.0])), Some(1));
}

// ============================================================================
// Sorting Tests
// ============================================================================

/// Sorted input takes the fast path with no permutation.
#[test]
fn test_sort_fast_path() {
    let input = samples(&[1.0, 2.0, 3.0]);
    let sorted = sort_by_x(&input);

    assert!(!sorted.was_reordered());
    assert_eq!(sorted.x, vec![1.0, 2.0, 3.0]);
    assert_eq!(sorted.y, vec![0.0, 1.0, 2.0]);
}

/// Unsorted input is ordered and values follow their timestamps.
#[test]
fn test_sort_reorders() {
    let input = samples(&[3.0, 1.0, 2.0]);
    let sorted = sort_by_x(&input);

    assert!(sorted.was_reordered());
    assert_eq!(sorted.x, vec![1.0, 2.0, 3.0]);
    assert_eq!(sorted.y, vec![1.0, 2.0, 0.0]);
    assert_eq!(sorted.indices, Some(vec![1, 2, 0]));
}

/// Duplicate timestamps keep their relative order.
#[test]
fn test_sort_stable() {
    let input = samples(&[2.0, 1.0, 2.0, 1.0]);
    let sorted = sort_by_x(&input);

    assert_eq!(sorted.x, vec![1.0, 1.0, 2.0, 2.0]);
    assert_eq!(sorted.y, vec![1.0, 3.0, 0.0, 2.0]);
}

/// NaN timestamps do not panic and end up last.
#[test]
fn test_sort_nan_last() {
    let input = samples(&[2.0, f64::NAN, 1.0]);
    let sorted = sort_by_x(&input);

    assert_eq!(&sorted.x[..2], &[1.0, 2.0]);
    assert!(sorted.x[2].is_nan());
}

/// Single-precision timestamps sort the same way, NaN last.
#[test]
fn test_sort_f32() {
    let input: Vec<Sample<f32>> = [3.0f32, f32::NAN, -1.0, 3.0]
        .iter()
        .enumerate()
        .map(|(i, &x)| Sample::new(x, i as f32))
        .collect();
    let sorted = sort_by_x(&input);

    assert_eq!(&sorted.x[..3], &[-1.0, 3.0, 3.0]);
    assert!(sorted.x[3].is_nan());
    assert_eq!(sorted.y, vec![2.0, 0.0, 3.0, 1.0]);
}

/// Splitting never reorders.
#[test]
fn test_split_columns() {
    let input = samples(&[3.0, 1.0]);
    let columns = split_columns(&input);

    assert!(!columns.was_reordered());
    assert_eq!(columns.x, vec![3.0, 1.0]);
}

// ============================================================================
// Unsorting Tests
// ============================================================================

/// Sort then unsort restores the original order.
#[test]
fn test_unsort_restores_order() {
    let input = samples(&[4.0, 0.0, 3.0, 1.0, 2.0]);
    let sorted = sort_by_x(&input);

    let pairs: Vec<(f64, f64)> = sorted.x.iter().copied().zip(sorted.y.iter().copied()).collect();
    let restored = unsort(pairs, sorted.indices.as_deref());

    for (&(x, y), original) in restored.iter().zip(&input) {
        assert_eq!(x, original.x);
        assert_eq!(y, original.y);
    }
}

/// Without a permutation the values are returned untouched.
#[test]
fn test_unsort_identity() {
    assert_eq!(unsort(vec![1, 2, 3], None), vec![1, 2, 3]);
}
