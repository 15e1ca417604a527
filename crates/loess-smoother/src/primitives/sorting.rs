//! Sorting utilities for sample series.
//!
//! ## Purpose
//!
//! This module orders samples by timestamp before smoothing and maps the
//! smoothed points back to the caller's original order.
//!
//! ## Design notes
//!
//! * **Stability**: Uses a stable sort so duplicate timestamps keep their
//!   relative order.
//! * **Total order**: Uses IEEE total ordering, so NaN timestamps never
//!   break the sort; positive NaN lands at the end.
//! * **Fast path**: Already-sorted input is split into columns without
//!   building a permutation.
//!
//! ## Key concepts
//!
//! ### Sort-Process-Unsort Pattern
//! 1. **Sort**: Samples are split into sorted `x`/`y` columns plus an index mapping.
//! 2. **Process**: Smoothing runs on the sorted columns.
//! 3. **Unsort**: Results are scattered back to original indices in O(n).
//!
//! ## Invariants
//!
//! * `indices`, when present, is a permutation of `0..n`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::cmp::Ordering;
use num_traits::float::TotalOrder;
use num_traits::Float;

// Internal dependencies
use crate::primitives::sample::Sample;

// ============================================================================
// Data Structures
// ============================================================================

/// Samples split into timestamp-ordered columns.
pub struct SortedSamples<T> {
    /// Sorted timestamps.
    pub x: Vec<T>,

    /// Values reordered to match `x`.
    pub y: Vec<T>,

    /// `indices[sorted_pos] = original_pos`, or `None` when the input was
    /// already in order.
    pub indices: Option<Vec<usize>>,
}

impl<T> SortedSamples<T> {
    /// Whether the input had to be reordered.
    #[inline]
    pub fn was_reordered(&self) -> bool {
        self.indices.is_some()
    }
}

// ============================================================================
// Sorting Functions
// ============================================================================

/// Index of the first sample whose timestamp is smaller than its predecessor's.
#[inline]
pub fn first_unsorted<T: Float>(samples: &[Sample<T>]) -> Option<usize> {
    samples
        .windows(2)
        .position(|w| w[1].x < w[0].x)
        .map(|pos| pos + 1)
}

/// Split samples into columns without reordering.
#[inline]
pub fn split_columns<T: Float>(samples: &[Sample<T>]) -> SortedSamples<T> {
    SortedSamples {
        x: samples.iter().map(|s| s.x).collect(),
        y: samples.iter().map(|s| s.y).collect(),
        indices: None,
    }
}

/// Sort samples by timestamp in ascending order.
#[inline]
pub fn sort_by_x<T: Float + TotalOrder>(samples: &[Sample<T>]) -> SortedSamples<T> {
    let in_order = samples
        .windows(2)
        .all(|w| w[0].x.total_cmp(&w[1].x) != Ordering::Greater);
    if in_order {
        return split_columns(samples);
    }

    let mut order: Vec<usize> = (0..samples.len()).collect();
    order.sort_by(|&a, &b| samples[a].x.total_cmp(&samples[b].x));

    SortedSamples {
        x: order.iter().map(|&i| samples[i].x).collect(),
        y: order.iter().map(|&i| samples[i].y).collect(),
        indices: Some(order),
    }
}

/// Map sorted results back to the original input order in O(n) time.
#[inline]
pub fn unsort<S: Copy>(sorted: Vec<S>, indices: Option<&[usize]>) -> Vec<S> {
    let Some(indices) = indices else {
        return sorted;
    };

    let mut slots: Vec<Option<S>> = sorted.iter().map(|_| None).collect();
    for (value, &orig_idx) in sorted.into_iter().zip(indices) {
        slots[orig_idx] = Some(value);
    }

    slots.into_iter().flatten().collect()
}
