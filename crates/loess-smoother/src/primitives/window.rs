//! Windowing primitives for local regression.
//!
//! The neighbourhood of a point is a fixed number of samples centred on its
//! index and clipped at the series boundaries. It is not shifted inward
//! near the edges and it is not a fixed span of time, so dense stretches of
//! a series contribute more neighbours per millisecond than sparse ones.

// External dependencies
use num_traits::Float;

/// Smallest neighbourhood, in points, ever used for a local fit.
pub const MIN_WINDOW_POINTS: usize = 3;

// Inclusive window bounds `[left, right]` for a local fit.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Window {
    // Left boundary index (inclusive).
    pub left: usize,

    // Right boundary index (inclusive).
    pub right: usize,
}

impl Window {
    // Window of `half` points on each side of `idx`, clipped to `[0, n - 1]`.
    #[inline]
    pub fn centered(idx: usize, half: usize, n: usize) -> Self {
        debug_assert!(idx < n, "centered: index out of bounds");

        Self {
            left: idx.saturating_sub(half),
            right: idx.saturating_add(half).min(n - 1),
        }
    }

    // Distance from `x[idx]` to the farther window edge.
    #[inline]
    pub fn max_distance<T: Float>(&self, x: &[T], idx: usize) -> T {
        let x_current = x[idx];
        let d_left = (x_current - x[self.left]).abs();
        let d_right = (x_current - x[self.right]).abs();
        if d_left >= d_right {
            d_left
        } else {
            d_right
        }
    }

    // Window size in points: `max(3, floor(bandwidth * n))`.
    #[inline]
    pub fn calculate_span<T: Float>(n: usize, bandwidth: T) -> usize {
        let points = T::from(n)
            .map(|n_t| (bandwidth * n_t).floor())
            .and_then(|p| p.to_usize())
            .unwrap_or(0);
        usize::max(MIN_WINDOW_POINTS, points)
    }

    // Points on each side of the centre for a window of `span` points.
    #[inline]
    pub fn half_width(span: usize) -> usize {
        span / 2
    }

    // Check if the window is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.right < self.left
    }

    // Get the number of points in the window.
    #[inline]
    pub fn len(&self) -> usize {
        debug_assert!(!self.is_empty(), "len: inverted window bounds");
        self.right - self.left + 1
    }
}
