//! Scratch space for per-point local fits.
//!
//! ## Purpose
//!
//! Each interior point needs a weight vector over its window and a compacted
//! copy of the positively weighted neighbours. [`LocalBuffer`] holds that
//! memory for a whole `smooth` call so it is allocated once, not once per
//! point.
//!
//! ## Invariants
//!
//! * Buffers are only logically cleared between points, never shrunk.
//! * After [`LocalBuffer::retain_weighted`], `dx`, `y` and `w` have equal length.
//!
//! ## Non-goals
//!
//! * Sharing a buffer across threads (one buffer per call).

// Feature-gated dependencies
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

/// Working memory for one local regression.
#[derive(Debug, Clone)]
pub struct LocalBuffer<T> {
    /// Kernel weights, indexed relative to the window's left edge.
    pub weights: Vec<T>,

    /// Timestamps of positively weighted neighbours, centred on the fitted point.
    pub dx: Vec<T>,

    /// Values of positively weighted neighbours.
    pub y: Vec<T>,

    /// Weights of positively weighted neighbours.
    pub w: Vec<T>,
}

impl<T> Default for LocalBuffer<T> {
    fn default() -> Self {
        Self {
            weights: Vec::new(),
            dx: Vec::new(),
            y: Vec::new(),
            w: Vec::new(),
        }
    }
}

impl<T: Float> LocalBuffer<T> {
    /// Create a buffer sized for windows of up to `window_points` samples.
    pub fn with_capacity(window_points: usize) -> Self {
        Self {
            weights: Vec::with_capacity(window_points),
            dx: Vec::with_capacity(window_points),
            y: Vec::with_capacity(window_points),
            w: Vec::with_capacity(window_points),
        }
    }

    /// Reset the weight vector to `len` zeros.
    #[inline]
    pub fn reset_weights(&mut self, len: usize) {
        self.weights.clear();
        self.weights.resize(len, T::zero());
    }

    /// Copy the neighbours with a strictly positive weight into `dx`, `y`, `w`.
    ///
    /// `x` and `y` are the window slices matching `self.weights`; `x_center`
    /// is subtracted from every retained timestamp.
    pub fn retain_weighted(&mut self, x: &[T], y: &[T], x_center: T) {
        self.dx.clear();
        self.y.clear();
        self.w.clear();

        for ((&xj, &yj), &wj) in x.iter().zip(y).zip(self.weights.iter()) {
            if wj > T::zero() {
                self.dx.push(xj - x_center);
                self.y.push(yj);
                self.w.push(wj);
            }
        }
    }
}
