//! Execution engine for LOESS smoothing.
//!
//! ## Purpose
//!
//! This module walks a timestamp-ordered series and decides, point by point,
//! whether to emit the raw reading or a local regression estimate.
//!
//! ## Design notes
//!
//! * Series shorter than five points are passed through untouched.
//! * The first and last points are always passed through.
//! * One scratch buffer is allocated per run and reused for every point.
//!
//! ## Invariants
//!
//! * Input x-values are assumed to be non-decreasing (sorted).
//! * Output has exactly one point per input point, in input order.
//!
//! ## Non-goals
//!
//! * This module does not validate input data (handled by `validator`).
//! * This module does not sort input data (handled by the API layer).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::algorithms::regression::{RegressionContext, WLSSolver, ZeroWeightFallback};
use crate::math::constant;
use crate::primitives::buffer::LocalBuffer;
use crate::primitives::sample::{Sample, SmoothedSample};
use crate::primitives::window::Window;

/// Series with fewer points than this are returned verbatim.
pub const MIN_POINTS_TO_SMOOTH: usize = 5;

/// Default fraction of the series used for each local fit.
pub const DEFAULT_BANDWIDTH: f64 = 0.25;

// ============================================================================
// Configuration
// ============================================================================

/// Parameters for one smoothing run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmootherConfig<T> {
    /// Fraction of the series used as the neighbourhood (0, 1].
    pub bandwidth: T,

    /// Behaviour when every neighbour shares the fitted timestamp.
    pub zero_weight_fallback: ZeroWeightFallback,
}

impl<T: WLSSolver> Default for SmootherConfig<T> {
    fn default() -> Self {
        Self {
            bandwidth: constant(DEFAULT_BANDWIDTH),
            zero_weight_fallback: ZeroWeightFallback::default(),
        }
    }
}

// ============================================================================
// Executor
// ============================================================================

/// Runs the local regression over sorted columns.
#[derive(Debug, Clone, Copy)]
pub struct SmootherExecutor<T> {
    config: SmootherConfig<T>,
}

impl<T: WLSSolver> SmootherExecutor<T> {
    /// Create an executor for the given configuration.
    pub fn new(config: SmootherConfig<T>) -> Self {
        Self { config }
    }

    /// Neighbourhood size, in points, for a series of length `n`.
    #[inline]
    pub fn window_points(&self, n: usize) -> usize {
        Window::calculate_span(n, self.config.bandwidth)
    }

    /// Smooth sorted columns `x` and `y` of equal length.
    pub fn run(&self, x: &[T], y: &[T]) -> Vec<SmoothedSample<T>> {
        debug_assert_eq!(x.len(), y.len(), "run: x and y lengths differ");
        let n = x.len().min(y.len());

        if n < MIN_POINTS_TO_SMOOTH {
            return x
                .iter()
                .zip(y)
                .map(|(&xi, &yi)| SmoothedSample::actual(Sample::new(xi, yi)))
                .collect();
        }

        let span = self.window_points(n);
        let half = Window::half_width(span);
        log::trace!("smoothing {n} points with a {span}-point window (half width {half})");

        let mut buffer = LocalBuffer::with_capacity(2 * half + 1);
        (0..n)
            .map(|idx| self.smooth_point(&x[..n], &y[..n], idx, half, &mut buffer))
            .collect()
    }

    /// Smooth a single point of a sorted series.
    ///
    /// Edge points and series shorter than [`MIN_POINTS_TO_SMOOTH`] are
    /// emitted verbatim.
    pub fn smooth_point(
        &self,
        x: &[T],
        y: &[T],
        idx: usize,
        half: usize,
        buffer: &mut LocalBuffer<T>,
    ) -> SmoothedSample<T> {
        let n = x.len();
        let sample = Sample::new(x[idx], y[idx]);

        if n < MIN_POINTS_TO_SMOOTH || idx == 0 || idx == n - 1 {
            return SmoothedSample::actual(sample);
        }

        let mut context = RegressionContext {
            x,
            y,
            idx,
            window: Window::centered(idx, half, n),
            buffer,
            zero_weight_fallback: self.config.zero_weight_fallback,
        };

        match context.fit() {
            Some(estimate) => SmoothedSample::estimated(sample, estimate),
            None => SmoothedSample::actual(sample),
        }
    }
}
