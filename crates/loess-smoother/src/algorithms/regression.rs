//! Regression Logic
//!
//! ## Purpose
//!
//! This module provides the local weighted linear fit evaluated at each
//! interior sample:
//! - Fallback policy for neighbourhoods whose weights are all zero.
//! - Generic and SIMD-accelerated accumulation of the weighted sums.
//! - The closed-form degree-1 weighted least squares solve.
//! - A per-point context tying window, kernel and solver together.
//!
//! Sums are accumulated on timestamps centred on the fitted point. With
//! epoch-millisecond timestamps the raw `Σw·x²` terms reach ~1e24 and the
//! variance term would cancel catastrophically; centring leaves the fitted
//! line unchanged.

// External dependencies
use core::ops::Add;
use num_traits::float::TotalOrder;
use num_traits::Float;
use wide::{f32x8, f64x2};

// Internal dependencies
use crate::math::constant;
use crate::math::kernel::compute_window_weights;
use crate::primitives::buffer::LocalBuffer;
use crate::primitives::window::Window;

/// Below this absolute value the weighted x-variance is treated as zero.
pub const DENOMINATOR_TOLERANCE: f64 = 1e-10;

// ============================================================================
// Zero-Weight Fallback Policy
// ============================================================================

/// Policy for neighbourhoods where every kernel weight is zero.
///
/// This only happens when all samples in the window share the fitted
/// point's timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ZeroWeightFallback {
    /// Use the unweighted mean of the window's values (default).
    #[default]
    UseLocalMean,

    /// Emit the raw sample as a passthrough.
    ReturnOriginal,
}

// ============================================================================
// Weighted Sums
// ============================================================================

/// Weighted sums needed by the closed-form linear fit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WlsSums<T> {
    /// Σw
    pub sum_w: T,
    /// Σw·x
    pub sum_wx: T,
    /// Σw·y
    pub sum_wy: T,
    /// Σw·x²
    pub sum_wxx: T,
    /// Σw·x·y
    pub sum_wxy: T,
}

impl<T: Float> WlsSums<T> {
    /// All sums zero.
    #[inline]
    pub fn zero() -> Self {
        Self {
            sum_w: T::zero(),
            sum_wx: T::zero(),
            sum_wy: T::zero(),
            sum_wxx: T::zero(),
            sum_wxy: T::zero(),
        }
    }
}

impl<T: Float> Add for WlsSums<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self {
            sum_w: self.sum_w + rhs.sum_w,
            sum_wx: self.sum_wx + rhs.sum_wx,
            sum_wy: self.sum_wy + rhs.sum_wy,
            sum_wxx: self.sum_wxx + rhs.sum_wxx,
            sum_wxy: self.sum_wxy + rhs.sum_wxy,
        }
    }
}

// ============================================================================
// Generic Accumulation and Solving
// ============================================================================

/// Scalar accumulation of the weighted sums (generic Float).
#[inline]
pub fn accumulate_wls_scalar<T: Float>(x: &[T], y: &[T], weights: &[T]) -> WlsSums<T> {
    let mut sums = WlsSums::zero();

    for ((&x_val, &y_val), &w) in x.iter().zip(y).zip(weights) {
        let wx = w * x_val;

        sums.sum_w = sums.sum_w + w;
        sums.sum_wx = sums.sum_wx + wx;
        sums.sum_wy = sums.sum_wy + w * y_val;
        sums.sum_wxx = sums.sum_wxx + wx * x_val;
        sums.sum_wxy = sums.sum_wxy + wx * y_val;
    }

    sums
}

/// Closed-form weighted least squares line from accumulated sums.
///
/// Returns `None` when the total weight is not positive. When the weighted
/// x-variance falls below `tol` the slope is taken as zero and the line
/// collapses to the weighted mean of `y`.
#[inline]
pub fn solve_wls_scalar<T: Float>(sums: WlsSums<T>, tol: T) -> Option<LinearFit<T>> {
    if sums.sum_w.is_nan() || sums.sum_w <= T::zero() {
        return None;
    }

    let x_mean = sums.sum_wx / sums.sum_w;
    let y_mean = sums.sum_wy / sums.sum_w;

    let numerator = sums.sum_wxy - sums.sum_w * x_mean * y_mean;
    let denominator = sums.sum_wxx - sums.sum_w * x_mean * x_mean;

    if denominator.abs() < tol {
        return Some(LinearFit {
            slope: T::zero(),
            intercept: y_mean,
            x_mean,
            y_mean,
        });
    }

    let slope = numerator / denominator;
    Some(LinearFit {
        slope,
        intercept: y_mean - slope * x_mean,
        x_mean,
        y_mean,
    })
}

// ============================================================================
// Specialized Accumulation (SIMD)
// ============================================================================

/// SIMD-accelerated accumulation of the weighted sums (f64).
#[inline]
pub fn accumulate_wls_simd_f64(x: &[f64], y: &[f64], weights: &[f64]) -> WlsSums<f64> {
    let n = x.len().min(y.len()).min(weights.len());
    let body = n - n % 2;

    let mut s_w = f64x2::splat(0.0);
    let mut s_wx = f64x2::splat(0.0);
    let mut s_wy = f64x2::splat(0.0);
    let mut s_wxx = f64x2::splat(0.0);
    let mut s_wxy = f64x2::splat(0.0);

    let lanes = x[..body]
        .chunks_exact(2)
        .zip(y[..body].chunks_exact(2))
        .zip(weights[..body].chunks_exact(2));

    for ((xs, ys), ws) in lanes {
        let w = f64x2::new([ws[0], ws[1]]);
        let x_val = f64x2::new([xs[0], xs[1]]);
        let y_val = f64x2::new([ys[0], ys[1]]);

        let wx = w * x_val;

        s_w += w;
        s_wx += wx;
        s_wy += w * y_val;
        s_wxx += wx * x_val;
        s_wxy += wx * y_val;
    }

    let head = WlsSums {
        sum_w: s_w.reduce_add(),
        sum_wx: s_wx.reduce_add(),
        sum_wy: s_wy.reduce_add(),
        sum_wxx: s_wxx.reduce_add(),
        sum_wxy: s_wxy.reduce_add(),
    };

    head + accumulate_wls_scalar(&x[body..n], &y[body..n], &weights[body..n])
}

#[inline]
fn lanes_f32x8(s: &[f32]) -> f32x8 {
    f32x8::new([s[0], s[1], s[2], s[3], s[4], s[5], s[6], s[7]])
}

/// SIMD-accelerated accumulation of the weighted sums (f32).
#[inline]
pub fn accumulate_wls_simd_f32(x: &[f32], y: &[f32], weights: &[f32]) -> WlsSums<f32> {
    let n = x.len().min(y.len()).min(weights.len());
    let body = n - n % 8;

    let mut s_w = f32x8::splat(0.0);
    let mut s_wx = f32x8::splat(0.0);
    let mut s_wy = f32x8::splat(0.0);
    let mut s_wxx = f32x8::splat(0.0);
    let mut s_wxy = f32x8::splat(0.0);

    let lanes = x[..body]
        .chunks_exact(8)
        .zip(y[..body].chunks_exact(8))
        .zip(weights[..body].chunks_exact(8));

    for ((xs, ys), ws) in lanes {
        let w = lanes_f32x8(ws);
        let x_val = lanes_f32x8(xs);
        let y_val = lanes_f32x8(ys);

        let wx = w * x_val;

        s_w += w;
        s_wx += wx;
        s_wy += w * y_val;
        s_wxx += wx * x_val;
        s_wxy += wx * y_val;
    }

    let head = WlsSums {
        sum_w: s_w.reduce_add(),
        sum_wx: s_wx.reduce_add(),
        sum_wy: s_wy.reduce_add(),
        sum_wxx: s_wxx.reduce_add(),
        sum_wxy: s_wxy.reduce_add(),
    };

    head + accumulate_wls_scalar(&x[body..n], &y[body..n], &weights[body..n])
}

// ============================================================================
// Solver Trait
// ============================================================================

/// Trait for type-specific weighted least squares accumulation and solving.
pub trait WLSSolver: Float + TotalOrder {
    /// Accumulate weighted statistics.
    #[inline]
    fn accumulate_wls(x: &[Self], y: &[Self], weights: &[Self]) -> WlsSums<Self> {
        accumulate_wls_scalar(x, y, weights)
    }

    /// Solve for the fitted line.
    #[inline]
    fn solve_wls(sums: WlsSums<Self>, tol: Self) -> Option<LinearFit<Self>> {
        solve_wls_scalar(sums, tol)
    }
}

impl WLSSolver for f64 {
    #[inline]
    fn accumulate_wls(x: &[f64], y: &[f64], weights: &[f64]) -> WlsSums<f64> {
        accumulate_wls_simd_f64(x, y, weights)
    }
}

impl WLSSolver for f32 {
    #[inline]
    fn accumulate_wls(x: &[f32], y: &[f32], weights: &[f32]) -> WlsSums<f32> {
        accumulate_wls_simd_f32(x, y, weights)
    }
}

// ============================================================================
// LinearFit
// ============================================================================

/// Linear regression fit result (slope and intercept).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit<T> {
    /// Slope (beta_1)
    pub slope: T,

    /// Intercept (beta_0)
    pub intercept: T,

    /// Weighted mean of x-values
    pub x_mean: T,

    /// Weighted mean of y-values
    pub y_mean: T,
}

impl<T: Float> LinearFit<T> {
    /// Predict y-value for a given x using the model.
    #[inline]
    pub fn predict(&self, x: T) -> T {
        self.slope * x + self.intercept
    }
}

impl<T: WLSSolver> LinearFit<T> {
    /// Fit weighted least squares over paired slices.
    ///
    /// Returns `None` when the weights sum to zero.
    pub fn fit_wls(x: &[T], y: &[T], weights: &[T]) -> Option<Self> {
        let sums = T::accumulate_wls(x, y, weights);
        T::solve_wls(sums, constant(DENOMINATOR_TOLERANCE))
    }
}

// ============================================================================
// Regression Context
// ============================================================================

/// Context containing all data needed to fit a single point.
pub struct RegressionContext<'a, T> {
    /// Sorted timestamps of the whole series
    pub x: &'a [T],

    /// Values of the whole series
    pub y: &'a [T],

    /// Index of the point to fit
    pub idx: usize,

    /// Neighbourhood of `idx`
    pub window: Window,

    /// Scratch space reused across points
    pub buffer: &'a mut LocalBuffer<T>,

    /// Zero-weight fallback policy
    pub zero_weight_fallback: ZeroWeightFallback,
}

impl<'a, T: WLSSolver> RegressionContext<'a, T> {
    /// Estimate the value at `x[idx]` from its weighted neighbourhood.
    ///
    /// Returns `None` when the point should be emitted verbatim (zero-weight
    /// neighbourhood under [`ZeroWeightFallback::ReturnOriginal`], or an
    /// out-of-range index).
    pub fn fit(&mut self) -> Option<T> {
        let (x, y, window) = (self.x, self.y, self.window);
        let n = x.len();
        if self.idx >= n || window.right >= n || window.left > self.idx {
            return None;
        }

        let x_current = x[self.idx];
        let max_distance = window.max_distance(x, self.idx);

        self.buffer.reset_weights(window.len());
        compute_window_weights(x, window, x_current, max_distance, &mut self.buffer.weights);

        let window_x = &x[window.left..=window.right];
        let window_y = &y[window.left..=window.right];
        self.buffer.retain_weighted(window_x, window_y, x_current);

        match LinearFit::fit_wls(&self.buffer.dx, &self.buffer.y, &self.buffer.w) {
            // Centred coordinates: the fitted point sits at dx = 0.
            Some(model) => Some(model.predict(T::zero())),
            None => self.zero_weight_estimate(window_y),
        }
    }

    fn zero_weight_estimate(&self, window_y: &[T]) -> Option<T> {
        log::debug!(
            "zero-weight neighbourhood at index {} (window {}..={}), applying {:?}",
            self.idx,
            self.window.left,
            self.window.right,
            self.zero_weight_fallback
        );

        match self.zero_weight_fallback {
            ZeroWeightFallback::UseLocalMean => {
                let count = T::from(window_y.len()).unwrap_or_else(T::one);
                let total = window_y.iter().copied().fold(T::zero(), |acc, v| acc + v);
                Some(total / count)
            }
            ZeroWeightFallback::ReturnOriginal => None,
        }
    }
}
