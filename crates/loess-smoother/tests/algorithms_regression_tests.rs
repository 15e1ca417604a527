#![cfg(feature = "dev")]
//! Tests for local regression algorithms.
//!
//! These tests verify the weighted least squares building blocks:
//! - Scalar and SIMD accumulation agree
//! - The closed-form solve, including the flat-variance branch
//! - Per-point fitting through `RegressionContext`
//! - Zero-weight fallback policies
//!
//! ## Test Organization
//!
//! 1. **Accumulation** - Scalar vs SIMD sums
//! 2. **Solve** - Slopes, intercepts, degenerate sums
//! 3. **Fit Point** - Complete point fitting
//! 4. **Zero Weight Fallbacks** - Coincident timestamps

use approx::assert_relative_eq;

use loess_smoother::internals::algorithms::regression::{
    accumulate_wls_scalar, accumulate_wls_simd_f32, accumulate_wls_simd_f64, solve_wls_scalar,
    LinearFit, RegressionContext, WLSSolver, WlsSums, ZeroWeightFallback, DENOMINATOR_TOLERANCE,
};
use loess_smoother::internals::primitives::buffer::LocalBuffer;
use loess_smoother::internals::primitives::window::Window;

// ============================================================================
// Helper Functions
// ============================================================================

fn fit_point(x: &[f64], y: &[f64], idx: usize, half: usize, policy: ZeroWeightFallback) -> Option<f64> {
    let mut buffer = LocalBuffer::default();
    let mut context = RegressionContext {
        x,
        y,
        idx,
        window: Window::centered(idx, half, x.len()),
        buffer: &mut buffer,
        zero_weight_fallback: policy,
    };
    context.fit()
}

// ============================================================================
// Accumulation Tests
// ============================================================================

/// SIMD and scalar f64 accumulation agree, including odd tails.
#[test]
fn test_simd_f64_matches_scalar() {
    for n in [0usize, 1, 2, 3, 7, 16] {
        let x: Vec<f64> = (0..n).map(|i| i as f64 - 3.5).collect();
        let y: Vec<f64> = (0..n).map(|i| (i as f64).sqrt()).collect();
        let w: Vec<f64> = (0..n).map(|i| 1.0 / (1.0 + i as f64)).collect();

        let scalar = accumulate_wls_scalar(&x, &y, &w);
        let simd = accumulate_wls_simd_f64(&x, &y, &w);

        assert_relative_eq!(scalar.sum_w, simd.sum_w, epsilon = 1e-12);
        assert_relative_eq!(scalar.sum_wx, simd.sum_wx, epsilon = 1e-12);
        assert_relative_eq!(scalar.sum_wy, simd.sum_wy, epsilon = 1e-12);
        assert_relative_eq!(scalar.sum_wxx, simd.sum_wxx, epsilon = 1e-12);
        assert_relative_eq!(scalar.sum_wxy, simd.sum_wxy, epsilon = 1e-12);
    }
}

/// SIMD and scalar f32 accumulation agree across the 8-lane boundary.
#[test]
fn test_simd_f32_matches_scalar() {
    for n in [5usize, 8, 13, 24] {
        let x: Vec<f32> = (0..n).map(|i| i as f32 * 0.5).collect();
        let y: Vec<f32> = (0..n).map(|i| 2.0 - i as f32).collect();
        let w: Vec<f32> = vec![0.5; n];

        let scalar = accumulate_wls_scalar(&x, &y, &w);
        let simd = accumulate_wls_simd_f32(&x, &y, &w);

        assert_relative_eq!(scalar.sum_w, simd.sum_w, epsilon = 1e-4);
        assert_relative_eq!(scalar.sum_wxy, simd.sum_wxy, epsilon = 1e-3);
        assert_relative_eq!(scalar.sum_wxx, simd.sum_wxx, epsilon = 1e-3);
    }
}

/// The solver trait dispatches to the same sums.
#[test]
fn test_solver_trait_dispatch() {
    let x = [1.0f64, 2.0, 3.0];
    let y = [2.0f64, 4.0, 6.0];
    let w = [1.0f64, 1.0, 1.0];

    assert_eq!(f64::accumulate_wls(&x, &y, &w), accumulate_wls_simd_f64(&x, &y, &w));
}

// ============================================================================
// Solve Tests
// ============================================================================

/// Exact line through weighted points.
#[test]
fn test_fit_wls_exact_line() {
    let x = [-2.0f64, -1.0, 0.0, 1.0, 2.0];
    let y: Vec<f64> = x.iter().map(|xi| 3.0 * xi - 1.0).collect();
    let w = [0.2f64, 0.7, 1.0, 0.7, 0.2];

    let fit = LinearFit::fit_wls(&x, &y, &w).unwrap();

    assert_relative_eq!(fit.slope, 3.0, epsilon = 1e-12);
    assert_relative_eq!(fit.intercept, -1.0, epsilon = 1e-12);
    assert_relative_eq!(fit.predict(1.5), 3.5, epsilon = 1e-12);
}

/// Weights pull the line towards heavily weighted points.
#[test]
fn test_fit_wls_weighted_mean() {
    let sums = accumulate_wls_scalar(&[0.0f64, 1.0], &[0.0f64, 10.0], &[3.0f64, 1.0]);
    let fit = solve_wls_scalar(sums, DENOMINATOR_TOLERANCE).unwrap();

    assert_relative_eq!(fit.x_mean, 0.25, epsilon = 1e-12);
    assert_relative_eq!(fit.y_mean, 2.5, epsilon = 1e-12);
    assert_relative_eq!(fit.slope, 10.0, epsilon = 1e-12);
}

/// Flat x-variance collapses to the weighted mean of y.
#[test]
fn test_solve_flat_variance() {
    let sums = accumulate_wls_scalar(&[4.0f64, 4.0, 4.0], &[1.0f64, 2.0, 6.0], &[1.0f64, 2.0, 1.0]);
    let fit = solve_wls_scalar(sums, DENOMINATOR_TOLERANCE).unwrap();

    assert_eq!(fit.slope, 0.0);
    assert_relative_eq!(fit.predict(100.0), 2.75, epsilon = 1e-12);
}

/// Zero total weight yields no fit.
#[test]
fn test_solve_zero_weight() {
    assert!(solve_wls_scalar(WlsSums::<f64>::zero(), DENOMINATOR_TOLERANCE).is_none());
    assert!(LinearFit::<f64>::fit_wls(&[], &[], &[]).is_none());
}

// ============================================================================
// Fit Point Tests
// ============================================================================

/// A quadratic bump is flattened towards its neighbours.
#[test]
fn test_fit_point_pulls_spike_down() {
    let x = [0.0f64, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
    let y = [0.0f64, 0.0, 0.0, 10.0, 0.0, 0.0, 0.0];

    let estimate = fit_point(&x, &y, 3, 3, ZeroWeightFallback::UseLocalMean).unwrap();

    assert!(estimate < 10.0 && estimate > 0.0);
}

/// Neighbours on the window edge get zero weight.
#[test]
fn test_fit_point_three_point_window() {
    let x = [0.0f64, 1.0, 2.0, 3.0, 4.0];
    let y = [5.0f64, 1.0, 9.0, 2.0, 7.0];

    let estimate = fit_point(&x, &y, 2, 1, ZeroWeightFallback::UseLocalMean).unwrap();

    assert_relative_eq!(estimate, 9.0, epsilon = 1e-12);
}

/// Estimates are evaluated at the fitted point's own timestamp.
#[test]
fn test_fit_point_irregular_spacing() {
    let x = [0.0f64, 1.0, 1.5, 4.0, 9.0];
    let y: Vec<f64> = x.iter().map(|xi| -2.0 * xi + 7.0).collect();

    let estimate = fit_point(&x, &y, 2, 2, ZeroWeightFallback::UseLocalMean).unwrap();

    assert_relative_eq!(estimate, 4.0, epsilon = 1e-9);
}

/// Out-of-range indices produce no estimate.
#[test]
fn test_fit_point_out_of_range() {
    let x = [0.0f64, 1.0, 2.0];
    let y = [1.0f64, 1.0, 1.0];
    let mut buffer = LocalBuffer::default();
    let mut context = RegressionContext {
        x: &x,
        y: &y,
        idx: 5,
        window: Window { left: 0, right: 2 },
        buffer: &mut buffer,
        zero_weight_fallback: ZeroWeightFallback::UseLocalMean,
    };

    assert!(context.fit().is_none());
}

// ============================================================================
// Zero Weight Fallback Tests
// ============================================================================

/// Coincident timestamps use the window's mean under `UseLocalMean`.
#[test]
fn test_zero_weight_local_mean() {
    let x = [7.0f64; 5];
    let y = [1.0f64, 2.0, 4.0, 8.0, 16.0];

    let estimate = fit_point(&x, &y, 2, 1, ZeroWeightFallback::UseLocalMean).unwrap();

    assert_relative_eq!(estimate, 14.0 / 3.0, epsilon = 1e-12);
}

/// Coincident timestamps yield no estimate under `ReturnOriginal`.
#[test]
fn test_zero_weight_return_original() {
    let x = [7.0f64; 5];
    let y = [1.0f64, 2.0, 4.0, 8.0, 16.0];

    assert!(fit_point(&x, &y, 2, 1, ZeroWeightFallback::ReturnOriginal).is_none());
}

/// Default policy is `UseLocalMean`.
#[test]
fn test_zero_weight_default() {
    assert_eq!(ZeroWeightFallback::default(), ZeroWeightFallback::UseLocalMean);
}
