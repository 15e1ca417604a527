//! Tricube kernel weighting.
//!
//! ## Purpose
//!
//! This module maps distances from the fitted point to regression weights
//! with Cleveland's tricube kernel `K(u) = (1 - |u|^3)^3`.
//!
//! ## Design notes
//!
//! * **Normalization**: Distances are divided by the distance to the farther
//!   window edge, so the window edges sit at `u = 1`.
//! * **Support**: The kernel is compact on `[0, 1)`; the farther edge itself
//!   always receives zero weight.
//!
//! ## Invariants
//!
//! * Weights are in `[0, 1]`, with `K(0) = 1`.
//! * A non-positive (or NaN) normalizing distance yields all-zero weights.
//!
//! ## Non-goals
//!
//! * This module does not normalize weights to sum to one.
//! * This module does not choose the window.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::window::Window;

/// Tricube weight for a normalized distance `u`.
///
/// Returns `(1 - |u|^3)^3` for `|u| < 1` and `0` otherwise (including NaN).
#[inline]
pub fn tricube<T: Float>(u: T) -> T {
    let abs_u = u.abs();
    if abs_u < T::one() {
        let tmp = T::one() - abs_u * abs_u * abs_u;
        tmp * tmp * tmp
    } else {
        T::zero()
    }
}

/// Fill `weights` with tricube weights for every point of `window`.
///
/// `weights` is indexed relative to `window.left` and must hold at least
/// `window.len()` entries. Returns the sum of the weights written.
pub fn compute_window_weights<T: Float>(
    x: &[T],
    window: Window,
    x_current: T,
    max_distance: T,
    weights: &mut [T],
) -> T {
    debug_assert!(
        weights.len() >= window.len(),
        "compute_window_weights: weight buffer shorter than window"
    );

    let slots = &mut weights[..window.len()];

    // Coincident timestamps: every neighbour sits on the centre.
    if max_distance.is_nan() || max_distance <= T::zero() {
        slots.iter_mut().for_each(|w| *w = T::zero());
        return T::zero();
    }

    let mut sum = T::zero();
    for (w, &xj) in slots.iter_mut().zip(&x[window.left..=window.right]) {
        *w = tricube((xj - x_current).abs() / max_distance);
        sum = sum + *w;
    }

    sum
}
