//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure numerical building blocks: the tricube
//! kernel and constant conversion into the generic float type.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Input
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

// External dependencies
use num_traits::Float;

/// Kernel (weight) functions for distance-based weighting.
pub mod kernel;

/// Convert an `f64` constant into `T`.
///
/// Every `Float` implementor in use (`f32`, `f64`) represents these
/// constants; NaN is returned otherwise so the failure stays visible.
#[inline]
pub fn constant<T: Float>(value: f64) -> T {
    T::from(value).unwrap_or_else(T::nan)
}
