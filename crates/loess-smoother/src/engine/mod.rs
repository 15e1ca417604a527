//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer orchestrates smoothing by applying the passthrough rules and
//! delegating interior points to the regression algorithm. It also owns
//! input and configuration validation.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Input
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Point-by-point smoothing loop.
pub mod executor;

/// Validation utilities.
pub mod validator;
