//! Layer 3: Algorithms
//!
//! This layer implements the tricube-weighted local linear fit evaluated at
//! each interior sample. It is orchestrated by the engine layer.

// Local weighted regression.
pub mod regression;
