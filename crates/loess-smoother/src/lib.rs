//! # loess-smoother: LOESS smoothing for sensor time series
//!
//! Denoises irregularly sampled sensor history (temperature, humidity,
//! power, voltage, ...) before it is charted. Each interior sample is
//! replaced by a tricube-weighted local linear fit over its neighbours;
//! edge samples and very short series are passed through unchanged so the
//! chart never shows a misleading estimate.
//!
//! ## Quick Start
//!
//! ```rust
//! use loess_smoother::prelude::*;
//!
//! let samples: Vec<Sample> = [10.0, 12.0, 9.0, 15.0, 11.0, 14.0, 10.0]
//!     .iter()
//!     .enumerate()
//!     .map(|(i, &y)| Sample::new(i as f64 * 60_000.0, y))
//!     .collect();
//!
//! let smoother = LoessSmoother::new(); // bandwidth 0.25
//! let smoothed = smoother.smooth(&samples);
//!
//! assert_eq!(smoothed.len(), samples.len());
//! assert!(smoothed[0].is_actual);
//! assert!(!smoothed[3].is_actual);
//! ```
//!
//! ### Configuration
//!
//! ```rust
//! use loess_smoother::prelude::*;
//!
//! let smoother = LoessSmoother::<f64>::builder()
//!     .bandwidth(0.5)                     // Half the series per local fit
//!     .zero_weight_fallback(UseLocalMean) // Coincident timestamps
//!     .input_order(SortByTimestamp)       // Sort, then restore input order
//!     .build()?;
//!
//! assert_eq!(smoother.window_points(40), 20);
//! # Result::<(), SmootherError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! [`LoessSmoother::smooth`](crate::prelude::LoessSmoother::smooth) never
//! fails and performs no validation. Construction and
//! [`try_smooth`](crate::prelude::LoessSmoother::try_smooth) return
//! `Result<_, SmootherError>`:
//!
//! ```rust
//! use loess_smoother::prelude::*;
//!
//! assert!(LoessSmoother::with_bandwidth(0.0).is_err());
//!
//! let smoother = LoessSmoother::new();
//! let bad = [Sample::new(0.0, 1.0), Sample::new(1.0, f64::NAN)];
//! match smoother.try_smooth(&bad) {
//!     Ok(_) => unreachable!(),
//!     Err(e) => eprintln!("rejected: {e}"),
//! }
//! ```
//!
//! ## Algorithm
//!
//! For a series of `n >= 5` points and bandwidth `b`, the neighbourhood of
//! point `i` is the `max(3, floor(b * n))` points centred on `i` (clipped at
//! the ends). Distances to `x[i]` are scaled by the distance to the farther
//! window edge and weighted with `(1 - u^3)^3`; a weighted least squares
//! line through the neighbourhood is evaluated at `x[i]`.
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! Disable default features to drop the standard library dependency
//! (`alloc` is still required):
//!
//! ```toml
//! [dependencies]
//! loess-smoother = { version = "0.1", default-features = false }
//! ```
//!
//! ## References
//!
//! - Cleveland, W. S. (1979). "Robust Locally Weighted Regression and Smoothing Scatterplots"

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - data types and basic utilities.
mod primitives;

// Layer 2: Math - pure mathematical functions.
mod math;

// Layer 3: Algorithms - local weighted regression.
mod algorithms;

// Layer 4: Engine - passthrough rules and validation.
mod engine;

// Layer 5: Input - sensor readings and metric series.
mod input;

// Layer 6: High-level smoother API.
mod api;

pub use crate::api::smooth;

// Standard prelude.
pub mod prelude {
    pub use crate::api::{
        smooth,
        InputOrder::{self, AssumeSorted, SortByTimestamp},
        LoessSmoother, LoessSmootherBuilder, Metric, MetricSeries, Sample, SensorReading,
        SmoothedSample, SmootherError,
        ZeroWeightFallback::{self, ReturnOriginal, UseLocalMean},
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod input {
        pub use crate::input::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
