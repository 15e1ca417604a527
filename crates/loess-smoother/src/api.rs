//! High-level API for LOESS smoothing.
//!
//! ## Purpose
//!
//! This module provides the user-facing [`LoessSmoother`], its fluent
//! builder and the [`smooth`] convenience function.
//!
//! ## Design notes
//!
//! * **Immutable**: A smoother is a small `Copy` value; its configuration
//!   cannot change after construction.
//! * **Validated**: Bandwidth is checked when the smoother is built.
//! * **Order-preserving**: Output index `k` always corresponds to input
//!   index `k`, whether or not the input had to be sorted.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ### Configuration Flow
//!
//! 1. Start from `LoessSmoother::builder()` (or `LoessSmoother::new()` for defaults).
//! 2. Chain configuration methods (`.bandwidth()`, `.input_order()`, ...).
//! 3. Call `.build()` to validate and obtain the smoother.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::engine::executor::{SmootherConfig, SmootherExecutor};
use crate::engine::validator::Validator;
use crate::math::constant;
use crate::primitives::sorting::{split_columns, sort_by_x, unsort};

// Publicly re-exported types
pub use crate::algorithms::regression::{WLSSolver, ZeroWeightFallback};
pub use crate::engine::executor::{DEFAULT_BANDWIDTH, MIN_POINTS_TO_SMOOTH};
pub use crate::input::{Metric, MetricSeries, SensorReading};
pub use crate::primitives::errors::SmootherError;
pub use crate::primitives::sample::{Sample, SmoothedSample};

// ============================================================================
// Input Ordering
// ============================================================================

/// How the smoother treats the order of incoming samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputOrder {
    /// Sort by timestamp before smoothing, then restore input order (default).
    #[default]
    SortByTimestamp,

    /// Trust the caller's order; neighbours are taken by array position.
    AssumeSorted,
}

// ============================================================================
// Smoother
// ============================================================================

/// Tricube-weighted local linear smoother for time-stamped samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoessSmoother<T = f64> {
    config: SmootherConfig<T>,
    input_order: InputOrder,
}

impl<T: WLSSolver> Default for LoessSmoother<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: WLSSolver> LoessSmoother<T> {
    /// Smoother with the default bandwidth of 0.25.
    pub fn new() -> Self {
        Self {
            config: SmootherConfig::default(),
            input_order: InputOrder::default(),
        }
    }

    /// Smoother with the given bandwidth and default options.
    pub fn with_bandwidth(bandwidth: T) -> Result<Self, SmootherError> {
        Self::builder().bandwidth(bandwidth).build()
    }

    /// Start configuring a smoother.
    pub fn builder() -> LoessSmootherBuilder<T> {
        LoessSmootherBuilder::new()
    }

    /// Fraction of the series used for each local fit.
    #[inline]
    pub fn bandwidth(&self) -> T {
        self.config.bandwidth
    }

    /// Zero-weight fallback policy.
    #[inline]
    pub fn zero_weight_fallback(&self) -> ZeroWeightFallback {
        self.config.zero_weight_fallback
    }

    /// Input ordering policy.
    #[inline]
    pub fn input_order(&self) -> InputOrder {
        self.input_order
    }

    /// Neighbourhood size, in points, for a series of length `n`.
    #[inline]
    pub fn window_points(&self, n: usize) -> usize {
        SmootherExecutor::new(self.config).window_points(n)
    }

    /// Smooth a series of samples.
    ///
    /// Always returns one point per input sample, in input order. No
    /// validation is performed; NaN and infinities propagate.
    pub fn smooth(&self, samples: &[Sample<T>]) -> Vec<SmoothedSample<T>> {
        let columns = match self.input_order {
            InputOrder::SortByTimestamp => sort_by_x(samples),
            InputOrder::AssumeSorted => split_columns(samples),
        };

        if columns.was_reordered() {
            log::debug!("{} samples arrived out of timestamp order, sorting", samples.len());
        }

        let smoothed = SmootherExecutor::new(self.config).run(&columns.x, &columns.y);
        unsort(smoothed, columns.indices.as_deref())
    }

    /// Smooth a series after checking it.
    ///
    /// Rejects non-finite timestamps or values and, under
    /// [`InputOrder::AssumeSorted`], out-of-order timestamps.
    pub fn try_smooth(&self, samples: &[Sample<T>]) -> Result<Vec<SmoothedSample<T>>, SmootherError> {
        Validator::validate_samples(samples)?;
        if self.input_order == InputOrder::AssumeSorted {
            Validator::validate_ordering(samples)?;
        }
        Ok(self.smooth(samples))
    }
}

impl LoessSmoother<f64> {
    /// Smooth each requested metric of a run of sensor readings.
    ///
    /// Returns one series per entry of `metrics`, in the same order.
    pub fn smooth_metrics(&self, readings: &[SensorReading], metrics: &[Metric]) -> Vec<MetricSeries> {
        metrics
            .iter()
            .map(|&metric| MetricSeries {
                metric,
                samples: self.smooth(&metric.series(readings)),
            })
            .collect()
    }
}

/// Smooth `samples` with the given bandwidth and default options.
pub fn smooth<T: WLSSolver>(
    samples: &[Sample<T>],
    bandwidth: T,
) -> Result<Vec<SmoothedSample<T>>, SmootherError> {
    Ok(LoessSmoother::with_bandwidth(bandwidth)?.smooth(samples))
}

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for [`LoessSmoother`].
#[derive(Debug, Clone)]
pub struct LoessSmootherBuilder<T> {
    /// Fraction of the series per window (0..1].
    pub bandwidth: Option<T>,

    /// Behavior when local neighborhood weights are zero (default: UseLocalMean).
    pub zero_weight_fallback: Option<ZeroWeightFallback>,

    /// Input ordering policy (default: SortByTimestamp).
    pub input_order: Option<InputOrder>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: WLSSolver> Default for LoessSmootherBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: WLSSolver> LoessSmootherBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            bandwidth: None,
            zero_weight_fallback: None,
            input_order: None,
            duplicate_param: None,
        }
    }

    fn note_duplicate(&mut self, already_set: bool, parameter: &'static str) {
        if already_set && self.duplicate_param.is_none() {
            self.duplicate_param = Some(parameter);
        }
    }

    /// Set the bandwidth (fraction of the series per window).
    pub fn bandwidth(mut self, bandwidth: T) -> Self {
        self.note_duplicate(self.bandwidth.is_some(), "bandwidth");
        self.bandwidth = Some(bandwidth);
        self
    }

    /// Set the zero-weight fallback policy.
    pub fn zero_weight_fallback(mut self, policy: ZeroWeightFallback) -> Self {
        self.note_duplicate(self.zero_weight_fallback.is_some(), "zero_weight_fallback");
        self.zero_weight_fallback = Some(policy);
        self
    }

    /// Set the input ordering policy.
    pub fn input_order(mut self, order: InputOrder) -> Self {
        self.note_duplicate(self.input_order.is_some(), "input_order");
        self.input_order = Some(order);
        self
    }

    /// Validate the configuration and build the smoother.
    pub fn build(self) -> Result<LoessSmoother<T>, SmootherError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let bandwidth = self.bandwidth.unwrap_or_else(|| constant(DEFAULT_BANDWIDTH));
        Validator::validate_bandwidth(bandwidth)?;

        Ok(LoessSmoother {
            config: SmootherConfig {
                bandwidth,
                zero_weight_fallback: self.zero_weight_fallback.unwrap_or_default(),
            },
            input_order: self.input_order.unwrap_or_default(),
        })
    }
}
