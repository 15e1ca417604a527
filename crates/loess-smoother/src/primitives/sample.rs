//! Input and output point types.
//!
//! A [`Sample`] is a raw `(timestamp, value)` pair handed over by the history
//! source. A [`SmoothedSample`] is what the chart consumer receives: the
//! same timestamp, the value to plot, whether that value is the raw reading,
//! and the raw reading itself for tooltips.

// External dependencies
use core::ops::Sub;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A raw time-stamped reading.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Sample<T = f64> {
    /// Timestamp in milliseconds since the Unix epoch.
    pub x: T,

    /// Measured value.
    pub y: T,
}

impl<T> Sample<T> {
    /// Create a sample from a timestamp and a value.
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T> From<(T, T)> for Sample<T> {
    #[inline]
    fn from((x, y): (T, T)) -> Self {
        Self { x, y }
    }
}

/// A point of the smoothed output series.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct SmoothedSample<T = f64> {
    /// Timestamp, copied from the input sample.
    pub x: T,

    /// Value to plot.
    pub y: T,

    /// `true` when `y` is the raw reading, `false` when it is a local estimate.
    pub is_actual: bool,

    /// The raw reading at this position.
    pub original_value: T,
}

impl<T: Copy> SmoothedSample<T> {
    /// Emit a sample verbatim.
    #[inline]
    pub fn actual(sample: Sample<T>) -> Self {
        Self {
            x: sample.x,
            y: sample.y,
            is_actual: true,
            original_value: sample.y,
        }
    }

    /// Replace the sample's value with a local regression estimate.
    #[inline]
    pub fn estimated(sample: Sample<T>, estimate: T) -> Self {
        Self {
            x: sample.x,
            y: estimate,
            is_actual: false,
            original_value: sample.y,
        }
    }

    /// The raw input this point was derived from.
    #[inline]
    pub fn original(&self) -> Sample<T> {
        Sample::new(self.x, self.original_value)
    }
}

impl<T: Copy + Sub<Output = T>> SmoothedSample<T> {
    /// Difference between the raw reading and the plotted value.
    #[inline]
    pub fn residual(&self) -> T {
        self.original_value - self.y
    }
}
