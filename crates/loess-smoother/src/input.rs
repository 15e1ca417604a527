//! Sensor readings and per-metric series.
//!
//! ## Purpose
//!
//! The history source persists full gateway readings, one row per poll,
//! while charts smooth a single metric at a time. This module names the
//! metrics, extracts `(timestamp, value)` series from readings and carries
//! the smoothed result per metric.
//!
//! ## Design notes
//!
//! * **Names**: [`Metric::name`] is the camelCase field name used in the
//!   gateway payload and in `fields=` query lists; snake_case is accepted
//!   when parsing.
//! * **Order**: Series keep reading order; sorting is the smoother's job.
//!
//! ## Non-goals
//!
//! * Fetching, caching or storing readings.
//! * Gateway protocol handling.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{string::ToString, vec::Vec};
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result as FmtResult};
use core::str::FromStr;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// Internal dependencies
use crate::primitives::errors::SmootherError;
use crate::primitives::sample::{Sample, SmoothedSample};

// ============================================================================
// Sensor Reading
// ============================================================================

/// One poll of the energy/environment gateway.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct SensorReading {
    /// Time of the poll, milliseconds since the Unix epoch.
    pub timestamp: i64,
    /// Line voltage (V).
    pub voltage: f64,
    /// Line current (A).
    pub current: f64,
    /// Active power (W).
    pub power: f64,
    /// Accumulated energy (kWh).
    pub energy: f64,
    /// Line frequency (Hz).
    pub frequency: f64,
    /// Power factor.
    pub power_factor: f64,
    /// Apparent power (VA).
    pub apparent_power: f64,
    /// Reactive power (var).
    pub reactive_power: f64,
    /// Ambient temperature (°C).
    pub temperature: f64,
    /// Relative humidity (%).
    pub humidity: f64,
}

impl SensorReading {
    /// Value of `metric` in this reading.
    #[inline]
    pub fn value(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Voltage => self.voltage,
            Metric::Current => self.current,
            Metric::Power => self.power,
            Metric::Energy => self.energy,
            Metric::Frequency => self.frequency,
            Metric::PowerFactor => self.power_factor,
            Metric::ApparentPower => self.apparent_power,
            Metric::ReactivePower => self.reactive_power,
            Metric::Temperature => self.temperature,
            Metric::Humidity => self.humidity,
        }
    }

    /// `(timestamp, value)` sample for `metric`.
    #[inline]
    pub fn sample(&self, metric: Metric) -> Sample<f64> {
        // Epoch milliseconds stay exact in f64 until the year 287396.
        Sample::new(self.timestamp as f64, self.value(metric))
    }
}

// ============================================================================
// Metric
// ============================================================================

/// A numeric field of [`SensorReading`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
pub enum Metric {
    Voltage,
    Current,
    Power,
    Energy,
    Frequency,
    PowerFactor,
    ApparentPower,
    ReactivePower,
    Temperature,
    Humidity,
}

impl Metric {
    /// Every metric, in payload field order.
    pub const ALL: [Metric; 10] = [
        Metric::Voltage,
        Metric::Current,
        Metric::Power,
        Metric::Energy,
        Metric::Frequency,
        Metric::PowerFactor,
        Metric::ApparentPower,
        Metric::ReactivePower,
        Metric::Temperature,
        Metric::Humidity,
    ];

    /// Payload field name (camelCase).
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Metric::Voltage => "voltage",
            Metric::Current => "current",
            Metric::Power => "power",
            Metric::Energy => "energy",
            Metric::Frequency => "frequency",
            Metric::PowerFactor => "powerFactor",
            Metric::ApparentPower => "apparentPower",
            Metric::ReactivePower => "reactivePower",
            Metric::Temperature => "temperature",
            Metric::Humidity => "humidity",
        }
    }

    /// Display unit.
    #[inline]
    pub const fn unit(&self) -> &'static str {
        match self {
            Metric::Voltage => "V",
            Metric::Current => "A",
            Metric::Power => "W",
            Metric::Energy => "kWh",
            Metric::Frequency => "Hz",
            Metric::PowerFactor => "",
            Metric::ApparentPower => "VA",
            Metric::ReactivePower => "var",
            Metric::Temperature => "°C",
            Metric::Humidity => "%",
        }
    }

    /// Extract this metric's series from readings, in reading order.
    pub fn series(&self, readings: &[SensorReading]) -> Vec<Sample<f64>> {
        readings.iter().map(|r| r.sample(*self)).collect()
    }

    /// Parse a comma-separated field list such as `temperature,humidity`.
    ///
    /// Blank entries are skipped; duplicates are kept.
    pub fn parse_list(fields: &str) -> Result<Vec<Metric>, SmootherError> {
        fields
            .split(',')
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .map(Metric::from_str)
            .collect()
    }
}

impl FromStr for Metric {
    type Err = SmootherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let metric = match s {
            "voltage" => Metric::Voltage,
            "current" => Metric::Current,
            "power" => Metric::Power,
            "energy" => Metric::Energy,
            "frequency" => Metric::Frequency,
            "powerFactor" | "power_factor" => Metric::PowerFactor,
            "apparentPower" | "apparent_power" => Metric::ApparentPower,
            "reactivePower" | "reactive_power" => Metric::ReactivePower,
            "temperature" => Metric::Temperature,
            "humidity" => Metric::Humidity,
            other => return Err(SmootherError::UnknownMetric(other.to_string())),
        };
        Ok(metric)
    }
}

impl Display for Metric {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.name())
    }
}

// ============================================================================
// Metric Series
// ============================================================================

/// Smoothed series for one metric.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MetricSeries {
    /// Metric the series was extracted from.
    pub metric: Metric,

    /// Smoothed points, in reading order.
    pub samples: Vec<SmoothedSample<f64>>,
}

impl MetricSeries {
    /// Number of points replaced by a local estimate.
    pub fn interpolated_count(&self) -> usize {
        self.samples.iter().filter(|s| !s.is_actual).count()
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the series has no points.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

impl Display for MetricSeries {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        writeln!(f, "Metric: {} [{}]", self.metric, self.metric.unit())?;
        writeln!(f, "  Points:       {}", self.len())?;
        writeln!(f, "  Interpolated: {}", self.interpolated_count())?;
        writeln!(f)?;

        writeln!(f, "{:>16} {:>12} {:>12} {:>7}", "X", "Y_smooth", "Original", "Actual")?;
        writeln!(f, "{:-<50}", "")?;

        // Show first 10 and last 10 rows of long series.
        let n = self.samples.len();
        let rows: Vec<usize> = if n <= 20 {
            (0..n).collect()
        } else {
            (0..10).chain(n - 10..n).collect()
        };

        let mut prev_idx = 0;
        for (i, &idx) in rows.iter().enumerate() {
            if i > 0 && idx != prev_idx + 1 {
                writeln!(f, "{:>16}", "...")?;
            }
            prev_idx = idx;

            let s = &self.samples[idx];
            writeln!(
                f,
                "{:>16.0} {:>12.4} {:>12.4} {:>7}",
                s.x,
                s.y,
                s.original_value,
                if s.is_actual { "yes" } else { "no" }
            )?;
        }

        Ok(())
    }
}
