//! Error types for smoother configuration and checked smoothing.
//!
//! ## Purpose
//!
//! This module defines the error conditions reported by the builder and by
//! the checked entry points (`try_smooth`, metric parsing). The unchecked
//! `smooth` path never produces an error.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending value or index.
//! * **Deferred**: Builder errors are collected and surfaced by `build()`.
//! * **No-std**: Uses `alloc` for dynamic messages.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for smoother configuration and checked smoothing.
#[derive(Debug, Clone, PartialEq)]
pub enum SmootherError {
    /// Bandwidth must be finite and in the range (0, 1].
    InvalidBandwidth(f64),

    /// A sample contains NaN or an infinite value.
    InvalidNumericValue(String),

    /// Samples are not in ascending timestamp order.
    UnsortedInput {
        /// Index of the first sample whose timestamp precedes its predecessor.
        index: usize,
    },

    /// A metric name did not match any sensor field.
    UnknownMetric(String),

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

impl Display for SmootherError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::InvalidBandwidth(b) => {
                write!(f, "Invalid bandwidth: {b} (must be > 0 and <= 1)")
            }
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::UnsortedInput { index } => {
                write!(
                    f,
                    "Unsorted input: sample {index} has a timestamp earlier than sample {}",
                    index.saturating_sub(1)
                )
            }
            Self::UnknownMetric(name) => write!(f, "Unknown metric: '{name}'"),
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl Error for SmootherError {}
