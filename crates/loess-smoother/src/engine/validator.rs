//! Input validation for smoother configuration and samples.
//!
//! ## Purpose
//!
//! This module checks the bandwidth, builder usage and (for the checked
//! entry point) the samples themselves.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Opt-in**: The unchecked `smooth` path never calls into this module
//!   for sample data; NaN and infinities propagate arithmetically there.
//!
//! ## Non-goals
//!
//! * This module does not sort, transform, or filter input data.
//! * This module does not provide automatic correction of invalid inputs.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::SmootherError;
use crate::primitives::sample::Sample;
use crate::primitives::sorting::first_unsorted;

/// Validation utility for smoother configuration and input data.
pub struct Validator;

impl Validator {
    /// Validate the bandwidth (fraction of the series per window).
    pub fn validate_bandwidth<T: Float>(bandwidth: T) -> Result<(), SmootherError> {
        if !bandwidth.is_finite() || bandwidth <= T::zero() || bandwidth > T::one() {
            return Err(SmootherError::InvalidBandwidth(
                bandwidth.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate that every timestamp and value is finite.
    pub fn validate_samples<T: Float>(samples: &[Sample<T>]) -> Result<(), SmootherError> {
        for (i, s) in samples.iter().enumerate() {
            if !s.x.is_finite() {
                return Err(SmootherError::InvalidNumericValue(format!(
                    "x[{}]={}",
                    i,
                    s.x.to_f64().unwrap_or(f64::NAN)
                )));
            }
            if !s.y.is_finite() {
                return Err(SmootherError::InvalidNumericValue(format!(
                    "y[{}]={}",
                    i,
                    s.y.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }
        Ok(())
    }

    /// Validate that timestamps are non-decreasing.
    pub fn validate_ordering<T: Float>(samples: &[Sample<T>]) -> Result<(), SmootherError> {
        match first_unsorted(samples) {
            Some(index) => Err(SmootherError::UnsortedInput { index }),
            None => Ok(()),
        }
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), SmootherError> {
        if let Some(param) = duplicate_param {
            return Err(SmootherError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
