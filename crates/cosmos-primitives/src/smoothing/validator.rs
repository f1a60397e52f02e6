//! Configuration validation for the adaptive smoothing filter.
//!
//! ## Purpose
//!
//! This module validates filter configuration parameters before a filter is
//! built. Runtime smoothing itself is total and performs no validation.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Non-goals
//!
//! * This module does not correct invalid parameters.
//! * This module does not validate per-call inputs.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::SmoothingError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for smoothing-filter configuration.
///
/// All methods return `Result<(), SmoothingError>` and fail fast upon
/// identifying the first violation.
pub struct Validator;

impl Validator {
    /// Validate the snap threshold: finite and strictly positive.
    pub fn validate_threshold<T: Float>(threshold: T) -> Result<(), SmoothingError> {
        if !threshold.is_finite() || threshold <= T::zero() {
            return Err(SmoothingError::InvalidThreshold(
                threshold.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate the smoothing factor: finite and in (0, 1].
    pub fn validate_factor<T: Float>(factor: T) -> Result<(), SmoothingError> {
        if !factor.is_finite() || factor <= T::zero() || factor > T::one() {
            return Err(SmoothingError::InvalidFactor(
                factor.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate the starting value: finite.
    pub fn validate_start<T: Float>(start: T) -> Result<(), SmoothingError> {
        if !start.is_finite() {
            return Err(SmoothingError::InvalidStartValue(
                start.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }
}
