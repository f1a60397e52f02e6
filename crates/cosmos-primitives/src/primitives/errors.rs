//! Error types for smoothing-filter configuration.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while configuring
//! an adaptive smoothing filter through its builder. The filter's runtime
//! operations are total and never produce these errors.
//!
//! ## Design notes
//!
//! * **Contextual**: Each variant carries the offending value.
//! * **No-std**: Variants hold plain `f64` values, so no allocation is needed.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error`
//!   (when `std` is enabled).
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Error messages are consistent in tone and formatting.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(feature = "std")]
use std::error::Error;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for smoothing-filter configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SmoothingError {
    /// The snap threshold must be positive and finite.
    InvalidThreshold(f64),

    /// The smoothing factor must be finite and in the range (0, 1].
    InvalidFactor(f64),

    /// The starting value must be finite.
    InvalidStartValue(f64),
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for SmoothingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::InvalidThreshold(t) => {
                write!(f, "Invalid threshold: {t} (must be > 0 and finite)")
            }
            Self::InvalidFactor(factor) => {
                write!(f, "Invalid factor: {factor} (must be > 0 and <= 1)")
            }
            Self::InvalidStartValue(v) => {
                write!(f, "Invalid start value: {v} (must be finite)")
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for SmoothingError {}
