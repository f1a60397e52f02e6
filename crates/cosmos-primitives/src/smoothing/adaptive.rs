//! Adaptive value-smoothing filter.
//!
//! ## Purpose
//!
//! This module provides a single-value exponential smoothing filter with a
//! deviation-triggered bypass: large jumps are applied immediately while
//! small changes are blended gradually. Typical consumers feed it a stream of
//! sensor or measurement readings and read back the filtered value.
//!
//! ## Design notes
//!
//! * **Two modes per call, none persisted**: Each call either snaps or
//!   blends; the choice is re-evaluated from scratch on the next call.
//! * **Deviation metric**: The jump is normalized against the current value,
//!   `|new - value| / max(|value|, RELATIVE_FLOOR)`, and compared against the
//!   threshold. The floor keeps the metric defined at a zero state, where any
//!   materially nonzero reading snaps.
//! * **Generics**: Generic over `Float` types; `f64` is the usual
//!   instantiation.
//!
//! ## Key concepts
//!
//! * **Snap**: Deviation above the threshold replaces the state directly.
//! * **Blend**: Standard exponential smoothing,
//!   `value <- value + factor * (new - value)`. A factor of 1.0 degenerates
//!   to pass-through; smaller factors smooth more heavily.
//!
//! ## Invariants
//!
//! * `value` always reflects the most recently processed input combined with
//!   prior history.
//! * Smoothing mutates only `value`; `threshold` and `factor` are
//!   configuration.
//! * With 0 < factor < 1, repeated identical inputs move `value`
//!   monotonically toward the input.
//!
//! ## Non-goals
//!
//! * This module does not validate per-call inputs. Behavior on non-finite
//!   readings is unspecified; arithmetic propagates them as-is.
//! * This module does not provide windowed or multi-value smoothing.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::SmoothingError;
use crate::smoothing::validator::Validator;

// ============================================================================
// Defaults
// ============================================================================

/// Default relative-deviation bypass fraction.
pub const THRESHOLD_DEFAULT: f64 = 0.8;

/// Default smoothing weight (pass-through).
pub const FACTOR_DEFAULT: f64 = 1.0;

/// Lower bound for the deviation normalizer, so the relative metric stays
/// defined when the current value is zero.
const RELATIVE_FLOOR: f64 = 1e-12;

// ============================================================================
// Adaptive Smoother
// ============================================================================

/// Single-value exponential smoothing filter with deviation-triggered bypass.
///
/// Construct with [`AdaptiveSmoother::new`] for the default configuration, or
/// through [`SmootherBuilder`] for validated custom parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdaptiveSmoother<T: Float> {
    /// Relative-deviation fraction above which a new reading snaps.
    pub threshold: T,

    /// Smoothing weight in (0, 1].
    pub factor: T,

    /// Current filtered output.
    pub value: T,
}

impl<T: Float> AdaptiveSmoother<T> {
    /// Create a filter with default configuration and the given start value.
    pub fn new(start: T) -> Self {
        Self {
            threshold: T::from(THRESHOLD_DEFAULT).unwrap(),
            factor: T::from(FACTOR_DEFAULT).unwrap(),
            value: start,
        }
    }

    /// Create a builder for validated configuration.
    pub fn builder() -> SmootherBuilder<T> {
        SmootherBuilder::new()
    }

    /// Process a new reading and return the updated value.
    ///
    /// Snaps to the reading when its relative deviation from the current
    /// value exceeds the threshold, otherwise blends a factor-weighted step
    /// toward it. The input is assumed finite.
    pub fn smooth(&mut self, new_value: T) -> T {
        let floor = T::from(RELATIVE_FLOOR).unwrap();
        let deviation = (new_value - self.value).abs() / self.value.abs().max(floor);

        if deviation > self.threshold {
            self.value = new_value;
        } else {
            self.value = self.value + self.factor * (new_value - self.value);
        }

        self.value
    }

    /// Process an integer reading: exact conversion, then [`Self::smooth`].
    pub fn smooth_i32(&mut self, new_value: i32) -> T {
        self.smooth(T::from(new_value).unwrap())
    }

    /// Restore the filter state without touching configuration.
    pub fn reset(&mut self, start: T) {
        self.value = start;
    }
}

impl<T: Float> Default for AdaptiveSmoother<T> {
    fn default() -> Self {
        Self::new(T::zero())
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for [`AdaptiveSmoother`] with deferred validation.
#[derive(Debug, Clone, Copy)]
pub struct SmootherBuilder<T: Float> {
    /// Relative-deviation bypass fraction.
    pub threshold: T,

    /// Smoothing weight.
    pub factor: T,

    /// Starting value.
    pub start: T,
}

impl<T: Float> SmootherBuilder<T> {
    /// Create a builder with default parameters.
    fn new() -> Self {
        Self {
            threshold: T::from(THRESHOLD_DEFAULT).unwrap(),
            factor: T::from(FACTOR_DEFAULT).unwrap(),
            start: T::zero(),
        }
    }

    /// Set the relative-deviation bypass fraction.
    pub fn threshold(mut self, threshold: T) -> Self {
        self.threshold = threshold;
        self
    }

    /// Set the smoothing weight.
    pub fn factor(mut self, factor: T) -> Self {
        self.factor = factor;
        self
    }

    /// Set the starting value.
    pub fn start(mut self, start: T) -> Self {
        self.start = start;
        self
    }

    /// Validate the configuration and build the filter.
    pub fn build(self) -> Result<AdaptiveSmoother<T>, SmoothingError> {
        Validator::validate_threshold(self.threshold)?;
        Validator::validate_factor(self.factor)?;
        Validator::validate_start(self.start)?;

        Ok(AdaptiveSmoother {
            threshold: self.threshold,
            factor: self.factor,
            value: self.start,
        })
    }
}

impl<T: Float> Default for SmootherBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
