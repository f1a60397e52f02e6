//! Layer 2: Geometry
//!
//! # Purpose
//!
//! This layer provides the generic two-element coordinate pair and the family
//! of size, point, range, line, and rectangle types derived from it.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: Smoothing
//!   ↓
//! Layer 2: Geometry ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// The generic coordinate pair.
pub mod coord;

/// Concrete instantiations of the pair.
pub mod family;
