//! # Cosmos Primitives — core value types for the Cosmos runtime
//!
//! Allocation-free value primitives shared by the higher-level Cosmos modules
//! (structured value containers, matrix/value serialization, configuration):
//!
//! * [`FlexScalar`](primitives::flex::FlexScalar) — a fixed-size, type-erased
//!   scalar cell that holds exactly one primitive representation at a time,
//!   with reads reinterpreting the stored bits.
//! * [`Coord2`](geometry::coord::Coord2) — a generic ordered pair with
//!   multiple semantic accessor views, instantiated into a family of size,
//!   point, range, line, and rectangle types.
//! * [`AdaptiveSmoother`](smoothing::adaptive::AdaptiveSmoother) — an
//!   exponential smoothing filter that snaps to large jumps and blends small
//!   ones.
//!
//! All three are plain `Copy` value types: no heap, no locking, no I/O.
//!
//! ## Quick Start
//!
//! ### Smoothing a reading stream
//!
//! ```rust
//! use cosmos_primitives::prelude::*;
//!
//! let mut filter = AdaptiveSmoother::builder()
//!     .factor(0.5)
//!     .threshold(0.8)
//!     .start(10.0)
//!     .build()?;
//!
//! assert_eq!(filter.smooth(12.0), 11.0);   // small change: blended
//! assert_eq!(filter.smooth(100.0), 100.0); // large jump: snapped
//! # Result::<(), SmoothingError>::Ok(())
//! ```
//!
//! ### Geometry
//!
//! ```rust
//! use cosmos_primitives::prelude::*;
//!
//! let a = Point::new(1, 2);
//! let b = Point::new(10, 20);
//! assert_eq!(a + b, Point::new(11, 22));
//!
//! // Pair-of-pairs: a line is a Coord2 over points.
//! let line = Line2D::new(Point2D::new(0.0, 0.0), Point2D::new(3.0, 4.0));
//! assert_eq!(line.end().y(), 4.0);
//! ```
//!
//! ### Type-erased storage
//!
//! ```rust
//! use cosmos_primitives::prelude::*;
//!
//! let mut cell = FlexScalar::default();
//! cell.set_f64(-2.5);
//! assert_eq!(cell.as_u64(), (-2.5f64).to_bits()); // bits, not a conversion
//! ```
//!
//! ## no_std
//!
//! The crate is `no_std`-compatible and never allocates. Disable the default
//! `std` feature for embedded targets:
//!
//! ```toml
//! [dependencies]
//! cosmos-primitives = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

// Layer 1: Primitives - type-erased storage and shared error types.
pub mod primitives;

// Layer 2: Geometry - the generic coordinate pair and its derived family.
pub mod geometry;

// Layer 3: Smoothing - the adaptive value filter.
pub mod smoothing;

// Standard prelude.
pub mod prelude {
    pub use crate::geometry::coord::{Coord2, ScalarAdd, XyView};
    pub use crate::geometry::family::{
        Line2D, Point, Point2D, Range, Range2D, Rect2D, Size, Size2D,
    };
    pub use crate::primitives::errors::SmoothingError;
    pub use crate::primitives::flex::FlexScalar;
    pub use crate::smoothing::adaptive::{
        AdaptiveSmoother, SmootherBuilder, FACTOR_DEFAULT, THRESHOLD_DEFAULT,
    };
}
