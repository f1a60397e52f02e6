//! Concrete instantiations of the coordinate pair.
//!
//! All members of the family are aliases of [`Coord2`], not separate types.
//! The line and rectangle types nest the pair over the floating-point point
//! type, so they inherit the full operator set.

// Internal dependencies
use crate::geometry::coord::Coord2;

/// Integer width/height pair.
pub type Size = Coord2<i32>;

/// Integer point.
pub type Point = Coord2<i32>;

/// Integer interval.
pub type Range = Coord2<i32>;

/// Floating-point width/height pair.
pub type Size2D = Coord2<f32>;

/// Floating-point point.
pub type Point2D = Coord2<f32>;

/// Floating-point interval.
pub type Range2D = Coord2<f32>;

/// Line segment: a pair of floating-point points.
pub type Line2D = Coord2<Point2D>;

/// Axis-aligned rectangle: a pair of floating-point corner points.
pub type Rect2D = Coord2<Point2D>;
