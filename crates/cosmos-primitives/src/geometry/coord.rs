//! Generic two-dimensional coordinate pair.
//!
//! ## Purpose
//!
//! This module provides [`Coord2`], an ordered pair of a single element type
//! that serves as the basis for sizes, points, ranges, lines, and rectangles.
//! One generic definition covers scalar pairs and pairs-of-pairs: a
//! `Coord2<Coord2<f32>>` is a line segment or rectangle with no new code.
//!
//! ## Design notes
//!
//! * **Aliased views**: `x`/`y`, `w`/`h`, `p1`/`p2`, and `begin`/`end` all
//!   read the same two fields. Callers pick the accessor names that fit the
//!   geometric role; storage and arithmetic are shared.
//! * **Element-wise arithmetic**: Addition is component-wise with no overflow
//!   checking and no cross-coupling; each component's result depends only on
//!   the corresponding components of the operands.
//! * **Narrowing construction**: `from_f64` truncates toward zero for integer
//!   element types, matching native numeric conversion.
//!
//! ## Invariants
//!
//! * The two fields are always independently valid; there is no cross-field
//!   constraint.
//! * No operator observes one component while computing the other.
//!
//! ## Non-goals
//!
//! * This module does not provide geometric predicates (intersection,
//!   containment) or transformations; those belong to consumers.

// External dependencies
use core::ops::{Add, AddAssign};
use num_traits::NumCast;

// ============================================================================
// Accessor View Trait
// ============================================================================

/// Read access to an `x`/`y` pair of a compatible element type.
///
/// Lets [`Coord2::from_view`] copy from any object exposing `x`/`y` style
/// accessors, including other `Coord2` instantiations.
pub trait XyView<T> {
    /// First component.
    fn x(&self) -> T;
    /// Second component.
    fn y(&self) -> T;
}

// ============================================================================
// Coord2
// ============================================================================

/// Generic ordered pair of a single element type.
///
/// A pure value type: two fields, logically "first" and "second", exposed
/// through several equivalent accessor views. Default construction yields a
/// zero-initialized pair for every element type in the derived family.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Coord2<T> {
    x: T,
    y: T,
}

impl<T: Copy> Coord2<T> {
    /// Construct from two element values.
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Copy-construct from any object exposing `x`/`y` accessors.
    #[inline]
    pub fn from_view<V: XyView<T>>(view: &V) -> Self {
        Self::new(view.x(), view.y())
    }

    // ========================================================================
    // Accessor views (all aliases of the same two fields)
    // ========================================================================

    /// First component, as a point's x coordinate.
    #[inline]
    pub fn x(&self) -> T {
        self.x
    }

    /// Second component, as a point's y coordinate.
    #[inline]
    pub fn y(&self) -> T {
        self.y
    }

    /// First component, as a width.
    #[inline]
    pub fn w(&self) -> T {
        self.x
    }

    /// Second component, as a height.
    #[inline]
    pub fn h(&self) -> T {
        self.y
    }

    /// First component, as an interval's first endpoint.
    #[inline]
    pub fn p1(&self) -> T {
        self.x
    }

    /// Second component, as an interval's second endpoint.
    #[inline]
    pub fn p2(&self) -> T {
        self.y
    }

    /// First component, as an interval's start.
    #[inline]
    pub fn begin(&self) -> T {
        self.x
    }

    /// Second component, as an interval's end.
    #[inline]
    pub fn end(&self) -> T {
        self.y
    }

    /// Mutable access to the first component.
    #[inline]
    pub fn x_mut(&mut self) -> &mut T {
        &mut self.x
    }

    /// Mutable access to the second component.
    #[inline]
    pub fn y_mut(&mut self) -> &mut T {
        &mut self.y
    }

    /// Overwrite both components.
    #[inline]
    pub fn set(&mut self, x: T, y: T) {
        self.x = x;
        self.y = y;
    }
}

impl<T: NumCast> Coord2<T> {
    /// Construct from two doubles with a narrowing conversion to `T`.
    ///
    /// Integer element types truncate toward zero: `from_f64(3.7, -2.2)`
    /// yields `(3, -2)` for `Coord2<i32>`. Inputs must be representable in
    /// `T` after truncation.
    #[inline]
    pub fn from_f64(x: f64, y: f64) -> Self {
        Self {
            x: NumCast::from(x).unwrap(),
            y: NumCast::from(y).unwrap(),
        }
    }
}

impl<T: Copy> XyView<T> for Coord2<T> {
    #[inline]
    fn x(&self) -> T {
        self.x
    }

    #[inline]
    fn y(&self) -> T {
        self.y
    }
}

// ============================================================================
// Element-wise Arithmetic
// ============================================================================

impl<T: Add<Output = T> + Copy> Add for Coord2<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<T: AddAssign + Copy> AddAssign for Coord2<T> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

// ============================================================================
// Uniform Scalar Addition
// ============================================================================

/// Element types that can absorb a uniform `f32` offset in place.
///
/// Integer elements compute `component as f32 + s` and truncate back; the
/// rounding of that round trip is implementation-defined. Recursing through
/// `Coord2` gives the nested line/rectangle instantiations the same operator.
pub trait ScalarAdd {
    /// Add the scalar to this element in place.
    fn add_scalar(&mut self, s: f32);
}

impl ScalarAdd for i32 {
    #[inline]
    fn add_scalar(&mut self, s: f32) {
        *self = (*self as f32 + s) as i32;
    }
}

impl ScalarAdd for f32 {
    #[inline]
    fn add_scalar(&mut self, s: f32) {
        *self += s;
    }
}

impl ScalarAdd for f64 {
    #[inline]
    fn add_scalar(&mut self, s: f32) {
        *self += <f64 as From<f32>>::from(s);
    }
}

impl<T: ScalarAdd> ScalarAdd for Coord2<T> {
    #[inline]
    fn add_scalar(&mut self, s: f32) {
        self.x.add_scalar(s);
        self.y.add_scalar(s);
    }
}

impl<T: ScalarAdd> AddAssign<f32> for Coord2<T> {
    /// Add the same scalar to both components independently.
    #[inline]
    fn add_assign(&mut self, s: f32) {
        self.x.add_scalar(s);
        self.y.add_scalar(s);
    }
}
