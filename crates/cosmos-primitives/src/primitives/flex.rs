//! Type-erased scalar storage cell.
//!
//! ## Purpose
//!
//! This module provides a fixed-size slot that can hold any supported
//! primitive value without per-type boxing or allocation. Generic value
//! containers embed it and track which alternative is active themselves.
//!
//! ## Design notes
//!
//! * **Untagged**: The cell carries no runtime type tag. Which alternative is
//!   valid is determined entirely by external context.
//! * **Reinterpretation, not conversion**: Reading through a different
//!   alternative than the one written yields the stored bit pattern
//!   reinterpreted, never a numeric conversion.
//! * **Layout**: `#[repr(transparent)]` over a single `u64`, so the cell is
//!   exactly 8 bytes (the size of its largest alternative on a 64-bit
//!   target). `Pod`/`Zeroable` make the layout contract machine-checked for
//!   consumers that cast it across byte boundaries.
//!
//! ## Key concepts
//!
//! * **Store**: Overwrites the entire cell. The value's bit pattern occupies
//!   the low-order bytes; unused high bytes are cleared.
//! * **Load**: Reinterprets the cell's bits at the accessor's width.
//!
//! ## Invariants
//!
//! * Every store/load pair round-trips exactly.
//! * No operation fails, allocates, or observes anything beyond the cell.
//!
//! ## Non-goals
//!
//! * This module does not track which alternative is active.
//! * This module does not validate cross-alternative reads; a mismatched read
//!   is a caller contract violation and produces the documented
//!   reinterpretation.

// External dependencies
use bytemuck::{Pod, Zeroable};

// ============================================================================
// FlexScalar
// ============================================================================

/// Fixed-size, type-erased scalar cell.
///
/// Holds exactly one of twelve primitive representations at a time: a
/// pointer-sized handle, 64/32/16/8-bit signed and unsigned integers, double
/// and single precision floats, or a boolean. Equality compares the raw bits.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct FlexScalar {
    bits: u64,
}

impl FlexScalar {
    /// Create a zeroed cell.
    #[inline]
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    /// Raw cell contents.
    #[inline]
    pub const fn bits(&self) -> u64 {
        self.bits
    }

    // ========================================================================
    // Pointer-sized handle
    // ========================================================================

    /// Store a pointer-sized handle.
    #[inline]
    pub fn set_handle(&mut self, v: usize) {
        self.bits = v as u64;
    }

    /// Load the cell as a pointer-sized handle.
    #[inline]
    pub fn as_handle(&self) -> usize {
        self.bits as usize
    }

    // ========================================================================
    // 64-bit alternatives
    // ========================================================================

    /// Store an unsigned 64-bit integer.
    #[inline]
    pub fn set_u64(&mut self, v: u64) {
        self.bits = v;
    }

    /// Load the cell as an unsigned 64-bit integer.
    #[inline]
    pub fn as_u64(&self) -> u64 {
        self.bits
    }

    /// Store a signed 64-bit integer.
    #[inline]
    pub fn set_i64(&mut self, v: i64) {
        self.bits = v as u64;
    }

    /// Load the cell as a signed 64-bit integer.
    #[inline]
    pub fn as_i64(&self) -> i64 {
        self.bits as i64
    }

    /// Store a double-precision float.
    #[inline]
    pub fn set_f64(&mut self, v: f64) {
        self.bits = v.to_bits();
    }

    /// Load the cell as a double-precision float.
    #[inline]
    pub fn as_f64(&self) -> f64 {
        f64::from_bits(self.bits)
    }

    // ========================================================================
    // 32-bit alternatives
    // ========================================================================

    /// Store an unsigned 32-bit integer.
    #[inline]
    pub fn set_u32(&mut self, v: u32) {
        self.bits = u64::from(v);
    }

    /// Load the cell as an unsigned 32-bit integer.
    #[inline]
    pub fn as_u32(&self) -> u32 {
        self.bits as u32
    }

    /// Store a signed 32-bit integer.
    #[inline]
    pub fn set_i32(&mut self, v: i32) {
        self.bits = u64::from(v as u32);
    }

    /// Load the cell as a signed 32-bit integer.
    #[inline]
    pub fn as_i32(&self) -> i32 {
        self.bits as u32 as i32
    }

    /// Store a single-precision float.
    #[inline]
    pub fn set_f32(&mut self, v: f32) {
        self.bits = u64::from(v.to_bits());
    }

    /// Load the cell as a single-precision float.
    #[inline]
    pub fn as_f32(&self) -> f32 {
        f32::from_bits(self.bits as u32)
    }

    // ========================================================================
    // 16-bit alternatives
    // ========================================================================

    /// Store an unsigned 16-bit integer.
    #[inline]
    pub fn set_u16(&mut self, v: u16) {
        self.bits = u64::from(v);
    }

    /// Load the cell as an unsigned 16-bit integer.
    #[inline]
    pub fn as_u16(&self) -> u16 {
        self.bits as u16
    }

    /// Store a signed 16-bit integer.
    #[inline]
    pub fn set_i16(&mut self, v: i16) {
        self.bits = u64::from(v as u16);
    }

    /// Load the cell as a signed 16-bit integer.
    #[inline]
    pub fn as_i16(&self) -> i16 {
        self.bits as u16 as i16
    }

    // ========================================================================
    // 8-bit alternatives
    // ========================================================================

    /// Store an unsigned 8-bit integer.
    #[inline]
    pub fn set_u8(&mut self, v: u8) {
        self.bits = u64::from(v);
    }

    /// Load the cell as an unsigned 8-bit integer.
    #[inline]
    pub fn as_u8(&self) -> u8 {
        self.bits as u8
    }

    /// Store a signed 8-bit integer.
    #[inline]
    pub fn set_i8(&mut self, v: i8) {
        self.bits = u64::from(v as u8);
    }

    /// Load the cell as a signed 8-bit integer.
    #[inline]
    pub fn as_i8(&self) -> i8 {
        self.bits as u8 as i8
    }

    // ========================================================================
    // Boolean alternative
    // ========================================================================

    /// Store a boolean (`true` as 1, `false` as 0).
    #[inline]
    pub fn set_bool(&mut self, v: bool) {
        self.bits = u64::from(v);
    }

    /// Load the cell as a boolean: `true` when the low byte is non-zero.
    #[inline]
    pub fn as_bool(&self) -> bool {
        self.bits as u8 != 0
    }
}
