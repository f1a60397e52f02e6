//! Tests for the type-erased scalar cell.
//!
//! These tests verify the fixed-size storage slot embedded by generic value
//! containers:
//! - Size and layout guarantees
//! - Round-trips through every alternative
//! - Bit reinterpretation across alternatives
//!
//! ## Test Organization
//!
//! 1. **Layout** - Cell size and zeroed default
//! 2. **Round-Trips** - Store/load through matching alternatives
//! 3. **Reinterpretation** - Cross-alternative reads are bit-level

use core::mem;

use cosmos_primitives::prelude::*;

// ============================================================================
// Layout Tests
// ============================================================================

/// Test the cell is exactly the size of its largest alternative.
#[test]
fn test_cell_size_matches_largest_alternative() {
    assert_eq!(mem::size_of::<FlexScalar>(), mem::size_of::<u64>());
    assert!(mem::size_of::<FlexScalar>() >= mem::size_of::<usize>());
}

/// Test default construction yields a zeroed cell.
#[test]
fn test_default_is_zeroed() {
    let cell = FlexScalar::default();
    assert_eq!(cell.bits(), 0);
    assert_eq!(cell.as_u64(), 0);
    assert!(!cell.as_bool());
    assert_eq!(cell, FlexScalar::new());
}

/// Test the cell can be cast bytewise by embedding containers.
#[test]
fn test_cell_is_byte_castable() {
    let mut cell = FlexScalar::new();
    cell.set_u64(0x0102_0304_0506_0708);

    let bytes: [u8; 8] = bytemuck::cast(cell);
    let back: FlexScalar = bytemuck::cast(bytes);
    assert_eq!(back, cell);
}

// ============================================================================
// Round-Trip Tests
// ============================================================================

/// Test store/load round-trips through matching alternatives.
#[test]
fn test_matching_alternative_round_trips() {
    let mut cell = FlexScalar::new();

    cell.set_handle(0xDEAD_BEEF);
    assert_eq!(cell.as_handle(), 0xDEAD_BEEF);

    cell.set_i64(-1);
    assert_eq!(cell.as_i64(), -1);

    cell.set_f64(-2.5);
    assert_eq!(cell.as_f64(), -2.5);

    cell.set_u32(u32::MAX);
    assert_eq!(cell.as_u32(), u32::MAX);

    cell.set_i32(i32::MIN);
    assert_eq!(cell.as_i32(), i32::MIN);

    cell.set_f32(1.25);
    assert_eq!(cell.as_f32(), 1.25);

    cell.set_u16(0xABCD);
    assert_eq!(cell.as_u16(), 0xABCD);

    cell.set_i16(-12345);
    assert_eq!(cell.as_i16(), -12345);

    cell.set_u8(0x7F);
    assert_eq!(cell.as_u8(), 0x7F);

    cell.set_i8(-128);
    assert_eq!(cell.as_i8(), -128);

    cell.set_bool(true);
    assert!(cell.as_bool());
}

// ============================================================================
// Reinterpretation Tests
// ============================================================================

/// Test reading a double after writing a 64-bit integer reinterprets bits.
#[test]
fn test_u64_to_f64_is_bit_reinterpretation() {
    let mut cell = FlexScalar::new();

    cell.set_u64(0x4059_0000_0000_0000);
    assert_eq!(cell.as_f64(), 100.0);

    cell.set_f64(-2.5);
    assert_eq!(cell.as_u64(), (-2.5f64).to_bits());
}

/// Test a store overwrites the whole cell, clearing unused high bytes.
#[test]
fn test_narrow_store_clears_high_bytes() {
    let mut cell = FlexScalar::new();

    cell.set_u64(u64::MAX);
    cell.set_i8(-1);

    assert_eq!(cell.as_u64(), 0xFF);
    assert_eq!(cell.as_u8(), 0xFF);
}

/// Test signed stores keep their width's bit pattern without sign extension.
#[test]
fn test_signed_store_is_zero_extended() {
    let mut cell = FlexScalar::new();

    cell.set_i32(-1);
    assert_eq!(cell.as_u64(), 0xFFFF_FFFF);
    assert_eq!(cell.as_u32(), u32::MAX);
}

/// Test the boolean load reports on the low byte only.
#[test]
fn test_bool_load_inspects_low_byte() {
    let mut cell = FlexScalar::new();

    cell.set_u32(0x100);
    assert!(!cell.as_bool());

    cell.set_u8(2);
    assert!(cell.as_bool());
}

/// Test single-precision loads reinterpret the low 32 bits.
#[test]
fn test_u32_to_f32_is_bit_reinterpretation() {
    let mut cell = FlexScalar::new();

    cell.set_u32(0x3F80_0000);
    assert_eq!(cell.as_f32(), 1.0);
}
