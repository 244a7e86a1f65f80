// ============================================================================
// Numeric Module
// Integer decomposition primitives for number-to-text conversion
// ============================================================================
//
// This module provides:
// - Decomposition: base-1000 group iterator, most significant group first
// - ConversionError: error types for construction and conversion
// - MAX_CONVERTIBLE: the largest number that can be spelled out
//
// Design principles:
// - Integer arithmetic only, no floating point in the decomposition path
// - All fallible operations return Result (no panics)
// - Magnitude powers are exact powers of ten

mod decompose;
mod errors;

pub use decompose::{pow10, Decomposition, MAX_CONVERTIBLE};
pub use errors::{ConversionError, ConversionResult};
