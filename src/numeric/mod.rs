// ============================================================================
// Numeric Module
// Lexical model of fixed-point decimal strings
// ============================================================================
//
// This module provides:
// - ParsedNumber: borrowed sign / integer / fraction split of a string
// - Sign: explicit sign marker of a parsed value
// - FormatError: error types for construction and conversion
//
// Design principles:
// - Parsing never allocates; digit groups borrow from the input
// - Only ASCII digits are accepted, so digit counts equal byte counts
// - Both '.' and ',' act as the decimal separator

mod errors;
mod parsed;

pub use errors::{FormatError, FormatResult};
pub use parsed::{ParsedNumber, Sign};
