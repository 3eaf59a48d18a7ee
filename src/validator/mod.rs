// ============================================================================
// Validator Module
// Acceptance checks for fixed-point decimal strings
// ============================================================================

mod number_validator;

pub use number_validator::{is_valid, NumberValidator};
