// ============================================================================
// Number Validator Library
// Format checks for fixed-point decimal strings in N(precision, scale)
// ============================================================================

//! # Number Validator
//!
//! Checks whether a string is a fixed-point decimal that fits the format
//! N(precision, scale).
//!
//! ## Rules
//!
//! - **Shape**: optional `+`/`-`, one or more ASCII digits, optionally a
//!   `.` or `,` followed by one or more digits
//! - **Precision**: sign, integer digits and fraction digits together must
//!   not exceed `precision` (leading zeros count)
//! - **Scale**: fraction digits must not exceed `scale`
//! - **Sign policy**: with `only_positive`, an explicit `-` is rejected
//!
//! Construction rejects impossible formats; validation never fails, it
//! answers `true` or `false`.
//!
//! ## Example
//!
//! ```rust
//! use number_validator::prelude::*;
//!
//! let validator = NumberValidator::new(17, 2, true).unwrap();
//!
//! assert!(validator.is_valid(Some("0,0")));
//! assert!(validator.is_valid(Some("123.45")));
//! assert!(!validator.is_valid(Some("0.000")));
//! assert!(!validator.is_valid(Some("-1.23")));
//! assert!(!validator.is_valid(None));
//!
//! let err = NumberValidator::new(0, 0, false).unwrap_err();
//! assert_eq!(err.to_string(), "precision must be a positive number");
//! ```

pub mod domain;
pub mod interfaces;
pub mod numeric;
#[cfg(feature = "logging")]
pub mod utils;
pub mod validator;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{ValidatorConfig, ValidatorConfigBuilder};
    pub use crate::interfaces::ValueValidator;
    pub use crate::numeric::{FormatError, FormatResult, ParsedNumber, Sign};
    pub use crate::validator::{is_valid, NumberValidator};
}
