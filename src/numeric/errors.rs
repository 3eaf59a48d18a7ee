// ============================================================================
// Format Errors
// Error types for validator construction and value conversion
// ============================================================================

use thiserror::Error;

/// Errors raised while building a validator or converting an accepted value.
///
/// Validation itself never produces one of these: a rejected value is simply
/// `false`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum FormatError {
    /// Precision was zero or negative
    #[error("precision must be a positive number")]
    InvalidPrecision { precision: i32 },

    /// Scale was negative or not strictly below precision
    #[error("scale must be a non-negative number less than precision")]
    InvalidScale { precision: i32, scale: i32 },

    /// Format notation such as `N(17,2)` could not be read
    #[error("invalid format notation: {0}")]
    InvalidNotation(String),

    /// Accepted value does not fit in a `rust_decimal::Decimal`
    #[error("value cannot be represented as a decimal: {0}")]
    Unrepresentable(String),
}

impl FormatError {
    /// True for errors that reject a validator configuration.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            FormatError::InvalidPrecision { .. }
                | FormatError::InvalidScale { .. }
                | FormatError::InvalidNotation(_)
        )
    }
}

/// Result type alias for format operations
pub type FormatResult<T> = Result<T, FormatError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            FormatError::InvalidPrecision { precision: -1 }.to_string(),
            "precision must be a positive number"
        );
        assert_eq!(
            FormatError::InvalidScale {
                precision: 2,
                scale: 2
            }
            .to_string(),
            "scale must be a non-negative number less than precision"
        );
        assert_eq!(
            FormatError::InvalidNotation("N(".to_string()).to_string(),
            "invalid format notation: N("
        );
    }

    #[test]
    fn test_error_tiers() {
        assert!(FormatError::InvalidPrecision { precision: 0 }.is_configuration());
        assert!(FormatError::InvalidScale {
            precision: 1,
            scale: -1
        }
        .is_configuration());
        assert!(!FormatError::Unrepresentable("1".repeat(40)).is_configuration());
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(
            FormatError::InvalidPrecision { precision: 0 },
            FormatError::InvalidPrecision { precision: 0 }
        );
        assert_ne!(
            FormatError::InvalidPrecision { precision: 0 },
            FormatError::InvalidPrecision { precision: -1 }
        );
    }
}
