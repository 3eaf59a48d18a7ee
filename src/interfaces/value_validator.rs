// ============================================================================
// Value Validator Interface
// Defines the contract for pluggable string validators
// ============================================================================

/// Strategy pattern interface for string validators.
/// Implementations: NumberValidator.
pub trait ValueValidator: Send + Sync {
    /// Check a possibly absent value.
    ///
    /// Must be total: every rejection is `false`, never a panic.
    fn is_valid(&self, value: Option<&str>) -> bool;

    /// Get the validator name for logging
    fn name(&self) -> &str;

    /// Convenience for values that are known to be present.
    fn is_valid_str(&self, value: &str) -> bool {
        self.is_valid(Some(value))
    }
}
