// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod value_validator;

pub use value_validator::ValueValidator;
