// ============================================================================
// Domain Models Module
// Value objects describing a numeric format
// ============================================================================

pub mod config;

pub use config::{ValidatorConfig, ValidatorConfigBuilder};
