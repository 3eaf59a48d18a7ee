// ============================================================================
// Utilities Module
// Process-level helpers that sit outside the validation path
// ============================================================================

mod logging;

pub use logging::{init_logging, logging_is_initialized};
