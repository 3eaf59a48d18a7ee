// ============================================================================
// Logging Setup
// Installs a tracing subscriber for binaries, demos and benchmarks
// ============================================================================

use std::sync::atomic::{AtomicBool, Ordering};
use tracing::Level;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static LOGGING_INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Returns whether [`init_logging`] has installed a subscriber.
pub fn logging_is_initialized() -> bool {
    LOGGING_INITIALIZED.load(Ordering::Relaxed)
}

/// Install a `fmt` subscriber as the global default.
///
/// `RUST_LOG` takes precedence when set; otherwise events at
/// `default_level` and above are printed. Rejected values are logged at
/// `TRACE`, rejected configurations at `DEBUG`.
///
/// Calling this more than once is harmless: later calls return `Ok(())`
/// without touching the installed subscriber.
///
/// # Errors
/// Returns `TryInitError` if another global subscriber was installed
/// outside this function.
pub fn init_logging(default_level: Level) -> Result<(), TryInitError> {
    if LOGGING_INITIALIZED.load(Ordering::SeqCst) {
        return Ok(());
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level.as_str().to_lowercase()));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .try_init()?;

    LOGGING_INITIALIZED.store(true, Ordering::SeqCst);
    Ok(())
}
