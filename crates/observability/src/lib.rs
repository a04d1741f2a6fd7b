//! Tracing and logging setup shared by the binaries.

/// Initialize process-wide logging.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init(config: &ObservabilityConfig) -> Result<(), ObservabilityError> {
    tracing::init(config)
}

/// Tracing configuration (filters, formats, writers).
pub mod tracing;

pub use self::tracing::{LogFormat, ObservabilityConfig, ObservabilityError};
