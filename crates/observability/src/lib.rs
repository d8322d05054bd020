//! Tracing and logging (shared setup).

/// Initialize process-wide observability from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(&config::ObservabilityConfig::from_env());
}

/// Initialize with an explicit configuration instead of the environment.
pub fn init_with(config: &config::ObservabilityConfig) {
    tracing::init(config);
}

/// Environment-driven configuration.
pub mod config;

/// Tracing subscriber installation (filters, formats).
pub mod tracing;

pub use config::{LogFormat, ObservabilityConfig};
