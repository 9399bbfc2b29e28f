//! Tracing/logging setup shared by quizbank binaries.

pub mod config;
pub mod subscriber;

pub use config::{LOG_FORMAT_ENV, LogFormat, ObservabilityConfig, UnknownLogFormat};

/// Initialize process-wide tracing from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    let (config, rejected) = ObservabilityConfig::from_env();
    subscriber::init(&config);

    if let Some(err) = rejected {
        tracing::warn!(error = %err, "falling back to {} log format", config.format);
    }
}
