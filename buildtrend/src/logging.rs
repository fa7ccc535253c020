//! Logging configuration for buildtrend.
//!
//! The engine emits structured `tracing` events (run start, per-provider
//! execution, persistence). This module carries the configuration knobs and
//! a convenience installer for callers that do not bring their own
//! subscriber.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Logging configuration.
///
/// `RUST_LOG`, when set, takes precedence over `base_level`.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Base log level for buildtrend components.
    pub base_level: Level,
    /// Whether to log per-provider extraction details.
    pub log_provider_details: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            base_level: Level::INFO,
            log_provider_details: false,
        }
    }
}

impl LogConfig {
    /// Creates a verbose configuration suitable for debugging.
    pub fn verbose() -> Self {
        Self {
            base_level: Level::DEBUG,
            log_provider_details: true,
        }
    }

    /// Creates a minimal configuration for CI with lowest noise.
    pub fn production() -> Self {
        Self {
            base_level: Level::WARN,
            log_provider_details: false,
        }
    }
}

/// Installs a global fmt subscriber honoring the configuration.
///
/// Does nothing if a subscriber is already installed, so libraries and
/// tests can call it unconditionally.
pub fn init(config: &LogConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let directive = if config.log_provider_details {
            format!("{},buildtrend=debug", config.base_level)
        } else {
            config.base_level.to_string()
        };
        EnvFilter::new(directive)
    });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
