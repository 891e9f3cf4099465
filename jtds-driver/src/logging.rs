//! Logging setup for host programs.
//!
//! The crates emit `tracing` events; this module installs a subscriber for
//! programs that do not bring their own.
//!
//! # Environment Variables
//!
//! - `JTDS_DEBUG=true` - Enable debug logging
//! - `JTDS_LOG_LEVEL=debug|info|warn|error|trace` - Set specific log level
//! - `JTDS_LOG_FORMAT=json|pretty|compact` - Set output format (default: json)
//!
//! # Usage
//!
//! ```rust,no_run
//! use jtds_driver::logging;
//!
//! // Initialize logging (call once at startup)
//! logging::init();
//! ```
//!
//! Locators may contain passwords: log their length, never their text.

use std::sync::Once;

use crate::env::{EnvSource, StdEnvSource};

static INIT: Once = Once::new();

/// Resolved logging settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogSettings {
    /// Whether logging was requested at all.
    pub enabled: bool,
    /// Maximum level: `trace`, `debug`, `info`, `warn` or `error`.
    pub level: &'static str,
    /// Output format: `json`, `pretty` or `compact`.
    pub format: &'static str,
}

impl LogSettings {
    /// Read settings from an environment source.
    pub fn from_env<S: EnvSource>(env: &S) -> Self {
        let debug = is_debug_enabled_in(env);
        let level = env
            .get("JTDS_LOG_LEVEL")
            .and_then(|level| match level.to_lowercase().as_str() {
                "trace" => Some("trace"),
                "debug" => Some("debug"),
                "info" => Some("info"),
                "warn" => Some("warn"),
                "error" => Some("error"),
                _ => None,
            })
            .unwrap_or(if debug { "debug" } else { "warn" });
        let format = env
            .get("JTDS_LOG_FORMAT")
            .map(|f| match f.to_lowercase().as_str() {
                "pretty" => "pretty",
                "compact" => "compact",
                _ => "json",
            })
            .unwrap_or("json");

        Self {
            enabled: debug || env.contains("JTDS_LOG_LEVEL"),
            level,
            format,
        }
    }

    /// Settings with logging enabled at `level`.
    pub fn with_level(level: &'static str) -> Self {
        Self {
            enabled: true,
            level,
            format: "json",
        }
    }
}

/// Check if `JTDS_DEBUG` is set to "true", "1", or "yes" (case-insensitive).
pub fn is_debug_enabled_in<S: EnvSource>(env: &S) -> bool {
    env.get("JTDS_DEBUG")
        .map(|v| matches!(v.to_lowercase().as_str(), "true" | "1" | "yes"))
        .unwrap_or(false)
}

/// Initialize logging from the process environment.
///
/// Subsequent calls are no-ops. Does nothing unless `JTDS_DEBUG` or
/// `JTDS_LOG_LEVEL` is set.
pub fn init() {
    init_with(LogSettings::from_env(&StdEnvSource));
}

/// Initialize logging with explicit settings.
pub fn init_with(settings: LogSettings) {
    INIT.call_once(|| {
        if !settings.enabled {
            return;
        }

        #[cfg(feature = "tracing-subscriber")]
        {
            use tracing_subscriber::{EnvFilter, fmt, prelude::*};

            let level = settings.level;
            let filter = EnvFilter::try_new(format!(
                "jtds={level},jtds_url={level},jtds_driver={level}"
            ))
            .unwrap_or_else(|_| EnvFilter::new("warn"));

            // `try_init` leaves an existing global subscriber in place.
            let result = match settings.format {
                "json" => tracing_subscriber::registry()
                    .with(filter)
                    .with(fmt::layer().json())
                    .try_init(),
                "compact" => tracing_subscriber::registry()
                    .with(filter)
                    .with(fmt::layer().compact())
                    .try_init(),
                _ => tracing_subscriber::registry()
                    .with(filter)
                    .with(fmt::layer().pretty())
                    .try_init(),
            };

            if result.is_ok() {
                tracing::info!(
                    level = settings.level,
                    format = settings.format,
                    "jTDS logging initialized"
                );
            }
        }
    });
}
