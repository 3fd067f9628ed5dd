//! # Logging & Tracing Infrastructure
//!
//! Structured logging with the `tracing` crate, supporting:
//! - Pretty, JSON, and compact output formats
//! - Module-level filtering via `EnvFilter` directives
//! - PII redaction helpers (credentials, tokens, emails)
//!
//! ## Usage
//!
//! ```ignore
//! use core_runtime::logging::{init_logging, LogFormat, LoggingConfig};
//!
//! let config = LoggingConfig::default()
//!     .with_format(LogFormat::Json)
//!     .with_filter("info,core_auth=debug");
//! init_logging(config)?;
//!
//! tracing::info!("application started");
//! ```
//!
//! Credentials must never reach a log line. Call sites in the auth module
//! skip password fields entirely; anything email-shaped goes through
//! [`redact_if_sensitive`] first.

use crate::error::{Error, Result};
use tracing_subscriber::{filter::EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter when neither `RUST_LOG` nor an explicit filter is set.
pub const DEFAULT_FILTER: &str = "info,core_auth=debug";

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable pretty format with colors
    Pretty,
    /// Structured JSON format for machine parsing
    Json,
    /// Compact format for production
    Compact,
}

impl Default for LogFormat {
    fn default() -> Self {
        #[cfg(debug_assertions)]
        return Self::Pretty;

        #[cfg(not(debug_assertions))]
        return Self::Json;
    }
}

/// Logging configuration
#[derive(Debug, Clone, Default)]
pub struct LoggingConfig {
    /// Output format
    pub format: LogFormat,
    /// Custom filter directives (e.g. `"info,core_auth=trace"`).
    /// When unset, `RUST_LOG` is honored, then [`DEFAULT_FILTER`].
    pub filter: Option<String>,
}

impl LoggingConfig {
    /// Set the log format
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Set explicit filter directives
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    fn env_filter(&self) -> Result<EnvFilter> {
        match &self.filter {
            Some(directives) => EnvFilter::try_new(directives).map_err(|e| {
                Error::Config(format!("invalid log filter '{directives}': {e}"))
            }),
            None => Ok(EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))),
        }
    }
}

/// Install the global tracing subscriber.
///
/// # Errors
///
/// Returns [`Error::Config`] when the filter directives do not parse or a
/// subscriber is already installed.
pub fn init_logging(config: LoggingConfig) -> Result<()> {
    let filter = config.env_filter()?;
    let registry = tracing_subscriber::registry().with(filter);

    match config.format {
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().pretty())
            .try_init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init(),
        LogFormat::Compact => registry
            .with(tracing_subscriber::fmt::layer().compact())
            .try_init(),
    }
    .map_err(|e| Error::Config(format!("failed to install tracing subscriber: {e}")))
}

/// Redact a value when its field name marks it as sensitive.
///
/// Passwords, tokens, and secrets are replaced wholesale; emails keep
/// their first character so adjacent log lines remain correlatable.
pub fn redact_if_sensitive(field: &str, value: &str) -> String {
    let lowered = field.to_ascii_lowercase();
    if lowered.contains("password") || lowered.contains("token") || lowered.contains("secret") {
        return "[REDACTED]".to_string();
    }
    if lowered.contains("email") {
        let mut chars = value.chars();
        return match chars.next() {
            Some(first) => format!("{first}***[REDACTED]"),
            None => String::new(),
        };
    }
    value.to_string()
}
