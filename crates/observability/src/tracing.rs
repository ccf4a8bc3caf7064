//! Tracing/logging initialization.
//!
//! Construction is explicit and happens once at the binary edge; library
//! crates only emit events and never install subscribers.

use tracing_subscriber::EnvFilter;

/// Output format for process logs.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LogFormat {
    /// Structured JSON lines (production).
    Json,
    /// Human-readable text (development, tests).
    Text,
}

impl LogFormat {
    /// Select a format from a deployment environment name: `production`
    /// gets JSON, anything else gets text.
    pub fn from_env_name(env: &str) -> Self {
        if env == "production" {
            Self::Json
        } else {
            Self::Text
        }
    }
}

/// Initialize tracing/logging for the process.
///
/// Filtering is driven by `RUST_LOG` (default `info`). Safe to call multiple
/// times (subsequent calls are no-ops), so tests can init freely.
pub fn init(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    let _ = match format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.try_init(),
    };
}
