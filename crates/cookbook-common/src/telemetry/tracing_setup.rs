//! Tracing subscriber setup
//!
//! One subscriber per process, filtered through `RUST_LOG` when set.

use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Output format for log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable, for local development
    Pretty,
    /// One JSON object per line, for log shippers
    Json,
}

/// Tracing configuration options
#[derive(Debug, Clone)]
pub struct TracingConfig {
    /// Fallback filter directive when `RUST_LOG` is unset, e.g. "info"
    pub default_filter: String,
    pub format: LogFormat,
    /// Emit span open/close events
    pub span_events: bool,
    /// Annotate events with file and line
    pub locations: bool,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            default_filter: "info".to_string(),
            format: LogFormat::Pretty,
            span_events: false,
            locations: true,
        }
    }
}

impl TracingConfig {
    /// Verbose local-development settings
    #[must_use]
    pub fn development() -> Self {
        Self {
            default_filter: "debug".to_string(),
            span_events: true,
            ..Self::default()
        }
    }

    /// Structured JSON output without source locations
    #[must_use]
    pub fn production() -> Self {
        Self {
            format: LogFormat::Json,
            locations: false,
            ..Self::default()
        }
    }

    fn span_events(&self) -> FmtSpan {
        if self.span_events {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        }
    }
}

/// Install the global subscriber with default configuration.
///
/// # Panics
/// Panics when a subscriber is already installed.
pub fn init_tracing() {
    try_init_tracing_with_config(&TracingConfig::default())
        .expect("tracing subscriber already initialized");
}

/// Install the global subscriber, tolerating repeat calls (tests)
pub fn try_init_tracing() -> Result<(), TracingError> {
    try_init_tracing_with_config(&TracingConfig::default())
}

/// Install the global subscriber with the given configuration
pub fn try_init_tracing_with_config(config: &TracingConfig) -> Result<(), TracingError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.default_filter));

    let registry = tracing_subscriber::registry().with(filter);

    let result = match config.format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_file(config.locations)
                    .with_line_number(config.locations)
                    .with_span_events(config.span_events()),
            )
            .try_init(),
        LogFormat::Pretty => registry
            .with(
                fmt::layer()
                    .with_file(config.locations)
                    .with_line_number(config.locations)
                    .with_span_events(config.span_events()),
            )
            .try_init(),
    };

    result.map_err(|_| TracingError::AlreadyInitialized)
}

/// Tracing initialization errors
#[derive(Debug, thiserror::Error)]
pub enum TracingError {
    #[error("Tracing subscriber already initialized")]
    AlreadyInitialized,
}
