//! Structured logging bootstrap.
//!
//! Installs a global `tracing` subscriber that writes either JSON lines or
//! human-readable output. Library crates in this workspace only emit
//! events; installing a subscriber is left to the hosting binary.
//!
//! # Example
//!
//! ```rust,no_run
//! use bootcore_telemetry::{init_logging, LogConfig};
//!
//! init_logging(&LogConfig::development().with_service_name("tile-server"))?;
//! tracing::info!(port = 8080, "listening");
//! # Ok::<(), bootcore_telemetry::TelemetryError>(())
//! ```

use std::env;

use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

use crate::error::TelemetryError;
use crate::TelemetryResult;

/// Name of the environment variable that overrides [`LogConfig::level`].
pub const FILTER_ENV_VAR: &str = "RUST_LOG";

const DEFAULT_SERVICE_NAME: &str = "bootcore";

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Whether to install a subscriber at all.
    pub enabled: bool,

    /// Filter directives, e.g. `"info"` or `"bootcore_mq=debug,lapin=warn"`.
    pub level: String,

    /// JSON lines instead of pretty output.
    pub json_format: bool,

    /// Log span creation and close.
    pub span_events: bool,

    /// Include source file and line.
    pub file_line_info: bool,

    /// Include thread IDs.
    pub thread_ids: bool,

    /// Include the event target (module path).
    pub include_target: bool,

    /// Reported once when the subscriber is installed.
    pub service_name: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::production()
    }
}

impl LogConfig {
    /// Human-readable output at `debug`, with span events and source
    /// locations.
    pub fn development() -> Self {
        Self {
            enabled: true,
            level: "debug".to_string(),
            json_format: false,
            span_events: true,
            file_line_info: true,
            thread_ids: false,
            include_target: true,
            service_name: DEFAULT_SERVICE_NAME.to_string(),
        }
    }

    /// JSON lines at `info`.
    pub fn production() -> Self {
        Self {
            enabled: true,
            level: "info".to_string(),
            json_format: true,
            span_events: false,
            file_line_info: false,
            thread_ids: false,
            include_target: true,
            service_name: DEFAULT_SERVICE_NAME.to_string(),
        }
    }

    /// A config that installs nothing.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::production()
        }
    }

    /// Set the filter directives.
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    /// Set the service name.
    pub fn with_service_name(mut self, name: impl Into<String>) -> Self {
        self.service_name = name.into();
        self
    }

    /// Switch between JSON and pretty output.
    pub fn with_json_format(mut self, json: bool) -> Self {
        self.json_format = json;
        self
    }

    fn span_events(&self) -> FmtSpan {
        if self.span_events {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        }
    }
}

/// Install the global subscriber described by `config`.
///
/// When `RUST_LOG` is set and non-empty it replaces `config.level`. A
/// disabled config returns `Ok(())` without touching the global state.
///
/// # Errors
///
/// Returns `TelemetryError::InvalidFilter` for unparsable directives and
/// `TelemetryError::LoggingInit` if a global subscriber is already set.
pub fn init_logging(config: &LogConfig) -> TelemetryResult<()> {
    if !config.enabled {
        return Ok(());
    }

    let directives = match env::var(FILTER_ENV_VAR) {
        Ok(value) if !value.trim().is_empty() => value,
        _ => config.level.clone(),
    };
    let filter = create_env_filter(&directives)?;

    let fmt_layer: Box<dyn Layer<Registry> + Send + Sync> = if config.json_format {
        tracing_subscriber::fmt::layer()
            .json()
            .with_span_events(config.span_events())
            .with_file(config.file_line_info)
            .with_line_number(config.file_line_info)
            .with_thread_ids(config.thread_ids)
            .with_target(config.include_target)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .pretty()
            .with_span_events(config.span_events())
            .with_file(config.file_line_info)
            .with_line_number(config.file_line_info)
            .with_thread_ids(config.thread_ids)
            .with_target(config.include_target)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .try_init()
        .map_err(|e| TelemetryError::LoggingInit(e.to_string()))?;

    tracing::debug!(
        service = %config.service_name,
        filter = %directives,
        json = config.json_format,
        "logging initialized"
    );
    Ok(())
}

/// Parse filter directives such as `"info"` or `"bootcore_config=debug"`.
///
/// # Errors
///
/// Returns `TelemetryError::InvalidFilter` if the directives do not parse.
pub fn create_env_filter(directives: &str) -> TelemetryResult<EnvFilter> {
    EnvFilter::try_new(directives).map_err(|e| TelemetryError::invalid_filter(directives, e))
}
