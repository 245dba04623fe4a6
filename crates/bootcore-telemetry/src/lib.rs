//! # Bootcore Telemetry
//!
//! Logging bootstrap for applications built on bootcore.
//!
//! The library crates only emit `tracing` events (config resolution,
//! queue declarations, consumer start, client shutdown). Call
//! [`init_logging`] once at startup to see them.
//!
//! ```rust,no_run
//! use bootcore_telemetry::{init_logging, LogConfig};
//!
//! init_logging(&LogConfig::production().with_service_name("tiles"))?;
//! # Ok::<(), bootcore_telemetry::TelemetryError>(())
//! ```

#![doc(html_root_url = "https://docs.rs/bootcore-telemetry/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod error;
pub mod logging;

pub use error::TelemetryError;
pub use logging::{create_env_filter, init_logging, LogConfig, FILTER_ENV_VAR};

/// Result type for telemetry operations.
pub type TelemetryResult<T> = Result<T, TelemetryError>;
