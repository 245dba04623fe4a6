//! # Bootcore
//!
//! **Building blocks for a typical backend service**
//!
//! Each member crate is a small, independent helper:
//!
//! - [`config`] - resolve and decode `config.yaml`
//! - [`http`] - the `{code, data, msg}` JSON response envelope
//! - [`shp`] - geometry type, record count and fields of a shapefile
//! - [`mq`] - a RabbitMQ client with one connection and one channel
//! - [`telemetry`] - install a `tracing` subscriber
//!
//! The helpers do not call one another. A service loads its configuration
//! once at startup and hands the relevant sections to the others.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bootcore::prelude::*;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! init_logging(&LogConfig::production())?;
//!
//! let config = load_config()?;
//! let mut mq = MqClient::connect(
//!     &ConnectionParams::from(&config.rabbitmq),
//!     MqOptions::default(),
//! )
//! .await?;
//!
//! let summary = summarize(&config.sqlite.tile_data_path)?;
//! let body = HttpResult::success(summary.record_count, "").into_response()?;
//! # let _ = body;
//!
//! mq.close().await?;
//! # Ok(())
//! # }
//! ```

#![doc(html_root_url = "https://docs.rs/bootcore/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export configuration types
pub use bootcore_config as config;

// Re-export the response envelope
pub use bootcore_http as http;

// Re-export shapefile summaries
pub use bootcore_shp as shp;

// Re-export the broker client
pub use bootcore_mq as mq;

// Re-export logging bootstrap
pub use bootcore_telemetry as telemetry;

/// Prelude module for convenient imports.
///
/// # Example
///
/// ```rust
/// use bootcore::prelude::*;
///
/// let ok = HttpResult::success("pong", "");
/// assert_eq!(ok.code, 200);
/// ```
pub mod prelude {
    pub use bootcore_config::{load_config, BootConfig, ConfigError, ConfigLoader};

    pub use bootcore_http::{EnvelopeError, Exchange, HttpResult};

    pub use bootcore_shp::{summarize, GeometryType, ShapefileSummary, ShpError};

    pub use bootcore_mq::{
        ConnectionParams, ConsumeOptions, Deliveries, MqClient, MqError, MqOptions,
        PublishOptions, QueueOptions,
    };

    pub use bootcore_telemetry::{init_logging, LogConfig, TelemetryError};
}

/// Greeting used by the starter template.
///
/// ```rust
/// assert_eq!(bootcore::greet("Ada"), "Hello, Ada from bootcore!");
/// ```
pub fn greet(name: &str) -> String {
    format!("Hello, {name} from bootcore!")
}

/// Sum of two integers, wrapping on overflow.
///
/// ```rust
/// assert_eq!(bootcore::add(i64::MAX, 1), i64::MIN);
/// ```
pub fn add(a: i64, b: i64) -> i64 {
    a.wrapping_add(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greet() {
        assert_eq!(greet("World"), "Hello, World from bootcore!");
        assert_eq!(greet(""), "Hello,  from bootcore!");
    }

    #[test]
    fn test_add() {
        assert_eq!(add(2, 3), 5);
        assert_eq!(add(-4, 4), 0);
    }

    #[test]
    fn test_add_wraps_on_overflow() {
        assert_eq!(add(i64::MAX, 1), i64::MIN);
        assert_eq!(add(i64::MIN, -1), i64::MAX);
    }

    #[test]
    fn test_modules_are_reachable() {
        let config = config::BootConfig::default();
        let params = mq::ConnectionParams::from(&config.rabbitmq);
        assert_eq!(params.amqp_url(), "amqp://:@:0/");
        assert_eq!(shp::GeometryType::from_code(5).name(), "POLYGON");
        assert!(!telemetry::LogConfig::development().json_format);
        assert_eq!(http::DEFAULT_SUCCESS_MSG, "操作成功");
    }
}
