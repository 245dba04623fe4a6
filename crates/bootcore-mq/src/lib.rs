//! # Bootcore MQ
//!
//! A thin RabbitMQ client over [`lapin`]: one connection, one channel,
//! four operations.
//!
//! - [`MqClient::publish`] - send to a queue through the default exchange
//! - [`MqClient::declare_queue`] - create a queue if missing
//! - [`MqClient::consume`] - a [`Deliveries`] stream
//! - [`MqClient::close`] - channel, then connection
//!
//! Protocol flags live in [`MqOptions`]. The defaults match a plain
//! non-durable work queue with auto-acknowledged deliveries.
//!
//! Connection parameters usually come from the `rabbitmq` section of the
//! service configuration:
//!
//! ```rust,no_run
//! use bootcore_mq::{ConnectionParams, MqClient, MqOptions};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = bootcore_config::load_config()?;
//! let params = ConnectionParams::from(&config.rabbitmq);
//! let mut client = MqClient::connect(&params, MqOptions::default()).await?;
//! client.close().await?;
//! # Ok(())
//! # }
//! ```

#![doc(html_root_url = "https://docs.rs/bootcore-mq/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod client;
mod deliveries;
mod error;
mod options;
mod params;

pub use client::MqClient;
pub use deliveries::Deliveries;
pub use error::{MqError, MqResult};
pub use options::{ConsumeOptions, MqOptions, PublishOptions, QueueOptions, DEFAULT_CONTENT_TYPE};
pub use params::ConnectionParams;

/// Delivered message type, re-exported from `lapin`.
pub use lapin::message::Delivery;
