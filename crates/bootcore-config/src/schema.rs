//! Configuration schema types.
//!
//! Every section decodes from a partial document: absent keys take their zero
//! value and unknown keys are skipped.

use serde::{Deserialize, Serialize};

/// Server configuration section (`server`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct ServerConfig {
    /// Listening port.
    pub port: u16,
}

/// Database configuration section (`database`).
///
/// # Example
///
/// ```
/// use bootcore_config::DatabaseConfig;
///
/// let db = DatabaseConfig {
///     kind: "postgres".to_string(),
///     host: "localhost".to_string(),
///     port: 5432,
///     ..Default::default()
/// };
/// assert_eq!(db.port, 5432);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Engine type, e.g. `postgres` or `mysql` (the `type` key).
    #[serde(rename = "type")]
    pub kind: String,

    /// Database host.
    pub host: String,

    /// Database port.
    pub port: u16,

    /// Login user.
    pub user: String,

    /// Login password.
    pub password: String,

    /// Database name.
    pub dbname: String,

    /// SSL mode, passed through to the driver verbatim.
    pub sslmode: String,
}

/// Token signing configuration section (`jwt`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct JwtConfig {
    /// Signing secret.
    pub secret: String,

    /// Token lifetime in milliseconds.
    pub expiration_milliseconds: u64,
}

/// Message broker configuration section (`rabbitmq`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct RabbitMqConfig {
    /// Broker host.
    pub host: String,

    /// Broker port.
    pub port: u16,

    /// Login user.
    pub username: String,

    /// Login password.
    pub password: String,
}

/// Local tile storage section (`sqlite`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct SqliteConfig {
    /// Filesystem path of the tile data.
    pub tile_data_path: String,
}
