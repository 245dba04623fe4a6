//! Root configuration type.
//!
//! This module provides [`BootConfig`], the typed view of a `config.yaml`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{ConfigError, DatabaseConfig, JwtConfig, RabbitMqConfig, ServerConfig, SqliteConfig};

/// Path label used in errors for documents that did not come from disk.
pub(crate) const INLINE_SOURCE: &str = "<inline>";

/// Complete service configuration.
///
/// Every section is optional; a missing section decodes to its zero value.
/// Use [`ConfigLoader`](crate::ConfigLoader) to resolve and read the file
/// from disk.
///
/// # Example
///
/// ```
/// use bootcore_config::BootConfig;
///
/// let config = BootConfig::from_yaml_str("server:\n  port: 8080\n").unwrap();
/// assert_eq!(config.server.port, 8080);
/// assert!(config.database.host.is_empty());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct BootConfig {
    /// Server configuration.
    pub server: ServerConfig,

    /// Database connection settings.
    pub database: DatabaseConfig,

    /// Token signing settings.
    pub jwt: JwtConfig,

    /// Message broker connection settings.
    pub rabbitmq: RabbitMqConfig,

    /// Local tile storage.
    pub sqlite: SqliteConfig,
}

impl BootConfig {
    /// Decode a YAML document held in memory.
    ///
    /// An empty document yields the all-zero configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` if the document is not valid YAML or a
    /// recognized key has the wrong type.
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        Self::decode(content.as_bytes(), Path::new(INLINE_SOURCE))
    }

    /// Encode the recognized fields back to YAML.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` if serialization fails.
    pub fn to_yaml_string(&self) -> Result<String, ConfigError> {
        serde_yaml::to_string(self).map_err(|e| ConfigError::parse(INLINE_SOURCE, e))
    }

    pub(crate) fn decode(content: &[u8], origin: &Path) -> Result<Self, ConfigError> {
        if content.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        serde_yaml::from_slice(content).map_err(|e| ConfigError::parse(origin, e))
    }
}
