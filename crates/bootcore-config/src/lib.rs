//! Typed configuration for bootcore services.
//!
//! This crate resolves a `config.yaml` from a fixed, ordered list of
//! locations and decodes it into [`BootConfig`]:
//!
//! 1. `config.yaml` in the directory containing the running executable
//! 2. `config.yaml` in the current working directory
//!
//! The first candidate that exists wins. A candidate that is absent falls
//! through to the next one; any other failure is returned immediately.
//!
//! # Sections
//!
//! - [`ServerConfig`] - listening port
//! - [`DatabaseConfig`] - engine type and connection settings
//! - [`JwtConfig`] - token signing secret and lifetime
//! - [`RabbitMqConfig`] - message broker connection
//! - [`SqliteConfig`] - local tile data path
//!
//! # Example
//!
//! ```no_run
//! # fn main() -> Result<(), bootcore_config::ConfigError> {
//! let config = bootcore_config::load_config()?;
//! println!("Server will listen on port {}", config.server.port);
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration File Format
//!
//! ```yaml
//! server:
//!   port: 8080
//! database:
//!   type: postgres
//!   host: localhost
//!   port: 5432
//!   user: app
//!   password: secret
//!   dbname: app
//!   sslmode: disable
//! jwt:
//!   secret: change-me
//!   expiration_milliseconds: 86400000
//! rabbitmq:
//!   host: localhost
//!   port: 5672
//!   username: guest
//!   password: guest
//! sqlite:
//!   tile_data_path: ./data/tiles.mbtiles
//! ```
//!
//! Every key is optional. Missing keys decode to zero values and unknown
//! keys are ignored. Ports are `u16`: a value outside `0..=65535` (for
//! example `port: 70000`) is rejected with [`ConfigError::Parse`] instead of
//! being carried through to the connection attempt.

#![warn(missing_docs)]

mod config;
mod error;
mod loader;
mod schema;

pub use config::BootConfig;
pub use error::ConfigError;
pub use loader::{default_search_paths, load_config, ConfigLoader, CONFIG_FILE_NAME};
pub use schema::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BootConfig::default();
        assert_eq!(config.server.port, 0);
        assert!(config.jwt.secret.is_empty());
    }

    #[test]
    fn test_config_file_name() {
        assert_eq!(CONFIG_FILE_NAME, "config.yaml");
    }
}
