//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while resolving and decoding configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The running executable's location could not be determined.
    #[error("failed to get executable path: {source}")]
    ExecutableLocation {
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// An existence check failed for a reason other than "not found".
    #[error("failed to check config file existence: {path}")]
    Access {
        /// Path that was checked.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// No candidate file exists.
    #[error("configuration file not found, searched: {}", display_paths(.searched))]
    NotFound {
        /// Every candidate path, in search order.
        searched: Vec<PathBuf>,
    },

    /// Failed to read configuration file.
    #[error("failed to read config file {path}")]
    Read {
        /// Path to the file.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid YAML or does not match the schema.
    #[error("failed to unmarshal config from {path}: {source}")]
    Parse {
        /// Path to the file (`<inline>` for in-memory documents).
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: serde_yaml::Error,
    },

    /// An environment override could not be applied.
    #[error("failed to parse environment variable {var}: {reason}")]
    EnvParse {
        /// The environment variable name.
        var: String,
        /// Explanation of the parsing error.
        reason: String,
    },
}

impl ConfigError {
    /// Create a new existence-check error.
    pub fn access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Access {
            path: path.into(),
            source,
        }
    }

    /// Create a new not-found error.
    pub fn not_found(searched: Vec<PathBuf>) -> Self {
        Self::NotFound { searched }
    }

    /// Create a new read error.
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    /// Create a new parse error.
    pub fn parse(path: impl Into<PathBuf>, source: serde_yaml::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }

    /// Create a new environment variable parse error.
    pub fn env_parse(var: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::EnvParse {
            var: var.into(),
            reason: reason.into(),
        }
    }
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
