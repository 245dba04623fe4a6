//! Shapefile summary error types.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for shapefile operations.
pub type ShpResult<T> = Result<T, ShpError>;

/// Errors that can occur while summarizing a shapefile.
#[derive(Error, Debug)]
pub enum ShpError {
    /// A file could not be opened or read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// File being read.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The main file header is truncated or carries the wrong file code.
    #[error("invalid shapefile header in {path}: {reason}")]
    InvalidHeader {
        /// The `.shp` file.
        path: PathBuf,
        /// What was wrong with the header.
        reason: String,
    },

    /// A record header points past the end of the main file.
    #[error("invalid record at byte {offset} of {path}: {reason}")]
    InvalidRecord {
        /// The `.shp` file.
        path: PathBuf,
        /// Byte offset of the record header.
        offset: usize,
        /// What was wrong with the record.
        reason: String,
    },

    /// The geometry records could not be decoded.
    #[error("failed to open SHP file {path}: {source}")]
    Shapefile {
        /// The `.shp` file.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: shapefile::Error,
    },

    /// The attribute table could not be decoded.
    #[error("failed to read attribute table {path}: {source}")]
    Dbase {
        /// The `.dbf` file.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: dbase::Error,
    },
}

impl ShpError {
    /// Create a new I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a new header error.
    pub fn invalid_header(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::InvalidHeader {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a new record framing error.
    pub fn invalid_record(
        path: impl Into<PathBuf>,
        offset: usize,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidRecord {
            path: path.into(),
            offset,
            reason: reason.into(),
        }
    }

    /// Create a new geometry decoding error.
    pub fn shapefile(path: impl Into<PathBuf>, source: shapefile::Error) -> Self {
        Self::Shapefile {
            path: path.into(),
            source,
        }
    }

    /// Create a new attribute table error.
    pub fn dbase(path: impl Into<PathBuf>, source: dbase::Error) -> Self {
        Self::Dbase {
            path: path.into(),
            source,
        }
    }
}
