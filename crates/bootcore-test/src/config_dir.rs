//! Temporary configuration directories.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

const CONFIG_FILE_NAME: &str = "config.yaml";

/// A temporary directory that may hold a `config.yaml`.
///
/// The directory and everything in it are removed on drop.
#[derive(Debug)]
pub struct ConfigDir {
    dir: TempDir,
}

impl ConfigDir {
    /// Create an empty directory.
    pub fn new() -> io::Result<Self> {
        Ok(Self {
            dir: TempDir::new()?,
        })
    }

    /// Create a directory containing `config.yaml` with the given content.
    pub fn with_config(yaml: &str) -> io::Result<Self> {
        let dir = Self::new()?;
        dir.write_config(yaml)?;
        Ok(dir)
    }

    /// Returns the directory path.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Returns where `config.yaml` lives in this directory, whether or not
    /// it has been written.
    pub fn config_path(&self) -> PathBuf {
        self.dir.path().join(CONFIG_FILE_NAME)
    }

    /// Write (or overwrite) `config.yaml`.
    pub fn write_config(&self, yaml: &str) -> io::Result<PathBuf> {
        let path = self.config_path();
        fs::write(&path, yaml)?;
        Ok(path)
    }

    /// Delete `config.yaml`.
    pub fn remove_config(&self) -> io::Result<()> {
        fs::remove_file(self.config_path())
    }
}
