//! Configuration resolver.
//!
//! This module provides the [`ConfigLoader`] which locates `config.yaml` by
//! walking an ordered list of candidate paths, reads the first one present
//! and decodes it into a [`BootConfig`].

use std::collections::HashMap;
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{BootConfig, ConfigError};

/// File name looked up in every default search location.
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Returns the default candidate list, in priority order:
///
/// 1. `config.yaml` next to the running executable
/// 2. `config.yaml` in the current working directory
///
/// # Errors
///
/// Returns `ConfigError::ExecutableLocation` if the executable path cannot
/// be determined.
pub fn default_search_paths() -> Result<Vec<PathBuf>, ConfigError> {
    let exe = env::current_exe().map_err(|source| ConfigError::ExecutableLocation { source })?;
    let exe_dir = exe.parent().map(Path::to_path_buf).unwrap_or_default();

    Ok(vec![
        exe_dir.join(CONFIG_FILE_NAME),
        PathBuf::from(CONFIG_FILE_NAME),
    ])
}

/// Load configuration from the default search locations.
///
/// Shorthand for `ConfigLoader::new().load()`.
///
/// # Errors
///
/// See [`ConfigLoader::load`].
pub fn load_config() -> Result<BootConfig, ConfigError> {
    ConfigLoader::new().load()
}

/// Search-path based configuration loader.
///
/// Candidates are checked for existence in order; the first one present is
/// read and nothing after it is touched. A candidate that is merely absent
/// falls through to the next one, while any other failure to check it aborts the
/// search. [`resolve`](Self::resolve) and [`load`](Self::load) share this
/// walk, so `load` always reads the path `resolve` reports.
///
/// Nothing is cached: each call to [`load`](Self::load) re-reads the file.
///
/// # Example
///
/// ```no_run
/// use bootcore_config::ConfigLoader;
///
/// # fn main() -> Result<(), bootcore_config::ConfigError> {
/// let config = ConfigLoader::new()
///     .with_search_paths(["/etc/myapp/config.yaml", "config.yaml"])
///     .load()?;
///
/// println!("Server will listen on port {}", config.server.port);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    search_paths: Option<Vec<PathBuf>>,
    env_prefix: Option<String>,
}

impl ConfigLoader {
    /// Create a loader using the default search locations.
    ///
    /// The executable directory is only looked up when the loader runs.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the candidate list.
    ///
    /// # Example
    ///
    /// ```
    /// use bootcore_config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::new().with_search_paths(["a.yaml", "b.yaml"]);
    /// ```
    #[must_use]
    pub fn with_search_paths<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.search_paths = Some(paths.into_iter().map(Into::into).collect());
        self
    }

    /// Read exactly one file.
    #[must_use]
    pub fn with_file<P: Into<PathBuf>>(self, path: P) -> Self {
        self.with_search_paths([path])
    }

    /// Set environment variable prefix for overrides.
    ///
    /// Environment variables use the format `PREFIX__SECTION__KEY` and are
    /// applied after the file is decoded. For example, with prefix `"BOOT"`:
    /// - `BOOT__SERVER__PORT=9000`
    /// - `BOOT__DATABASE__HOST=db.internal`
    ///
    /// Without a prefix the environment is never consulted.
    #[must_use]
    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = Some(prefix.to_uppercase());
        self
    }

    /// Returns the candidate list this loader will walk.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ExecutableLocation` when the default list is in
    /// use and the executable path cannot be determined.
    pub fn search_paths(&self) -> Result<Vec<PathBuf>, ConfigError> {
        match &self.search_paths {
            Some(paths) => Ok(paths.clone()),
            None => default_search_paths(),
        }
    }

    /// Returns the path that [`load`](Self::load) would read, without
    /// reading it.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if no candidate exists and
    /// `ConfigError::Access` if a check fails for any other reason.
    pub fn resolve(&self) -> Result<PathBuf, ConfigError> {
        let candidates = self.search_paths()?;
        locate(&candidates).cloned()
    }

    /// Resolve, read and decode the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - the executable location is needed and cannot be determined
    /// - an existence check fails for a reason other than "not found"
    /// - no candidate exists, or the chosen file cannot be read
    /// - the file is not valid YAML or does not match the schema
    /// - an environment override cannot be parsed
    pub fn load(self) -> Result<BootConfig, ConfigError> {
        let candidates = self.search_paths()?;
        let path = locate(&candidates)?;
        debug!(path = %path.display(), "loading configuration");

        let content = match fs::read(path) {
            Ok(content) => content,
            // Removed between the existence check and the read.
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(ConfigError::not_found(candidates.clone()));
            }
            Err(e) => return Err(ConfigError::read(path, e)),
        };

        let mut config = BootConfig::decode(&content, path)?;

        if let Some(prefix) = &self.env_prefix {
            apply_env_overrides(&mut config, prefix)?;
        }

        Ok(config)
    }
}

// `Ok(false)` only for "not found".
fn is_present(path: &Path) -> Result<bool, ConfigError> {
    match fs::metadata(path) {
        Ok(_) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(ConfigError::access(path, e)),
    }
}

// First candidate that exists.
fn locate(candidates: &[PathBuf]) -> Result<&PathBuf, ConfigError> {
    for path in candidates {
        if is_present(path)? {
            return Ok(path);
        }
        debug!(path = %path.display(), "config candidate absent");
    }

    Err(ConfigError::not_found(candidates.to_vec()))
}

fn apply_env_overrides(config: &mut BootConfig, prefix: &str) -> Result<(), ConfigError> {
    let env_vars: HashMap<String, String> = env::vars()
        .filter(|(k, _)| k.starts_with(prefix))
        .collect();

    for (key, value) in env_vars {
        apply_env_var(config, &key, &value, prefix)?;
    }

    Ok(())
}

fn apply_env_var(
    config: &mut BootConfig,
    key: &str,
    value: &str,
    prefix: &str,
) -> Result<(), ConfigError> {
    let Some(key_without_prefix) = key.strip_prefix(prefix).and_then(|k| k.strip_prefix("__"))
    else {
        // Shares the prefix but not the separator, e.g. `BOOTSTRAP_X`.
        return Ok(());
    };

    let parts: Vec<&str> = key_without_prefix.split("__").collect();

    match parts.as_slice() {
        ["SERVER", "PORT"] => config.server.port = parse_port(key, value)?,

        ["DATABASE", "TYPE"] => config.database.kind = value.to_string(),
        ["DATABASE", "HOST"] => config.database.host = value.to_string(),
        ["DATABASE", "PORT"] => config.database.port = parse_port(key, value)?,
        ["DATABASE", "USER"] => config.database.user = value.to_string(),
        ["DATABASE", "PASSWORD"] => config.database.password = value.to_string(),
        ["DATABASE", "DBNAME"] => config.database.dbname = value.to_string(),
        ["DATABASE", "SSLMODE"] => config.database.sslmode = value.to_string(),

        ["JWT", "SECRET"] => config.jwt.secret = value.to_string(),
        ["JWT", "EXPIRATION_MILLISECONDS"] => {
            config.jwt.expiration_milliseconds = value
                .parse()
                .map_err(|_| ConfigError::env_parse(key, "expected integer"))?;
        }

        ["RABBITMQ", "HOST"] => config.rabbitmq.host = value.to_string(),
        ["RABBITMQ", "PORT"] => config.rabbitmq.port = parse_port(key, value)?,
        ["RABBITMQ", "USERNAME"] => config.rabbitmq.username = value.to_string(),
        ["RABBITMQ", "PASSWORD"] => config.rabbitmq.password = value.to_string(),

        ["SQLITE", "TILE_DATA_PATH"] => config.sqlite.tile_data_path = value.to_string(),

        // Unknown key - ignore, like unknown YAML keys
        _ => {}
    }

    Ok(())
}

fn parse_port(key: &str, value: &str) -> Result<u16, ConfigError> {
    value
        .parse()
        .map_err(|_| ConfigError::env_parse(key, "expected port number (0-65535)"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_default_search_paths() {
        let paths = default_search_paths().unwrap();
        assert_eq!(paths.len(), 2);
        assert!(paths[0].ends_with(CONFIG_FILE_NAME));
        assert!(paths[0].is_absolute());
        assert_eq!(paths[1], PathBuf::from(CONFIG_FILE_NAME));
    }

    #[test]
    fn test_new_uses_default_search_paths() {
        let loader = ConfigLoader::new();
        assert_eq!(loader.search_paths().unwrap(), default_search_paths().unwrap());
    }

    #[test]
    fn test_with_file() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "app.yaml", "server:\n  port: 3000\n");

        let config = ConfigLoader::new().with_file(&path).load().unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_first_candidate_wins() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        let a = write(&first, CONFIG_FILE_NAME, "server:\n  port: 1\n");
        let b = write(&second, CONFIG_FILE_NAME, "server:\n  port: 2\n");

        let config = ConfigLoader::new().with_search_paths([a, b]).load().unwrap();
        assert_eq!(config.server.port, 1);
    }

    #[test]
    fn test_first_candidate_is_exclusive() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        let a = write(&first, CONFIG_FILE_NAME, "server:\n  port: 1\n");
        // Would fail to parse if it were ever read.
        let b = write(&second, CONFIG_FILE_NAME, "server: [unterminated");

        let config = ConfigLoader::new().with_search_paths([a, b]).load().unwrap();
        assert_eq!(config.server.port, 1);
    }

    #[test]
    fn test_fallback_to_later_candidate() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing").join(CONFIG_FILE_NAME);
        let present = write(&dir, CONFIG_FILE_NAME, "server:\n  port: 2\n");

        let loader = ConfigLoader::new().with_search_paths([missing, present.clone()]);
        assert_eq!(loader.resolve().unwrap(), present);
        assert_eq!(loader.load().unwrap().server.port, 2);
    }

    #[test]
    fn test_no_candidate_is_an_error() {
        let dir = TempDir::new().unwrap();
        let a = dir.path().join("a.yaml");
        let b = dir.path().join("b.yaml");

        let loader = ConfigLoader::new().with_search_paths([a.clone(), b.clone()]);
        assert!(matches!(loader.resolve(), Err(ConfigError::NotFound { .. })));

        match loader.load() {
            Err(ConfigError::NotFound { searched }) => assert_eq!(searched, vec![a, b]),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_search_list() {
        let result = ConfigLoader::new()
            .with_search_paths(Vec::<PathBuf>::new())
            .load();
        assert!(matches!(result, Err(ConfigError::NotFound { searched }) if searched.is_empty()));
    }

    #[test]
    fn test_unreadable_candidate_is_a_read_error() {
        let dir = TempDir::new().unwrap();
        // A directory exists but cannot be read as a file.
        let config_dir = dir.path().join(CONFIG_FILE_NAME);
        fs::create_dir(&config_dir).unwrap();
        let fallback = write(&dir, "fallback.yaml", "server:\n  port: 2\n");

        let result = ConfigLoader::new()
            .with_search_paths([config_dir, fallback])
            .load();
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn test_resolve_and_load_agree_on_chosen_path() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.yaml");
        let config_dir = dir.path().join(CONFIG_FILE_NAME);
        fs::create_dir(&config_dir).unwrap();

        let loader = ConfigLoader::new().with_search_paths([missing, config_dir.clone()]);
        assert_eq!(loader.resolve().unwrap(), config_dir);

        match loader.load() {
            Err(ConfigError::Read { path, .. }) => assert_eq!(path, config_dir),
            other => panic!("expected Read error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_error_names_file() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, CONFIG_FILE_NAME, "database: [");

        let err = ConfigLoader::new().with_file(&path).load().unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains(&path.display().to_string()));
    }

    #[test]
    fn test_rereads_on_every_load() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, CONFIG_FILE_NAME, "server:\n  port: 1\n");
        let loader = ConfigLoader::new().with_file(&path);

        assert_eq!(loader.clone().load().unwrap().server.port, 1);
        fs::write(&path, "server:\n  port: 2\n").unwrap();
        assert_eq!(loader.load().unwrap().server.port, 2);
    }

    // Note: overrides are exercised through apply_env_var directly; mutating
    // the process environment is not thread safe under the test harness.

    #[test]
    fn test_apply_env_var_server_port() {
        let mut config = BootConfig::default();
        apply_env_var(&mut config, "TEST__SERVER__PORT", "9000", "TEST").unwrap();
        assert_eq!(config.server.port, 9000);
    }

    #[test]
    fn test_apply_env_var_strings() {
        let mut config = BootConfig::default();
        apply_env_var(&mut config, "TEST__DATABASE__TYPE", "mysql", "TEST").unwrap();
        apply_env_var(&mut config, "TEST__RABBITMQ__USERNAME", "svc", "TEST").unwrap();
        apply_env_var(&mut config, "TEST__SQLITE__TILE_DATA_PATH", "/tiles", "TEST").unwrap();
        assert_eq!(config.database.kind, "mysql");
        assert_eq!(config.rabbitmq.username, "svc");
        assert_eq!(config.sqlite.tile_data_path, "/tiles");
    }

    #[test]
    fn test_apply_env_var_invalid_port() {
        let mut config = BootConfig::default();
        let result = apply_env_var(&mut config, "TEST__DATABASE__PORT", "70000", "TEST");
        assert!(matches!(result, Err(ConfigError::EnvParse { .. })));
    }

    #[test]
    fn test_apply_env_var_invalid_expiration() {
        let mut config = BootConfig::default();
        let result = apply_env_var(&mut config, "TEST__JWT__EXPIRATION_MILLISECONDS", "1h", "TEST");
        assert!(result.is_err());
    }

    #[test]
    fn test_apply_env_var_ignores_unknown_and_unseparated_keys() {
        let mut config = BootConfig::default();
        apply_env_var(&mut config, "TEST__REDIS__HOST", "cache", "TEST").unwrap();
        apply_env_var(&mut config, "TESTING_PORT", "1", "TEST").unwrap();
        assert_eq!(config, BootConfig::default());
    }
}
