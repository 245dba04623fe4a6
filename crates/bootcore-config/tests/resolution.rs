//! Integration tests for config file resolution.
//!
//! The executable-directory and working-directory candidates are simulated
//! with two temporary directories passed through `with_search_paths`.

use bootcore_config::{ConfigError, ConfigLoader};
use bootcore_test::ConfigDir;

const EXE_CONFIG: &str = r"
server:
  port: 8080
rabbitmq:
  host: exe-dir-broker
";

const CWD_CONFIG: &str = r"
server:
  port: 9090
rabbitmq:
  host: cwd-broker
";

fn loader(exe_dir: &ConfigDir, cwd: &ConfigDir) -> ConfigLoader {
    ConfigLoader::new().with_search_paths([exe_dir.config_path(), cwd.config_path()])
}

/// The executable-directory file shadows the working-directory file.
#[test]
fn test_executable_dir_takes_precedence() {
    let exe_dir = ConfigDir::with_config(EXE_CONFIG).unwrap();
    let cwd = ConfigDir::with_config(CWD_CONFIG).unwrap();

    let config = loader(&exe_dir, &cwd).load().unwrap();

    assert_eq!(config.server.port, 8080);
    assert_eq!(config.rabbitmq.host, "exe-dir-broker");
}

/// Without an executable-directory file the working directory is used.
#[test]
fn test_falls_back_to_working_dir() {
    let exe_dir = ConfigDir::new().unwrap();
    let cwd = ConfigDir::with_config(CWD_CONFIG).unwrap();

    let loader = loader(&exe_dir, &cwd);
    assert_eq!(loader.resolve().unwrap(), cwd.config_path());

    let config = loader.load().unwrap();
    assert_eq!(config.server.port, 9090);
    assert_eq!(config.rabbitmq.host, "cwd-broker");
}

/// Missing everywhere is an error, never a zero-valued config.
#[test]
fn test_missing_everywhere_fails() {
    let exe_dir = ConfigDir::new().unwrap();
    let cwd = ConfigDir::new().unwrap();

    let err = loader(&exe_dir, &cwd).load().unwrap_err();

    match err {
        ConfigError::NotFound { searched } => {
            assert_eq!(searched, vec![exe_dir.config_path(), cwd.config_path()]);
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
}

/// A broken working-directory file is never read when the first
/// candidate exists.
#[test]
fn test_shadowed_file_is_never_parsed() {
    let exe_dir = ConfigDir::with_config(EXE_CONFIG).unwrap();
    let cwd = ConfigDir::with_config("{{ not yaml").unwrap();

    assert!(loader(&exe_dir, &cwd).load().is_ok());
}

/// A broken first candidate does not fall through to the second.
#[test]
fn test_invalid_yaml_does_not_fall_through() {
    let exe_dir = ConfigDir::with_config("server: [").unwrap();
    let cwd = ConfigDir::with_config(CWD_CONFIG).unwrap();

    let err = loader(&exe_dir, &cwd).load().unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}

/// Repeated loads pick up changes on disk.
#[test]
fn test_load_is_not_cached() {
    let exe_dir = ConfigDir::new().unwrap();
    let cwd = ConfigDir::with_config(CWD_CONFIG).unwrap();

    assert_eq!(loader(&exe_dir, &cwd).load().unwrap().server.port, 9090);

    exe_dir.write_config(EXE_CONFIG).unwrap();
    assert_eq!(loader(&exe_dir, &cwd).load().unwrap().server.port, 8080);

    exe_dir.remove_config().unwrap();
    assert_eq!(loader(&exe_dir, &cwd).load().unwrap().server.port, 9090);
}

/// Partial documents leave the rest of the config zeroed.
#[test]
fn test_partial_document() {
    let dir = ConfigDir::with_config("sqlite:\n  tile_data_path: ./tiles\n").unwrap();

    let config = ConfigLoader::new().with_file(dir.config_path()).load().unwrap();

    assert_eq!(config.sqlite.tile_data_path, "./tiles");
    assert_eq!(config.server.port, 0);
    assert!(config.database.kind.is_empty());
    assert_eq!(config.jwt.expiration_milliseconds, 0);
}
