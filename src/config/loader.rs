// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::{
    DEFAULT_CONNECT_TIMEOUT_SECONDS, DEFAULT_ENDPOINT, DEFAULT_LIBRARY_DIR,
    DEFAULT_TIMEOUT_SECONDS,
};
use crate::errors::{FinderError, FinderResult};
use crate::model::RequestOptions;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration structure for a name-finding client.
///
/// Selects the engine backend, tells the backend where to find the engine,
/// and carries the request options used when a caller does not supply any.
/// It is typically loaded from a YAML configuration file.
///
/// # Fields
/// * `backend` - Which gateway to build
/// * `library_dir` - Root of the per-platform library directories (local)
/// * `library_path` - Explicit library file, skips platform discovery (local)
/// * `endpoint` - Service address (grpc)
/// * `gateway` - Deadlines applied to every call
/// * `defaults` - Default request options
///
/// # Example
/// ```yaml
/// backend: grpc
/// endpoint: http://localhost:8778
/// gateway:
///   timeout_seconds: 30
///   connect_timeout_seconds: 5
/// defaults:
///   language: eng
///   with_verification: true
///   sources: [1, 4]
/// ```
#[derive(Debug, Deserialize)]
pub struct Config {
    pub backend: BackendType,
    #[serde(default)]
    pub library_dir: Option<String>,
    #[serde(default)]
    pub library_path: Option<String>,
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default)]
    pub gateway: GatewayOptions,
    #[serde(default)]
    pub defaults: RequestOptions,
}

impl Config {
    /// Root directory searched for the platform library.
    pub fn library_dir(&self) -> PathBuf {
        PathBuf::from(
            self.library_dir
                .as_deref()
                .unwrap_or(DEFAULT_LIBRARY_DIR),
        )
    }

    /// Remote engine address, falling back to the default port on localhost.
    pub fn endpoint(&self) -> &str {
        self.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT)
    }
}

/// Engine access path.
///
/// # Variants
/// * `Local` - Engine loaded in-process from a native shared library
/// * `Grpc` - Engine reached over gRPC
#[derive(Debug, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum BackendType {
    Local,
    Grpc,
}

/// Deadlines for engine calls.
///
/// # Fields
/// * `timeout_seconds` - Per-call deadline (optional, defaults to 30)
/// * `connect_timeout_seconds` - Remote connection deadline (optional, defaults to 5)
#[derive(Debug, Default, Deserialize, Clone)]
pub struct GatewayOptions {
    pub timeout_seconds: Option<u64>,
    pub connect_timeout_seconds: Option<u64>,
}

impl GatewayOptions {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS))
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(
            self.connect_timeout_seconds
                .unwrap_or(DEFAULT_CONNECT_TIMEOUT_SECONDS),
        )
    }
}

/// Load a config from a YAML file
pub fn load_config<P: AsRef<Path>>(path: P) -> FinderResult<Config> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        FinderError::InvalidConfig(format!("cannot read '{}': {}", path.display(), e))
    })?;
    let cfg: Config = serde_yaml::from_str(&content).map_err(|e| {
        FinderError::InvalidConfig(format!("cannot parse '{}': {}", path.display(), e))
    })?;
    Ok(cfg)
}

/// Load and validate a config from a YAML file
pub fn load_and_validate_config<P: AsRef<Path>>(path: P) -> FinderResult<Config> {
    let cfg = load_config(path)?;
    validate_config(&cfg)?;
    Ok(cfg)
}

/// Checks values serde cannot check on its own.
pub fn validate_config(cfg: &Config) -> FinderResult<()> {
    let mut problems = Vec::new();

    if cfg.backend == BackendType::Grpc {
        let endpoint = cfg.endpoint();
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            problems.push(format!(
                "endpoint '{}' must start with http:// or https://",
                endpoint
            ));
        }
    }
    if cfg.gateway.timeout_seconds == Some(0) {
        problems.push("gateway.timeout_seconds must be greater than zero".to_string());
    }
    if cfg.gateway.connect_timeout_seconds == Some(0) {
        problems.push("gateway.connect_timeout_seconds must be greater than zero".to_string());
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err(FinderError::InvalidConfig(problems.join("; ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(yaml: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();
        file
    }

    #[test]
    fn parse_grpc_config() {
        let yaml = r#"
backend: grpc
endpoint: http://finder.example.org:8778
gateway:
  timeout_seconds: 10
defaults:
  language: eng
  with_verification: true
  sources: [1, 4]
"#;
        let cfg: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cfg.backend, BackendType::Grpc);
        assert_eq!(cfg.endpoint(), "http://finder.example.org:8778");
        assert_eq!(cfg.gateway.timeout(), Duration::from_secs(10));
        assert_eq!(
            cfg.gateway.connect_timeout(),
            Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECONDS)
        );
        assert_eq!(cfg.defaults.language.as_deref(), Some("eng"));
        assert_eq!(cfg.defaults.sources, vec![1, 4]);
    }

    #[test]
    fn parse_minimal_local_config() {
        let cfg: Config = serde_yaml::from_str("backend: local").unwrap();
        assert_eq!(cfg.backend, BackendType::Local);
        assert_eq!(cfg.library_dir(), PathBuf::from(DEFAULT_LIBRARY_DIR));
        assert!(cfg.library_path.is_none());
        assert_eq!(cfg.defaults, RequestOptions::default());
        assert_eq!(cfg.endpoint(), DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_unknown_backend_is_rejected() {
        let file = write_config("backend: carrier_pigeon\n");
        let err = load_config(file.path()).unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_load_and_validate_valid_config() {
        let file = write_config("backend: grpc\nendpoint: https://localhost:8778\n");
        let cfg = load_and_validate_config(file.path()).unwrap();
        assert_eq!(cfg.endpoint(), "https://localhost:8778");
    }

    #[test]
    fn test_load_and_validate_bad_endpoint_and_timeout() {
        let file = write_config(
            "backend: grpc\nendpoint: localhost:8778\ngateway:\n  timeout_seconds: 0\n",
        );
        let err = load_and_validate_config(file.path()).unwrap_err();
        match err {
            FinderError::InvalidConfig(msg) => {
                assert!(msg.contains("http://"));
                assert!(msg.contains("timeout_seconds"));
            }
            other => panic!("Expected InvalidConfig, got {other:?}"),
        }
    }

    #[test]
    fn test_local_backend_ignores_endpoint_format() {
        let file = write_config("backend: local\nendpoint: not-a-url\n");
        assert!(load_and_validate_config(file.path()).is_ok());
    }

    #[test]
    fn test_nonexistent_file() {
        let err = load_config("/nonexistent/gnfinder.yaml").unwrap_err();
        assert!(matches!(err, FinderError::InvalidConfig(ref msg) if msg.contains("cannot read")));
    }
}
