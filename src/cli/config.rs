//! Service configuration
//!
//! Precedence: built-in defaults, then the optional JSON file, then CLI flags.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::http_server::HttpServerConfig;
use crate::observability::LogFormat;
use crate::rest_api::OmittedFields;

use super::errors::{CliError, CliResult};

/// How new `SID` values are produced
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    /// Random v4 UUIDs
    #[default]
    Uuid,
    /// Increasing integers, starting at 1
    Sequential,
}

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Listener settings
    #[serde(flatten)]
    pub server: HttpServerConfig,

    /// Seed record file (default: ./programmers.json)
    #[serde(default = "default_seed_path")]
    pub seed_path: PathBuf,

    /// Update behaviour for attributes missing from the body (default: preserve)
    #[serde(default)]
    pub omitted_fields: OmittedFields,

    /// Identifier strategy for created records (default: uuid)
    #[serde(default)]
    pub id_strategy: IdStrategy,

    /// Log line format (default: pretty)
    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_seed_path() -> PathBuf {
    PathBuf::from("./programmers.json")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: HttpServerConfig::default(),
            seed_path: default_seed_path(),
            omitted_fields: OmittedFields::default(),
            id_strategy: IdStrategy::default(),
            log_format: LogFormat::default(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            CliError::config_error(format!("Failed to read config {}: {}", path.display(), e))
        })?;

        Self::parse(&content)
    }

    /// Parse configuration JSON
    pub fn parse(content: &str) -> CliResult<Self> {
        let config: Config = serde_json::from_str(content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Defaults, or the file at `path` when given
    pub fn load_or_default(path: Option<&Path>) -> CliResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Apply command line overrides
    pub fn with_overrides(mut self, seed: Option<PathBuf>, port: Option<u16>) -> Self {
        if let Some(seed) = seed {
            self.seed_path = seed;
        }
        if let Some(port) = port {
            self.server.port = port;
        }
        self
    }

    fn validate(&self) -> CliResult<()> {
        self.server.validate().map_err(CliError::config_error)?;

        if self.seed_path.as_os_str().is_empty() {
            return Err(CliError::config_error("seed_path must not be empty"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.seed_path, PathBuf::from("./programmers.json"));
        assert_eq!(config.omitted_fields, OmittedFields::Preserve);
        assert_eq!(config.id_strategy, IdStrategy::Uuid);
    }

    #[test]
    fn test_parse_flattened_server_fields() {
        let config = Config::parse(
            r#"{"port": 8081, "host": "127.0.0.1", "omitted_fields": "clear", "id_strategy": "sequential"}"#,
        )
        .unwrap();

        assert_eq!(config.server.bind_target(), "127.0.0.1:8081");
        assert_eq!(config.omitted_fields, OmittedFields::Clear);
        assert_eq!(config.id_strategy, IdStrategy::Sequential);
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn test_parse_rejects_unknown_policy() {
        let err = Config::parse(r#"{"omitted_fields": "blank"}"#).unwrap_err();
        assert_eq!(err.code_str(), "CLI_CONFIG_ERROR");
    }

    #[test]
    fn test_parse_rejects_empty_host() {
        assert!(Config::parse(r#"{"host": " "}"#).is_err());
    }

    #[test]
    fn test_parse_accepts_host_name() {
        let config = Config::parse(r#"{"host": "localhost", "cors_origins": ["http://a.test"]}"#).unwrap();
        assert_eq!(config.server.bind_target(), "localhost:3000");
    }

    #[test]
    fn test_parse_rejects_bad_origin() {
        let err = Config::parse(r#"{"cors_origins": ["bad\norigin"]}"#).unwrap_err();
        assert_eq!(err.code_str(), "CLI_CONFIG_ERROR");
    }

    #[test]
    fn test_overrides_win() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.json");
        fs::write(&path, r#"{"port": 9000, "seed_path": "from-file.json"}"#).unwrap();

        let config = Config::load_or_default(Some(&path))
            .unwrap()
            .with_overrides(Some(PathBuf::from("from-cli.json")), None);

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.seed_path, PathBuf::from("from-cli.json"));
    }

    #[test]
    fn test_missing_config_file() {
        let tmp = TempDir::new().unwrap();
        assert!(Config::load(&tmp.path().join("absent.json")).is_err());
    }
}
