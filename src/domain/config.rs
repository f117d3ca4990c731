//! # Configuration
//!
//! Manages the loading and parsing of the application's configuration file (`config.yaml`).
//! Secrets may be given inline but are normally read from environment variables;
//! a missing secret is a startup error rather than an empty credential.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("no {secret} configured: set `{env_var}` or provide it inline in config.yaml")]
    MissingSecret { secret: String, env_var: String },
}

/// Main application configuration structure.
/// Matches the layout of `data/config.yaml`.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub services: ServicesConfig,
    #[serde(default)]
    pub bot: BotConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }
}

/// Configuration for the connected services.
#[derive(Debug, Deserialize, Clone)]
pub struct ServicesConfig {
    pub matrix: MatrixConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Specific configuration for the Matrix service.
#[derive(Debug, Deserialize, Clone)]
pub struct MatrixConfig {
    pub homeserver: String,
    pub username: String,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default = "default_password_env")]
    pub password_env: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

impl MatrixConfig {
    pub fn password(&self) -> Result<String, ConfigError> {
        resolve_secret(self.password.as_deref(), &self.password_env, "Matrix password")
    }
}

/// Movie catalog (TMDB) settings.
#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    #[serde(default = "default_catalog_url")]
    pub base_url: String,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    #[serde(default = "default_min_vote_count")]
    pub min_vote_count: u32,
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: default_catalog_url(),
            language: default_language(),
            api_key: None,
            api_key_env: default_api_key_env(),
            min_vote_count: default_min_vote_count(),
            timeout_secs: default_timeout(),
        }
    }
}

impl CatalogConfig {
    pub fn api_key(&self) -> Result<String, ConfigError> {
        resolve_secret(self.api_key.as_deref(), &self.api_key_env, "catalog API key")
    }
}

/// Bot behaviour settings.
#[derive(Debug, Default, Deserialize, Clone)]
pub struct BotConfig {
    /// Rooms that receive the greeting once the bot is online.
    #[serde(default)]
    pub announce_rooms: Vec<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_dir")]
    pub dir: String,
    #[serde(default = "default_log_file")]
    pub file: String,
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            dir: default_log_dir(),
            file: default_log_file(),
            filter: default_log_filter(),
        }
    }
}

fn resolve_secret(inline: Option<&str>, env_var: &str, secret: &str) -> Result<String, ConfigError> {
    let value = match inline {
        Some(value) => Some(value.to_string()),
        None => std::env::var(env_var).ok(),
    };

    match value {
        Some(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
        _ => Err(ConfigError::MissingSecret {
            secret: secret.to_string(),
            env_var: env_var.to_string(),
        }),
    }
}

fn default_password_env() -> String {
    "MATRIX_PASSWORD".to_string()
}
fn default_catalog_url() -> String {
    "https://api.themoviedb.org/3".to_string()
}
fn default_language() -> String {
    "en-US".to_string()
}
fn default_api_key_env() -> String {
    "TMDB_TOKEN".to_string()
}
fn default_min_vote_count() -> u32 {
    1000
}
fn default_timeout() -> u64 {
    30
}
fn default_log_dir() -> String {
    "data".to_string()
}
fn default_log_file() -> String {
    "session.log".to_string()
}
fn default_log_filter() -> String {
    "info,matrix_sdk=warn,matrix_sdk_base=warn,matrix_sdk_crypto=error,ruma=warn,hyper=warn".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
services:
  matrix:
    homeserver: "https://matrix.example.org"
    username: "cinebot"
"#;

    #[test]
    fn test_defaults_applied() {
        let config = AppConfig::parse(MINIMAL).unwrap();
        let catalog = &config.services.catalog;
        assert_eq!(catalog.base_url, "https://api.themoviedb.org/3");
        assert_eq!(catalog.language, "en-US");
        assert_eq!(catalog.api_key_env, "TMDB_TOKEN");
        assert_eq!(catalog.min_vote_count, 1000);
        assert_eq!(config.services.matrix.password_env, "MATRIX_PASSWORD");
        assert!(config.bot.announce_rooms.is_empty());
        assert_eq!(config.logging.file, "session.log");
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(
            &path,
            r#"
services:
  matrix:
    homeserver: "https://matrix.example.org"
    username: "cinebot"
    password: "hunter2"
  catalog:
    api_key: "abc123"
    language: "de-DE"
bot:
  announce_rooms: ["!movies:example.org"]
"#,
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.services.matrix.password().unwrap(), "hunter2");
        assert_eq!(config.services.catalog.api_key().unwrap(), "abc123");
        assert_eq!(config.services.catalog.language, "de-DE");
        assert_eq!(config.bot.announce_rooms, vec!["!movies:example.org".to_string()]);
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = AppConfig::load(&dir.path().join("absent.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_missing_secret_fails_fast() {
        let mut config = AppConfig::parse(MINIMAL).unwrap();
        config.services.catalog.api_key_env = "CINEBOT_TEST_UNSET_CATALOG_KEY".to_string();

        let err = config.services.catalog.api_key().unwrap_err();
        match err {
            ConfigError::MissingSecret { env_var, .. } => {
                assert_eq!(env_var, "CINEBOT_TEST_UNSET_CATALOG_KEY")
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_blank_inline_secret_is_rejected() {
        let mut config = AppConfig::parse(MINIMAL).unwrap();
        config.services.matrix.password = Some("   ".to_string());
        assert!(config.services.matrix.password().is_err());
    }
}
