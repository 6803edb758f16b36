//! Configuration management for the employee service
//!
//! This module handles loading, validation, and management of all service configuration.

mod loader;
pub mod models;

pub use models::*;

use crate::utils::error::{Result, ServiceError};
use std::path::Path;
use tracing::{debug, info, warn};

/// Main configuration struct for the service
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Application configuration
    pub app: AppConfig,
}

impl Config {
    /// Load configuration from file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let app = Self::read_file(path.as_ref()).await?;

        let config = Self { app };
        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from environment variables on top of defaults
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let mut app = AppConfig::default();
        app.apply_env_overrides()?;

        let config = Self { app };
        config.validate()?;
        Ok(config)
    }

    /// Load the file if it exists, then apply environment overrides.
    ///
    /// A missing file is not an error; defaults are used instead.
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let mut app = if tokio::fs::try_exists(path).await.unwrap_or(false) {
            Self::read_file(path).await?
        } else {
            warn!(
                "Configuration file {:?} not found, using defaults",
                path
            );
            AppConfig::default()
        };

        app.apply_env_overrides()?;

        let config = Self { app };
        config.validate()?;
        Ok(config)
    }

    async fn read_file(path: &Path) -> Result<AppConfig> {
        info!("Loading configuration from: {:?}", path);
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ServiceError::Config(format!("Failed to read config file: {}", e)))?;
        serde_yaml::from_str(&content)
            .map_err(|e| ServiceError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Get server configuration
    pub fn server(&self) -> &ServerConfig {
        &self.app.server
    }

    /// Get storage configuration
    pub fn storage(&self) -> &StorageConfig {
        &self.app.storage
    }

    /// Get auth configuration
    pub fn auth(&self) -> &AuthConfig {
        &self.app.auth
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");
        self.app.validate().map_err(ServiceError::Config)
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(&self.app)
            .map_err(|e| ServiceError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_config_from_file() {
        let config_content = r#"
server:
  host: "127.0.0.1"
  port: 8080
  workers: 4

storage:
  backend: memory
  seed: false

auth:
  jwt_secret: "test-secret-that-is-at-least-32-characters-long-for-security"
  jwt_expiration: 3600
  protect_employee_routes: true
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(config_content.as_bytes()).unwrap();

        let config = Config::from_file(temp_file.path()).await.unwrap();

        assert_eq!(config.server().host, "127.0.0.1");
        assert_eq!(config.server().port, 8080);
        assert_eq!(config.server().workers, Some(4));
        assert_eq!(config.storage().backend, StorageBackend::Memory);
        assert!(!config.storage().seed);
        assert_eq!(config.auth().jwt_expiration, 3600);
        assert_eq!(config.auth().jwt_issuer, "EmployeeManagementApp");
        assert!(config.auth().protect_employee_routes);
    }

    #[tokio::test]
    async fn test_invalid_file_config_is_rejected() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"auth:\n  jwt_secret: \"too-short\"\n")
            .unwrap();

        let err = Config::from_file(temp_file.path()).await.unwrap_err();
        assert!(matches!(err, ServiceError::Config(_)));
    }

    #[tokio::test]
    async fn test_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(dir.path().join("absent.yaml")).await.unwrap();
        assert_eq!(config.storage().backend, StorageBackend::Database);
        assert!(config.storage().seed);
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.server().address(), "0.0.0.0:8000");
        assert_eq!(
            config.storage().database.url,
            "sqlite://data/employees.db?mode=rwc"
        );
    }

    #[test]
    fn test_overrides_take_precedence() {
        let vars: HashMap<&str, &str> = [
            ("APP_PORT", "9001"),
            ("DATABASE_URL", "sqlite::memory:"),
            ("JWT_ISSUER", "issuer-from-env"),
            ("JWT_EXPIRATION", "600"),
        ]
        .into_iter()
        .collect();

        let mut app = AppConfig::default();
        app.apply_overrides(|key| vars.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(app.server.port, 9001);
        assert_eq!(app.server.host, "0.0.0.0");
        assert_eq!(app.storage.database.url, "sqlite::memory:");
        assert_eq!(app.auth.jwt_issuer, "issuer-from-env");
        assert_eq!(app.auth.jwt_expiration, 600);
    }

    #[test]
    fn test_unparsable_override_is_config_error() {
        let mut app = AppConfig::default();
        let err = app
            .apply_overrides(|key| (key == "APP_PORT").then(|| "not-a-port".to_string()))
            .unwrap_err();
        assert!(err.to_string().contains("Invalid APP_PORT"));
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let yaml = config.to_yaml().unwrap();
        assert!(yaml.contains("backend: database"));
        assert!(yaml.contains("protect_employee_routes: false"));
    }
}
