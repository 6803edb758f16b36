//! Authentication configuration

use super::*;
use rand::distributions::Alphanumeric;
use rand::{Rng, thread_rng};
use serde::{Deserialize, Serialize};

/// Shortest accepted token lifetime
const MIN_JWT_EXPIRATION: u64 = 300;
/// Longest accepted token lifetime
const MAX_JWT_EXPIRATION: u64 = 86400 * 30;

/// Authentication configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// HMAC signing key for issued tokens
    #[serde(default = "generate_secure_jwt_secret")]
    pub jwt_secret: String,
    /// `iss` claim
    #[serde(default = "default_jwt_issuer")]
    pub jwt_issuer: String,
    /// `aud` claim
    #[serde(default = "default_jwt_audience")]
    pub jwt_audience: String,
    /// JWT expiration in seconds
    #[serde(default = "default_jwt_expiration")]
    pub jwt_expiration: u64,
    /// Require a bearer token on the employee routes
    #[serde(default)]
    pub protect_employee_routes: bool,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: generate_secure_jwt_secret(),
            jwt_issuer: default_jwt_issuer(),
            jwt_audience: default_jwt_audience(),
            jwt_expiration: default_jwt_expiration(),
            protect_employee_routes: false,
        }
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"[REDACTED]")
            .field("jwt_issuer", &self.jwt_issuer)
            .field("jwt_audience", &self.jwt_audience)
            .field("jwt_expiration", &self.jwt_expiration)
            .field("protect_employee_routes", &self.protect_employee_routes)
            .finish()
    }
}

impl AuthConfig {
    /// Validate authentication configuration
    pub fn validate(&self) -> Result<(), String> {
        // Validate JWT secret strength
        if self.jwt_secret.len() < 32 {
            return Err("JWT secret must be at least 32 characters long for security".to_string());
        }

        if self.jwt_secret == "your-secret-key" || self.jwt_secret == "change-me" {
            return Err("JWT secret must not use default values. Please generate a secure random secret.".to_string());
        }

        if self.jwt_secret.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(
                "JWT secret should contain mixed case letters, numbers, and special characters"
                    .to_string(),
            );
        }

        if self.jwt_issuer.is_empty() {
            return Err("JWT issuer cannot be empty".to_string());
        }

        if self.jwt_audience.is_empty() {
            return Err("JWT audience cannot be empty".to_string());
        }

        // Validate JWT expiration
        if self.jwt_expiration < MIN_JWT_EXPIRATION {
            return Err("JWT expiration should be at least 5 minutes (300 seconds)".to_string());
        }

        if self.jwt_expiration > MAX_JWT_EXPIRATION {
            return Err(
                "JWT expiration should not exceed 30 days for security reasons".to_string(),
            );
        }

        Ok(())
    }
}

/// Generate a secure random JWT secret
fn generate_secure_jwt_secret() -> String {
    thread_rng()
        .sample_iter(&Alphanumeric)
        .take(64)
        .map(char::from)
        .collect()
}
