//! Environment overrides
//!
//! Values set in the environment take precedence over the YAML file.

use super::models::*;
use crate::utils::error::{Result, ServiceError};
use std::env;
use std::str::FromStr;
use tracing::debug;

impl AppConfig {
    /// Apply overrides from the process environment
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides(|key| env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Server configuration
        if let Some(host) = lookup("APP_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("APP_PORT") {
            self.server.port = parse_var("APP_PORT", &port)?;
        }

        // Database configuration
        if let Some(url) = lookup("DATABASE_URL") {
            self.storage.database.url = url;
        }

        // Auth configuration
        if let Some(secret) = lookup("JWT_SECRET") {
            self.auth.jwt_secret = secret;
        }
        if let Some(issuer) = lookup("JWT_ISSUER") {
            self.auth.jwt_issuer = issuer;
        }
        if let Some(audience) = lookup("JWT_AUDIENCE") {
            self.auth.jwt_audience = audience;
        }
        if let Some(expiration) = lookup("JWT_EXPIRATION") {
            self.auth.jwt_expiration = parse_var("JWT_EXPIRATION", &expiration)?;
        }

        debug!("Environment overrides applied");
        Ok(())
    }
}

fn parse_var<T>(name: &str, value: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .parse()
        .map_err(|e| ServiceError::Config(format!("Invalid {}: {}", name, e)))
}
