//! Authentication request and response types

use crate::core::models::UserView;
use crate::utils::error::Result;
use crate::utils::validation::DataValidator;
use serde::{Deserialize, Serialize};

/// Registration request
///
/// Missing fields deserialize as empty strings so they are reported through
/// the registration result rather than as a malformed body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    /// Check field lengths before any lookup happens
    pub fn validate(&self) -> Result<()> {
        DataValidator::validate_username(&self.username)?;
        DataValidator::validate_password(&self.password)?;
        Ok(())
    }
}

/// Outcome of a registration or login attempt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserView>,
}

impl AuthResponse {
    /// Successful attempt carrying a token and the user view
    pub fn success<S: Into<String>>(message: S, token: String, user: UserView) -> Self {
        Self {
            success: true,
            message: message.into(),
            token: Some(token),
            user: Some(user),
        }
    }

    /// Failed attempt
    pub fn failure<S: Into<String>>(message: S) -> Self {
        Self {
            success: false,
            message: message.into(),
            token: None,
            user: None,
        }
    }
}
