//! Registration and login

use super::jwt::JwtHandler;
use super::password::{hash_password, verify_password};
use super::types::{AuthResponse, LoginRequest, RegisterRequest};
use crate::config::AuthConfig;
use crate::core::models::{NewUser, UserRole};
use crate::storage::UserRepository;
use crate::utils::error::Result;
use std::sync::Arc;
use tracing::{error, info, warn};

const INVALID_CREDENTIALS: &str = "Invalid username or password";
const USER_EXISTS: &str = "User already exists";

/// Main authentication system
#[derive(Clone)]
pub struct AuthSystem {
    /// Authentication configuration
    config: Arc<AuthConfig>,
    /// Credential store
    users: Arc<dyn UserRepository>,
    /// JWT handler
    jwt: Arc<JwtHandler>,
}

impl AuthSystem {
    /// Create a new authentication system
    pub fn new(config: &AuthConfig, users: Arc<dyn UserRepository>) -> Result<Self> {
        info!("Initializing authentication system");

        let jwt = Arc::new(JwtHandler::new(config)?);

        Ok(Self {
            config: Arc::new(config.clone()),
            users,
            jwt,
        })
    }

    /// Register a new account.
    ///
    /// Never fails: every problem, including store faults, is reported in
    /// the returned response.
    pub async fn register(&self, request: RegisterRequest) -> AuthResponse {
        match self.try_register(request).await {
            Ok(response) => response,
            Err(e) if e.is_conflict() => AuthResponse::failure(USER_EXISTS),
            Err(e) => {
                error!("Registration failed: {}", e);
                AuthResponse::failure(format!("Error: {}", e))
            }
        }
    }

    async fn try_register(&self, request: RegisterRequest) -> Result<AuthResponse> {
        if request.username.trim().is_empty()
            || request.email.trim().is_empty()
            || request.password.trim().is_empty()
        {
            return Ok(AuthResponse::failure("All fields are required"));
        }

        if request.password != request.confirm_password {
            return Ok(AuthResponse::failure("Passwords do not match"));
        }

        if self
            .users
            .user_exists(&request.username, &request.email)
            .await?
        {
            warn!("Registration rejected for existing user: {}", request.username);
            return Ok(AuthResponse::failure(USER_EXISTS));
        }

        let user = self
            .users
            .create_user(NewUser {
                username: request.username,
                email: request.email,
                password_hash: hash_password(&request.password),
                role: UserRole::Employee.to_string(),
            })
            .await?;

        let token = self.jwt.issue_token(user.id, &user.username, &user.role)?;

        info!("User registered: {}", user.username);
        Ok(AuthResponse::success(
            "Registration successful",
            token,
            user.to_view(),
        ))
    }

    /// Log in with a username and password.
    ///
    /// Unknown users and wrong passwords get the same message.
    pub async fn login(&self, request: LoginRequest) -> AuthResponse {
        match self.try_login(request).await {
            Ok(response) => response,
            Err(e) => {
                error!("Login failed: {}", e);
                AuthResponse::failure(format!("Error: {}", e))
            }
        }
    }

    async fn try_login(&self, request: LoginRequest) -> Result<AuthResponse> {
        let user = match self.users.find_user_by_username(&request.username).await? {
            Some(user) if verify_password(&request.password, &user.password_hash) => user,
            _ => {
                warn!("Rejected login for: {}", request.username);
                return Ok(AuthResponse::failure(INVALID_CREDENTIALS));
            }
        };

        if !user.is_active() {
            warn!("Rejected login for inactive user: {}", user.username);
            return Ok(AuthResponse::failure("User is inactive"));
        }

        let token = self.jwt.issue_token(user.id, &user.username, &user.role)?;

        info!("User logged in: {}", user.username);
        Ok(AuthResponse::success("Login successful", token, user.to_view()))
    }

    /// Get authentication configuration
    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Get JWT handler
    pub fn jwt(&self) -> &JwtHandler {
        &self.jwt
    }
}
