//! User account model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored user account
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Store-assigned identifier
    pub id: i32,
    /// Unique login name
    pub username: String,
    /// Unique email address
    pub email: String,
    /// Opaque password digest
    pub password_hash: String,
    /// Free-text role tag
    pub role: String,
    /// Whether the account may log in
    pub is_active: bool,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Check if user is active
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Public view of this user
    pub fn to_view(&self) -> UserView {
        UserView {
            id: self.id,
            username: self.username.clone(),
            email: self.email.clone(),
            role: self.role.clone(),
        }
    }
}

/// Fields needed to persist a new user; the store assigns id and timestamps
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
}

/// User data safe to return to clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserView {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub role: String,
}

/// Known user roles.
///
/// Stored roles stay free text; this enum names the values the service
/// itself assigns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UserRole {
    /// Administrator
    Admin,
    /// Regular employee account
    #[default]
    Employee,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "Admin",
            UserRole::Employee => "Employee",
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Admin" => Ok(UserRole::Admin),
            "Employee" => Ok(UserRole::Employee),
            _ => Err(format!("Invalid user role: {}", s)),
        }
    }
}
