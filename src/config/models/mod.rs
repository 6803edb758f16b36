//! Configuration data models
//!
//! This module defines all configuration structures used by the service.

#![allow(missing_docs)]

pub mod app;
pub mod auth;
pub mod server;
pub mod storage;

// Re-export all configuration types
pub use app::*;
pub use auth::*;
pub use server::*;
pub use storage::*;

/// Default values for configuration
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    8000
}

pub fn default_database_url() -> String {
    "sqlite://data/employees.db?mode=rwc".to_string()
}

pub fn default_max_connections() -> u32 {
    10
}

pub fn default_connection_timeout() -> u64 {
    5
}

pub fn default_jwt_issuer() -> String {
    "EmployeeManagementApp".to_string()
}

pub fn default_jwt_audience() -> String {
    "EmployeeManagementUsers".to_string()
}

pub fn default_jwt_expiration() -> u64 {
    86400 // 24 hours
}

pub(crate) fn default_true() -> bool {
    true
}
