//! # Employee Management
//!
//! HTTP service for managing employee records, with self-service
//! registration and JWT login.
//!
//! ## Features
//!
//! - **Authentication**: register and log in, receiving a signed bearer token
//! - **Employee records**: paged and filtered listing, lookup, create, update, delete
//! - **Storage**: SeaORM over SQLite or PostgreSQL, or an in-process store
//!
//! ## Running the service
//!
//! ```rust,no_run
//! use employee_management::{Config, Service};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config/app.yaml").await?;
//!     let service = Service::new(config).await?;
//!     service.run().await?;
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod auth;
pub mod config;
pub mod core;
pub mod server;
pub mod services;
pub mod storage;
pub mod utils;

pub use config::Config;
pub use utils::error::{Result, ServiceError};

pub use core::models::{Employee, EmployeeFilter, Page, User, UserRole};

use tracing::info;

/// The employee service, ready to serve
pub struct Service {
    config: Config,
    server: server::HttpServer,
}

impl Service {
    /// Connect storage and assemble the HTTP server
    pub async fn new(config: Config) -> Result<Self> {
        info!("Creating employee service instance");

        let server = server::HttpServer::new(&config).await?;

        Ok(Self { config, server })
    }

    /// Run until shutdown
    pub async fn run(self) -> Result<()> {
        info!("Starting employee service");
        info!("Configuration: {:#?}", self.config);

        self.server.start().await?;

        Ok(())
    }
}

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Service build information
#[derive(Debug, Clone)]
pub struct BuildInfo {
    /// Version number
    pub version: &'static str,
    /// Build timestamp in seconds since the epoch
    pub build_time: &'static str,
    /// Git commit hash
    pub git_hash: &'static str,
    /// Rust version
    pub rust_version: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            build_time: option_env!("BUILD_TIME").unwrap_or("unknown"),
            git_hash: option_env!("GIT_HASH").unwrap_or("unknown"),
            rust_version: option_env!("RUST_VERSION").unwrap_or("unknown"),
        }
    }
}

/// Build
pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}
