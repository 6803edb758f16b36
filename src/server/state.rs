//! Application state shared across HTTP handlers

use crate::auth::AuthSystem;
use crate::config::Config;
use crate::services::EmployeeService;
use crate::storage::StorageLayer;
use crate::utils::error::Result;
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// All fields are wrapped in Arc for sharing across worker threads.
#[derive(Clone)]
pub struct AppState {
    /// Service configuration (shared read-only)
    pub config: Arc<Config>,
    /// Registration and login
    pub auth: Arc<AuthSystem>,
    /// Employee queries and writes
    pub employees: Arc<EmployeeService>,
    /// Storage layer
    pub storage: Arc<StorageLayer>,
}

impl AppState {
    /// Wire the services onto an initialized storage layer
    pub fn new(config: Config, storage: StorageLayer) -> Result<Self> {
        let auth = AuthSystem::new(config.auth(), storage.users())?;
        let employees = EmployeeService::new(storage.employees());

        Ok(Self {
            config: Arc::new(config),
            auth: Arc::new(auth),
            employees: Arc::new(employees),
            storage: Arc::new(storage),
        })
    }

    /// Get service configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
