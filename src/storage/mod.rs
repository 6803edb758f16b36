//! Storage layer for the employee service
//!
//! This module provides data persistence behind the repository traits.

/// Database storage module
pub mod database;
/// In-memory storage module
pub mod memory;
/// Repository interfaces
pub mod repository;
/// Sample data for a fresh store
pub mod seeder;

pub use memory::MemoryStore;
pub use repository::{EmployeeRepository, UserRepository};

use crate::config::{StorageBackend, StorageConfig};
use crate::utils::error::Result;
use database::SeaOrmDatabase;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Main storage layer handing out the configured repositories
#[derive(Clone)]
pub struct StorageLayer {
    users: Arc<dyn UserRepository>,
    employees: Arc<dyn EmployeeRepository>,
    /// Set when running against a database
    database: Option<Arc<SeaOrmDatabase>>,
}

/// Storage health summary
#[derive(Debug, Clone, Serialize)]
pub struct StorageHealthStatus {
    /// Backend name
    pub backend: String,
    /// Whether the backend answered
    pub healthy: bool,
}

impl StorageLayer {
    /// Create a new storage layer; database backends are connected and migrated
    pub async fn new(config: &StorageConfig) -> Result<Self> {
        info!("Initializing storage layer ({:?})", config.backend);

        let layer = match config.backend {
            StorageBackend::Database => {
                debug!("Connecting to database");
                let database = SeaOrmDatabase::new(&config.database).await?;
                let layer = Self::from_database(database);
                layer.migrate().await?;
                layer
            }
            StorageBackend::Memory => {
                warn!("Using in-memory storage; data will not survive a restart");
                Self::memory()
            }
        };

        info!("Storage layer initialized successfully");
        Ok(layer)
    }

    /// Storage layer over a fresh in-memory store
    pub fn memory() -> Self {
        let store = Arc::new(MemoryStore::new());
        Self {
            users: store.clone(),
            employees: store,
            database: None,
        }
    }

    /// Storage layer over an open database connection
    pub fn from_database(database: SeaOrmDatabase) -> Self {
        let database = Arc::new(database);
        Self {
            users: database.clone(),
            employees: database.clone(),
            database: Some(database),
        }
    }

    /// Run database migrations
    pub async fn migrate(&self) -> Result<()> {
        if let Some(database) = &self.database {
            database.migrate().await?;
        }
        Ok(())
    }

    /// Seed sample data into an empty store
    pub async fn seed(&self) -> Result<bool> {
        seeder::seed(self.users.as_ref(), self.employees.as_ref()).await
    }

    /// Health check for the configured backend
    pub async fn health_check(&self) -> StorageHealthStatus {
        match &self.database {
            Some(database) => {
                let healthy = match database.health_check().await {
                    Ok(()) => true,
                    Err(e) => {
                        warn!("Database health check failed: {}", e);
                        false
                    }
                };
                StorageHealthStatus {
                    backend: database.backend_type().to_string(),
                    healthy,
                }
            }
            None => StorageHealthStatus {
                backend: "memory".to_string(),
                healthy: true,
            },
        }
    }

    /// User repository
    pub fn users(&self) -> Arc<dyn UserRepository> {
        self.users.clone()
    }

    /// Employee repository
    pub fn employees(&self) -> Arc<dyn EmployeeRepository> {
        self.employees.clone()
    }
}
