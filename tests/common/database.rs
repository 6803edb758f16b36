//! Test database utilities
//!
//! Provides in-memory SQLite database for testing without external dependencies.
//! Each test gets an isolated database instance using SeaORM.

use employee_management::config::DatabaseConfig;
use employee_management::storage::database::Database;
use employee_management::storage::seeder;
use std::sync::Arc;

/// Test database wrapper providing isolated in-memory SQLite instances
#[derive(Clone)]
pub struct TestDatabase {
    inner: Arc<Database>,
}

impl TestDatabase {
    /// Create a new migrated in-memory test database
    pub async fn new() -> Self {
        let db = create_test_db().await;
        Self {
            inner: Arc::new(db),
        }
    }

    /// Create a test database holding the sample users and employees
    pub async fn seeded() -> Self {
        let db = Self::new().await;
        let seeded = seeder::seed(db.db(), db.db())
            .await
            .expect("Failed to seed test database");
        assert!(seeded);
        db
    }

    /// Get reference to the underlying database
    pub fn db(&self) -> &Database {
        &self.inner
    }

    /// Get Arc to the underlying database
    pub fn db_arc(&self) -> Arc<Database> {
        Arc::clone(&self.inner)
    }
}

/// Helper to create a simple test database config
pub fn test_db_config() -> DatabaseConfig {
    DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        // In-memory DB only supports 1 connection
        max_connections: 1,
        connection_timeout: 5,
    }
}

/// Create a standalone migrated test database
pub async fn create_test_db() -> Database {
    let config = test_db_config();
    let db = Database::new(&config)
        .await
        .expect("Failed to create test database");
    db.migrate().await.expect("Failed to run migrations");
    db
}

#[cfg(test)]
mod tests {
    use super::*;
    use employee_management::storage::UserRepository;

    #[tokio::test]
    async fn test_database_creation() {
        let db = TestDatabase::new().await;
        assert!(db.db().health_check().await.is_ok());
        assert_eq!(db.db().count_users().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_seeded_database() {
        let db = TestDatabase::seeded().await;
        assert_eq!(db.db().count_users().await.unwrap(), 2);
    }
}
