//! Common test utilities for employee-management
//!
//! This module provides shared test infrastructure for all tests:
//! - In-memory SQLite database support
//! - Test fixtures and data factories

pub mod database;
pub mod fixtures;

// Re-export commonly used items
pub use database::TestDatabase;
pub use fixtures::{EmployeeFactory, UserFactory};
