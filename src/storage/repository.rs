//! Persistence interfaces
//!
//! The auth flow and the employee service only see these traits; the
//! SeaORM database and the in-memory store both implement them.

use crate::core::models::{Employee, EmployeeFilter, NewEmployee, NewUser, Page, User};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Credential store
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by exact username
    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>>;

    /// Whether any user has this username or this email
    async fn user_exists(&self, username: &str, email: &str) -> Result<bool>;

    /// Persist a new user and return it with its assigned id.
    ///
    /// A username or email clash is reported as `ServiceError::Conflict`.
    async fn create_user(&self, user: NewUser) -> Result<User>;

    /// Number of stored users
    async fn count_users(&self) -> Result<u64>;
}

/// Employee store
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Find an employee by id
    async fn find_employee(&self, id: i32) -> Result<Option<Employee>>;

    /// All employees
    async fn list_employees(&self) -> Result<Vec<Employee>>;

    /// Employees whose department equals `department` exactly
    async fn list_employees_by_department(&self, department: &str) -> Result<Vec<Employee>>;

    /// Filtered page ordered by id descending, plus the unpaged match count
    async fn find_employee_page(&self, filter: &EmployeeFilter) -> Result<Page<Employee>>;

    /// Whether an employee other than `exclude_id` uses this email
    async fn employee_email_exists(&self, email: &str, exclude_id: Option<i32>) -> Result<bool>;

    /// Persist a new employee and return it with its assigned id and
    /// creation timestamp.
    ///
    /// An email clash is reported as `ServiceError::Conflict`.
    async fn create_employee(&self, employee: NewEmployee) -> Result<Employee>;

    /// Overwrite a stored employee
    async fn update_employee(&self, employee: &Employee) -> Result<()>;

    /// Remove an employee; returns false when nothing was removed
    async fn delete_employee(&self, id: i32) -> Result<bool>;
}
