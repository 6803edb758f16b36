//! Test fixtures and data factories
//!
//! Provides factory methods for creating test data with sensible defaults.

use chrono::{Duration, Utc};
use employee_management::auth::password::hash_password;
use employee_management::core::models::{EmployeeFields, NewEmployee, NewUser, UserRole};
use rust_decimal::Decimal;
use std::sync::atomic::{AtomicU32, Ordering};

static SEQUENCE: AtomicU32 = AtomicU32::new(1);

fn next_sequence() -> u32 {
    SEQUENCE.fetch_add(1, Ordering::Relaxed)
}

/// Factory for creating test users
pub struct UserFactory;

impl UserFactory {
    /// Create a regular user whose password is `Password123`
    pub fn create() -> NewUser {
        let n = next_sequence();
        NewUser {
            username: format!("user_{}", n),
            email: format!("user-{}@example.com", n),
            password_hash: hash_password("Password123"),
            role: UserRole::Employee.to_string(),
        }
    }

    /// Create an admin user
    pub fn admin() -> NewUser {
        let mut user = Self::create();
        user.username = format!("admin_{}", next_sequence());
        user.role = UserRole::Admin.to_string();
        user
    }
}

/// Factory for creating test employees
pub struct EmployeeFactory;

impl EmployeeFactory {
    /// Create an active employee in the given department
    pub fn create(department: &str) -> NewEmployee {
        let n = next_sequence();
        NewEmployee {
            fields: EmployeeFields {
                first_name: format!("First{}", n),
                last_name: "Tester".to_string(),
                email: format!("employee-{}@example.com", n),
                phone_number: Some("+1-555-0199".to_string()),
                salary: Decimal::new(5_500_050, 2),
                department: Some(department.to_string()),
            },
            hire_date: Utc::now() - Duration::days(30),
            is_active: true,
        }
    }

    /// Create an employee with a specific email and name
    pub fn named(first_name: &str, last_name: &str, email: &str) -> NewEmployee {
        let mut employee = Self::create("Engineering");
        employee.fields.first_name = first_name.to_string();
        employee.fields.last_name = last_name.to_string();
        employee.fields.email = email.to_string();
        employee
    }
}
