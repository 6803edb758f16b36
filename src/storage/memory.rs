//! In-process store
//!
//! Keeps users and employees in ordered maps behind a single lock. Check
//! and insert happen under the same write guard, so uniqueness cannot race.
//! String matching is ordinal and case-sensitive.

use super::repository::{EmployeeRepository, UserRepository};
use crate::core::models::{Employee, EmployeeFilter, NewEmployee, NewUser, Page, User};
use crate::utils::error::{Result, ServiceError};
use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use tracing::debug;

#[derive(Debug, Default)]
struct Tables {
    users: BTreeMap<i32, User>,
    employees: BTreeMap<i32, Employee>,
    next_user_id: i32,
    next_employee_id: i32,
}

/// In-memory implementation of the repositories
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle a user's active flag; returns false for an unknown username
    pub fn set_user_active(&self, username: &str, active: bool) -> bool {
        let mut tables = self.tables.write();
        match tables.users.values_mut().find(|u| u.username == username) {
            Some(user) => {
                user.is_active = active;
                true
            }
            None => false,
        }
    }
}

fn email_taken(tables: &Tables, email: &str, exclude_id: Option<i32>) -> bool {
    tables
        .employees
        .values()
        .any(|e| e.email == email && Some(e.id) != exclude_id)
}

fn matches_filter(employee: &Employee, filter: &EmployeeFilter) -> bool {
    if let Some(department) = &filter.department {
        if employee.department.as_deref() != Some(department.as_str()) {
            return false;
        }
    }
    if let Some(term) = &filter.search_term {
        let term = term.as_str();
        if !(employee.first_name.contains(term)
            || employee.last_name.contains(term)
            || employee.email.contains(term))
        {
            return false;
        }
    }
    true
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>> {
        let tables = self.tables.read();
        Ok(tables
            .users
            .values()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn user_exists(&self, username: &str, email: &str) -> Result<bool> {
        let tables = self.tables.read();
        Ok(tables
            .users
            .values()
            .any(|u| u.username == username || u.email == email))
    }

    async fn create_user(&self, user: NewUser) -> Result<User> {
        let mut tables = self.tables.write();

        if tables
            .users
            .values()
            .any(|u| u.username == user.username || u.email == user.email)
        {
            return Err(ServiceError::conflict("User already exists"));
        }

        tables.next_user_id += 1;
        let stored = User {
            id: tables.next_user_id,
            username: user.username,
            email: user.email,
            password_hash: user.password_hash,
            role: user.role,
            is_active: true,
            created_at: Utc::now(),
        };
        tables.users.insert(stored.id, stored.clone());

        debug!("Stored user {} in memory", stored.id);
        Ok(stored)
    }

    async fn count_users(&self) -> Result<u64> {
        Ok(self.tables.read().users.len() as u64)
    }
}

#[async_trait]
impl EmployeeRepository for MemoryStore {
    async fn find_employee(&self, id: i32) -> Result<Option<Employee>> {
        Ok(self.tables.read().employees.get(&id).cloned())
    }

    async fn list_employees(&self) -> Result<Vec<Employee>> {
        Ok(self.tables.read().employees.values().cloned().collect())
    }

    async fn list_employees_by_department(&self, department: &str) -> Result<Vec<Employee>> {
        let tables = self.tables.read();
        Ok(tables
            .employees
            .values()
            .filter(|e| e.department.as_deref() == Some(department))
            .cloned()
            .collect())
    }

    async fn find_employee_page(&self, filter: &EmployeeFilter) -> Result<Page<Employee>> {
        let tables = self.tables.read();

        // BTreeMap iterates ascending by id; reverse for newest first
        let matching: Vec<&Employee> = tables
            .employees
            .values()
            .rev()
            .filter(|e| matches_filter(e, filter))
            .collect();

        let total_count = matching.len() as u64;
        let items = matching
            .into_iter()
            .skip(filter.offset() as usize)
            .take(filter.page_size as usize)
            .cloned()
            .collect();

        Ok(Page { items, total_count })
    }

    async fn employee_email_exists(&self, email: &str, exclude_id: Option<i32>) -> Result<bool> {
        Ok(email_taken(&self.tables.read(), email, exclude_id))
    }

    async fn create_employee(&self, employee: NewEmployee) -> Result<Employee> {
        let mut tables = self.tables.write();

        if email_taken(&tables, &employee.fields.email, None) {
            return Err(ServiceError::conflict(format!(
                "Email {} already exists",
                employee.fields.email
            )));
        }

        tables.next_employee_id += 1;
        let fields = employee.fields;
        let stored = Employee {
            id: tables.next_employee_id,
            first_name: fields.first_name,
            last_name: fields.last_name,
            email: fields.email,
            phone_number: fields.phone_number,
            salary: fields.salary,
            hire_date: employee.hire_date,
            department: fields.department,
            is_active: employee.is_active,
            created_at: Utc::now(),
            updated_at: None,
        };
        tables.employees.insert(stored.id, stored.clone());

        debug!("Stored employee {} in memory", stored.id);
        Ok(stored)
    }

    async fn update_employee(&self, employee: &Employee) -> Result<()> {
        let mut tables = self.tables.write();

        if !tables.employees.contains_key(&employee.id) {
            return Err(ServiceError::not_found(format!(
                "Employee with id {} not found",
                employee.id
            )));
        }
        if email_taken(&tables, &employee.email, Some(employee.id)) {
            return Err(ServiceError::conflict(format!(
                "Email {} already exists",
                employee.email
            )));
        }

        tables.employees.insert(employee.id, employee.clone());
        Ok(())
    }

    async fn delete_employee(&self, id: i32) -> Result<bool> {
        Ok(self.tables.write().employees.remove(&id).is_some())
    }
}
