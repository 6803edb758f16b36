//! Main employee service implementation

use super::types::{CreateEmployeeRequest, UpdateEmployeeRequest};
use crate::core::models::{Employee, EmployeeFilter, NewEmployee, Page};
use crate::storage::EmployeeRepository;
use crate::utils::error::{Result, ServiceError};
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, info};

/// Employee queries and writes over an injected store
#[derive(Clone)]
pub struct EmployeeService {
    repository: Arc<dyn EmployeeRepository>,
}

impl EmployeeService {
    /// Create a new employee service
    pub fn new(repository: Arc<dyn EmployeeRepository>) -> Self {
        Self { repository }
    }

    /// Filtered page, newest first
    pub async fn get_paged(&self, filter: &EmployeeFilter) -> Result<Page<Employee>> {
        debug!("Employee page query: {:?}", filter);
        self.repository.find_employee_page(filter).await
    }

    /// Single employee; absence is not an error here
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Employee>> {
        self.repository.find_employee(id).await
    }

    pub async fn list_all(&self) -> Result<Vec<Employee>> {
        self.repository.list_employees().await
    }

    /// Employees in exactly this department
    pub async fn get_by_department(&self, department: &str) -> Result<Vec<Employee>> {
        self.repository.list_employees_by_department(department).await
    }

    /// Create an employee hired now
    pub async fn create(&self, request: CreateEmployeeRequest) -> Result<Employee> {
        request.validate()?;

        if self
            .repository
            .employee_email_exists(&request.email, None)
            .await?
        {
            return Err(email_conflict(&request.email));
        }

        let employee = self
            .repository
            .create_employee(NewEmployee {
                fields: request.into_fields(),
                hire_date: Utc::now(),
                is_active: true,
            })
            .await?;

        info!("Created employee {} ({})", employee.id, employee.email);
        Ok(employee)
    }

    /// Overwrite an employee's editable fields.
    ///
    /// Hire date and creation timestamp are kept; the update timestamp is
    /// stamped.
    pub async fn update(&self, id: i32, request: UpdateEmployeeRequest) -> Result<()> {
        request.validate()?;

        let mut employee = self
            .repository
            .find_employee(id)
            .await?
            .ok_or_else(|| employee_not_found(id))?;

        if self
            .repository
            .employee_email_exists(&request.email, Some(id))
            .await?
        {
            return Err(email_conflict(&request.email));
        }

        let (fields, is_active) = request.into_parts();
        employee.apply(fields, is_active);
        employee.updated_at = Some(Utc::now());

        self.repository.update_employee(&employee).await?;

        info!("Updated employee {}", id);
        Ok(())
    }

    pub async fn delete(&self, id: i32) -> Result<()> {
        if !self.repository.delete_employee(id).await? {
            return Err(employee_not_found(id));
        }

        info!("Deleted employee {}", id);
        Ok(())
    }
}

fn employee_not_found(id: i32) -> ServiceError {
    ServiceError::not_found(format!("Employee with id {} not found", id))
}

fn email_conflict(email: &str) -> ServiceError {
    ServiceError::conflict(format!("Email {} already exists", email))
}
