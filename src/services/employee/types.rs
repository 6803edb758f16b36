//! Employee request and response types

use crate::core::models::{Employee, EmployeeFields, EmployeeFilter, Page};
use crate::utils::error::Result;
use crate::utils::validation::DataValidator;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Body of an employee create request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmployeeRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(with = "rust_decimal::serde::float")]
    pub salary: Decimal,
    #[serde(default)]
    pub department: Option<String>,
}

impl CreateEmployeeRequest {
    pub fn validate(&self) -> Result<()> {
        validate_fields(
            &self.first_name,
            &self.last_name,
            &self.email,
            self.phone_number.as_deref(),
            self.salary,
        )
    }

    pub fn into_fields(self) -> EmployeeFields {
        EmployeeFields {
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone_number: non_empty(self.phone_number),
            salary: self.salary,
            department: non_empty(self.department),
        }
    }
}

/// Body of an employee update request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEmployeeRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(with = "rust_decimal::serde::float")]
    pub salary: Decimal,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

impl UpdateEmployeeRequest {
    pub fn validate(&self) -> Result<()> {
        validate_fields(
            &self.first_name,
            &self.last_name,
            &self.email,
            self.phone_number.as_deref(),
            self.salary,
        )
    }

    /// Split into the editable fields and the active flag
    pub fn into_parts(self) -> (EmployeeFields, bool) {
        let fields = EmployeeFields {
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone_number: non_empty(self.phone_number),
            salary: self.salary,
            department: non_empty(self.department),
        };
        (fields, self.is_active)
    }
}

fn default_active() -> bool {
    true
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn validate_fields(
    first_name: &str,
    last_name: &str,
    email: &str,
    phone_number: Option<&str>,
    salary: Decimal,
) -> Result<()> {
    DataValidator::validate_name("First name", first_name)?;
    DataValidator::validate_name("Last name", last_name)?;
    DataValidator::validate_email(email)?;
    DataValidator::validate_phone(phone_number.filter(|p| !p.trim().is_empty()))?;
    DataValidator::validate_salary(salary)?;
    Ok(())
}

/// Full employee view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeResponse {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    #[serde(with = "rust_decimal::serde::float")]
    pub salary: Decimal,
    pub hire_date: DateTime<Utc>,
    pub department: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<Employee> for EmployeeResponse {
    fn from(employee: Employee) -> Self {
        Self {
            id: employee.id,
            full_name: employee.full_name(),
            first_name: employee.first_name,
            last_name: employee.last_name,
            email: employee.email,
            phone_number: employee.phone_number,
            salary: employee.salary,
            hire_date: employee.hire_date,
            department: employee.department,
            is_active: employee.is_active,
            created_at: employee.created_at,
            updated_at: employee.updated_at,
        }
    }
}

/// Condensed employee view used in listings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeListItem {
    pub id: i32,
    pub full_name: String,
    pub email: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub salary: Decimal,
    pub department: Option<String>,
    pub is_active: bool,
    pub hire_date: DateTime<Utc>,
}

impl From<Employee> for EmployeeListItem {
    fn from(employee: Employee) -> Self {
        Self {
            id: employee.id,
            full_name: employee.full_name(),
            email: employee.email,
            salary: employee.salary,
            department: employee.department,
            is_active: employee.is_active,
            hire_date: employee.hire_date,
        }
    }
}

/// One page of a listing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedResponse<T> {
    pub data: Vec<T>,
    pub total_count: u64,
    pub page_number: u64,
    pub page_size: u64,
    pub total_pages: u64,
}

impl<T> PagedResponse<T> {
    /// Convert a store page, computing the page count
    pub fn from_page<S>(page: Page<S>, filter: &EmployeeFilter) -> Self
    where
        T: From<S>,
    {
        let total_pages = page.total_pages(filter.page_size);
        Self {
            data: page.items.into_iter().map(T::from).collect(),
            total_count: page.total_count,
            page_number: filter.page_number,
            page_size: filter.page_size,
            total_pages,
        }
    }
}

/// Query string of the employee listing
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeQueryParams {
    pub page_number: Option<i64>,
    pub page_size: Option<i64>,
    pub department: Option<String>,
    pub search_term: Option<String>,
}

impl EmployeeQueryParams {
    pub fn into_filter(self) -> EmployeeFilter {
        EmployeeFilter::new(
            self.page_number,
            self.page_size,
            self.department,
            self.search_term,
        )
    }
}
