//! Employee record model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// A stored employee record
#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    /// Store-assigned identifier
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    /// Unique email address
    pub email: String,
    pub phone_number: Option<String>,
    /// Monetary amount, never negative
    pub salary: Decimal,
    pub hire_date: DateTime<Utc>,
    pub department: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    /// Set on the first update
    pub updated_at: Option<DateTime<Utc>>,
}

impl Employee {
    /// First and last name joined by a single space
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Overwrite the mutable fields from an update payload
    pub fn apply(&mut self, fields: EmployeeFields, is_active: bool) {
        self.first_name = fields.first_name;
        self.last_name = fields.last_name;
        self.email = fields.email;
        self.phone_number = fields.phone_number;
        self.salary = fields.salary;
        self.department = fields.department;
        self.is_active = is_active;
    }
}

/// Editable employee fields shared by create and update
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeFields {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub salary: Decimal,
    pub department: Option<String>,
}

/// Employee data to persist; the store assigns id and `created_at`
#[derive(Debug, Clone)]
pub struct NewEmployee {
    pub fields: EmployeeFields,
    pub hire_date: DateTime<Utc>,
    pub is_active: bool,
}
