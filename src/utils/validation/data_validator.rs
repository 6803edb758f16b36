//! Field-level validation rules

use crate::utils::error::{Result, ServiceError};
use regex::Regex;
use rust_decimal::Decimal;

/// Maximum length of a person's first or last name
pub const MAX_NAME_LENGTH: usize = 100;

/// Maximum length of a login username
pub const MAX_USERNAME_LENGTH: usize = 100;

/// Accepted password length range for login
pub const PASSWORD_LENGTH_RANGE: std::ops::RangeInclusive<usize> = 6..=100;

/// Data validation utilities
pub struct DataValidator;

impl DataValidator {
    /// Validate a required name field (first or last name)
    pub fn validate_name(field: &str, value: &str) -> Result<()> {
        if value.trim().is_empty() {
            return Err(ServiceError::Validation(format!("{} is required", field)));
        }

        if value.chars().count() > MAX_NAME_LENGTH {
            return Err(ServiceError::Validation(format!(
                "{} cannot exceed {} characters",
                field, MAX_NAME_LENGTH
            )));
        }

        Ok(())
    }

    /// Validate email format
    pub fn validate_email(email: &str) -> Result<()> {
        if email.trim().is_empty() {
            return Err(ServiceError::Validation("Email is required".to_string()));
        }

        let email_regex = Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
            .map_err(|e| ServiceError::Internal(format!("Regex error: {}", e)))?;

        if !email_regex.is_match(email) {
            return Err(ServiceError::Validation("Invalid email format".to_string()));
        }

        Ok(())
    }

    /// Validate an optional phone number
    pub fn validate_phone(phone: Option<&str>) -> Result<()> {
        let Some(phone) = phone else {
            return Ok(());
        };

        let phone_regex = Regex::new(r"^[0-9+\-(). ]+$")
            .map_err(|e| ServiceError::Internal(format!("Regex error: {}", e)))?;

        if !phone_regex.is_match(phone) || !phone.chars().any(|c| c.is_ascii_digit()) {
            return Err(ServiceError::Validation("Invalid phone number".to_string()));
        }

        Ok(())
    }

    /// Validate salary is non-negative
    pub fn validate_salary(salary: Decimal) -> Result<()> {
        if salary < Decimal::ZERO {
            return Err(ServiceError::Validation(
                "Salary cannot be negative".to_string(),
            ));
        }

        Ok(())
    }

    /// Validate login username
    pub fn validate_username(username: &str) -> Result<()> {
        if username.trim().is_empty() {
            return Err(ServiceError::Validation("Username is required".to_string()));
        }

        if username.chars().count() > MAX_USERNAME_LENGTH {
            return Err(ServiceError::Validation(format!(
                "Username cannot exceed {} characters",
                MAX_USERNAME_LENGTH
            )));
        }

        Ok(())
    }

    /// Validate login password length
    pub fn validate_password(password: &str) -> Result<()> {
        if password.is_empty() {
            return Err(ServiceError::Validation("Password is required".to_string()));
        }

        if !PASSWORD_LENGTH_RANGE.contains(&password.chars().count()) {
            return Err(ServiceError::Validation(format!(
                "Password must be between {} and {} characters",
                PASSWORD_LENGTH_RANGE.start(),
                PASSWORD_LENGTH_RANGE.end()
            )));
        }

        Ok(())
    }
}
