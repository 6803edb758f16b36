//! Sample data for a fresh store

use super::repository::{EmployeeRepository, UserRepository};
use crate::auth::password::hash_password;
use crate::core::models::{EmployeeFields, NewEmployee, NewUser, UserRole};
use crate::utils::error::Result;
use chrono::{DateTime, Months, Utc};
use rust_decimal::Decimal;
use tracing::{debug, info};

struct SeedUser {
    username: &'static str,
    email: &'static str,
    password: &'static str,
    role: UserRole,
}

struct SeedEmployee {
    first_name: &'static str,
    last_name: &'static str,
    email: &'static str,
    phone_number: &'static str,
    salary: i64,
    department: &'static str,
    months_employed: u32,
}

const SEED_USERS: &[SeedUser] = &[
    SeedUser {
        username: "admin",
        email: "admin@example.com",
        password: "AdminPassword123",
        role: UserRole::Admin,
    },
    SeedUser {
        username: "employee",
        email: "employee@example.com",
        password: "EmployeePassword123",
        role: UserRole::Employee,
    },
];

const SEED_EMPLOYEES: &[SeedEmployee] = &[
    SeedEmployee {
        first_name: "John",
        last_name: "Doe",
        email: "john.doe@example.com",
        phone_number: "+1-555-0100",
        salary: 80000,
        department: "IT",
        months_employed: 12,
    },
    SeedEmployee {
        first_name: "Jane",
        last_name: "Smith",
        email: "jane.smith@example.com",
        phone_number: "+1-555-0101",
        salary: 75000,
        department: "HR",
        months_employed: 6,
    },
    SeedEmployee {
        first_name: "Bob",
        last_name: "Johnson",
        email: "bob.johnson@example.com",
        phone_number: "+1-555-0102",
        salary: 70000,
        department: "Sales",
        months_employed: 3,
    },
];

/// Populate the store with sample users and employees.
///
/// Does nothing when any user already exists. Returns whether data was
/// written.
pub async fn seed<U, E>(users: &U, employees: &E) -> Result<bool>
where
    U: UserRepository + ?Sized,
    E: EmployeeRepository + ?Sized,
{
    if users.count_users().await? > 0 {
        debug!("Store already populated, skipping seed data");
        return Ok(false);
    }

    info!("Seeding store with sample data");
    let now = Utc::now();

    for seed_user in SEED_USERS {
        users
            .create_user(NewUser {
                username: seed_user.username.to_string(),
                email: seed_user.email.to_string(),
                password_hash: hash_password(seed_user.password),
                role: seed_user.role.to_string(),
            })
            .await?;
    }

    for seed_employee in SEED_EMPLOYEES {
        employees
            .create_employee(NewEmployee {
                fields: EmployeeFields {
                    first_name: seed_employee.first_name.to_string(),
                    last_name: seed_employee.last_name.to_string(),
                    email: seed_employee.email.to_string(),
                    phone_number: Some(seed_employee.phone_number.to_string()),
                    salary: Decimal::new(seed_employee.salary, 0),
                    department: Some(seed_employee.department.to_string()),
                },
                hire_date: months_ago(now, seed_employee.months_employed),
                is_active: true,
            })
            .await?;
    }

    info!(
        "Seeded {} users and {} employees",
        SEED_USERS.len(),
        SEED_EMPLOYEES.len()
    );
    Ok(true)
}

fn months_ago(now: DateTime<Utc>, months: u32) -> DateTime<Utc> {
    now.checked_sub_months(Months::new(months)).unwrap_or(now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::MemoryStore;

    #[tokio::test]
    async fn test_seed_populates_empty_store() {
        let store = MemoryStore::new();

        assert!(seed(&store, &store).await.unwrap());
        assert_eq!(store.count_users().await.unwrap(), 2);

        let admin = store.find_user_by_username("admin").await.unwrap().unwrap();
        assert_eq!(admin.role, "Admin");
        assert!(crate::auth::password::verify_password(
            "AdminPassword123",
            &admin.password_hash
        ));

        let it = store.list_employees_by_department("IT").await.unwrap();
        assert_eq!(it.len(), 1);
        assert_eq!(it[0].full_name(), "John Doe");
        assert!(it[0].hire_date < Utc::now());
    }

    #[tokio::test]
    async fn test_seed_skips_populated_store() {
        let store = MemoryStore::new();
        seed(&store, &store).await.unwrap();

        assert!(!seed(&store, &store).await.unwrap());
        assert_eq!(store.list_employees().await.unwrap().len(), 3);
    }
}
