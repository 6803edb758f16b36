use crate::core::models::{Employee, NewEmployee};
use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};
use serde::{Deserialize, Serialize};

/// Employee database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "employees")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    /// Email address (unique)
    #[sea_orm(unique)]
    pub email: String,
    pub phone_number: Option<String>,
    #[sea_orm(column_type = "Decimal(Some((18, 2)))")]
    pub salary: Decimal,
    pub hire_date: DateTimeWithTimeZone,
    pub department: Option<String>,
    pub is_active: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Convert SeaORM model to domain employee model
    pub fn to_domain_employee(&self) -> Employee {
        Employee {
            id: self.id,
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            phone_number: self.phone_number.clone(),
            salary: self.salary,
            hire_date: self.hire_date.with_timezone(&Utc),
            department: self.department.clone(),
            is_active: self.is_active,
            created_at: self.created_at.with_timezone(&Utc),
            updated_at: self.updated_at.map(|dt| dt.with_timezone(&Utc)),
        }
    }

    /// Active model for an employee that has no id yet
    pub fn from_new_employee(employee: NewEmployee) -> ActiveModel {
        let fields = employee.fields;
        ActiveModel {
            id: NotSet,
            first_name: Set(fields.first_name),
            last_name: Set(fields.last_name),
            email: Set(fields.email),
            phone_number: Set(fields.phone_number),
            salary: Set(fields.salary),
            hire_date: Set(employee.hire_date.into()),
            department: Set(fields.department),
            is_active: Set(employee.is_active),
            created_at: Set(Utc::now().into()),
            updated_at: Set(None),
        }
    }

    /// Active model that overwrites every column of a stored employee
    pub fn from_domain_employee(employee: &Employee) -> ActiveModel {
        ActiveModel {
            id: Set(employee.id),
            first_name: Set(employee.first_name.clone()),
            last_name: Set(employee.last_name.clone()),
            email: Set(employee.email.clone()),
            phone_number: Set(employee.phone_number.clone()),
            salary: Set(employee.salary),
            hire_date: Set(employee.hire_date.into()),
            department: Set(employee.department.clone()),
            is_active: Set(employee.is_active),
            created_at: Set(employee.created_at.into()),
            updated_at: Set(employee.updated_at.map(Into::into)),
        }
    }
}
