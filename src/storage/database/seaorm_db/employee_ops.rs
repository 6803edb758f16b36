use crate::core::models::{Employee, EmployeeFilter, NewEmployee, Page};
use crate::storage::repository::EmployeeRepository;
use crate::utils::error::{Result, ServiceError, map_write_error};
use async_trait::async_trait;
use sea_orm::sea_query::LikeExpr;
use sea_orm::*;
use tracing::debug;

use super::super::entities::{self, employee};
use super::types::SeaOrmDatabase;

/// Department and search-term predicate shared by count and page queries
fn filter_condition(filter: &EmployeeFilter) -> Condition {
    let mut condition = Condition::all();

    if let Some(department) = &filter.department {
        condition = condition.add(employee::Column::Department.eq(department.as_str()));
    }

    if let Some(term) = &filter.search_term {
        let pattern = contains_pattern(term);
        let like = || LikeExpr::new(pattern.clone()).escape('\\');
        condition = condition.add(
            Condition::any()
                .add(employee::Column::FirstName.like(like()))
                .add(employee::Column::LastName.like(like()))
                .add(employee::Column::Email.like(like())),
        );
    }

    condition
}

/// `%term%` with LIKE wildcards in `term` escaped, so the term matches literally
fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[async_trait]
impl EmployeeRepository for SeaOrmDatabase {
    async fn find_employee(&self, id: i32) -> Result<Option<Employee>> {
        debug!("Finding employee by ID: {}", id);

        let model = entities::Employee::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(ServiceError::Database)?;

        Ok(model.map(|m| m.to_domain_employee()))
    }

    async fn list_employees(&self) -> Result<Vec<Employee>> {
        let models = entities::Employee::find()
            .order_by_asc(employee::Column::Id)
            .all(&self.db)
            .await
            .map_err(ServiceError::Database)?;

        Ok(models.iter().map(|m| m.to_domain_employee()).collect())
    }

    async fn list_employees_by_department(&self, department: &str) -> Result<Vec<Employee>> {
        debug!("Listing employees in department: {}", department);

        let models = entities::Employee::find()
            .filter(employee::Column::Department.eq(department))
            .order_by_asc(employee::Column::Id)
            .all(&self.db)
            .await
            .map_err(ServiceError::Database)?;

        Ok(models.iter().map(|m| m.to_domain_employee()).collect())
    }

    async fn find_employee_page(&self, filter: &EmployeeFilter) -> Result<Page<Employee>> {
        debug!(
            "Querying employees page {} (size {})",
            filter.page_number, filter.page_size
        );

        let query = entities::Employee::find().filter(filter_condition(filter));

        let total_count = query
            .clone()
            .count(&self.db)
            .await
            .map_err(ServiceError::Database)?;

        let models = query
            .order_by_desc(employee::Column::Id)
            .offset(filter.offset())
            .limit(filter.page_size)
            .all(&self.db)
            .await
            .map_err(ServiceError::Database)?;

        Ok(Page {
            items: models.iter().map(|m| m.to_domain_employee()).collect(),
            total_count,
        })
    }

    async fn employee_email_exists(&self, email: &str, exclude_id: Option<i32>) -> Result<bool> {
        let mut query = entities::Employee::find().filter(employee::Column::Email.eq(email));
        if let Some(id) = exclude_id {
            query = query.filter(employee::Column::Id.ne(id));
        }

        let matches = query
            .count(&self.db)
            .await
            .map_err(ServiceError::Database)?;
        Ok(matches > 0)
    }

    async fn create_employee(&self, new_employee: NewEmployee) -> Result<Employee> {
        let email = new_employee.fields.email.clone();
        debug!("Creating employee: {}", email);

        let model = employee::Model::from_new_employee(new_employee)
            .insert(&self.db)
            .await
            .map_err(|e| map_write_error(e, || format!("Email {} already exists", email)))?;

        Ok(model.to_domain_employee())
    }

    async fn update_employee(&self, employee: &Employee) -> Result<()> {
        debug!("Updating employee: {}", employee.id);

        employee::Model::from_domain_employee(employee)
            .update(&self.db)
            .await
            .map_err(|e| match e {
                DbErr::RecordNotUpdated => ServiceError::NotFound(format!(
                    "Employee with id {} not found",
                    employee.id
                )),
                other => map_write_error(other, || {
                    format!("Email {} already exists", employee.email)
                }),
            })?;

        Ok(())
    }

    async fn delete_employee(&self, id: i32) -> Result<bool> {
        debug!("Deleting employee: {}", id);

        let result = entities::Employee::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(ServiceError::Database)?;

        Ok(result.rows_affected > 0)
    }
}
