//! Database integration tests
//!
//! Tests repository operations using real in-memory SQLite database.

#[cfg(test)]
mod tests {
    use crate::common::{EmployeeFactory, TestDatabase, UserFactory};
    use employee_management::core::models::EmployeeFilter;
    use employee_management::storage::database::DatabaseBackendType;
    use employee_management::storage::{EmployeeRepository, MemoryStore, UserRepository};
    use rust_decimal::Decimal;

    /// Test basic database connection and health check
    #[tokio::test]
    async fn test_database_health_check() {
        let db = TestDatabase::new().await;
        assert_eq!(db.db().backend_type(), DatabaseBackendType::SQLite);

        let health = db.db().health_check().await;
        assert!(health.is_ok(), "Health check failed: {:?}", health.err());
    }

    /// Migrations are idempotent
    #[tokio::test]
    async fn test_database_migration_twice() {
        let db = TestDatabase::new().await;
        let result = db.db().migrate().await;
        assert!(result.is_ok(), "Migration failed: {:?}", result.err());
    }

    #[tokio::test]
    async fn test_user_round_trip() {
        let db = TestDatabase::new().await;
        let new_user = UserFactory::admin();

        let created = db.db().create_user(new_user.clone()).await.unwrap();
        assert!(created.id > 0);
        assert!(created.is_active);
        assert_eq!(created.role, "Admin");

        let found = db
            .db()
            .find_user_by_username(&new_user.username)
            .await
            .unwrap()
            .expect("user should exist");
        assert_eq!(found.email, new_user.email);
        assert_eq!(found.password_hash, new_user.password_hash);

        assert!(db.db().find_user_by_username("nobody").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_user_exists_matches_username_or_email() {
        let db = TestDatabase::new().await;
        let user = db.db().create_user(UserFactory::create()).await.unwrap();

        assert!(db.db().user_exists(&user.username, "x@example.com").await.unwrap());
        assert!(db.db().user_exists("someone-else", &user.email).await.unwrap());
        assert!(!db.db().user_exists("someone-else", "x@example.com").await.unwrap());
    }

    #[tokio::test]
    async fn test_duplicate_username_is_conflict() {
        let db = TestDatabase::new().await;
        let user = UserFactory::create();
        db.db().create_user(user.clone()).await.unwrap();

        let mut again = user;
        again.email = "different@example.com".to_string();
        let err = db.db().create_user(again).await.unwrap_err();
        assert!(err.is_conflict(), "expected conflict, got {:?}", err);
    }

    #[tokio::test]
    async fn test_employee_round_trip_keeps_salary_scale() {
        let db = TestDatabase::new().await;
        let created = db
            .db()
            .create_employee(EmployeeFactory::create("Finance"))
            .await
            .unwrap();
        assert!(created.updated_at.is_none());

        let found = db
            .db()
            .find_employee(created.id)
            .await
            .unwrap()
            .expect("employee should exist");
        assert_eq!(found.salary, Decimal::new(5_500_050, 2));
        assert_eq!(found.department.as_deref(), Some("Finance"));
        assert_eq!(found.email, created.email);

        assert!(db.db().find_employee(created.id + 100).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_employee_email_is_conflict() {
        let db = TestDatabase::new().await;
        db.db()
            .create_employee(EmployeeFactory::named("A", "One", "shared@example.com"))
            .await
            .unwrap();

        let err = db
            .db()
            .create_employee(EmployeeFactory::named("B", "Two", "shared@example.com"))
            .await
            .unwrap_err();
        assert!(err.is_conflict());
        assert_eq!(err.to_string(), "Email shared@example.com already exists");
    }

    #[tokio::test]
    async fn test_email_exists_excludes_own_record() {
        let db = TestDatabase::new().await;
        let employee = db
            .db()
            .create_employee(EmployeeFactory::named("A", "One", "own@example.com"))
            .await
            .unwrap();

        assert!(
            db.db()
                .employee_email_exists("own@example.com", None)
                .await
                .unwrap()
        );
        assert!(
            !db.db()
                .employee_email_exists("own@example.com", Some(employee.id))
                .await
                .unwrap()
        );
    }

    #[tokio::test]
    async fn test_page_is_newest_first() {
        let db = TestDatabase::new().await;
        let mut ids = Vec::new();
        for _ in 0..15 {
            let employee = db
                .db()
                .create_employee(EmployeeFactory::create("Ops"))
                .await
                .unwrap();
            ids.push(employee.id);
        }

        let first = db
            .db()
            .find_employee_page(&EmployeeFilter::new(Some(1), Some(10), None, None))
            .await
            .unwrap();
        assert_eq!(first.total_count, 15);
        assert_eq!(first.items.len(), 10);
        assert_eq!(first.items[0].id, ids[14]);
        assert!(first.items.windows(2).all(|w| w[0].id > w[1].id));

        let second = db
            .db()
            .find_employee_page(&EmployeeFilter::new(Some(2), Some(10), None, None))
            .await
            .unwrap();
        assert_eq!(second.items.len(), 5);
        assert_eq!(second.items[4].id, ids[0]);

        let beyond = db
            .db()
            .find_employee_page(&EmployeeFilter::new(Some(3), Some(10), None, None))
            .await
            .unwrap();
        assert_eq!(beyond.total_count, 15);
        assert!(beyond.items.is_empty());
    }

    #[tokio::test]
    async fn test_page_filters_combine() {
        let db = TestDatabase::new().await;
        db.db()
            .create_employee(EmployeeFactory::named("Ada", "Lovelace", "ada@example.com"))
            .await
            .unwrap();
        db.db()
            .create_employee(EmployeeFactory::named("Grace", "Hopper", "grace@example.com"))
            .await
            .unwrap();
        let mut elsewhere = EmployeeFactory::named("Ada", "Byron", "byron@example.com");
        elsewhere.fields.department = Some("Sales".to_string());
        db.db().create_employee(elsewhere).await.unwrap();

        let filter = EmployeeFilter::new(
            None,
            None,
            Some("Engineering".to_string()),
            Some("Ada".to_string()),
        );
        let page = db.db().find_employee_page(&filter).await.unwrap();
        assert_eq!(page.total_count, 1);
        assert_eq!(page.items[0].email, "ada@example.com");

        let filter = EmployeeFilter::new(None, None, None, Some("hopper@".to_string()));
        let page = db.db().find_employee_page(&filter).await.unwrap();
        assert_eq!(page.total_count, 0);

        let filter = EmployeeFilter::new(None, None, None, Some("grace@".to_string()));
        let page = db.db().find_employee_page(&filter).await.unwrap();
        assert_eq!(page.total_count, 1);
    }

    #[tokio::test]
    async fn test_department_listing() {
        let db = TestDatabase::new().await;
        db.db()
            .create_employee(EmployeeFactory::create("IT"))
            .await
            .unwrap();
        db.db()
            .create_employee(EmployeeFactory::create("HR"))
            .await
            .unwrap();
        db.db()
            .create_employee(EmployeeFactory::create("IT"))
            .await
            .unwrap();

        let it = db.db().list_employees_by_department("IT").await.unwrap();
        assert_eq!(it.len(), 2);
        assert!(it[0].id < it[1].id);
        assert!(db.db().list_employees_by_department("Legal").await.unwrap().is_empty());
        assert_eq!(db.db().list_employees().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let db = TestDatabase::new().await;
        let mut employee = db
            .db()
            .create_employee(EmployeeFactory::create("IT"))
            .await
            .unwrap();

        employee.first_name = "Renamed".to_string();
        employee.is_active = false;
        employee.updated_at = Some(chrono::Utc::now());
        db.db().update_employee(&employee).await.unwrap();

        let found = db.db().find_employee(employee.id).await.unwrap().unwrap();
        assert_eq!(found.first_name, "Renamed");
        assert!(!found.is_active);
        assert!(found.updated_at.is_some());

        assert!(db.db().delete_employee(employee.id).await.unwrap());
        assert!(!db.db().delete_employee(employee.id).await.unwrap());

        let err = db.db().update_employee(&employee).await.unwrap_err();
        assert!(matches!(
            err,
            employee_management::ServiceError::NotFound(_)
        ));
    }

    #[tokio::test]
    async fn test_seed_runs_once() {
        let db = TestDatabase::seeded().await;
        assert_eq!(db.db().list_employees().await.unwrap().len(), 3);

        let again = employee_management::storage::seeder::seed(db.db(), db.db())
            .await
            .unwrap();
        assert!(!again);
        assert_eq!(db.db().count_users().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_wildcard_characters_search_literally() {
        let db = TestDatabase::new().await;
        let memory = MemoryStore::new();
        let records = [
            EmployeeFactory::named("Ann", "Lee", "ann.lee@example.com"),
            EmployeeFactory::named("Ben", "Ray", "ben.ray@example.com"),
            EmployeeFactory::named("Cat", "O_Neil", "cat_oneil@example.com"),
            EmployeeFactory::named("Dan", "100%", "dan.percent@example.com"),
        ];
        for record in records {
            db.db().create_employee(record.clone()).await.unwrap();
            memory.create_employee(record).await.unwrap();
        }

        for (term, expected) in [("_", 1), ("%", 1), ("\\", 0), ("O_N", 1), ("0%", 1)] {
            let filter = EmployeeFilter::new(None, None, None, Some(term.to_string()));
            let sqlite = db.db().find_employee_page(&filter).await.unwrap();
            let in_memory = memory.find_employee_page(&filter).await.unwrap();

            assert_eq!(sqlite.total_count, expected, "sqlite search for {:?}", term);
            assert_eq!(
                sqlite.total_count, in_memory.total_count,
                "backends disagree on {:?}",
                term
            );
        }
    }

    #[tokio::test]
    async fn test_huge_page_number_is_empty() {
        let db = TestDatabase::new().await;
        for _ in 0..3 {
            db.db()
                .create_employee(EmployeeFactory::create("Ops"))
                .await
                .unwrap();
        }

        let filter = EmployeeFilter::new(Some(i64::MAX), Some(100), None, None);
        let page = db.db().find_employee_page(&filter).await.unwrap();
        assert_eq!(page.total_count, 3);
        assert!(page.items.is_empty());
    }

    #[tokio::test]
    async fn test_page_size_at_maximum() {
        let db = TestDatabase::new().await;
        for _ in 0..101 {
            db.db()
                .create_employee(EmployeeFactory::create("Ops"))
                .await
                .unwrap();
        }

        let filter = EmployeeFilter::new(Some(1), Some(100), None, None);
        let page = db.db().find_employee_page(&filter).await.unwrap();
        assert_eq!(filter.page_size, 100);
        assert_eq!(page.total_count, 101);
        assert_eq!(page.items.len(), 100);

        let filter = EmployeeFilter::new(Some(2), Some(100), None, None);
        let page = db.db().find_employee_page(&filter).await.unwrap();
        assert_eq!(page.items.len(), 1);
    }
}
