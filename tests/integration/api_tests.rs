//! HTTP API integration tests
//!
//! Drives the full application over a migrated, seeded SQLite database.

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::http::header::{AUTHORIZATION, LOCATION};
    use actix_web::{test, web};
    use employee_management::config::{Config, StorageBackend};
    use employee_management::server::HttpServer;
    use serde_json::{Value, json};

    fn database_config(protect_employees: bool) -> Config {
        let mut config = Config::default();
        config.app.storage.backend = StorageBackend::Database;
        config.app.storage.database.url = "sqlite::memory:".to_string();
        config.app.storage.database.max_connections = 1;
        config.app.storage.seed = true;
        config.app.auth.protect_employee_routes = protect_employees;
        config
    }

    /// Log in and return the issued bearer token
    macro_rules! login {
        ($app:expr, $username:expr, $password:expr) => {{
            let req = test::TestRequest::post()
                .uri("/api/auth/login")
                .set_json(json!({"username": $username, "password": $password}))
                .to_request();
            let body: Value = test::call_and_read_body_json($app, req).await;
            body["token"]
                .as_str()
                .expect("login should issue a token")
                .to_string()
        }};
    }

    #[actix_web::test]
    async fn test_seeded_database_serves_employees() {
        let server = HttpServer::new(&database_config(false)).await.unwrap();
        let app = test::init_service(HttpServer::create_app(web::Data::new(
            server.state().clone(),
        )))
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["storage"]["backend"], "sqlite");

        let req = test::TestRequest::get()
            .uri("/api/employees?pageSize=2")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["totalCount"], 3);
        assert_eq!(body["totalPages"], 2);
        assert_eq!(body["data"][0]["fullName"], "Bob Johnson");
        assert_eq!(body["data"][1]["fullName"], "Jane Smith");
    }

    #[actix_web::test]
    async fn test_register_login_and_manage_employee() {
        let server = HttpServer::new(&database_config(true)).await.unwrap();
        let app = test::init_service(HttpServer::create_app(web::Data::new(
            server.state().clone(),
        )))
        .await;

        let req = test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(json!({
                "username": "manager",
                "email": "manager@example.com",
                "password": "ManagerPassword1",
                "confirmPassword": "ManagerPassword1"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let token = login!(&app, "manager", "ManagerPassword1");
        let bearer = format!("Bearer {}", token);

        let req = test::TestRequest::post()
            .uri("/api/employees")
            .set_json(json!({
                "firstName": "Lin",
                "lastName": "Park",
                "email": "lin.park@example.com",
                "salary": 91000.25,
                "department": "IT"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let req = test::TestRequest::post()
            .uri("/api/employees")
            .insert_header((AUTHORIZATION, bearer.clone()))
            .set_json(json!({
                "firstName": "Lin",
                "lastName": "Park",
                "email": "lin.park@example.com",
                "salary": 91000.25,
                "department": "IT"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let location = resp
            .headers()
            .get(LOCATION)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        let created: Value = test::read_body_json(resp).await;
        assert_eq!(location, format!("/api/employees/{}", created["id"]));
        assert_eq!(created["salary"].as_f64(), Some(91000.25));

        let req = test::TestRequest::get()
            .uri("/api/employees/department/IT")
            .insert_header((AUTHORIZATION, bearer.clone()))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.as_array().unwrap().len(), 2);

        let req = test::TestRequest::delete()
            .uri(&location)
            .insert_header((AUTHORIZATION, bearer.clone()))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        let req = test::TestRequest::get()
            .uri(&location)
            .insert_header((AUTHORIZATION, bearer))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_seeded_credentials_log_in() {
        let server = HttpServer::new(&database_config(false)).await.unwrap();
        let app = test::init_service(HttpServer::create_app(web::Data::new(
            server.state().clone(),
        )))
        .await;

        let token = login!(&app, "admin", "AdminPassword123");
        let claims = server.state().auth.jwt().verify_token(&token).unwrap();
        assert_eq!(claims.username, "admin");
        assert_eq!(claims.role, "Admin");
    }
}
