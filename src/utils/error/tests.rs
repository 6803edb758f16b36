//! Tests for error handling

#[cfg(test)]
mod tests {
    use super::super::types::ServiceError;
    use actix_web::ResponseError;
    use actix_web::body::to_bytes;
    use actix_web::http::StatusCode;

    // ==================== Helper Function Tests ====================

    #[test]
    fn test_not_found_helper() {
        let error = ServiceError::not_found("Employee with id 7 not found");
        assert!(matches!(error, ServiceError::NotFound(msg) if msg == "Employee with id 7 not found"));
    }

    #[test]
    fn test_conflict_helper() {
        let error = ServiceError::conflict("Email a@b.com already exists");
        assert!(error.is_conflict());
        assert_eq!(error.to_string(), "Email a@b.com already exists");
    }

    #[test]
    fn test_internal_display_is_prefixed() {
        let error = ServiceError::internal("boom");
        assert_eq!(error.to_string(), "Internal server error: boom");
    }

    // ==================== Status Mapping Tests ====================

    #[test]
    fn test_client_error_status_codes() {
        assert_eq!(
            ServiceError::validation("bad").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ServiceError::bad_request("bad").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ServiceError::conflict("dup").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ServiceError::auth("nope").status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ServiceError::not_found("gone").status_code(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_server_error_status_codes() {
        assert_eq!(
            ServiceError::internal("x").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ServiceError::config("x").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ServiceError::Database(sea_orm::DbErr::Custom("x".to_string())).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    // ==================== Response Body Tests ====================

    #[tokio::test]
    async fn test_not_found_body_has_message_only() {
        let response = ServiceError::not_found("Employee with id 3 not found").error_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = to_bytes(response.into_body()).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["message"], "Employee with id 3 not found");
        assert!(body.get("error").is_none());
    }

    #[tokio::test]
    async fn test_internal_body_has_generic_message_and_detail() {
        let response = ServiceError::internal("disk on fire").error_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = to_bytes(response.into_body()).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["message"], "Internal server error");
        assert!(body["error"].as_str().unwrap().contains("disk on fire"));
    }
}
