#[cfg(test)]
mod error_tests {
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use dispensary_backend::errors::errors::{ErrorBody, ServiceError, ServiceResult};
    use serde_json;

    // Test error display messages
    #[test]
    fn test_error_display_messages() {
        let error = ServiceError::StoreQuery("relation \"eps\" does not exist".to_string());
        assert_eq!(
            error.to_string(),
            "Store query failed: relation \"eps\" does not exist"
        );

        let error = ServiceError::StoreUnavailable;
        assert_eq!(error.to_string(), "Failed to reach the data store");

        let error =
            ServiceError::Configuration("DB_MAX_CONNECTIONS must be at least 1".to_string());
        assert_eq!(
            error.to_string(),
            "Configuration error: DB_MAX_CONNECTIONS must be at least 1"
        );
    }

    // Test HTTP status codes
    #[test]
    fn test_status_codes() {
        assert_eq!(
            ServiceError::StoreQuery("timeout".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ServiceError::StoreUnavailable.status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            ServiceError::Configuration("bad value".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    // Test error codes
    #[test]
    fn test_error_codes() {
        assert_eq!(
            ServiceError::StoreQuery("timeout".to_string()).error_code(),
            "STORE_QUERY_FAILED"
        );
        assert_eq!(
            ServiceError::StoreUnavailable.error_code(),
            "STORE_UNAVAILABLE"
        );
        assert_eq!(
            ServiceError::Configuration("bad value".to_string()).error_code(),
            "CONFIGURATION_ERROR"
        );
    }

    #[test]
    fn test_error_code_uniqueness() {
        use std::collections::HashSet;

        let error_codes: Vec<&str> = vec![
            ServiceError::StoreQuery("test".to_string()).error_code(),
            ServiceError::StoreUnavailable.error_code(),
            ServiceError::Configuration("test".to_string()).error_code(),
        ];

        let unique_codes: HashSet<&str> = error_codes.iter().copied().collect();
        assert_eq!(
            error_codes.len(),
            unique_codes.len(),
            "Error codes must be unique"
        );
    }

    // Test that client-facing messages never carry query detail
    #[test]
    fn test_public_message_hides_detail() {
        let error = ServiceError::StoreQuery(
            "connection reset by peer at db.internal:5432".to_string(),
        );

        assert!(!error.public_message().contains("db.internal"));
        assert!(!error.public_message().is_empty());
    }

    // Test Axum response integration
    #[test]
    fn test_into_response_status_code() {
        let error = ServiceError::StoreQuery("boom".to_string());
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_into_response_store_unavailable() {
        let error = ServiceError::StoreUnavailable;
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_into_response_body_is_generic() {
        let error = ServiceError::StoreQuery("password authentication failed".to_string());
        let response = error.into_response();

        let body =
            tokio_test::block_on(axum::body::to_bytes(response.into_body(), usize::MAX)).unwrap();
        let parsed: ErrorBody = serde_json::from_slice(&body).unwrap();

        assert_eq!(parsed.error, "The requested listing could not be loaded");
        assert!(!parsed.error.contains("password"));
    }

    // Test conversion from sqlx errors
    #[test]
    fn test_from_sqlx_row_not_found() {
        let error: ServiceError = sqlx::Error::RowNotFound.into();
        assert!(matches!(error, ServiceError::StoreQuery(_)));
    }

    #[test]
    fn test_from_sqlx_pool_timeout() {
        let error: ServiceError = sqlx::Error::PoolTimedOut.into();
        assert!(matches!(error, ServiceError::StoreUnavailable));
    }

    #[test]
    fn test_from_sqlx_pool_closed() {
        let error: ServiceError = sqlx::Error::PoolClosed.into();
        assert!(matches!(error, ServiceError::StoreUnavailable));
    }

    #[test]
    fn test_from_sqlx_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let error: ServiceError = sqlx::Error::Io(io).into();
        assert!(matches!(error, ServiceError::StoreUnavailable));
    }

    #[test]
    fn test_from_sqlx_protocol_error_keeps_detail_for_logs() {
        let error: ServiceError = sqlx::Error::Protocol("unexpected message".to_string()).into();

        match error {
            ServiceError::StoreQuery(detail) => assert!(detail.contains("unexpected message")),
            other => panic!("expected StoreQuery, got {:?}", other),
        }
    }

    // Test error body serialization round trip
    #[test]
    fn test_error_body_serialization() {
        let body = ErrorBody {
            error: "Unable to load EPS records".to_string(),
        };

        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"error":"Unable to load EPS records"}"#);
    }

    #[test]
    fn test_error_body_deserialization() {
        let json = r#"{"error":"Unable to load organizations"}"#;
        let body: ErrorBody = serde_json::from_str(json).unwrap();
        assert_eq!(body.error, "Unable to load organizations");
    }

    // Test ServiceResult type alias
    #[test]
    fn test_service_result_ok() {
        let result: ServiceResult<i32> = Ok(42);
        assert!(result.is_ok());
        assert_eq!(result.unwrap(), 42);
    }

    #[test]
    fn test_service_result_err() {
        let result: ServiceResult<i32> = Err(ServiceError::StoreUnavailable);
        assert!(result.is_err());
        assert_eq!(
            result.unwrap_err().to_string(),
            "Failed to reach the data store"
        );
    }

    // Test that all errors implement Error trait
    #[test]
    fn test_error_trait_implementation() {
        let error: Box<dyn std::error::Error> = Box::new(ServiceError::StoreUnavailable);
        assert!(!error.to_string().is_empty());
    }

    // Test error formatting consistency
    #[test]
    fn test_error_message_formatting() {
        let error = ServiceError::StoreQuery("syntax error at position 12".to_string());
        let display = format!("{}", error);
        let debug = format!("{:?}", error);

        assert!(display.contains("syntax error"));
        assert!(debug.contains("StoreQuery"));
    }
}
