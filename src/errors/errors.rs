use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Main error type for the dispensary read-side API
#[derive(Debug)]
pub enum ServiceError {
    /// A listing query against the store failed. Carries the underlying
    /// detail for logs; the detail is never serialized to clients.
    StoreQuery(String),

    /// The store could not be reached at all (pool exhausted, connection
    /// refused, socket error).
    StoreUnavailable,

    /// Invalid startup configuration (bad pool sizing, malformed env vars).
    Configuration(String),
}

/// Error body sent to clients: a single generic `error` string.
///
/// Listing routes whose success shape is an object extend this with the
/// empty fields of their envelope so callers can parse one shape whether or
/// not the call succeeded.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceError::StoreQuery(detail) => write!(f, "Store query failed: {}", detail),
            ServiceError::StoreUnavailable => write!(f, "Failed to reach the data store"),
            ServiceError::Configuration(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for ServiceError {}

impl ServiceError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::StoreQuery(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ServiceError::StoreUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            ServiceError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code string for structured logs
    pub fn error_code(&self) -> &'static str {
        match self {
            ServiceError::StoreQuery(_) => "STORE_QUERY_FAILED",
            ServiceError::StoreUnavailable => "STORE_UNAVAILABLE",
            ServiceError::Configuration(_) => "CONFIGURATION_ERROR",
        }
    }

    /// Generic message safe to surface to clients. Store and query detail
    /// stays in the logs only.
    pub fn public_message(&self) -> &'static str {
        match self {
            ServiceError::StoreQuery(_) => "The requested listing could not be loaded",
            ServiceError::StoreUnavailable => "The data store is currently unavailable",
            ServiceError::Configuration(_) => "The service is misconfigured",
        }
    }
}

/// Implement IntoResponse for Axum integration
impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            error: self.public_message().to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// Conversion from sqlx errors
impl From<sqlx::Error> for ServiceError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => ServiceError::StoreUnavailable,
            sqlx::Error::Io(_) => ServiceError::StoreUnavailable,
            _ => ServiceError::StoreQuery(err.to_string()),
        }
    }
}

/// Type alias for Results using ServiceError
pub type ServiceResult<T> = Result<T, ServiceError>;
