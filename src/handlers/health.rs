use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument};

use crate::state::AppState;

// ===== RESPONSE DTOs =====

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: i64,
    pub database: DatabaseStatus,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DatabaseStatus {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<u64>,
}

// ===== HANDLERS =====

/// GET /health
/// Liveness plus a store connectivity probe. Responds 200 when the store
/// answers the ping, 503 degraded when it does not.
#[instrument(skip(state), fields(service = "/health"))]
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let timestamp = chrono::Utc::now().timestamp();

    match state.store.ping().await {
        Ok(health) => {
            info!(latency_ms = health.latency_ms, "Health check passed");

            let response = HealthResponse {
                status: "healthy".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                timestamp,
                database: DatabaseStatus {
                    status: "healthy".to_string(),
                    latency_ms: Some(health.latency_ms),
                },
            };
            (StatusCode::OK, Json(response))
        }
        Err(err) => {
            error!(
                error = %err,
                code = err.error_code(),
                "Health check store ping failed"
            );

            let response = HealthResponse {
                status: "degraded".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                timestamp,
                database: DatabaseStatus {
                    status: "unreachable".to_string(),
                    latency_ms: None,
                },
            };
            (StatusCode::SERVICE_UNAVAILABLE, Json(response))
        }
    }
}
