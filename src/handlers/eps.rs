use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument};
use uuid::Uuid;

use crate::datalayer::listings::types::EpsRow;
use crate::state::AppState;

// ===== RESPONSE DTOs =====

#[derive(Debug, Serialize, Deserialize)]
pub struct EpsEntry {
    pub id: Uuid,
    pub code: String,
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EpsListResponse {
    pub eps: Vec<EpsEntry>,
}

/// Failure body mirrors the success envelope with an empty collection
#[derive(Debug, Serialize, Deserialize)]
pub struct EpsListError {
    pub error: String,
    pub eps: Vec<EpsEntry>,
}

impl From<EpsRow> for EpsEntry {
    fn from(row: EpsRow) -> Self {
        Self {
            id: row.id,
            code: row.code,
            name: row.name,
        }
    }
}

/// Generic client-facing message; query detail stays in the logs
const EPS_ERROR: &str = "Unable to load EPS records";

// ===== HANDLERS =====

/// GET /api/v1/eps
/// List active EPS records, ascending by name
#[instrument(skip(state), fields(service = "/api/v1/eps"))]
pub async fn list_eps(State(state): State<AppState>) -> Response {
    match state.store.active_eps_rows().await {
        Ok(rows) => {
            let eps: Vec<EpsEntry> = rows.into_iter().map(EpsEntry::from).collect();

            info!(count = eps.len(), "EPS listing served");

            (StatusCode::OK, Json(EpsListResponse { eps })).into_response()
        }
        Err(err) => {
            error!(
                error = %err,
                code = err.error_code(),
                "EPS listing query failed"
            );

            let body = EpsListError {
                error: EPS_ERROR.to_string(),
                eps: Vec::new(),
            };
            (err.status_code(), Json(body)).into_response()
        }
    }
}
