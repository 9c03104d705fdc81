use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument};
use uuid::Uuid;

use crate::datalayer::listings::types::OrganizationRow;
use crate::state::AppState;

// ===== RESPONSE DTOs =====

/// Member aggregate, serialized under `_count` to match the payload the
/// dashboard already consumes
#[derive(Debug, Serialize, Deserialize)]
pub struct MemberCount {
    pub members: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct OrganizationSummary {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "_count")]
    pub member_count: MemberCount,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct OrganizationListResponse {
    pub count: usize,
    pub organizations: Vec<OrganizationSummary>,
}

/// Failure body mirrors the success envelope with empty collections, so
/// clients parse one shape either way
#[derive(Debug, Serialize, Deserialize)]
pub struct OrganizationListError {
    pub error: String,
    pub count: usize,
    pub organizations: Vec<OrganizationSummary>,
}

impl From<OrganizationRow> for OrganizationSummary {
    fn from(row: OrganizationRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            slug: row.slug,
            created_at: row.created_at,
            member_count: MemberCount {
                members: row.member_count,
            },
        }
    }
}

/// Generic client-facing message; query detail stays in the logs
const ORGANIZATIONS_ERROR: &str = "Unable to load organizations";

// ===== HANDLERS =====

/// GET /api/v1/organizations
/// List every organization with its member count
#[instrument(skip(state), fields(service = "/api/v1/organizations"))]
pub async fn list_organizations(State(state): State<AppState>) -> Response {
    match state.store.organization_rows().await {
        Ok(rows) => {
            let organizations: Vec<OrganizationSummary> =
                rows.into_iter().map(OrganizationSummary::from).collect();

            info!(count = organizations.len(), "Organization listing served");

            let body = OrganizationListResponse {
                count: organizations.len(),
                organizations,
            };
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(err) => {
            error!(
                error = %err,
                code = err.error_code(),
                "Organization listing query failed"
            );

            let body = OrganizationListError {
                error: ORGANIZATIONS_ERROR.to_string(),
                count: 0,
                organizations: Vec::new(),
            };
            (err.status_code(), Json(body)).into_response()
        }
    }
}
