use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, info, instrument};

use crate::datalayer::listings::molecules::sanitize_molecules;
use crate::errors::errors::ErrorBody;
use crate::state::AppState;

/// Generic client-facing message; query detail stays in the logs
const MOLECULES_ERROR: &str = "Unable to load product molecules";

/// GET /api/v1/molecules
/// Distinct molecule names across active products, ascending. Unlike the
/// other listings the success body is a bare JSON array, which the catalog
/// autocomplete consumes directly.
#[instrument(skip(state), fields(service = "/api/v1/molecules"))]
pub async fn list_molecules(State(state): State<AppState>) -> Response {
    match state.store.active_molecule_rows().await {
        Ok(raw) => {
            let molecules = sanitize_molecules(raw);

            info!(count = molecules.len(), "Molecule listing served");

            (StatusCode::OK, Json(molecules)).into_response()
        }
        Err(err) => {
            error!(
                error = %err,
                code = err.error_code(),
                "Molecule listing query failed"
            );

            let body = ErrorBody {
                error: MOLECULES_ERROR.to_string(),
            };
            (err.status_code(), Json(body)).into_response()
        }
    }
}
