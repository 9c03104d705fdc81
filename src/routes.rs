use axum::{Router, middleware, routing::get};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers::{eps, health, molecules, organizations};
use crate::middleware::{error_handling_middleware, request_id_middleware};
use crate::state::AppState;

/// Create the main application router with all routes and middleware.
/// Takes the shared state explicitly so callers decide which store backs
/// the listings.
pub fn create_router(state: AppState) -> Router {
    // Health routes
    let health_routes = Router::new().route("/health", get(health::health_check));

    // Listing routes - /api/v1
    let listing_routes = Router::new()
        .route(
            "/api/v1/organizations",
            get(organizations::list_organizations),
        )
        .route("/api/v1/eps", get(eps::list_eps))
        .route("/api/v1/molecules", get(molecules::list_molecules));

    // Main router combining all routes
    Router::new()
        .merge(health_routes)
        .merge(listing_routes)
        .layer(middleware::from_fn(error_handling_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
