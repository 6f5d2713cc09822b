/**
 * Router Configuration
 *
 * Combines the API routes with the cross-cutting layers:
 *
 * 1. API routes (public + token-protected)
 * 2. Fallback handler (404)
 * 3. CORS (any origin) and request tracing
 */

use axum::{http::StatusCode, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = configure_api_routes(Router::new(), &app_state);

    // Fallback handler for 404
    let router = router.fallback(|| async { (StatusCode::NOT_FOUND, "404 Not Found") });

    router
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
