/**
 * API Route Handlers
 *
 * Registration and login are public. The favourites routes are wrapped in
 * `auth_middleware`, so their handlers only run for requests carrying a
 * valid token.
 */

use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};

use crate::backend::auth::{login, register};
use crate::backend::favourites::{add_favourite, get_favourites, remove_favourite};
use crate::backend::middleware::auth_middleware;
use crate::backend::server::state::AppState;

/// Configure API routes
///
/// # Arguments
///
/// * `router` - The router to add routes to
/// * `app_state` - State handed to the auth middleware
pub fn configure_api_routes(router: Router<AppState>, app_state: &AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/api/user/favourites", get(get_favourites))
        .route(
            "/api/user/favourites/{id}",
            put(add_favourite).delete(remove_favourite),
        )
        .route_layer(middleware::from_fn_with_state(
            app_state.clone(),
            auth_middleware,
        ));

    router
        .route("/api/user/register", post(register))
        .route("/api/user/login", post(login))
        .merge(protected)
}
