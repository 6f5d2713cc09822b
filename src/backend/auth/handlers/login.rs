/**
 * Login Handler
 *
 * POST /api/user/login
 *
 * 1. Verify credentials with `CredentialStore::check_user`
 * 2. Build token claims from the stored user
 * 3. Sign the token and return it
 *
 * Unknown user and wrong password produce the same 422 response, so a
 * client cannot tell which user names exist.
 */

use axum::{extract::State, response::Json};

use crate::backend::auth::sessions::Claims;
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;
use crate::shared::{Credentials, LoginResponse};

/// Message returned with a freshly issued token
pub const LOGIN_SUCCESS_MESSAGE: &str = "Login Successful";

/// Login handler
///
/// # Returns
///
/// `200 {"message": "Login Successful", "token": "<jwt>"}`
///
/// # Errors
///
/// * `422 {"msg": "Error 422: User not found."}` - unknown user or wrong password
/// * `500` - token signing failed
///
/// # Example Request
///
/// ```http
/// POST /api/user/login HTTP/1.1
/// Content-Type: application/json
///
/// { "userName": "alice", "password": "p1" }
/// ```
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<Credentials>,
) -> Result<Json<LoginResponse>, BackendError> {
    tracing::info!("Login request for: {}", request.user_name);

    let user = state.store.check_user(&request).await.map_err(|e| {
        tracing::warn!("Login failed: {}", e);
        BackendError::LoginFailed
    })?;

    let token = state.tokens.issue(&Claims::from(&user))?;

    tracing::info!("User logged in successfully: {} ({})", user.user_name, user.id);

    Ok(Json(LoginResponse {
        message: LOGIN_SUCCESS_MESSAGE.to_string(),
        token,
    }))
}
