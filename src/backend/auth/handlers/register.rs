/**
 * Registration Handler
 *
 * POST /api/user/register
 *
 * Delegates to `CredentialStore::register_user`. The store validates the
 * input (confirmation password, required fields, unique user name) and
 * hashes the password.
 */

use std::sync::Arc;

use axum::{extract::State, response::Json};

use crate::backend::error::BackendError;
use crate::backend::store::CredentialStore;
use crate::shared::{MessageResponse, Registration};

/// Registration handler
///
/// # Returns
///
/// `200 {"msg": "User <userName> successfully registered"}`
///
/// # Errors
///
/// `422 {"Error": <store message>}` for any store rejection, e.g.
/// "User Name already taken" or "Passwords do not match".
///
/// # Example Request
///
/// ```http
/// POST /api/user/register HTTP/1.1
/// Content-Type: application/json
///
/// { "userName": "alice", "password": "p1", "password2": "p1" }
/// ```
pub async fn register(
    State(store): State<Arc<dyn CredentialStore>>,
    Json(request): Json<Registration>,
) -> Result<Json<MessageResponse>, BackendError> {
    tracing::info!("Registration request for user name: {}", request.user_name);

    let message = store.register_user(&request).await.map_err(|e| {
        tracing::warn!("Registration rejected for {}: {}", request.user_name, e);
        BackendError::Registration(e)
    })?;

    tracing::info!("User registered: {}", request.user_name);
    Ok(Json(MessageResponse::new(message)))
}
