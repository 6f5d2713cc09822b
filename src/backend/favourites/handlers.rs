/**
 * Favourites Handlers
 *
 * GET    /api/user/favourites
 * PUT    /api/user/favourites/{id}
 * DELETE /api/user/favourites/{id}
 *
 * 1. `auth_middleware` has already verified the token
 * 2. `AuthUser` supplies the caller's id from the token claims
 * 3. The store reads or changes that id's list and the new list is returned
 *
 * Store failures come back as `{"msg": <store message>}`. Read and remove
 * answer with 200, add answers with 404.
 */

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::backend::error::BackendError;
use crate::backend::middleware::auth::AuthUser;
use crate::backend::store::CredentialStore;
use crate::shared::FavouriteList;

/// Get the favourites of the current user
pub async fn get_favourites(
    State(store): State<Arc<dyn CredentialStore>>,
    AuthUser(user): AuthUser,
) -> Result<Json<FavouriteList>, BackendError> {
    let favourites = store.get_favourites(&user.id).await.map_err(|e| {
        tracing::warn!("Failed to read favourites: {}", e);
        BackendError::favourites(StatusCode::OK, e)
    })?;

    tracing::debug!("Returning {} favourites for {}", favourites.len(), user.id);
    Ok(Json(favourites))
}

/// Add an item to the favourites of the current user
pub async fn add_favourite(
    State(store): State<Arc<dyn CredentialStore>>,
    AuthUser(user): AuthUser,
    Path(item_id): Path<String>,
) -> Result<Json<FavouriteList>, BackendError> {
    let favourites = store.add_favourite(&user.id, &item_id).await.map_err(|e| {
        tracing::warn!("Failed to add favourite {}: {}", item_id, e);
        BackendError::favourites(StatusCode::NOT_FOUND, e)
    })?;

    tracing::info!("Added favourite {} for {}", item_id, user.id);
    Ok(Json(favourites))
}

/// Remove an item from the favourites of the current user
pub async fn remove_favourite(
    State(store): State<Arc<dyn CredentialStore>>,
    AuthUser(user): AuthUser,
    Path(item_id): Path<String>,
) -> Result<Json<FavouriteList>, BackendError> {
    let favourites = store
        .remove_favourite(&user.id, &item_id)
        .await
        .map_err(|e| {
            tracing::warn!("Failed to remove favourite {}: {}", item_id, e);
            BackendError::favourites(StatusCode::OK, e)
        })?;

    tracing::info!("Removed favourite {} for {}", item_id, user.id);
    Ok(Json(favourites))
}
