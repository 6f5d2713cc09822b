/**
 * Server Initialization
 *
 * Builds the application from a `ServerConfig`:
 *
 * 1. Create the token codec from the configured secret
 * 2. Pick the credential store (PostgreSQL when `DATABASE_URL` is set,
 *    in-memory otherwise)
 * 3. Connect the store; any failure aborts startup
 * 4. Create the router
 */

use std::sync::Arc;

use axum::Router;

use crate::backend::auth::sessions::TokenCodec;
use crate::backend::error::BackendError;
use crate::backend::routes::create_router;
use crate::backend::server::config::ServerConfig;
use crate::backend::server::state::AppState;
use crate::backend::store::{
    CredentialStore, MemoryCredentialStore, PgCredentialStore, StoreError,
};

/// Create and configure the Axum application
///
/// # Errors
///
/// - `BackendError::Token` if the secret is empty
/// - `BackendError::Store` if the store cannot be created or connected
pub async fn create_app(config: &ServerConfig) -> Result<Router<()>, BackendError> {
    tracing::info!("Initializing favourites API server");

    let tokens = TokenCodec::new(&config.jwt_secret)?;
    let store = build_store(config)?;
    store.connect().await?;

    let app = create_router(AppState::new(tokens, store));
    tracing::info!("Router configured");

    Ok(app)
}

/// Select the credential store adapter for `config`
pub fn build_store(config: &ServerConfig) -> Result<Arc<dyn CredentialStore>, StoreError> {
    match &config.database_url {
        Some(url) => Ok(Arc::new(PgCredentialStore::new(url, config.bcrypt_cost)?)),
        None => {
            tracing::warn!("DATABASE_URL not set. Accounts will be kept in memory only.");
            Ok(Arc::new(MemoryCredentialStore::new(config.bcrypt_cost)))
        }
    }
}
