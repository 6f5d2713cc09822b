/**
 * Application State Management
 *
 * `AppState` is the central state container handed to the router. It holds
 * the token codec and the credential store, both read-only after startup.
 *
 * The `FromRef` implementations let handlers extract just the part they
 * need, e.g. `State(store): State<Arc<dyn CredentialStore>>`.
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::backend::auth::sessions::TokenCodec;
use crate::backend::store::CredentialStore;

/// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    /// Token codec used by login and the auth middleware
    pub tokens: TokenCodec,

    /// Credential store (PostgreSQL or in-memory)
    pub store: Arc<dyn CredentialStore>,
}

impl AppState {
    pub fn new(tokens: TokenCodec, store: Arc<dyn CredentialStore>) -> Self {
        Self { tokens, store }
    }
}

impl FromRef<AppState> for TokenCodec {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tokens.clone()
    }
}

impl FromRef<AppState> for Arc<dyn CredentialStore> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.store.clone()
    }
}
