/**
 * Backend Error Types
 *
 * Each variant knows its HTTP status code and the JSON body the client
 * receives. Store messages are forwarded verbatim.
 *
 * # Status Code Mapping
 *
 * - `Registration` - 422, body `{"Error": ...}`
 * - `LoginFailed` - 422, body `{"msg": "Error 422: User not found."}`
 * - `Favourites` - per route (200 on read/remove, 404 on add)
 * - `Token`, `Config`, `Store`, `Io` - 500
 */

use axum::http::StatusCode;
use serde_json::{json, Value};
use thiserror::Error;

use crate::backend::auth::sessions::TokenError;
use crate::backend::server::config::ConfigError;
use crate::backend::store::StoreError;

/// Message returned for every failed login
pub const LOGIN_FAILED_MESSAGE: &str = "Error 422: User not found.";

/// Backend-specific error types
#[derive(Debug, Error)]
pub enum BackendError {
    /// The store refused to create the account
    #[error("Registration rejected: {0}")]
    Registration(#[source] StoreError),

    /// Unknown user or wrong password; the two are not distinguished
    #[error("{}", LOGIN_FAILED_MESSAGE)]
    LoginFailed,

    /// A favourites operation failed in the store
    #[error("Favourites error: {source}")]
    Favourites {
        /// HTTP status code for this route's failure
        status: StatusCode,
        /// Store failure
        #[source]
        source: StoreError,
    },

    /// Token signing failed
    #[error(transparent)]
    Token(#[from] TokenError),

    /// Invalid startup configuration
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Store failure outside a request (startup)
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Socket or listener failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl BackendError {
    /// Create a favourites error with the route's failure status
    pub fn favourites(status: StatusCode, source: StoreError) -> Self {
        Self::Favourites { status, source }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Registration(_) | Self::LoginFailed => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Favourites { status, .. } => *status,
            Self::Token(_) | Self::Config(_) | Self::Store(_) | Self::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the client-facing message
    pub fn message(&self) -> String {
        match self {
            Self::Registration(err) => err.to_string(),
            Self::Favourites { source, .. } => source.to_string(),
            Self::LoginFailed => LOGIN_FAILED_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }

    /// Get the JSON response body
    pub fn body(&self) -> Value {
        match self {
            Self::Registration(_) => json!({ "Error": self.message() }),
            _ => json!({ "msg": self.message() }),
        }
    }
}
