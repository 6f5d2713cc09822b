//! Shared Error Types
//!
//! Errors raised while validating wire values before they reach a store.
//! The message is written for the client and is returned verbatim.
//!
//! # Usage
//!
//! ```rust
//! use favourites_api::shared::error::SharedError;
//!
//! let error = SharedError::validation("userName", "User name is required");
//! assert_eq!(error.to_string(), "User name is required");
//! ```
use thiserror::Error;

/// Shared error types that can occur in both client and server code
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// Data validation error
    #[error("{message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Name of the offending field
    pub fn field(&self) -> &str {
        match self {
            Self::ValidationError { field, .. } => field,
        }
    }
}
