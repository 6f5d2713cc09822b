//! Backend Error Module
//!
//! This module defines error types specific to the backend server.
//! These errors are returned from HTTP handlers and converted to responses.
//!
//! # Architecture
//!
//! - **`types`** - Error type definitions, status codes and body shapes
//! - **`conversion`** - `IntoResponse` implementation
//!
//! # Response Bodies
//!
//! The API keeps the body shapes its clients already parse:
//!
//! - registration failures → `{"Error": "..."}`
//! - everything else → `{"msg": "..."}`

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::BackendError;
