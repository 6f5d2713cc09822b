//! Backend Module
//!
//! This module contains all server-side code for the favourites API.
//!
//! # Architecture
//!
//! The backend is organized into focused submodules:
//!
//! - **`server`** - Configuration, application state and app creation
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Token codec, user model, register/login handlers
//! - **`middleware`** - Token-based request authentication
//! - **`favourites`** - Handlers for the protected favourites routes
//! - **`store`** - Credential store port and its adapters
//! - **`error`** - Backend-specific error types
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── server/         - Config, state, initialization
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── middleware/     - Request middleware
//! ├── favourites/     - Favourites handlers
//! ├── store/          - Credential store
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! `AppState` holds the token codec and an `Arc<dyn CredentialStore>`.
//! Both are built once at startup and are read-only afterwards, so handlers
//! share them without locking.
//!
//! # Request Flow
//!
//! Registration and login go straight to their handlers. The favourites
//! routes sit behind `auth_middleware`, which verifies the `JWT` bearer token
//! and attaches the caller's identity before the handler runs.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Middleware for request processing
pub mod middleware;

/// Favourites handlers
pub mod favourites;

/// Credential store port and adapters
pub mod store;

/// Re-export commonly used types
pub use error::BackendError;
pub use routes::create_router;
pub use server::{create_app, AppState, ServerConfig};
pub use store::{CredentialStore, StoreError};
