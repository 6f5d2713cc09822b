//! Server Module
//!
//! Everything needed to turn a configuration into a running Axum app.
//!
//! # Architecture
//!
//! - **`config`** - `ServerConfig`, loaded once from the environment
//! - **`state`** - `AppState` and its `FromRef` implementations
//! - **`init`** - Store selection and app creation
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: `ServerConfig::from_env`
//! 2. **Store Selection**: PostgreSQL or in-memory
//! 3. **Store Connection**: must succeed before the server listens
//! 4. **Router Creation**: routes, auth middleware, CORS and tracing layers

/// Server configuration loading
pub mod config;

/// Application state management
pub mod state;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use config::{ConfigError, ServerConfig};
pub use init::{build_store, create_app};
pub use state::AppState;
