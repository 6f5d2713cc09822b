//! Favourites API - Main Library
//!
//! A small authenticated CRUD service: users register, log in to obtain a
//! signed token, and use that token to manage a personal list of favourite
//! item identifiers.
//!
//! # Module Structure
//!
//! - **`shared`** - Wire types shared between the server and its clients
//!   - Registration, login and message bodies
//!
//! - **`backend`** - Server-side code
//!   - Axum HTTP server, routing and middleware
//!   - JWT issuance and verification
//!   - Credential store port with PostgreSQL and in-memory adapters
//!
//! # Usage
//!
//! ```rust,no_run
//! use favourites_api::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await?;
//! let listener = tokio::net::TcpListener::bind(config.socket_addr()).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `Result<T, E>` with `thiserror` enums for every fallible layer
//! - `backend::error::BackendError` converts into HTTP responses

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
