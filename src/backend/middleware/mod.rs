//! Middleware Module
//!
//! HTTP middleware applied before handlers run.
//!
//! - **`auth`** - Token authentication for the favourites routes

pub mod auth;

pub use auth::{auth_middleware, authenticate, AuthUser, AuthenticatedUser, AUTH_SCHEME};
