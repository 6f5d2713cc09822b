//! Shared Module
//!
//! This module contains the request and response bodies exchanged over the
//! HTTP API. They carry no server-only dependencies, so clients can reuse
//! them to talk to the service.
//!
//! # Overview
//!
//! - **`account`** - Registration and login bodies
//! - **`favourites`** - Favourites list and the generic `{msg}` envelope
//! - **`error`** - Validation errors for wire values

/// Registration and login bodies
pub mod account;

/// Favourites bodies
pub mod favourites;

/// Shared error types
pub mod error;

/// Re-export commonly used types for convenience
pub use account::{Credentials, LoginResponse, Registration};
pub use error::SharedError;
pub use favourites::{FavouriteList, MessageResponse};
