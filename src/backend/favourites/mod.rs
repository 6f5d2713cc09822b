//! Favourites Module
//!
//! Handlers for a user's favourites list. All routes sit behind
//! `auth_middleware`; the caller's id from the token is the only key used.
//!
//! # Routes
//!
//! - `GET /api/user/favourites` - read the list
//! - `PUT /api/user/favourites/{id}` - add an item
//! - `DELETE /api/user/favourites/{id}` - remove an item
//!
//! # Failure Status Codes
//!
//! Read and remove report store failures with status 200 and a `{"msg"}`
//! body; add reports them with 404. Existing clients depend on these
//! codes.

/// HTTP handlers
pub mod handlers;

pub use handlers::{add_favourite, get_favourites, remove_favourite};
