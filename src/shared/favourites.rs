//! Favourites Data Structures
//!
//! A user's favourites are an ordered list of opaque item identifiers with
//! set semantics: an identifier appears at most once.

use serde::{Deserialize, Serialize};

/// The favourites of a single user, in insertion order.
pub type FavouriteList = Vec<String>;

/// Generic `{"msg": ...}` envelope
///
/// Used for the registration success message and for error bodies on the
/// login and favourites routes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub msg: String,
}

impl MessageResponse {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}
