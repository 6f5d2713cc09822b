//! Credential Store
//!
//! The system of record for user accounts and their favourites. Handlers only
//! talk to the [`CredentialStore`] trait; the concrete adapter is picked at
//! startup from the server configuration.
//!
//! # Adapters
//!
//! - **`postgres`** - `PgCredentialStore`, backed by sqlx and PostgreSQL
//! - **`memory`** - `MemoryCredentialStore`, process-local, used when no
//!   database is configured and in tests
//!
//! # Error Messages
//!
//! `StoreError` messages are written for clients. Handlers forward them
//! verbatim in response bodies.

use async_trait::async_trait;
use thiserror::Error;

use crate::backend::auth::users::User;
use crate::shared::{Credentials, FavouriteList, Registration, SharedError};

/// PostgreSQL adapter
pub mod postgres;

/// In-memory adapter
pub mod memory;

pub use memory::MemoryCredentialStore;
pub use postgres::PgCredentialStore;

/// Maximum number of favourites a single user may hold
pub const MAX_FAVOURITES: usize = 50;

/// Credential store errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// Registration input was rejected before touching storage
    #[error(transparent)]
    Invalid(#[from] SharedError),

    /// Another account already uses this user name
    #[error("User Name already taken")]
    UserNameTaken,

    /// No account with this user name
    #[error("Unable to find user {0}")]
    UnknownUser(String),

    /// Password does not match the stored hash
    #[error("Incorrect password for user {0}")]
    IncorrectPassword(String),

    /// Favourites could not be read for this user id
    #[error("Unable to get favourites for user with id: {0}")]
    FavouritesUnavailable(String),

    /// Favourites could not be changed for this user id
    #[error("Unable to update favourites for user with id: {0}")]
    FavouritesNotUpdated(String),

    /// bcrypt failed to hash or verify a password
    #[error("Password hashing error: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    /// Underlying database failure
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration failure during `connect`
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Storage port for accounts and favourites
///
/// All operations are asynchronous and independent; implementations must be
/// safe to share across concurrently running requests.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Establish the backing connection
    ///
    /// Called once at startup. The server does not accept requests until it
    /// succeeds.
    async fn connect(&self) -> Result<(), StoreError>;

    /// Create an account and return the success message
    async fn register_user(&self, registration: &Registration) -> Result<String, StoreError>;

    /// Verify credentials and return the stored user
    async fn check_user(&self, credentials: &Credentials) -> Result<User, StoreError>;

    /// Read the favourites of `user_id`
    async fn get_favourites(&self, user_id: &str) -> Result<FavouriteList, StoreError>;

    /// Add `item_id` to the favourites of `user_id` and return the new list
    async fn add_favourite(&self, user_id: &str, item_id: &str)
        -> Result<FavouriteList, StoreError>;

    /// Remove `item_id` from the favourites of `user_id` and return the new list
    async fn remove_favourite(
        &self,
        user_id: &str,
        item_id: &str,
    ) -> Result<FavouriteList, StoreError>;
}

/// Success message returned by `register_user`
pub fn registered_message(user_name: &str) -> String {
    format!("User {} successfully registered", user_name)
}
