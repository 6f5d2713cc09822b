//! In-memory credential store
//!
//! Keeps users and favourites in process memory behind a `tokio::sync::RwLock`.
//! Nothing survives a restart.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{registered_message, CredentialStore, StoreError, MAX_FAVOURITES};
use crate::backend::auth::users::User;
use crate::shared::{Credentials, FavouriteList, Registration};

#[derive(Debug, Default)]
struct MemoryState {
    /// Users keyed by user name
    users: HashMap<String, User>,
    /// Favourites keyed by user id
    favourites: HashMap<Uuid, FavouriteList>,
}

/// Process-local `CredentialStore`
#[derive(Debug)]
pub struct MemoryCredentialStore {
    bcrypt_cost: u32,
    state: RwLock<MemoryState>,
}

impl MemoryCredentialStore {
    /// Create an empty store hashing passwords with `bcrypt_cost`
    pub fn new(bcrypt_cost: u32) -> Self {
        Self {
            bcrypt_cost,
            state: RwLock::new(MemoryState::default()),
        }
    }
}

impl Default for MemoryCredentialStore {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn connect(&self) -> Result<(), StoreError> {
        tracing::info!("Using in-memory credential store");
        Ok(())
    }

    async fn register_user(&self, registration: &Registration) -> Result<String, StoreError> {
        registration.validate()?;

        if self.state.read().await.users.contains_key(&registration.user_name) {
            return Err(StoreError::UserNameTaken);
        }

        let password_hash = bcrypt::hash(&registration.password, self.bcrypt_cost)?;

        let mut state = self.state.write().await;
        // Re-check under the write lock; another request may have won the race.
        if state.users.contains_key(&registration.user_name) {
            return Err(StoreError::UserNameTaken);
        }

        let user = User {
            id: Uuid::new_v4(),
            user_name: registration.user_name.clone(),
            password_hash,
            created_at: Utc::now(),
        };
        state.favourites.insert(user.id, FavouriteList::new());
        state.users.insert(user.user_name.clone(), user);

        Ok(registered_message(&registration.user_name))
    }

    async fn check_user(&self, credentials: &Credentials) -> Result<User, StoreError> {
        let user = self
            .state
            .read()
            .await
            .users
            .get(&credentials.user_name)
            .cloned()
            .ok_or_else(|| StoreError::UnknownUser(credentials.user_name.clone()))?;

        if !bcrypt::verify(&credentials.password, &user.password_hash)? {
            return Err(StoreError::IncorrectPassword(credentials.user_name.clone()));
        }

        Ok(user)
    }

    async fn get_favourites(&self, user_id: &str) -> Result<FavouriteList, StoreError> {
        let unavailable = || StoreError::FavouritesUnavailable(user_id.to_string());
        let id = Uuid::parse_str(user_id).map_err(|_| unavailable())?;

        self.state
            .read()
            .await
            .favourites
            .get(&id)
            .cloned()
            .ok_or_else(unavailable)
    }

    async fn add_favourite(
        &self,
        user_id: &str,
        item_id: &str,
    ) -> Result<FavouriteList, StoreError> {
        let not_updated = || StoreError::FavouritesNotUpdated(user_id.to_string());
        let id = Uuid::parse_str(user_id).map_err(|_| not_updated())?;

        let mut state = self.state.write().await;
        let favourites = state.favourites.get_mut(&id).ok_or_else(not_updated)?;

        if !favourites.iter().any(|existing| existing == item_id) {
            if favourites.len() >= MAX_FAVOURITES {
                return Err(not_updated());
            }
            favourites.push(item_id.to_string());
        }

        Ok(favourites.clone())
    }

    async fn remove_favourite(
        &self,
        user_id: &str,
        item_id: &str,
    ) -> Result<FavouriteList, StoreError> {
        let not_updated = || StoreError::FavouritesNotUpdated(user_id.to_string());
        let id = Uuid::parse_str(user_id).map_err(|_| not_updated())?;

        let mut state = self.state.write().await;
        let favourites = state.favourites.get_mut(&id).ok_or_else(not_updated)?;
        favourites.retain(|existing| existing != item_id);

        Ok(favourites.clone())
    }
}
