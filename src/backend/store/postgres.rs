/**
 * PostgreSQL Credential Store
 *
 * Users live in `users`, favourites in `favourites` (one row per user/item,
 * ordered by an insertion sequence). The schema is created by the embedded
 * migrations in `migrations/` when `connect` runs.
 */

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::postgres::{PgConnection, PgPool, PgPoolOptions};
use uuid::Uuid;

use super::{registered_message, CredentialStore, StoreError, MAX_FAVOURITES};
use crate::backend::auth::users::User;
use crate::shared::{Credentials, FavouriteList, Registration};

/// sqlx-backed `CredentialStore`
#[derive(Debug, Clone)]
pub struct PgCredentialStore {
    pool: PgPool,
    bcrypt_cost: u32,
}

impl PgCredentialStore {
    /// Create a store for `database_url`
    ///
    /// The pool connects lazily; call `connect` to open and migrate it.
    ///
    /// # Errors
    /// Fails if the URL cannot be parsed.
    pub fn new(database_url: &str, bcrypt_cost: u32) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(10))
            .connect_lazy(database_url)?;
        Ok(Self::from_pool(pool, bcrypt_cost))
    }

    /// Wrap an existing pool
    pub fn from_pool(pool: PgPool, bcrypt_cost: u32) -> Self {
        Self { pool, bcrypt_cost }
    }

    /// The underlying connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    async fn user_exists(conn: &mut PgConnection, user_id: Uuid) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE id = $1)")
            .bind(user_id)
            .fetch_one(&mut *conn)
            .await
    }

    async fn list_favourites(
        conn: &mut PgConnection,
        user_id: Uuid,
    ) -> Result<FavouriteList, sqlx::Error> {
        sqlx::query_scalar::<_, String>(
            "SELECT item_id FROM favourites WHERE user_id = $1 ORDER BY position",
        )
        .bind(user_id)
        .fetch_all(&mut *conn)
        .await
    }

    async fn try_get_favourites(&self, user_id: Uuid) -> Result<Option<FavouriteList>, sqlx::Error> {
        let mut conn = self.pool.acquire().await?;
        if !Self::user_exists(&mut conn, user_id).await? {
            return Ok(None);
        }
        Self::list_favourites(&mut conn, user_id).await.map(Some)
    }

    /// Returns `None` when the user does not exist or the list is full.
    async fn try_add_favourite(
        &self,
        user_id: Uuid,
        item_id: &str,
    ) -> Result<Option<FavouriteList>, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        // Lock the owner row so concurrent adds cannot overshoot the limit.
        let owner = sqlx::query_scalar::<_, Uuid>("SELECT id FROM users WHERE id = $1 FOR UPDATE")
            .bind(user_id)
            .fetch_optional(&mut *tx)
            .await?;
        if owner.is_none() {
            return Ok(None);
        }

        let favourites = Self::list_favourites(&mut tx, user_id).await?;
        if !favourites.iter().any(|existing| existing == item_id) {
            if favourites.len() >= MAX_FAVOURITES {
                return Ok(None);
            }
            sqlx::query(
                "INSERT INTO favourites (user_id, item_id) VALUES ($1, $2) ON CONFLICT DO NOTHING",
            )
            .bind(user_id)
            .bind(item_id)
            .execute(&mut *tx)
            .await?;
        }

        let favourites = Self::list_favourites(&mut tx, user_id).await?;
        tx.commit().await?;
        Ok(Some(favourites))
    }

    async fn try_remove_favourite(
        &self,
        user_id: Uuid,
        item_id: &str,
    ) -> Result<Option<FavouriteList>, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        if !Self::user_exists(&mut tx, user_id).await? {
            return Ok(None);
        }

        sqlx::query("DELETE FROM favourites WHERE user_id = $1 AND item_id = $2")
            .bind(user_id)
            .bind(item_id)
            .execute(&mut *tx)
            .await?;

        let favourites = Self::list_favourites(&mut tx, user_id).await?;
        tx.commit().await?;
        Ok(Some(favourites))
    }
}

#[async_trait]
impl CredentialStore for PgCredentialStore {
    async fn connect(&self) -> Result<(), StoreError> {
        tracing::info!("Connecting to database...");
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        tracing::info!("Database connection pool created successfully");

        tracing::info!("Running database migrations...");
        sqlx::migrate!().run(&self.pool).await?;
        tracing::info!("Database migrations completed successfully");
        Ok(())
    }

    async fn register_user(&self, registration: &Registration) -> Result<String, StoreError> {
        registration.validate()?;

        let password_hash = bcrypt::hash(&registration.password, self.bcrypt_cost)?;

        let result = sqlx::query(
            r#"
            INSERT INTO users (id, user_name, password_hash, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&registration.user_name)
        .bind(&password_hash)
        .bind(Utc::now())
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(registered_message(&registration.user_name)),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                Err(StoreError::UserNameTaken)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn check_user(&self, credentials: &Credentials) -> Result<User, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, user_name, password_hash, created_at
            FROM users
            WHERE user_name = $1
            "#,
        )
        .bind(&credentials.user_name)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| StoreError::UnknownUser(credentials.user_name.clone()))?;

        if !bcrypt::verify(&credentials.password, &user.password_hash)? {
            return Err(StoreError::IncorrectPassword(credentials.user_name.clone()));
        }

        Ok(user)
    }

    async fn get_favourites(&self, user_id: &str) -> Result<FavouriteList, StoreError> {
        let unavailable = || StoreError::FavouritesUnavailable(user_id.to_string());
        let id = Uuid::parse_str(user_id).map_err(|_| unavailable())?;

        match self.try_get_favourites(id).await {
            Ok(Some(favourites)) => Ok(favourites),
            Ok(None) => Err(unavailable()),
            Err(e) => {
                tracing::error!("Failed to load favourites for {}: {:?}", user_id, e);
                Err(unavailable())
            }
        }
    }

    async fn add_favourite(
        &self,
        user_id: &str,
        item_id: &str,
    ) -> Result<FavouriteList, StoreError> {
        let not_updated = || StoreError::FavouritesNotUpdated(user_id.to_string());
        let id = Uuid::parse_str(user_id).map_err(|_| not_updated())?;

        match self.try_add_favourite(id, item_id).await {
            Ok(Some(favourites)) => Ok(favourites),
            Ok(None) => Err(not_updated()),
            Err(e) => {
                tracing::error!("Failed to add favourite for {}: {:?}", user_id, e);
                Err(not_updated())
            }
        }
    }

    async fn remove_favourite(
        &self,
        user_id: &str,
        item_id: &str,
    ) -> Result<FavouriteList, StoreError> {
        let not_updated = || StoreError::FavouritesNotUpdated(user_id.to_string());
        let id = Uuid::parse_str(user_id).map_err(|_| not_updated())?;

        match self.try_remove_favourite(id, item_id).await {
            Ok(Some(favourites)) => Ok(favourites),
            Ok(None) => Err(not_updated()),
            Err(e) => {
                tracing::error!("Failed to remove favourite for {}: {:?}", user_id, e);
                Err(not_updated())
            }
        }
    }
}
