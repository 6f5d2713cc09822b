/**
 * User Model
 *
 * The stored user record returned by a credential store.
 */

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// User struct representing a stored user
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID)
    pub id: Uuid,
    /// User name (unique per store)
    pub user_name: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}
