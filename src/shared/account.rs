//! Account Data Structures
//!
//! Bodies for `POST /api/user/register` and `POST /api/user/login`.
//! Field names follow the public JSON contract (`userName`, `password2`).

use serde::{Deserialize, Serialize};

use crate::shared::error::SharedError;

/// Registration request
///
/// `password2` is the optional confirmation field. When present it must
/// match `password`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    /// Requested user name (unique per store)
    #[serde(default)]
    pub user_name: String,
    /// Plaintext password, hashed by the store before it is persisted
    #[serde(default)]
    pub password: String,
    /// Password confirmation
    #[serde(default, rename = "password2", skip_serializing_if = "Option::is_none")]
    pub password_confirmation: Option<String>,
}

impl Registration {
    /// Build a registration without a confirmation field.
    pub fn new(user_name: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            user_name: user_name.into(),
            password: password.into(),
            password_confirmation: None,
        }
    }

    /// Attach a confirmation password.
    pub fn with_confirmation(mut self, confirmation: impl Into<String>) -> Self {
        self.password_confirmation = Some(confirmation.into());
        self
    }

    /// True unless a confirmation was supplied and it differs from `password`.
    pub fn passwords_match(&self) -> bool {
        self.password_confirmation
            .as_deref()
            .map_or(true, |confirmation| confirmation == self.password)
    }

    /// Check the fields a store needs before it creates an account.
    ///
    /// The confirmation check runs first so a client sees the mismatch even
    /// when other fields are also wrong.
    pub fn validate(&self) -> Result<(), SharedError> {
        if !self.passwords_match() {
            return Err(SharedError::validation("password2", "Passwords do not match"));
        }
        if self.user_name.trim().is_empty() {
            return Err(SharedError::validation("userName", "User name is required"));
        }
        if self.password.is_empty() {
            return Err(SharedError::validation("password", "Password is required"));
        }
        Ok(())
    }
}

/// Login request
///
/// Missing fields decode as empty strings so the store rejects them like
/// any other bad credentials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub password: String,
}

impl Credentials {
    pub fn new(user_name: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            user_name: user_name.into(),
            password: password.into(),
        }
    }
}

/// Login response
///
/// Returned by a successful login. `token` goes into the `Authorization`
/// header of later requests as `JWT <token>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
}
