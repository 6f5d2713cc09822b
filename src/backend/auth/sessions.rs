/**
 * Token Codec
 *
 * This module issues and verifies the signed tokens handed out at login.
 *
 * Tokens are HS256 JWTs signed with a single process-wide secret. The claims
 * are a snapshot of the user at login time (`_id`, `userName`, `password`,
 * where `password` is the stored bcrypt hash). No expiry is set, so a token
 * stays valid until the secret changes.
 */

use std::collections::HashSet;
use std::fmt;

use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::backend::auth::users::User;

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    #[serde(rename = "_id")]
    pub id: String,
    /// Username
    #[serde(rename = "userName")]
    pub user_name: String,
    /// Stored password representation (bcrypt hash)
    pub password: String,
}

impl From<&User> for Claims {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            user_name: user.user_name.clone(),
            password: user.password_hash.clone(),
        }
    }
}

/// Why a presented token was not accepted
///
/// Only used for logging; every variant ends up as 401 at the route guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenRejection {
    /// No token was presented
    Absent,
    /// The token could not be parsed or decoded
    Malformed,
    /// The signature does not match the configured secret
    BadSignature,
}

impl fmt::Display for TokenRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Self::Absent => "absent",
            Self::Malformed => "malformed",
            Self::BadSignature => "signature mismatch",
        };
        f.write_str(reason)
    }
}

/// Token codec errors
#[derive(Debug, Error)]
pub enum TokenError {
    /// The signing secret is empty
    #[error("JWT secret is not configured")]
    MissingSecret,

    /// Signing failed
    #[error("Failed to sign token: {0}")]
    Encode(#[source] jsonwebtoken::errors::Error),
}

/// Issues and verifies signed tokens with one symmetric secret
#[derive(Clone)]
pub struct TokenCodec {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenCodec").finish_non_exhaustive()
    }
}

impl TokenCodec {
    /// Create a codec for the given secret
    ///
    /// # Errors
    /// `TokenError::MissingSecret` if the secret is empty or whitespace.
    pub fn new(secret: &str) -> Result<Self, TokenError> {
        if secret.trim().is_empty() {
            return Err(TokenError::MissingSecret);
        }

        let mut validation = Validation::new(Algorithm::HS256);
        // Issued tokens carry no registered claims.
        validation.required_spec_claims = HashSet::new();
        validation.validate_exp = false;

        Ok(Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        })
    }

    /// Sign a token carrying `claims`
    ///
    /// Deterministic for a given secret and claims.
    pub fn issue(&self, claims: &Claims) -> Result<String, TokenError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding).map_err(TokenError::Encode)
    }

    /// Verify a token and return its claims unchanged
    pub fn verify(&self, token: &str) -> Result<Claims, TokenRejection> {
        if token.is_empty() {
            return Err(TokenRejection::Absent);
        }

        decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature => TokenRejection::BadSignature,
                _ => TokenRejection::Malformed,
            })
    }
}
