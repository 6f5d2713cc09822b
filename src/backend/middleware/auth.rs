/**
 * Authentication Middleware
 *
 * Protects the favourites routes. For each request:
 *
 * 1. Read `Authorization: JWT <token>` (the scheme keyword is
 *    case-insensitive)
 * 2. Verify the token with the `TokenCodec`
 * 3. On success, attach an `AuthenticatedUser` built from the token claims
 *
 * The identity is taken from the claims as-is; the store is not consulted.
 * A missing, malformed or wrongly signed token leaves the request
 * unauthenticated and the guard answers 401 before any handler runs.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};

use crate::backend::auth::sessions::{Claims, TokenCodec, TokenRejection};

/// Scheme keyword expected in the `Authorization` header
pub const AUTH_SCHEME: &str = "JWT";

/// Authenticated user data extracted from the JWT
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// User id (owning key for favourites)
    pub id: String,
    pub user_name: String,
    /// Stored password representation copied from the token
    pub password: String,
}

impl From<Claims> for AuthenticatedUser {
    fn from(claims: Claims) -> Self {
        Self {
            id: claims.id,
            user_name: claims.user_name,
            password: claims.password,
        }
    }
}

/// Extract the raw token from `Authorization: JWT <token>`
///
/// Returns `None` when the header is missing, not valid UTF-8, or uses a
/// different scheme.
pub fn extract_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?.trim();
    let (scheme, token) = value.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case(AUTH_SCHEME) {
        return None;
    }
    Some(token.trim())
}

/// Resolve the identity behind a request, if any
pub fn authenticate(
    tokens: &TokenCodec,
    headers: &HeaderMap,
) -> Result<AuthenticatedUser, TokenRejection> {
    let token = extract_token(headers).ok_or(TokenRejection::Absent)?;
    tokens.verify(token).map(AuthenticatedUser::from)
}

/// Authentication middleware
///
/// Returns 401 Unauthorized if the token is missing or invalid.
pub async fn auth_middleware(
    State(tokens): State<TokenCodec>,
    mut request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let user = authenticate(&tokens, request.headers()).map_err(|rejection| {
        tracing::warn!("Rejected request to {}: token {}", request.uri().path(), rejection);
        StatusCode::UNAUTHORIZED
    })?;

    tracing::debug!("Authenticated request for user {}", user.id);
    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated user
///
/// Only valid on routes behind `auth_middleware`.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                StatusCode::UNAUTHORIZED
            })?;

        Ok(AuthUser(user))
    }
}
