//! Common test utilities and helpers
//!
//! Builds the router over an in-memory store and wraps the register/login
//! round trips the API tests need.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::http::{header::AUTHORIZATION, HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use serde_json::json;

use favourites_api::backend::auth::{Claims, TokenCodec, User};
use favourites_api::backend::routes::create_router;
use favourites_api::backend::server::AppState;
use favourites_api::backend::store::{CredentialStore, MemoryCredentialStore, StoreError};
use favourites_api::shared::{Credentials, FavouriteList, LoginResponse, Registration};

pub const TEST_SECRET: &str = "test-secret";

/// Lowest bcrypt cost, keeps the suite fast
pub const TEST_BCRYPT_COST: u32 = 4;

/// Memory store that counts favourites calls
///
/// Lets tests prove that rejected requests never reach the store.
#[derive(Default)]
pub struct CountingStore {
    inner: MemoryCredentialStore,
    favourites_calls: AtomicUsize,
}

impl CountingStore {
    pub fn new() -> Self {
        Self {
            inner: MemoryCredentialStore::new(TEST_BCRYPT_COST),
            favourites_calls: AtomicUsize::new(0),
        }
    }

    pub fn favourites_calls(&self) -> usize {
        self.favourites_calls.load(Ordering::SeqCst)
    }

    fn record(&self) {
        self.favourites_calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl CredentialStore for CountingStore {
    async fn connect(&self) -> Result<(), StoreError> {
        self.inner.connect().await
    }

    async fn register_user(&self, registration: &Registration) -> Result<String, StoreError> {
        self.inner.register_user(registration).await
    }

    async fn check_user(&self, credentials: &Credentials) -> Result<User, StoreError> {
        self.inner.check_user(credentials).await
    }

    async fn get_favourites(&self, user_id: &str) -> Result<FavouriteList, StoreError> {
        self.record();
        self.inner.get_favourites(user_id).await
    }

    async fn add_favourite(
        &self,
        user_id: &str,
        item_id: &str,
    ) -> Result<FavouriteList, StoreError> {
        self.record();
        self.inner.add_favourite(user_id, item_id).await
    }

    async fn remove_favourite(
        &self,
        user_id: &str,
        item_id: &str,
    ) -> Result<FavouriteList, StoreError> {
        self.record();
        self.inner.remove_favourite(user_id, item_id).await
    }
}

pub fn test_codec() -> TokenCodec {
    TokenCodec::new(TEST_SECRET).expect("test secret is non-empty")
}

/// Test server over the given store
pub fn server_with_store(store: Arc<dyn CredentialStore>) -> TestServer {
    let app = create_router(AppState::new(test_codec(), store));
    TestServer::new(app).expect("Failed to start test server")
}

/// Test server over a fresh in-memory store
pub fn test_server() -> TestServer {
    server_with_store(Arc::new(MemoryCredentialStore::new(TEST_BCRYPT_COST)))
}

/// Register `user_name` and assert success
pub async fn register(server: &TestServer, user_name: &str, password: &str) {
    let response = server
        .post("/api/user/register")
        .json(&json!({ "userName": user_name, "password": password }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
}

/// Log in and return the issued token
pub async fn login(server: &TestServer, user_name: &str, password: &str) -> String {
    let response = server
        .post("/api/user/login")
        .json(&json!({ "userName": user_name, "password": password }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    response.json::<LoginResponse>().token
}

/// Register then log in
pub async fn register_and_login(server: &TestServer, user_name: &str, password: &str) -> String {
    register(server, user_name, password).await;
    login(server, user_name, password).await
}

/// `Authorization: JWT <token>`
pub fn auth_header(token: &str) -> (HeaderName, HeaderValue) {
    (
        AUTHORIZATION,
        HeaderValue::from_str(&format!("JWT {}", token)).expect("token is a valid header value"),
    )
}

/// A correctly signed token for a user the store has never seen
pub fn token_for_unknown_user() -> String {
    test_codec()
        .issue(&Claims {
            id: uuid::Uuid::new_v4().to_string(),
            user_name: "ghost".to_string(),
            password: "irrelevant".to_string(),
        })
        .expect("Failed to issue test token")
}
