//! Favourites API integration tests

mod common;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use common::*;

#[tokio::test]
async fn test_register_login_and_manage_favourites() {
    let server = test_server();
    let token = register_and_login(&server, "alice", "p1").await;
    let (name, value) = auth_header(&token);

    let initial = server
        .get("/api/user/favourites")
        .add_header(name.clone(), value.clone())
        .await;
    assert_eq!(initial.status_code(), StatusCode::OK);
    assert_eq!(initial.json::<Vec<String>>(), Vec::<String>::new());

    let added = server
        .put("/api/user/favourites/42")
        .add_header(name.clone(), value.clone())
        .await;
    assert_eq!(added.status_code(), StatusCode::OK);
    assert_eq!(added.json::<Vec<String>>(), vec!["42".to_string()]);

    let after_add = server
        .get("/api/user/favourites")
        .add_header(name.clone(), value.clone())
        .await;
    assert!(after_add.json::<Vec<String>>().contains(&"42".to_string()));

    let removed = server
        .delete("/api/user/favourites/42")
        .add_header(name.clone(), value.clone())
        .await;
    assert_eq!(removed.status_code(), StatusCode::OK);

    let after_remove = server
        .get("/api/user/favourites")
        .add_header(name, value)
        .await;
    assert!(!after_remove.json::<Vec<String>>().contains(&"42".to_string()));
}

#[tokio::test]
async fn test_adding_twice_keeps_one_entry() {
    let server = test_server();
    let token = register_and_login(&server, "alice", "p1").await;
    let (name, value) = auth_header(&token);

    for item in ["42", "7", "42"] {
        server
            .put(&format!("/api/user/favourites/{}", item))
            .add_header(name.clone(), value.clone())
            .await;
    }

    let response = server.get("/api/user/favourites").add_header(name, value).await;
    assert_eq!(
        response.json::<Vec<String>>(),
        vec!["42".to_string(), "7".to_string()]
    );
}

#[tokio::test]
async fn test_favourites_are_private_per_user() {
    let server = test_server();
    let alice = register_and_login(&server, "alice", "p1").await;
    let bob = register_and_login(&server, "bob", "p2").await;

    let (name, value) = auth_header(&alice);
    server
        .put("/api/user/favourites/42")
        .add_header(name, value)
        .await;

    let (name, value) = auth_header(&bob);
    let response = server.get("/api/user/favourites").add_header(name, value).await;
    assert_eq!(response.json::<Vec<String>>(), Vec::<String>::new());
}

#[tokio::test]
async fn test_store_failures_keep_route_status_codes() {
    let server = test_server();
    let token = token_for_unknown_user();
    let (name, value) = auth_header(&token);

    let read = server
        .get("/api/user/favourites")
        .add_header(name.clone(), value.clone())
        .await;
    assert_eq!(read.status_code(), StatusCode::OK);
    let body: Value = read.json();
    assert!(body["msg"]
        .as_str()
        .unwrap()
        .starts_with("Unable to get favourites for user with id: "));

    let add = server
        .put("/api/user/favourites/42")
        .add_header(name.clone(), value.clone())
        .await;
    assert_eq!(add.status_code(), StatusCode::NOT_FOUND);
    assert!(add.json::<Value>()["msg"].is_string());

    let remove = server
        .delete("/api/user/favourites/42")
        .add_header(name, value)
        .await;
    assert_eq!(remove.status_code(), StatusCode::OK);
    assert!(remove.json::<Value>()["msg"].is_string());
}

#[tokio::test]
async fn test_favourites_limit_reports_not_found() {
    let server = test_server();
    let token = register_and_login(&server, "alice", "p1").await;
    let (name, value) = auth_header(&token);

    for item in 0..50 {
        let response = server
            .put(&format!("/api/user/favourites/{}", item))
            .add_header(name.clone(), value.clone())
            .await;
        assert_eq!(response.status_code(), StatusCode::OK);
    }

    let response = server
        .put("/api/user/favourites/overflow")
        .add_header(name, value)
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(
        response.json::<Value>()["msg"],
        json!(format!(
            "Unable to update favourites for user with id: {}",
            test_codec().verify(&token).unwrap().id
        ))
    );
}
