//! Router-level tests for the HTTP surface
//!
//! Drives the axum router directly with `tower::ServiceExt::oneshot` and
//! checks the status codes and JSON contracts each endpoint promises.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use std::sync::Arc;
use taka_core::server::{router, AppState};
use taka_core::{Argon2Hasher, MemoryStore};
use tower::ServiceExt;

fn app() -> Router {
    let store = Arc::new(MemoryStore::new());
    let hasher = Arc::new(Argon2Hasher::new());
    router(AppState::new(store, hasher))
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_root_banner() {
    let response = app()
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_register_returns_created_without_hash() {
    let response = app()
        .oneshot(json_request(
            "POST",
            "/users",
            json!({"name": "alice", "number": "123", "pin": "4321"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let account = body_json(response).await;
    assert_eq!(account["phone"], "123");
    assert_eq!(account["status"], "pending");
    assert_eq!(account["balance"], "0");
    assert!(account.get("credential_hash").is_none());
}

#[tokio::test]
async fn test_register_duplicate_channel_conflicts() {
    let app = app();

    let payload = json!({"name": "alice", "number": "123", "pin": "4321"});
    let first = app
        .clone()
        .oneshot(json_request("POST", "/users", payload.clone()))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = app
        .oneshot(json_request("POST", "/users", payload))
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_login_wrong_pin_is_unauthorized() {
    let app = app();

    app.clone()
        .oneshot(json_request(
            "POST",
            "/users",
            json!({"name": "alice", "number": "123", "pin": "4321"}),
        ))
        .await
        .unwrap();

    let response = app
        .oneshot(json_request(
            "POST",
            "/login",
            json!({"identifier": "123", "pin": "0000"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Invalid login credentials");
}

#[tokio::test]
async fn test_login_success_wraps_user() {
    let app = app();

    app.clone()
        .oneshot(json_request(
            "POST",
            "/users",
            json!({"name": "alice", "number": "123", "pin": "4321"}),
        ))
        .await
        .unwrap();

    let response = app
        .oneshot(json_request(
            "POST",
            "/login",
            json!({"identifier": "123", "pin": "4321"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["user"]["name"], "alice");
    assert!(body["user"].get("credential_hash").is_none());
}

#[tokio::test]
async fn test_transfer_insufficient_balance_is_bad_request() {
    let app = app();

    for number in ["123", "456"] {
        app.clone()
            .oneshot(json_request(
                "POST",
                "/users",
                json!({"name": "user", "number": number, "pin": "4321"}),
            ))
            .await
            .unwrap();
    }

    let response = app
        .oneshot(json_request(
            "POST",
            "/transfer",
            json!({"sender": "123", "receiver": "456", "amount": "50", "pin": "4321"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_transfer_happy_path_returns_receipt() {
    let app = app();

    app.clone()
        .oneshot(json_request(
            "POST",
            "/users",
            json!({"name": "alice", "number": "123", "pin": "4321", "initial_balance": "100"}),
        ))
        .await
        .unwrap();
    app.clone()
        .oneshot(json_request(
            "POST",
            "/users",
            json!({"name": "bob", "number": "456", "pin": "8888"}),
        ))
        .await
        .unwrap();

    let response = app
        .oneshot(json_request(
            "POST",
            "/transfer",
            json!({"sender": "123", "receiver": "456", "amount": "50", "pin": "4321"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let receipt = body_json(response).await;
    assert_eq!(receipt["amount"], "50");
    assert_eq!(receipt["sender_balance"], "50");
}

#[tokio::test]
async fn test_transfer_unknown_receiver_is_not_found() {
    let app = app();

    app.clone()
        .oneshot(json_request(
            "POST",
            "/users",
            json!({"name": "alice", "number": "123", "pin": "4321", "initial_balance": "100"}),
        ))
        .await
        .unwrap();

    let response = app
        .oneshot(json_request(
            "POST",
            "/transfer",
            json!({"sender": "123", "receiver": "000", "amount": "50", "pin": "4321"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_status_and_list() {
    let app = app();

    let created = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/users",
            json!({"name": "alice", "number": "123", "pin": "4321"}),
        ))
        .await
        .unwrap();
    let account = body_json(created).await;
    let id = account["id"].as_str().unwrap().to_string();

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/users/{id}"),
            json!({"status": "verified"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "verified");

    let list = app
        .oneshot(Request::get("/users").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let users = body_json(list).await;
    assert_eq!(users.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_update_status_unknown_id_is_not_found() {
    let response = app()
        .oneshot(json_request(
            "PUT",
            "/users/00000000-0000-0000-0000-000000000000",
            json!({"status": "verified"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_reports_whether_removed() {
    let app = app();

    let created = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/users",
            json!({"name": "alice", "number": "123", "pin": "4321"}),
        ))
        .await
        .unwrap();
    let account = body_json(created).await;
    let id = account["id"].as_str().unwrap().to_string();

    let first = app
        .clone()
        .oneshot(
            Request::delete(format!("/users/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(body_json(first).await["deleted"], true);

    let second = app
        .oneshot(
            Request::delete(format!("/users/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(body_json(second).await["deleted"], false);
}
