//! Handler tests for the Users domain
//!
//! These tests verify that HTTP handlers work correctly:
//! - Request deserialization (JSON → Rust structs)
//! - Response serialization (Rust structs → JSON)
//! - HTTP status codes
//! - Error responses
//!
//! They exercise ONLY the users domain router, not the full application with
//! docs routes, middleware, etc.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum_helpers::{ApiResponse, ErrorResponse};
use domain_users::handlers::UserListResponse;
use domain_users::*;
use http_body_util::BodyExt;
use serde_json::json;
use tower::ServiceExt; // For oneshot()

// Helper to parse JSON response body
async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn app() -> Router {
    let service = UserService::new(InMemoryUserRepository::new());
    handlers::router(service)
}

fn post_user(body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

#[tokio::test]
async fn test_create_user_returns_201_with_envelope() {
    let app = app();

    let response = app
        .oneshot(post_user(json!({
            "name": "Ann",
            "email": "ann@example.com"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let envelope: ApiResponse<User> = json_body(response.into_body()).await;
    assert!(envelope.success);
    assert_eq!(envelope.message.as_deref(), Some("User created successfully"));

    let user = envelope.data.unwrap();
    assert_eq!(user.name, "Ann");
    assert_eq!(user.email, "ann@example.com");
    assert_eq!(user.role, Role::User);
    assert_eq!(user.created_at, user.updated_at);
}

#[tokio::test]
async fn test_create_user_accepts_explicit_role() {
    let app = app();

    let response = app
        .oneshot(post_user(json!({
            "name": "Root",
            "email": "root@example.com",
            "role": "admin"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let envelope: ApiResponse<User> = json_body(response.into_body()).await;
    assert_eq!(envelope.data.unwrap().role, Role::Admin);
}

#[tokio::test]
async fn test_create_user_validates_input() {
    let app = app();

    // Empty name fails the length(min = 1) rule
    let response = app
        .oneshot(post_user(json!({
            "name": "",
            "email": "ann@example.com"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: ErrorResponse = json_body(response.into_body()).await;
    assert!(!body.success);
    assert_eq!(body.code.as_deref(), Some("VALIDATION_ERROR"));
}

#[tokio::test]
async fn test_create_user_rejects_malformed_email() {
    let app = app();

    let response = app
        .oneshot(post_user(json!({
            "name": "Ann",
            "email": "not-an-email"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_duplicate_email_returns_409() {
    let app = app();

    let response = app
        .clone()
        .oneshot(post_user(json!({
            "name": "Ann",
            "email": "ann@example.com"
        })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    // Same email, different case
    let response = app
        .oneshot(post_user(json!({
            "name": "Other Ann",
            "email": "ANN@example.com"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body: ErrorResponse = json_body(response.into_body()).await;
    assert_eq!(body.code.as_deref(), Some("DUPLICATE_EMAIL"));
}

#[tokio::test]
async fn test_get_user_returns_200() {
    let service = UserService::new(InMemoryUserRepository::new());
    let created = service
        .create_user(CreateUser {
            name: "Ann".to_string(),
            email: "ann@example.com".to_string(),
            role: None,
        })
        .await
        .unwrap();

    let app = handlers::router(service);

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(format!("/{}", created.id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let envelope: ApiResponse<User> = json_body(response.into_body()).await;
    assert_eq!(envelope.data.unwrap().id, created.id);
}

#[tokio::test]
async fn test_get_user_returns_404_for_missing() {
    let app = app();

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(format!("/{}", uuid::Uuid::now_v7()))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: ErrorResponse = json_body(response.into_body()).await;
    assert_eq!(body.code.as_deref(), Some("USER_NOT_FOUND"));
}

#[tokio::test]
async fn test_get_user_rejects_malformed_uuid() {
    let app = app();

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/not-a-uuid")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: ErrorResponse = json_body(response.into_body()).await;
    assert_eq!(body.code.as_deref(), Some("INVALID_UUID"));
}

#[tokio::test]
async fn test_update_user_merges_patch() {
    let service = UserService::new(InMemoryUserRepository::new());
    let created = service
        .create_user(CreateUser {
            name: "Ann".to_string(),
            email: "ann@example.com".to_string(),
            role: None,
        })
        .await
        .unwrap();

    let app = handlers::router(service);

    let response = app
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri(format!("/{}", created.id))
                .header("content-type", "application/json")
                .body(Body::from(
                    serde_json::to_string(&json!({"role": "admin"})).unwrap(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let envelope: ApiResponse<User> = json_body(response.into_body()).await;
    let updated = envelope.data.unwrap();
    assert_eq!(updated.role, Role::Admin);
    assert_eq!(updated.name, "Ann");
    assert_eq!(updated.email, "ann@example.com");
}

#[tokio::test]
async fn test_update_missing_user_returns_404() {
    let app = app();

    let response = app
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri(format!("/{}", uuid::Uuid::now_v7()))
                .header("content-type", "application/json")
                .body(Body::from(
                    serde_json::to_string(&json!({"name": "Nobody"})).unwrap(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_user_returns_removed_record() {
    let service = UserService::new(InMemoryUserRepository::new());
    let created = service
        .create_user(CreateUser {
            name: "Gone Soon".to_string(),
            email: "gone@example.com".to_string(),
            role: None,
        })
        .await
        .unwrap();

    let app = handlers::router(service);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/{}", created.id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let envelope: ApiResponse<User> = json_body(response.into_body()).await;
    assert_eq!(envelope.data.unwrap().id, created.id);
    assert_eq!(envelope.message.as_deref(), Some("User deleted successfully"));

    // The record is gone afterwards
    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(format!("/{}", created.id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_users_paginates_and_searches() {
    let service = UserService::new(InMemoryUserRepository::new());

    for i in 0..12 {
        service
            .create_user(CreateUser {
                name: format!("User {:02}", i),
                email: format!("user{:02}@example.com", i),
                role: None,
            })
            .await
            .unwrap();
    }
    service
        .create_user(CreateUser {
            name: "Ann".to_string(),
            email: "ann@example.com".to_string(),
            role: None,
        })
        .await
        .unwrap();

    let app = handlers::router(service);

    // Second page of the full collection
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/?page=2&limit=10")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let envelope: ApiResponse<UserListResponse> = json_body(response.into_body()).await;
    let page = envelope.data.unwrap();
    assert_eq!(page.total, 13);
    assert_eq!(page.users.len(), 3);
    assert_eq!(page.page, 2);
    assert_eq!(page.limit, 10);

    // Search narrows by name or email
    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/?search=ann")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let envelope: ApiResponse<UserListResponse> = json_body(response.into_body()).await;
    let page = envelope.data.unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.users[0].name, "Ann");
}

#[tokio::test]
async fn test_list_users_rejects_zero_page() {
    let app = app();

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/?page=0")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
