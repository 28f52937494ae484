//! # Router and Actor Middleware Tests
//!
//! Drives requests through the full application router to verify actor
//! resolution, error envelopes, and the public surface.

mod common;

use std::net::SocketAddr;

use axum::{
    body::Body,
    extract::connect_info::MockConnectInfo,
    http::{header, Request, StatusCode},
    Router,
};
use common::{create_test_app_state, init_test_env, seed_employee};
use entity::employees::Role;
use http_body_util::BodyExt;
use sea_orm::EntityTrait;
use serde_json::{json, Value};
use server::AppState;
use tower::ServiceExt;

/// Build the application router with a mocked peer address
fn test_app(state: AppState) -> Router {
    server::create_app_router(state).layer(MockConnectInfo(SocketAddr::from(([192, 0, 2, 1], 12345))))
}

fn get_request(uri: &str, actor_id: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(id) = actor_id {
        builder = builder.header("X-Employee-Id", id);
    }
    builder.body(Body::empty()).unwrap()
}

fn json_request(method: &str, uri: &str, actor_id: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(id) = actor_id {
        builder = builder.header("X-Employee-Id", id);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

async fn response_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("Response body should be JSON")
}

// ==================== Actor Resolution Tests ====================

#[tokio::test]
async fn test_missing_actor_header_rejected() {
    init_test_env();

    let state = create_test_app_state().await;
    let app = test_app(state);

    let response = app
        .oneshot(get_request("/api/v1/tasks", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = response_json(response).await;
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["code"], json!("UNAUTHORIZED"));
    assert_eq!(body["message"], json!("Missing X-Employee-Id header"));
}

#[tokio::test]
async fn test_unknown_actor_rejected() {
    init_test_env();

    let state = create_test_app_state().await;
    let app = test_app(state);

    let response = app
        .oneshot(get_request("/api/v1/tasks", Some("ghost")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = response_json(response).await;
    assert_eq!(body["code"], json!("UNAUTHORIZED"));
    assert_eq!(body["message"], json!("Unknown employee"));
}

#[tokio::test]
async fn test_health_check_is_public() {
    init_test_env();

    let state = create_test_app_state().await;
    let app = test_app(state);

    let response = app.oneshot(get_request("/health", None)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"OK");
}

// ==================== Public Login Route Tests ====================

#[tokio::test]
async fn test_login_route_skips_actor_resolution() {
    init_test_env();

    let state = create_test_app_state().await;
    let app = test_app(state.clone());

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/v1/auth/login",
            None,
            json!({
                "mobile": auth::credentials::DEFAULT_LOGIN_MOBILE,
                "password": auth::credentials::DEFAULT_LOGIN_PASSWORD,
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["message"], json!("Login successful"));

    // The peer address from the connection is what lands in the audit trail
    let rows = entity::login_history::Entity::find()
        .all(&state.db)
        .await
        .expect("Failed to fetch login history");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].ip, "192.0.2.1");
    assert!(rows[0].success);
}

// ==================== Error Envelope Tests ====================

#[tokio::test]
async fn test_forbidden_error_envelope() {
    init_test_env();

    let state = create_test_app_state().await;
    let bob = seed_employee(&state.db, "Bob", Role::Ceo).await;
    let eve = seed_employee(&state.db, "Eve", Role::Employee).await;
    let app = test_app(state);

    let mut request = Request::builder()
        .method("DELETE")
        .uri(format!("/api/v1/employees/{}", bob.id));
    request = request.header("X-Employee-Id", &eve.id);
    let response = app
        .oneshot(request.body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let body = response_json(response).await;
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["code"], json!("FORBIDDEN"));
    assert_eq!(
        body["message"],
        json!("You do not have permission to manage employees")
    );
}

#[tokio::test]
async fn test_not_found_error_envelope() {
    init_test_env();

    let state = create_test_app_state().await;
    let bob = seed_employee(&state.db, "Bob", Role::Ceo).await;
    let app = test_app(state);

    let response = app
        .oneshot(json_request(
            "PUT",
            "/api/v1/employees/missing",
            Some(&bob.id),
            json!({}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = response_json(response).await;
    assert_eq!(body["code"], json!("NOT_FOUND"));
    assert_eq!(body["message"], json!("Employee not found"));
}

#[tokio::test]
async fn test_validation_error_envelope() {
    init_test_env();

    let state = create_test_app_state().await;
    let bob = seed_employee(&state.db, "Bob", Role::Ceo).await;
    let alice = seed_employee(&state.db, "Alice", Role::Employee).await;
    let app = test_app(state);

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/v1/tasks",
            Some(&bob.id),
            json!({
                "title": "Quarterly report",
                "assigned_to": alice.id,
                "due_date": "not-a-date",
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = response_json(response).await;
    assert_eq!(body["code"], json!("VALIDATION_ERROR"));
    assert_eq!(
        body["message"],
        json!("Due date must use the YYYY-MM-DD format")
    );
}

// ==================== End-to-End Visibility Tests ====================

#[tokio::test]
async fn test_task_visibility_through_router() {
    init_test_env();

    let state = create_test_app_state().await;
    let bob = seed_employee(&state.db, "Bob", Role::Ceo).await;
    let alice = seed_employee(&state.db, "Alice", Role::Employee).await;
    let eve = seed_employee(&state.db, "Eve", Role::Employee).await;
    let app = test_app(state);

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/v1/tasks",
            Some(&bob.id),
            json!({
                "title": "Quarterly report",
                "assigned_to": alice.id,
                "due_date": "2026-09-01",
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["task"]["title"], json!("Quarterly report"));

    // The assignee sees the task
    let response = app
        .clone()
        .oneshot(get_request("/api/v1/tasks", Some(&alice.id)))
        .await
        .unwrap();
    let body = response_json(response).await;
    assert_eq!(body["tasks"].as_array().unwrap().len(), 1);

    // An unrelated employee does not
    let response = app
        .clone()
        .oneshot(get_request("/api/v1/tasks", Some(&eve.id)))
        .await
        .unwrap();
    let body = response_json(response).await;
    assert!(body["tasks"].as_array().unwrap().is_empty());

    // The assignment notice is waiting in the assignee's inbox
    let response = app
        .oneshot(get_request("/api/v1/notifications", Some(&alice.id)))
        .await
        .unwrap();
    let body = response_json(response).await;
    let notifications = body["notifications"].as_array().unwrap();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0]["title"], json!("New Task Assigned"));
}
