//! # Integration Tests for Login and Login History
//!
//! Exercises credential verification, audit-trail recording, and the
//! manager-only history listing.

mod common;

use auth::credentials::{DEFAULT_LOGIN_MOBILE, DEFAULT_LOGIN_PASSWORD};
use common::{create_test_app_state, init_test_env, seed_employee};
use entity::employees::Role;
use entity::login_history::Entity as LoginHistoryEntity;
use error::AppError;
use sea_orm::EntityTrait;
use server::{
    dto::auth::LoginRequest,
    handlers::auth::{list_login_history_handler, login_handler},
};

fn login_request(mobile: &str, password: &str) -> LoginRequest {
    LoginRequest {
        mobile:   mobile.to_string(),
        password: password.to_string(),
    }
}

// ==================== Login Handler Tests ====================

#[tokio::test]
async fn test_login_accepts_configured_credentials() {
    init_test_env();

    let state = create_test_app_state().await;

    let response = login_handler(
        &state,
        "203.0.113.9".to_string(),
        login_request(DEFAULT_LOGIN_MOBILE, DEFAULT_LOGIN_PASSWORD),
    )
    .await
    .expect("Login should not error");

    assert!(response.0.success);
    assert_eq!(response.0.message, "Login successful");
}

#[tokio::test]
async fn test_login_rejects_wrong_password_without_erroring() {
    init_test_env();

    let state = create_test_app_state().await;

    let response = login_handler(
        &state,
        "203.0.113.9".to_string(),
        login_request(DEFAULT_LOGIN_MOBILE, "wrong-password"),
    )
    .await
    .expect("Bad credentials are a verdict, not an error");

    assert!(!response.0.success);
    assert_eq!(response.0.message, "Invalid credentials");
}

#[tokio::test]
async fn test_login_requires_mobile_and_password() {
    init_test_env();

    let state = create_test_app_state().await;

    let result = login_handler(&state, "203.0.113.9".to_string(), login_request("", "")).await;

    assert!(matches!(result, Err(AppError::Validation { .. })));
}

#[tokio::test]
async fn test_login_records_both_outcomes_in_history() {
    init_test_env();

    let state = create_test_app_state().await;

    login_handler(
        &state,
        "198.51.100.4".to_string(),
        login_request(DEFAULT_LOGIN_MOBILE, DEFAULT_LOGIN_PASSWORD),
    )
    .await
    .expect("Login should not error");
    login_handler(
        &state,
        "198.51.100.5".to_string(),
        login_request("000000000", "nope"),
    )
    .await
    .expect("Login should not error");

    let attempts = LoginHistoryEntity::find()
        .all(&state.db)
        .await
        .expect("Failed to fetch history");
    assert_eq!(attempts.len(), 2);

    let accepted = attempts
        .iter()
        .find(|a| a.success)
        .expect("Accepted attempt should be recorded");
    assert_eq!(accepted.mobile, DEFAULT_LOGIN_MOBILE);
    assert_eq!(accepted.ip, "198.51.100.4");

    let rejected = attempts
        .iter()
        .find(|a| !a.success)
        .expect("Rejected attempt should be recorded");
    assert_eq!(rejected.mobile, "000000000");
    assert_eq!(rejected.ip, "198.51.100.5");
}

// ==================== Login History Tests ====================

#[tokio::test]
async fn test_login_history_visible_to_manager_newest_first() {
    init_test_env();

    let state = create_test_app_state().await;
    let ceo = seed_employee(&state.db, "Bob", Role::Ceo).await;

    login_handler(
        &state,
        "203.0.113.1".to_string(),
        login_request(DEFAULT_LOGIN_MOBILE, DEFAULT_LOGIN_PASSWORD),
    )
    .await
    .expect("Login should not error");
    login_handler(
        &state,
        "203.0.113.2".to_string(),
        login_request(DEFAULT_LOGIN_MOBILE, "wrong"),
    )
    .await
    .expect("Login should not error");

    let response = list_login_history_handler(&state, ceo)
        .await
        .expect("Managers can read the audit trail");

    assert!(response.0.success);
    assert_eq!(response.0.history.len(), 2);
    // Newest first
    assert_eq!(response.0.history[0].ip, "203.0.113.2");
    assert_eq!(response.0.history[1].ip, "203.0.113.1");
}

#[tokio::test]
async fn test_login_history_denied_for_employee_role() {
    init_test_env();

    let state = create_test_app_state().await;
    let alice = seed_employee(&state.db, "Alice", Role::Employee).await;

    let result = list_login_history_handler(&state, alice).await;

    match result.expect_err("Employees must not read the audit trail") {
        AppError::Forbidden { message } => {
            assert_eq!(message, "You do not have permission to view login history");
        }
        other => panic!("Expected Forbidden, got {:?}", other),
    }
}

#[tokio::test]
async fn test_login_history_visible_to_director() {
    init_test_env();

    let state = create_test_app_state().await;
    let director = seed_employee(&state.db, "Dana", Role::Director).await;

    let response = list_login_history_handler(&state, director)
        .await
        .expect("Directors can read the audit trail");

    assert!(response.0.success);
    assert!(response.0.history.is_empty());
}
