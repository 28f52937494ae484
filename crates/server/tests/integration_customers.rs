//! # Integration Tests for Customer Handlers
//!
//! Customers carry no role gate; these tests pin the defaults and the
//! newest-first listing.

mod common;

use common::{create_test_app_state, init_test_env, seed_employee};
use entity::customers::Entity as CustomersEntity;
use entity::employees::Role;
use error::AppError;
use sea_orm::EntityTrait;
use server::dto::customers::{CreateCustomerRequest, UpdateCustomerRequest};
use server::handlers::customers::{
    create_customer_handler,
    delete_customer_handler,
    list_customers_handler,
    update_customer_handler,
};

fn create_request(name: &str, company: &str) -> CreateCustomerRequest {
    CreateCustomerRequest {
        name:        name.to_string(),
        email:       Some("billing@example.com".to_string()),
        phone:       None,
        company:     company.to_string(),
        address:     Some("1 Main St".to_string()),
        status:      None,
        total_value: None,
    }
}

// ==================== Create Tests ====================

#[tokio::test]
async fn test_create_customer_defaults() {
    init_test_env();

    let state = create_test_app_state().await;
    let alice = seed_employee(&state.db, "Alice", Role::Employee).await;

    let response = create_customer_handler(&state, alice, create_request("Acme Corp", "Acme"))
        .await
        .expect("Any actor can create customers");

    assert!(response.0.success);
    assert_eq!(response.0.customer.status, "active");
    assert_eq!(response.0.customer.total_value, 0.0);
    assert_eq!(response.0.customer.address.as_deref(), Some("1 Main St"));
}

#[tokio::test]
async fn test_create_customer_rejects_unknown_status() {
    init_test_env();

    let state = create_test_app_state().await;
    let alice = seed_employee(&state.db, "Alice", Role::Employee).await;

    let mut req = create_request("Acme Corp", "Acme");
    req.status = Some("paused".to_string());

    let result = create_customer_handler(&state, alice, req).await;

    match result.expect_err("Unknown status must fail") {
        AppError::BadRequest { message } => {
            assert_eq!(message, "Invalid status. Must be one of: active, inactive");
        }
        other => panic!("Expected BadRequest, got {:?}", other),
    }
}

#[tokio::test]
async fn test_create_customer_rejects_negative_value() {
    init_test_env();

    let state = create_test_app_state().await;
    let alice = seed_employee(&state.db, "Alice", Role::Employee).await;

    let mut req = create_request("Acme Corp", "Acme");
    req.total_value = Some(-250.0);

    let result = create_customer_handler(&state, alice, req).await;
    assert!(matches!(result, Err(AppError::Validation { .. })));
}

// ==================== Update and Delete Tests ====================

#[tokio::test]
async fn test_update_customer_by_any_actor() {
    init_test_env();

    let state = create_test_app_state().await;
    let bob = seed_employee(&state.db, "Bob", Role::Ceo).await;
    let alice = seed_employee(&state.db, "Alice", Role::Employee).await;

    let created = create_customer_handler(&state, bob, create_request("Acme Corp", "Acme"))
        .await
        .expect("Creation should work");

    let req = UpdateCustomerRequest {
        total_value: Some(2500.0),
        status: Some("inactive".to_string()),
        ..Default::default()
    };
    let response = update_customer_handler(&state, alice, &created.0.customer.id, req)
        .await
        .expect("Employees can update customers");

    assert_eq!(response.0.customer.total_value, 2500.0);
    assert_eq!(response.0.customer.status, "inactive");
    assert_eq!(response.0.customer.name, "Acme Corp");
}

#[tokio::test]
async fn test_update_customer_unknown_id_not_found() {
    init_test_env();

    let state = create_test_app_state().await;
    let alice = seed_employee(&state.db, "Alice", Role::Employee).await;

    let result =
        update_customer_handler(&state, alice, "missing", UpdateCustomerRequest::default()).await;

    match result.expect_err("Unknown customer id") {
        AppError::NotFound { message } => assert_eq!(message, "Customer not found"),
        other => panic!("Expected NotFound, got {:?}", other),
    }
}

#[tokio::test]
async fn test_delete_customer_bare_acknowledgement() {
    init_test_env();

    let state = create_test_app_state().await;
    let alice = seed_employee(&state.db, "Alice", Role::Employee).await;

    let created = create_customer_handler(&state, alice.clone(), create_request("Acme Corp", "Acme"))
        .await
        .expect("Creation should work");

    let response = delete_customer_handler(&state, alice, &created.0.customer.id)
        .await
        .expect("Employees can delete customers");
    assert!(response.0.success);
    assert_eq!(response.0.message, None);

    let gone = CustomersEntity::find_by_id(&created.0.customer.id)
        .one(&state.db)
        .await
        .expect("Fetch should work");
    assert!(gone.is_none());
}

// ==================== List Tests ====================

#[tokio::test]
async fn test_list_customers_newest_first() {
    init_test_env();

    let state = create_test_app_state().await;
    let alice = seed_employee(&state.db, "Alice", Role::Employee).await;

    let first = create_customer_handler(&state, alice.clone(), create_request("Alpha LLC", "Alpha"))
        .await
        .expect("Creation should work");
    let second = create_customer_handler(&state, alice.clone(), create_request("Beta GmbH", "Beta"))
        .await
        .expect("Creation should work");

    let response = list_customers_handler(&state, alice)
        .await
        .expect("Any actor can list customers");

    assert_eq!(response.0.customers.len(), 2);
    assert_eq!(response.0.customers[0].id, second.0.customer.id);
    assert_eq!(response.0.customers[1].id, first.0.customer.id);
}
