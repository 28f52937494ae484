//! # Customer Handlers
//!
//! HTTP request handlers for customer management endpoints. Customers are
//! deliberately unrestricted: every authenticated actor may read and write
//! them.

use axum::Json;
use chrono::Utc;
use entity::customers::{Column as CustomerColumn, CustomerStatus, Entity as CustomersEntity};
use error::{AppError, Result, SuccessResponse};
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};
use tracing::info;
use validator::Validate;

use crate::{
    dto::customers::{
        CreateCustomerRequest,
        CustomerDetail,
        CustomerListResponse,
        CustomerResponse,
        UpdateCustomerRequest,
    },
    middleware::Actor,
    AppState,
};

/// List every customer, newest first
pub async fn list_customers_handler(
    state: &AppState,
    _actor: Actor,
) -> Result<Json<CustomerListResponse>> {
    let customers = CustomersEntity::find()
        .order_by_desc(CustomerColumn::CreatedAt)
        .order_by_asc(CustomerColumn::Id)
        .all(&state.db)
        .await
        .map_err(|e| AppError::database(format!("Failed to fetch customers: {}", e)))?;

    let customers = customers.iter().map(customer_model_to_detail).collect();

    Ok(Json(CustomerListResponse {
        success: true,
        customers,
    }))
}

/// Create a new customer
pub async fn create_customer_handler(
    state: &AppState,
    actor: Actor,
    req: CreateCustomerRequest,
) -> Result<Json<CustomerResponse>> {
    req.validate().map_err(|e| {
        AppError::Validation {
            message: e.to_string(),
        }
    })?;

    let status = match req.status.as_deref().filter(|s| !s.is_empty()) {
        Some(s) => parse_customer_status(s)?,
        None => CustomerStatus::Active,
    };

    let now = Utc::now();
    let customer = entity::customers::ActiveModel {
        id: Set(cuid2::create_id()),
        name: Set(req.name.clone()),
        email: Set(req.email.clone()),
        phone: Set(req.phone.clone()),
        company: Set(req.company.clone()),
        address: Set(req.address.clone()),
        status: Set(status),
        total_value: Set(req.total_value.unwrap_or(0.0)),
        created_at: Set(now),
        updated_at: Set(now),
    };

    let created = customer
        .insert(&state.db)
        .await
        .map_err(|e| AppError::database(format!("Failed to create customer: {}", e)))?;

    info!(customer_id = %created.id, actor = %actor.id, "Customer created");

    Ok(Json(CustomerResponse {
        success:  true,
        customer: customer_model_to_detail(&created),
    }))
}

/// Update a customer; absent fields stay unchanged
pub async fn update_customer_handler(
    state: &AppState,
    actor: Actor,
    customer_id: &str,
    req: UpdateCustomerRequest,
) -> Result<Json<CustomerResponse>> {
    req.validate().map_err(|e| {
        AppError::Validation {
            message: e.to_string(),
        }
    })?;

    let customer = CustomersEntity::find_by_id(customer_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::not_found("Customer not found"))?;

    let mut active_model: entity::customers::ActiveModel = customer.into();

    if let Some(name) = req.name {
        active_model.name = Set(name);
    }
    if let Some(email) = req.email {
        active_model.email = Set(Some(email));
    }
    if let Some(phone) = req.phone {
        active_model.phone = Set(Some(phone));
    }
    if let Some(company) = req.company {
        active_model.company = Set(company);
    }
    if let Some(address) = req.address {
        active_model.address = Set(Some(address));
    }
    if let Some(status) = req.status {
        active_model.status = Set(parse_customer_status(&status)?);
    }
    if let Some(total_value) = req.total_value {
        active_model.total_value = Set(total_value);
    }
    active_model.updated_at = Set(Utc::now());

    let updated = active_model
        .update(&state.db)
        .await
        .map_err(|e| AppError::database(format!("Failed to update customer: {}", e)))?;

    info!(customer_id = %customer_id, actor = %actor.id, "Customer updated");

    Ok(Json(CustomerResponse {
        success:  true,
        customer: customer_model_to_detail(&updated),
    }))
}

/// Delete a customer
pub async fn delete_customer_handler(
    state: &AppState,
    actor: Actor,
    customer_id: &str,
) -> Result<Json<SuccessResponse>> {
    CustomersEntity::find_by_id(customer_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::not_found("Customer not found"))?;

    CustomersEntity::delete_by_id(customer_id)
        .exec(&state.db)
        .await
        .map_err(|e| AppError::database(format!("Failed to delete customer: {}", e)))?;

    info!(customer_id = %customer_id, actor = %actor.id, "Customer deleted");

    Ok(Json(SuccessResponse::ok()))
}

/// Parse a customer status string into the enum
fn parse_customer_status(raw: &str) -> Result<CustomerStatus> {
    CustomerStatus::from_string(raw).ok_or_else(|| {
        AppError::bad_request("Invalid status. Must be one of: active, inactive")
    })
}

/// Convert a customer entity model to a response DTO
///
/// Shared with lead conversion, which answers with the created customer.
pub(crate) fn customer_model_to_detail(customer: &entity::customers::Model) -> CustomerDetail {
    CustomerDetail {
        id: customer.id.clone(),
        name: customer.name.clone(),
        email: customer.email.clone(),
        phone: customer.phone.clone(),
        company: customer.company.clone(),
        address: customer.address.clone(),
        status: customer.status.to_string(),
        total_value: customer.total_value,
        created_at: customer.created_at.to_rfc3339(),
        updated_at: customer.updated_at.to_rfc3339(),
    }
}
