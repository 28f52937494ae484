//! # Lead Handlers
//!
//! HTTP request handlers for lead management and the lead-to-customer
//! conversion. Conversion is the one multi-write operation in the API and
//! runs inside a transaction so a failure cannot leave both a lead and
//! its customer copy behind.

use axum::Json;
use chrono::Utc;
use entity::customers::CustomerStatus;
use entity::employees::Entity as EmployeesEntity;
use entity::leads::{Column as LeadColumn, Entity as LeadsEntity, LeadStatus};
use error::{AppError, Result, SuccessResponse};
use sea_orm::{
    ActiveModelTrait,
    ColumnTrait,
    EntityTrait,
    QueryFilter,
    QueryOrder,
    Set,
    TransactionError,
    TransactionTrait,
};
use tracing::{info, warn};
use validator::Validate;

use crate::{
    dto::customers::CustomerResponse,
    dto::leads::{
        CreateLeadRequest,
        LeadDetail,
        LeadListResponse,
        LeadResponse,
        UpdateLeadRequest,
    },
    fanout,
    handlers::customers::customer_model_to_detail,
    middleware::Actor,
    AppState,
};

/// List every lead, newest first
pub async fn list_leads_handler(state: &AppState, _actor: Actor) -> Result<Json<LeadListResponse>> {
    let leads = LeadsEntity::find()
        .order_by_desc(LeadColumn::CreatedAt)
        .order_by_asc(LeadColumn::Id)
        .all(&state.db)
        .await
        .map_err(|e| AppError::database(format!("Failed to fetch leads: {}", e)))?;

    let leads = leads.iter().map(lead_model_to_detail).collect();

    Ok(Json(LeadListResponse {
        success: true,
        leads,
    }))
}

/// Create a new lead
///
/// Any actor may create. Naming an assignee produces a lead_assigned
/// notification for them.
pub async fn create_lead_handler(
    state: &AppState,
    actor: Actor,
    req: CreateLeadRequest,
) -> Result<Json<LeadResponse>> {
    req.validate().map_err(|e| {
        AppError::Validation {
            message: e.to_string(),
        }
    })?;

    let status = match req.status.as_deref().filter(|s| !s.is_empty()) {
        Some(s) => parse_lead_status(s)?,
        None => LeadStatus::Cold,
    };

    if let Some(assignee_id) = req.assigned_to.as_deref().filter(|a| !a.is_empty()) {
        EmployeesEntity::find_by_id(assignee_id)
            .one(&state.db)
            .await?
            .ok_or_else(|| AppError::not_found("Assigned employee not found"))?;
    }

    let now = Utc::now();
    let lead = entity::leads::ActiveModel {
        id: Set(cuid2::create_id()),
        name: Set(req.name.clone()),
        email: Set(req.email.clone()),
        phone: Set(req.phone.clone()),
        company: Set(req.company.clone()),
        address: Set(req.address.clone()),
        status: Set(status),
        source: Set(req.source.clone()),
        assigned_to: Set(req.assigned_to.clone()),
        notes: Set(req.notes.clone()),
        created_at: Set(now),
        updated_at: Set(now),
    };

    let created = lead
        .insert(&state.db)
        .await
        .map_err(|e| AppError::database(format!("Failed to create lead: {}", e)))?;

    fanout::persist(&state.db, fanout::lead_assigned(&created)).await?;

    info!(lead_id = %created.id, actor = %actor.id, "Lead created");

    Ok(Json(LeadResponse {
        success: true,
        lead:    lead_model_to_detail(&created),
    }))
}

/// Update a lead
///
/// A manager or the lead's assignee; absent fields stay unchanged. An
/// empty `assigned_to` string unassigns the lead.
pub async fn update_lead_handler(
    state: &AppState,
    actor: Actor,
    lead_id: &str,
    req: UpdateLeadRequest,
) -> Result<Json<LeadResponse>> {
    req.validate().map_err(|e| {
        AppError::Validation {
            message: e.to_string(),
        }
    })?;

    let lead = LeadsEntity::find_by_id(lead_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::not_found("Lead not found"))?;

    if !auth::can_manage_lead(&actor, &lead) {
        warn!(actor = %actor.id, lead_id = %lead_id, "Lead update denied");
        return Err(AppError::forbidden(
            "You do not have permission to modify this lead",
        ));
    }

    let mut active_model: entity::leads::ActiveModel = lead.into();

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
        active_model.status = Set(parse_lead_status(&status)?);
    }
    if let Some(source) = req.source {
        active_model.source = Set(Some(source));
    }
    if let Some(assigned_to) = req.assigned_to {
        if !assigned_to.is_empty() {
            EmployeesEntity::find_by_id(&assigned_to)
                .one(&state.db)
                .await?
                .ok_or_else(|| AppError::not_found("Assigned employee not found"))?;
        }
        active_model.assigned_to = Set(Some(assigned_to));
    }
    if let Some(notes) = req.notes {
        active_model.notes = Set(Some(notes));
    }
    active_model.updated_at = Set(Utc::now());

    let updated = active_model
        .update(&state.db)
        .await
        .map_err(|e| AppError::database(format!("Failed to update lead: {}", e)))?;

    info!(lead_id = %lead_id, actor = %actor.id, "Lead updated");

    Ok(Json(LeadResponse {
        success: true,
        lead:    lead_model_to_detail(&updated),
    }))
}

/// Delete a lead
///
/// A manager or the lead's assignee.
pub async fn delete_lead_handler(
    state: &AppState,
    actor: Actor,
    lead_id: &str,
) -> Result<Json<SuccessResponse>> {
    let lead = LeadsEntity::find_by_id(lead_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::not_found("Lead not found"))?;

    if !auth::can_manage_lead(&actor, &lead) {
        warn!(actor = %actor.id, lead_id = %lead_id, "Lead delete denied");
        return Err(AppError::forbidden(
            "You do not have permission to delete this lead",
        ));
    }

    LeadsEntity::delete_by_id(lead_id)
        .exec(&state.db)
        .await
        .map_err(|e| AppError::database(format!("Failed to delete lead: {}", e)))?;

    info!(lead_id = %lead_id, actor = %actor.id, "Lead deleted");

    Ok(Json(SuccessResponse::with_message("Lead deleted successfully")))
}

/// Convert a lead into a customer
///
/// A manager or the lead's assignee. Customer creation, lead removal, and
/// the lead_converted notification commit together or not at all. The new
/// customer starts active with zero lifetime revenue; a missing address
/// becomes an empty string rather than a null.
pub async fn convert_lead_handler(
    state: &AppState,
    actor: Actor,
    lead_id: &str,
) -> Result<Json<CustomerResponse>> {
    let lead = LeadsEntity::find_by_id(lead_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::not_found("Lead not found"))?;

    if !auth::can_manage_lead(&actor, &lead) {
        warn!(actor = %actor.id, lead_id = %lead_id, "Lead convert denied");
        return Err(AppError::forbidden(
            "You do not have permission to convert this lead",
        ));
    }

    let customer = state
        .db
        .transaction::<_, entity::customers::Model, AppError>(|txn| {
            Box::pin(async move {
                let now = Utc::now();
                let customer = entity::customers::ActiveModel {
                    id: Set(cuid2::create_id()),
                    name: Set(lead.name.clone()),
                    email: Set(lead.email.clone()),
                    phone: Set(lead.phone.clone()),
                    company: Set(lead.company.clone()),
                    address: Set(Some(lead.address.clone().unwrap_or_default())),
                    status: Set(CustomerStatus::Active),
                    total_value: Set(0.0),
                    created_at: Set(now),
                    updated_at: Set(now),
                }
                .insert(txn)
                .await?;

                LeadsEntity::delete_by_id(lead.id.as_str()).exec(txn).await?;

                fanout::persist(txn, fanout::lead_converted(&lead)).await?;

                Ok(customer)
            })
        })
        .await
        .map_err(|e| {
            match e {
                TransactionError::Connection(db_err) => AppError::from(db_err),
                TransactionError::Transaction(app_err) => app_err,
            }
        })?;

    info!(lead_id = %lead_id, customer_id = %customer.id, actor = %actor.id, "Lead converted");

    Ok(Json(CustomerResponse {
        success:  true,
        customer: customer_model_to_detail(&customer),
    }))
}

/// Parse a lead status string into the enum
fn parse_lead_status(raw: &str) -> Result<LeadStatus> {
    LeadStatus::from_string(raw).ok_or_else(|| {
        AppError::bad_request("Invalid status. Must be one of: cold, warm, hot")
    })
}

/// Convert a lead entity model to a response DTO
fn lead_model_to_detail(lead: &entity::leads::Model) -> LeadDetail {
    LeadDetail {
        id: lead.id.clone(),
        name: lead.name.clone(),
        email: lead.email.clone(),
        phone: lead.phone.clone(),
        company: lead.company.clone(),
        address: lead.address.clone(),
        status: lead.status.to_string(),
        source: lead.source.clone(),
        assigned_to: lead.assigned_to.clone(),
        notes: lead.notes.clone(),
        created_at: lead.created_at.to_rfc3339(),
        updated_at: lead.updated_at.to_rfc3339(),
    }
}
