//! # Employee Handlers
//!
//! HTTP request handlers for employee management endpoints.

use axum::Json;
use chrono::Utc;
use entity::employees::{Column as EmployeeColumn, Entity as EmployeesEntity, Role};
use error::{AppError, Result, SuccessResponse};
use sea_orm::{ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder, Set};
use tracing::{info, warn};
use validator::Validate;

use crate::{
    dto::employees::{
        CreateEmployeeRequest,
        EmployeeDetail,
        EmployeeListResponse,
        EmployeeResponse,
        UpdateEmployeeRequest,
    },
    middleware::Actor,
    AppState,
};

/// List every employee, ordered by name
///
/// Any actor may read the directory; it backs assignee pickers.
pub async fn list_employees_handler(state: &AppState, _actor: Actor) -> Result<Json<EmployeeListResponse>> {
    let employees = EmployeesEntity::find()
        .order_by_asc(EmployeeColumn::Name)
        .order_by_asc(EmployeeColumn::Id)
        .all(&state.db)
        .await
        .map_err(|e| AppError::database(format!("Failed to fetch employees: {}", e)))?;

    let employees = employees.iter().map(employee_model_to_detail).collect();

    Ok(Json(EmployeeListResponse {
        success: true,
        employees,
    }))
}

/// Create a new employee
///
/// Managers only. Mobile and member ID are shared identifiers, so
/// duplicates are rejected before the insert.
pub async fn create_employee_handler(
    state: &AppState,
    actor: Actor,
    req: CreateEmployeeRequest,
) -> Result<Json<EmployeeResponse>> {
    req.validate().map_err(|e| {
        AppError::Validation {
            message: e.to_string(),
        }
    })?;

    if !auth::can_manage_employees(&actor.role) {
        warn!(actor = %actor.id, "Employee create denied");
        return Err(AppError::forbidden(
            "You do not have permission to manage employees",
        ));
    }

    let role = parse_role(&req.role)?;

    let existing = EmployeesEntity::find()
        .filter(
            Condition::any()
                .add(EmployeeColumn::Mobile.eq(&req.mobile))
                .add(EmployeeColumn::MemberId.eq(&req.member_id)),
        )
        .one(&state.db)
        .await?;

    if let Some(existing) = existing {
        let field = if existing.mobile == req.mobile {
            "mobile number"
        }
        else {
            "member ID"
        };
        return Err(AppError::conflict(format!(
            "An employee with this {} already exists",
            field
        )));
    }

    let now = Utc::now();
    let employee = entity::employees::ActiveModel {
        id: Set(cuid2::create_id()),
        name: Set(req.name.clone()),
        mobile: Set(req.mobile.clone()),
        role: Set(role),
        department: Set(req.department.clone()),
        designation: Set(req.designation.clone()),
        member_id: Set(req.member_id.clone()),
        created_at: Set(now),
        updated_at: Set(now),
    };

    let created = employee
        .insert(&state.db)
        .await
        .map_err(|e| AppError::database(format!("Failed to create employee: {}", e)))?;

    info!(employee_id = %created.id, actor = %actor.id, "Employee created");

    Ok(Json(EmployeeResponse {
        success:  true,
        employee: employee_model_to_detail(&created),
    }))
}

/// Update an employee
///
/// Managers only; absent fields stay unchanged.
pub async fn update_employee_handler(
    state: &AppState,
    actor: Actor,
    employee_id: &str,
    req: UpdateEmployeeRequest,
) -> Result<Json<EmployeeResponse>> {
    req.validate().map_err(|e| {
        AppError::Validation {
            message: e.to_string(),
        }
    })?;

    if !auth::can_manage_employees(&actor.role) {
        warn!(actor = %actor.id, employee_id = %employee_id, "Employee update denied");
        return Err(AppError::forbidden(
            "You do not have permission to manage employees",
        ));
    }

    let employee = EmployeesEntity::find_by_id(employee_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::not_found("Employee not found"))?;

    let mut active_model: entity::employees::ActiveModel = employee.into();

    if let Some(name) = req.name {
        active_model.name = Set(name);
    }
    if let Some(mobile) = req.mobile {
        let duplicate = EmployeesEntity::find()
            .filter(EmployeeColumn::Mobile.eq(&mobile))
            .filter(EmployeeColumn::Id.ne(employee_id))
            .one(&state.db)
            .await?;
        if duplicate.is_some() {
            return Err(AppError::conflict(
                "An employee with this mobile number already exists",
            ));
        }
        active_model.mobile = Set(mobile);
    }
    if let Some(role) = req.role {
        active_model.role = Set(parse_role(&role)?);
    }
    if let Some(department) = req.department {
        active_model.department = Set(department);
    }
    if let Some(designation) = req.designation {
        active_model.designation = Set(designation);
    }
    if let Some(member_id) = req.member_id {
        let duplicate = EmployeesEntity::find()
            .filter(EmployeeColumn::MemberId.eq(&member_id))
            .filter(EmployeeColumn::Id.ne(employee_id))
            .one(&state.db)
            .await?;
        if duplicate.is_some() {
            return Err(AppError::conflict(
                "An employee with this member ID already exists",
            ));
        }
        active_model.member_id = Set(member_id);
    }
    active_model.updated_at = Set(Utc::now());

    let updated = active_model
        .update(&state.db)
        .await
        .map_err(|e| AppError::database(format!("Failed to update employee: {}", e)))?;

    info!(employee_id = %employee_id, actor = %actor.id, "Employee updated");

    Ok(Json(EmployeeResponse {
        success:  true,
        employee: employee_model_to_detail(&updated),
    }))
}

/// Delete an employee
///
/// Managers only. Tasks and leads referencing the employee are left in
/// place; the directory is authoritative only for future writes.
pub async fn delete_employee_handler(
    state: &AppState,
    actor: Actor,
    employee_id: &str,
) -> Result<Json<SuccessResponse>> {
    if !auth::can_manage_employees(&actor.role) {
        warn!(actor = %actor.id, employee_id = %employee_id, "Employee delete denied");
        return Err(AppError::forbidden(
            "You do not have permission to manage employees",
        ));
    }

    EmployeesEntity::find_by_id(employee_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::not_found("Employee not found"))?;

    EmployeesEntity::delete_by_id(employee_id)
        .exec(&state.db)
        .await
        .map_err(|e| AppError::database(format!("Failed to delete employee: {}", e)))?;

    info!(employee_id = %employee_id, actor = %actor.id, "Employee deleted");

    Ok(Json(SuccessResponse::ok()))
}

/// Parse a role string into the enum
///
/// Role names are exact-case wire strings.
fn parse_role(role_str: &str) -> Result<Role> {
    Role::from_string(role_str).ok_or_else(|| {
        AppError::bad_request("Invalid role. Must be one of: CEO, Director, Employee")
    })
}

/// Convert an employee entity model to a response DTO
fn employee_model_to_detail(employee: &entity::employees::Model) -> EmployeeDetail {
    EmployeeDetail {
        id: employee.id.clone(),
        name: employee.name.clone(),
        mobile: employee.mobile.clone(),
        role: employee.role.to_string(),
        department: employee.department.clone(),
        designation: employee.designation.clone(),
        member_id: employee.member_id.clone(),
        created_at: employee.created_at.to_rfc3339(),
        updated_at: employee.updated_at.to_rfc3339(),
    }
}
