//! # Task Handlers
//!
//! HTTP request handlers for task CRUD and progress-update endpoints.
//! Visibility and write access follow the central access policy; the
//! assignment and update fanouts live in [`crate::fanout`].

use std::collections::HashMap;

use axum::Json;
use chrono::{NaiveDate, Utc};
use entity::employees::{Column as EmployeeColumn, Entity as EmployeesEntity, Role};
use entity::task_updates::{Column as UpdateColumn, Entity as TaskUpdatesEntity};
use entity::tasks::{Column as TaskColumn, Entity as TasksEntity, TaskPriority, TaskStatus};
use error::{AppError, Result, SuccessResponse};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use tracing::{info, warn};
use validator::Validate;

use crate::{
    dto::tasks::{
        AddTaskUpdateRequest,
        CreateTaskRequest,
        TaskDetail,
        TaskListQuery,
        TaskListResponse,
        TaskResponse,
        TaskUpdateDetail,
        UpdateTaskRequest,
    },
    fanout,
    middleware::Actor,
    AppState,
};

/// List tasks visible to the actor, ordered by due date
///
/// Managers see the whole collection; employees only tasks assigned to
/// them. The optional `assigned_to` filter intersects with that scope, so
/// an employee filtering on a colleague gets an empty list rather than an
/// error.
pub async fn list_tasks_handler(
    state: &AppState,
    actor: Actor,
    query: TaskListQuery,
) -> Result<Json<TaskListResponse>> {
    let mut base_query = TasksEntity::find();

    if !auth::is_manager(&actor.role) {
        base_query = base_query.filter(TaskColumn::AssignedTo.eq(&actor.id));
    }
    if let Some(ref assigned_to) = query.assigned_to {
        base_query = base_query.filter(TaskColumn::AssignedTo.eq(assigned_to));
    }

    let tasks = base_query
        .order_by_asc(TaskColumn::DueDate)
        .order_by_asc(TaskColumn::Id)
        .all(&state.db)
        .await
        .map_err(|e| AppError::database(format!("Failed to fetch tasks: {}", e)))?;

    // One grouped fetch for the progress updates instead of one per task
    let task_ids: Vec<String> = tasks.iter().map(|t| t.id.clone()).collect();
    let mut updates_by_task: HashMap<String, Vec<entity::task_updates::Model>> = HashMap::new();
    if !task_ids.is_empty() {
        let updates = TaskUpdatesEntity::find()
            .filter(UpdateColumn::TaskId.is_in(task_ids))
            .order_by_asc(UpdateColumn::CreatedAt)
            .order_by_asc(UpdateColumn::Id)
            .all(&state.db)
            .await
            .map_err(|e| AppError::database(format!("Failed to fetch task updates: {}", e)))?;
        for update in updates {
            updates_by_task
                .entry(update.task_id.clone())
                .or_default()
                .push(update);
        }
    }

    let tasks = tasks
        .into_iter()
        .map(|task| {
            let updates = updates_by_task.remove(&task.id).unwrap_or_default();
            task_model_to_detail(&task, &updates)
        })
        .collect();

    Ok(Json(TaskListResponse {
        success: true,
        tasks,
    }))
}

/// Create a new task
///
/// Any actor may create; the actor is recorded as the assigner. Assigning
/// to someone else produces a task_assigned notification.
pub async fn create_task_handler(
    state: &AppState,
    actor: Actor,
    req: CreateTaskRequest,
) -> Result<Json<TaskResponse>> {
    req.validate().map_err(|e| {
        AppError::Validation {
            message: e.to_string(),
        }
    })?;

    let due_date = parse_due_date(&req.due_date)?;
    let priority = match req.priority.as_deref().filter(|p| !p.is_empty()) {
        Some(p) => parse_task_priority(p)?,
        None => TaskPriority::Medium,
    };
    let status = match req.status.as_deref().filter(|s| !s.is_empty()) {
        Some(s) => parse_task_status(s)?,
        None => TaskStatus::Pending,
    };

    EmployeesEntity::find_by_id(&req.assigned_to)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::not_found("Assigned employee not found"))?;

    let now = Utc::now();
    let task = entity::tasks::ActiveModel {
        id: Set(cuid2::create_id()),
        title: Set(req.title.clone()),
        description: Set(req.description.clone()),
        assigned_to: Set(req.assigned_to.clone()),
        assigned_by: Set(actor.id.clone()),
        due_date: Set(due_date),
        priority: Set(priority),
        status: Set(status),
        created_at: Set(now),
        updated_at: Set(now),
    };

    let created = task
        .insert(&state.db)
        .await
        .map_err(|e| AppError::database(format!("Failed to create task: {}", e)))?;

    fanout::persist(&state.db, fanout::task_assigned(&created, &actor.id)).await?;

    info!(task_id = %created.id, assigned_to = %created.assigned_to, actor = %actor.id, "Task created");

    Ok(Json(TaskResponse {
        success: true,
        task:    task_model_to_detail(&created, &[]),
    }))
}

/// Update a task
///
/// The assignee or a manager; absent fields stay unchanged.
pub async fn update_task_handler(
    state: &AppState,
    actor: Actor,
    task_id: &str,
    req: UpdateTaskRequest,
) -> Result<Json<TaskResponse>> {
    req.validate().map_err(|e| {
        AppError::Validation {
            message: e.to_string(),
        }
    })?;

    let task = TasksEntity::find_by_id(task_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::not_found("Task not found"))?;

    if !auth::can_edit_task(&actor, &task) {
        warn!(actor = %actor.id, task_id = %task_id, "Task update denied");
        return Err(AppError::forbidden(
            "You do not have permission to modify this task",
        ));
    }

    let mut active_model: entity::tasks::ActiveModel = task.into();

    if let Some(title) = req.title {
        active_model.title = Set(title);
    }
    if let Some(description) = req.description {
        active_model.description = Set(description);
    }
    if let Some(assigned_to) = req.assigned_to {
        EmployeesEntity::find_by_id(&assigned_to)
            .one(&state.db)
            .await?
            .ok_or_else(|| AppError::not_found("Assigned employee not found"))?;
        active_model.assigned_to = Set(assigned_to);
    }
    if let Some(due_date) = req.due_date {
        active_model.due_date = Set(parse_due_date(&due_date)?);
    }
    if let Some(priority) = req.priority {
        active_model.priority = Set(parse_task_priority(&priority)?);
    }
    if let Some(status) = req.status {
        active_model.status = Set(parse_task_status(&status)?);
    }
    active_model.updated_at = Set(Utc::now());

    let updated = active_model
        .update(&state.db)
        .await
        .map_err(|e| AppError::database(format!("Failed to update task: {}", e)))?;

    info!(task_id = %task_id, actor = %actor.id, "Task updated");

    task_response(state, updated).await
}

/// Delete a task and its progress updates
///
/// The assignee or a manager.
pub async fn delete_task_handler(
    state: &AppState,
    actor: Actor,
    task_id: &str,
) -> Result<Json<SuccessResponse>> {
    let task = TasksEntity::find_by_id(task_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::not_found("Task not found"))?;

    if !auth::can_edit_task(&actor, &task) {
        warn!(actor = %actor.id, task_id = %task_id, "Task delete denied");
        return Err(AppError::forbidden(
            "You do not have permission to delete this task",
        ));
    }

    TaskUpdatesEntity::delete_many()
        .filter(UpdateColumn::TaskId.eq(task_id))
        .exec(&state.db)
        .await
        .map_err(|e| AppError::database(format!("Failed to delete task updates: {}", e)))?;

    TasksEntity::delete_by_id(task_id)
        .exec(&state.db)
        .await
        .map_err(|e| AppError::database(format!("Failed to delete task: {}", e)))?;

    info!(task_id = %task_id, actor = %actor.id, "Task deleted");

    Ok(Json(SuccessResponse::ok()))
}

/// Append a progress update to a task
///
/// Assignee only; managers follow along through the update fanout rather
/// than writing updates themselves.
pub async fn add_task_update_handler(
    state: &AppState,
    actor: Actor,
    task_id: &str,
    req: AddTaskUpdateRequest,
) -> Result<Json<TaskResponse>> {
    req.validate().map_err(|e| {
        AppError::Validation {
            message: e.to_string(),
        }
    })?;

    let task = TasksEntity::find_by_id(task_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::not_found("Task not found"))?;

    if !auth::can_post_task_update(&actor, &task) {
        warn!(actor = %actor.id, task_id = %task_id, "Task update post denied");
        return Err(AppError::forbidden(
            "Only the assignee can post task updates",
        ));
    }

    let now = Utc::now();
    let update = entity::task_updates::ActiveModel {
        id: Set(cuid2::create_id()),
        task_id: Set(task.id.clone()),
        user_id: Set(actor.id.clone()),
        user_name: Set(actor.name.clone()),
        message: Set(req.message.clone()),
        created_at: Set(now),
    };
    update
        .insert(&state.db)
        .await
        .map_err(|e| AppError::database(format!("Failed to add task update: {}", e)))?;

    let mut active_model: entity::tasks::ActiveModel = task.into();
    active_model.updated_at = Set(now);
    let task = active_model
        .update(&state.db)
        .await
        .map_err(|e| AppError::database(format!("Failed to update task: {}", e)))?;

    let managers = EmployeesEntity::find()
        .filter(EmployeeColumn::Role.is_in([Role::Ceo, Role::Director]))
        .all(&state.db)
        .await
        .map_err(|e| AppError::database(format!("Failed to fetch managers: {}", e)))?;

    fanout::persist(
        &state.db,
        fanout::task_update_posted(&task, &actor, &managers),
    )
    .await?;

    info!(task_id = %task.id, actor = %actor.id, "Task update posted");

    task_response(state, task).await
}

/// Build a single-task response with its updates loaded
async fn task_response(state: &AppState, task: entity::tasks::Model) -> Result<Json<TaskResponse>> {
    let updates = TaskUpdatesEntity::find()
        .filter(UpdateColumn::TaskId.eq(&task.id))
        .order_by_asc(UpdateColumn::CreatedAt)
        .order_by_asc(UpdateColumn::Id)
        .all(&state.db)
        .await
        .map_err(|e| AppError::database(format!("Failed to fetch task updates: {}", e)))?;

    Ok(Json(TaskResponse {
        success: true,
        task:    task_model_to_detail(&task, &updates),
    }))
}

/// Parse a `YYYY-MM-DD` due date
fn parse_due_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| AppError::validation("Due date must use the YYYY-MM-DD format"))
}

/// Parse a task status string into the enum
fn parse_task_status(raw: &str) -> Result<TaskStatus> {
    TaskStatus::from_string(raw).ok_or_else(|| {
        AppError::bad_request("Invalid status. Must be one of: pending, in-progress, completed")
    })
}

/// Parse a task priority string into the enum
fn parse_task_priority(raw: &str) -> Result<TaskPriority> {
    TaskPriority::from_string(raw).ok_or_else(|| {
        AppError::bad_request("Invalid priority. Must be one of: low, medium, high")
    })
}

/// Convert a task entity model and its updates to a response DTO
fn task_model_to_detail(
    task: &entity::tasks::Model,
    updates: &[entity::task_updates::Model],
) -> TaskDetail {
    TaskDetail {
        id: task.id.clone(),
        title: task.title.clone(),
        description: task.description.clone(),
        assigned_to: task.assigned_to.clone(),
        assigned_by: task.assigned_by.clone(),
        due_date: task.due_date.to_string(),
        priority: task.priority.to_string(),
        status: task.status.to_string(),
        updates: updates.iter().map(update_model_to_detail).collect(),
        created_at: task.created_at.to_rfc3339(),
        updated_at: task.updated_at.to_rfc3339(),
    }
}

/// Convert a task-update entity model to a response DTO
fn update_model_to_detail(update: &entity::task_updates::Model) -> TaskUpdateDetail {
    TaskUpdateDetail {
        id: update.id.clone(),
        task_id: update.task_id.clone(),
        user_id: update.user_id.clone(),
        user_name: update.user_name.clone(),
        message: update.message.clone(),
        created_at: update.created_at.to_rfc3339(),
    }
}
