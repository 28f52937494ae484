//! # Notification Handlers
//!
//! HTTP request handlers for the notification inbox and the deadline
//! scan. The scan is the pull-style replacement for the original client
//! timer: any actor may trigger it, and the per-day probe keeps it
//! idempotent no matter how many viewers run it.

use axum::Json;
use chrono::{Duration, NaiveTime, Utc};
use entity::notifications::{
    Column as NotificationColumn,
    Entity as NotificationsEntity,
    NotificationType,
};
use entity::tasks::{Column as TaskColumn, Entity as TasksEntity, TaskStatus};
use error::{AppError, Result};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set};
use tracing::{info, warn};

use crate::{
    dto::notifications::{
        NotificationDetail,
        NotificationListQuery,
        NotificationListResponse,
        NotificationResponse,
    },
    fanout,
    middleware::Actor,
    AppState,
};

/// List notifications visible to the actor, newest first
///
/// Managers see every inbox; employees only their own. The optional
/// `user_id` filter narrows the result, but an employee naming anyone but
/// themselves is refused.
pub async fn list_notifications_handler(
    state: &AppState,
    actor: Actor,
    query: NotificationListQuery,
) -> Result<Json<NotificationListResponse>> {
    let mut base_query = NotificationsEntity::find();

    if !auth::is_manager(&actor.role) {
        if let Some(ref user_id) = query.user_id {
            if user_id != &actor.id {
                warn!(actor = %actor.id, requested = %user_id, "Notification list denied");
                return Err(AppError::forbidden(
                    "Employees may only view their own notifications",
                ));
            }
        }
        base_query = base_query.filter(NotificationColumn::UserId.eq(&actor.id));
    }
    else if let Some(ref user_id) = query.user_id {
        base_query = base_query.filter(NotificationColumn::UserId.eq(user_id));
    }

    let notifications = base_query
        .order_by_desc(NotificationColumn::CreatedAt)
        .order_by_asc(NotificationColumn::Id)
        .all(&state.db)
        .await
        .map_err(|e| AppError::database(format!("Failed to fetch notifications: {}", e)))?;

    let notifications = notifications.iter().map(notification_model_to_detail).collect();

    Ok(Json(NotificationListResponse {
        success: true,
        notifications,
    }))
}

/// Mark a notification as read
///
/// The recipient or a manager. Marking an already-read notification is a
/// no-op and answers with the unchanged record.
pub async fn mark_notification_read_handler(
    state: &AppState,
    actor: Actor,
    notification_id: &str,
) -> Result<Json<NotificationResponse>> {
    let notification = NotificationsEntity::find_by_id(notification_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::not_found("Notification not found"))?;

    if !auth::can_view_notification(&actor, &notification) {
        warn!(actor = %actor.id, notification_id = %notification_id, "Notification read denied");
        return Err(AppError::forbidden(
            "You do not have permission to modify this notification",
        ));
    }

    let notification = if notification.read {
        notification
    }
    else {
        let mut active_model: entity::notifications::ActiveModel = notification.into();
        active_model.read = Set(true);
        active_model
            .update(&state.db)
            .await
            .map_err(|e| AppError::database(format!("Failed to mark notification read: {}", e)))?
    };

    info!(notification_id = %notification_id, actor = %actor.id, "Notification marked read");

    Ok(Json(NotificationResponse {
        success:      true,
        notification: notification_model_to_detail(&notification),
    }))
}

/// Run the deadline scan as the acting viewer
///
/// Walks every task due today that is not completed and produces the
/// deadline notices for it, unless a notice for that task already exists
/// today. Answers with the notifications created by this run, which is
/// empty on every repeat within the same day.
pub async fn run_deadline_scan_handler(
    state: &AppState,
    actor: Actor,
) -> Result<Json<NotificationListResponse>> {
    let today = Utc::now().date_naive();
    let day_start = today.and_time(NaiveTime::MIN).and_utc();
    let day_end = day_start + Duration::days(1);

    let due_tasks = TasksEntity::find()
        .filter(TaskColumn::DueDate.eq(today))
        .filter(TaskColumn::Status.ne(TaskStatus::Completed))
        .all(&state.db)
        .await
        .map_err(|e| AppError::database(format!("Failed to fetch due tasks: {}", e)))?;

    let mut created = Vec::new();
    for task in &due_tasks {
        // One notice per task per calendar day, across all viewers
        let already_notified = NotificationsEntity::find()
            .filter(NotificationColumn::NotificationType.eq(NotificationType::TaskDeadline))
            .filter(NotificationColumn::RelatedId.eq(&task.id))
            .filter(NotificationColumn::CreatedAt.gte(day_start))
            .filter(NotificationColumn::CreatedAt.lt(day_end))
            .count(&state.db)
            .await
            .map_err(|e| AppError::database(format!("Failed to probe deadline notices: {}", e)))?
            > 0;

        if already_notified {
            continue;
        }

        let drafts = fanout::task_deadline(task, &actor);
        created.extend(fanout::persist(&state.db, drafts).await?);
    }

    info!(
        actor = %actor.id,
        due = due_tasks.len(),
        created = created.len(),
        "Deadline scan completed"
    );

    let notifications = created.iter().map(notification_model_to_detail).collect();

    Ok(Json(NotificationListResponse {
        success: true,
        notifications,
    }))
}

/// Convert a notification entity model to a response DTO
fn notification_model_to_detail(notification: &entity::notifications::Model) -> NotificationDetail {
    NotificationDetail {
        id: notification.id.clone(),
        kind: notification.notification_type.to_string(),
        title: notification.title.clone(),
        message: notification.message.clone(),
        user_id: notification.user_id.clone(),
        read: notification.read,
        related_id: notification.related_id.clone(),
        created_at: notification.created_at.to_rfc3339(),
    }
}
