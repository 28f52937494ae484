//! # Notification Fanout
//!
//! Every task and lead event expands into zero or more notifications here,
//! in one place, so handlers never hand-roll recipient lists. Draft
//! construction is pure and testable without a database; [`persist`] turns
//! drafts into rows on whatever connection the caller is holding, which
//! lets lead conversion reuse it inside its transaction.

use chrono::Utc;
use entity::notifications::{self, NotificationType};
use entity::{employees, leads, tasks};
use error::Result;
use sea_orm::{ActiveModelTrait, ConnectionTrait, Set};

/// A notification before it is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationDraft {
    /// Category the inbox groups by
    pub notification_type: NotificationType,
    /// Short headline
    pub title:             String,
    /// Human-readable body
    pub message:           String,
    /// Recipient employee ID
    pub user_id:           String,
    /// Originating record, tracked only for deadline notices
    pub related_id:        Option<String>,
}

/// Assignment notice for a newly created task.
///
/// Nothing is produced when the creator assigned the task to themselves.
pub fn task_assigned(task: &tasks::Model, creator_id: &str) -> Vec<NotificationDraft> {
    if task.assigned_to == creator_id {
        return Vec::new();
    }
    vec![NotificationDraft {
        notification_type: NotificationType::TaskAssigned,
        title: "New Task Assigned".to_string(),
        message: format!("You have been assigned a new task: \"{}\"", task.title),
        user_id: task.assigned_to.clone(),
        related_id: None,
    }]
}

/// Fanout for a progress update posted on a task.
///
/// The assigner hears about it unless they wrote it, and so does every
/// manager other than the author. A manager who also assigned the task
/// receives two copies; the original product behaved the same way and the
/// inbox tolerates it.
pub fn task_update_posted(
    task: &tasks::Model,
    actor: &employees::Model,
    managers: &[employees::Model],
) -> Vec<NotificationDraft> {
    let message = format!("{} added an update to task: \"{}\"", actor.name, task.title);
    let mut drafts = Vec::new();

    if task.assigned_by != actor.id {
        drafts.push(NotificationDraft {
            notification_type: NotificationType::TaskAssigned,
            title: "Task Update".to_string(),
            message: message.clone(),
            user_id: task.assigned_by.clone(),
            related_id: None,
        });
    }

    for manager in managers {
        if manager.id == actor.id {
            continue;
        }
        drafts.push(NotificationDraft {
            notification_type: NotificationType::TaskAssigned,
            title: "Task Update".to_string(),
            message: message.clone(),
            user_id: manager.id.clone(),
            related_id: None,
        });
    }

    drafts
}

/// Assignment notice for a newly created lead, when it has an assignee.
pub fn lead_assigned(lead: &leads::Model) -> Vec<NotificationDraft> {
    let Some(assignee) = lead.assignee() else {
        return Vec::new();
    };
    vec![NotificationDraft {
        notification_type: NotificationType::LeadAssigned,
        title: "New Lead Assigned".to_string(),
        message: format!(
            "You have been assigned a new lead: \"{}\" from {}",
            lead.name, lead.company
        ),
        user_id: assignee.to_string(),
        related_id: None,
    }]
}

/// Conversion notice for the converted lead's assignee.
pub fn lead_converted(lead: &leads::Model) -> Vec<NotificationDraft> {
    let Some(assignee) = lead.assignee() else {
        return Vec::new();
    };
    vec![NotificationDraft {
        notification_type: NotificationType::LeadConverted,
        title: "Lead Converted".to_string(),
        message: format!("Lead \"{}\" has been converted to a customer", lead.name),
        user_id: assignee.to_string(),
        related_id: None,
    }]
}

/// Deadline notices for a task due today.
///
/// The assignee always gets one. A managerial viewer who is not the
/// assignee gets a second copy addressed to themselves with the bystander
/// wording. Deadline notices are the only kind carrying `related_id`; the
/// per-day dedup probe in the scan handler keys on it.
pub fn task_deadline(task: &tasks::Model, viewer: &employees::Model) -> Vec<NotificationDraft> {
    let mut drafts = vec![NotificationDraft {
        notification_type: NotificationType::TaskDeadline,
        title: "Task Due Today".to_string(),
        message: format!("Task \"{}\" is due today", task.title),
        user_id: task.assigned_to.clone(),
        related_id: Some(task.id.clone()),
    }];

    if auth::is_manager(&viewer.role) && viewer.id != task.assigned_to {
        drafts.push(NotificationDraft {
            notification_type: NotificationType::TaskDeadline,
            title: "Task Due Today".to_string(),
            message: format!("Task \"{}\" assigned to employee is due today", task.title),
            user_id: viewer.id.clone(),
            related_id: Some(task.id.clone()),
        });
    }

    drafts
}

/// Write drafts as notification rows, returning them in creation order.
pub async fn persist<C>(db: &C, drafts: Vec<NotificationDraft>) -> Result<Vec<notifications::Model>>
where
    C: ConnectionTrait,
{
    let mut created = Vec::with_capacity(drafts.len());
    for draft in drafts {
        let row = notifications::ActiveModel {
            id: Set(cuid2::create_id()),
            notification_type: Set(draft.notification_type),
            title: Set(draft.title),
            message: Set(draft.message),
            user_id: Set(draft.user_id),
            read: Set(false),
            related_id: Set(draft.related_id),
            created_at: Set(Utc::now()),
        };
        created.push(row.insert(db).await?);
    }
    Ok(created)
}
