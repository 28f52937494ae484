//! # Access Policy
//!
//! Role-based access decisions for every Keystone record type. Each rule is
//! a pure function over the acting employee and the target record, so the
//! same decision is reachable from handlers and tests without a database.
//!
//! CEO and Director are interchangeable managerial roles. The Employee role
//! is scoped to records naming the actor in `assigned_to` or `user_id`.

use entity::employees::{self, Role};
use entity::{leads, notifications, tasks};

/// True for the managerial roles that see and manage every record.
#[must_use]
pub fn is_manager(role: &Role) -> bool {
    matches!(role, Role::Ceo | Role::Director)
}

/// Task visibility: managers see all tasks, employees only their own.
#[must_use]
pub fn can_view_task(actor: &employees::Model, task: &tasks::Model) -> bool {
    is_manager(&actor.role) || task.assigned_to == actor.id
}

/// Task write permission: the assignee or a manager may update or delete.
#[must_use]
pub fn can_edit_task(actor: &employees::Model, task: &tasks::Model) -> bool {
    is_manager(&actor.role) || task.assigned_to == actor.id
}

/// Task-update authorship: only the assignee posts progress updates.
///
/// Deliberately stricter than [`can_edit_task`]; the assigner reads updates
/// through notifications instead of writing them.
#[must_use]
pub fn can_post_task_update(actor: &employees::Model, task: &tasks::Model) -> bool {
    task.assigned_to == actor.id
}

/// Notification visibility: managers see all, employees only their inbox.
#[must_use]
pub fn can_view_notification(
    actor: &employees::Model,
    notification: &notifications::Model,
) -> bool {
    is_manager(&actor.role) || notification.user_id == actor.id
}

/// Lead write and convert permission: a manager or the lead's assignee.
#[must_use]
pub fn can_manage_lead(actor: &employees::Model, lead: &leads::Model) -> bool {
    is_manager(&actor.role) || lead.assignee() == Some(actor.id.as_str())
}

/// Employee create/update/delete permission: managers only.
#[must_use]
pub fn can_manage_employees(role: &Role) -> bool {
    is_manager(role)
}

/// Login history is an audit surface restricted to managers.
#[must_use]
pub fn can_view_login_history(role: &Role) -> bool {
    is_manager(role)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee(id: &str, role: Role) -> employees::Model {
        employees::Model {
            id: id.to_string(),
            name: format!("Employee {}", id),
            mobile: format!("9{}", id),
            role,
            department: "Engineering".to_string(),
            designation: "Engineer".to_string(),
            member_id: format!("M-{}", id),
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    fn task(assigned_to: &str, assigned_by: &str) -> tasks::Model {
        tasks::Model {
            id: "t1".to_string(),
            title: "Fix printer".to_string(),
            description: "Third floor".to_string(),
            assigned_to: assigned_to.to_string(),
            assigned_by: assigned_by.to_string(),
            due_date: chrono::Utc::now().date_naive(),
            priority: entity::tasks::TaskPriority::Medium,
            status: entity::tasks::TaskStatus::Pending,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_manager_roles() {
        assert!(is_manager(&Role::Ceo));
        assert!(is_manager(&Role::Director));
        assert!(!is_manager(&Role::Employee));
    }

    #[test]
    fn test_task_visibility() {
        let ceo = employee("e1", Role::Ceo);
        let assignee = employee("e2", Role::Employee);
        let bystander = employee("e3", Role::Employee);
        let t = task("e2", "e1");

        assert!(can_view_task(&ceo, &t));
        assert!(can_view_task(&assignee, &t));
        assert!(!can_view_task(&bystander, &t));
    }

    #[test]
    fn test_task_update_authorship_excludes_managers() {
        let ceo = employee("e1", Role::Ceo);
        let assignee = employee("e2", Role::Employee);
        let t = task("e2", "e1");

        assert!(can_edit_task(&ceo, &t));
        assert!(!can_post_task_update(&ceo, &t));
        assert!(can_post_task_update(&assignee, &t));
    }

    #[test]
    fn test_lead_permission_uses_normalized_assignee() {
        let director = employee("e1", Role::Director);
        let assignee = employee("e2", Role::Employee);
        let bystander = employee("e3", Role::Employee);
        let mut lead = leads::Model {
            id: "l1".to_string(),
            name: "Acme Corp".to_string(),
            email: None,
            phone: None,
            company: "Acme".to_string(),
            address: None,
            status: entity::leads::LeadStatus::Warm,
            source: None,
            assigned_to: Some("e2".to_string()),
            notes: None,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        };

        assert!(can_manage_lead(&director, &lead));
        assert!(can_manage_lead(&assignee, &lead));
        assert!(!can_manage_lead(&bystander, &lead));

        // Unassigned leads are manager-only, even via the empty-string form
        lead.assigned_to = Some(String::new());
        assert!(can_manage_lead(&director, &lead));
        assert!(!can_manage_lead(&assignee, &lead));
    }

    #[test]
    fn test_notification_visibility() {
        let ceo = employee("e1", Role::Ceo);
        let recipient = employee("e2", Role::Employee);
        let bystander = employee("e3", Role::Employee);
        let n = notifications::Model {
            id: "n1".to_string(),
            notification_type: entity::notifications::NotificationType::TaskAssigned,
            title: "New Task Assigned".to_string(),
            message: "You have been assigned a new task: \"Fix printer\"".to_string(),
            user_id: "e2".to_string(),
            read: false,
            related_id: Some("t1".to_string()),
            created_at: chrono::Utc::now(),
        };

        assert!(can_view_notification(&ceo, &n));
        assert!(can_view_notification(&recipient, &n));
        assert!(!can_view_notification(&bystander, &n));
    }

    #[test]
    fn test_employee_and_audit_gates() {
        assert!(can_manage_employees(&Role::Ceo));
        assert!(can_manage_employees(&Role::Director));
        assert!(!can_manage_employees(&Role::Employee));

        assert!(can_view_login_history(&Role::Director));
        assert!(!can_view_login_history(&Role::Employee));
    }
}
