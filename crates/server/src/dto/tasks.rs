//! # Task Data Transfer Objects
//!
//! Request and response types for task and task-update endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to create a new task
///
/// `due_date` uses the `YYYY-MM-DD` calendar form. `assigned_by` is never
/// taken from the body; the acting employee is recorded as the assigner.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct CreateTaskRequest {
    /// Task title
    #[serde(default)]
    #[validate(length(
        min = 1,
        max = 255,
        message = "Title must be between 1 and 255 characters"
    ))]
    pub title:       String,
    /// Free-form description
    #[serde(default)]
    #[validate(length(max = 2000, message = "Description must not exceed 2000 characters"))]
    pub description: String,
    /// Employee ID of the assignee
    #[serde(default)]
    #[validate(length(min = 1, message = "Assignee is required"))]
    pub assigned_to: String,
    /// Due date in `YYYY-MM-DD` form
    #[serde(default)]
    #[validate(length(min = 1, message = "Due date is required"))]
    pub due_date:    String,
    /// Priority: low, medium, or high; defaults to medium
    pub priority:    Option<String>,
    /// Status: pending, in-progress, or completed; defaults to pending
    pub status:      Option<String>,
}

/// Request to update an existing task; absent fields stay unchanged
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate)]
pub struct UpdateTaskRequest {
    /// Updated title
    #[validate(length(
        min = 1,
        max = 255,
        message = "Title must be between 1 and 255 characters"
    ))]
    pub title:       Option<String>,
    /// Updated description
    #[validate(length(max = 2000, message = "Description must not exceed 2000 characters"))]
    pub description: Option<String>,
    /// Updated assignee employee ID
    #[validate(length(min = 1, message = "Assignee cannot be empty"))]
    pub assigned_to: Option<String>,
    /// Updated due date in `YYYY-MM-DD` form
    pub due_date:    Option<String>,
    /// Updated priority
    pub priority:    Option<String>,
    /// Updated status
    pub status:      Option<String>,
}

/// Request to append a progress update to a task
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct AddTaskUpdateRequest {
    /// Progress note text
    #[serde(default)]
    #[validate(length(
        min = 1,
        max = 2000,
        message = "Update message must be between 1 and 2000 characters"
    ))]
    pub message: String,
}

/// Query parameters for the task list
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskListQuery {
    /// Restrict the list to one assignee
    pub assigned_to: Option<String>,
}

/// Progress note payload embedded in task responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskUpdateDetail {
    /// Update's unique identifier
    pub id:         String,
    /// Owning task ID
    pub task_id:    String,
    /// Author employee ID
    pub user_id:    String,
    /// Author name at the time of writing
    pub user_name:  String,
    /// Progress note text
    pub message:    String,
    /// Creation timestamp
    pub created_at: String,
}

/// Task payload embedded in responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskDetail {
    /// Task's unique identifier
    pub id:          String,
    /// Task title
    pub title:       String,
    /// Free-form description
    pub description: String,
    /// Assignee employee ID
    pub assigned_to: String,
    /// Assigner employee ID
    pub assigned_by: String,
    /// Due date in `YYYY-MM-DD` form
    pub due_date:    String,
    /// Priority name
    pub priority:    String,
    /// Status name
    pub status:      String,
    /// Progress updates, oldest first
    pub updates:     Vec<TaskUpdateDetail>,
    /// Creation timestamp
    pub created_at:  String,
    /// Last update timestamp
    pub updated_at:  String,
}

/// Response for a single task
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// The task record
    pub task:    TaskDetail,
}

/// Response for the task list, ordered by due date
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskListResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Tasks visible to the actor
    pub tasks:   Vec<TaskDetail>,
}
