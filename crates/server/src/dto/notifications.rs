//! # Notification Data Transfer Objects
//!
//! Response types for the notification inbox and deadline scan.

use serde::{Deserialize, Serialize};

/// Query parameters for the notification list
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NotificationListQuery {
    /// Restrict the list to one recipient
    pub user_id: Option<String>,
}

/// Notification payload embedded in responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationDetail {
    /// Notification's unique identifier
    pub id:         String,
    /// Category name
    #[serde(rename = "type")]
    pub kind:       String,
    /// Short headline
    pub title:      String,
    /// Human-readable body
    pub message:    String,
    /// Recipient employee ID
    pub user_id:    String,
    /// Whether the recipient has read it
    pub read:       bool,
    /// Originating task or lead ID, when tracked
    pub related_id: Option<String>,
    /// Creation timestamp
    pub created_at: String,
}

/// Response for a single notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationResponse {
    /// Whether the operation was successful
    pub success:      bool,
    /// The notification record
    pub notification: NotificationDetail,
}

/// Response for the notification list, newest first
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationListResponse {
    /// Whether the operation was successful
    pub success:       bool,
    /// Notifications visible to the actor
    pub notifications: Vec<NotificationDetail>,
}
