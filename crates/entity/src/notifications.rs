//! Notifications Entity
//!
//! Per-employee inbox entries produced by assignment, task update, lead
//! conversion, and deadline events. `related_id` points back at the task
//! or lead that triggered the entry.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "notifications")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id:                String,
    #[sea_orm(column_name = "type")]
    pub notification_type: NotificationType,
    pub title:             String,
    pub message:           String,
    pub user_id:           String,
    pub read:              bool,
    pub related_id:        Option<String>,
    pub created_at:        chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Notification category
///
/// Task-update events reuse `task_assigned` with a distinct title rather
/// than introducing a fifth category; consumers key display off the title.
#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum NotificationType {
    #[sea_orm(string_value = "task_assigned")]
    #[serde(rename = "task_assigned")]
    TaskAssigned,
    #[sea_orm(string_value = "task_deadline")]
    #[serde(rename = "task_deadline")]
    TaskDeadline,
    #[sea_orm(string_value = "lead_assigned")]
    #[serde(rename = "lead_assigned")]
    LeadAssigned,
    #[sea_orm(string_value = "lead_converted")]
    #[serde(rename = "lead_converted")]
    LeadConverted,
}

impl NotificationType {
    pub fn from_string(s: &str) -> Option<Self> {
        match s {
            "task_assigned" => Some(NotificationType::TaskAssigned),
            "task_deadline" => Some(NotificationType::TaskDeadline),
            "lead_assigned" => Some(NotificationType::LeadAssigned),
            "lead_converted" => Some(NotificationType::LeadConverted),
            _ => None,
        }
    }
}

impl std::fmt::Display for NotificationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotificationType::TaskAssigned => write!(f, "task_assigned"),
            NotificationType::TaskDeadline => write!(f, "task_deadline"),
            NotificationType::LeadAssigned => write!(f, "lead_assigned"),
            NotificationType::LeadConverted => write!(f, "lead_converted"),
        }
    }
}
