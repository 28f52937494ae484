//! Leads Entity
//!
//! Prospective customers in the sales pipeline. A lead may be assigned to
//! an employee and is eventually converted into a customer record.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "leads")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id:          String,
    pub name:        String,
    pub email:       Option<String>,
    pub phone:       Option<String>,
    pub company:     String,
    pub address:     Option<String>,
    pub status:      LeadStatus,
    pub source:      Option<String>,
    pub assigned_to: Option<String>,
    pub notes:       Option<String>,
    pub created_at:  chrono::DateTime<chrono::Utc>,
    pub updated_at:  chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Employee id the lead is assigned to, if any
    ///
    /// Clients submit an empty string for the unassigned state, so both
    /// NULL and "" mean unassigned.
    pub fn assignee(&self) -> Option<&str> {
        match self.assigned_to.as_deref() {
            Some("") | None => None,
            Some(id) => Some(id),
        }
    }
}

/// Lead temperature in the sales pipeline
#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum LeadStatus {
    #[sea_orm(string_value = "cold")]
    #[serde(rename = "cold")]
    Cold,
    #[sea_orm(string_value = "warm")]
    #[serde(rename = "warm")]
    Warm,
    #[sea_orm(string_value = "hot")]
    #[serde(rename = "hot")]
    Hot,
}

impl LeadStatus {
    pub fn from_string(s: &str) -> Option<Self> {
        match s {
            "cold" => Some(LeadStatus::Cold),
            "warm" => Some(LeadStatus::Warm),
            "hot" => Some(LeadStatus::Hot),
            _ => None,
        }
    }
}

impl std::fmt::Display for LeadStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LeadStatus::Cold => write!(f, "cold"),
            LeadStatus::Warm => write!(f, "warm"),
            LeadStatus::Hot => write!(f, "hot"),
        }
    }
}
