//! Employees Entity
//!
//! Represents company personnel. Every API caller acts as one of these
//! records, and the `role` column drives all authorization decisions.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "employees")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id:          String,
    pub name:        String,
    pub mobile:      String,
    pub role:        Role,
    pub department:  String,
    pub designation: String,
    pub member_id:   String,
    pub created_at:  chrono::DateTime<chrono::Utc>,
    pub updated_at:  chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Employee role enumeration
///
/// CEO and Director are the managerial roles; they see and manage every
/// record. Employee is scoped to records assigned to them.
#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum Role {
    /// Full visibility and management over all records
    #[sea_orm(string_value = "CEO")]
    #[serde(rename = "CEO")]
    Ceo,
    /// Same privileges as CEO
    #[sea_orm(string_value = "Director")]
    #[serde(rename = "Director")]
    Director,
    /// Scoped to own assignments
    #[sea_orm(string_value = "Employee")]
    #[serde(rename = "Employee")]
    Employee,
}

impl Role {
    /// Parse a role from its wire representation
    pub fn from_string(s: &str) -> Option<Self> {
        match s {
            "CEO" => Some(Role::Ceo),
            "Director" => Some(Role::Director),
            "Employee" => Some(Role::Employee),
            _ => None,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Ceo => write!(f, "CEO"),
            Role::Director => write!(f, "Director"),
            Role::Employee => write!(f, "Employee"),
        }
    }
}
