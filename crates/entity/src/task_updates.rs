//! Task Updates Entity
//!
//! Progress notes appended to a task by its assignee. The author's name is
//! denormalized onto the row so updates stay readable after employee churn.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "task_updates")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id:         String,
    pub task_id:    String,
    pub user_id:    String,
    pub user_name:  String,
    pub message:    String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::tasks::Entity",
        from = "Column::TaskId",
        to = "super::tasks::Column::Id"
    )]
    Tasks,
}

impl Related<super::tasks::Entity> for Entity {
    fn to() -> RelationDef { Relation::Tasks.def() }
}

impl ActiveModelBehavior for ActiveModel {}
