use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TaskUpdates::Table)
                    .if_not_exists()
                    .col(text(TaskUpdates::Id).primary_key())
                    .col(text(TaskUpdates::TaskId))
                    .col(text(TaskUpdates::UserId))
                    .col(string(TaskUpdates::UserName))
                    .col(text(TaskUpdates::Message))
                    .col(
                        timestamp_with_time_zone(TaskUpdates::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_task_updates_task_id")
                    .table(TaskUpdates::Table)
                    .col(TaskUpdates::TaskId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TaskUpdates::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum TaskUpdates {
    Table,
    Id,
    TaskId,
    UserId,
    UserName,
    Message,
    CreatedAt,
}
