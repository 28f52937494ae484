use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Tasks::Table)
                    .if_not_exists()
                    .col(text(Tasks::Id).primary_key())
                    .col(string(Tasks::Title))
                    .col(text(Tasks::Description))
                    .col(text(Tasks::AssignedTo))
                    .col(text(Tasks::AssignedBy))
                    .col(date(Tasks::DueDate))
                    .col(string(Tasks::Priority))
                    .col(string(Tasks::Status))
                    .col(
                        timestamp_with_time_zone(Tasks::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Tasks::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_tasks_assigned_to")
                    .table(Tasks::Table)
                    .col(Tasks::AssignedTo)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_tasks_due_date")
                    .table(Tasks::Table)
                    .col(Tasks::DueDate)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Tasks::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Tasks {
    Table,
    Id,
    Title,
    Description,
    AssignedTo,
    AssignedBy,
    DueDate,
    Priority,
    Status,
    CreatedAt,
    UpdatedAt,
}
