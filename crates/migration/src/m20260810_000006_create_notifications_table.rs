use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Notifications::Table)
                    .if_not_exists()
                    .col(text(Notifications::Id).primary_key())
                    .col(string(Notifications::Type))
                    .col(string(Notifications::Title))
                    .col(text(Notifications::Message))
                    .col(text(Notifications::UserId))
                    .col(boolean(Notifications::Read).default(false))
                    .col(text_null(Notifications::RelatedId))
                    .col(
                        timestamp_with_time_zone(Notifications::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_notifications_user_id")
                    .table(Notifications::Table)
                    .col(Notifications::UserId)
                    .to_owned(),
            )
            .await?;

        // Deadline dedup probes by related task and day
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_notifications_related_id")
                    .table(Notifications::Table)
                    .col(Notifications::RelatedId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Notifications::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Notifications {
    Table,
    Id,
    Type,
    Title,
    Message,
    UserId,
    Read,
    RelatedId,
    CreatedAt,
}
