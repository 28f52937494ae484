use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LoginHistory::Table)
                    .if_not_exists()
                    .col(text(LoginHistory::Id).primary_key())
                    .col(string(LoginHistory::Mobile))
                    .col(boolean(LoginHistory::Success))
                    .col(string(LoginHistory::Ip))
                    .col(
                        timestamp_with_time_zone(LoginHistory::Timestamp)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_login_history_timestamp")
                    .table(LoginHistory::Table)
                    .col(LoginHistory::Timestamp)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LoginHistory::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum LoginHistory {
    Table,
    Id,
    Mobile,
    Success,
    Ip,
    Timestamp,
}
